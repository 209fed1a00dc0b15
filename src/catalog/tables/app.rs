//! App services.

use super::{basic_auth, env_lines, mutation, query, redirects, resource_limits, service};
use crate::catalog::ToolSpec;

pub(super) fn tools() -> Vec<ToolSpec> {
    let ps = || service().build();

    vec![
        query("easypanel_app_inspect", "Inspect an app service", "app.inspectService", ps()),
        mutation("easypanel_app_deploy", "Deploy an app service", "app.deployService", ps()),
        mutation("easypanel_app_start", "Start an app service", "app.startService", ps()),
        mutation("easypanel_app_stop", "Stop an app service", "app.stopService", ps()),
        mutation("easypanel_app_restart", "Restart an app service", "app.restartService", ps()),
        mutation("easypanel_app_destroy", "Destroy an app service", "app.destroyService", ps()),
        mutation(
            "easypanel_app_update_env",
            "Update app env vars",
            "app.updateEnv",
            env_lines(service()).build(),
        ),
        mutation(
            "easypanel_app_update_source_image",
            "Update app Docker image source",
            "app.updateSourceImage",
            service()
                .string("image", true)
                .string("username", false)
                .string("password", false)
                .build(),
        ),
        mutation(
            "easypanel_app_update_source_git",
            "Update app Git source",
            "app.updateSourceGit",
            service()
                .string("repository", false)
                .string("branch", false)
                .string("buildPath", false)
                .build(),
        ),
        mutation(
            "easypanel_app_update_source_github",
            "Update app GitHub source",
            "app.updateSourceGithub",
            service()
                .string("owner", false)
                .string("repo", false)
                .string("branch", false)
                .string("buildPath", false)
                .build(),
        ),
        mutation(
            "easypanel_app_update_source_dockerfile",
            "Update app Dockerfile source",
            "app.updateSourceDockerfile",
            service().string("dockerfile", false).build(),
        ),
        mutation("easypanel_app_update_build", "Update app build settings", "app.updateBuild", ps()),
        mutation(
            "easypanel_app_update_deploy",
            "Update app deploy settings",
            "app.updateDeploy",
            service()
                .number("replicas", false)
                .string("command", false)
                .boolean("zeroDowntime", false)
                .build(),
        ),
        mutation(
            "easypanel_app_update_resources",
            "Update app resource limits",
            "app.updateResources",
            resource_limits(service()).build(),
        ),
        mutation(
            "easypanel_app_update_basic_auth",
            "Update app basic auth",
            "app.updateBasicAuth",
            basic_auth(service()).build(),
        ),
        mutation(
            "easypanel_app_update_maintenance",
            "Enable/disable app maintenance mode",
            "app.updateMaintenance",
            service().boolean("enabled", false).build(),
        ),
        mutation(
            "easypanel_app_update_redirects",
            "Update app redirects",
            "app.updateRedirects",
            redirects(service()).build(),
        ),
        query("easypanel_app_get_exposed_ports", "Get app exposed ports", "app.getExposedPorts", ps()),
        mutation(
            "easypanel_app_refresh_deploy_token",
            "Refresh app deploy token",
            "app.refreshDeployToken",
            ps(),
        ),
        mutation(
            "easypanel_app_enable_github_deploy",
            "Enable GitHub deploy for app",
            "app.enableGithubDeploy",
            ps(),
        ),
        mutation(
            "easypanel_app_disable_github_deploy",
            "Disable GitHub deploy for app",
            "app.disableGithubDeploy",
            ps(),
        ),
    ]
}
