use super::{basic_auth, mutation, query, redirects, service};
use crate::catalog::ToolSpec;

pub(super) fn tools() -> Vec<ToolSpec> {
    let ps = || service().build();

    vec![
        query("easypanel_compose_inspect", "Inspect compose service", "compose.inspectService", ps()),
        mutation("easypanel_compose_deploy", "Deploy compose service", "compose.deployService", ps()),
        mutation("easypanel_compose_destroy", "Destroy compose service", "compose.destroyService", ps()),
        mutation("easypanel_compose_start", "Start compose service", "compose.startService", ps()),
        mutation("easypanel_compose_stop", "Stop compose service", "compose.stopService", ps()),
        mutation("easypanel_compose_restart", "Restart compose service", "compose.restartService", ps()),
        mutation(
            "easypanel_compose_update_env",
            "Update compose env vars",
            "compose.updateEnv",
            service().string("env", true).build(),
        ),
        mutation(
            "easypanel_compose_update_source_git",
            "Update compose Git source",
            "compose.updateSourceGit",
            service()
                .string("repository", false)
                .string("branch", false)
                .build(),
        ),
        mutation(
            "easypanel_compose_update_source_inline",
            "Update compose inline source",
            "compose.updateSourceInline",
            service().string("composeFile", false).build(),
        ),
        mutation(
            "easypanel_compose_update_basic_auth",
            "Update compose basic auth",
            "compose.updateBasicAuth",
            basic_auth(service()).build(),
        ),
        mutation(
            "easypanel_compose_update_maintenance",
            "Toggle compose maintenance mode",
            "compose.updateMaintenance",
            service().boolean("enabled", false).build(),
        ),
        mutation(
            "easypanel_compose_update_redirects",
            "Update compose redirects",
            "compose.updateRedirects",
            redirects(service()).build(),
        ),
        query(
            "easypanel_compose_get_docker_services",
            "Get Docker services for compose",
            "compose.getDockerServices",
            ps(),
        ),
        query("easypanel_compose_get_issues", "Get compose issues", "compose.getIssues", ps()),
        mutation(
            "easypanel_compose_refresh_deploy_token",
            "Refresh compose deploy token",
            "compose.refreshDeployToken",
            ps(),
        ),
    ]
}
