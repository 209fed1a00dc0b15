//! Box (dev environment) services.

use super::{basic_auth, mutation, none, query, service};
use crate::catalog::ToolSpec;

/// Settings updates that take only the service address.
const SERVICE_UPDATES: &[(&str, &str, &str)] = &[
    ("update_redirects", "Update box redirects", "updateRedirects"),
    ("update_advanced", "Update box advanced settings", "updateAdvanced"),
    ("update_git_config", "Update box Git config", "updateGitConfig"),
    ("update_ide", "Update box IDE settings", "updateIde"),
    ("update_modules", "Update box modules", "updateModules"),
    ("update_nginx", "Update box Nginx config", "updateNginx"),
    ("update_nodejs", "Update box Node.js settings", "updateNodejs"),
    ("update_php", "Update box PHP settings", "updatePhp"),
    ("update_processes", "Update box processes", "updateProcesses"),
    ("update_python", "Update box Python settings", "updatePython"),
    ("update_ruby", "Update box Ruby settings", "updateRuby"),
    ("update_scripts", "Update box scripts", "updateScripts"),
];

pub(super) fn tools() -> Vec<ToolSpec> {
    let ps = || service().build();

    let mut tools = vec![
        query("easypanel_box_inspect", "Inspect a box/dev environment", "box.inspectService", ps()),
        mutation("easypanel_box_destroy", "Destroy a box", "box.destroyService", ps()),
        mutation("easypanel_box_start", "Start a box", "box.startService", ps()),
        mutation("easypanel_box_stop", "Stop a box", "box.stopService", ps()),
        mutation("easypanel_box_restart", "Restart a box", "box.restartService", ps()),
        mutation("easypanel_box_init", "Initialize a box service", "box.initService", ps()),
        mutation(
            "easypanel_box_git_clone",
            "Clone a Git repo into a box",
            "box.gitClone",
            service().string("repository", false).build(),
        ),
        query("easypanel_box_list_presets", "List box presets", "box.listPresets", none()),
        mutation(
            "easypanel_box_load_preset",
            "Load a preset into a box",
            "box.loadPreset",
            service().string("preset", false).build(),
        ),
        mutation(
            "easypanel_box_rebuild_docker_image",
            "Rebuild box Docker image",
            "box.rebuildDockerImage",
            ps(),
        ),
        mutation(
            "easypanel_box_refresh_deploy_token",
            "Refresh box deploy token",
            "box.refreshDeployToken",
            ps(),
        ),
        mutation(
            "easypanel_box_run_deploy_script",
            "Run box deploy script",
            "box.runDeployScript",
            ps(),
        ),
        mutation(
            "easypanel_box_run_script",
            "Run a script in box",
            "box.runScript",
            service().string("script", false).build(),
        ),
        mutation(
            "easypanel_box_update_env",
            "Update box env vars",
            "box.updateEnv",
            service().string("env", true).build(),
        ),
        mutation(
            "easypanel_box_update_basic_auth",
            "Update box basic auth",
            "box.updateBasicAuth",
            basic_auth(service()).build(),
        ),
        mutation(
            "easypanel_box_update_resources",
            "Update box resource limits",
            "box.updateResources",
            service()
                .number("memoryLimit", false)
                .number("cpuLimit", false)
                .build(),
        ),
        mutation(
            "easypanel_box_update_deploy_script",
            "Update box deploy script",
            "box.updateDeployScript",
            service().string("script", false).build(),
        ),
    ];

    tools.extend(SERVICE_UPDATES.iter().map(|&(suffix, description, procedure)| {
        mutation(
            format!("easypanel_box_{suffix}"),
            description,
            format!("box.{procedure}"),
            ps(),
        )
    }));

    tools
}
