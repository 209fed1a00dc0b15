//! WordPress services: lifecycle, site settings and WP-CLI style operations.

use super::{basic_auth, mutation, query, service, ParameterBuilder};
use crate::catalog::ToolSpec;
use crate::client::CallKind;

/// `(tool suffix, description, procedure, kind)` for tools that take only
/// the service address.
const SERVICE_ONLY: &[(&str, &str, &str, CallKind)] = &[
    ("inspect", "Inspect WordPress service", "inspectService", CallKind::Query),
    ("destroy", "Destroy WordPress service", "destroyService", CallKind::Mutation),
    ("start", "Start WordPress service", "startService", CallKind::Mutation),
    ("stop", "Stop WordPress service", "stopService", CallKind::Mutation),
    ("restart", "Restart WordPress service", "restartService", CallKind::Mutation),
    (
        "rebuild_docker_image",
        "Rebuild WordPress Docker image",
        "rebuildDockerImage",
        CallKind::Mutation,
    ),
    ("update_redirects", "Update WordPress redirects", "updateRedirects", CallKind::Mutation),
    ("update_php", "Update WordPress PHP settings", "updatePhp", CallKind::Mutation),
    ("update_nginx", "Update WordPress Nginx config", "updateNginx", CallKind::Mutation),
    ("update_ide", "Update WordPress IDE settings", "updateIde", CallKind::Mutation),
    ("update_git_config", "Update WordPress Git config", "updateGitConfig", CallKind::Mutation),
    ("update_scripts", "Update WordPress scripts", "updateScripts", CallKind::Mutation),
    ("update_wp_config", "Update wp-config.php", "updateWpConfig", CallKind::Mutation),
    ("update_wp_core", "Update WordPress core", "updateWpCore", CallKind::Mutation),
    ("get_wp_config", "Get wp-config.php", "getWpConfig", CallKind::Query),
    ("get_plugins", "Get WordPress plugins", "getPlugins", CallKind::Query),
    ("get_themes", "Get WordPress themes", "getThemes", CallKind::Query),
    ("get_users", "Get WordPress users", "getUsers", CallKind::Query),
    ("get_roles", "Get WordPress roles", "getRoles", CallKind::Query),
    ("get_options", "Get WordPress options", "getOptions", CallKind::Query),
    ("get_profile", "Get WordPress profile", "getProfile", CallKind::Query),
    (
        "get_maintenance_mode",
        "Get WordPress maintenance mode",
        "getMaintenanceMode",
        CallKind::Query,
    ),
    ("flush_cache", "Flush WordPress cache", "flushCache", CallKind::Mutation),
    ("db_optimize", "Optimize WordPress database", "dbOptimize", CallKind::Mutation),
    ("delete_transient", "Delete WordPress transients", "deleteTransient", CallKind::Mutation),
    (
        "media_regenerate",
        "Regenerate WordPress media thumbnails",
        "mediaRegenerate",
        CallKind::Mutation,
    ),
];

fn wp(
    suffix: &str,
    description: &str,
    procedure: &str,
    kind: CallKind,
    params: ParameterBuilder,
) -> ToolSpec {
    let name = format!("easypanel_wp_{suffix}");
    let procedure = format!("wordpress.{procedure}");
    match kind {
        CallKind::Query => query(name, description, procedure, params.build()),
        CallKind::Mutation => mutation(name, description, procedure, params.build()),
    }
}

/// Service address plus optional string fields.
fn with_optional(fields: &[&str]) -> ParameterBuilder {
    fields
        .iter()
        .fold(service(), |builder, field| builder.string(field, false))
}

fn search_replace() -> ParameterBuilder {
    service().string("search", true).string("replace", true)
}

pub(super) fn tools() -> Vec<ToolSpec> {
    use CallKind::{Mutation, Query};

    let mut tools: Vec<ToolSpec> = SERVICE_ONLY
        .iter()
        .map(|&(suffix, description, procedure, kind)| {
            wp(suffix, description, procedure, kind, service())
        })
        .collect();

    tools.extend([
        wp(
            "git_clone",
            "Clone Git repo into WordPress",
            "gitClone",
            Mutation,
            with_optional(&["repository"]),
        ),
        wp(
            "run_script",
            "Run a script in WordPress",
            "runScript",
            Mutation,
            with_optional(&["script"]),
        ),
        wp(
            "update_env",
            "Update WordPress env vars",
            "updateEnv",
            Mutation,
            service().string("env", true),
        ),
        wp(
            "update_basic_auth",
            "Update WordPress basic auth",
            "updateBasicAuth",
            Mutation,
            basic_auth(service()),
        ),
        wp(
            "update_resources",
            "Update WordPress resource limits",
            "updateResources",
            Mutation,
            service()
                .number("memoryLimit", false)
                .number("cpuLimit", false),
        ),
        wp(
            "search_plugin",
            "Search WordPress plugins",
            "searchPlugin",
            Query,
            service().string("query", true),
        ),
        wp(
            "install_plugin",
            "Install WordPress plugin",
            "installPlugin",
            Mutation,
            with_optional(&["slug"]),
        ),
        wp(
            "activate_plugin",
            "Activate WordPress plugin",
            "activatePlugin",
            Mutation,
            with_optional(&["plugin"]),
        ),
        wp(
            "deactivate_plugin",
            "Deactivate WordPress plugin",
            "deactivatePlugin",
            Mutation,
            with_optional(&["plugin"]),
        ),
        wp(
            "search_theme",
            "Search WordPress themes",
            "searchTheme",
            Query,
            service().string("query", true),
        ),
        wp(
            "install_theme",
            "Install WordPress theme",
            "installTheme",
            Mutation,
            with_optional(&["slug"]),
        ),
        wp(
            "activate_theme",
            "Activate WordPress theme",
            "activateTheme",
            Mutation,
            with_optional(&["theme"]),
        ),
        wp(
            "create_user",
            "Create WordPress user",
            "createUser",
            Mutation,
            with_optional(&["username", "email", "password", "role"]),
        ),
        wp(
            "update_user",
            "Update WordPress user",
            "updateUser",
            Mutation,
            with_optional(&["userId"]),
        ),
        wp(
            "delete_user",
            "Delete WordPress user",
            "deleteUser",
            Mutation,
            with_optional(&["userId"]),
        ),
        wp(
            "create_role",
            "Create WordPress role",
            "createRole",
            Mutation,
            with_optional(&["name"]),
        ),
        wp(
            "delete_role",
            "Delete WordPress role",
            "deleteRole",
            Mutation,
            with_optional(&["role"]),
        ),
        wp(
            "create_option",
            "Create WordPress option",
            "createOption",
            Mutation,
            with_optional(&["key", "value"]),
        ),
        wp(
            "update_option",
            "Update WordPress option",
            "updateOption",
            Mutation,
            with_optional(&["key", "value"]),
        ),
        wp(
            "delete_option",
            "Delete WordPress option",
            "deleteOption",
            Mutation,
            with_optional(&["key"]),
        ),
        wp(
            "update_maintenance_mode",
            "Update WordPress maintenance mode",
            "updateMaintenanceMode",
            Mutation,
            service().boolean("enabled", false),
        ),
        wp(
            "search_replace",
            "WordPress search & replace in DB",
            "searchReplace",
            Mutation,
            search_replace(),
        ),
        wp(
            "search_replace_dry_run",
            "WordPress search & replace dry run",
            "searchReplaceDryRun",
            Mutation,
            search_replace(),
        ),
    ]);

    tools
}
