//! Panel-wide settings, maintenance, setup, updates, 2FA and licensing.

use super::{mutation, none, query};
use crate::catalog::{ToolParameters, ToolSpec};

fn one_string(field: &str) -> ToolParameters {
    ToolParameters::object().string(field, true).build()
}

/// `(tool, description, procedure)` for queries without input.
const GETTERS: &[(&str, &str, &str)] = &[
    ("easypanel_get_server_ip", "Get server IP", "settings.getServerIp"),
    ("easypanel_get_panel_domain", "Get panel domain", "settings.getPanelDomain"),
    ("easypanel_get_docker_version", "Get Docker version", "settings.getDockerVersion"),
    ("easypanel_get_letsencrypt_email", "Get Let's Encrypt email", "settings.getLetsEncryptEmail"),
    ("easypanel_get_github_token", "Get GitHub token", "settings.getGithubToken"),
    ("easypanel_get_service_domain", "Get default service domain", "settings.getServiceDomain"),
    (
        "easypanel_get_daily_docker_cleanup",
        "Get daily Docker cleanup setting",
        "settings.getDailyDockerCleanup",
    ),
    ("easypanel_get_demo_mode", "Check if demo mode is enabled", "settings.getDemoMode"),
    (
        "easypanel_get_ga_measurement_id",
        "Get Google Analytics measurement ID",
        "settings.getGoogleAnalyticsMeasurementId",
    ),
];

/// `(tool, description, procedure)` for mutations without input.
const ACTIONS: &[(&str, &str, &str)] = &[
    ("easypanel_refresh_server_ip", "Refresh server IP", "settings.refreshServerIp"),
    ("easypanel_check_docker_update", "Check for Docker updates", "settings.checkDockerUpdate"),
    ("easypanel_check_for_updates", "Check for EasyPanel updates", "settings.checkForUpdates"),
    ("easypanel_cleanup_docker_builder", "Cleanup Docker builder cache", "settings.cleanupDockerBuilder"),
    ("easypanel_cleanup_docker_images", "Cleanup unused Docker images", "settings.cleanupDockerImages"),
    ("easypanel_restart_easypanel", "Restart EasyPanel", "settings.restartEasypanel"),
    ("easypanel_system_prune", "Docker system prune", "settings.systemPrune"),
    ("easypanel_server_reboot", "Reboot the server", "server.reboot"),
];

pub(super) fn tools() -> Vec<ToolSpec> {
    let mut tools: Vec<ToolSpec> = GETTERS
        .iter()
        .map(|&(name, description, procedure)| query(name, description, procedure, none()))
        .collect();

    tools.extend([
        mutation(
            "easypanel_set_panel_domain",
            "Set panel domain",
            "settings.setPanelDomain",
            one_string("domain"),
        ),
        mutation(
            "easypanel_set_letsencrypt_email",
            "Set Let's Encrypt email",
            "settings.setLetsEncryptEmail",
            one_string("email"),
        ),
        mutation(
            "easypanel_set_github_token",
            "Set GitHub token",
            "settings.setGithubToken",
            one_string("token"),
        ),
        mutation(
            "easypanel_set_service_domain",
            "Set default service domain",
            "settings.setServiceDomain",
            one_string("domain"),
        ),
        mutation(
            "easypanel_set_daily_docker_cleanup",
            "Set daily Docker cleanup",
            "settings.setDailyDockerCleanup",
            ToolParameters::object().boolean("enabled", true).build(),
        ),
        mutation(
            "easypanel_set_ga_measurement_id",
            "Set Google Analytics measurement ID",
            "settings.setGoogleAnalyticsMeasurementId",
            one_string("measurementId"),
        ),
        mutation(
            "easypanel_change_credentials",
            "Change admin credentials",
            "settings.changeCredentials",
            ToolParameters::object()
                .string("email", false)
                .string("password", false)
                .build(),
        ),
    ]);

    tools.extend(
        ACTIONS
            .iter()
            .map(|&(name, description, procedure)| mutation(name, description, procedure, none())),
    );

    tools.extend([
        query("easypanel_setup_get_status", "Get setup status", "setup.getStatus", none()),
        mutation(
            "easypanel_setup",
            "Run initial setup",
            "setup.setup",
            ToolParameters::object()
                .string("email", true)
                .string("password", true)
                .build(),
        ),
        query("easypanel_update_get_status", "Get update status", "update.getStatus", none()),
        mutation("easypanel_update", "Run EasyPanel update", "update.update", none()),
        mutation("easypanel_2fa_configure", "Configure 2FA", "twoFactor.configure", none()),
        mutation("easypanel_2fa_enable", "Enable 2FA", "twoFactor.enable", one_string("code")),
        mutation("easypanel_2fa_disable", "Disable 2FA", "twoFactor.disable", one_string("code")),
        query(
            "easypanel_lemon_get_license",
            "Get Lemon license payload",
            "lemonLicense.getLicensePayload",
            none(),
        ),
        mutation(
            "easypanel_lemon_activate",
            "Activate Lemon license",
            "lemonLicense.activate",
            one_string("licenseKey"),
        ),
        mutation(
            "easypanel_lemon_activate_by_order",
            "Activate Lemon license by order",
            "lemonLicense.activateByOrder",
            one_string("orderId"),
        ),
        mutation(
            "easypanel_lemon_deactivate",
            "Deactivate Lemon license",
            "lemonLicense.deactivate",
            none(),
        ),
        query(
            "easypanel_portal_get_license",
            "Get Portal license payload",
            "portalLicense.getLicensePayload",
            none(),
        ),
        mutation(
            "easypanel_portal_activate",
            "Activate Portal license",
            "portalLicense.activate",
            one_string("licenseKey"),
        ),
        mutation(
            "easypanel_portal_deactivate",
            "Deactivate Portal license",
            "portalLicense.deactivate",
            none(),
        ),
    ]);

    tools
}
