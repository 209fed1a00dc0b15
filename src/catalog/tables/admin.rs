//! Notifications, users and per-service metadata.

use super::{mutation, none, query, service};
use crate::catalog::{ToolParameters, ToolSpec};

pub(super) fn tools() -> Vec<ToolSpec> {
    let channel = || ToolParameters::object().string("channelId", true).build();
    let user_id = |required| ToolParameters::object().string("userId", required).build();

    vec![
        query(
            "easypanel_list_notifications",
            "List notification channels",
            "notifications.listNotificationChannels",
            none(),
        ),
        mutation(
            "easypanel_create_notification",
            "Create a notification channel",
            "notifications.createNotificationChannel",
            ToolParameters::object()
                .string("type", true)
                .string("name", true)
                .build(),
        ),
        mutation(
            "easypanel_destroy_notification",
            "Destroy a notification channel",
            "notifications.destroyNotificationChannel",
            channel(),
        ),
        mutation(
            "easypanel_update_notification",
            "Update a notification channel",
            "notifications.updateNotificationChannel",
            ToolParameters::object()
                .string("channelId", true)
                .string("name", false)
                .build(),
        ),
        mutation(
            "easypanel_send_test_notification",
            "Send a test notification",
            "notifications.sendTestNotification",
            channel(),
        ),
        query("easypanel_list_users", "List all users", "users.listUsers", none()),
        mutation(
            "easypanel_create_user",
            "Create a user",
            "users.createUser",
            ToolParameters::object()
                .string("email", true)
                .string("password", true)
                .build(),
        ),
        mutation(
            "easypanel_destroy_user",
            "Destroy a user",
            "users.destroyUser",
            user_id(true),
        ),
        mutation(
            "easypanel_update_user",
            "Update a user",
            "users.updateUser",
            ToolParameters::object()
                .string("userId", true)
                .string("email", false)
                .string("password", false)
                .build(),
        ),
        mutation(
            "easypanel_generate_api_token",
            "Generate API token for a user",
            "users.generateApiToken",
            user_id(false),
        ),
        mutation(
            "easypanel_revoke_api_token",
            "Revoke API token for a user",
            "users.revokeApiToken",
            user_id(false),
        ),
        query(
            "easypanel_get_notes",
            "Get notes for a service",
            "common.getNotes",
            service().build(),
        ),
        mutation(
            "easypanel_set_notes",
            "Set notes for a service",
            "common.setNotes",
            service().string("notes", true).build(),
        ),
        query(
            "easypanel_get_service_error",
            "Get service error",
            "common.getServiceError",
            service().build(),
        ),
        query(
            "easypanel_list_services",
            "List services in a project",
            "common.list",
            ToolParameters::object().string("projectName", true).build(),
        ),
        query(
            "easypanel_list_service_options",
            "List service options",
            "common.listOptions",
            ToolParameters::object().string("projectName", false).build(),
        ),
        mutation(
            "easypanel_rename_service",
            "Rename a service",
            "common.rename",
            service().string("newName", true).build(),
        ),
    ]
}
