//! Session tools. Login goes through the bridge so the token is kept.

use super::{mutation, none, query};
use crate::catalog::{ToolAction, ToolParameters, ToolSpec, LOGIN_TOOL};

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            LOGIN_TOOL,
            "Login to EasyPanel and get auth token",
            ToolParameters::object()
                .string("email", true)
                .string("password", true)
                .build(),
            ToolAction::Login,
        ),
        mutation("easypanel_logout", "Logout from EasyPanel", "auth.logout", none()),
        query("easypanel_get_session", "Get current session info", "auth.getSession", none()),
        query("easypanel_get_user", "Get current user info", "auth.getUser", none()),
    ]
}
