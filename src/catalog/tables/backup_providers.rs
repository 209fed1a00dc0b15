use super::mutation;
use crate::catalog::{ToolParameters, ToolSpec};

const PROVIDERS: [&str; 5] = ["dropbox", "google", "ftp", "sftp", "local"];

/// Providers authorised through OAuth can also be disconnected.
fn supports_disconnect(provider: &str) -> bool {
    matches!(provider, "dropbox" | "google")
}

pub(super) fn tools() -> Vec<ToolSpec> {
    let provider_id = || ToolParameters::object().string("providerId", false).build();
    let mut tools = Vec::new();

    for provider in PROVIDERS {
        tools.push(mutation(
            format!("easypanel_{provider}_create_provider"),
            format!("Create {provider} backup provider"),
            format!("{provider}.createProvider"),
            ToolParameters::object().string("name", false).build(),
        ));
        tools.push(mutation(
            format!("easypanel_{provider}_delete_provider"),
            format!("Delete {provider} backup provider"),
            format!("{provider}.deleteProvider"),
            provider_id(),
        ));
        tools.push(mutation(
            format!("easypanel_{provider}_update_provider"),
            format!("Update {provider} backup provider"),
            format!("{provider}.updateProvider"),
            provider_id(),
        ));
        if supports_disconnect(provider) {
            tools.push(mutation(
                format!("easypanel_{provider}_disconnect_provider"),
                format!("Disconnect {provider} backup provider"),
                format!("{provider}.disconnectProvider"),
                provider_id(),
            ));
        }
    }

    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_oauth_providers_can_disconnect() {
        let names: Vec<String> = tools().into_iter().map(|tool| tool.name).collect();
        assert!(names.contains(&"easypanel_google_disconnect_provider".to_string()));
        assert!(!names.contains(&"easypanel_sftp_disconnect_provider".to_string()));
        assert_eq!(names.len(), 5 * 3 + 2);
    }
}
