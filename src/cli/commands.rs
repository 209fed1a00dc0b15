//! Handlers for the `serve`, `tools` and `call` commands.

use serde_json::Value;

use super::{CallArgs, ServeArgs, ToolsArgs};
use crate::catalog::{ToolAction, ToolCatalog};
use crate::client::PanelClient;
use crate::config::ServerConfig;
use crate::error::{PanelError, Result};

/// Handle `easypanel-mcp serve`.
pub async fn handle_serve(args: &ServeArgs) -> Result<()> {
    let config = ServerConfig::from_env_with(args.overrides())?;
    tracing::debug!(?config, "resolved configuration");
    crate::server::serve(config).await
}

/// Handle `easypanel-mcp tools`: one line per tool with its call kind.
pub fn handle_tools(args: &ToolsArgs) -> Result<()> {
    let catalog = ToolCatalog::new(args.access_mode);
    for tool in catalog.tools() {
        let kind = match &tool.action {
            ToolAction::Procedure { kind, .. } => kind.to_string(),
            ToolAction::Login => "login".to_string(),
            ToolAction::Raw => "raw".to_string(),
        };
        println!("{:<48} {:<8} {}", tool.name, kind, tool.description);
    }
    eprintln!("{} tools ({} access)", catalog.len(), catalog.access_mode());
    Ok(())
}

/// Handle `easypanel-mcp call <tool>`.
pub async fn handle_call(args: &CallArgs) -> Result<()> {
    let arguments = parse_arguments(args.args.as_deref())?;
    let config = ServerConfig::from_env_with(args.panel.overrides())?;
    let client = PanelClient::new(config.panel_url, config.panel_token);
    let catalog = ToolCatalog::new(config.access_mode);

    let value = catalog.invoke(&client, &args.tool, arguments).await?;
    match value {
        Value::String(text) => println!("{text}"),
        other => println!(
            "{}",
            serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string())
        ),
    }
    Ok(())
}

fn parse_arguments(raw: Option<&str>) -> Result<Value> {
    let Some(raw) = raw else {
        return Ok(Value::Null);
    };
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| PanelError::InvalidArgument(format!("--args is not valid JSON: {err}")))?;
    if !value.is_object() {
        return Err(PanelError::InvalidArgument(
            "--args must be a JSON object".into(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_args_mean_no_input() {
        assert_eq!(parse_arguments(None).unwrap(), Value::Null);
    }

    #[test]
    fn args_must_be_an_object() {
        assert_eq!(
            parse_arguments(Some(r#"{"projectName":"shop"}"#)).unwrap(),
            json!({ "projectName": "shop" })
        );
        assert!(matches!(
            parse_arguments(Some("[1]")),
            Err(PanelError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_arguments(Some("{oops")),
            Err(PanelError::InvalidArgument(msg)) if msg.contains("not valid JSON")
        ));
    }
}
