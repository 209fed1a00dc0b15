//! Command-line interface for the EasyPanel MCP server.

pub mod commands;

use clap::{Args, Parser, Subcommand};

use crate::config::{AccessMode, ConfigOverrides, TransportMode};

/// EasyPanel MCP server
#[derive(Parser, Debug)]
#[command(
    name = "easypanel-mcp",
    version,
    about = "MCP server exposing the EasyPanel tRPC API as tools"
)]
pub struct Cli {
    /// Defaults to `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server (stdio or HTTP)
    Serve(ServeArgs),
    /// List the tools the server would offer
    Tools(ToolsArgs),
    /// Invoke one tool and print its result
    Call(CallArgs),
}

/// Panel connection flags shared by `serve` and `call`.
#[derive(Args, Debug, Clone, Default)]
pub struct PanelArgs {
    /// Panel base URL (overrides EASYPANEL_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Panel API token (overrides EASYPANEL_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Access mode (overrides EASYPANEL_ACCESS_MODE)
    #[arg(long, value_enum)]
    pub access_mode: Option<AccessMode>,
}

impl PanelArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            panel_url: self.url.clone(),
            panel_token: self.token.clone(),
            access_mode: self.access_mode,
            ..Default::default()
        }
    }
}

/// Arguments for `easypanel-mcp serve`.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub panel: PanelArgs,

    /// Transport (overrides EASYPANEL_MCP_MODE)
    #[arg(long, value_enum)]
    pub transport: Option<TransportMode>,

    /// HTTP bind host (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// HTTP bind port (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Key required on the HTTP endpoint (overrides MCP_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

impl ServeArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            transport: self.transport,
            host: self.host.clone(),
            port: self.port,
            api_key: self.api_key.clone(),
            ..self.panel.overrides()
        }
    }
}

/// Arguments for `easypanel-mcp tools`.
#[derive(Args, Debug, Clone, Default)]
pub struct ToolsArgs {
    /// Show the tool set for this access mode
    #[arg(long, value_enum, default_value_t = AccessMode::Full)]
    pub access_mode: AccessMode,
}

/// Arguments for `easypanel-mcp call`.
#[derive(Args, Debug, Clone)]
pub struct CallArgs {
    #[command(flatten)]
    pub panel: PanelArgs,

    /// Tool name, e.g. easypanel_list_projects
    pub tool: String,

    /// Tool arguments as a JSON object
    #[arg(long)]
    pub args: Option<String>,
}
