//! Tool catalog: a static table mapping tool names to panel procedures.
//!
//! Each [`ToolSpec`] carries the tool's name, description, input schema and
//! the [`ToolAction`] it performs. [`ToolCatalog::invoke`] validates the
//! arguments, enforces the access mode and forwards the call to a
//! [`PanelRpc`] implementation (normally [`PanelClient`]).

pub mod schema;
pub mod tables;
pub mod validation;

pub use schema::{ParameterBuilder, ToolParameters};

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::{CallKind, JsonObject, PanelClient};
use crate::config::AccessMode;
use crate::error::{PanelError, Result};

/// Name of the escape-hatch tool that calls any procedure.
pub const RAW_TOOL: &str = "easypanel_trpc_raw";

/// Name of the tool that logs in and stores the session token.
pub const LOGIN_TOOL: &str = "easypanel_login";

/// The three bridge entry points the catalog relies on.
#[async_trait]
pub trait PanelRpc: Send + Sync {
    async fn login(&self, identifier: &str, secret: &str) -> Result<String>;
    async fn query(&self, procedure: &str, input: Option<&JsonObject>) -> Result<Value>;
    async fn mutation(&self, procedure: &str, input: &JsonObject) -> Result<Value>;
}

#[async_trait]
impl PanelRpc for PanelClient {
    async fn login(&self, identifier: &str, secret: &str) -> Result<String> {
        PanelClient::login(self, identifier, secret).await
    }

    async fn query(&self, procedure: &str, input: Option<&JsonObject>) -> Result<Value> {
        PanelClient::query(self, procedure, input).await
    }

    async fn mutation(&self, procedure: &str, input: &JsonObject) -> Result<Value> {
        PanelClient::mutation(self, procedure, input).await
    }
}

/// What a tool does when invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolAction {
    /// Call one fixed procedure.
    Procedure { procedure: String, kind: CallKind },
    /// Log in with `email`/`password` and keep the token.
    Login,
    /// Call the procedure named in the arguments.
    Raw,
}

/// A single catalog entry.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: ToolParameters,
    pub action: ToolAction,
}

impl ToolSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ToolParameters,
        action: ToolAction,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            action,
        }
    }

    /// Tool bound to a single procedure.
    pub fn procedure(
        name: impl Into<String>,
        description: impl Into<String>,
        procedure: impl Into<String>,
        kind: CallKind,
        parameters: ToolParameters,
    ) -> Self {
        Self::new(
            name,
            description,
            parameters,
            ToolAction::Procedure {
                procedure: procedure.into(),
                kind,
            },
        )
    }

    /// Call kind for procedure-bound tools.
    pub fn kind(&self) -> Option<CallKind> {
        match &self.action {
            ToolAction::Procedure { kind, .. } => Some(*kind),
            ToolAction::Login | ToolAction::Raw => None,
        }
    }

    pub fn is_mutation(&self) -> bool {
        self.kind() == Some(CallKind::Mutation)
    }
}

/// Lookup table from tool name to [`ToolSpec`].
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<ToolSpec>,
    index: HashMap<String, usize>,
    access_mode: AccessMode,
}

impl ToolCatalog {
    /// Full panel catalog.
    pub fn new(access_mode: AccessMode) -> Self {
        Self::from_tools(tables::all_tools(), access_mode)
    }

    /// Catalog over an explicit tool list. On duplicate names the first entry wins.
    pub fn from_tools(tools: Vec<ToolSpec>, access_mode: AccessMode) -> Self {
        let mut index = HashMap::with_capacity(tools.len());
        for (position, tool) in tools.iter().enumerate() {
            index.entry(tool.name.clone()).or_insert(position);
        }
        Self {
            tools,
            index,
            access_mode,
        }
    }

    pub fn access_mode(&self) -> AccessMode {
        self.access_mode
    }

    /// Look up a tool, visible or not.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    /// Whether `tool` is offered under the current access mode.
    pub fn is_visible(&self, tool: &ToolSpec) -> bool {
        self.access_mode.allows_mutations() || !tool.is_mutation()
    }

    /// Tools offered under the current access mode, in table order.
    pub fn tools(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter().filter(|tool| self.is_visible(tool))
    }

    /// Number of offered tools.
    pub fn len(&self) -> usize {
        self.tools().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke a tool by name.
    pub async fn invoke(&self, rpc: &dyn PanelRpc, name: &str, arguments: Value) -> Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| PanelError::UnknownTool(name.to_string()))?;

        let arguments = match arguments {
            Value::Null => Value::Object(JsonObject::new()),
            other => other,
        };
        validation::validate_arguments(&arguments, &tool.parameters.schema)
            .map_err(|message| PanelError::InvalidArgument(format!("{name}: {message}")))?;
        let args = tool.parameters.retain_declared(arguments);

        match &tool.action {
            ToolAction::Procedure { procedure, kind } => {
                if *kind == CallKind::Mutation {
                    self.ensure_mutations_allowed(name)?;
                }
                tracing::debug!(tool = name, procedure = %procedure, kind = %kind, "calling panel procedure");
                match kind {
                    CallKind::Query => {
                        let input = (!tool.parameters.is_empty()).then_some(&args);
                        rpc.query(procedure, input).await
                    }
                    CallKind::Mutation => rpc.mutation(procedure, &args).await,
                }
            }
            ToolAction::Login => {
                let email = required_str(name, &args, "email")?;
                let password = required_str(name, &args, "password")?;
                let token = rpc.login(email, password).await?;
                tracing::info!("panel login succeeded; session token replaced");
                Ok(Value::String(format!("Logged in. Token: {token}")))
            }
            ToolAction::Raw => self.invoke_raw(rpc, name, &args).await,
        }
    }

    async fn invoke_raw(&self, rpc: &dyn PanelRpc, name: &str, args: &JsonObject) -> Result<Value> {
        let procedure = required_str(name, args, "procedure")?;
        let input = args.get("input").and_then(Value::as_object);
        let is_mutation = args
            .get("isMutation")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if is_mutation {
            self.ensure_mutations_allowed(name)?;
            tracing::debug!(tool = name, procedure, kind = %CallKind::Mutation, "calling raw procedure");
            match input {
                Some(input) => rpc.mutation(procedure, input).await,
                None => rpc.mutation(procedure, &JsonObject::new()).await,
            }
        } else {
            tracing::debug!(tool = name, procedure, kind = %CallKind::Query, "calling raw procedure");
            rpc.query(procedure, input).await
        }
    }

    fn ensure_mutations_allowed(&self, name: &str) -> Result<()> {
        if self.access_mode.allows_mutations() {
            return Ok(());
        }
        tracing::warn!(tool = name, "mutation rejected in read-only access mode");
        Err(PanelError::ReadOnly(name.to_string()))
    }
}

fn required_str<'a>(tool: &str, args: &'a JsonObject, field: &str) -> Result<&'a str> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| PanelError::InvalidArgument(format!("{tool}: missing string field '{field}'")))
}
