//! Per-namespace tool tables.

mod admin;
mod app;
mod auth;
mod backup_providers;
mod backups;
mod boxes;
mod branding;
mod cloudflare;
mod compose;
mod databases;
mod domains;
mod infrastructure;
mod monitor;
mod projects;
mod settings;
mod wordpress;

use super::{ParameterBuilder, ToolAction, ToolParameters, ToolSpec, RAW_TOOL};
use crate::client::CallKind;

/// Every tool the server offers, in registration order.
pub fn all_tools() -> Vec<ToolSpec> {
    let tables: [fn() -> Vec<ToolSpec>; 16] = [
        projects::tools,
        app::tools,
        auth::tools,
        databases::tools,
        domains::tools,
        monitor::tools,
        settings::tools,
        compose::tools,
        boxes::tools,
        wordpress::tools,
        infrastructure::tools,
        cloudflare::tools,
        branding::tools,
        backups::tools,
        backup_providers::tools,
        admin::tools,
    ];

    let mut tools: Vec<ToolSpec> = tables.iter().flat_map(|table| table()).collect();
    tools.push(raw_tool());
    tools
}

fn raw_tool() -> ToolSpec {
    ToolSpec::new(
        RAW_TOOL,
        "Call any EasyPanel tRPC procedure directly. 347 procedures available across 43 namespaces.",
        ToolParameters::object()
            .string("procedure", true)
            .describe("procedure", "tRPC procedure (e.g. 'projects.listProjects')")
            .object("input", false)
            .describe("input", "Input object")
            .boolean("isMutation", false)
            .describe("isMutation", "true for mutations, false for queries (default)")
            .build(),
        ToolAction::Raw,
    )
}

pub(crate) fn query(
    name: impl Into<String>,
    description: impl Into<String>,
    procedure: impl Into<String>,
    parameters: ToolParameters,
) -> ToolSpec {
    ToolSpec::procedure(name, description, procedure, CallKind::Query, parameters)
}

pub(crate) fn mutation(
    name: impl Into<String>,
    description: impl Into<String>,
    procedure: impl Into<String>,
    parameters: ToolParameters,
) -> ToolSpec {
    ToolSpec::procedure(name, description, procedure, CallKind::Mutation, parameters)
}

pub(crate) fn none() -> ToolParameters {
    ToolParameters::empty()
}

/// `projectName` + `serviceName`, the address of a service.
pub(crate) fn service() -> ParameterBuilder {
    ToolParameters::object()
        .string("projectName", true)
        .describe("projectName", "Project name")
        .string("serviceName", true)
        .describe("serviceName", "Service name")
}

/// Optional memory/CPU limits and reservations.
pub(crate) fn resource_limits(builder: ParameterBuilder) -> ParameterBuilder {
    builder
        .number("memoryLimit", false)
        .number("memoryReservation", false)
        .number("cpuLimit", false)
        .number("cpuReservation", false)
}

/// Optional basic-auth toggle and credentials.
pub(crate) fn basic_auth(builder: ParameterBuilder) -> ParameterBuilder {
    builder
        .boolean("enabled", false)
        .string("username", false)
        .string("password", false)
}

/// Optional list of `{regex, replacement, permanent?}` redirects.
pub(crate) fn redirects(builder: ParameterBuilder) -> ParameterBuilder {
    let item = ToolParameters::object()
        .string("regex", true)
        .string("replacement", true)
        .boolean("permanent", false);
    builder.object_list("redirects", item, false)
}

/// Required `env` text in `KEY=VALUE` lines.
pub(crate) fn env_lines(builder: ParameterBuilder) -> ParameterBuilder {
    builder
        .string("env", true)
        .describe("env", "KEY=VALUE lines")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tool_names_are_unique() {
        let tools = all_tools();
        let mut seen = HashSet::new();
        for tool in &tools {
            assert!(seen.insert(tool.name.as_str()), "duplicate tool {}", tool.name);
        }
    }

    #[test]
    fn every_tool_is_prefixed_and_described() {
        for tool in all_tools() {
            assert!(tool.name.starts_with("easypanel_"), "{}", tool.name);
            assert!(!tool.description.is_empty(), "{}", tool.name);
            assert_eq!(tool.parameters.schema["type"], "object", "{}", tool.name);
        }
    }

    #[test]
    fn procedures_are_namespace_qualified() {
        for tool in all_tools() {
            if let ToolAction::Procedure { procedure, .. } = &tool.action {
                let (namespace, name) = procedure
                    .split_once('.')
                    .unwrap_or_else(|| panic!("{procedure} lacks a namespace"));
                assert!(!namespace.is_empty() && !name.is_empty(), "{procedure}");
            }
        }
    }

    #[test]
    fn catalog_covers_every_namespace_table() {
        assert_eq!(all_tools().len(), 342);
    }

    #[test]
    fn raw_tool_is_registered_last() {
        let tools = all_tools();
        assert_eq!(tools.last().map(|tool| tool.name.as_str()), Some(RAW_TOOL));
    }
}
