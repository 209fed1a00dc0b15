//! Database services. All five engines share one procedure layout.

use super::{mutation, query, resource_limits, service};
use crate::catalog::ToolSpec;

struct Engine {
    name: &'static str,
    /// `(label, enable procedure, disable procedure)` for each admin UI.
    consoles: &'static [(&'static str, &'static str, &'static str)],
}

const DB_GATE: (&str, &str, &str) = ("DbGate", "enableDbGate", "disableDbGate");
const PHP_MY_ADMIN: (&str, &str, &str) = ("phpMyAdmin", "enablePhpMyAdmin", "disablePhpMyAdmin");

const ENGINES: [Engine; 5] = [
    Engine {
        name: "postgres",
        consoles: &[("PgWeb", "enablePgWeb", "disablePgWeb"), DB_GATE],
    },
    Engine {
        name: "mysql",
        consoles: &[PHP_MY_ADMIN, DB_GATE],
    },
    Engine {
        name: "mariadb",
        consoles: &[PHP_MY_ADMIN, DB_GATE],
    },
    Engine {
        name: "mongo",
        consoles: &[("MongoExpress", "enableMongoExpress", "disableMongoExpress"), DB_GATE],
    },
    Engine {
        name: "redis",
        consoles: &[("RedisCommander", "enableRedisCommander", "disableRedisCommander"), DB_GATE],
    },
];

pub(super) fn tools() -> Vec<ToolSpec> {
    ENGINES.iter().flat_map(engine_tools).collect()
}

fn engine_tools(engine: &Engine) -> Vec<ToolSpec> {
    let db = engine.name;
    let tool = |suffix: &str| format!("easypanel_{db}_{suffix}");
    let procedure = |name: &str| format!("{db}.{name}");

    let mut tools = vec![
        query(
            tool("inspect"),
            format!("Inspect {db} service"),
            procedure("inspectService"),
            service().build(),
        ),
        mutation(
            tool("destroy"),
            format!("Destroy {db} service"),
            procedure("destroyService"),
            service().build(),
        ),
        mutation(
            tool("enable"),
            format!("Enable {db} service"),
            procedure("enableService"),
            service().build(),
        ),
        mutation(
            tool("disable"),
            format!("Disable {db} service"),
            procedure("disableService"),
            service().build(),
        ),
        mutation(
            tool("expose"),
            format!("Expose {db} service port"),
            procedure("exposeService"),
            service().build(),
        ),
        mutation(
            tool("update_credentials"),
            format!("Update {db} credentials"),
            procedure("updateCredentials"),
            service().string("password", false).build(),
        ),
        mutation(
            tool("update_advanced"),
            format!("Update {db} advanced settings"),
            procedure("updateAdvanced"),
            service().string("command", false).build(),
        ),
        mutation(
            tool("update_resources"),
            format!("Update {db} resource limits"),
            procedure("updateResources"),
            resource_limits(service()).build(),
        ),
    ];

    for &(label, enable, disable) in engine.consoles {
        let slug: String = label
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        tools.push(mutation(
            tool(&format!("enable_{slug}")),
            format!("Enable {label} for {db}"),
            procedure(enable),
            service().build(),
        ));
        tools.push(mutation(
            tool(&format!("disable_{slug}")),
            format!("Disable {label} for {db}"),
            procedure(disable),
            service().build(),
        ));
    }

    tools
}
