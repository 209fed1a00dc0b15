use super::{none, query, service};
use crate::catalog::ToolSpec;

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        query(
            "easypanel_get_system_stats",
            "Get system CPU/memory/disk stats",
            "monitor.getSystemStats",
            none(),
        ),
        query(
            "easypanel_get_monitor_table",
            "Get monitoring data for all services",
            "monitor.getMonitorTableData",
            none(),
        ),
        query("easypanel_get_storage_stats", "Get storage/disk usage stats", "monitor.getStorageStats", none()),
        query(
            "easypanel_get_advanced_stats",
            "Get advanced monitoring stats",
            "monitor.getAdvancedStats",
            service().build(),
        ),
        query(
            "easypanel_get_docker_task_stats",
            "Get Docker task stats",
            "monitor.getDockerTaskStats",
            service().build(),
        ),
        query(
            "easypanel_get_service_stats",
            "Get stats for a specific service",
            "monitor.getServiceStats",
            service().build(),
        ),
    ]
}
