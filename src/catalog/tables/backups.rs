//! Database and volume backup schedules.

use super::{mutation, query, service};
use crate::catalog::ToolSpec;

pub(super) fn tools() -> Vec<ToolSpec> {
    let ps = || service().build();

    vec![
        query(
            "easypanel_list_database_backups",
            "List database backups",
            "databaseBackups.listDatabaseBackups",
            ps(),
        ),
        query(
            "easypanel_get_service_databases",
            "Get databases for a service",
            "databaseBackups.getServiceDatabases",
            ps(),
        ),
        mutation(
            "easypanel_create_database_backup",
            "Create a database backup config",
            "databaseBackups.createDatabaseBackup",
            service()
                .string("database", false)
                .string("schedule", false)
                .string("destination", false)
                .build(),
        ),
        mutation(
            "easypanel_delete_database_backup",
            "Delete a database backup config",
            "databaseBackups.deleteDatabaseBackup",
            service().string("backupId", false).build(),
        ),
        mutation(
            "easypanel_run_database_backup",
            "Run a database backup now",
            "databaseBackups.runDatabaseBackup",
            service().string("backupId", false).build(),
        ),
        mutation(
            "easypanel_restore_database_backup",
            "Restore a database backup",
            "databaseBackups.restoreDatabaseBackup",
            service()
                .string("backupId", false)
                .string("file", false)
                .build(),
        ),
        mutation(
            "easypanel_update_database_backup",
            "Update a database backup config",
            "databaseBackups.updateDatabaseBackup",
            service()
                .string("backupId", false)
                .string("schedule", false)
                .string("destination", false)
                .build(),
        ),
        query(
            "easypanel_list_volume_backups",
            "List volume backups",
            "volumeBackups.listVolumeBackups",
            ps(),
        ),
        query(
            "easypanel_list_volume_mounts",
            "List volume mounts",
            "volumeBackups.listVolumeMounts",
            ps(),
        ),
        mutation(
            "easypanel_create_volume_backup",
            "Create a volume backup config",
            "volumeBackups.createVolumeBackup",
            service()
                .string("schedule", false)
                .string("destination", false)
                .build(),
        ),
        mutation(
            "easypanel_destroy_volume_backup",
            "Destroy a volume backup config",
            "volumeBackups.destroyVolumeBackup",
            service().string("backupId", false).build(),
        ),
        mutation(
            "easypanel_run_volume_backup",
            "Run a volume backup now",
            "volumeBackups.runVolumeBackup",
            service().string("backupId", false).build(),
        ),
        mutation(
            "easypanel_update_volume_backup",
            "Update a volume backup config",
            "volumeBackups.updateVolumeBackup",
            service()
                .string("backupId", false)
                .string("schedule", false)
                .string("destination", false)
                .build(),
        ),
    ]
}
