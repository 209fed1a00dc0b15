//! Certificates, ports, mounts, middlewares, Git keys, Traefik, cluster
//! nodes, Docker builders and actions.

use super::{mutation, none, query, service, ParameterBuilder};
use crate::catalog::{ToolParameters, ToolSpec};

fn port_mapping() -> ParameterBuilder {
    service()
        .number("published", true)
        .number("target", true)
        .string("protocol", false)
}

fn one_string(field: &str) -> ToolParameters {
    ToolParameters::object().string(field, true).build()
}

pub(super) fn tools() -> Vec<ToolSpec> {
    let ps = || service().build();

    vec![
        query(
            "easypanel_list_certificates",
            "List SSL certificates",
            "certificates.listCertificates",
            none(),
        ),
        mutation(
            "easypanel_remove_certificate",
            "Remove an SSL certificate",
            "certificates.removeCertificate",
            one_string("domain"),
        ),
        query("easypanel_list_ports", "List ports for a service", "ports.listPorts", ps()),
        mutation(
            "easypanel_create_port",
            "Create a port mapping",
            "ports.createPort",
            port_mapping().build(),
        ),
        mutation(
            "easypanel_delete_port",
            "Delete a port mapping",
            "ports.deletePort",
            service()
                .number("published", true)
                .string("protocol", false)
                .build(),
        ),
        mutation(
            "easypanel_delete_all_ports",
            "Delete all ports for a service",
            "ports.deleteAllPorts",
            ps(),
        ),
        mutation(
            "easypanel_update_port",
            "Update a port mapping",
            "ports.updatePort",
            port_mapping().build(),
        ),
        query("easypanel_list_mounts", "List mounts for a service", "mounts.listMounts", ps()),
        mutation(
            "easypanel_create_mount",
            "Create a mount",
            "mounts.createMount",
            service()
                .string("type", false)
                .string("hostPath", false)
                .string("mountPath", false)
                .string("name", false)
                .build(),
        ),
        mutation(
            "easypanel_delete_mount",
            "Delete a mount",
            "mounts.deleteMount",
            service()
                .string("name", false)
                .string("mountPath", false)
                .build(),
        ),
        mutation(
            "easypanel_update_mount",
            "Update a mount",
            "mounts.updateMount",
            service()
                .string("name", false)
                .string("hostPath", false)
                .string("mountPath", false)
                .build(),
        ),
        query(
            "easypanel_list_middlewares",
            "List middlewares for a service",
            "middlewares.listMiddlewares",
            ps(),
        ),
        mutation(
            "easypanel_create_middleware",
            "Create a middleware",
            "middlewares.createMiddleware",
            service()
                .string("name", true)
                .string("type", true)
                .build(),
        ),
        mutation(
            "easypanel_destroy_middleware",
            "Destroy a middleware",
            "middlewares.destroyMiddleware",
            service().string("name", true).build(),
        ),
        mutation(
            "easypanel_update_middleware",
            "Update a middleware",
            "middlewares.updateMiddleware",
            service()
                .string("name", true)
                .string("type", false)
                .build(),
        ),
        query(
            "easypanel_git_get_public_key",
            "Get Git SSH public key",
            "git.getPublicKey",
            none(),
        ),
        mutation(
            "easypanel_git_generate_key",
            "Generate new Git SSH key",
            "git.generateKey",
            none(),
        ),
        query(
            "easypanel_traefik_get_dashboard",
            "Get Traefik dashboard URL",
            "traefik.getDashboard",
            none(),
        ),
        query("easypanel_traefik_get_env", "Get Traefik env vars", "traefik.getEnv", none()),
        mutation(
            "easypanel_traefik_set_env",
            "Set Traefik env vars",
            "traefik.setEnv",
            one_string("env"),
        ),
        query(
            "easypanel_traefik_get_custom_config",
            "Get Traefik custom config",
            "traefik.getCustomConfig",
            none(),
        ),
        mutation(
            "easypanel_traefik_set_custom_config",
            "Set Traefik custom config",
            "traefik.setCustomConfig",
            one_string("config"),
        ),
        mutation("easypanel_traefik_restart", "Restart Traefik", "traefik.restart", none()),
        query("easypanel_cluster_list_nodes", "List cluster nodes", "cluster.listNodes", none()),
        query(
            "easypanel_cluster_add_worker_command",
            "Get command to add worker node",
            "cluster.addWorkerCommand",
            none(),
        ),
        mutation(
            "easypanel_cluster_remove_node",
            "Remove a cluster node",
            "cluster.removeNode",
            one_string("nodeId"),
        ),
        query(
            "easypanel_list_docker_builders",
            "List Docker builders",
            "dockerBuilders.listDockerBuilders",
            none(),
        ),
        mutation(
            "easypanel_create_docker_builder",
            "Create a Docker builder",
            "dockerBuilders.createDockerBuilder",
            ToolParameters::object().string("name", false).build(),
        ),
        mutation(
            "easypanel_remove_docker_builder",
            "Remove a Docker builder",
            "dockerBuilders.removeDockerBuilder",
            one_string("name"),
        ),
        mutation(
            "easypanel_stop_docker_builder",
            "Stop a Docker builder",
            "dockerBuilders.stopDockerBuilder",
            one_string("name"),
        ),
        mutation(
            "easypanel_use_docker_builder",
            "Set active Docker builder",
            "dockerBuilders.useDockerBuilder",
            one_string("name"),
        ),
        query(
            "easypanel_list_actions",
            "List running actions/builds",
            "actions.listActions",
            ps(),
        ),
        query(
            "easypanel_get_action",
            "Get action details",
            "actions.getAction",
            one_string("actionId"),
        ),
        mutation(
            "easypanel_kill_action",
            "Kill a running action",
            "actions.killAction",
            one_string("actionId"),
        ),
    ]
}
