//! Projects.

use super::{mutation, none, query};
use crate::catalog::{ToolParameters, ToolSpec};

fn project() -> ToolParameters {
    ToolParameters::object().string("projectName", true).build()
}

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        query("easypanel_list_projects", "List all projects", "projects.listProjects", none()),
        mutation(
            "easypanel_create_project",
            "Create a new project",
            "projects.createProject",
            ToolParameters::object().string("name", true).build(),
        ),
        mutation("easypanel_destroy_project", "Destroy a project", "projects.destroyProject", project()),
        query("easypanel_inspect_project", "Inspect project details", "projects.inspectProject", project()),
        query(
            "easypanel_list_projects_and_services",
            "List all projects with services",
            "projects.listProjectsAndServices",
            none(),
        ),
        query(
            "easypanel_can_create_project",
            "Check if you can create a project",
            "projects.canCreateProject",
            none(),
        ),
        query(
            "easypanel_get_docker_containers",
            "Get Docker containers for a project",
            "projects.getDockerContainers",
            project(),
        ),
        mutation(
            "easypanel_update_project_access",
            "Update project access",
            "projects.updateAccess",
            ToolParameters::object()
                .string("projectName", true)
                .string_list("userIds", false)
                .build(),
        ),
        mutation(
            "easypanel_update_project_env",
            "Update project-level environment variables",
            "projects.updateProjectEnv",
            super::env_lines(ToolParameters::object().string("projectName", true)).build(),
        ),
    ]
}
