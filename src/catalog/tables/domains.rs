use super::{mutation, query, service, ParameterBuilder};
use crate::catalog::ToolSpec;

fn domain_fields(builder: ParameterBuilder) -> ParameterBuilder {
    builder
        .string("host", true)
        .boolean("https", false)
        .number("port", false)
        .string("path", false)
}

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        query(
            "easypanel_list_domains",
            "List domains for a service",
            "domains.listDomains",
            service().build(),
        ),
        mutation(
            "easypanel_create_domain",
            "Create a domain",
            "domains.createDomain",
            domain_fields(service()).build(),
        ),
        mutation(
            "easypanel_delete_domain",
            "Delete a domain",
            "domains.deleteDomain",
            service().string("host", true).build(),
        ),
        mutation(
            "easypanel_update_domain",
            "Update a domain",
            "domains.updateDomain",
            domain_fields(service()).build(),
        ),
        query(
            "easypanel_get_primary_domain",
            "Get primary domain for a service",
            "domains.getPrimaryDomain",
            service().build(),
        ),
        mutation(
            "easypanel_set_primary_domain",
            "Set primary domain for a service",
            "domains.setPrimaryDomain",
            service().string("host", true).build(),
        ),
    ]
}
