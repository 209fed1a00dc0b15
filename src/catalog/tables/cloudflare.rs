use super::{mutation, none, query};
use crate::catalog::{ToolParameters, ToolSpec};

fn optional(fields: &[&str]) -> ToolParameters {
    fields
        .iter()
        .fold(ToolParameters::object(), |builder, field| builder.string(field, false))
        .build()
}

pub(super) fn tools() -> Vec<ToolSpec> {
    vec![
        query(
            "easypanel_cf_get_config",
            "Get Cloudflare tunnel config",
            "cloudflareTunnel.getConfig",
            none(),
        ),
        mutation(
            "easypanel_cf_set_config",
            "Set Cloudflare tunnel config",
            "cloudflareTunnel.setConfig",
            optional(&["token"]),
        ),
        query(
            "easypanel_cf_list_accounts",
            "List Cloudflare accounts",
            "cloudflareTunnel.listAccounts",
            none(),
        ),
        query(
            "easypanel_cf_list_tunnels",
            "List Cloudflare tunnels",
            "cloudflareTunnel.listTunnels",
            optional(&["accountId"]),
        ),
        query(
            "easypanel_cf_list_zones",
            "List Cloudflare zones",
            "cloudflareTunnel.listZones",
            optional(&["accountId"]),
        ),
        query(
            "easypanel_cf_get_tunnel_rules",
            "Get Cloudflare tunnel rules",
            "cloudflareTunnel.getTunnelRules",
            none(),
        ),
        mutation(
            "easypanel_cf_create_tunnel_rule",
            "Create Cloudflare tunnel rule",
            "cloudflareTunnel.createTunnelRule",
            optional(&["hostname", "service"]),
        ),
        mutation(
            "easypanel_cf_update_tunnel_rule",
            "Update Cloudflare tunnel rule",
            "cloudflareTunnel.updateTunnelRule",
            optional(&["ruleId", "hostname", "service"]),
        ),
        mutation(
            "easypanel_cf_delete_tunnel_rule",
            "Delete Cloudflare tunnel rule",
            "cloudflareTunnel.deleteTunnelRule",
            optional(&["ruleId"]),
        ),
        mutation(
            "easypanel_cf_start_tunnel",
            "Start Cloudflare tunnel",
            "cloudflareTunnel.startTunnel",
            none(),
        ),
        mutation(
            "easypanel_cf_stop_tunnel",
            "Stop Cloudflare tunnel",
            "cloudflareTunnel.stopTunnel",
            none(),
        ),
    ]
}
