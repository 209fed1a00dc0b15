use super::{mutation, none, query};
use crate::catalog::ToolSpec;

/// `(tool suffix, label, procedure stem)` for each get/set pair.
const SETTING_PAIRS: &[(&str, &str, &str)] = &[
    ("basic", "basic settings", "BasicSettings"),
    ("logo", "logo settings", "LogoSettings"),
    ("links", "links settings", "LinksSettings"),
    ("custom_code", "custom code", "CustomCodeSettings"),
    ("error_page", "error page settings", "ErrorPageSettings"),
];

pub(super) fn tools() -> Vec<ToolSpec> {
    let mut tools = Vec::with_capacity(SETTING_PAIRS.len() * 2 + 2);

    for &(suffix, label, stem) in SETTING_PAIRS {
        tools.push(query(
            format!("easypanel_branding_get_{suffix}"),
            format!("Get branding {label}"),
            format!("branding.get{stem}"),
            none(),
        ));
        tools.push(mutation(
            format!("easypanel_branding_set_{suffix}"),
            format!("Set branding {label}"),
            format!("branding.set{stem}"),
            none(),
        ));
    }

    tools.push(query(
        "easypanel_branding_get_interface_public",
        "Get public interface settings",
        "branding.getInterfaceSettingsPublic",
        none(),
    ));
    tools.push(query(
        "easypanel_branding_get_other_links",
        "Get other links settings",
        "branding.getOtherLinksSettings",
        none(),
    ));

    tools
}
