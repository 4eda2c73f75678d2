//! The "Arctic Report" repository
//!
//! One observation resource with a title property, plus templates and a
//! shared config file in the default module resources folder.

use widget_host::{ContentLocale, MemoryHost};

/// Module resources folder the fixture files live in.
pub const MODULE_RESOURCES: &str = "/system/modules/no.npolar.opencms.widgets/resources/";

/// Root path of the edited resource.
pub const RESOURCE_PATH: &str = "/data/obs/42";

/// Link prefix of the fixture host.
pub const LINK_PREFIX: &str = "/opencms/opencms";

/// Value of the `Title` property on [`RESOURCE_PATH`].
pub const TITLE: &str = "Arctic Report";

/// Host default locale. Differs from the content locale used in tests.
pub const DEFAULT_LOCALE: &str = "no";

/// Plain-text files as `(root path, content)`.
pub const FILES: &[(&str, &str)] = &[
    (
        "/system/modules/no.npolar.opencms.widgets/resources/tpl/suggestion.tpl",
        "<li class=\"station\">%(name)</li>",
    ),
    (
        "/system/modules/no.npolar.opencms.widgets/resources/tpl/info.tpl",
        "<div class=\"info\">\n  <h3>%(name)</h3>\n</div>",
    ),
    (
        "/system/modules/no.npolar.opencms.widgets/resources/conf/stations.json",
        r#"{"service": "https://api.npolar.no/station/?q=%(term)", "tpl_info": {"uri": "tpl/info.tpl"}, "title": "__PROP[Title]"}"#,
    ),
    ("/shared/templates/plain.tpl", "Station & 'site'"),
];

/// Properties defined without any value.
pub const UNSET_PROPERTIES: &[&str] = &["Description", "locale"];

/// The fixture repository in memory.
pub fn arctic_host() -> MemoryHost {
    let host = FILES
        .iter()
        .fold(MemoryHost::new(), |host, (path, content)| {
            host.with_plain_file(path, *content)
        })
        .with_binary_file("/shared/images/logo.png", vec![0x89, 0x50, 0x4e, 0x47])
        .with_property(RESOURCE_PATH, "Title", TITLE)
        .with_link_prefix(LINK_PREFIX)
        .with_default_locale(ContentLocale::new(DEFAULT_LOCALE));
    UNSET_PROPERTIES
        .iter()
        .fold(host, |host, name| host.with_property_definition(name))
}

/// The same content as a host manifest for directory-backed hosts.
pub fn arctic_manifest() -> String {
    let mut manifest = format!(
        "link_prefix = \"{LINK_PREFIX}\"\ndefault_locale = \"{DEFAULT_LOCALE}\"\n\n[properties.Title]\n\"{RESOURCE_PATH}\" = \"{TITLE}\"\n"
    );
    for name in UNSET_PROPERTIES {
        manifest.push_str(&format!("\n[properties.{name}]\n"));
    }
    manifest
}
