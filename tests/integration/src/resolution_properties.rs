//! Behaviour guaranteed for any configuration

use pretty_assertions::assert_eq;
use rstest::rstest;
use widget_core::mandatory::add_mandatory_fields;
use widget_core::redirect::resolve_config_file;
use widget_core::template::resolve_templates;
use widget_core::{ConfigDocument, DynamicValueResolver, EngineSettings, FieldSchema, PathKind, PathResolver};
use widget_host::{ContentLocale, ResourceContext};
use widget_suggest::{TEMPLATE_INFO, TEMPLATE_SUGGESTION};
use widget_test_utils::arctic::RESOURCE_PATH;
use widget_test_utils::arctic_host;

const SAMPLES: &[&str] = &[
    r#"{}"#,
    r#"{"service": "https://api.example.com/?q=%(term)", "minLength": 3}"#,
    r#"{"name": "given", "locale": "de", "nested": {"a": [1, 2, {"b": null}]}}"#,
    r#"{"tpl_suggestion": "<li>%(name)</li>", "tpl_info": {"uri": "tpl/info.tpl"}}"#,
];

#[rstest]
fn test_redirect_without_reference_is_identity(#[values(0, 1, 2, 3)] sample: usize) {
    let doc = ConfigDocument::parse(SAMPLES[sample]).unwrap();
    let resolved = resolve_config_file(doc.clone(), &arctic_host(), &PathResolver::default());
    assert_eq!(resolved, doc);
}

#[test]
fn test_named_documents_are_not_touched_by_mandatory_fields() {
    let doc = ConfigDocument::parse(SAMPLES[2]).unwrap();
    let resolved = add_mandatory_fields(
        doc.clone(),
        &FieldSchema::new("Observation", "Station"),
        &ContentLocale::new("en"),
    );
    assert_eq!(resolved, doc);
}

#[rstest]
fn test_dynamic_resolution_is_idempotent(#[values(0, 1, 2, 3)] sample: usize) {
    let host = arctic_host();
    let resource = ResourceContext::new(RESOURCE_PATH, ContentLocale::new("en"));
    let settings = EngineSettings::default();
    let resolver = DynamicValueResolver::default();

    let text = SAMPLES[sample];
    assert_eq!(resolver.resolve(text, &host, &resource, &settings), text);
}

#[test]
fn test_literal_template_round_trips() {
    let doc = ConfigDocument::parse(SAMPLES[3]).unwrap();
    let resolved = resolve_templates(
        doc,
        &[TEMPLATE_SUGGESTION, TEMPLATE_INFO],
        &arctic_host(),
        &PathResolver::default(),
    );
    assert_eq!(resolved.get_str(TEMPLATE_SUGGESTION), Some("<li>%(name)</li>"));
    assert!(resolved.get_str(TEMPLATE_INFO).is_some());
}

#[rstest]
#[case("__PROP[Title]", "Arctic Report")]
#[case("__PROP[Bogus]", "__PROP[Bogus]")]
#[case("__CONTENT_LOCALE", "en")]
#[case("__SELF", "/data/obs/42")]
fn test_notation_values(#[case] notation: &str, #[case] expected: &str) {
    let host = arctic_host();
    let resource = ResourceContext::new(RESOURCE_PATH, ContentLocale::new("en"));
    let resolved = DynamicValueResolver::default().resolve(
        notation,
        &host,
        &resource,
        &EngineSettings::default(),
    );
    assert_eq!(resolved, expected);
}

#[test]
fn test_mixed_asset_paths() {
    let paths = PathResolver::default();
    let host = arctic_host();
    assert_eq!(PathKind::of("http://cdn.example.com/x.js"), PathKind::External);
    assert_eq!(PathKind::of("js/local.js"), PathKind::ModuleRelative);
    assert_eq!(
        paths.resource_link(&host, "http://cdn.example.com/x.js"),
        "http://cdn.example.com/x.js"
    );
    assert_eq!(
        paths.resource_link(&host, "js/local.js"),
        "/opencms/opencms/system/modules/no.npolar.opencms.widgets/resources/js/local.js"
    );
}
