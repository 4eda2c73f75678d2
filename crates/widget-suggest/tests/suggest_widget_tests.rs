//! String-suggestion widget against the fixture repository

use pretty_assertions::assert_eq;
use rstest::rstest;
use widget_core::{DisplayType, FieldSchema, PathKind, RenderContext};
use widget_host::{ContentLocale, ResourceContext};
use widget_suggest::{CSS_PATHS, JS_PATHS, StringSuggestWidget};
use widget_test_utils::arctic::RESOURCE_PATH;
use widget_test_utils::{TestTree, arctic_host};

const MODULE_LINK: &str = "/opencms/opencms/system/modules/no.npolar.opencms.widgets/resources/";

#[test]
fn test_js_links_keep_external_and_prefix_module_paths() {
    let widget = StringSuggestWidget::new(Some("{}"));
    let links = widget.js_resource_links(&arctic_host());

    assert_eq!(
        links,
        vec![
            "//ajax.googleapis.com/ajax/libs/jquery/1.8.3/jquery.min.js".to_string(),
            "//ajax.googleapis.com/ajax/libs/jqueryui/1.9.1/jquery-ui.min.js".to_string(),
            format!("{MODULE_LINK}js/underscore-min.js"),
            format!("{MODULE_LINK}js/custom-functions.js"),
            format!("{MODULE_LINK}js/string-suggest-widget-helpers.js"),
            format!("{MODULE_LINK}js/string-suggest-widget.js"),
        ]
    );
}

#[test]
fn test_css_links() {
    let widget = StringSuggestWidget::new(None);
    assert_eq!(
        widget.css_resource_links(&arctic_host()),
        vec![
            "/opencms/opencms/system/modules/no.npolar.common.jquery/resources/jquery.jqueryui.autocomplete.css"
                .to_string(),
            format!("{MODULE_LINK}css/string-suggest-widget.css"),
        ]
    );
}

#[rstest]
#[case(JS_PATHS[0], PathKind::External)]
#[case(CSS_PATHS[0], PathKind::Absolute)]
#[case(JS_PATHS[5], PathKind::ModuleRelative)]
fn test_asset_path_kinds(#[case] path: &str, #[case] expected: PathKind) {
    assert_eq!(PathKind::of(path), expected);
}

#[test]
fn test_surface() {
    let widget = StringSuggestWidget::new(None);
    assert_eq!(widget.init_call(), "initStringSuggestWidget");
    assert_eq!(widget.display_type(), DisplayType::Wide);
    assert!(!widget.is_internal());
}

#[test]
fn test_both_template_slots_resolve_from_directory_host() {
    let tree = TestTree::arctic();
    let host = tree.host();
    let field = FieldSchema::new("Observation", "Station");
    let resource = ResourceContext::new(RESOURCE_PATH, ContentLocale::new("en"));
    let ctx = RenderContext::new(&host, &field, &resource);

    let widget = StringSuggestWidget::new(Some(
        r#"{"tpl_suggestion": {"uri": "tpl/suggestion.tpl"}, "tpl_info": {"uri": "/shared/templates/plain.tpl"}}"#,
    ));
    assert_eq!(
        widget.configuration(&ctx),
        r#"{"tpl_suggestion":"&lt;li class=&quot;station&quot;&gt;%(name)&lt;/li&gt;","tpl_info":"Station &amp; &apos;site&apos;","name":"Observation:Station","locale":"en"}"#
    );
}

#[test]
fn test_missing_configuration_message() {
    let host = arctic_host();
    let field = FieldSchema::new("Observation", "Station");
    let resource = ResourceContext::new(RESOURCE_PATH, ContentLocale::new("en"));
    let ctx = RenderContext::new(&host, &field, &resource);

    assert_eq!(
        StringSuggestWidget::new(None).configuration(&ctx),
        "Configuration error: Widget configuration is either missing or not parseable as JSON."
    );
}
