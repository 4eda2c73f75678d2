//! The in-memory and directory-backed hosts resolve configurations alike

use chrono::{DateTime, FixedOffset, TimeZone};
use pretty_assertions::assert_eq;
use rstest::rstest;
use widget_core::{DynamicValueResolver, EngineSettings, FieldSchema, RenderContext};
use widget_host::{ContentHost, ContentLocale, ResourceContext};
use widget_suggest::StringSuggestWidget;
use widget_test_utils::arctic::RESOURCE_PATH;
use widget_test_utils::{TestTree, arctic_host};

fn new_year() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap()
}

fn render(host: &dyn ContentHost, raw: &str) -> String {
    let pipeline = widget_suggest::pipeline(EngineSettings::default())
        .with_dynamic(DynamicValueResolver::default().with_clock(new_year));
    let widget = StringSuggestWidget::with_pipeline(Some(raw), pipeline);
    let field = FieldSchema::new("Observation", "Station");
    let resource = ResourceContext::new(RESOURCE_PATH, ContentLocale::new("en"));
    widget.configuration(&RenderContext::new(host, &field, &resource))
}

#[rstest]
#[case::redirect(r#"{"conf_uri": "conf/stations.json"}"#)]
#[case::absolute_redirect(
    r#"{"conf_uri": "/system/modules/no.npolar.opencms.widgets/resources/conf/stations.json"}"#
)]
#[case::templates(
    r#"{"tpl_suggestion": {"uri": "tpl/suggestion.tpl"}, "tpl_info": {"uri": "/shared/templates/plain.tpl"}}"#
)]
#[case::binary_template(r#"{"tpl_info": {"uri": "/shared/images/logo.png"}}"#)]
#[case::properties(
    r#"{"t": "__PROP[Title]", "d": "__PROP[Description]", "l": "__PROP[locale]", "b": "__PROP[Bogus]"}"#
)]
#[case::time(r#"{"y": "__NOW[yyyy]", "n": "__NOW[numeric]", "s": "__SELF"}"#)]
#[case::broken("{")]
fn test_hosts_agree(#[case] raw: &str) {
    let tree = TestTree::arctic();
    assert_eq!(render(&arctic_host(), raw), render(&tree.host(), raw));
}

#[test]
fn test_directory_host_resolves_redirect() {
    let tree = TestTree::arctic();
    let output = render(&tree.host(), r#"{"conf_uri": "conf/stations.json"}"#);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["title"], "Arctic Report");
    assert_eq!(value["name"], "Observation:Station");
    assert_eq!(
        value["tpl_info"],
        "&lt;div class=&quot;info&quot;&gt;&#xA;  &lt;h3&gt;%(name)&lt;/h3&gt;&#xA;&lt;/div&gt;"
    );
}

#[test]
fn test_latin1_templates_are_decoded() {
    let tree = TestTree::arctic();
    tree.write_file("/shared/templates/latin1.tpl", [0x54, 0x72, 0x6f, 0x6d, 0x73, 0xf8]);
    tree.write_manifest("encoding = \"ISO-8859-1\"\n");

    let output = render(&tree.host(), r#"{"name": "n", "tpl_info": {"uri": "/shared/templates/latin1.tpl"}}"#);
    assert_eq!(output, r#"{"name":"n","tpl_info":"Tromsø"}"#);
}
