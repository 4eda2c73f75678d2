//! Mandatory identity fields

use crate::ConfigDocument;
use crate::document::keys;
use widget_host::ContentLocale;

/// The schema element a widget instance edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// Content type name, e.g. `Observation`
    pub type_name: String,
    /// Element name inside the type, e.g. `Station`
    pub field_name: String,
}

impl FieldSchema {
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
        }
    }

    /// The input element name, `<TypeName>:<FieldName>`.
    pub fn element_name(&self) -> String {
        format!("{}:{}", self.type_name, self.field_name)
    }
}

/// Add `name` and `locale` unless the document already has a `name`.
///
/// An existing `name` (written by the author or supplied by a redirected
/// config file) suppresses both defaults.
pub fn add_mandatory_fields(
    mut doc: ConfigDocument,
    field: &FieldSchema,
    locale: &ContentLocale,
) -> ConfigDocument {
    if doc.contains_key(keys::NAME) {
        return doc;
    }
    doc.insert(keys::NAME, field.element_name());
    doc.insert(keys::LOCALE, locale.language());
    doc
}
