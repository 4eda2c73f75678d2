//! Engine settings

/// Base folder for the widget module's resources (scripts, styles, templates).
pub const DEFAULT_MODULE_RESOURCES: &str = "/system/modules/no.npolar.opencms.widgets/resources/";

/// Substituted for a defined property that has no value.
pub const DEFAULT_NO_PROPERTY_VALUE: &str = "No property value";

/// Name of the property holding a resource's locale.
pub const DEFAULT_LOCALE_PROPERTY: &str = "locale";

/// Settings shared by every stage of the resolution pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Folder that module-relative paths are resolved against
    pub module_resources: String,

    /// Placeholder for properties that are defined but unset
    pub no_property_value: String,

    /// Property whose missing value falls back to the host's default locale
    pub locale_property: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            module_resources: DEFAULT_MODULE_RESOURCES.to_string(),
            no_property_value: DEFAULT_NO_PROPERTY_VALUE.to_string(),
            locale_property: DEFAULT_LOCALE_PROPERTY.to_string(),
        }
    }
}

impl EngineSettings {
    /// Use a different module resources folder.
    ///
    /// A trailing slash is added when missing.
    pub fn with_module_resources(mut self, folder: impl Into<String>) -> Self {
        let mut folder = folder.into();
        if !folder.ends_with('/') {
            folder.push('/');
        }
        self.module_resources = folder;
        self
    }
}
