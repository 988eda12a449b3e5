//! Plugin manifest types describing a generator to the host.
//!
//! The host reads a manifest to learn which interaction inputs a plugin
//! expects the user to draw and which properties to render in its settings
//! panel. Running a plugin binary with `--manifest` prints this document
//! instead of reading a context.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::ManifestError;

/// Protocol version implemented by this SDK.
pub const SDK_VERSION: &str = "1.1.0";

/// Plugin type advertised for every compiled generator.
const NATIVE_PLUGIN_TYPE: &str = "native";

/// Primitive the user draws for an interaction input.
///
/// # Example
///
/// ```
/// use wpt_plugin_sdk::InputKind;
///
/// assert_eq!(InputKind::NodeSelect.to_string(), "node_select");
/// assert_eq!("rectangle".parse::<InputKind>().ok(), Some(InputKind::Rectangle));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InputKind {
    /// A single clicked pose.
    Point,
    /// A rotated rectangle.
    Rectangle,
    /// A closed polygon.
    Polygon,
    /// An open polyline.
    Path,
    /// Selection of existing map nodes.
    NodeSelect,
}

/// Type of a configurable property.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PropertyKind {
    /// Floating-point number.
    Float,
    /// Integer.
    Int,
    /// Boolean flag.
    Bool,
    /// Free text or an enumerated choice.
    String,
}

/// One interaction input a plugin asks the user to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDef {
    id: String,
    label: String,
    #[serde(rename = "type")]
    kind: InputKind,
}

impl InputDef {
    /// Creates an input definition.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: InputKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    /// Key under which the primitive appears in `interaction_data`.
    #[must_use]
    pub const fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Prompt shown to the user.
    #[must_use]
    pub const fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Primitive to draw.
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        self.kind
    }
}

/// One configurable property with its default.
///
/// # Example
///
/// ```
/// use wpt_plugin_sdk::{PropertyDef, PropertyKind};
///
/// let property = PropertyDef::new("corner", PropertyKind::String, "Top-Left", "Start corner")
///     .with_options(["Top-Left", "Bottom-Right"]);
/// assert_eq!(property.default_value(), &serde_json::json!("Top-Left"));
/// assert_eq!(property.options().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDef {
    name: String,
    #[serde(rename = "type")]
    kind: PropertyKind,
    default: Value,
    description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
}

impl PropertyDef {
    /// Creates a property definition without enumerated options.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: PropertyKind,
        default: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            default: default.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Restricts a string property to a fixed set of choices.
    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Key under which the value appears in `properties`.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Declared type.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Value used when the host omits the property.
    #[must_use]
    pub const fn default_value(&self) -> &Value {
        &self.default
    }

    /// Help text.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Enumerated choices; empty for free-form properties.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// Declarative description of one waypoint generator plugin.
///
/// # Example
///
/// ```
/// use wpt_plugin_sdk::{InputDef, InputKind, PluginManifest, PropertyDef, PropertyKind};
///
/// let manifest = PluginManifest::new("Line Generator", "wpt-line-generator")
///     .with_input(InputDef::new("start_point", "Start", InputKind::Point))
///     .with_property(PropertyDef::new("num_points", PropertyKind::Int, 5, "Points"));
///
/// assert!(manifest.validate().is_ok());
/// assert_eq!(manifest.version(), "1.1.0");
/// assert_eq!(manifest.plugin_type(), "native");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    name: String,
    version: String,
    #[serde(rename = "type")]
    plugin_type: String,
    executable: String,
    #[serde(default)]
    inputs: Vec<InputDef>,
    #[serde(default)]
    needs: Vec<String>,
    #[serde(default)]
    properties: Vec<PropertyDef>,
}

impl PluginManifest {
    /// Creates a native plugin manifest with no inputs or properties.
    #[must_use]
    pub fn new(name: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: String::from(SDK_VERSION),
            plugin_type: String::from(NATIVE_PLUGIN_TYPE),
            executable: executable.into(),
            inputs: Vec::new(),
            needs: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Appends an interaction input.
    #[must_use]
    pub fn with_input(mut self, input: InputDef) -> Self {
        self.inputs.push(input);
        self
    }

    /// Declares an extra context section the plugin consumes, such as
    /// `map_image`.
    #[must_use]
    pub fn with_need(mut self, need: impl Into<String>) -> Self {
        self.needs.push(need.into());
        self
    }

    /// Appends a configurable property.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Protocol version.
    #[must_use]
    pub const fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Plugin type, always `native` for compiled generators.
    #[must_use]
    pub const fn plugin_type(&self) -> &str {
        self.plugin_type.as_str()
    }

    /// Binary name the host spawns.
    #[must_use]
    pub const fn executable(&self) -> &str {
        self.executable.as_str()
    }

    /// Interaction inputs in display order.
    #[must_use]
    pub fn inputs(&self) -> &[InputDef] {
        &self.inputs
    }

    /// Extra context sections requested from the host.
    #[must_use]
    pub fn needs(&self) -> &[String] {
        &self.needs
    }

    /// Configurable properties in display order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties
            .iter()
            .find(|property| property.name() == name)
    }

    /// Validates the manifest, returning an error if it is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the name or executable is blank, or if
    /// an input identifier or property name is declared twice.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.name.trim().is_empty() {
            return Err(ManifestError::EmptyName);
        }
        if self.executable.trim().is_empty() {
            return Err(ManifestError::MissingExecutable {
                name: self.name.clone(),
            });
        }

        let mut seen_inputs = HashSet::new();
        if let Some(input) = self
            .inputs
            .iter()
            .find(|input| !seen_inputs.insert(input.id()))
        {
            return Err(ManifestError::DuplicateInput {
                name: self.name.clone(),
                id: input.id().to_owned(),
            });
        }

        let mut seen_properties = HashSet::new();
        match self
            .properties
            .iter()
            .find(|property| !seen_properties.insert(property.name()))
        {
            Some(property) => Err(ManifestError::DuplicateProperty {
                name: self.name.clone(),
                property: property.name().to_owned(),
            }),
            None => Ok(()),
        }
    }
}
