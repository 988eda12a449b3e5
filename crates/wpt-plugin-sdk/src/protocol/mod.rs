//! Wire types exchanged between the host and a plugin.
//!
//! The host writes one [`Context`] document to stdin. The plugin answers
//! with a JSON array of [`Waypoint`] records on stdout. Both documents are
//! plain JSON objects; unknown keys in the context are ignored.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ContextError;
use crate::orientation::{Quaternion, quaternion_to_yaw};

/// Free-form metadata attached to a waypoint.
///
/// The runtime never interprets these values; they carry provenance such as
/// `generated_by` or a per-line index back to the host.
pub type WaypointOptions = Map<String, Value>;

/// Input document handed to a generator.
///
/// # Example
///
/// ```
/// use wpt_plugin_sdk::Context;
///
/// let context: Context = serde_json::from_str(
///     r#"{"properties": {"spacing": 2.0}, "interaction_data": {"start_point": {"x": 1.0}}}"#,
/// )
/// .expect("valid context");
/// assert_eq!(context.properties().f64("spacing", 1.0).ok(), Some(2.0));
/// let point = context.interaction_data().point("start_point").expect("decodes");
/// assert_eq!(point.map(|p| p.x), Some(1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    properties: Properties,
    #[serde(default)]
    interaction_data: InteractionData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    map_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    map_image: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    waypoints: Option<Value>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a named property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.0.insert(name.into(), value.into());
        self
    }

    /// Sets an interaction input.
    #[must_use]
    pub fn with_interaction(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.interaction_data.0.insert(id.into(), value.into());
        self
    }

    /// Returns the named parameters.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the user-drawn geometric inputs.
    #[must_use]
    pub const fn interaction_data(&self) -> &InteractionData {
        &self.interaction_data
    }

    /// Map metadata forwarded by the host, unused by the core generators.
    #[must_use]
    pub const fn map_info(&self) -> Option<&Value> {
        self.map_info.as_ref()
    }

    /// Encoded map image forwarded by the host, unused by the core generators.
    #[must_use]
    pub const fn map_image(&self) -> Option<&Value> {
        self.map_image.as_ref()
    }

    /// Existing waypoint list forwarded by the host, unused by the core generators.
    #[must_use]
    pub const fn waypoints(&self) -> Option<&Value> {
        self.waypoints.as_ref()
    }
}

/// Named scalar parameters supplied by the host.
///
/// Every key is optional; accessors take the generator's default. Values
/// are converted loosely: numbers may arrive as numeric strings, integers
/// accept floats (truncated toward zero), booleans accept `true`/`false`
/// strings and numbers. `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    /// Returns the raw value for `name`, if present and not `null`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    /// Reads a finite floating-point parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidProperty`] if the value is not numeric
    /// or is not finite.
    pub fn f64(&self, name: &str, default: f64) -> Result<f64, ContextError> {
        let Some(value) = self.get(name) else {
            return Ok(default);
        };
        let parsed = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            _ => None,
        };
        parsed
            .filter(|number| number.is_finite())
            .ok_or_else(|| ContextError::invalid_property(name, "a finite number", value))
    }

    /// Reads an integer parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidProperty`] if the value cannot be
    /// represented as an integer.
    pub fn i64(&self, name: &str, default: i64) -> Result<i64, ContextError> {
        let Some(value) = self.get(name) else {
            return Ok(default);
        };
        let parsed = match value {
            Value::Number(number) => number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.is_finite())
                    .and_then(truncate_to_i64)
            }),
            Value::String(text) => text.trim().parse::<i64>().ok(),
            Value::Bool(flag) => Some(i64::from(*flag)),
            _ => None,
        };
        parsed.ok_or_else(|| ContextError::invalid_property(name, "an integer", value))
    }

    /// Reads a boolean parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidProperty`] for strings other than
    /// `true`/`false` and for non-scalar values.
    pub fn bool(&self, name: &str, default: bool) -> Result<bool, ContextError> {
        let Some(value) = self.get(name) else {
            return Ok(default);
        };
        let parsed = match value {
            Value::Bool(flag) => Some(*flag),
            Value::Number(number) => number.as_f64().map(|float| float != 0.0),
            Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        };
        parsed.ok_or_else(|| ContextError::invalid_property(name, "a boolean", value))
    }

    /// Reads a string parameter; numbers and booleans are stringified.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidProperty`] for arrays and objects.
    pub fn string(&self, name: &str, default: &str) -> Result<String, ContextError> {
        let Some(value) = self.get(name) else {
            return Ok(default.to_owned());
        };
        match value {
            Value::String(text) => Ok(text.clone()),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            _ => Err(ContextError::invalid_property(name, "a string", value)),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "integer parameters truncate toward zero after the range check"
)]
fn truncate_to_i64(float: f64) -> Option<i64> {
    let truncated = float.trunc();
    (truncated >= i64::MIN as f64 && truncated < i64::MAX as f64).then_some(truncated as i64)
}

/// Geometric inputs drawn by the user, keyed by input identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionData(Map<String, Value>);

impl InteractionData {
    /// Returns the raw primitive for `id`.
    ///
    /// Absent keys, `null`, empty objects and empty arrays all count as
    /// missing input.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.0.get(id).filter(|value| match value {
            Value::Null => false,
            Value::Object(fields) => !fields.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
    }

    /// Decodes a point primitive.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidInteraction`] when the input is present
    /// but is not shaped like a point.
    pub fn point(&self, id: &str) -> Result<Option<Point>, ContextError> {
        self.decode(id, "point")
    }

    /// Decodes a rotated rectangle primitive.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidInteraction`] when the input is present
    /// but is not shaped like a rectangle.
    pub fn rectangle(&self, id: &str) -> Result<Option<Rectangle>, ContextError> {
        self.decode(id, "rectangle")
    }

    /// Decodes an axis-aligned area primitive.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidInteraction`] when the input is present
    /// but is not shaped like an area.
    pub fn sweep_area(&self, id: &str) -> Result<Option<SweepArea>, ContextError> {
        self.decode(id, "sweep area")
    }

    fn decode<T: DeserializeOwned>(
        &self,
        id: &str,
        expected: &'static str,
    ) -> Result<Option<T>, ContextError> {
        let Some(value) = self.get(id) else {
            return Ok(None);
        };
        if !value.is_object() {
            return Err(ContextError::InvalidInteraction {
                id: id.to_owned(),
                expected,
                message: format!("expected a JSON object, got {value}"),
            });
        }
        T::deserialize(value)
            .map(Some)
            .map_err(|error| ContextError::InvalidInteraction {
                id: id.to_owned(),
                expected,
                message: error.to_string(),
            })
    }
}

/// Reads a coordinate given either as a JSON number or a numeric string.
fn loose_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    match Coordinate::deserialize(deserializer)? {
        Coordinate::Number(number) => Ok(number),
        Coordinate::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .ok_or_else(|| D::Error::custom(format!("expected a number, got {text:?}"))),
    }
}

/// A clicked pose: position plus planar orientation.
///
/// Missing fields take the identity pose at the origin. Coordinates may
/// arrive as numbers or numeric strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    /// X coordinate in metres.
    #[serde(deserialize_with = "loose_f64")]
    pub x: f64,
    /// Y coordinate in metres.
    #[serde(deserialize_with = "loose_f64")]
    pub y: f64,
    /// Quaternion X component.
    #[serde(deserialize_with = "loose_f64")]
    pub qx: f64,
    /// Quaternion Y component.
    #[serde(deserialize_with = "loose_f64")]
    pub qy: f64,
    /// Quaternion Z component.
    #[serde(deserialize_with = "loose_f64")]
    pub qz: f64,
    /// Quaternion W component.
    #[serde(deserialize_with = "loose_f64")]
    pub qw: f64,
}

impl Point {
    /// Creates a point at `(x, y)` facing `yaw`.
    #[must_use]
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        let Quaternion { qx, qy, qz, qw } = Quaternion::from_yaw(yaw);
        Self {
            x,
            y,
            qx,
            qy,
            qz,
            qw,
        }
    }

    /// Heading encoded by the point's quaternion.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        quaternion_to_yaw(self.qx, self.qy, self.qz, self.qw)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            qx: 0.0,
            qy: 0.0,
            qz: 0.0,
            qw: 1.0,
        }
    }
}

/// Planar position without orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    /// X coordinate in metres.
    #[serde(deserialize_with = "loose_f64")]
    pub x: f64,
    /// Y coordinate in metres.
    #[serde(deserialize_with = "loose_f64")]
    pub y: f64,
}

/// A rectangle drawn on the map, rotated by `yaw` about its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rectangle {
    /// Center of the rectangle.
    pub center: Position,
    /// Extent along the rectangle's local X axis.
    #[serde(deserialize_with = "loose_f64")]
    pub width: f64,
    /// Extent along the rectangle's local Y axis.
    #[serde(deserialize_with = "loose_f64")]
    pub height: f64,
    /// Rotation of the local frame in radians.
    #[serde(deserialize_with = "loose_f64")]
    pub yaw: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            center: Position::default(),
            width: 10.0,
            height: 10.0,
            yaw: 0.0,
        }
    }
}

/// Corner of an axis-aligned area; both coordinates are required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaCorner {
    /// X coordinate in metres.
    #[serde(deserialize_with = "loose_f64")]
    pub x: f64,
    /// Y coordinate in metres.
    #[serde(deserialize_with = "loose_f64")]
    pub y: f64,
}

/// Axis-aligned area given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepArea {
    /// Lower-left corner.
    pub min: AreaCorner,
    /// Upper-right corner.
    pub max: AreaCorner,
}

impl Default for SweepArea {
    fn default() -> Self {
        Self {
            min: AreaCorner { x: 0.0, y: 0.0 },
            max: AreaCorner { x: 10.0, y: 10.0 },
        }
    }
}

/// Planar pose in the ROS-style transform layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    x: f64,
    y: f64,
    qx: f64,
    qy: f64,
    qz: f64,
    qw: f64,
}

impl Transform {
    /// Creates a transform from a position and quaternion.
    #[must_use]
    pub const fn new(x: f64, y: f64, rotation: Quaternion) -> Self {
        Self {
            x,
            y,
            qx: rotation.qx,
            qy: rotation.qy,
            qz: rotation.qz,
            qw: rotation.qw,
        }
    }

    /// X coordinate in metres.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate in metres.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub const fn rotation(&self) -> Quaternion {
        Quaternion {
            qx: self.qx,
            qy: self.qy,
            qz: self.qz,
            qw: self.qw,
        }
    }

    /// Heading encoded by the orientation.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.rotation().yaw()
    }
}

/// One output pose plus its metadata.
///
/// Build waypoints with [`crate::make_waypoint`] or
/// [`crate::WaypointBuilder`] so every record shares the canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    transform: Transform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<WaypointOptions>,
}

impl Waypoint {
    /// Assembles a waypoint from an already rounded transform.
    #[must_use]
    pub const fn new(transform: Transform, options: Option<WaypointOptions>) -> Self {
        Self { transform, options }
    }

    /// Returns the pose.
    #[must_use]
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns the metadata, if any was attached.
    #[must_use]
    pub const fn options(&self) -> Option<&WaypointOptions> {
        self.options.as_ref()
    }

    /// Looks up one metadata entry.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.as_ref().and_then(|options| options.get(key))
    }

    /// X coordinate in metres.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.transform.x
    }

    /// Y coordinate in metres.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.transform.y
    }

    /// Heading decoded from the stored quaternion.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.transform.yaw()
    }
}
