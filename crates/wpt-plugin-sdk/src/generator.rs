//! The contract every waypoint generator implements.

use serde::Serialize;

use crate::error::GenerateError;
use crate::protocol::Context;

/// A stateless strategy turning one context into an ordered list of poses.
///
/// Implementations must not retain anything between calls. A missing
/// interaction input is not an error: return an empty list instead. Raise a
/// [`GenerateError`] only for input the generator cannot make sense of.
///
/// `Output` is anything that serialises to JSON. The runtime expects an
/// array and wraps any other value into a one-element array.
pub trait WaypointGenerator {
    /// Encoded result of one generation call.
    type Output: Serialize;

    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Computes the waypoints for `context`.
    ///
    /// # Errors
    ///
    /// Returns an error when the context holds values the generator cannot
    /// interpret.
    fn generate(&self, context: &Context) -> Result<Self::Output, GenerateError>;
}
