//! Crate-level test doubles and BDD tests.

use mockall::mock;

use crate::error::GenerateError;
use crate::generator::WaypointGenerator;
use crate::protocol::{Context, Waypoint};


mock! {
    pub Generator {}
    impl WaypointGenerator for Generator {
        type Output = Vec<Waypoint>;
        fn name(&self) -> &'static str;
        fn generate(&self, context: &Context) -> Result<Vec<Waypoint>, GenerateError>;
    }
}

/// Builds a mock that reports `name` any number of times.
pub(crate) fn named_mock(name: &'static str) -> MockGenerator {
    let mut generator = MockGenerator::new();
    generator.expect_name().return_const(name);
    generator
}
