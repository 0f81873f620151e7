mod builder;
mod constraint;
mod file;
mod registry;
mod status;
mod types;

pub use builder::{PropertyOverrideBuilder, ResourceSpecBuilder, SpecError};
pub use constraint::{ConstraintError, PropertyConstraint};
pub use file::FileSpecSource;
pub use registry::{SpecRegistry, SpecSource};
pub use status::StatusCode;
pub use types::{PropertyOverride, ResourceSpec, VerbScope};
