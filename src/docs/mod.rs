mod enrich;
mod filter;
mod pipeline;
mod types;

pub use enrich::{
    CommentEnricher, DescriptorEnricher, EnrichmentSource, FallbackEnricher, SpecOverrideEnricher,
};
pub use filter::{filter, FilterRequest};
pub use pipeline::EnrichmentPipeline;
pub use types::{ApiDocumentation, ApiResourceDocumentation, PropertyDocumentation};
