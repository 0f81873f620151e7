use crate::comments::{NoComments, StructuredComments};
use crate::config::DocumentationConfig;
use crate::docs::{filter, ApiDocumentation, EnrichmentPipeline, FilterRequest};
use crate::operation::Operation;
use crate::postman::{self, Collection};
use crate::spec::SpecRegistry;
use tracing::info;

/// Facade tying one configuration, one spec registry, and one comment
/// source into a documentation service.
///
/// Every generation pass validates the configuration first (fail fast,
/// before any output), then runs the enrichment pipeline over the supplied
/// operation list into a freshly allocated snapshot. The service holds no
/// mutable state, so one instance can serve concurrent passes.
pub struct DocService {
    config: DocumentationConfig,
    registry: SpecRegistry,
    comments: Box<dyn StructuredComments>,
}

impl DocService {
    pub fn new(config: DocumentationConfig, registry: SpecRegistry) -> Self {
        DocService {
            config,
            registry,
            comments: Box::new(NoComments),
        }
    }

    pub fn with_comments(mut self, comments: Box<dyn StructuredComments>) -> Self {
        self.comments = comments;
        self
    }

    pub fn config(&self) -> &DocumentationConfig {
        &self.config
    }

    /// Build the full documentation snapshot for the given operations.
    pub fn generate(&self, operations: &[Operation]) -> anyhow::Result<ApiDocumentation> {
        self.config.validate()?;

        let pipeline = EnrichmentPipeline::new(
            &self.registry,
            self.comments.as_ref(),
            &self.config.fallback,
        );
        let resources = pipeline.document_all(operations);
        info!(
            operations = operations.len(),
            specs = self.registry.len(),
            "generated documentation snapshot"
        );

        Ok(ApiDocumentation {
            title: self.config.title.clone(),
            api_version: self.config.api_version.clone(),
            api_base_url: self.config.api_base_url.clone(),
            contact: self.config.contact.clone(),
            licence_url: self.config.licence_url.clone(),
            description: self.config.description.clone(),
            resources,
        })
    }

    /// Build the snapshot and narrow it with the given filter request.
    pub fn generate_filtered(
        &self,
        operations: &[Operation],
        request: &FilterRequest,
    ) -> anyhow::Result<ApiDocumentation> {
        let documentation = self.generate(operations)?;
        if request.is_empty() {
            return Ok(documentation);
        }
        Ok(filter(&documentation, request))
    }

    /// Build the snapshot and export it as a Postman-style collection.
    pub fn postman(&self, operations: &[Operation]) -> anyhow::Result<Collection> {
        let documentation = self.generate(operations)?;
        Ok(postman::generate(&documentation))
    }
}
