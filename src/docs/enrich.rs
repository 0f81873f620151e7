use crate::comments::StructuredComments;
use crate::config::FallbackConfig;
use crate::operation::{Operation, PropertyDescriptor};
use crate::spec::{PropertyConstraint, SpecRegistry, StatusCode};
use http::Method;

/// A source capable of supplying values for documentation fields.
///
/// Sources are consulted in priority order by the
/// [`EnrichmentPipeline`](super::EnrichmentPipeline); every probe has an
/// empty default so a source only implements the fields it can speak to.
/// Probes never fail: a source with nothing to say returns `None` or an
/// empty list.
pub trait EnrichmentSource {
    /// Identifier used in log lines.
    fn name(&self) -> &'static str;

    fn title(&self, _op: &Operation) -> Option<String> {
        None
    }

    fn description(&self, _op: &Operation) -> Option<String> {
        None
    }

    fn notes(&self, _op: &Operation) -> Option<String> {
        None
    }

    fn category(&self, _op: &Operation) -> Option<String> {
        None
    }

    fn tags(&self, _op: &Operation) -> Vec<String> {
        Vec::new()
    }

    fn status_codes(&self, _op: &Operation, _verb: &Method) -> Vec<StatusCode> {
        Vec::new()
    }

    fn content_types(&self, _op: &Operation, _verb: &Method) -> Vec<String> {
        Vec::new()
    }

    fn route_note(&self, _op: &Operation, _verb: &Method) -> Option<String> {
        None
    }

    fn property_title(&self, _op: &Operation, _property: &PropertyDescriptor) -> Option<String> {
        None
    }

    fn property_description(
        &self,
        _op: &Operation,
        _property: &PropertyDescriptor,
    ) -> Option<String> {
        None
    }

    fn property_required(&self, _op: &Operation, _property: &PropertyDescriptor) -> Option<bool> {
        None
    }

    fn property_allow_multiple(
        &self,
        _op: &Operation,
        _property: &PropertyDescriptor,
    ) -> Option<bool> {
        None
    }

    fn property_constraint(
        &self,
        _op: &Operation,
        _property: &PropertyDescriptor,
    ) -> Option<PropertyConstraint> {
        None
    }
}

/// Highest priority: explicit [`ResourceSpec`](crate::spec::ResourceSpec)
/// overrides from the registry. Never mutates a spec; only reads it.
pub struct SpecOverrideEnricher<'a> {
    registry: &'a SpecRegistry,
}

impl<'a> SpecOverrideEnricher<'a> {
    pub fn new(registry: &'a SpecRegistry) -> Self {
        SpecOverrideEnricher { registry }
    }

    fn spec(&self, op: &Operation) -> Option<&crate::spec::ResourceSpec> {
        self.registry.get(&op.request_type)
    }

    fn over(
        &self,
        op: &Operation,
        property: &PropertyDescriptor,
    ) -> Option<&crate::spec::PropertyOverride> {
        self.spec(op)?.property(&property.name)
    }
}

impl EnrichmentSource for SpecOverrideEnricher<'_> {
    fn name(&self) -> &'static str {
        "spec-override"
    }

    fn title(&self, op: &Operation) -> Option<String> {
        self.spec(op)?.title.clone()
    }

    fn description(&self, op: &Operation) -> Option<String> {
        self.spec(op)?.description.clone()
    }

    fn notes(&self, op: &Operation) -> Option<String> {
        self.spec(op)?.notes.clone()
    }

    fn category(&self, op: &Operation) -> Option<String> {
        self.spec(op)?.category.clone()
    }

    fn tags(&self, op: &Operation) -> Vec<String> {
        self.spec(op).map(|s| s.tags.clone()).unwrap_or_default()
    }

    fn status_codes(&self, op: &Operation, verb: &Method) -> Vec<StatusCode> {
        self.spec(op)
            .map(|s| s.status_codes_for(verb))
            .unwrap_or_default()
    }

    fn content_types(&self, op: &Operation, verb: &Method) -> Vec<String> {
        self.spec(op)
            .map(|s| s.content_types_for(verb))
            .unwrap_or_default()
    }

    fn route_note(&self, op: &Operation, verb: &Method) -> Option<String> {
        self.spec(op)?.route_note_for(verb).map(str::to_string)
    }

    fn property_title(&self, op: &Operation, property: &PropertyDescriptor) -> Option<String> {
        self.over(op, property)?.title.clone()
    }

    fn property_description(
        &self,
        op: &Operation,
        property: &PropertyDescriptor,
    ) -> Option<String> {
        self.over(op, property)?.description.clone()
    }

    fn property_required(&self, op: &Operation, property: &PropertyDescriptor) -> Option<bool> {
        self.over(op, property)?.required
    }

    fn property_allow_multiple(
        &self,
        op: &Operation,
        property: &PropertyDescriptor,
    ) -> Option<bool> {
        self.over(op, property)?.allow_multiple
    }

    fn property_constraint(
        &self,
        op: &Operation,
        property: &PropertyDescriptor,
    ) -> Option<PropertyConstraint> {
        self.over(op, property)?.constraint.clone()
    }
}

/// Second priority: structured-comment text (summary → description,
/// remarks → notes, member summary → property description).
pub struct CommentEnricher<'a> {
    comments: &'a dyn StructuredComments,
}

impl<'a> CommentEnricher<'a> {
    pub fn new(comments: &'a dyn StructuredComments) -> Self {
        CommentEnricher { comments }
    }
}

impl EnrichmentSource for CommentEnricher<'_> {
    fn name(&self) -> &'static str {
        "structured-comments"
    }

    fn description(&self, op: &Operation) -> Option<String> {
        self.comments.type_summary(&op.request_type)
    }

    fn notes(&self, op: &Operation) -> Option<String> {
        self.comments.type_remarks(&op.request_type)
    }

    fn property_description(
        &self,
        op: &Operation,
        property: &PropertyDescriptor,
    ) -> Option<String> {
        self.comments.member_summary(&op.request_type, &property.name)
    }
}

/// Third priority: facts declared on the operation descriptor itself, the
/// explicit stand-in for what a reflecting host would discover at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorEnricher;

impl EnrichmentSource for DescriptorEnricher {
    fn name(&self) -> &'static str {
        "descriptor"
    }

    fn title(&self, op: &Operation) -> Option<String> {
        Some(op.request_type.clone())
    }

    fn content_types(&self, op: &Operation, _verb: &Method) -> Vec<String> {
        op.content_types.clone()
    }

    fn property_title(&self, _op: &Operation, property: &PropertyDescriptor) -> Option<String> {
        Some(property.name.clone())
    }

    fn property_required(&self, _op: &Operation, property: &PropertyDescriptor) -> Option<bool> {
        Some(property.required)
    }

    fn property_allow_multiple(
        &self,
        _op: &Operation,
        property: &PropertyDescriptor,
    ) -> Option<bool> {
        Some(property.allow_multiple)
    }
}

/// Lowest priority: process-wide fallback configuration. Default status
/// codes are handled additively by the pipeline, not through first-wins
/// probing.
pub struct FallbackEnricher<'a> {
    config: &'a FallbackConfig,
}

impl<'a> FallbackEnricher<'a> {
    pub fn new(config: &'a FallbackConfig) -> Self {
        FallbackEnricher { config }
    }
}

impl EnrichmentSource for FallbackEnricher<'_> {
    fn name(&self) -> &'static str {
        "fallback-config"
    }

    fn title(&self, op: &Operation) -> Option<String> {
        self.config.title_resolver.as_ref().and_then(|r| r(op))
    }

    fn description(&self, op: &Operation) -> Option<String> {
        self.config.description_resolver.as_ref().and_then(|r| r(op))
    }

    fn notes(&self, op: &Operation) -> Option<String> {
        self.config
            .notes_resolver
            .as_ref()
            .and_then(|r| r(op))
            .or_else(|| self.config.fallback_notes.clone())
    }

    fn category(&self, _op: &Operation) -> Option<String> {
        self.config.fallback_category.clone()
    }

    fn tags(&self, _op: &Operation) -> Vec<String> {
        self.config.default_tags.clone()
    }
}
