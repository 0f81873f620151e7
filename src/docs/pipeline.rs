use super::enrich::{
    CommentEnricher, DescriptorEnricher, EnrichmentSource, FallbackEnricher, SpecOverrideEnricher,
};
use super::types::{ApiResourceDocumentation, PropertyDocumentation};
use crate::comments::StructuredComments;
use crate::config::FallbackConfig;
use crate::operation::Operation;
use crate::spec::SpecRegistry;

/// Multi-source enrichment pipeline.
///
/// For each documentation field the first source in priority order with a
/// non-empty value wins; fields no source can supply stay at their zero
/// value. Two deviations from plain first-wins, both deliberate:
///
/// * default status codes from the fallback configuration are **appended**
///   to every verb's effective codes (deduplicated by code), so globally
///   declared codes apply in addition to type-specific ones;
/// * verb-scoped lookups already union the `"*"` bucket with the verb
///   bucket inside each source.
///
/// The pipeline writes only into the freshly allocated output record; it
/// never mutates a spec, and an operation with no spec, no comments, and no
/// descriptor facts simply comes out with defaults.
pub struct EnrichmentPipeline<'a> {
    sources: Vec<Box<dyn EnrichmentSource + 'a>>,
    fallback: &'a FallbackConfig,
}

impl<'a> EnrichmentPipeline<'a> {
    pub fn new(
        registry: &'a SpecRegistry,
        comments: &'a dyn StructuredComments,
        fallback: &'a FallbackConfig,
    ) -> Self {
        let sources: Vec<Box<dyn EnrichmentSource + 'a>> = vec![
            Box::new(SpecOverrideEnricher::new(registry)),
            Box::new(CommentEnricher::new(comments)),
            Box::new(DescriptorEnricher),
            Box::new(FallbackEnricher::new(fallback)),
        ];
        EnrichmentPipeline { sources, fallback }
    }

    pub fn document_all(&self, operations: &[Operation]) -> Vec<ApiResourceDocumentation> {
        operations.iter().map(|op| self.document(op)).collect()
    }

    /// Merge every enrichment source into one documentation record for the
    /// given operation.
    pub fn document(&self, op: &Operation) -> ApiResourceDocumentation {
        let methods = op.methods();

        let mut doc = ApiResourceDocumentation {
            type_name: op.request_type.clone(),
            title: self.first_text(|s| s.title(op)).unwrap_or_default(),
            description: self.first_text(|s| s.description(op)),
            notes: self.first_text(|s| s.notes(op)),
            category: self.first_text(|s| s.category(op)),
            tags: self.first_list(|s| s.tags(op)),
            relative_paths: op.route_templates.clone(),
            verbs: methods.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        };

        for verb in &methods {
            let key = verb.to_string();

            let mut codes = self.first_list(|s| s.status_codes(op, verb));
            for code in &self.fallback.default_status_codes {
                if !codes.contains(code) {
                    codes.push(code.clone());
                }
            }
            if !codes.is_empty() {
                doc.status_codes.insert(key.clone(), codes);
            }

            let content_types = self.first_list(|s| s.content_types(op, verb));
            if !content_types.is_empty() {
                doc.content_types.insert(key.clone(), content_types);
            }

            if let Some(note) = self.first_text(|s| s.route_note(op, verb)) {
                doc.route_notes.insert(key, note);
            }
        }

        for property in &op.properties {
            doc.properties.push(PropertyDocumentation {
                name: property.name.clone(),
                title: self
                    .first_text(|s| s.property_title(op, property))
                    .unwrap_or_else(|| property.name.clone()),
                description: self.first_text(|s| s.property_description(op, property)),
                type_name: property.type_name.clone(),
                required: self
                    .first_value(|s| s.property_required(op, property))
                    .unwrap_or(false),
                allow_multiple: self
                    .first_value(|s| s.property_allow_multiple(op, property))
                    .unwrap_or(false),
                constraint: self.first_value(|s| s.property_constraint(op, property)),
            });
        }

        doc
    }

    fn first_text(
        &self,
        probe: impl Fn(&dyn EnrichmentSource) -> Option<String>,
    ) -> Option<String> {
        self.sources
            .iter()
            .find_map(|s| probe(s.as_ref()).filter(|v| !v.trim().is_empty()))
    }

    fn first_value<T>(&self, probe: impl Fn(&dyn EnrichmentSource) -> Option<T>) -> Option<T> {
        self.sources.iter().find_map(|s| probe(s.as_ref()))
    }

    /// First non-empty list wins; entries deduplicated by the element's own
    /// equality, first occurrence kept.
    fn first_list<T: Clone + PartialEq>(
        &self,
        probe: impl Fn(&dyn EnrichmentSource) -> Vec<T>,
    ) -> Vec<T> {
        for source in &self.sources {
            let values = probe(source.as_ref());
            if values.is_empty() {
                continue;
            }
            let mut out: Vec<T> = Vec::with_capacity(values.len());
            for value in values {
                if !out.contains(&value) {
                    out.push(value);
                }
            }
            return out;
        }
        Vec::new()
    }
}
