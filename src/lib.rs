//! # docgen
//!
//! **docgen** derives machine-readable API documentation (and derivative
//! formats such as Postman-style request collections) from a set of
//! operation descriptors plus optional per-type documentation overrides.
//!
//! ## Overview
//!
//! For every exposed operation the library assembles one canonical
//! "resource documentation" record by merging several independent,
//! possibly-partial metadata sources under a fixed precedence order:
//!
//! 1. explicit [`spec::ResourceSpec`] overrides from the [`spec::SpecRegistry`]
//! 2. structured-comment text supplied by the host ([`comments`])
//! 3. facts declared on the operation descriptor itself ([`operation`])
//! 4. process-wide fallback configuration ([`config`])
//!
//! The merged snapshot can then be narrowed by a conjunctive filter and
//! exported: as JSON directly, or as a Postman-style collection with
//! route templating, query-string assembly, and per-verb payload shaping.
//!
//! ## Architecture
//!
//! - **[`spec`]** - override model: fluent spec builder, status codes,
//!   constraints, verb-scoped maps, registry and file-backed spec sources
//! - **[`operation`]** - operation descriptors supplied by the hosting
//!   runtime (request type, verbs, routes, member descriptors)
//! - **[`comments`]** - structured-comment lookup collaborator
//! - **[`config`]** - mandatory API metadata plus fallback defaults
//! - **[`docs`]** - the enrichment pipeline, merged record types, and the
//!   filter engine
//! - **[`postman`]** - collection synthesis from a finished snapshot
//! - **[`service`]** - facade tying config, registry, and comments together
//! - **[`linter`]** - pre-generation checks over operation descriptor files
//! - **[`cli`]** - `docgen generate | postman | lint`
//!
//! ## Quick Start
//!
//! ```no_run
//! use docgen::config::DocumentationConfig;
//! use docgen::operation::Operation;
//! use docgen::service::DocService;
//! use docgen::spec::{ResourceSpec, SpecRegistry, StatusCode, VerbScope};
//!
//! let spec = ResourceSpec::builder()
//!     .title("Widgets")
//!     .status_codes(VerbScope::All, [StatusCode::new(429)])
//!     .property("id", |p| p.title("Identifier").required(true))
//!     .build()
//!     .expect("valid spec");
//!
//! let mut registry = SpecRegistry::new();
//! registry.register("Widget", spec);
//!
//! let config = DocumentationConfig {
//!     title: "Widget API".into(),
//!     api_version: "1.0".into(),
//!     api_base_url: "https://api.example.com".into(),
//!     contact: "api@example.com".into(),
//!     description: "Widgets over HTTP".into(),
//!     ..Default::default()
//! };
//!
//! let operations: Vec<Operation> = Vec::new(); // supplied by the host
//! let service = DocService::new(config, registry);
//! let documentation = service.generate(&operations).expect("config is valid");
//! ```
//!
//! ## Key Behaviors
//!
//! - Verb-scoped override maps carry a `"*"` bucket that always applies in
//!   addition to the verb-specific bucket, never instead of it.
//! - [`spec::StatusCode`] equality is by numeric code only, a reviewed,
//!   intentional deviation from full-value equality.
//! - Default status codes from the fallback configuration are appended to
//!   every verb's effective codes, deduplicated by code.
//! - A missing override spec, comment, or collaborator is never an error;
//!   generation degrades to defaults. Configuration preconditions fail
//!   fast before any output is produced.

pub mod cli;
pub mod comments;
pub mod config;
pub mod docs;
pub mod ids;
pub mod linter;
pub mod operation;
pub mod postman;
pub mod service;
pub mod spec;

pub use comments::{CommentStore, NoComments, StructuredComments};
pub use config::{DocumentationConfig, FallbackConfig};
pub use docs::{filter, ApiDocumentation, ApiResourceDocumentation, FilterRequest};
pub use operation::{Operation, PropertyDescriptor};
pub use service::DocService;
pub use spec::{PropertyConstraint, ResourceSpec, SpecRegistry, StatusCode, VerbScope};
