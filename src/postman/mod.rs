//! Postman-style collection export.
//!
//! Consumes a finished [`ApiDocumentation`](crate::docs::ApiDocumentation)
//! snapshot and synthesizes one request entry per (relative path, verb)
//! pair, with route templating, query-string assembly, payload shaping, and
//! content-type negotiation handled per HTTP verb.

mod generate;
mod types;

pub(crate) use generate::path_param_names;
pub use generate::generate;
pub use types::{Collection, DataEntry, Folder, Request};
