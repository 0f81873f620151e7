//! # CLI Module
//!
//! Command-line interface for the documentation generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Build the documentation snapshot for an operation descriptor file:
//!
//! ```bash
//! docgen generate --operations ops.yaml --config docgen.toml \
//!     --overrides specs.yaml --output api.json
//! ```
//!
//! Filter flags narrow the snapshot before it is written:
//!
//! ```bash
//! docgen generate --operations ops.yaml --config docgen.toml \
//!     --tag Public --category Inventory
//! ```
//!
//! ### `postman`
//!
//! Export a Postman-style collection:
//!
//! ```bash
//! docgen postman --operations ops.yaml --config docgen.toml \
//!     --output collection.json
//! ```
//!
//! ### `lint`
//!
//! Check an operation descriptor file before generation:
//!
//! ```bash
//! docgen lint --operations ops.yaml --fail-on-error
//! ```

mod commands;


pub use commands::{run, run_cli, Cli, Commands};
