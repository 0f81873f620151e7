use crate::comments::CommentStore;
use crate::config::load_config;
use crate::docs::FilterRequest;
use crate::linter::{has_errors, lint_operations, print_lint_issues, LintSeverity};
use crate::operation::load_operations;
use crate::service::DocService;
use crate::spec::{FileSpecSource, SpecRegistry, SpecSource};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line interface for the documentation generator
///
/// Provides commands for generating documentation snapshots, exporting
/// Postman-style collections, and linting operation descriptor files.
#[derive(Parser)]
#[command(name = "docgen")]
#[command(about = "API documentation generator CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the documentation snapshot as JSON
    Generate {
        /// Path to the operation descriptor file (YAML or JSON)
        #[arg(short = 'O', long)]
        operations: PathBuf,

        /// Path to the documentation config file (TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Optional override spec bundle (YAML or JSON)
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Optional structured-comment store (YAML or JSON)
        #[arg(long)]
        comments: Option<PathBuf>,

        /// Keep only resources with this request type name (repeatable)
        #[arg(long = "dto-name")]
        dto_names: Vec<String>,

        /// Keep only resources in this category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Keep only resources carrying this tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a Postman-style collection as JSON
    Postman {
        /// Path to the operation descriptor file (YAML or JSON)
        #[arg(short = 'O', long)]
        operations: PathBuf,

        /// Path to the documentation config file (TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Optional override spec bundle (YAML or JSON)
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Optional structured-comment store (YAML or JSON)
        #[arg(long)]
        comments: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Lint an operation descriptor file
    Lint {
        /// Path to the operation descriptor file (YAML or JSON)
        #[arg(short = 'O', long)]
        operations: PathBuf,

        /// Exit with an error if any error-level issues are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Parse command-line arguments and execute the selected command.
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

/// Execute a parsed CLI invocation.
///
/// # Errors
///
/// Returns an error if an input file cannot be loaded, the documentation
/// config fails validation, or `lint --fail-on-error` finds errors.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            operations,
            config,
            overrides,
            comments,
            dto_names,
            categories,
            tags,
            output,
        } => {
            let service = build_service(&config, overrides.as_deref(), comments.as_deref())?;
            let ops = load_operations(&operations)?;
            let request = FilterRequest {
                dto_names,
                categories,
                tags,
            };
            let documentation = service.generate_filtered(&ops, &request)?;
            let json = serde_json::to_string_pretty(&documentation)?;
            write_output(output.as_deref(), &json)
        }
        Commands::Postman {
            operations,
            config,
            overrides,
            comments,
            output,
        } => {
            let service = build_service(&config, overrides.as_deref(), comments.as_deref())?;
            let ops = load_operations(&operations)?;
            let collection = service.postman(&ops)?;
            let json = serde_json::to_string_pretty(&collection)?;
            write_output(output.as_deref(), &json)
        }
        Commands::Lint {
            operations,
            fail_on_error,
            errors_only,
        } => {
            let ops = load_operations(&operations)?;
            let issues = lint_operations(&ops);

            if errors_only {
                let errors: Vec<_> = issues
                    .iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .cloned()
                    .collect();
                print_lint_issues(&errors);
            } else {
                print_lint_issues(&issues);
            }

            if fail_on_error && has_errors(&issues) {
                anyhow::bail!("operation lint found errors");
            }
            Ok(())
        }
    }
}

fn build_service(
    config_path: &Path,
    overrides: Option<&Path>,
    comments: Option<&Path>,
) -> anyhow::Result<DocService> {
    let config = load_config(config_path)?;

    let registry = match overrides {
        Some(path) => {
            let sources: Vec<Box<dyn SpecSource>> = vec![Box::new(FileSpecSource::new(path))];
            SpecRegistry::from_sources(&sources)
        }
        None => SpecRegistry::new(),
    };

    let mut service = DocService::new(config, registry);
    if let Some(path) = comments {
        service = service.with_comments(Box::new(CommentStore::from_file(path)?));
    }
    Ok(service)
}

fn write_output(output: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write output file {path:?}")),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
