//! `bs5 render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use bs5_components::{ComponentIds, IdStrategy, Node, RenderContext, render};
use bs5_config::{CliSettings, Config, IdsConfig};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;
use crate::page::standalone_page;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Component document (`.json` for JSON, anything else is read as YAML).
    file: PathBuf,

    /// Write HTML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the fragment in a full HTML page.
    #[arg(long)]
    standalone: bool,

    /// Path to configuration file (default: auto-discover bs5.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Id strategy: process or sequential (overrides config).
    #[arg(long, env = "BS5_IDS")]
    ids: Option<bs5_config::IdStrategy>,

    /// Prefix for generated ids (overrides config).
    #[arg(long)]
    id_prefix: Option<String>,

    /// Page title for --standalone (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading, parsing or rendering fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            id_strategy: self.ids,
            id_prefix: self.id_prefix,
            title: self.title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if self.verbose
            && let Some(path) = &config.config_path
        {
            output.info(&format!("Config: {}", path.display()));
        }

        let nodes = read_document(&self.file)?;
        let mut ctx = RenderContext::with_ids(component_ids(&config.ids));
        let fragment = render(&nodes, &mut ctx)?;
        tracing::info!(
            file = %self.file.display(),
            nodes = nodes.len(),
            bytes = fragment.len(),
            "Rendered document"
        );

        let html = if self.standalone {
            standalone_page(&fragment, &config.page)
        } else {
            fragment
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                if !html.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
            }
        }

        Ok(())
    }
}

/// Id generator configured from `[ids]`.
fn component_ids(ids: &IdsConfig) -> ComponentIds {
    let strategy = match ids.strategy {
        bs5_config::IdStrategy::Process => IdStrategy::Process,
        bs5_config::IdStrategy::Sequential => IdStrategy::Sequential,
    };
    ComponentIds::new(strategy).with_prefix(ids.prefix.clone())
}

/// Parse a document, choosing the format by file extension.
fn read_document(path: &Path) -> Result<Vec<Node>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &content)
}

fn parse_document(path: &Path, content: &str) -> Result<Vec<Node>, CliError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(content).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(content).map_err(|source| CliError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
