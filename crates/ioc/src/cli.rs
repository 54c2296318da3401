//! Command-line interface
//!
//! Loads configuration and an element map, builds the root container and
//! answers questions about it. Log output goes to stderr so that stdout only
//! carries command results.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ioc_domain::error::{Error, Result};
use ioc_domain::Element;
use ioc_infrastructure::config::{AppConfig, ConfigLoader};
use ioc_infrastructure::di::{init_container, list_classes};
use ioc_infrastructure::logging::init_logging;
use ioc_infrastructure::Container;

/// Command line interface for the ioc container
#[derive(Parser, Debug)]
#[command(name = "ioc")]
#[command(about = "Inspect and resolve elements of an ioc element map")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Element map file (.toml or .json), overrides `container.element_map`
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the aliases of the loaded element map
    Aliases,

    /// Show which alias and qualifier a key resolves through
    Explain {
        /// Element key, e.g. `Mailer.eu`
        key: String,
    },

    /// Create an element and print it
    Resolve {
        /// Element key, e.g. `Mailer.eu`
        key: String,

        /// Create a private element instead of the shared one
        #[arg(long)]
        private: bool,
    },

    /// List classes linked into this binary
    Classes,
}

/// Load configuration, install logging and execute the command
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = load_config(cli)?;
    init_logging(config.logging.clone())?;
    execute(cli, &config, out)
}

/// Configuration with the `--map` override applied
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(map) = &cli.map {
        if !map.exists() {
            return Err(Error::configuration(format!(
                "Element map file not found: {}",
                map.display()
            )));
        }
        config.container.element_map = Some(map.clone());
    }
    Ok(config)
}

/// Execute the command against a container built from `config`
pub fn execute<W: Write>(cli: &Cli, config: &AppConfig, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Classes => {
            for (name, description) in list_classes() {
                writeln!(out, "{name:<16} {description}")?;
            }
        }
        Command::Aliases => {
            let container = init_container(config)?;
            for alias in aliases(&container) {
                writeln!(out, "{alias}")?;
            }
        }
        Command::Explain { key } => {
            let container = init_container(config)?;
            explain(&container, key, out)?;
        }
        Command::Resolve { key, private } => {
            let container = init_container(config)?;
            let element = if *private {
                container.create_private_element(key)?
            } else {
                container.get_shared_element(key)?
            };
            writeln!(out, "{}", render_element(&element)?)?;
        }
    }
    Ok(())
}

/// Printable form of an element: JSON for data, a placeholder for instances
pub fn render_element(element: &Element) -> Result<String> {
    match element.as_value() {
        Some(value) => Ok(serde_json::to_string_pretty(value)?),
        None => Ok("<instance>".to_string()),
    }
}

fn aliases(container: &Container) -> Vec<String> {
    container
        .factory()
        .map(|factory| factory.aliases())
        .unwrap_or_default()
}

fn explain<W: Write>(container: &Arc<Container>, key: &str, out: &mut W) -> Result<()> {
    let explained = container
        .factory()
        .and_then(|factory| factory.explain(key));
    let Some((element_key, definition)) = explained else {
        return Err(Error::unknown_element(key));
    };

    let args: Vec<String> = definition
        .argument_expressions()
        .iter()
        .map(ToString::to_string)
        .collect();
    let submap = match definition.submap_source() {
        Ok(Some(submap)) => submap
            .iter()
            .map(|(alias, _)| alias.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        Ok(None) => "-".to_string(),
        Err(e) => format!("<invalid: {e}>"),
    };
    let creator = match definition.creator() {
        Ok(Some(_)) => "yes".to_string(),
        Ok(None) => "no".to_string(),
        Err(e) => format!("<invalid: {e}>"),
    };

    writeln!(out, "key:       {}", element_key.key())?;
    writeln!(out, "alias:     {}", element_key.alias())?;
    writeln!(out, "qualifier: {}", element_key.qualifier().unwrap_or("-"))?;
    writeln!(out, "class:     {}", facet(definition.class_name()))?;
    writeln!(out, "file:      {}", facet(definition.class_file()))?;
    writeln!(out, "creator:   {creator}")?;
    writeln!(out, "args:      [{}]", args.join(", "))?;
    writeln!(out, "submap:    {submap}")?;
    Ok(())
}

fn facet(value: Result<Option<&str>>) -> String {
    match value {
        Ok(Some(text)) => text.to_string(),
        Ok(None) => "-".to_string(),
        Err(e) => format!("<invalid: {e}>"),
    }
}
