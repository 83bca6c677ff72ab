//! Createmodule command: generate widget source from a panel.

use crate::cli::common::{atomic_write, CliError, CliResult};
use crate::config::Config;
use crate::models::ModuleIdentifier;
use crate::services::generate_module_source;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Generate ModuleWidget statements for a module from its SVG panel
#[derive(Debug, Clone, Args)]
pub struct CreateModuleArgs {
    /// Module slug (ASCII letters, digits, '-' and '_')
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// SVG panel file with a "components" layer
    #[arg(value_name = "PANEL")]
    pub panel: Option<PathBuf>,

    /// Source file to write (statements are printed to stdout if omitted)
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Overwrite SOURCE if it already exists
    #[arg(short, long)]
    pub force: bool,
}

impl CreateModuleArgs {
    /// Execute the createmodule command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        // Validate slug before touching any file
        let identifier = ModuleIdentifier::from_slug(&self.slug)?;

        let Some(panel) = &self.panel else {
            println!("Module identifier: {identifier}");
            return Ok(());
        };

        if !panel.exists() {
            return Err(CliError::io(format!(
                "Panel not found at {}.",
                panel.display()
            )));
        }
        info!("Panel found at {}. Generating source.", panel.display());

        if let Some(source) = &self.source {
            if source.exists() && !self.force {
                return Err(CliError::validation(format!(
                    "{} already exists. Use --force to overwrite.",
                    source.display()
                )));
            }
        }

        let svg = fs::read_to_string(panel)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", panel.display())))?;

        let result = generate_module_source(&svg, &self.slug, config)?;
        info!("Components extracted from {}", panel.display());
        info!("{}", result.components.summary());
        for (kind, group) in result.components.groups() {
            for component in group {
                debug!(%kind, name = component.name.symbol(), "extracted component");
            }
        }

        match &self.source {
            Some(source) => {
                atomic_write(source, &result.source).map_err(|e| CliError::io(format!("{e:#}")))?;
                info!("Source file generated at {}", source.display());

                println!(
                    "✓ Generated {} statements for {}",
                    result.components.len(),
                    result.identifier
                );
                println!("  Output: {}", source.display());
            }
            None => println!("{}", result.source),
        }

        Ok(())
    }
}
