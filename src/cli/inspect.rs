//! Inspect command: list the components found on a panel.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::generator::format_coord;
use crate::models::{ComponentName, Placement};
use crate::services::extract_panel;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// List the components extracted from an SVG panel
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// SVG panel file with a "components" layer
    #[arg(value_name = "PANEL")]
    pub panel: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let svg = fs::read_to_string(&self.panel).map_err(|e| {
            CliError::io(format!("Failed to read {}: {e}", self.panel.display()))
        })?;

        let components = extract_panel(&svg, &config.extract)?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&components)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("{}", components.summary());
        for (kind, group) in components.groups() {
            if group.is_empty() {
                continue;
            }
            println!("\n{} ({}):", kind, group.len());
            for component in group {
                let name = match &component.name {
                    ComponentName::Param(directive) => match &directive.ui_kind {
                        Some(ui) => format!("{} <{ui}>", directive.label),
                        None => directive.label.clone(),
                    },
                    other => other.symbol().to_string(),
                };
                let position = match component.placement {
                    Placement::Corner {
                        x, y, width, height, ..
                    } => format!(
                        "corner ({}, {}) size {} x {}",
                        format_coord(x),
                        format_coord(y),
                        format_coord(width),
                        format_coord(height)
                    ),
                    Placement::Centered { cx, cy } => {
                        format!("center ({}, {})", format_coord(cx), format_coord(cy))
                    }
                };
                println!("  {name:<24} {position}");
            }
        }

        Ok(())
    }
}
