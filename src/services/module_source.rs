//! Panel-to-source pipeline.
//!
//! Validates the slug, parses the panel text, extracts the components, and
//! renders the statements. Either the whole result is returned or an error;
//! nothing is written anywhere.

use crate::config::{Config, ExtractConfig};
use crate::error::Result;
use crate::generator::SourceGenerator;
use crate::models::{ModuleIdentifier, PanelComponents};
use crate::parser::{Document, PanelExtractor};

/// Result of generating a module's widget source.
#[derive(Debug, Clone)]
pub struct ModuleSource {
    /// Identifier derived from the slug
    pub identifier: ModuleIdentifier,
    /// Components extracted from the panel, in reading order
    pub components: PanelComponents,
    /// Generated construction statements
    pub source: String,
}

/// Parses panel text and extracts its components.
pub fn extract_panel(svg: &str, config: &ExtractConfig) -> Result<PanelComponents> {
    let document = Document::parse(svg)?;
    PanelExtractor::new(config).extract(&document)
}

/// Generates widget source for the module `slug` from panel text.
///
/// The slug is validated before the panel is looked at.
///
/// # Errors
///
/// Returns the first [`PanelError`](crate::error::PanelError) raised by slug
/// validation, document parsing, or extraction.
pub fn generate_module_source(svg: &str, slug: &str, config: &Config) -> Result<ModuleSource> {
    let identifier = ModuleIdentifier::from_slug(slug)?;
    let components = extract_panel(svg, &config.extract)?;
    let source = SourceGenerator::new(&config.generator).generate(&components, &identifier);

    Ok(ModuleSource {
        identifier,
        components,
        source,
    })
}
