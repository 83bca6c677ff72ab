//! Construction statements for extracted components.
//!
//! Output is meant to be pasted into a `ModuleWidget` constructor, so every
//! statement is indented with two tabs. Each non-empty kind group starts with
//! a blank line; groups are emitted as params, inputs, outputs, lights, then
//! custom widgets.

use crate::config::GeneratorConfig;
use crate::models::{Component, ComponentName, ModuleIdentifier, PanelComponents, Placement};

/// Renders component collections into construction statements.
pub struct SourceGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SourceGenerator<'a> {
    /// Creates a generator using the widget types from `config`.
    #[must_use]
    pub const fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the statement block for all collections.
    ///
    /// Returns an empty string if no component was extracted.
    #[must_use]
    pub fn generate(
        &self,
        components: &PanelComponents,
        module: &ModuleIdentifier,
    ) -> String {
        let mut source = String::new();

        for (_, group) in components.groups() {
            if group.is_empty() {
                continue;
            }
            source.push('\n');
            for component in group {
                source.push_str("\n\t\t");
                source.push_str(&self.statement(component, module));
            }
        }

        source
    }

    /// Renders one component. Widget statements on rectangles are preceded by
    /// a comment line carrying the marker size.
    #[must_use]
    pub fn statement(&self, component: &Component, module: &ModuleIdentifier) -> String {
        let (centered, position) = match component.placement {
            Placement::Corner { x, y, .. } => ("", mm2px(x, y)),
            Placement::Centered { cx, cy } => ("Centered", mm2px(cx, cy)),
        };
        let symbol = component.name.symbol();

        match &component.name {
            ComponentName::Param(directive) => {
                let ui = directive.ui_kind_or(&self.config.default_param_widget);
                format!(
                    "addParam(createParam{centered}<{ui}>({position}, module, {module}::{symbol}));"
                )
            }
            ComponentName::Input(_) => format!(
                "addInput(createInput{centered}<{}>({position}, module, {module}::{symbol}));",
                self.config.port_widget
            ),
            ComponentName::Output(_) => format!(
                "addOutput(createOutput{centered}<{}>({position}, module, {module}::{symbol}));",
                self.config.port_widget
            ),
            ComponentName::Light(_) => format!(
                "addChild(createLight{centered}<{}>({position}, module, {module}::{symbol}));",
                self.config.light_widget
            ),
            ComponentName::Widget(_) => {
                let widget = format!(
                    "addChild(createWidget{centered}<{}>({position}));",
                    self.config.custom_widget
                );
                match component.placement {
                    Placement::Corner { width, height, .. } => {
                        format!("// {}\n\t\t{widget}", mm2px(width, height))
                    }
                    Placement::Centered { .. } => widget,
                }
            }
        }
    }
}

/// Generates statements with the stock widget types.
#[must_use]
pub fn components_to_source(
    components: &PanelComponents,
    module: &ModuleIdentifier,
) -> String {
    SourceGenerator::new(&GeneratorConfig::default()).generate(components, module)
}

/// Formats a millimeter vector converted to pixels.
fn mm2px(x: f64, y: f64) -> String {
    format!("mm2px(Vec({}, {}))", format_coord(x), format_coord(y))
}

/// Formats a coordinate in shortest round-trip form, keeping a trailing
/// `.0` on integral values (`10.0`, `12.346`, `50.5`).
///
/// Magnitudes from `1e16` up switch to exponent notation with an explicit
/// sign and at least two exponent digits (`1e+16`, `2.5e-05`).
#[must_use]
pub fn format_coord(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
