//! Component extraction from the `components` layer of a panel.
//!
//! Markers are plain circles and rectangles drawn on a dedicated Inkscape
//! layer. Their fill color decides the component kind, their label (or id)
//! the symbol name, and their geometry the placement.

use crate::config::ExtractConfig;
use crate::constants::{INKSCAPE_NAMESPACE, SVG_NAMESPACE};
use crate::error::{PanelError, Result};
use crate::models::{Component, ComponentKind, FillColor, PanelComponents, Placement};
use crate::parser::svg::{Document, Element};

/// Extracts component markers from a parsed panel document.
pub struct PanelExtractor<'a> {
    config: &'a ExtractConfig,
}

impl<'a> PanelExtractor<'a> {
    /// Creates an extractor with the given layer settings.
    #[must_use]
    pub const fn new(config: &'a ExtractConfig) -> Self {
        Self { config }
    }

    /// Extracts the five component collections, each in reading order.
    ///
    /// Shapes whose fill color is not in the palette are skipped.
    ///
    /// # Errors
    ///
    /// - [`PanelError::LayerNotFound`] if no group carries the layer label
    /// - [`PanelError::AmbiguousLayer`] if several do and `strict_layer` is set
    /// - [`PanelError::StyleParse`] if a shape has no `fill:#RRGGBB`
    /// - [`PanelError::UnnamedShape`] if a kept shape has no label or id
    /// - [`PanelError::InvalidGeometry`] for missing or non-numeric geometry
    pub fn extract(&self, document: &Document) -> Result<PanelComponents> {
        let layer = self.find_layer(document)?;

        let circles = layer
            .descendants()
            .filter(|el| el.is(SVG_NAMESPACE, "circle"));
        let rects = layer
            .descendants()
            .filter(|el| el.is(SVG_NAMESPACE, "rect"));

        let mut components = PanelComponents::new();
        for shape in circles.chain(rects) {
            if let Some(component) = extract_shape(shape)? {
                components.push(component);
            }
        }

        components.sort_reading_order();
        Ok(components)
    }

    /// Finds the layer group labelled with the configured label.
    fn find_layer<'d>(&self, document: &'d Document) -> Result<&'d Element> {
        let label = self.config.layer_label.as_str();
        let mut layers = document.root().descendants().filter(|el| {
            el.is(SVG_NAMESPACE, "g") && el.attr(Some(INKSCAPE_NAMESPACE), "label") == Some(label)
        });

        let first = layers.next().ok_or_else(|| PanelError::LayerNotFound {
            label: label.to_string(),
        })?;

        if self.config.strict_layer {
            let extra = layers.count();
            if extra > 0 {
                return Err(PanelError::AmbiguousLayer {
                    label: label.to_string(),
                    count: extra + 1,
                });
            }
        }

        Ok(first)
    }
}

/// Extracts components with the default `components` layer settings.
pub fn panel_to_components(document: &Document) -> Result<PanelComponents> {
    PanelExtractor::new(&ExtractConfig::default()).extract(document)
}

/// Turns one circle or rectangle into a component, or `None` for colors
/// outside the palette.
fn extract_shape(shape: &Element) -> Result<Option<Component>> {
    let tag = shape.name.local.as_str();
    let display_name = shape
        .attr(Some(INKSCAPE_NAMESPACE), "label")
        .or_else(|| shape.attr(None, "id"));
    let element = display_name.unwrap_or(tag);

    let style = shape
        .attr(None, "style")
        .ok_or_else(|| PanelError::StyleParse {
            element: element.to_string(),
            reason: "missing style attribute".to_string(),
        })?;
    let fill = FillColor::from_style(style).map_err(|e| PanelError::StyleParse {
        element: element.to_string(),
        reason: e.to_string(),
    })?;

    let Some(kind) = ComponentKind::from_fill(&fill) else {
        return Ok(None);
    };

    let display_name = display_name.ok_or_else(|| PanelError::UnnamedShape {
        tag: tag.to_string(),
    })?;

    let placement = if tag == "rect" {
        Placement::corner(
            length(shape, "x", display_name)?,
            length(shape, "y", display_name)?,
            length(shape, "width", display_name)?,
            length(shape, "height", display_name)?,
        )
    } else {
        Placement::centered(
            length(shape, "cx", display_name)?,
            length(shape, "cy", display_name)?,
        )
    };

    Ok(Some(Component::new(kind, display_name, placement)))
}

/// Reads a numeric geometry attribute.
fn length(shape: &Element, attribute: &str, element: &str) -> Result<f64> {
    let invalid = |reason: String| PanelError::InvalidGeometry {
        element: element.to_string(),
        attribute: attribute.to_string(),
        reason,
    };

    let raw = shape
        .attr(None, attribute)
        .ok_or_else(|| invalid("is missing".to_string()))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid(format!("is not a number (\"{raw}\")")))?;

    if !value.is_finite() {
        return Err(invalid(format!("is not finite (\"{raw}\")")));
    }
    Ok(value)
}
