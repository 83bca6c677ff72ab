//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the XML namespaces found in
//! Inkscape-authored panel files.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Panelgen";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "panelgen";

/// Namespace of SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Namespace Inkscape uses for editor metadata such as layer labels.
pub const INKSCAPE_NAMESPACE: &str = "http://www.inkscape.org/namespaces/inkscape";

/// Label of the layer holding the component markers.
pub const COMPONENTS_LAYER_LABEL: &str = "components";

/// Knob widget used for params that do not name one.
pub const DEFAULT_PARAM_WIDGET: &str = "RoundBlackKnob";

/// Jack widget used for inputs and outputs.
pub const DEFAULT_PORT_WIDGET: &str = "PJ301MPort";

/// Light widget used for lights.
pub const DEFAULT_LIGHT_WIDGET: &str = "MediumLight<RedLight>";

/// Placeholder type for custom widgets.
pub const DEFAULT_CUSTOM_WIDGET: &str = "Widget";
