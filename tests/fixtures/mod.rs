//! Shared test fixtures for panel and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Marker colors, one per component kind.
pub const PARAM: &str = "#ff0000";
pub const INPUT: &str = "#00ff00";
pub const OUTPUT: &str = "#0000ff";
pub const LIGHT: &str = "#ff00ff";
pub const WIDGET: &str = "#ffff00";

/// Circle marker named by `id`.
pub fn circle(id: &str, cx: f64, cy: f64, fill: &str) -> String {
    format!(
        r#"<circle id="{id}" cx="{cx}" cy="{cy}" r="2.5" style="fill:{fill};fill-opacity:1;stroke:none"/>"#
    )
}

/// Rectangle marker named by `inkscape:label`.
pub fn labeled_rect(label: &str, x: f64, y: f64, width: f64, height: f64, fill: &str) -> String {
    format!(
        r#"<rect id="rect-{x}-{y}" inkscape:label="{label}" x="{x}" y="{y}" width="{width}" height="{height}" style="fill:{fill};stroke-width:0.26"/>"#,
    )
}

/// Wraps shapes in an Inkscape document with a `components` layer.
pub fn panel_svg(shapes: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg
   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
   xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
   xmlns="http://www.w3.org/2000/svg"
   width="30.48mm" height="128.5mm" viewBox="0 0 30.48 128.5" version="1.1">
  <sodipodi:namedview id="base" inkscape:document-units="mm"/>
  <g inkscape:label="panel" inkscape:groupmode="layer" id="layer1">
    <rect id="background" x="0" y="0" width="30.48" height="128.5" style="fill:#e6e6e6"/>
    <circle id="stray" cx="1" cy="1" r="1" style="fill:#00ff00"/>
  </g>
  <g inkscape:groupmode="layer" id="layer2" inkscape:label="components" style="display:inline">
    {}
  </g>
</svg>
"#,
        shapes.join("\n    ")
    )
}

/// A small oscillator panel covering every kind and both placements.
pub fn vco_panel() -> String {
    panel_svg(&[
        circle("PITCH_PARAM", 15.24, 46.063, PARAM),
        labeled_rect("FINE_PARAM,Trimpot", 23.0, 44.0, 4.5, 4.5, PARAM),
        circle("PITCH_INPUT", 15.24, 77.478, INPUT),
        circle("fm-input", 7.62, 77.478, INPUT),
        circle("SINE_OUTPUT", 15.24, 108.713, OUTPUT),
        circle("BLINK_LIGHT", 15.24, 25.81, LIGHT),
        labeled_rect("display", 3.5, 10.123_456, 23.8, 8.000_4, WIDGET),
        circle("decoration", 2.0, 2.0, "#333333"),
    ])
}

/// Writes `svg` to a temp directory and returns its path.
///
/// The `TempDir` must be kept alive for the file to exist.
pub fn create_temp_panel_file(svg: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("panel.svg");
    fs::write(&path, svg).expect("Failed to write panel");
    (path, temp_dir)
}

/// Config path inside `temp_dir` that does not exist, so defaults apply
/// regardless of the user's own configuration.
pub fn isolated_config(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("no-config.toml")
}
