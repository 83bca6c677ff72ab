//! Panelgen Library
//!
//! This library turns the `components` layer of a VCV Rack SVG panel into
//! `ModuleWidget` construction statements: it parses the panel, classifies
//! each marker shape by fill color, orders the markers in reading order, and
//! renders one `addParam`/`addInput`/`addOutput`/`addChild` call per marker.
//!
//! ```
//! use panelgen::config::Config;
//! use panelgen::services::generate_module_source;
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"
//!     xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape">
//!   <g inkscape:label="components">
//!     <circle id="cv-in" cx="50.5" cy="60.25" r="3" style="fill:#00ff00"/>
//!   </g>
//! </svg>"#;
//!
//! let result = generate_module_source(svg, "MyModule", &Config::new()).unwrap();
//! assert!(result.source.contains(
//!     "addInput(createInputCentered<PJ301MPort>(mm2px(Vec(50.5, 60.25)), module, MyModule::Cv_in));"
//! ));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod services;
