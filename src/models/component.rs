//! Extracted panel components and the per-kind collections that hold them.

use crate::models::{slug_to_identifier, FillColor};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Component category, decided solely by the marker's fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Knob, switch, or other module parameter (`#ff0000`)
    Param,
    /// Input jack (`#00ff00`)
    Input,
    /// Output jack (`#0000ff`)
    Output,
    /// Light (`#ff00ff`)
    Light,
    /// Custom widget to be hand-edited (`#ffff00`)
    Widget,
}

impl ComponentKind {
    /// All kinds in the order their statements are emitted.
    pub const ALL: [Self; 5] = [
        Self::Param,
        Self::Input,
        Self::Output,
        Self::Light,
        Self::Widget,
    ];

    /// Looks up the kind for a marker fill.
    ///
    /// The palette is matched as lowercase text; any other fill, including
    /// an uppercase spelling of a palette color, returns `None` and the
    /// shape is ignored.
    #[must_use]
    pub fn from_fill(fill: &FillColor) -> Option<Self> {
        match fill.as_str() {
            "ff0000" => Some(Self::Param),
            "00ff00" => Some(Self::Input),
            "0000ff" => Some(Self::Output),
            "ff00ff" => Some(Self::Light),
            "ffff00" => Some(Self::Widget),
            _ => None,
        }
    }

    /// Plural name used in summaries ("params", "inputs", ...).
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Param => "params",
            Self::Input => "inputs",
            Self::Output => "outputs",
            Self::Light => "lights",
            Self::Widget => "custom widgets",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param => write!(f, "Param"),
            Self::Input => write!(f, "Input"),
            Self::Output => write!(f, "Output"),
            Self::Light => write!(f, "Light"),
            Self::Widget => write!(f, "Widget"),
        }
    }
}

/// Where a component sits on the panel, in millimeters.
///
/// Rectangles keep their top-left corner and size; circles only know their
/// center. The variant picks the `create*` vs `create*Centered` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "placement", rename_all = "snake_case")]
pub enum Placement {
    /// Rectangle marker
    Corner {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Horizontal center
        cx: f64,
        /// Vertical center
        cy: f64,
    },
    /// Circle marker
    Centered {
        /// Horizontal center
        cx: f64,
        /// Vertical center
        cy: f64,
    },
}

impl Placement {
    /// Builds a corner placement from raw rectangle geometry, rounding every value.
    #[must_use]
    pub fn corner(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Corner {
            x: round_coord(x),
            y: round_coord(y),
            width: round_coord(width),
            height: round_coord(height),
            cx: round_coord(x + width / 2.0),
            cy: round_coord(y + height / 2.0),
        }
    }

    /// Builds a centered placement from raw circle geometry, rounding every value.
    #[must_use]
    pub fn centered(cx: f64, cy: f64) -> Self {
        Self::Centered {
            cx: round_coord(cx),
            cy: round_coord(cy),
        }
    }

    /// Center point `(cx, cy)`.
    #[must_use]
    pub const fn center(&self) -> (f64, f64) {
        match *self {
            Self::Corner { cx, cy, .. } | Self::Centered { cx, cy } => (cx, cy),
        }
    }
}

/// Rounds a coordinate to 3 decimal places.
///
/// The value is formatted with three fractional digits and parsed back, so
/// the result is the double closest to the correctly rounded decimal.
#[must_use]
pub fn round_coord(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

/// Param marker name split into the member it binds and its widget type.
///
/// A marker labelled `"freq,RoundLargeBlackKnob"` binds `Module::freq` with a
/// `RoundLargeBlackKnob`; a plain `"freq"` falls back to the default knob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDirective {
    /// Enum member name, used verbatim
    pub label: String,
    /// Widget type override
    pub ui_kind: Option<String>,
}

impl ParamDirective {
    /// Splits a raw display name on its first comma.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(',') {
            Some((label, ui_kind)) => Self {
                label: label.to_string(),
                ui_kind: (!ui_kind.is_empty()).then(|| ui_kind.to_string()),
            },
            None => Self {
                label: raw.to_string(),
                ui_kind: None,
            },
        }
    }

    /// Widget type to instantiate, falling back to `default`.
    #[must_use]
    pub fn ui_kind_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.ui_kind.as_deref().unwrap_or(default)
    }
}

/// Kind and name of a component.
///
/// The variant is the kind: params carry the raw directive, every other
/// kind a normalized identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ComponentName {
    /// Param directive built from the raw display name
    Param(ParamDirective),
    /// Input jack identifier
    Input(String),
    /// Output jack identifier
    Output(String),
    /// Light identifier
    Light(String),
    /// Custom widget identifier
    Widget(String),
}

impl ComponentName {
    /// Builds the name for `kind` from a marker's display name.
    ///
    /// Params keep the raw name as a [`ParamDirective`]; every other kind
    /// normalizes it with [`slug_to_identifier`].
    #[must_use]
    pub fn new(kind: ComponentKind, display_name: &str) -> Self {
        match kind {
            ComponentKind::Param => Self::Param(ParamDirective::parse(display_name)),
            ComponentKind::Input => Self::Input(slug_to_identifier(display_name)),
            ComponentKind::Output => Self::Output(slug_to_identifier(display_name)),
            ComponentKind::Light => Self::Light(slug_to_identifier(display_name)),
            ComponentKind::Widget => Self::Widget(slug_to_identifier(display_name)),
        }
    }

    /// Component kind.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Param(_) => ComponentKind::Param,
            Self::Input(_) => ComponentKind::Input,
            Self::Output(_) => ComponentKind::Output,
            Self::Light(_) => ComponentKind::Light,
            Self::Widget(_) => ComponentKind::Widget,
        }
    }

    /// Symbol the generated statement addresses (`Module::<symbol>`).
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Param(directive) => &directive.label,
            Self::Input(name) | Self::Output(name) | Self::Light(name) | Self::Widget(name) => {
                name
            }
        }
    }
}

/// One extracted shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// Kind and identifier or param directive
    #[serde(flatten)]
    pub name: ComponentName,
    /// Position on the panel
    #[serde(flatten)]
    pub placement: Placement,
}

impl Component {
    /// Creates a component from its display name.
    #[must_use]
    pub fn new(kind: ComponentKind, display_name: &str, placement: Placement) -> Self {
        Self {
            name: ComponentName::new(kind, display_name),
            placement,
        }
    }

    /// Component kind, fixed by its name.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.name.kind()
    }

    /// Top-left reading order: by vertical center, then horizontal center.
    #[must_use]
    pub fn reading_order(&self, other: &Self) -> Ordering {
        let (ax, ay) = self.placement.center();
        let (bx, by) = other.placement.center();
        ay.partial_cmp(&by)
            .unwrap_or(Ordering::Equal)
            .then(ax.partial_cmp(&bx).unwrap_or(Ordering::Equal))
    }
}

/// The five component collections extracted from a panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PanelComponents {
    /// Param markers
    pub params: Vec<Component>,
    /// Input jack markers
    pub inputs: Vec<Component>,
    /// Output jack markers
    pub outputs: Vec<Component>,
    /// Light markers
    pub lights: Vec<Component>,
    /// Custom widget markers
    pub widgets: Vec<Component>,
}

impl PanelComponents {
    /// Creates empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collection for `kind`.
    #[must_use]
    pub fn get(&self, kind: ComponentKind) -> &[Component] {
        match kind {
            ComponentKind::Param => &self.params,
            ComponentKind::Input => &self.inputs,
            ComponentKind::Output => &self.outputs,
            ComponentKind::Light => &self.lights,
            ComponentKind::Widget => &self.widgets,
        }
    }

    fn get_mut(&mut self, kind: ComponentKind) -> &mut Vec<Component> {
        match kind {
            ComponentKind::Param => &mut self.params,
            ComponentKind::Input => &mut self.inputs,
            ComponentKind::Output => &mut self.outputs,
            ComponentKind::Light => &mut self.lights,
            ComponentKind::Widget => &mut self.widgets,
        }
    }

    /// Appends a component to the collection matching its kind.
    pub fn push(&mut self, component: Component) {
        self.get_mut(component.kind()).push(component);
    }

    /// Sorts every collection into top-left reading order.
    ///
    /// The sort is stable: components with identical centers keep their
    /// insertion order.
    pub fn sort_reading_order(&mut self) {
        for kind in ComponentKind::ALL {
            self.get_mut(kind).sort_by(Component::reading_order);
        }
    }

    /// Iterates over `(kind, collection)` in emission order.
    pub fn groups(&self) -> impl Iterator<Item = (ComponentKind, &[Component])> + '_ {
        ComponentKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    /// Total number of components across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups().map(|(_, group)| group.len()).sum()
    }

    /// Returns true if no component was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One-line count summary, e.g.
    /// "Found 2 params, 1 inputs, 0 outputs, 0 lights, and 0 custom widgets."
    #[must_use]
    pub fn summary(&self) -> String {
        let counts: Vec<String> = self
            .groups()
            .map(|(kind, group)| format!("{} {}", group.len(), kind.plural()))
            .collect();
        match counts.split_last() {
            Some((last, rest)) => format!("Found {}, and {last}.", rest.join(", ")),
            None => "Found nothing.".to_string(),
        }
    }
}
