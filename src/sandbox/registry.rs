//! Static table of component kinds and their editable parameters.
//!
//! Bounds here are advisory: they only feed the hint text shown next to a
//! parameter. The simulation server is the sole validator of submitted values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SandboxError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Resistor,
    #[serde(rename = "DC_Battery")]
    DcBattery,
    #[serde(rename = "Light_Bulb")]
    LightBulb,
    Junction,
    Voltmeter,
    Ammeter,
    Capacitor,
    Switch,
    Wire,
}

impl ComponentKind {
    /// Toolbox order.
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Resistor,
        ComponentKind::DcBattery,
        ComponentKind::LightBulb,
        ComponentKind::Junction,
        ComponentKind::Voltmeter,
        ComponentKind::Ammeter,
        ComponentKind::Capacitor,
        ComponentKind::Switch,
        ComponentKind::Wire,
    ];

    /// Name used in identifiers, payloads and icon file names.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Resistor => "Resistor",
            ComponentKind::DcBattery => "DC_Battery",
            ComponentKind::LightBulb => "Light_Bulb",
            ComponentKind::Junction => "Junction",
            ComponentKind::Voltmeter => "Voltmeter",
            ComponentKind::Ammeter => "Ammeter",
            ComponentKind::Capacitor => "Capacitor",
            ComponentKind::Switch => "Switch",
            ComponentKind::Wire => "Wire",
        }
    }

    pub fn icon_path(self, asset_base: &str) -> String {
        format!("{}/{}.png", asset_base.trim_end_matches('/'), self.name())
    }

    /// Wire is structural: it connects placed components instead of being one.
    pub fn is_placeable(self) -> bool {
        self != ComponentKind::Wire
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SandboxError::UnknownComponentKind(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwitchState {
    On,
    Off,
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchState::On => f.write_str("ON"),
            SwitchState::Off => f.write_str("OFF"),
        }
    }
}

/// A typed parameter value. Serializes as a bare JSON number or string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Count(u32),
    Real(f64),
    State(SwitchState),
}

impl ParameterValue {
    pub fn same_type(&self, other: &ParameterValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Count(n) => write!(f, "{n}"),
            ParameterValue::Real(x) => write!(f, "{x}"),
            ParameterValue::State(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    /// Inclusive numeric range.
    Continuous { lower: f64, upper: f64 },
    /// Exactly two legal values.
    Discrete(ParameterValue, ParameterValue),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub default: ParameterValue,
    pub bounds: Bounds,
    pub unit: Option<&'static str>,
    /// Exactly zero is accepted even though it lies below a continuous range.
    pub zero_allowed: bool,
}

impl ParameterSpec {
    const fn continuous(
        name: &'static str,
        default: f64,
        lower: f64,
        upper: f64,
        unit: &'static str,
    ) -> Self {
        Self {
            name,
            default: ParameterValue::Real(default),
            bounds: Bounds::Continuous { lower, upper },
            unit: Some(unit),
            zero_allowed: false,
        }
    }

    const fn discrete(
        name: &'static str,
        default: ParameterValue,
        a: ParameterValue,
        b: ParameterValue,
    ) -> Self {
        Self {
            name,
            default,
            bounds: Bounds::Discrete(a, b),
            unit: None,
            zero_allowed: false,
        }
    }

    const fn or_zero(self) -> Self {
        Self {
            zero_allowed: true,
            ..self
        }
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self.bounds, Bounds::Discrete(..))
    }

    /// Whether `value` is inside the advisory bounds.
    pub fn admits(&self, value: &ParameterValue) -> bool {
        match (self.bounds, value) {
            (Bounds::Continuous { lower, upper }, ParameterValue::Real(x)) => {
                (self.zero_allowed && *x == 0.0) || (lower..=upper).contains(x)
            }
            (Bounds::Continuous { .. }, _) => false,
            (Bounds::Discrete(a, b), v) => *v == a || *v == b,
        }
    }

    /// Hint text shown when the user asks about this parameter.
    pub fn info(&self) -> String {
        match self.bounds {
            Bounds::Discrete(a, b) => format!("enter either {a} or {b}"),
            Bounds::Continuous { lower, upper } => format!(
                "enter {}a value in the inclusive range ({lower}, {upper}), units: {}",
                if self.zero_allowed { "0 or " } else { "" },
                self.unit.unwrap_or("none")
            ),
        }
    }
}

const RESISTOR: &[ParameterSpec] =
    &[ParameterSpec::continuous("resistance", 5.0, 1e-6, 1e4, "Ohms")];

const DC_BATTERY: &[ParameterSpec] =
    &[ParameterSpec::continuous("voltage", 9.0, 1e-3, 1e4, "Volts")];

const LIGHT_BULB: &[ParameterSpec] = &[
    ParameterSpec::continuous("resistance", 5.0, 1e-6, 1e4, "Ohms"),
    ParameterSpec::continuous("wattage", 16.2, 1e-6, 1e6, "Watts"),
];

const JUNCTION: &[ParameterSpec] = &[ParameterSpec::discrete(
    "num_cxns",
    ParameterValue::Count(3),
    ParameterValue::Count(3),
    ParameterValue::Count(4),
)];

// An uncharged capacitor is legal; anything else must reach the lower bound.
const CAPACITOR: &[ParameterSpec] = &[
    ParameterSpec::continuous("voltage", 0.0, 1e-3, 1e3, "Volts").or_zero(),
    ParameterSpec::continuous("capacitance", 10.0, 1e-3, 1e4, "Microfarads"),
];

const SWITCH: &[ParameterSpec] = &[ParameterSpec::discrete(
    "state",
    ParameterValue::State(SwitchState::Off),
    ParameterValue::State(SwitchState::On),
    ParameterValue::State(SwitchState::Off),
)];

/// Editable parameters of `kind`, in display order. Empty for structural and
/// read-only kinds.
pub fn lookup(kind: ComponentKind) -> &'static [ParameterSpec] {
    match kind {
        ComponentKind::Resistor => RESISTOR,
        ComponentKind::DcBattery => DC_BATTERY,
        ComponentKind::LightBulb => LIGHT_BULB,
        ComponentKind::Junction => JUNCTION,
        ComponentKind::Capacitor => CAPACITOR,
        ComponentKind::Switch => SWITCH,
        ComponentKind::Voltmeter | ComponentKind::Ammeter | ComponentKind::Wire => &[],
    }
}

pub fn spec_of(kind: ComponentKind, name: &str) -> Result<&'static ParameterSpec> {
    lookup(kind)
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| SandboxError::UnknownParameter {
            kind,
            name: name.to_string(),
        })
}

/// Physical unit of a parameter name, if it has one.
pub fn unit_of(name: &str) -> Option<&'static str> {
    ComponentKind::ALL
        .into_iter()
        .flat_map(lookup)
        .find(|spec| spec.name == name)
        .and_then(|spec| spec.unit)
}

pub fn get_info(kind: ComponentKind, name: &str) -> Result<String> {
    spec_of(kind, name).map(ParameterSpec::info)
}
