//! Built-in parts library.
//!
//! Templates for the common through-hole parts a hobbyist reaches for.
//! A template is a component minus its identity; [`instantiate`] stamps out a
//! concrete [`Component`] with an id and reference designator.

use crate::schema::{Component, ComponentKind, Facing, Footprint, Pin, PinKind};
use std::collections::HashMap;

/// A catalog entry: everything about a part except its identity.
#[derive(Debug, Clone)]
pub struct PartTemplate {
    /// Catalog id, e.g. `"resistor-220"`.
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub kind: ComponentKind,
    pub value: Option<&'static str>,
    pub footprint: Footprint,
    /// Pin (name, kind) pairs in physical order.
    pub pins: &'static [(&'static str, PinKind)],
}

/// The built-in part templates.
pub fn templates() -> Vec<PartTemplate> {
    use ComponentKind::*;
    use PinKind::{Analog, Ground, Io};

    vec![
        PartTemplate {
            id: "resistor-220",
            name: "220Ω Resistor",
            category: "Resistors",
            kind: Resistor,
            value: Some("220Ω"),
            footprint: Footprint::Axial,
            pins: &[("pin1", Io), ("pin2", Io)],
        },
        PartTemplate {
            id: "resistor-1k",
            name: "1kΩ Resistor",
            category: "Resistors",
            kind: Resistor,
            value: Some("1kΩ"),
            footprint: Footprint::Axial,
            pins: &[("pin1", Io), ("pin2", Io)],
        },
        PartTemplate {
            id: "resistor-10k",
            name: "10kΩ Resistor",
            category: "Resistors",
            kind: Resistor,
            value: Some("10kΩ"),
            footprint: Footprint::Axial,
            pins: &[("pin1", Io), ("pin2", Io)],
        },
        PartTemplate {
            id: "led-red",
            name: "Red LED",
            category: "LEDs",
            kind: Led,
            value: Some("red"),
            footprint: Footprint::Led5mm,
            pins: &[("anode", Io), ("cathode", Io)],
        },
        PartTemplate {
            id: "led-green",
            name: "Green LED",
            category: "LEDs",
            kind: Led,
            value: Some("green"),
            footprint: Footprint::Led5mm,
            pins: &[("anode", Io), ("cathode", Io)],
        },
        PartTemplate {
            id: "cap-100nf",
            name: "100nF Ceramic Capacitor",
            category: "Capacitors",
            kind: Capacitor,
            value: Some("100nF"),
            footprint: Footprint::Radial,
            pins: &[("pin1", Io), ("pin2", Io)],
        },
        PartTemplate {
            id: "cap-10uf",
            name: "10µF Electrolytic Capacitor",
            category: "Capacitors",
            kind: Capacitor,
            value: Some("10µF"),
            footprint: Footprint::Axial,
            pins: &[("positive", Io), ("negative", Io)],
        },
        PartTemplate {
            id: "ic-555",
            name: "NE555 Timer",
            category: "ICs",
            kind: Ic,
            value: Some("NE555"),
            footprint: Footprint::Dip,
            pins: &[
                ("GND", Ground),
                ("TRIG", Io),
                ("OUT", Io),
                ("RESET", Io),
                ("CTRL", Analog),
                ("THRES", Io),
                ("DISCH", Io),
                ("VCC", PinKind::Power),
            ],
        },
        PartTemplate {
            id: "transistor-2n2222",
            name: "2N2222 NPN Transistor",
            category: "Transistors",
            kind: Transistor,
            value: Some("2N2222"),
            footprint: Footprint::To92,
            pins: &[("emitter", Io), ("base", Io), ("collector", Io)],
        },
        PartTemplate {
            id: "button-tactile",
            name: "Tactile Push Button",
            category: "Switches",
            kind: Button,
            value: None,
            footprint: Footprint::Button,
            pins: &[("pin1", Io), ("pin2", Io)],
        },
        PartTemplate {
            id: "pot-10k",
            name: "10kΩ Potentiometer",
            category: "Resistors",
            kind: Pot,
            value: Some("10kΩ"),
            footprint: Footprint::Pot,
            pins: &[("ccw", Io), ("wiper", Analog), ("cw", Io)],
        },
        PartTemplate {
            id: "jumper",
            name: "Jumper Wire",
            category: "Wires",
            kind: Jumper,
            value: None,
            footprint: Footprint::Jumper,
            pins: &[("a", Io), ("b", Io)],
        },
        PartTemplate {
            id: "power-9v",
            name: "9V Battery Clip",
            category: "Power",
            kind: Power,
            value: Some("9V"),
            footprint: Footprint::Power,
            pins: &[("positive", PinKind::Power), ("negative", Ground)],
        },
    ]
}

/// Find a template by catalog id.
pub fn template(id: &str) -> Option<PartTemplate> {
    templates().into_iter().find(|t| t.id == id)
}

/// Stamp out a concrete component from a template.
///
/// Pins are numbered 1..N in template order and the pin map is filled from
/// that numbering.
pub fn instantiate(template: &PartTemplate, id: impl Into<String>, reference: impl Into<String>) -> Component {
    let pins: Vec<Pin> = template
        .pins
        .iter()
        .map(|(name, kind)| Pin {
            id: (*name).into(),
            name: (*name).into(),
            kind: *kind,
        })
        .collect();
    let pin_map: HashMap<String, String> = template
        .pins
        .iter()
        .enumerate()
        .map(|(i, (name, _))| ((*name).to_string(), (i + 1).to_string()))
        .collect();

    Component {
        id: id.into(),
        reference: reference.into(),
        kind: template.kind,
        value: template.value.map(Into::into),
        footprint: template.footprint,
        pins,
        pin_map,
        facing: Facing::North,
    }
}
