//! Serde types for breadboard circuit documents.
//!
//! A circuit document is `{ components, nets, board }` plus identification.
//! Documents are persisted as JSON; [`Circuit::from_json`] and
//! [`Circuit::to_json`] are the only I/O surface. Validation beyond what
//! serde enforces (pin references, net node references) is the caller's
//! responsibility — the engine assumes well-formed input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors produced while loading or saving a circuit document.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("invalid circuit document: {0}")]
    Json(#[from] serde_json::Error),
}

/// The kind of a circuit element. Placement span, section preference and
/// ordering priority all dispatch on this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Resistor,
    Led,
    Ic,
    Capacitor,
    Transistor,
    Jumper,
    Pot,
    Button,
    Power,
}

/// Physical package tag, determining span and pin layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Footprint {
    Axial,
    Led5mm,
    Dip,
    To92,
    Radial,
    Jumper,
    Button,
    Power,
    Pot,
}

/// Electrical role of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinKind {
    Power,
    Ground,
    Io,
    Analog,
    Other,
}

/// Which way a component faces on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Default for Facing {
    fn default() -> Self {
        Facing::North
    }
}

/// A single component pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: String,
    pub name: String,
    pub kind: PinKind,
}

/// A circuit element instance (e.g. `R1`, a 220Ω resistor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier within the circuit.
    pub id: String,
    /// Human designator, e.g. `"R1"`, `"U1"`, `"LED1"`.
    #[serde(rename = "ref")]
    pub reference: String,
    pub kind: ComponentKind,
    /// Free-text value, e.g. `"220Ω"`, `"NE555"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub footprint: Footprint,
    /// Ordered pin list; pin count drives IC span.
    pub pins: Vec<Pin>,
    /// Logical pin name → physical pin number, e.g. `"VCC" → "8"`.
    #[serde(default)]
    pub pin_map: HashMap<String, String>,
    #[serde(default)]
    pub facing: Facing,
}

/// One endpoint of a net: a component pin reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetNode {
    pub component: String,
    pub pin: String,
}

/// An electrical connection grouping a set of component pins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Net {
    pub id: String,
    pub name: String,
    pub nodes: Vec<NetNode>,
    /// Wire color override; when absent the router classifies by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub routed: bool,
    /// Waypoints `[x, y]` of the last computed route, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<[f32; 2]>>,
}

impl Net {
    pub fn new(id: impl Into<String>, name: impl Into<String>, nodes: Vec<NetNode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes,
            color: None,
            routed: false,
            path: None,
        }
    }
}

/// Breadboard size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    Full,
    Half,
}

impl BoardKind {
    /// Canonical column count for this board size.
    pub fn columns(self) -> usize {
        match self {
            BoardKind::Full => 63,
            BoardKind::Half => 30,
        }
    }
}

/// Board configuration. The `columns` field must match the kind's canonical
/// count for the topology functions to be valid; use [`BoardConfig::full`] or
/// [`BoardConfig::half`] rather than building one by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub kind: BoardKind,
    pub columns: usize,
    pub rows: usize,
    pub power_rails: bool,
}

impl BoardConfig {
    pub fn full() -> Self {
        Self {
            kind: BoardKind::Full,
            columns: BoardKind::Full.columns(),
            rows: 30,
            power_rails: true,
        }
    }

    pub fn half() -> Self {
        Self {
            kind: BoardKind::Half,
            columns: BoardKind::Half.columns(),
            rows: 30,
            power_rails: true,
        }
    }
}

/// A complete circuit document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub components: Vec<Component>,
    pub nets: Vec<Net>,
    pub board: BoardConfig,
}

impl Circuit {
    /// Empty circuit on the given board.
    pub fn new(id: impl Into<String>, name: impl Into<String>, board: BoardConfig) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            components: Vec::new(),
            nets: Vec::new(),
            board,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_constructors_use_canonical_columns() {
        assert_eq!(BoardConfig::full().columns, 63);
        assert_eq!(BoardConfig::half().columns, 30);
        assert_eq!(BoardConfig::full().rows, 30);
        assert!(BoardConfig::full().power_rails);
    }

    #[test]
    fn circuit_json_round_trip() {
        let mut circuit = Circuit::new("c1", "Blinky", BoardConfig::full());
        circuit.components.push(Component {
            id: "r1".into(),
            reference: "R1".into(),
            kind: ComponentKind::Resistor,
            value: Some("220Ω".into()),
            footprint: Footprint::Axial,
            pins: vec![
                Pin { id: "pin1".into(), name: "pin1".into(), kind: PinKind::Io },
                Pin { id: "pin2".into(), name: "pin2".into(), kind: PinKind::Io },
            ],
            pin_map: HashMap::from([("pin1".into(), "1".into()), ("pin2".into(), "2".into())]),
            facing: Facing::North,
        });
        circuit.nets.push(Net::new(
            "n1",
            "VCC",
            vec![NetNode { component: "r1".into(), pin: "pin1".into() }],
        ));

        let json = circuit.to_json().unwrap();
        let loaded = Circuit::from_json(&json).unwrap();
        assert_eq!(loaded, circuit);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ComponentKind::Resistor).unwrap();
        assert_eq!(json, "\"resistor\"");
    }
}
