//! Output types for the placement and routing engine.
//!
//! All result records derive [`serde::Serialize`] and [`serde::Deserialize`]
//! so a host application can persist them or hand them to a renderer as
//! plain JSON.

use serde::{Deserialize, Serialize};

use crate::board::Coordinate;

/// Point in 2D drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where a component landed: starting column plus how many columns it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
    pub span: usize,
}

/// The placement engine's verdict for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub component_id: String,
    pub position: Position,
    /// Rotation in degrees.
    pub rotation: u16,
    /// Human-readable conflict descriptions; non-empty means placement failed.
    #[serde(default)]
    pub conflicts: Vec<String>,
}

impl PlacementResult {
    pub fn placed(component_id: impl Into<String>, row: usize, column: usize, span: usize) -> Self {
        Self {
            component_id: component_id.into(),
            position: Position { row, column, span },
            rotation: 0,
            conflicts: Vec::new(),
        }
    }

    pub fn failed(component_id: impl Into<String>, conflict: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            position: Position { row: 0, column: 0, span: 1 },
            rotation: 0,
            conflicts: vec![conflict.into()],
        }
    }

    pub fn is_placed(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Direction of one routed wire segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Over-the-top connection crossing between sections.
    Jump,
}

/// One rectilinear piece of a routed wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
    pub orientation: Orientation,
    /// Hex wire color, e.g. `"#ff0000"`.
    pub color: String,
}

/// The router's verdict for one net.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    pub net_id: String,
    pub segments: Vec<Segment>,
    pub success: bool,
    #[serde(default)]
    pub conflicts: Vec<String>,
}

/// Complete engine output for one circuit: every component placed, every net
/// routed. Produced by [`crate::auto_layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub placements: Vec<PlacementResult>,
    pub routings: Vec<RoutingResult>,
}
