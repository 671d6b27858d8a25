//! Breadboard placement and routing engine for `protoboard` circuits.
//!
//! Takes a circuit document and produces a physical board layout:
//!
//! ```text
//! Circuit
//!   → Placement      (first-fit bin packing over the occupancy map)
//!   → Routing        (L-shaped Manhattan paths per net, colored by name)
//!   → BoardLayout    (JSON-serializable placement + routing results)
//! ```
//!
//! # Modules
//!
//! - [`board`] — breadboard topology: coordinates, drawing-space projection,
//!   electrical equivalence classes (tie groups and power rails)
//! - [`placement`] — the stateful placement engine and its occupancy map
//! - [`routing`] — path generation and wire coloring
//! - [`types`] — output records consumed by renderers and exporters

pub mod board;
pub mod placement;
pub mod routing;
pub mod types;

use protoboard::schema::Circuit;
use types::BoardLayout;

/// Place every component and route every net of a circuit.
///
/// This is the main entry point. Placement failures and unroutable nets are
/// reported inside the returned results (`conflicts` / `success`), never as
/// errors; callers decide how to surface them.
pub fn auto_layout(circuit: &Circuit) -> BoardLayout {
    let placements = placement::auto_place(&circuit.components, &circuit.board);
    let routings = routing::route_all(circuit, &placements);
    BoardLayout { placements, routings }
}

/// Serialize a layout to pretty JSON.
pub fn to_json(layout: &BoardLayout) -> String {
    serde_json::to_string_pretty(layout).expect("layout serialization should not fail")
}
