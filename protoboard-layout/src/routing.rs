//! Wire routing: rectilinear paths between holes plus net coloring.
//!
//! The router is deliberately simple: an L-shaped horizontal-then-vertical
//! path between two projected points, not an obstacle-aware maze router.
//! Net colors are assigned by case-insensitive substring matching on the net
//! name so a rendered board reads like a sensible hand-wired one (red power,
//! black ground, and so on).

use log::debug;
use protoboard::schema::{BoardConfig, Circuit, Net};

use crate::board::{coordinate_to_point, point_to_coordinate, Coordinate};
use crate::placement::preferred_section;
use crate::types::{Orientation, PlacementResult, Point, RoutingResult, Segment};

/// Wire palette, keyed by net semantics.
pub mod wire_colors {
    pub const POWER: &str = "#ff0000";
    pub const GROUND: &str = "#000000";
    pub const SIGNAL: &str = "#00aa00";
    pub const ANALOG: &str = "#0066cc";
    pub const CLOCK: &str = "#ff6600";
    pub const DATA: &str = "#8800cc";
}

/// Rectilinear path between two holes: start, optional corner, end.
///
/// Horizontal leg first, then vertical. When both coordinates project to the
/// same point the path is the single start point.
pub fn find_path(start: Coordinate, end: Coordinate, config: &BoardConfig) -> Vec<Point> {
    let start_point = coordinate_to_point(start, config);
    let end_point = coordinate_to_point(end, config);

    let mut path = vec![start_point];
    if start_point.x != end_point.x {
        path.push(Point::new(end_point.x, start_point.y));
    }
    if start_point.y != end_point.y {
        path.push(end_point);
    }
    path
}

/// Classify a net name into a wire color.
///
/// First match wins, so the precedence order matters: a net named `GND_CLK`
/// is a ground wire, not a clock wire.
pub fn wire_color(net_name: &str) -> &'static str {
    let name = net_name.to_lowercase();

    if ["vcc", "vdd", "+", "power"].iter().any(|s| name.contains(*s)) {
        return wire_colors::POWER;
    }
    if ["gnd", "vss", "-", "ground"].iter().any(|s| name.contains(*s)) {
        return wire_colors::GROUND;
    }
    if ["clk", "clock"].iter().any(|s| name.contains(*s)) {
        return wire_colors::CLOCK;
    }
    if ["data", "sda", "scl"].iter().any(|s| name.contains(*s)) {
        return wire_colors::DATA;
    }
    if ["analog", "adc"].iter().any(|s| name.contains(*s)) {
        return wire_colors::ANALOG;
    }
    wire_colors::SIGNAL
}

/// Route one net against a set of placements.
///
/// Each net node is anchored at its component's placed position (in the
/// component's preferred section). Anchors are sorted by projected x and
/// consecutive pairs are joined with [`find_path`]. Nodes whose component
/// has no successful placement are reported as conflicts and the result is
/// marked unsuccessful.
pub fn route_net(net: &Net, circuit: &Circuit, placements: &[PlacementResult]) -> RoutingResult {
    let config = &circuit.board;
    let color = net
        .color
        .clone()
        .unwrap_or_else(|| wire_color(&net.name).to_string());

    let mut anchors: Vec<Coordinate> = Vec::new();
    let mut conflicts = Vec::new();

    for node in &net.nodes {
        let placement = placements
            .iter()
            .find(|p| p.component_id == node.component && p.is_placed());
        let component = circuit.component(&node.component);
        match (placement, component) {
            (Some(placement), Some(component)) => {
                anchors.push(Coordinate::new(
                    preferred_section(component),
                    placement.position.row,
                    placement.position.column,
                ));
            }
            _ => {
                conflicts.push(format!("component {} is not placed", node.component));
            }
        }
    }

    // Left-to-right wiring order.
    anchors.sort_by(|a, b| {
        let ax = coordinate_to_point(*a, config).x;
        let bx = coordinate_to_point(*b, config).x;
        ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut segments = Vec::new();
    for pair in anchors.windows(2) {
        let path = find_path(pair[0], pair[1], config);
        for leg in path.windows(2) {
            segments.push(segment_between(leg[0], leg[1], &color, config));
        }
    }

    let success = conflicts.is_empty();
    if !success {
        debug!("net {} has unroutable nodes: {:?}", net.id, conflicts);
    }

    RoutingResult { net_id: net.id.clone(), segments, success, conflicts }
}

/// Route every net in the circuit.
pub fn route_all(circuit: &Circuit, placements: &[PlacementResult]) -> Vec<RoutingResult> {
    circuit
        .nets
        .iter()
        .map(|net| route_net(net, circuit, placements))
        .collect()
}

fn segment_between(start: Point, end: Point, color: &str, config: &BoardConfig) -> Segment {
    let start_coord = point_to_coordinate(start, config);
    let end_coord = point_to_coordinate(end, config);

    let orientation = if start_coord.section != end_coord.section {
        // Crossing bands means hopping over the center gap.
        Orientation::Jump
    } else if start.y == end.y {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    Segment { start: start_coord, end: end_coord, orientation, color: color.to_string() }
}
