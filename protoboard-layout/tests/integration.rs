//! Integration tests for the layout engine.
//!
//! Tests the full pipeline: Circuit → placements → routings → JSON.

use protoboard::catalog;
use protoboard::schema::{BoardConfig, Circuit, Net, NetNode};
use protoboard_layout::board::Section;
use protoboard_layout::{auto_layout, to_json};

fn node(component: &str, pin: &str) -> NetNode {
    NetNode { component: component.into(), pin: pin.into() }
}

/// A battery driving an LED through a current-limiting resistor.
fn blinky_circuit() -> Circuit {
    let mut circuit = Circuit::new("blinky", "Blinky", BoardConfig::full());

    for (template_id, id, reference) in [
        ("power-9v", "bt1", "BT1"),
        ("resistor-220", "r1", "R1"),
        ("led-red", "d1", "LED1"),
    ] {
        let t = catalog::template(template_id).expect("template exists");
        circuit.add_component(catalog::instantiate(&t, id, reference));
    }

    circuit.add_net(Net::new(
        "n_vcc",
        "VCC",
        vec![node("bt1", "positive"), node("r1", "pin1")],
    ));
    circuit.add_net(Net::new(
        "n_sig",
        "led_drive",
        vec![node("r1", "pin2"), node("d1", "anode")],
    ));
    circuit.add_net(Net::new(
        "n_gnd",
        "GND",
        vec![node("d1", "cathode"), node("bt1", "negative")],
    ));

    circuit
}

#[test]
fn blinky_places_without_conflicts() {
    let circuit = blinky_circuit();
    let layout = auto_layout(&circuit);

    assert_eq!(layout.placements.len(), 3);
    assert!(layout.placements.iter().all(|p| p.conflicts.is_empty()));

    // Power first (span 3), then resistor (span 2), then LED (span 2).
    assert_eq!(layout.placements[0].component_id, "bt1");
    assert_eq!(layout.placements[0].position.span, 3);
    assert_eq!(layout.placements[1].component_id, "r1");
    assert_eq!(layout.placements[2].component_id, "d1");
}

#[test]
fn blinky_spans_are_disjoint_per_row() {
    let circuit = blinky_circuit();
    let layout = auto_layout(&circuit);

    let mut claimed = std::collections::HashSet::new();
    for p in &layout.placements {
        let component = circuit.component(&p.component_id).unwrap();
        let section = protoboard_layout::placement::preferred_section(component);
        for col in p.position.column..p.position.column + p.position.span {
            assert!(
                claimed.insert((section, p.position.row, col)),
                "{} overlaps another component at column {col}",
                p.component_id
            );
        }
    }
}

#[test]
fn blinky_routes_every_net() {
    let circuit = blinky_circuit();
    let layout = auto_layout(&circuit);

    assert_eq!(layout.routings.len(), 3);
    assert!(layout.routings.iter().all(|r| r.success));

    let vcc = layout.routings.iter().find(|r| r.net_id == "n_vcc").unwrap();
    assert!(!vcc.segments.is_empty());
    // VCC nets are red; battery sits on the power rail, resistor in the main
    // area, so the wire hops sections somewhere along the way.
    assert!(vcc.segments.iter().all(|s| s.color == "#ff0000"));
    assert!(vcc.segments.iter().any(|s| s.start.section == Section::PowerTop
        && s.end.section != Section::PowerTop));
}

#[test]
fn explicit_net_color_beats_name_classification() {
    let mut circuit = blinky_circuit();
    // The name alone would classify as ground.
    let mut net = Net::new(
        "n_tint",
        "GND_sense",
        vec![node("r1", "pin2"), node("d1", "anode")],
    );
    net.color = Some("#123456".into());
    circuit.add_net(net);

    let layout = auto_layout(&circuit);
    let tinted = layout.routings.iter().find(|r| r.net_id == "n_tint").unwrap();

    assert!(tinted.success);
    assert!(!tinted.segments.is_empty());
    assert!(tinted.segments.iter().all(|s| s.color == "#123456"));
}

#[test]
fn unplaced_component_surfaces_as_routing_conflict() {
    let mut circuit = blinky_circuit();
    // A net naming a component that is not in the document at all.
    circuit.add_net(Net::new("n_bad", "dangling", vec![node("ghost", "pin1")]));

    let layout = auto_layout(&circuit);
    let bad = layout.routings.iter().find(|r| r.net_id == "n_bad").unwrap();

    assert!(!bad.success);
    assert_eq!(bad.conflicts.len(), 1);
    assert!(bad.conflicts[0].contains("ghost"));
}

#[test]
fn layout_serializes_to_json() {
    let circuit = blinky_circuit();
    let layout = auto_layout(&circuit);

    let json = to_json(&layout);
    assert!(json.contains("\"placements\""));
    assert!(json.contains("\"routings\""));

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["placements"].as_array().unwrap().len(), 3);
}

#[test]
fn half_board_fits_the_same_circuit() {
    let mut circuit = blinky_circuit();
    circuit.board = BoardConfig::half();

    let layout = auto_layout(&circuit);
    assert!(layout.placements.iter().all(|p| p.conflicts.is_empty()));
    for p in &layout.placements {
        assert!(p.position.column + p.position.span <= 30);
    }
}
