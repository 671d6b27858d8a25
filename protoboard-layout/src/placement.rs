//! Placement engine: assigns every component a non-overlapping column span.
//!
//! The engine owns an occupancy map for one board — a mapping from hole
//! coordinate to the component id that claimed it. Placement is a plain
//! first-fit scan: rows in increasing order, columns left to right, first
//! span of free holes wins. Power supplies and ICs are placed before the
//! rest because they are the most position-constrained.

use std::collections::HashMap;

use log::debug;
use protoboard::schema::{BoardConfig, Component, ComponentKind, Footprint};

use crate::board::{Coordinate, Section};
use crate::types::PlacementResult;

/// How many consecutive columns a component's footprint occupies.
///
/// These widths encode physical package sizes and must stay stable for
/// layout compatibility: an axial resistor or LED bridges two tie points, a
/// DIP package needs one column per pin pair (minimum 4), a TO-92 fits in a
/// single tie point.
pub fn component_span(component: &Component) -> usize {
    match component.kind {
        ComponentKind::Resistor | ComponentKind::Led => 2,
        ComponentKind::Ic => 4.max(component.pins.len().div_ceil(2)),
        ComponentKind::Capacitor => {
            if component.footprint == Footprint::Radial {
                1
            } else {
                2
            }
        }
        ComponentKind::Transistor => 1,
        ComponentKind::Button => 2,
        ComponentKind::Pot => 1,
        ComponentKind::Power => 3,
        ComponentKind::Jumper => 1,
    }
}

/// Which section a component lands in by default. Power supplies feed the
/// rails; everything else starts in the upper main area (an IC straddles the
/// center gap but is anchored by its main-top starting position).
pub fn preferred_section(component: &Component) -> Section {
    match component.kind {
        ComponentKind::Power => Section::PowerTop,
        _ => Section::MainTop,
    }
}

/// Batch placement order: the most constrained kinds claim space first.
fn placement_priority(kind: ComponentKind) -> u8 {
    match kind {
        ComponentKind::Power => 0,
        ComponentKind::Ic => 1,
        ComponentKind::Resistor => 2,
        ComponentKind::Led => 3,
        ComponentKind::Capacitor => 4,
        ComponentKind::Transistor => 5,
        ComponentKind::Jumper | ComponentKind::Pot | ComponentKind::Button => 9,
    }
}

/// Per-call placement options.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementOptions {
    /// Overrides [`preferred_section`] when set.
    pub preferred_section: Option<Section>,
}

/// Stateful bin-packer scoped to one board configuration.
pub struct PlacementEngine {
    config: BoardConfig,
    /// Authoritative "is this hole free" state: hole → owning component id.
    occupancy: HashMap<Coordinate, String>,
}

impl PlacementEngine {
    pub fn new(config: BoardConfig) -> Self {
        Self { config, occupancy: HashMap::new() }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn is_occupied(&self, section: Section, row: usize, column: usize) -> bool {
        self.occupancy.contains_key(&Coordinate::new(section, row, column))
    }

    /// Claim `span` holes starting at `column` for `component_id`.
    pub fn mark_occupied(
        &mut self,
        section: Section,
        row: usize,
        column: usize,
        component_id: &str,
        span: usize,
    ) {
        for col in column..column + span {
            self.occupancy
                .insert(Coordinate::new(section, row, col), component_id.to_string());
        }
    }

    /// Find a free span for `component` without claiming it.
    ///
    /// A requested target position is attempted first and wins only if every
    /// column of the span is free there; otherwise the engine scans rows in
    /// increasing order and columns left to right, returning the first fit.
    /// `None` means the board has no free span wide enough.
    pub fn find_position(
        &self,
        component: &Component,
        section: Option<Section>,
        target: Option<(usize, usize)>,
    ) -> Option<PlacementResult> {
        let span = component_span(component);
        let section = section.unwrap_or_else(|| preferred_section(component));
        let max_columns = self.config.kind.columns();

        if let Some((target_row, target_column)) = target {
            if target_column + span <= max_columns {
                let free = (target_column..target_column + span)
                    .all(|col| !self.is_occupied(section, target_row, col));
                if free {
                    return Some(PlacementResult::placed(
                        &component.id,
                        target_row,
                        target_column,
                        span,
                    ));
                }
            }
        }

        if span > max_columns {
            return None;
        }
        for row in 0..section.row_count() {
            for col in 0..=max_columns - span {
                let free = (col..col + span).all(|c| !self.is_occupied(section, row, c));
                if free {
                    return Some(PlacementResult::placed(&component.id, row, col, span));
                }
            }
        }

        None
    }

    /// Place one component, claiming its holes on success.
    ///
    /// Returns `None` when no free span exists; placement exhaustion is a
    /// normal outcome, not an error.
    pub fn place(
        &mut self,
        component: &Component,
        options: PlacementOptions,
        target: Option<(usize, usize)>,
    ) -> Option<PlacementResult> {
        let placement = self.find_position(component, options.preferred_section, target)?;
        let section = options
            .preferred_section
            .unwrap_or_else(|| preferred_section(component));
        self.mark_occupied(
            section,
            placement.position.row,
            placement.position.column,
            &component.id,
            placement.position.span,
        );
        debug!(
            "placed {} at {:?} row {} column {} span {}",
            component.id, section, placement.position.row, placement.position.column,
            placement.position.span
        );
        Some(placement)
    }

    /// Place a whole batch, most constrained kinds first.
    ///
    /// Components are stably sorted by kind priority (power, then ICs, then
    /// passives) before placing. Every component yields a result: a failed
    /// placement carries a conflict message instead of being dropped.
    pub fn place_all(&mut self, components: &[Component]) -> Vec<PlacementResult> {
        let mut ordered: Vec<&Component> = components.iter().collect();
        ordered.sort_by_key(|c| placement_priority(c.kind));

        ordered
            .iter()
            .map(|component| {
                self.place(component, PlacementOptions::default(), None)
                    .unwrap_or_else(|| {
                        debug!("no available position for {}", component.id);
                        PlacementResult::failed(&component.id, "No available position found")
                    })
            })
            .collect()
    }

    /// Release every hole owned by `component_id`. Idempotent.
    pub fn remove(&mut self, component_id: &str) {
        self.occupancy.retain(|_, id| id != component_id);
    }

    /// Release every hole on the board.
    pub fn clear(&mut self) {
        self.occupancy.clear();
    }

    /// Debug view of one section's occupancy: component id per hole, `"."`
    /// for free.
    pub fn occupancy_grid(&self, section: Section) -> Vec<Vec<String>> {
        let max_columns = self.config.kind.columns();
        (0..section.row_count())
            .map(|row| {
                (0..max_columns)
                    .map(|col| {
                        self.occupancy
                            .get(&Coordinate::new(section, row, col))
                            .cloned()
                            .unwrap_or_else(|| ".".into())
                    })
                    .collect()
            })
            .collect()
    }
}

/// One-shot batch placement on a fresh engine.
pub fn auto_place(components: &[Component], config: &BoardConfig) -> Vec<PlacementResult> {
    PlacementEngine::new(*config).place_all(components)
}

/// Place one component into a board that already has placements on it.
///
/// The engine is seeded with every existing placement's holes except the
/// component's own (so a drag can move it), then the normal placement path
/// runs. This is how incremental drag/drop placement respects everything
/// already on the board.
pub fn place_single(
    component: &Component,
    config: &BoardConfig,
    existing: &[PlacementResult],
    target: Option<(usize, usize)>,
    section: Option<Section>,
) -> Option<PlacementResult> {
    let mut engine = PlacementEngine::new(*config);
    let seed_section = section.unwrap_or(Section::MainTop);

    for placement in existing {
        if placement.component_id == component.id {
            continue;
        }
        engine.mark_occupied(
            seed_section,
            placement.position.row,
            placement.position.column,
            &placement.component_id,
            placement.position.span,
        );
    }

    engine.place(component, PlacementOptions { preferred_section: section }, target)
}
