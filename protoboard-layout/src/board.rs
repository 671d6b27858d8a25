//! Breadboard topology: coordinate frames and electrical equivalence.
//!
//! A breadboard has five horizontal bands, top to bottom: the top power
//! rails, the upper main area (rows A–E), the center gap, the lower main
//! area (rows F–J), and the bottom power rails. Everything here is a pure
//! function of a [`Coordinate`] and a [`BoardConfig`]; nothing is stateful.
//!
//! Electrical rules:
//! - a power-rail row is one strip across the full board width;
//! - a main-area row is tied in groups of 5 consecutive columns;
//! - the center gap connects nothing;
//! - sections are never implicitly connected to each other.

use protoboard::schema::BoardConfig;
use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Grid pitch in drawing units (one hole per pitch).
pub const GRID_SIZE: f32 = 10.0;
/// Rows in each power-rail band (`+` and `-`).
pub const POWER_RAIL_ROWS: usize = 2;
/// Rows in each main area (A–E / F–J).
pub const MAIN_AREA_ROWS: usize = 5;
/// Columns per tie-point group in the main areas.
pub const TIE_GROUP_WIDTH: usize = 5;

/// Horizontal band of the board a coordinate lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    PowerTop,
    PowerBottom,
    MainTop,
    MainBottom,
    CenterGap,
}

impl Section {
    pub fn is_power(self) -> bool {
        matches!(self, Section::PowerTop | Section::PowerBottom)
    }

    pub fn is_main(self) -> bool {
        matches!(self, Section::MainTop | Section::MainBottom)
    }

    /// Number of addressable rows in this section.
    pub fn row_count(self) -> usize {
        match self {
            Section::PowerTop | Section::PowerBottom => POWER_RAIL_ROWS,
            Section::MainTop | Section::MainBottom => MAIN_AREA_ROWS,
            Section::CenterGap => 1,
        }
    }
}

/// A hole position on the board grid. Rows are section-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub section: Section,
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(section: Section, row: usize, column: usize) -> Self {
        Self { section, row, column }
    }
}

/// Project a board coordinate into drawing space.
///
/// Columns outside the board are clamped to the last valid column rather
/// than rejected, so rendering stays robust against sloppy input. Each
/// section starts below the bands above it; the center gap is one row tall.
pub fn coordinate_to_point(coord: Coordinate, config: &BoardConfig) -> Point {
    let column = coord.column.min(config.kind.columns() - 1);
    let x = column as f32 * GRID_SIZE;

    let grid_row = match coord.section {
        Section::PowerTop => coord.row,
        Section::MainTop => POWER_RAIL_ROWS + coord.row,
        Section::CenterGap => POWER_RAIL_ROWS + MAIN_AREA_ROWS,
        Section::MainBottom => POWER_RAIL_ROWS + MAIN_AREA_ROWS + 1 + coord.row,
        Section::PowerBottom => POWER_RAIL_ROWS + MAIN_AREA_ROWS + 1 + MAIN_AREA_ROWS + coord.row,
    };

    Point { x, y: grid_row as f32 * GRID_SIZE }
}

/// Inverse of [`coordinate_to_point`]: snap a drawing-space point to the
/// nearest grid line and classify its row into a section.
///
/// The section row ranges are contiguous and non-overlapping, so exactly one
/// section matches any grid row.
pub fn point_to_coordinate(point: Point, _config: &BoardConfig) -> Coordinate {
    let column = (point.x / GRID_SIZE).round().max(0.0) as usize;
    let grid_row = (point.y / GRID_SIZE).round().max(0.0) as usize;

    let main_top_start = POWER_RAIL_ROWS;
    let gap_row = POWER_RAIL_ROWS + MAIN_AREA_ROWS;
    let main_bottom_start = gap_row + 1;
    let power_bottom_start = main_bottom_start + MAIN_AREA_ROWS;

    if grid_row < main_top_start {
        Coordinate::new(Section::PowerTop, grid_row, column)
    } else if grid_row < gap_row {
        Coordinate::new(Section::MainTop, grid_row - main_top_start, column)
    } else if grid_row == gap_row {
        Coordinate::new(Section::CenterGap, 0, column)
    } else if grid_row < power_bottom_start {
        Coordinate::new(Section::MainBottom, grid_row - main_bottom_start, column)
    } else {
        Coordinate::new(Section::PowerBottom, grid_row - power_bottom_start, column)
    }
}

/// Are two holes electrically identical?
///
/// True only within one section and row: always for power rails (the strip
/// runs the board's full width), and within the same 5-column tie group for
/// main areas. The center gap connects nothing, and sections never connect
/// to each other implicitly — cross-section connectivity is made by
/// components and wires.
pub fn are_connected(a: Coordinate, b: Coordinate) -> bool {
    if a.section != b.section || a.row != b.row {
        return false;
    }
    if a.section.is_power() {
        return true;
    }
    if a.section.is_main() {
        return a.column / TIE_GROUP_WIDTH == b.column / TIE_GROUP_WIDTH;
    }
    false
}

/// Materialize the full electrical equivalence class of a hole, bounded by
/// the board's column count. Center-gap holes have no equivalence class.
pub fn connected_set(coord: Coordinate, config: &BoardConfig) -> Vec<Coordinate> {
    let max_columns = config.kind.columns();
    let mut connected = Vec::new();

    if coord.section.is_power() {
        for column in 0..max_columns {
            connected.push(Coordinate::new(coord.section, coord.row, column));
        }
    } else if coord.section.is_main() {
        let tie_start = (coord.column / TIE_GROUP_WIDTH) * TIE_GROUP_WIDTH;
        let tie_end = (tie_start + TIE_GROUP_WIDTH).min(max_columns);
        for column in tie_start..tie_end {
            connected.push(Coordinate::new(coord.section, coord.row, column));
        }
    }

    connected
}

/// Board width and height in drawing units.
pub fn board_dimensions(config: &BoardConfig) -> (f32, f32) {
    let width = config.kind.columns() as f32 * GRID_SIZE;
    let height = (POWER_RAIL_ROWS * 2 + MAIN_AREA_ROWS * 2 + 1) as f32 * GRID_SIZE;
    (width, height)
}

/// Display label for a row: `+`/`-` on the rails, A–E and F–J in the main
/// areas, nothing for the gap.
pub fn row_label(coord: Coordinate) -> String {
    match coord.section {
        Section::PowerTop | Section::PowerBottom => {
            if coord.row == 0 { "+".into() } else { "-".into() }
        }
        Section::MainTop => char::from(b'A' + coord.row as u8).to_string(),
        Section::MainBottom => char::from(b'F' + coord.row as u8).to_string(),
        Section::CenterGap => String::new(),
    }
}

/// Display label for a column: 1-indexed, shown only at the first column and
/// every fifth one after that.
pub fn column_label(column: usize) -> String {
    if column == 0 || (column + 1) % 5 == 0 {
        (column + 1).to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> BoardConfig {
        BoardConfig::full()
    }

    #[test]
    fn sections_stack_top_to_bottom() {
        let config = full();
        let y = |section, row| coordinate_to_point(Coordinate::new(section, row, 0), &config).y;

        assert_eq!(y(Section::PowerTop, 0), 0.0);
        assert_eq!(y(Section::MainTop, 0), 2.0 * GRID_SIZE);
        assert_eq!(y(Section::CenterGap, 0), 7.0 * GRID_SIZE);
        assert_eq!(y(Section::MainBottom, 0), 8.0 * GRID_SIZE);
        assert_eq!(y(Section::PowerBottom, 0), 13.0 * GRID_SIZE);
    }

    #[test]
    fn out_of_range_column_is_clamped() {
        let config = full();
        let p = coordinate_to_point(Coordinate::new(Section::MainTop, 0, 999), &config);
        assert_eq!(p.x, 62.0 * GRID_SIZE);
    }

    #[test]
    fn round_trip_every_addressable_hole() {
        let config = full();
        let sections = [
            Section::PowerTop,
            Section::MainTop,
            Section::MainBottom,
            Section::PowerBottom,
        ];
        for section in sections {
            for row in 0..section.row_count() {
                for column in 0..config.kind.columns() {
                    let coord = Coordinate::new(section, row, column);
                    let back = point_to_coordinate(coordinate_to_point(coord, &config), &config);
                    assert_eq!(back, coord);
                }
            }
        }
    }

    #[test]
    fn power_rail_connects_full_row() {
        let config = full();
        let set = connected_set(Coordinate::new(Section::PowerTop, 0, 0), &config);
        assert_eq!(set.len(), 63);
        assert!(set.iter().all(|c| c.section == Section::PowerTop && c.row == 0));
    }

    #[test]
    fn main_tie_group_is_five_columns() {
        let config = full();
        let set = connected_set(Coordinate::new(Section::MainTop, 0, 0), &config);
        let columns: Vec<usize> = set.iter().map(|c| c.column).collect();
        assert_eq!(columns, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn tie_groups_do_not_cross() {
        let a = Coordinate::new(Section::MainTop, 2, 4);
        let b = Coordinate::new(Section::MainTop, 2, 5);
        assert!(!are_connected(a, b));
        assert!(are_connected(a, Coordinate::new(Section::MainTop, 2, 0)));
    }

    #[test]
    fn rows_and_sections_never_connect() {
        let a = Coordinate::new(Section::MainTop, 0, 0);
        assert!(!are_connected(a, Coordinate::new(Section::MainTop, 1, 0)));
        assert!(!are_connected(a, Coordinate::new(Section::MainBottom, 0, 0)));
        assert!(!are_connected(
            Coordinate::new(Section::CenterGap, 0, 0),
            Coordinate::new(Section::CenterGap, 0, 1)
        ));
    }

    #[test]
    fn half_board_truncates_equivalence_classes() {
        let config = BoardConfig::half();
        let rail = connected_set(Coordinate::new(Section::PowerBottom, 1, 3), &config);
        assert_eq!(rail.len(), 30);
    }

    #[test]
    fn dimensions_cover_all_bands() {
        let (width, height) = board_dimensions(&full());
        assert_eq!(width, 630.0);
        // 2 power bands × 2 rows + 2 main areas × 5 rows + the gap.
        assert_eq!(height, 150.0);
    }

    #[test]
    fn row_labels() {
        assert_eq!(row_label(Coordinate::new(Section::PowerTop, 0, 0)), "+");
        assert_eq!(row_label(Coordinate::new(Section::PowerTop, 1, 0)), "-");
        assert_eq!(row_label(Coordinate::new(Section::MainTop, 0, 0)), "A");
        assert_eq!(row_label(Coordinate::new(Section::MainTop, 4, 0)), "E");
        assert_eq!(row_label(Coordinate::new(Section::MainBottom, 0, 0)), "F");
        assert_eq!(row_label(Coordinate::new(Section::MainBottom, 4, 0)), "J");
        assert_eq!(row_label(Coordinate::new(Section::CenterGap, 0, 0)), "");
    }

    #[test]
    fn column_labels_every_fifth() {
        assert_eq!(column_label(0), "1");
        assert_eq!(column_label(1), "");
        assert_eq!(column_label(4), "5");
        assert_eq!(column_label(9), "10");
        assert_eq!(column_label(62), "");
    }
}
