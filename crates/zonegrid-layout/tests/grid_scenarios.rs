//! End-to-end editing sessions against the public API.

use std::collections::BTreeSet;

use zonegrid_layout::{
    DragOutcome, GRID_LAYOUT_SCHEMA_VERSION, GridConfig, GridData, GridError, GridLayoutSnapshot,
    Orientation, Zone,
};

fn default_grid() -> GridData {
    GridData::new(GridConfig::default()).expect("default grid")
}

fn quadrants() -> GridData {
    let mut grid = default_grid();
    let right = grid.split(0, 5_000, Orientation::Vertical).expect("split");
    grid.split(0, 5_000, Orientation::Horizontal)
        .expect("split left");
    grid.split(right, 5_000, Orientation::Horizontal)
        .expect("split right");
    grid
}

#[test]
fn split_build_quadrants_match_row_column_constructor() {
    let grid = quadrants();
    assert_eq!(
        grid.zones(),
        &[
            Zone::new(0, 0, 5_000, 5_000),
            Zone::new(0, 5_000, 5_000, 10_000),
            Zone::new(5_000, 0, 10_000, 5_000),
            Zone::new(5_000, 5_000, 10_000, 10_000),
        ]
    );
    // Split-built and constructor-built grids number zones differently but
    // share the same set of rectangles.
    let built = GridData::with_rows_columns(2, 2, GridConfig::default()).expect("2x2");
    let sorted = |grid: &GridData| {
        let mut zones = grid.zones().to_vec();
        zones.sort_unstable_by_key(|zone| (zone.top, zone.left));
        zones
    };
    assert_eq!(sorted(&grid), sorted(&built));
    assert_eq!(grid.resizers().len(), 2);
}

#[test]
fn quadrant_closures() {
    let grid = GridData::with_rows_columns(2, 2, GridConfig::default()).expect("2x2");
    assert_eq!(
        grid.merge_closure_indices([0]).expect("closure"),
        BTreeSet::from([0])
    );
    assert_eq!(
        grid.merge_closure_indices([0, 3]).expect("closure"),
        BTreeSet::from([0, 1, 2, 3])
    );
    assert_eq!(
        grid.merge_closure_indices([0, 1]).expect("closure"),
        BTreeSet::from([0, 1])
    );
}

#[test]
fn merge_everything_collapses_to_one_zone() {
    let mut grid = GridData::with_rows_columns(2, 2, GridConfig::default()).expect("2x2");
    let closure = grid.merge_closure_indices([0, 3]).expect("closure");
    assert_eq!(grid.do_merge(closure), Ok(Some(0)));
    assert_eq!(grid.zones(), &[Zone::new(0, 0, 10_000, 10_000)]);
    assert!(grid.resizers().is_empty());
}

#[test]
fn narrow_columns_cannot_be_dragged_shut() {
    let config = GridConfig::with_multiplier(4).min_size(1);
    let mut grid = GridData::with_rows_columns(1, 2, config).expect("two columns");
    assert_eq!(grid.zones()[0].width(), 2);

    assert!(!grid.can_drag(0, 2));
    assert!(!grid.drag(0, 2).expect("resizer exists").is_applied());
    assert!(!grid.can_drag(0, -2));
    assert_eq!(
        grid.zones(),
        &[Zone::new(0, 0, 4, 2), Zone::new(0, 2, 4, 4)]
    );
}

#[test]
fn interactive_session_keeps_tiling() {
    let mut grid = default_grid();

    // Three columns, then split the middle one into rows.
    let middle = grid.split(0, 3_000, Orientation::Vertical).expect("split");
    let right = grid
        .split(middle, 7_000, Orientation::Vertical)
        .expect("split");
    let lower_middle = grid
        .split(middle, 6_000, Orientation::Horizontal)
        .expect("split");
    assert_eq!(grid.zones().len(), 4);
    grid.validate().expect("valid after splits");

    // Widen the middle column from the right: the vertical line at x=7000
    // touches both middle rows and the right column.
    let line = grid
        .resizers()
        .iter()
        .position(|r| r.orientation == Orientation::Vertical && r.position == 7_000)
        .expect("line at 7000");
    assert_eq!(
        grid.resizers()[line].negative_side_indices,
        vec![middle, lower_middle]
    );
    assert_eq!(grid.resizers()[line].positive_side_indices, vec![right]);
    assert_eq!(
        grid.drag(line, 1_500),
        Ok(DragOutcome::Applied { position: 8_500 })
    );
    assert_eq!(grid.zones()[middle].right, 8_500);
    assert_eq!(grid.zones()[lower_middle].right, 8_500);
    assert_eq!(grid.zones()[right].left, 8_500);

    // Drag the row boundary between the middle rows up.
    let row_line = grid
        .resizers()
        .iter()
        .position(|r| r.orientation == Orientation::Horizontal)
        .expect("row line");
    grid.drag(row_line, -2_000).expect("drag");
    assert_eq!(grid.zones()[middle].bottom, 4_000);
    assert_eq!(grid.zones()[lower_middle].top, 4_000);

    // Merging the two middle rows restores a full-height column.
    assert_eq!(grid.do_merge([lower_middle, middle]), Ok(Some(middle)));
    assert_eq!(grid.zones()[middle], Zone::new(0, 3_000, 10_000, 8_500));
    assert_eq!(grid.zones().len(), 3);
    grid.validate().expect("valid after merge");
}

#[test]
fn stale_indices_after_merge_are_rejected() {
    let mut grid = GridData::with_rows_columns(1, 3, GridConfig::default()).expect("grid");
    grid.do_merge([0, 1]).expect("merge");
    assert_eq!(grid.zones().len(), 2);
    assert!(matches!(
        grid.split(2, 9_000, Orientation::Vertical),
        Err(GridError::InvalidIndex { index: 2, len: 2, .. })
    ));
    assert!(matches!(
        grid.merge_closure_indices([2]),
        Err(GridError::InvalidIndex { .. })
    ));
}

#[test]
fn resizer_line_places_drag_handle() {
    let mut grid = default_grid();
    let right = grid.split(0, 2_000, Orientation::Vertical).expect("split");
    grid.split(right, 5_000, Orientation::Horizontal)
        .expect("split");
    let horizontal = grid
        .resizers()
        .iter()
        .position(|r| r.orientation == Orientation::Horizontal)
        .expect("horizontal line");
    let line = grid.resizer_line(horizontal).expect("line");
    assert_eq!(line.position, 5_000);
    assert_eq!((line.start, line.end), (2_000, 10_000));
    assert_eq!(line.midpoint(), 6_000);
    assert!(grid.resizer_line(99).is_none());
}

#[test]
fn snapshot_json_restores_grid() {
    let mut grid = GridData::with_rows_columns(2, 3, GridConfig::default()).expect("grid");
    grid.do_merge([0, 3]).expect("merge first column");
    let snapshot = grid.to_snapshot();
    assert_eq!(snapshot.schema_version, GRID_LAYOUT_SCHEMA_VERSION);

    let json = serde_json::to_string(&snapshot).expect("serialize");
    let parsed: GridLayoutSnapshot = serde_json::from_str(&json).expect("deserialize");
    let restored = GridData::from_snapshot(&parsed, grid.min_size()).expect("restore");
    assert_eq!(restored, grid);
}

#[test]
fn snapshot_with_overlap_is_rejected() {
    let snapshot = GridLayoutSnapshot::new(
        100,
        vec![Zone::new(0, 0, 100, 60), Zone::new(0, 40, 100, 100)],
    );
    assert!(matches!(
        GridData::from_snapshot(&snapshot, 1),
        Err(GridError::InvalidLayout(_))
    ));
}

#[test]
fn grid_data_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GridData>();
}
