#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zonegrid_core::{GridConfig, Orientation};
use zonegrid_layout::{DragOutcome, GridData, derive_resizers, validate_tiling};

#[derive(Debug, Arbitrary)]
struct Input {
    multiplier: u16,
    min_size: u8,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Split {
        zone: u8,
        offset: u16,
        vertical: bool,
    },
    Drag {
        resizer: u8,
        delta: i16,
    },
    Merge {
        picks: Vec<u8>,
    },
    RawMerge {
        picks: Vec<u8>,
    },
}

fuzz_target!(|input: Input| {
    let multiplier = u32::from(input.multiplier).max(2);
    let min_size = u32::from(input.min_size).clamp(1, multiplier);
    let config = GridConfig::with_multiplier(multiplier).min_size(min_size);
    let Ok(mut grid) = GridData::new(config) else {
        return;
    };

    for op in input.ops.iter().take(256) {
        let before = grid.clone();
        match op {
            Op::Split {
                zone,
                offset,
                vertical,
            } => {
                let orientation = if *vertical {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                let zone = usize::from(*zone) % grid.zones().len();
                let allowed = grid.can_split(zone, u32::from(*offset), orientation);
                let result = grid.split(zone, u32::from(*offset), orientation);
                assert_eq!(allowed, result.is_ok());
                if result.is_err() {
                    assert_eq!(grid, before, "failed split mutated the grid");
                }
            }
            Op::Drag { resizer, delta } => {
                if grid.resizers().is_empty() {
                    assert!(grid.drag(usize::from(*resizer), 1).is_err());
                    continue;
                }
                let resizer = usize::from(*resizer) % grid.resizers().len();
                let delta = i32::from(*delta);
                let allowed = grid.can_drag(resizer, delta);
                let outcome = grid.drag(resizer, delta).expect("resizer in range");
                assert_eq!(allowed, outcome.is_applied());
                if let DragOutcome::Rejected(_) = outcome {
                    assert_eq!(grid, before, "rejected drag mutated the grid");
                }
            }
            Op::Merge { picks } => {
                let len = grid.zones().len();
                let selection: Vec<usize> = picks.iter().map(|p| usize::from(*p) % len).collect();
                let closure = grid
                    .merge_closure_indices(selection.iter().copied())
                    .expect("indices in range");
                assert!(selection.iter().all(|i| closure.contains(i)));
                let again = grid
                    .merge_closure_indices(closure.iter().copied())
                    .expect("indices in range");
                assert_eq!(again, closure, "closure not idempotent");
                let merged = grid.do_merge(closure.iter().copied()).expect("closed merge");
                if closure.len() >= 2 {
                    assert!(merged.is_some());
                    assert_eq!(grid.zones().len(), len - closure.len() + 1);
                }
            }
            Op::RawMerge { picks } => {
                // Unclosed selections either merge cleanly or leave the grid alone.
                let len = grid.zones().len();
                let selection = picks.iter().map(|p| usize::from(*p) % len);
                if grid.do_merge(selection).is_err() {
                    assert_eq!(grid, before, "failed merge mutated the grid");
                }
            }
        }

        // Post-conditions that must always hold:
        assert_eq!(validate_tiling(multiplier, grid.zones()), Ok(()));
        assert_eq!(
            grid.resizers(),
            derive_resizers(grid.zones(), multiplier).as_slice()
        );
        for zone in grid.zones() {
            assert!(zone.width() >= min_size && zone.height() >= min_size);
        }
    }
});
