//! Exact-partition check for zone lists.
//!
//! A zone list tiles the work area when every zone lies inside
//! `[0, multiplier]`, has positive area, no two interiors overlap, and the
//! areas sum to `multiplier²`. Together these rule out gaps.

use std::fmt;

use zonegrid_core::Zone;

/// First tiling violation found in a zone list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingViolation {
    NoZones,
    EmptyZone { index: usize, zone: Zone },
    OutOfBounds { index: usize, zone: Zone, multiplier: u32 },
    Overlap { first: usize, second: usize },
    Uncovered { covered_area: u64, expected_area: u64 },
}

impl fmt::Display for TilingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoZones => f.write_str("layout has no zones"),
            Self::EmptyZone { index, zone } => write!(f, "zone {index} {zone} has no area"),
            Self::OutOfBounds {
                index,
                zone,
                multiplier,
            } => write!(f, "zone {index} {zone} exceeds work area 0..{multiplier}"),
            Self::Overlap { first, second } => write!(f, "zones {first} and {second} overlap"),
            Self::Uncovered {
                covered_area,
                expected_area,
            } => write!(
                f,
                "zones cover {covered_area} of {expected_area} units of work area"
            ),
        }
    }
}

impl std::error::Error for TilingViolation {}

/// Check that `zones` exactly tile `[0, multiplier) x [0, multiplier)`.
pub fn validate_tiling(multiplier: u32, zones: &[Zone]) -> Result<(), TilingViolation> {
    if zones.is_empty() {
        return Err(TilingViolation::NoZones);
    }
    for (index, zone) in zones.iter().enumerate() {
        if zone.is_empty() {
            return Err(TilingViolation::EmptyZone { index, zone: *zone });
        }
        if !zone.fits_within(multiplier) {
            return Err(TilingViolation::OutOfBounds {
                index,
                zone: *zone,
                multiplier,
            });
        }
    }
    for (first, a) in zones.iter().enumerate() {
        for (offset, b) in zones[first + 1..].iter().enumerate() {
            if a.intersects(b) {
                return Err(TilingViolation::Overlap {
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }
    let covered_area: u64 = zones.iter().map(Zone::area).sum();
    let expected_area = u64::from(multiplier) * u64::from(multiplier);
    if covered_area != expected_area {
        return Err(TilingViolation::Uncovered {
            covered_area,
            expected_area,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrants_tile() {
        let zones = [
            Zone::new(0, 0, 50, 50),
            Zone::new(0, 50, 50, 100),
            Zone::new(50, 0, 100, 50),
            Zone::new(50, 50, 100, 100),
        ];
        assert_eq!(validate_tiling(100, &zones), Ok(()));
    }

    #[test]
    fn gap_is_reported() {
        let zones = [Zone::new(0, 0, 100, 50)];
        assert_eq!(
            validate_tiling(100, &zones),
            Err(TilingViolation::Uncovered {
                covered_area: 5_000,
                expected_area: 10_000,
            })
        );
    }

    #[test]
    fn overlap_is_reported_before_coverage() {
        let zones = [
            Zone::new(0, 0, 100, 60),
            Zone::new(0, 40, 100, 100),
            Zone::new(0, 0, 1, 1),
        ];
        assert_eq!(
            validate_tiling(100, &zones),
            Err(TilingViolation::Overlap {
                first: 0,
                second: 1
            })
        );
    }

    #[test]
    fn zone_outside_work_area_is_rejected() {
        let zones = [Zone::new(0, 0, 100, 101)];
        assert!(matches!(
            validate_tiling(100, &zones),
            Err(TilingViolation::OutOfBounds { index: 0, .. })
        ));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(validate_tiling(100, &[]), Err(TilingViolation::NoZones));
    }
}
