//! Segmentation regression test
//!
//! Exercises the documented guarantees of the segmenter on small grids:
//! partition coverage, region connectivity, region maximality, and
//! deterministic numbering.
//!
//! Run with:
//! ```
//! cargo test -p gridfill-region --test segment_reg
//! ```

use gridfill_core::Coord;
use gridfill_region::{FIRST_REGION_ID, Region, compute_background, segment, segment_auto};
use gridfill_test::{check_connectivity, check_partition, grid_of_digits};
use std::collections::BTreeMap;
use std::collections::HashMap;

/// No two distinct regions may touch through 4-connected cells; if they
/// did, the fill should have merged them.
fn check_maximality(regions: &BTreeMap<u32, Region>) -> Result<(), String> {
    let mut owner: HashMap<Coord, u32> = HashMap::new();
    for r in regions.values() {
        for &c in &r.cells {
            owner.insert(c, r.id);
        }
    }

    for (&c, &id) in &owner {
        let neighbors = [
            (c.x.checked_sub(1), Some(c.y)),
            (c.x.checked_add(1), Some(c.y)),
            (Some(c.x), c.y.checked_sub(1)),
            (Some(c.x), c.y.checked_add(1)),
        ];
        for (nx, ny) in neighbors {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            if let Some(&other) = owner.get(&Coord::new(nx, ny))
                && other != id
            {
                return Err(format!(
                    "regions {} and {} touch at ({}, {})",
                    id, other, c.x, c.y
                ));
            }
        }
    }
    Ok(())
}

#[test]
fn single_interior_cell() {
    let grid = grid_of_digits(
        "000\n\
         010\n\
         000",
    );
    let regions = segment(&grid, 0).unwrap();

    assert_eq!(regions.len(), 1);
    let r = &regions[&FIRST_REGION_ID];
    assert_eq!(r.id, 1);
    assert_eq!(r.color, 1);
    assert_eq!(r.cells, vec![Coord::new(1, 1)]);
}

#[test]
fn four_corners_stay_disjoint() {
    let grid = grid_of_digits(
        "101\n\
         000\n\
         101",
    );
    let regions = segment(&grid, 0).unwrap();

    assert_eq!(regions.len(), 4);
    for r in regions.values() {
        assert_eq!(r.cells.len(), 1);
    }
    check_maximality(&regions).unwrap();
}

#[test]
fn all_background_yields_no_regions() {
    let grid = grid_of_digits(
        "0000\n\
         0000\n\
         0000",
    );
    let regions = segment(&grid, 0).unwrap();
    assert!(regions.is_empty());
    check_partition(&grid, 0, regions.values().flat_map(|r| r.cells.iter())).unwrap();
}

#[test]
fn full_grid_is_one_region() {
    let grid = grid_of_digits(
        "11\n\
         11",
    );
    let regions = segment(&grid, 0).unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[&1].cells.len(), 4);
}

#[test]
fn separated_blobs_of_one_color() {
    let grid = grid_of_digits(
        "22000\n\
         20000\n\
         00022\n\
         00022",
    );
    let regions = segment(&grid, 0).unwrap();

    assert_eq!(regions.len(), 2);
    assert_eq!(regions[&1].cells.len(), 3);
    assert_eq!(regions[&2].cells.len(), 4);
    assert!(regions.values().all(|r| r.color == 2));
    check_maximality(&regions).unwrap();
}

#[test]
fn partition_and_connectivity_hold() {
    let grid = grid_of_digits(
        "0033300\n\
         0030300\n\
         0033300\n\
         0000000\n\
         5550055\n\
         0050055",
    );
    let regions = segment(&grid, 0).unwrap();

    check_partition(&grid, 0, regions.values().flat_map(|r| r.cells.iter())).unwrap();
    for r in regions.values() {
        check_connectivity(&r.cells).unwrap();
    }
    check_maximality(&regions).unwrap();

    // The ring, the left L, and the right square
    assert_eq!(regions.len(), 3);
}

#[test]
fn numbering_and_cell_order_are_deterministic() {
    let grid = grid_of_digits(
        "0101010\n\
         0011100\n\
         4000007\n\
         4440777",
    );

    let first = segment(&grid, 0).unwrap();
    let second = segment(&grid, 0).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.values().zip(second.values()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.color, b.color);
        assert_eq!(a.cells, b.cells);
    }
}

#[test]
fn background_dominance_ignores_layout() {
    // Color 0 holds >50% of cells in both arrangements
    let scattered = grid_of_digits(
        "0102\n\
         0030\n\
         4000",
    );
    let banded = grid_of_digits(
        "1234\n\
         0000\n\
         0000",
    );
    assert_eq!(compute_background(&scattered).unwrap(), 0);
    assert_eq!(compute_background(&banded).unwrap(), 0);
}

#[test]
fn auto_segmentation_matches_manual() {
    let grid = grid_of_digits(
        "000\n\
         060\n\
         000",
    );
    let auto = segment_auto(&grid).unwrap();
    let manual = segment(&grid, 0).unwrap();

    assert_eq!(auto.background, 0);
    assert_eq!(auto.regions.len(), manual.len());
    assert_eq!(auto.regions[&1].cells, manual[&1].cells);
}
