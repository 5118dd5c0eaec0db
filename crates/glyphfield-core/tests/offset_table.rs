use std::collections::HashSet;

use glyphfield_core::OffsetTable;

#[test]
fn radius_bound_holds_for_every_entry() {
    for d in 1..=6 {
        let t = OffsetTable::build(d);
        for &(x, y) in t.pairs() {
            assert!(
                x * x + y * y <= d * d,
                "offset ({x}, {y}) outside radius {d}"
            );
        }
    }
}

#[test]
fn zero_offset_is_absent() {
    for d in 1..=6 {
        let t = OffsetTable::build(d);
        assert!(!t.pairs().contains(&(0, 0)), "d={d}");
    }
}

#[test]
fn no_duplicate_entries() {
    for d in 1..=6 {
        let t = OffsetTable::build(d);
        let set: HashSet<(i32, i32)> = t.pairs().iter().copied().collect();
        assert_eq!(set.len(), t.len(), "d={d}");
    }
}

#[test]
fn sorted_by_squared_distance() {
    let t = OffsetTable::build(5);
    let mut prev = 0;
    for &(x, y) in t.pairs() {
        let d_sq = x * x + y * y;
        assert!(d_sq >= prev, "table not sorted at ({x}, {y})");
        prev = d_sq;
    }
}

#[test]
fn enumeration_boundary_is_half_open() {
    // x and y run over [-d, d): -d is tested, +d never is.
    let t = OffsetTable::build(3);
    assert!(t.pairs().contains(&(-3, 0)));
    assert!(t.pairs().contains(&(0, -3)));
    assert!(!t.pairs().contains(&(3, 0)));
    assert!(!t.pairs().contains(&(0, 3)));
}

#[test]
fn radius_one_has_exactly_two_neighbors() {
    let t = OffsetTable::build(1);
    assert_eq!(t.len(), 2);
    assert!(t.pairs().contains(&(-1, 0)));
    assert!(t.pairs().contains(&(0, -1)));
}

#[test]
fn same_radius_builds_identical_tables() {
    let a = OffsetTable::build(4);
    let b = OffsetTable::build(4);
    assert_eq!(a.pairs(), b.pairs());
    assert_eq!(a.radius(), b.radius());
}
