use super::*;
use proptest::prelude::*;

fn pt(x: i64, y: i64) -> Point {
    Point::new(x, y).unwrap()
}

#[test]
fn turn_basic_orientations() {
    let (a, b) = (pt(0, 0), pt(2, 0));
    assert_eq!(turn(a, b, pt(1, 1)), Turn::Left);
    assert_eq!(turn(a, b, pt(1, -1)), Turn::Right);
    assert_eq!(turn(a, b, pt(4, 0)), Turn::Collinear);
    assert_eq!(turn(a, b, pt(-3, 0)), Turn::Collinear);
    // Repeated points are collinear.
    assert_eq!(turn(a, a, pt(1, 1)), Turn::Collinear);
    assert_eq!(turn(a, b, b), Turn::Collinear);
    assert_eq!(turn(a, a, a), Turn::Collinear);
}

#[test]
fn turn_is_exact_at_the_coordinate_bound() {
    let a = pt(-MAX_COORD, -MAX_COORD);
    let b = pt(MAX_COORD, MAX_COORD);
    // A point one unit off the main diagonal is still resolved exactly.
    assert_eq!(turn(a, b, pt(MAX_COORD - 1, MAX_COORD)), Turn::Left);
    assert_eq!(turn(a, b, pt(MAX_COORD, MAX_COORD - 1)), Turn::Right);
    assert_eq!(turn(a, b, pt(0, 0)), Turn::Collinear);
    // Maximal-area configuration, the worst case for the wide product.
    assert_eq!(
        turn(pt(-MAX_COORD, -MAX_COORD), pt(MAX_COORD, -MAX_COORD), pt(0, MAX_COORD)),
        Turn::Left
    );
}

#[test]
fn point_construction_enforces_bounds() {
    assert!(Point::new(MAX_COORD, -MAX_COORD).is_ok());
    assert!(matches!(
        Point::new(MAX_COORD + 1, 0),
        Err(crate::Error::CoordinateOutOfRange { .. })
    ));
    assert!(matches!(
        Point::colored(0, -(MAX_COORD + 1), 7),
        Err(crate::Error::CoordinateOutOfRange { .. })
    ));
}

#[test]
fn point_order_is_lexicographic() {
    assert!(pt(0, 5) < pt(1, -5));
    assert!(pt(1, -5) < pt(1, 0));
    assert!(pt(2, 2).same_location(&Point::colored(2, 2, 3).unwrap()));
    assert_ne!(pt(2, 2), Point::colored(2, 2, 3).unwrap());
}

#[test]
fn sort_around_point_chains_and_ties() {
    let pivot = pt(0, 0);
    let pts = [
        pt(1, 1),
        pt(-1, 0),
        pt(2, 0),
        pt(0, 1),
        pt(1, -1),
        pt(0, -1),
        pt(1, 0),
        pt(-1, -1),
    ];
    let part = sort_around_point(pivot, &pts);
    // Counterclockwise from just past the downward direction; the same-ray
    // pair (1,0) / (2,0) orders nearer-first.
    assert_eq!(
        part.right(),
        &[pt(1, -1), pt(1, 0), pt(2, 0), pt(1, 1), pt(0, 1)]
    );
    assert_eq!(part.left(), &[pt(-1, 0), pt(-1, -1), pt(0, -1)]);
    // Consecutive cyclic elements never turn clockwise around the pivot.
    let cyc = part.into_cyclic();
    for w in cyc.as_slice().windows(2) {
        assert_ne!(turn(pivot, w[0], w[1]), Turn::Right);
    }
}

#[test]
fn sort_around_point_excludes_pivot_location() {
    let pivot = pt(3, 3);
    let part = sort_around_point(pivot, &[pt(3, 3), pt(4, 4), Point::colored(3, 3, 1).unwrap()]);
    assert_eq!(part.len(), 1);
}

#[test]
fn cyclic_shift_and_reverse() {
    let pivot = pt(0, 0);
    let pts = [pt(1, 0), pt(0, 1), pt(-1, 0), pt(0, -1)];
    let mut cyc = sort_around_point(pivot, &pts).into_cyclic();
    let original = cyc.as_slice().to_vec();
    cyc.shift(1);
    assert_eq!(cyc.as_slice()[original.len() - 1], original[0]);
    for _ in 0..original.len() - 1 {
        cyc.shift(1);
    }
    assert_eq!(cyc.as_slice(), &original[..]);
    cyc.reverse_in_place();
    let mut rev = original.clone();
    rev.reverse();
    assert_eq!(cyc.as_slice(), &rev[..]);
}

#[test]
fn general_position_detects_collinear_triples() {
    // Square corners: no three collinear.
    assert!(general_position(&[pt(0, 0), pt(2, 0), pt(2, 2), pt(0, 2)]));
    // Horizontal line.
    assert!(!general_position(&[pt(0, 0), pt(1, 0), pt(2, 0), pt(1, 5)]));
    // Vertical line (same-ray tie inside one chain).
    assert!(!general_position(&[pt(0, 0), pt(0, 1), pt(0, 3), pt(2, 1)]));
    // Pivot strictly between its neighbours (antipodal coincidence across
    // the two chains).
    assert!(!general_position(&[pt(-2, -1), pt(0, 0), pt(2, 1), pt(5, 0)]));
    // Duplicate locations are degenerate.
    assert!(!general_position(&[pt(1, 1), pt(1, 1), pt(2, 5)]));
    // Small sets are trivially in general position.
    assert!(general_position(&[pt(0, 0), pt(1, 7)]));
    assert!(general_position(&[]));
}

proptest! {
    #[test]
    fn turn_antisymmetry(
        ax in -1000i64..1000, ay in -1000i64..1000,
        bx in -1000i64..1000, by in -1000i64..1000,
        cx in -1000i64..1000, cy in -1000i64..1000,
    ) {
        let (a, b, c) = (pt(ax, ay), pt(bx, by), pt(cx, cy));
        prop_assert_eq!(turn(a, b, c), turn(b, a, c).reversed());
        prop_assert_eq!(turn(a, b, c), turn(a, c, b).reversed());
    }

    #[test]
    fn turn_collinear_under_any_argument_order(
        ax in -500i64..500, ay in -500i64..500,
        dx in -20i64..20, dy in -20i64..20,
        s in 0i64..10, t in 0i64..10,
    ) {
        // Three points on one line, in every argument order.
        let a = pt(ax, ay);
        let b = pt(ax + s * dx, ay + s * dy);
        let c = pt(ax + t * dx, ay + t * dy);
        for (x, y, z) in [(a, b, c), (b, a, c), (a, c, b), (c, b, a)] {
            prop_assert_eq!(turn(x, y, z), Turn::Collinear);
        }
        prop_assert!(!general_position(&[a, b, c]));
    }

    #[test]
    fn angular_sort_is_cyclically_counterclockwise(
        coords in proptest::collection::vec((-50i64..50, -50i64..50), 1..12),
    ) {
        let pts: Vec<Point> = coords.iter().map(|&(x, y)| pt(x, y)).collect();
        let pivot = pt(0, 0);
        let part = sort_around_point(pivot, &pts);
        for chain in [part.right(), part.left()] {
            for w in chain.windows(2) {
                // Within a chain the sweep never goes clockwise.
                prop_assert_ne!(turn(pivot, w[0], w[1]), Turn::Right);
            }
        }
    }
}
