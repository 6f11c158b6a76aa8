//! Property-based tests for the comparison, equality and union invariants.

use proptest::prelude::*;
use std::cmp::Ordering;

use polyset::ordering::{sort_points_snake, Axis, SortDirection};
use polyset::polygon::{get_union, poly2d_same, poly_contain, poly_same, Polygon};
use polyset::tolerance::{compare_numbers, has2d_duplicate};
use polyset::Point;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Polygons of 3 to 12 vertices with coordinates on a 0.25 lattice, so
/// rounding never merges two distinct vertices.
fn arb_polygon() -> impl Strategy<Value = Polygon<f64>> {
    prop::collection::vec((-400i32..400, -400i32..400, -40i32..40), 3..12).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y, z)| {
                Point::new_3d(f64::from(x) * 0.25, f64::from(y) * 0.25, f64::from(z) * 0.25)
            })
            .collect()
    })
}

/// An axis-aligned rectangle with even corners on one side and odd corners
/// on the other, so two rectangles never touch without overlapping.
fn arb_rect() -> impl Strategy<Value = Polygon<f64>> {
    (-250i32..250, -250i32..250, 0i32..100, 0i32..100).prop_map(|(x, y, w, h)| {
        let (x0, y0) = (f64::from(x * 2), f64::from(y * 2));
        let (x1, y1) = (x0 + f64::from(w * 2 + 1), y0 + f64::from(h * 2 + 1));
        Polygon::from(vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]])
    })
}

/// Dyadic values (multiples of 1/64) so `n + eps` is exact.
fn arb_dyadic() -> impl Strategy<Value = f64> {
    (-64_000i32..64_000).prop_map(|k| f64::from(k) / 64.0)
}

// ---------------------------------------------------------------------------
// 1. Cyclic equality: reflexive, rotation and reversal tolerant
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn poly_same_reflexive(poly in arb_polygon()) {
        prop_assert!(poly_same(&poly, &poly, true));
        prop_assert!(poly_same(&poly, &poly, false));
    }

    #[test]
    fn poly_same_under_rotation_and_reversal(poly in arb_polygon(), k in 0usize..12) {
        prop_assume!(!has2d_duplicate(&poly.vertices, true));

        let mut vertices = poly.vertices.clone();
        let shift = k % vertices.len();
        vertices.rotate_left(shift);
        let rotated = Polygon::new(vertices);

        prop_assert!(poly_same(&poly, &rotated, true));
        prop_assert!(poly_same(&poly, &rotated.reversed(), true));
        prop_assert!(poly2d_same(&rotated.reversed(), &poly, false));
    }
}

// ---------------------------------------------------------------------------
// 2. Tolerance boundary is inclusive
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn epsilon_boundary(n in arb_dyadic(), eps_k in 1i32..256, delta_k in 1i32..256) {
        let eps = f64::from(eps_k) / 64.0;
        let delta = f64::from(delta_k) / 64.0;

        prop_assert_eq!(compare_numbers(n, n + eps, Some(eps)), Ordering::Equal);
        prop_assert_eq!(compare_numbers(n + eps, n, Some(eps)), Ordering::Equal);
        prop_assert_eq!(compare_numbers(n, n + eps + delta, Some(eps)), Ordering::Less);
        prop_assert_eq!(compare_numbers(n + eps + delta, n, Some(eps)), Ordering::Greater);
    }
}

// ---------------------------------------------------------------------------
// 3. Union of one polygon is its projection
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn union_of_one_is_projection(poly in arb_polygon()) {
        let union = get_union(&[poly.clone()]).unwrap();
        prop_assert_eq!(union, vec![poly.to_xy(None)]);
    }
}

// ---------------------------------------------------------------------------
// 4. Union associativity, up to representation
// ---------------------------------------------------------------------------

fn covers(outer: &[Polygon<f64>], inner: &[Polygon<f64>]) -> bool {
    inner
        .iter()
        .all(|p| outer.iter().any(|q| poly_contain(q, p).unwrap()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn union_associative(a in arb_rect(), b in arb_rect(), c in arb_rect()) {
        let all = get_union(&[a.clone(), b.clone(), c.clone()]).unwrap();

        let mut parts = get_union(&[a, b]).unwrap();
        parts.push(c);
        let nested = get_union(&parts).unwrap();

        prop_assert_eq!(all.len(), nested.len());
        prop_assert!(covers(&all, &nested));
        prop_assert!(covers(&nested, &all));
    }
}

// ---------------------------------------------------------------------------
// 5. Snake sort of a grid alternates within each column
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn snake_grid(cols in 1usize..8, rows in 1usize..8, seed in any::<u64>()) {
        let mut points: Vec<Point<f64>> = (0..cols)
            .flat_map(|x| (0..rows).map(move |y| Point::new(x as f64, y as f64 * 0.5)))
            .collect();
        // deterministic shuffle
        let mut state = seed | 1;
        for i in (1..points.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            points.swap(i, (state % (i as u64 + 1)) as usize);
        }

        let bands = sort_points_snake(
            &points,
            Axis::X,
            [SortDirection::Ascending, SortDirection::Ascending],
            [None, None],
        );

        prop_assert_eq!(bands.len(), cols);
        for (i, band) in bands.iter().enumerate() {
            prop_assert_eq!(band.key, i as f64);
            let ys: Vec<f64> = band.points.iter().map(|p| p.y).collect();
            let mut expected: Vec<f64> = (0..rows).map(|y| y as f64 * 0.5).collect();
            if i % 2 == 1 {
                expected.reverse();
            }
            prop_assert_eq!(ys, expected);
        }
    }
}
