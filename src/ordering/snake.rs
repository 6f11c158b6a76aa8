//! Snake-pattern sorting of point grids.
//!
//! Module tables and panel rows are laid out on a rough grid. Wiring walks
//! that grid one row (or column) at a time, turning around at the end of
//! each, so the secondary direction alternates between bands:
//!
//! ```text
//!   y
//!   ^   3 --- 4     9
//!   |   |     |     |
//!   |   2     5     8
//!   |   |     |     |
//!   |   1     6 --- 7
//!   +-----------------> x
//! ```
//!
//! Coordinates captured from a model carry rounding noise, so one physical
//! column can appear as several nearly equal x values. A per-axis epsilon
//! absorbs that noise.

use super::points::Axis;
use crate::primitives::Point;
use num_traits::Float;
use std::cmp::Ordering;

/// Sort direction along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    #[inline]
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// One row or column of a snake sort.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeBand<F> {
    /// Primary-axis coordinate of the band (the lowest one when near-equal
    /// coordinates were merged).
    pub key: F,
    /// Points of the band in traversal order.
    pub points: Vec<Point<F>>,
}

/// Snake sort settings.
///
/// Per-axis settings are indexed `[x, y]` regardless of which axis is
/// primary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeSort<F> {
    primary: Axis,
    directions: [SortDirection; 2],
    epsilon: [Option<F>; 2],
}

impl<F: Float> SnakeSort<F> {
    /// Bands along `primary`, ascending on both axes, no epsilon.
    pub fn new(primary: Axis) -> Self {
        Self {
            primary,
            directions: [SortDirection::Ascending; 2],
            epsilon: [None; 2],
        }
    }

    /// Sets the band order (primary axis) and the first band's point order
    /// (secondary axis).
    pub fn with_directions(mut self, x: SortDirection, y: SortDirection) -> Self {
        self.directions = [x, y];
        self
    }

    /// Treats coordinates along `axis` within `epsilon` as equal.
    pub fn with_epsilon(mut self, axis: Axis, epsilon: F) -> Self {
        self.epsilon[axis.index()] = Some(epsilon);
        self
    }

    /// Sorts `points` into bands. See [`sort_points_snake`].
    pub fn sort(&self, points: &[Point<F>]) -> Vec<SnakeBand<F>> {
        sort_points_snake(points, self.primary, self.directions, self.epsilon)
    }

    /// Sorts and flattens the bands into a single traversal.
    pub fn order(&self, points: &[Point<F>]) -> Vec<Point<F>> {
        self.sort(points)
            .into_iter()
            .flat_map(|band| band.points)
            .collect()
    }
}

#[inline]
fn total_cmp<F: Float>(a: F, b: F) -> Ordering {
    a.to_f64()
        .unwrap_or(f64::NAN)
        .total_cmp(&b.to_f64().unwrap_or(f64::NAN))
}

/// Sorts points in a snake pattern.
///
/// 1. Points are grouped into bands by their exact `primary` coordinate.
/// 2. With a primary epsilon, bands are scanned from the highest key down
///    and a band is merged into the next lower one while that lower key
///    lies within epsilon of the band's top key. The merged band keeps
///    the lower key; its own points come first.
/// 3. Bands are ordered by `directions[primary]`.
/// 4. Each band is sorted along the secondary axis, starting with
///    `directions[secondary]` and flipping direction for every band.
///    With a secondary epsilon, values within epsilon of the start of
///    their run count as equal and keep their input order.
///
/// `directions` and `epsilon` are indexed `[x, y]`.
///
/// # Example
///
/// ```
/// use polyset::ordering::{sort_points_snake, Axis, SortDirection};
/// use polyset::Point;
///
/// let grid: Vec<Point<f64>> = (0..3)
///     .flat_map(|x| (0..3).map(move |y| Point::new(x as f64, y as f64)))
///     .collect();
///
/// let bands = sort_points_snake(
///     &grid,
///     Axis::X,
///     [SortDirection::Ascending, SortDirection::Ascending],
///     [None, None],
/// );
///
/// let ys: Vec<Vec<f64>> = bands
///     .iter()
///     .map(|b| b.points.iter().map(|p| p.y).collect())
///     .collect();
/// assert_eq!(ys, vec![vec![0.0, 1.0, 2.0], vec![2.0, 1.0, 0.0], vec![0.0, 1.0, 2.0]]);
/// ```
pub fn sort_points_snake<F: Float>(
    points: &[Point<F>],
    primary: Axis,
    directions: [SortDirection; 2],
    epsilon: [Option<F>; 2],
) -> Vec<SnakeBand<F>> {
    let secondary = primary.other();

    let mut bands = group_bands(points, primary);
    if let Some(eps) = epsilon[primary.index()] {
        bands = merge_close_bands(bands, eps);
    }
    if directions[primary.index()] == SortDirection::Descending {
        bands.reverse();
    }

    let mut direction = directions[secondary.index()];
    for band in &mut bands {
        sort_band(&mut band.points, secondary, direction, epsilon[secondary.index()]);
        direction = direction.reversed();
    }
    bands
}

/// Groups by exact primary coordinate, ascending, input order kept inside a band.
fn group_bands<F: Float>(points: &[Point<F>], axis: Axis) -> Vec<SnakeBand<F>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| total_cmp(axis.coord(a), axis.coord(b)));

    let mut bands: Vec<SnakeBand<F>> = Vec::new();
    for p in sorted {
        let key = axis.coord(&p);
        match bands.last_mut() {
            Some(band) if band.key == key => band.points.push(p),
            _ => bands.push(SnakeBand {
                key,
                points: vec![p],
            }),
        }
    }
    bands
}

/// Merges ascending bands whose keys are within `epsilon` of the top of the
/// band being built, scanning from the highest key down.
fn merge_close_bands<F: Float>(bands: Vec<SnakeBand<F>>, epsilon: F) -> Vec<SnakeBand<F>> {
    let mut merged: Vec<SnakeBand<F>> = Vec::with_capacity(bands.len());
    let mut pending: Option<(F, SnakeBand<F>)> = None;

    for band in bands.into_iter().rev() {
        pending = match pending.take() {
            Some((top, upper)) if (top - band.key).abs() <= epsilon => {
                let mut points = band.points;
                points.extend(upper.points);
                Some((
                    top,
                    SnakeBand {
                        key: band.key,
                        points,
                    },
                ))
            }
            Some((_, upper)) => {
                merged.push(upper);
                Some((band.key, band))
            }
            None => Some((band.key, band)),
        };
    }
    if let Some((_, band)) = pending {
        merged.push(band);
    }

    merged.reverse();
    merged
}

/// Sorts one band along `axis`. Runs of values within `epsilon` of the
/// run's first value form one rank; ranks follow `direction`, points of a
/// rank keep their input order.
fn sort_band<F: Float>(
    points: &mut Vec<Point<F>>,
    axis: Axis,
    direction: SortDirection,
    epsilon: Option<F>,
) {
    let eps = epsilon.unwrap_or_else(F::zero);

    let mut indexed: Vec<(usize, Point<F>)> = points.drain(..).enumerate().collect();
    indexed.sort_by(|a, b| total_cmp(axis.coord(&a.1), axis.coord(&b.1)));

    let mut ranked: Vec<(usize, usize, Point<F>)> = Vec::with_capacity(indexed.len());
    let mut run_start: Option<F> = None;
    let mut rank = 0;
    for (index, p) in indexed {
        let value = axis.coord(&p);
        match run_start {
            Some(start) if (value - start).abs() <= eps => {}
            Some(_) => {
                rank += 1;
                run_start = Some(value);
            }
            None => run_start = Some(value),
        }
        ranked.push((rank, index, p));
    }

    ranked.sort_by(|a, b| direction.apply(a.0.cmp(&b.0)).then(a.1.cmp(&b.1)));
    points.extend(ranked.into_iter().map(|(_, _, p)| p));
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASC: SortDirection = SortDirection::Ascending;
    const DES: SortDirection = SortDirection::Descending;

    fn grid() -> Vec<Point<f64>> {
        // shuffled 3x3 grid
        vec![
            Point::new(1.0, 2.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 1.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.0),
        ]
    }

    fn ys(bands: &[SnakeBand<f64>]) -> Vec<Vec<f64>> {
        bands
            .iter()
            .map(|b| b.points.iter().map(|p| p.y).collect())
            .collect()
    }

    fn keys(bands: &[SnakeBand<f64>]) -> Vec<f64> {
        bands.iter().map(|b| b.key).collect()
    }

    #[test]
    fn test_grid_x_primary() {
        let bands = sort_points_snake(&grid(), Axis::X, [ASC, ASC], [None, None]);
        assert_eq!(keys(&bands), vec![0.0, 1.0, 2.0]);
        assert_eq!(
            ys(&bands),
            vec![vec![0.0, 1.0, 2.0], vec![2.0, 1.0, 0.0], vec![0.0, 1.0, 2.0]]
        );
        for band in &bands {
            assert!(band.points.iter().all(|p| p.x == band.key));
        }
    }

    #[test]
    fn test_grid_descending() {
        let bands = sort_points_snake(&grid(), Axis::X, [DES, DES], [None, None]);
        assert_eq!(keys(&bands), vec![2.0, 1.0, 0.0]);
        assert_eq!(
            ys(&bands),
            vec![vec![2.0, 1.0, 0.0], vec![0.0, 1.0, 2.0], vec![2.0, 1.0, 0.0]]
        );
    }

    #[test]
    fn test_grid_y_primary() {
        let bands = sort_points_snake(&grid(), Axis::Y, [ASC, ASC], [None, None]);
        assert_eq!(keys(&bands), vec![0.0, 1.0, 2.0]);
        let xs: Vec<Vec<f64>> = bands
            .iter()
            .map(|b| b.points.iter().map(|p| p.x).collect())
            .collect();
        assert_eq!(
            xs,
            vec![vec![0.0, 1.0, 2.0], vec![2.0, 1.0, 0.0], vec![0.0, 1.0, 2.0]]
        );
    }

    #[test]
    fn test_primary_epsilon_merges_noise() {
        let points = vec![
            Point::new(1.03, 5.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.02, 0.0),
        ];
        let bands = sort_points_snake(&points, Axis::X, [ASC, ASC], [Some(0.05), None]);
        assert_eq!(keys(&bands), vec![0.0, 1.0]);
        assert_eq!(ys(&bands), vec![vec![0.0, 1.0], vec![5.0, 2.0]]);
    }

    #[test]
    fn test_primary_epsilon_anchors_on_band_top() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.04, 0.0),
            Point::new(0.08, 0.0),
        ];
        let bands = sort_points_snake(&points, Axis::X, [ASC, ASC], [Some(0.05), None]);
        assert_eq!(keys(&bands), vec![0.0, 0.04]);
        assert_eq!(bands[1].points.len(), 2);
    }

    #[test]
    fn test_merged_band_keeps_lower_points_first() {
        let points = vec![Point::new(1.01, 7.0), Point::new(1.0, 7.0)];
        let bands = sort_points_snake(&points, Axis::X, [ASC, ASC], [Some(0.05), None]);
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].points[0].x, 1.0);
        assert_eq!(bands[0].points[1].x, 1.01);
    }

    #[test]
    fn test_secondary_epsilon_keeps_input_order() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(0.0, 0.01),
            Point::new(0.0, 4.99),
        ];
        let asc = sort_points_snake(&points, Axis::X, [ASC, ASC], [None, Some(0.05)]);
        assert_eq!(ys(&asc), vec![vec![0.0, 0.01, 5.0, 4.99]]);

        let des = sort_points_snake(&points, Axis::X, [ASC, DES], [None, Some(0.05)]);
        assert_eq!(ys(&des), vec![vec![5.0, 4.99, 0.0, 0.01]]);
    }

    #[test]
    fn test_empty_and_single_band() {
        let empty: Vec<Point<f64>> = Vec::new();
        assert!(sort_points_snake(&empty, Axis::X, [ASC, ASC], [None, None]).is_empty());

        let column = vec![Point::new(3.0, 2.0), Point::new(3.0, 1.0)];
        let bands = sort_points_snake(&column, Axis::X, [ASC, DES], [None, None]);
        assert_eq!(ys(&bands), vec![vec![2.0, 1.0]]);
    }

    #[test]
    fn test_builder_matches_function() {
        let sorter = SnakeSort::new(Axis::X)
            .with_directions(ASC, DES)
            .with_epsilon(Axis::X, 0.1);
        let expected = sort_points_snake(&grid(), Axis::X, [ASC, DES], [Some(0.1), None]);
        assert_eq!(sorter.sort(&grid()), expected);

        let order = sorter.order(&grid());
        assert_eq!(order.len(), 9);
        assert_eq!(order[0], Point::new(0.0, 2.0));
        assert_eq!(order[3], Point::new(1.0, 0.0));
    }

    #[test]
    fn test_nan_does_not_panic() {
        let points = vec![Point::new(f64::NAN, 0.0), Point::new(1.0, f64::NAN)];
        let bands = sort_points_snake(&points, Axis::X, [ASC, ASC], [Some(0.1), Some(0.1)]);
        let total: usize = bands.iter().map(|b| b.points.len()).sum();
        assert_eq!(total, 2);
    }
}
