//! Point ordering: lexicographic comparison, extreme points and snake sorting.

mod points;
mod snake;

pub use points::{compare_points, max_point, max_xy_point, min_point, min_xy_point, Axis};
pub use snake::{sort_points_snake, SnakeBand, SnakeSort, SortDirection};
