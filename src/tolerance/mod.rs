//! Tolerance-aware number and point comparison.
//!
//! All functions take their tolerance explicitly: an `Option` epsilon or a
//! `round` flag. No hidden epsilons are used.

mod compare;
mod equality;

pub use compare::{compare_numbers, round_to, ROUND_DECIMALS};
pub use equality::{
    clipper_point_equal, has2d_duplicate, has_duplicate, has_duplicate_by, point2d_equal,
    point_equal, PointEquivalence, PointMatch,
};
