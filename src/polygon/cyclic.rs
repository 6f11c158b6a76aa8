//! Matching of cyclic sequences with unknown offset and direction.
//!
//! Two closed loops describe the same polygon when one is a rotation of
//! the other, read in either direction. The algorithm here anchors on the
//! first element of `a`, finds it in `b`, decides the direction from the
//! second element and walks the rest.
//!
//! The anchor is the *first* match, so sequences containing repeated
//! elements can produce false positives (and false negatives); check with
//! [`has_duplicate`](crate::tolerance::has_duplicate) first when that
//! matters.

use thiserror::Error;

/// Direction in which `b` is read relative to `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Backward,
}

/// How `b` lines up with `a`: `a[i]` matches `b[(offset ± i) mod n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicAlignment {
    pub offset: usize,
    pub traversal: Traversal,
}

impl CyclicAlignment {
    /// Index in `b` matched by `a[i]` for sequences of length `n`.
    pub fn index(&self, i: usize, n: usize) -> usize {
        match self.traversal {
            Traversal::Forward => (self.offset + i) % n,
            Traversal::Backward => (self.offset + n - i % n) % n,
        }
    }
}

/// Why two sequences failed to align.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CyclicMismatch {
    /// The sequences differ in length.
    #[error("sequence lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// The first element of `a` does not occur in `b`.
    #[error("first element has no counterpart")]
    NoCommonStart,

    /// The second element of `a` is neither after nor before the anchor in `b`.
    #[error("traversal direction could not be determined")]
    DirectionUndetermined,

    /// Element `index` of `a` does not match its aligned counterpart.
    #[error("sequences diverge at element {index}")]
    Diverged { index: usize },
}

/// Aligns two cyclic sequences under the equivalence `eq`.
///
/// `eq` is always called as `eq(&a[i], &b[j])`. Two empty sequences align
/// trivially at offset 0.
///
/// # Example
///
/// ```
/// use polyset::polygon::{align_cyclic, Traversal};
///
/// let a = [1, 2, 3, 4];
/// let b = [3, 2, 1, 4];
///
/// let alignment = align_cyclic(&a, &b, |x, y| x == y).unwrap();
/// assert_eq!(alignment.offset, 2);
/// assert_eq!(alignment.traversal, Traversal::Backward);
/// ```
pub fn align_cyclic<T, E>(a: &[T], b: &[T], mut eq: E) -> Result<CyclicAlignment, CyclicMismatch>
where
    E: FnMut(&T, &T) -> bool,
{
    let n = a.len();
    if n != b.len() {
        return Err(CyclicMismatch::LengthMismatch {
            left: n,
            right: b.len(),
        });
    }
    if n == 0 {
        return Ok(CyclicAlignment {
            offset: 0,
            traversal: Traversal::Forward,
        });
    }

    let offset = b
        .iter()
        .position(|candidate| eq(&a[0], candidate))
        .ok_or(CyclicMismatch::NoCommonStart)?;

    let mut alignment = CyclicAlignment {
        offset,
        traversal: Traversal::Forward,
    };
    if n == 1 {
        return Ok(alignment);
    }

    if !eq(&a[1], &b[alignment.index(1, n)]) {
        alignment.traversal = Traversal::Backward;
        if !eq(&a[1], &b[alignment.index(1, n)]) {
            return Err(CyclicMismatch::DirectionUndetermined);
        }
    }

    for (i, item) in a.iter().enumerate().skip(2) {
        if !eq(item, &b[alignment.index(i, n)]) {
            return Err(CyclicMismatch::Diverged { index: i });
        }
    }
    Ok(alignment)
}
