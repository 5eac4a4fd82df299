//! Tolerance windows for temporal matching.

use crate::error::{Error, Result};
use crate::time::{TimeDelta, TimeSpan, Timestamp};

/// An asymmetric `(before, after)` expansion window.
///
/// Applied to a point `p`, the tolerance widens it into the span
/// `[p - before, p + after]`; applied to a span `[s, e]` it yields
/// `[s - before, e + after]`. Both components must be non-negative.
///
/// # Examples
///
/// ```rust
/// use syzygy::time::TimeDelta;
/// use syzygy::tolerance::Tolerance;
///
/// let exact = Tolerance::NONE;
/// assert!(exact.is_exact());
///
/// let five = Tolerance::symmetric(TimeDelta::from_secs(5))?;
/// assert_eq!(five.before(), five.after());
/// # Ok::<(), syzygy::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tolerance {
    before: TimeDelta,
    after: TimeDelta,
}

impl Tolerance {
    /// The exact tolerance: no expansion on either side.
    pub const NONE: Self = Self {
        before: TimeDelta::ZERO,
        after: TimeDelta::ZERO,
    };

    /// Create a tolerance from its two components.
    ///
    /// Returns [`Error::InvalidTolerance`] if either component is negative.
    pub fn new(before: TimeDelta, after: TimeDelta) -> Result<Self> {
        if before.is_negative() || after.is_negative() {
            return Err(Error::InvalidTolerance);
        }
        Ok(Self { before, after })
    }

    /// Create a symmetric tolerance with the same width on both sides.
    pub fn symmetric(width: TimeDelta) -> Result<Self> {
        Self::new(width, width)
    }

    /// Expansion applied before the entity.
    #[inline]
    pub const fn before(&self) -> TimeDelta {
        self.before
    }

    /// Expansion applied after the entity.
    #[inline]
    pub const fn after(&self) -> TimeDelta {
        self.after
    }

    /// True if the tolerance performs no expansion at all.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.before.is_zero() && self.after.is_zero()
    }

    /// Widen a point into its tolerance span.
    #[inline]
    pub fn expand_point(&self, at: Timestamp) -> TimeSpan {
        TimeSpan::new(at - self.before, at + self.after)
    }

    /// Widen a span by the tolerance on both ends.
    #[inline]
    pub fn expand_span(&self, span: TimeSpan) -> TimeSpan {
        TimeSpan::new(span.start - self.before, span.end + self.after)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::NONE
    }
}
