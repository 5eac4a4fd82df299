//! Entity capability traits.
//!
//! The matcher is polymorphic over the concrete entity types it correlates
//! and reads them only through two capabilities:
//!
//! - [`TemporalPoint`]: the entity occurs at a single instant
//! - [`TemporalInterval`]: the entity covers a span of time
//!
//! Accessors must be pure and total: repeated calls on the same entity
//! return the same value. The matcher borrows entities read-only for the
//! duration of a call and retains nothing afterwards. Calls are
//! monomorphized over the entity types, so accessors inline into the inner
//! loops with no virtual dispatch.

use crate::time::{TimeSpan, Timestamp};

/// An entity that occurs at a single instant.
pub trait TemporalPoint {
    /// The instant the entity occurs at.
    fn at(&self) -> Timestamp;
}

/// An entity that covers a span of time.
///
/// Implementations should uphold `start() <= end()`; the matcher verifies
/// this at entry and rejects violations. A degenerate interval with
/// `start() == end()` is legal and behaves like a point at that instant.
pub trait TemporalInterval {
    /// Start of the covered span (inclusive).
    fn start(&self) -> Timestamp;
    /// End of the covered span (inclusive).
    fn end(&self) -> Timestamp;
}

impl TemporalPoint for Timestamp {
    #[inline]
    fn at(&self) -> Timestamp {
        *self
    }
}

impl TemporalInterval for TimeSpan {
    #[inline]
    fn start(&self) -> Timestamp {
        self.start
    }

    #[inline]
    fn end(&self) -> Timestamp {
        self.end
    }
}

impl TemporalInterval for (Timestamp, Timestamp) {
    #[inline]
    fn start(&self) -> Timestamp {
        self.0
    }

    #[inline]
    fn end(&self) -> Timestamp {
        self.1
    }
}

impl<T: TemporalPoint + ?Sized> TemporalPoint for &T {
    #[inline]
    fn at(&self) -> Timestamp {
        (**self).at()
    }
}

impl<T: TemporalInterval + ?Sized> TemporalInterval for &T {
    #[inline]
    fn start(&self) -> Timestamp {
        (**self).start()
    }

    #[inline]
    fn end(&self) -> Timestamp {
        (**self).end()
    }
}
