//! Match result types.

use crate::error::{Error, Result};
use crate::relation::TemporalRelation;

/// Classification of a produced match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// Both sides are points matched at the same instant, with no
    /// tolerance in play on either side.
    PointExact,
    /// One side is effectively a point lying within the other side's
    /// effective interval. No relation is carried.
    PointInInterval,
    /// Both sides are effectively intervals; the Allen relation between
    /// the expanded extents is carried.
    Interval,
}

/// A single matched (anchor, candidate) pair.
///
/// Both entities are borrowed from the caller's input slices; the pair is
/// `Copy` and carries no owned storage. The relation is present if and
/// only if the match type is [`MatchType::Interval`]; the constructor
/// rejects any other combination.
#[derive(Debug)]
pub struct MatchPair<'d, A, C> {
    anchor: &'d A,
    candidate: &'d C,
    match_type: MatchType,
    relation: Option<TemporalRelation>,
}

// Manual impls: the entities sit behind references, so no `A: Copy` or
// `C: Copy` bound applies.
impl<A, C> Clone for MatchPair<'_, A, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, C> Copy for MatchPair<'_, A, C> {}

impl<'d, A, C> MatchPair<'d, A, C> {
    /// Create a match pair, validating the type/relation pairing.
    ///
    /// Returns [`Error::InvalidMatchPair`] when `relation` is present for a
    /// point match or absent for an interval match.
    pub fn new(
        anchor: &'d A,
        candidate: &'d C,
        match_type: MatchType,
        relation: Option<TemporalRelation>,
    ) -> Result<Self> {
        if relation.is_some() != (match_type == MatchType::Interval) {
            return Err(Error::InvalidMatchPair);
        }
        Ok(Self { anchor, candidate, match_type, relation })
    }

    /// The matched anchor.
    #[inline]
    pub fn anchor(&self) -> &'d A {
        self.anchor
    }

    /// The matched candidate.
    #[inline]
    pub fn candidate(&self) -> &'d C {
        self.candidate
    }

    /// How the match was classified.
    #[inline]
    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// The Allen relation of the expanded extents, for interval matches.
    #[inline]
    pub fn relation(&self) -> Option<TemporalRelation> {
        self.relation
    }
}

/// The candidates matched by one anchor, as a borrowed view.
///
/// The view is valid only for the duration of the sink callback it is
/// passed to; sinks needing the candidates afterwards copy what they need.
/// Groups are only ever built for anchors with at least one match, and the
/// candidate order is the emission order.
#[derive(Debug)]
pub struct MatchGroup<'g, A, C> {
    anchor: &'g A,
    matches: &'g [&'g C],
}

impl<'g, A, C> MatchGroup<'g, A, C> {
    pub(crate) fn new(anchor: &'g A, matches: &'g [&'g C]) -> Self {
        debug_assert!(!matches.is_empty(), "empty groups are reported as misses");
        Self { anchor, matches }
    }

    /// The anchor the group belongs to.
    #[inline]
    pub fn anchor(&self) -> &'g A {
        self.anchor
    }

    /// The matched candidates, in emission order.
    #[inline]
    pub fn matches(&self) -> &'g [&'g C] {
        self.matches
    }

    /// Number of matched candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Always false: zero-match anchors are reported via `on_miss`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
