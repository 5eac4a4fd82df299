//! Output sinks.
//!
//! Sinks receive results synchronously on the calling thread, in emission
//! order. A sink returning an error stops the call immediately; the error
//! propagates to the caller and nothing further is emitted. Sinks must not
//! mutate the borrowed inputs.
//!
//! [`NullSink`] discards everything and is useful for warm-up and
//! benchmarks. [`PairCollector`] and [`GroupCollector`] clone results into
//! owned vectors; they allocate and are meant for tests and small batches,
//! not for the allocation-free hot path.

use crate::error::Result;
use crate::matcher::pair::{MatchGroup, MatchPair, MatchType};
use crate::relation::TemporalRelation;

/// Receiver of individual matched pairs.
pub trait PairSink<A, C> {
    /// Called once per matched pair, in emission order.
    fn on_match(&mut self, pair: &MatchPair<'_, A, C>) -> Result<()>;

    /// Called exactly once for each anchor with zero matches, in anchor
    /// input order.
    fn on_miss(&mut self, anchor: &A) -> Result<()>;
}

/// Receiver of per-anchor candidate groups.
pub trait GroupSink<A, C> {
    /// Called once per anchor with at least one match. The group view is
    /// valid only until this call returns.
    fn on_match(&mut self, group: &MatchGroup<'_, A, C>) -> Result<()>;

    /// Called exactly once for each anchor with zero matches, in anchor
    /// input order.
    fn on_miss(&mut self, anchor: &A) -> Result<()>;
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NullSink {
    /// Create a null sink.
    pub fn new() -> Self {
        Self
    }
}

impl<A, C> PairSink<A, C> for NullSink {
    fn on_match(&mut self, _pair: &MatchPair<'_, A, C>) -> Result<()> {
        Ok(())
    }

    fn on_miss(&mut self, _anchor: &A) -> Result<()> {
        Ok(())
    }
}

impl<A, C> GroupSink<A, C> for NullSink {
    fn on_match(&mut self, _group: &MatchGroup<'_, A, C>) -> Result<()> {
        Ok(())
    }

    fn on_miss(&mut self, _anchor: &A) -> Result<()> {
        Ok(())
    }
}

/// An owned record of one matched pair, as collected by [`PairCollector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedPair<A, C> {
    /// The matched anchor.
    pub anchor: A,
    /// The matched candidate.
    pub candidate: C,
    /// How the match was classified.
    pub match_type: MatchType,
    /// The carried relation, for interval matches.
    pub relation: Option<TemporalRelation>,
}

/// A pair sink that clones matches and misses into owned vectors.
#[derive(Debug, Clone, Default)]
pub struct PairCollector<A, C> {
    matches: Vec<CollectedPair<A, C>>,
    misses: Vec<A>,
}

impl<A: Clone, C: Clone> PairCollector<A, C> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self { matches: Vec::new(), misses: Vec::new() }
    }

    /// The collected matches, in emission order.
    pub fn matches(&self) -> &[CollectedPair<A, C>] {
        &self.matches
    }

    /// The collected misses, in anchor input order.
    pub fn misses(&self) -> &[A] {
        &self.misses
    }
}

impl<A: Clone, C: Clone> PairSink<A, C> for PairCollector<A, C> {
    fn on_match(&mut self, pair: &MatchPair<'_, A, C>) -> Result<()> {
        self.matches.push(CollectedPair {
            anchor: pair.anchor().clone(),
            candidate: pair.candidate().clone(),
            match_type: pair.match_type(),
            relation: pair.relation(),
        });
        Ok(())
    }

    fn on_miss(&mut self, anchor: &A) -> Result<()> {
        self.misses.push(anchor.clone());
        Ok(())
    }
}

/// A group sink that clones each group into an owned `(anchor, candidates)`
/// record.
#[derive(Debug, Clone, Default)]
pub struct GroupCollector<A, C> {
    groups: Vec<(A, Vec<C>)>,
    misses: Vec<A>,
}

impl<A: Clone, C: Clone> GroupCollector<A, C> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self { groups: Vec::new(), misses: Vec::new() }
    }

    /// The collected groups, in anchor input order.
    pub fn groups(&self) -> &[(A, Vec<C>)] {
        &self.groups
    }

    /// The collected misses, in anchor input order.
    pub fn misses(&self) -> &[A] {
        &self.misses
    }
}

impl<A: Clone, C: Clone> GroupSink<A, C> for GroupCollector<A, C> {
    fn on_match(&mut self, group: &MatchGroup<'_, A, C>) -> Result<()> {
        let members = group.matches().iter().map(|c| (*c).clone()).collect();
        self.groups.push((group.anchor().clone(), members));
        Ok(())
    }

    fn on_miss(&mut self, anchor: &A) -> Result<()> {
        self.misses.push(anchor.clone());
        Ok(())
    }
}
