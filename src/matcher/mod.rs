//! The matching engine.
//!
//! [`Matcher`] correlates an anchor sequence against a candidate sequence
//! under a [`MatchPolicy`]. Four matcher families cover the combinations of
//! point and interval entities, each with three output modes:
//!
//! | Operation | Anchors | Candidates |
//! |---|---|---|
//! | [`Matcher::points_to_points`] | point | point |
//! | [`Matcher::points_to_intervals`] | point | interval |
//! | [`Matcher::intervals_to_points`] | interval | point |
//! | [`Matcher::intervals_to_intervals`] | interval | interval |
//!
//! The `*_grouped` mirrors aggregate each anchor's candidates into a
//! [`MatchGroup`]; the `*_buffered` mirrors fill a caller-supplied buffer
//! and return the match count.
//!
//! A call borrows both input slices read-only, holds no state afterwards,
//! and runs entirely on the calling thread. Input validation (interval
//! well-formedness, declared ordering) happens before anything is emitted.

mod pair;
mod sink;
mod strategy;

pub use pair::{MatchGroup, MatchPair, MatchType};
pub use sink::{CollectedPair, GroupCollector, GroupSink, NullSink, PairCollector, PairSink};

use tracing::debug;

use crate::entity::{TemporalInterval, TemporalPoint};
use crate::error::{Error, Result, Side};
use crate::policy::{InputOrdering, MatchPolicy};
use crate::time::{TimeSpan, Timestamp};
use crate::tolerance::Tolerance;
use strategy::{BufferEmitter, Emitter, GroupEmitter, MatchParams, PairEmitter};

// ============================================================================
// Matcher
// ============================================================================

/// The scan strategy selected for a call. Selection is a pure performance
/// decision; every strategy emits the identical result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Brute,
    Window,
    Sweep,
}

/// A temporal correlator configured by a [`MatchPolicy`].
///
/// # Example
///
/// ```rust
/// use syzygy::prelude::*;
///
/// # fn main() -> syzygy::Result<()> {
/// let policy = MatchPolicy::new()
///     .with_anchor_tolerance(Tolerance::symmetric(TimeDelta::from_secs(5))?);
/// let matcher = Matcher::new(policy);
///
/// let anchors = [Timestamp::from_secs(100)];
/// let candidates = [Timestamp::from_secs(98), Timestamp::from_secs(200)];
///
/// let mut sink = PairCollector::new();
/// matcher.points_to_points(&anchors, &candidates, &mut sink)?;
/// assert_eq!(sink.matches().len(), 1);
/// assert!(sink.misses().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    policy: MatchPolicy,
}

impl Matcher {
    /// Create a matcher from a policy.
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// The policy this matcher applies.
    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    // ------------------------------------------------------------------
    // point -> point
    // ------------------------------------------------------------------

    /// Match point anchors against point candidates, emitting pairs.
    pub fn points_to_points<A, C, S>(
        &self,
        anchors: &[A],
        candidates: &[C],
        sink: &mut S,
    ) -> Result<()>
    where
        A: TemporalPoint,
        C: TemporalPoint,
        S: PairSink<A, C>,
    {
        self.run_point_point(anchors, candidates, &mut PairEmitter::new(sink))
    }

    /// Match point anchors against point candidates, emitting per-anchor
    /// groups.
    pub fn points_to_points_grouped<A, C, S>(
        &self,
        anchors: &[A],
        candidates: &[C],
        sink: &mut S,
    ) -> Result<()>
    where
        A: TemporalPoint,
        C: TemporalPoint,
        S: GroupSink<A, C>,
    {
        self.run_point_point(anchors, candidates, &mut GroupEmitter::new(sink))
    }

    /// Match point anchors against point candidates into a caller-supplied
    /// buffer, returning the number of pairs written.
    ///
    /// The buffer is filled up to its pre-reserved capacity and never
    /// grown; hitting the capacity fails with [`Error::BufferExhausted`]
    /// and leaves the filled prefix readable. Misses are not tracked in
    /// this mode.
    pub fn points_to_points_buffered<'d, A, C>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        out: &mut Vec<MatchPair<'d, A, C>>,
    ) -> Result<usize>
    where
        A: TemporalPoint,
        C: TemporalPoint,
    {
        let filled = out.len();
        self.run_point_point(anchors, candidates, &mut BufferEmitter::new(out))?;
        Ok(out.len() - filled)
    }

    // ------------------------------------------------------------------
    // point -> interval
    // ------------------------------------------------------------------

    /// Match point anchors against interval candidates, emitting pairs.
    pub fn points_to_intervals<A, C, S>(
        &self,
        anchors: &[A],
        candidates: &[C],
        sink: &mut S,
    ) -> Result<()>
    where
        A: TemporalPoint,
        C: TemporalInterval,
        S: PairSink<A, C>,
    {
        self.run_point_interval(anchors, candidates, &mut PairEmitter::new(sink))
    }

    /// Match point anchors against interval candidates, emitting per-anchor
    /// groups.
    pub fn points_to_intervals_grouped<A, C, S>(
        &self,
        anchors: &[A],
        candidates: &[C],
        sink: &mut S,
    ) -> Result<()>
    where
        A: TemporalPoint,
        C: TemporalInterval,
        S: GroupSink<A, C>,
    {
        self.run_point_interval(anchors, candidates, &mut GroupEmitter::new(sink))
    }

    /// Match point anchors against interval candidates into a
    /// caller-supplied buffer, returning the number of pairs written.
    pub fn points_to_intervals_buffered<'d, A, C>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        out: &mut Vec<MatchPair<'d, A, C>>,
    ) -> Result<usize>
    where
        A: TemporalPoint,
        C: TemporalInterval,
    {
        let filled = out.len();
        self.run_point_interval(anchors, candidates, &mut BufferEmitter::new(out))?;
        Ok(out.len() - filled)
    }

    // ------------------------------------------------------------------
    // interval -> point
    // ------------------------------------------------------------------

    /// Match interval anchors against point candidates, emitting pairs.
    pub fn intervals_to_points<A, C, S>(
        &self,
        anchors: &[A],
        candidates: &[C],
        sink: &mut S,
    ) -> Result<()>
    where
        A: TemporalInterval,
        C: TemporalPoint,
        S: PairSink<A, C>,
    {
        self.run_interval_point(anchors, candidates, &mut PairEmitter::new(sink))
    }

    /// Match interval anchors against point candidates, emitting per-anchor
    /// groups.
    pub fn intervals_to_points_grouped<A, C, S>(
        &self,
        anchors: &[A],
        candidates: &[C],
        sink: &mut S,
    ) -> Result<()>
    where
        A: TemporalInterval,
        C: TemporalPoint,
        S: GroupSink<A, C>,
    {
        self.run_interval_point(anchors, candidates, &mut GroupEmitter::new(sink))
    }

    /// Match interval anchors against point candidates into a
    /// caller-supplied buffer, returning the number of pairs written.
    pub fn intervals_to_points_buffered<'d, A, C>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        out: &mut Vec<MatchPair<'d, A, C>>,
    ) -> Result<usize>
    where
        A: TemporalInterval,
        C: TemporalPoint,
    {
        let filled = out.len();
        self.run_interval_point(anchors, candidates, &mut BufferEmitter::new(out))?;
        Ok(out.len() - filled)
    }

    // ------------------------------------------------------------------
    // interval -> interval
    // ------------------------------------------------------------------

    /// Match interval anchors against interval candidates, emitting pairs.
    pub fn intervals_to_intervals<A, C, S>(
        &self,
        anchors: &[A],
        candidates: &[C],
        sink: &mut S,
    ) -> Result<()>
    where
        A: TemporalInterval,
        C: TemporalInterval,
        S: PairSink<A, C>,
    {
        self.run_interval_interval(anchors, candidates, &mut PairEmitter::new(sink))
    }

    /// Match interval anchors against interval candidates, emitting
    /// per-anchor groups.
    pub fn intervals_to_intervals_grouped<A, C, S>(
        &self,
        anchors: &[A],
        candidates: &[C],
        sink: &mut S,
    ) -> Result<()>
    where
        A: TemporalInterval,
        C: TemporalInterval,
        S: GroupSink<A, C>,
    {
        self.run_interval_interval(anchors, candidates, &mut GroupEmitter::new(sink))
    }

    /// Match interval anchors against interval candidates into a
    /// caller-supplied buffer, returning the number of pairs written.
    pub fn intervals_to_intervals_buffered<'d, A, C>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        out: &mut Vec<MatchPair<'d, A, C>>,
    ) -> Result<usize>
    where
        A: TemporalInterval,
        C: TemporalInterval,
    {
        let filled = out.len();
        self.run_interval_interval(anchors, candidates, &mut BufferEmitter::new(out))?;
        Ok(out.len() - filled)
    }

    // ------------------------------------------------------------------
    // drivers
    // ------------------------------------------------------------------

    fn run_point_point<'d, A, C, E>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        emit: &mut E,
    ) -> Result<()>
    where
        A: TemporalPoint,
        C: TemporalPoint,
        E: Emitter<'d, A, C>,
    {
        match self.policy.input_ordering {
            InputOrdering::None => {}
            InputOrdering::CandidatesSorted => {
                validate_sorted(candidates, |c| c.at(), Side::Candidate)?;
            }
            InputOrdering::BothSorted => {
                validate_sorted(candidates, |c| c.at(), Side::Candidate)?;
                validate_sorted(anchors, |a| a.at(), Side::Anchor)?;
            }
        }

        let plan = self.plan(false, false);
        debug!(
            anchors = anchors.len(),
            candidates = candidates.len(),
            ?plan,
            "correlating points to points"
        );

        let params = self.params(false, false);
        let ta = self.policy.anchor_tolerance;
        let tc = self.policy.candidate_tolerance;
        let expand_a = move |a: &A| ta.expand_point(a.at());
        let expand_c = move |c: &C| tc.expand_point(c.at());

        match plan {
            Plan::Brute => params.brute(anchors, candidates, expand_a, expand_c, emit),
            Plan::Window => params.window(
                anchors,
                candidates,
                expand_a,
                expand_c,
                |w| point_bounds(candidates, w, tc),
                emit,
            ),
            Plan::Sweep => params.sweep(anchors, candidates, expand_a, expand_c, |c| c.at(), emit),
        }
    }

    fn run_point_interval<'d, A, C, E>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        emit: &mut E,
    ) -> Result<()>
    where
        A: TemporalPoint,
        C: TemporalInterval,
        E: Emitter<'d, A, C>,
    {
        validate_intervals(candidates, Side::Candidate)?;
        match self.policy.input_ordering {
            InputOrdering::None => {}
            InputOrdering::CandidatesSorted => {
                validate_sorted(candidates, |c| c.start(), Side::Candidate)?;
            }
            InputOrdering::BothSorted => {
                validate_sorted(candidates, |c| c.start(), Side::Candidate)?;
                validate_sorted(anchors, |a| a.at(), Side::Anchor)?;
            }
        }

        let plan = self.plan(false, true);
        debug!(
            anchors = anchors.len(),
            candidates = candidates.len(),
            ?plan,
            "correlating points to intervals"
        );

        let params = self.params(false, true);
        let ta = self.policy.anchor_tolerance;
        let tc = self.policy.candidate_tolerance;
        let expand_a = move |a: &A| ta.expand_point(a.at());
        let expand_c = move |c: &C| tc.expand_span(TimeSpan::new(c.start(), c.end()));

        match plan {
            Plan::Brute | Plan::Sweep => {
                params.brute(anchors, candidates, expand_a, expand_c, emit)
            }
            Plan::Window => params.window(
                anchors,
                candidates,
                expand_a,
                expand_c,
                |w| interval_bounds(candidates, w, tc),
                emit,
            ),
        }
    }

    fn run_interval_point<'d, A, C, E>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        emit: &mut E,
    ) -> Result<()>
    where
        A: TemporalInterval,
        C: TemporalPoint,
        E: Emitter<'d, A, C>,
    {
        validate_intervals(anchors, Side::Anchor)?;
        match self.policy.input_ordering {
            InputOrdering::None => {}
            InputOrdering::CandidatesSorted => {
                validate_sorted(candidates, |c| c.at(), Side::Candidate)?;
            }
            InputOrdering::BothSorted => {
                validate_sorted(candidates, |c| c.at(), Side::Candidate)?;
                validate_sorted(anchors, |a| a.start(), Side::Anchor)?;
            }
        }

        let plan = self.plan(true, false);
        debug!(
            anchors = anchors.len(),
            candidates = candidates.len(),
            ?plan,
            "correlating intervals to points"
        );

        let params = self.params(true, false);
        let ta = self.policy.anchor_tolerance;
        let tc = self.policy.candidate_tolerance;
        let expand_a = move |a: &A| ta.expand_span(TimeSpan::new(a.start(), a.end()));
        let expand_c = move |c: &C| tc.expand_point(c.at());

        match plan {
            Plan::Brute | Plan::Sweep => {
                params.brute(anchors, candidates, expand_a, expand_c, emit)
            }
            Plan::Window => params.window(
                anchors,
                candidates,
                expand_a,
                expand_c,
                |w| point_bounds(candidates, w, tc),
                emit,
            ),
        }
    }

    fn run_interval_interval<'d, A, C, E>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        emit: &mut E,
    ) -> Result<()>
    where
        A: TemporalInterval,
        C: TemporalInterval,
        E: Emitter<'d, A, C>,
    {
        validate_intervals(anchors, Side::Anchor)?;
        validate_intervals(candidates, Side::Candidate)?;
        match self.policy.input_ordering {
            InputOrdering::None => {}
            InputOrdering::CandidatesSorted => {
                validate_sorted(candidates, |c| c.start(), Side::Candidate)?;
            }
            InputOrdering::BothSorted => {
                validate_sorted(candidates, |c| c.start(), Side::Candidate)?;
                validate_sorted(anchors, |a| a.start(), Side::Anchor)?;
            }
        }

        debug!(
            anchors = anchors.len(),
            candidates = candidates.len(),
            "correlating intervals to intervals"
        );

        let params = self.params(true, true);
        let ta = self.policy.anchor_tolerance;
        let tc = self.policy.candidate_tolerance;
        let expand_a = move |a: &A| ta.expand_span(TimeSpan::new(a.start(), a.end()));
        let expand_c = move |c: &C| tc.expand_span(TimeSpan::new(c.start(), c.end()));

        // Acceptance is mask-only here: the disjoint relations are real
        // matches when the mask holds them, so a sorted scan cannot prune
        // and every candidate is considered.
        params.brute(anchors, candidates, expand_a, expand_c, emit)
    }

    fn params(&self, anchor_interval: bool, candidate_interval: bool) -> MatchParams {
        MatchParams {
            mask: self.policy.allowed_relations,
            contact_required: !(anchor_interval && candidate_interval),
            match_type: self.match_type(anchor_interval, candidate_interval),
        }
    }

    /// The effective kind of each side decides the match classification: a
    /// side is effectively an interval when it is one intrinsically or its
    /// tolerance widens it.
    fn match_type(&self, anchor_interval: bool, candidate_interval: bool) -> MatchType {
        let anchor_widened = anchor_interval || !self.policy.anchor_tolerance.is_exact();
        let candidate_widened = candidate_interval || !self.policy.candidate_tolerance.is_exact();
        match (anchor_widened, candidate_widened) {
            (true, true) => MatchType::Interval,
            (false, false) => MatchType::PointExact,
            _ => MatchType::PointInInterval,
        }
    }

    fn plan(&self, anchor_interval: bool, candidate_interval: bool) -> Plan {
        match self.policy.input_ordering {
            InputOrdering::None => Plan::Brute,
            InputOrdering::CandidatesSorted | InputOrdering::BothSorted => {
                if anchor_interval && candidate_interval {
                    Plan::Brute
                } else if !anchor_interval
                    && !candidate_interval
                    && self.policy.input_ordering == InputOrdering::BothSorted
                    && self.policy.candidate_tolerance.is_exact()
                {
                    Plan::Sweep
                } else {
                    Plan::Window
                }
            }
        }
    }
}

// ============================================================================
// Validation & scan bounds
// ============================================================================

fn validate_intervals<T: TemporalInterval>(entities: &[T], side: Side) -> Result<()> {
    for (index, entity) in entities.iter().enumerate() {
        if entity.start() > entity.end() {
            return Err(Error::InvalidInterval { side, index });
        }
    }
    Ok(())
}

fn validate_sorted<T>(
    entities: &[T],
    key: impl Fn(&T) -> Timestamp,
    side: Side,
) -> Result<()> {
    for index in 1..entities.len() {
        if key(&entities[index - 1]) > key(&entities[index]) {
            return Err(Error::UnsortedInput { side, index });
        }
    }
    Ok(())
}

/// Scan range for sorted point candidates: exactly those whose widened
/// extent can touch the anchor window.
fn point_bounds<C: TemporalPoint>(
    candidates: &[C],
    window: TimeSpan,
    tolerance: Tolerance,
) -> (usize, usize) {
    let lo = window.start - tolerance.after();
    let hi = window.end + tolerance.before();
    let first = candidates.partition_point(|c| c.at() < lo);
    let past = candidates.partition_point(|c| c.at() <= hi);
    (first, past)
}

/// Scan range for candidates sorted by interval start. Only an upper bound
/// is available: an interval starting arbitrarily early can still reach the
/// window, so the scan covers the whole prefix whose widened start has not
/// passed the window end.
fn interval_bounds<C: TemporalInterval>(
    candidates: &[C],
    window: TimeSpan,
    tolerance: Tolerance,
) -> (usize, usize) {
    let hi = window.end + tolerance.before();
    let past = candidates.partition_point(|c| c.start() <= hi);
    (0, past)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::{RelationSet, TemporalRelation};

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_secs(secs)
    }

    fn span(start: i64, end: i64) -> TimeSpan {
        TimeSpan::new(ts(start), ts(end))
    }

    #[test]
    fn test_rejects_malformed_anchor_interval() {
        let anchors = [(ts(5), ts(1))];
        let candidates = [ts(2)];
        let mut sink = PairCollector::new();
        let err = Matcher::default().intervals_to_points(&anchors, &candidates, &mut sink);
        assert_eq!(err, Err(Error::InvalidInterval { side: Side::Anchor, index: 0 }));
        assert!(sink.matches().is_empty() && sink.misses().is_empty());
    }

    #[test]
    fn test_rejects_malformed_candidate_interval() {
        let anchors = [ts(2)];
        let candidates = [(ts(0), ts(4)), (ts(9), ts(3))];
        let mut sink = PairCollector::new();
        let err = Matcher::default().points_to_intervals(&anchors, &candidates, &mut sink);
        assert_eq!(err, Err(Error::InvalidInterval { side: Side::Candidate, index: 1 }));
    }

    #[test]
    fn test_rejects_unsorted_candidates() {
        let policy = MatchPolicy::new().with_input_ordering(InputOrdering::CandidatesSorted);
        let anchors = [ts(1)];
        let candidates = [ts(3), ts(2)];
        let mut sink = PairCollector::new();
        let err = Matcher::new(policy).points_to_points(&anchors, &candidates, &mut sink);
        assert_eq!(err, Err(Error::UnsortedInput { side: Side::Candidate, index: 1 }));
    }

    #[test]
    fn test_rejects_unsorted_anchors_when_both_declared() {
        let policy = MatchPolicy::new().with_input_ordering(InputOrdering::BothSorted);
        let anchors = [ts(5), ts(1)];
        let candidates = [ts(2), ts(3)];
        let mut sink = PairCollector::new();
        let err = Matcher::new(policy).points_to_points(&anchors, &candidates, &mut sink);
        assert_eq!(err, Err(Error::UnsortedInput { side: Side::Anchor, index: 1 }));
    }

    #[test]
    fn test_point_match_requires_equality_by_default() {
        let anchors = [ts(10), ts(20)];
        let candidates = [ts(10), ts(15)];
        let mut sink = PairCollector::new();
        Matcher::default().points_to_points(&anchors, &candidates, &mut sink).unwrap();

        assert_eq!(sink.matches().len(), 1);
        assert_eq!(sink.matches()[0].match_type, MatchType::PointExact);
        assert_eq!(sink.matches()[0].relation, None);
        assert_eq!(sink.misses(), &[ts(20)]);
    }

    #[test]
    fn test_interval_family_respects_mask_for_disjoint() {
        // With the full mask, disjoint interval pairs are matches.
        let anchors = [span(0, 1)];
        let candidates = [span(5, 6)];
        let mut sink = PairCollector::new();
        Matcher::default().intervals_to_intervals(&anchors, &candidates, &mut sink).unwrap();
        assert_eq!(sink.matches().len(), 1);
        assert_eq!(sink.matches()[0].relation, Some(TemporalRelation::Before));

        // Masking the disjoint relations out turns the anchor into a miss.
        let policy = MatchPolicy::new().with_allowed_relations(
            RelationSet::ANY.without(TemporalRelation::Before).without(TemporalRelation::After),
        );
        let mut sink = PairCollector::new();
        Matcher::new(policy).intervals_to_intervals(&anchors, &candidates, &mut sink).unwrap();
        assert!(sink.matches().is_empty());
        assert_eq!(sink.misses().len(), 1);
    }

    #[test]
    fn test_empty_mask_reports_all_misses() {
        let policy = MatchPolicy::new().with_allowed_relations(RelationSet::NONE);
        let anchors = [ts(1), ts(2)];
        let candidates = [ts(1), ts(2)];
        let mut sink = PairCollector::new();
        Matcher::new(policy).points_to_points(&anchors, &candidates, &mut sink).unwrap();
        assert!(sink.matches().is_empty());
        assert_eq!(sink.misses(), &[ts(1), ts(2)]);
    }

    #[test]
    fn test_sorted_interval_candidates_fall_back_to_full_scan() {
        // Declared ordering on the interval-to-interval family is
        // validated but cannot prune; the result matches the unordered run.
        let anchors = [span(10, 20)];
        let candidates = [span(0, 40), span(12, 18), span(30, 50)];

        let mut unordered = PairCollector::new();
        Matcher::default().intervals_to_intervals(&anchors, &candidates, &mut unordered).unwrap();

        let policy = MatchPolicy::new().with_input_ordering(InputOrdering::CandidatesSorted);
        let mut ordered = PairCollector::new();
        Matcher::new(policy).intervals_to_intervals(&anchors, &candidates, &mut ordered).unwrap();

        assert_eq!(unordered.matches(), ordered.matches());
        assert_eq!(unordered.misses(), ordered.misses());
    }

    #[test]
    fn test_group_mode_aggregates_in_emission_order() {
        let anchors = [span(0, 10), span(100, 110)];
        let candidates = [ts(2), ts(8), ts(50)];
        let policy = MatchPolicy::new().with_allowed_relations(
            RelationSet::ANY.without(TemporalRelation::Before).without(TemporalRelation::After),
        );

        let mut sink = GroupCollector::new();
        Matcher::new(policy).intervals_to_points_grouped(&anchors, &candidates, &mut sink).unwrap();

        assert_eq!(sink.groups().len(), 1);
        let (anchor, members) = &sink.groups()[0];
        assert_eq!(*anchor, span(0, 10));
        assert_eq!(members.as_slice(), &[ts(2), ts(8)]);
        assert_eq!(sink.misses(), &[span(100, 110)]);
    }

    #[test]
    fn test_buffered_mode_counts_and_overflows() {
        let anchors = [ts(1), ts(2)];
        let candidates = [ts(1), ts(2)];

        let mut out = Vec::with_capacity(4);
        let written =
            Matcher::default().points_to_points_buffered(&anchors, &candidates, &mut out).unwrap();
        assert_eq!(written, 2);
        assert_eq!(out.len(), 2);

        let mut tight = Vec::with_capacity(1);
        let err = Matcher::default()
            .points_to_points_buffered(&anchors, &candidates, &mut tight)
            .unwrap_err();
        assert_eq!(err, Error::BufferExhausted { capacity: 1 });
        assert_eq!(tight.len(), 1);
        assert_eq!(*tight[0].candidate(), ts(1));
    }

    #[test]
    fn test_sink_error_stops_emission() {
        struct FailingSink {
            seen: usize,
        }

        impl PairSink<Timestamp, Timestamp> for FailingSink {
            fn on_match(&mut self, _pair: &MatchPair<'_, Timestamp, Timestamp>) -> Result<()> {
                self.seen += 1;
                if self.seen == 2 {
                    return Err(Error::SinkFault("downstream full".into()));
                }
                Ok(())
            }

            fn on_miss(&mut self, _anchor: &Timestamp) -> Result<()> {
                Ok(())
            }
        }

        let anchors = [ts(1), ts(2), ts(3)];
        let candidates = [ts(1), ts(2), ts(3)];
        let mut sink = FailingSink { seen: 0 };
        let err =
            Matcher::default().points_to_points(&anchors, &candidates, &mut sink).unwrap_err();
        assert_eq!(err, Error::SinkFault("downstream full".into()));
        assert_eq!(sink.seen, 2);
    }

    #[test]
    fn test_empty_inputs() {
        let mut sink = PairCollector::<Timestamp, Timestamp>::new();
        Matcher::default().points_to_points(&[], &[], &mut sink).unwrap();
        assert!(sink.matches().is_empty() && sink.misses().is_empty());

        let anchors = [ts(1)];
        let mut sink = PairCollector::<Timestamp, Timestamp>::new();
        Matcher::default().points_to_points(&anchors, &[], &mut sink).unwrap();
        assert_eq!(sink.misses(), &[ts(1)]);
    }
}
