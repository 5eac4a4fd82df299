//! Matching kernels.
//!
//! Three scan shapes over the candidate sequence, all emitting the exact
//! same sequence of results for the same inputs and policy:
//!
//! - [`MatchParams::brute`]: every candidate per anchor, O(n·m)
//! - [`MatchParams::window`]: a binary-searched slice per anchor,
//!   O(n·(log m + k)), for sorted candidates
//! - [`MatchParams::sweep`]: a non-retreating dual cursor, O(n + m + k),
//!   for sorted point candidates against sorted anchors
//!
//! Every kernel classifies each considered candidate and applies the same
//! acceptance predicate; the scan shape only prunes candidates that could
//! never pass it. Results flow through an [`Emitter`], which adapts the
//! kernels to pair sinks, group sinks, and caller-supplied buffers.

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::matcher::pair::{MatchGroup, MatchPair, MatchType};
use crate::matcher::sink::{GroupSink, PairSink};
use crate::relation::{classify, RelationSet, TemporalRelation};
use crate::time::{TimeSpan, Timestamp};

/// Inline capacity of the group scratch buffer; groups larger than this
/// spill to the heap once per call and the storage is reused across
/// anchors.
const GROUP_SCRATCH_INLINE: usize = 8;

// ============================================================================
// Emitter
// ============================================================================

/// Internal receiver of kernel output.
///
/// `'d` is the lifetime of the borrowed input slices.
pub(crate) trait Emitter<'d, A, C> {
    /// One accepted (anchor, candidate) pair.
    fn on_pair(
        &mut self,
        anchor: &'d A,
        candidate: &'d C,
        match_type: MatchType,
        relation: Option<TemporalRelation>,
    ) -> Result<()>;

    /// The anchor's candidate scan is complete.
    fn end_anchor(&mut self, anchor: &'d A, matched: bool) -> Result<()>;
}

/// Adapts a [`PairSink`]: forwards pairs as they are found.
pub(crate) struct PairEmitter<'s, S> {
    sink: &'s mut S,
}

impl<'s, S> PairEmitter<'s, S> {
    pub(crate) fn new(sink: &'s mut S) -> Self {
        Self { sink }
    }
}

impl<'d, A, C, S: PairSink<A, C>> Emitter<'d, A, C> for PairEmitter<'_, S> {
    fn on_pair(
        &mut self,
        anchor: &'d A,
        candidate: &'d C,
        match_type: MatchType,
        relation: Option<TemporalRelation>,
    ) -> Result<()> {
        let pair = MatchPair::new(anchor, candidate, match_type, relation)?;
        self.sink.on_match(&pair)
    }

    fn end_anchor(&mut self, anchor: &'d A, matched: bool) -> Result<()> {
        if matched { Ok(()) } else { self.sink.on_miss(anchor) }
    }
}

/// Adapts a [`GroupSink`]: accumulates an anchor's candidates in a scratch
/// buffer reused across anchors, then hands the sink a borrowed view.
pub(crate) struct GroupEmitter<'s, 'd, C, S> {
    sink: &'s mut S,
    scratch: SmallVec<[&'d C; GROUP_SCRATCH_INLINE]>,
}

impl<'s, 'd, C, S> GroupEmitter<'s, 'd, C, S> {
    pub(crate) fn new(sink: &'s mut S) -> Self {
        Self { sink, scratch: SmallVec::new() }
    }
}

impl<'d, A, C, S: GroupSink<A, C>> Emitter<'d, A, C> for GroupEmitter<'_, 'd, C, S> {
    fn on_pair(
        &mut self,
        _anchor: &'d A,
        candidate: &'d C,
        _match_type: MatchType,
        _relation: Option<TemporalRelation>,
    ) -> Result<()> {
        self.scratch.push(candidate);
        Ok(())
    }

    fn end_anchor(&mut self, anchor: &'d A, matched: bool) -> Result<()> {
        if !matched {
            return self.sink.on_miss(anchor);
        }
        let group = MatchGroup::new(anchor, &self.scratch);
        let result = self.sink.on_match(&group);
        self.scratch.clear();
        result
    }
}

/// Fills a caller-supplied buffer up to its capacity, never reallocating.
pub(crate) struct BufferEmitter<'b, 'd, A, C> {
    out: &'b mut Vec<MatchPair<'d, A, C>>,
}

impl<'b, 'd, A, C> BufferEmitter<'b, 'd, A, C> {
    pub(crate) fn new(out: &'b mut Vec<MatchPair<'d, A, C>>) -> Self {
        Self { out }
    }
}

impl<'d, A, C> Emitter<'d, A, C> for BufferEmitter<'_, 'd, A, C> {
    fn on_pair(
        &mut self,
        anchor: &'d A,
        candidate: &'d C,
        match_type: MatchType,
        relation: Option<TemporalRelation>,
    ) -> Result<()> {
        if self.out.len() == self.out.capacity() {
            return Err(Error::BufferExhausted { capacity: self.out.capacity() });
        }
        self.out.push(MatchPair::new(anchor, candidate, match_type, relation)?);
        Ok(())
    }

    fn end_anchor(&mut self, _anchor: &'d A, _matched: bool) -> Result<()> {
        // Misses are not representable in buffered output.
        Ok(())
    }
}

// ============================================================================
// Kernels
// ============================================================================

/// The per-call acceptance parameters shared by every kernel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MatchParams {
    /// Relations accepted as matches.
    pub mask: RelationSet,
    /// When set, the disjoint relations never match even if the mask holds
    /// them. This is the point-containment semantics of the families with
    /// an intrinsic point side.
    pub contact_required: bool,
    /// Classification of every match this call produces.
    pub match_type: MatchType,
}

impl MatchParams {
    /// Classify one candidate against an anchor window and emit on
    /// acceptance.
    #[inline]
    fn consider<'d, A, C, E>(
        &self,
        window: TimeSpan,
        anchor: &'d A,
        candidate: &'d C,
        extent: TimeSpan,
        emit: &mut E,
        matched: &mut bool,
    ) -> Result<()>
    where
        E: Emitter<'d, A, C>,
    {
        let relation = classify(window, extent);
        if self.contact_required && relation.is_disjoint() {
            return Ok(());
        }
        if !self.mask.contains(relation) {
            return Ok(());
        }
        *matched = true;
        let carried = (self.match_type == MatchType::Interval).then_some(relation);
        emit.on_pair(anchor, candidate, self.match_type, carried)
    }

    /// Reference kernel: scan every candidate for every anchor.
    pub(crate) fn brute<'d, A, C, EA, EC, E>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        expand_anchor: EA,
        expand_candidate: EC,
        emit: &mut E,
    ) -> Result<()>
    where
        EA: Fn(&A) -> TimeSpan,
        EC: Fn(&C) -> TimeSpan,
        E: Emitter<'d, A, C>,
    {
        for anchor in anchors {
            let window = expand_anchor(anchor);
            let mut matched = false;
            for candidate in candidates {
                let extent = expand_candidate(candidate);
                self.consider(window, anchor, candidate, extent, emit, &mut matched)?;
            }
            emit.end_anchor(anchor, matched)?;
        }
        Ok(())
    }

    /// Sorted-candidate kernel: per anchor, scan only the index range that
    /// can still reach the anchor window. `bounds` maps an anchor window to
    /// that range; everything outside it must be incapable of passing the
    /// acceptance predicate.
    pub(crate) fn window<'d, A, C, EA, EC, B, E>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        expand_anchor: EA,
        expand_candidate: EC,
        bounds: B,
        emit: &mut E,
    ) -> Result<()>
    where
        EA: Fn(&A) -> TimeSpan,
        EC: Fn(&C) -> TimeSpan,
        B: Fn(TimeSpan) -> (usize, usize),
        E: Emitter<'d, A, C>,
    {
        for anchor in anchors {
            let window = expand_anchor(anchor);
            let (first, past) = bounds(window);
            let mut matched = false;
            for candidate in &candidates[first..past] {
                let extent = expand_candidate(candidate);
                self.consider(window, anchor, candidate, extent, emit, &mut matched)?;
            }
            emit.end_anchor(anchor, matched)?;
        }
        Ok(())
    }

    /// Dual-cursor kernel for sorted anchors against sorted exact point
    /// candidates. The cursor marks the first candidate that can still
    /// match the current or any future anchor; it advances only past
    /// candidates strictly before the window start and never past the
    /// window end, because the next anchor's window may revisit them.
    pub(crate) fn sweep<'d, A, C, EA, EC, K, E>(
        &self,
        anchors: &'d [A],
        candidates: &'d [C],
        expand_anchor: EA,
        expand_candidate: EC,
        key: K,
        emit: &mut E,
    ) -> Result<()>
    where
        EA: Fn(&A) -> TimeSpan,
        EC: Fn(&C) -> TimeSpan,
        K: Fn(&C) -> Timestamp,
        E: Emitter<'d, A, C>,
    {
        let mut cursor = 0usize;
        for anchor in anchors {
            let window = expand_anchor(anchor);
            while cursor < candidates.len() && key(&candidates[cursor]) < window.start {
                cursor += 1;
            }
            let mut matched = false;
            for candidate in &candidates[cursor..] {
                if key(candidate) > window.end {
                    break;
                }
                let extent = expand_candidate(candidate);
                self.consider(window, anchor, candidate, extent, emit, &mut matched)?;
            }
            emit.end_anchor(anchor, matched)?;
        }
        Ok(())
    }
}
