//! Match policy configuration.

use crate::relation::RelationSet;
use crate::tolerance::Tolerance;

/// Ordering guarantees declared for the input sequences.
///
/// Declaring an ordering lets the matcher pick a sub-linear scan strategy;
/// the declaration is verified up front and a violation fails the call
/// before anything is emitted. The chosen strategy never changes the
/// result, only the work done to produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputOrdering {
    /// No ordering guarantee; every candidate is scanned per anchor.
    #[default]
    None,
    /// Candidates are non-decreasing by their sort key (instant for point
    /// entities, start for interval entities).
    CandidatesSorted,
    /// Both sequences are non-decreasing by their sort keys.
    BothSorted,
}

/// The immutable configuration of a matcher call.
///
/// # Example
///
/// ```rust
/// use syzygy::policy::{InputOrdering, MatchPolicy};
/// use syzygy::relation::{RelationSet, TemporalRelation};
/// use syzygy::time::TimeDelta;
/// use syzygy::tolerance::Tolerance;
///
/// let policy = MatchPolicy::new()
///     .with_anchor_tolerance(Tolerance::symmetric(TimeDelta::from_millis(10))?)
///     .with_allowed_relations(RelationSet::of(&[TemporalRelation::Equal]))
///     .with_input_ordering(InputOrdering::CandidatesSorted);
/// # Ok::<(), syzygy::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Tolerance applied to every anchor before classification.
    pub anchor_tolerance: Tolerance,
    /// Tolerance applied to every candidate before classification.
    pub candidate_tolerance: Tolerance,
    /// The set of relations accepted as matches.
    pub allowed_relations: RelationSet,
    /// Ordering guarantees on the input sequences.
    pub input_ordering: InputOrdering,
}

impl MatchPolicy {
    /// The default policy: exact tolerances, every relation accepted, no
    /// ordering guarantee.
    pub fn new() -> Self {
        Self {
            anchor_tolerance: Tolerance::NONE,
            candidate_tolerance: Tolerance::NONE,
            allowed_relations: RelationSet::ANY,
            input_ordering: InputOrdering::None,
        }
    }

    /// Set the anchor-side tolerance.
    pub fn with_anchor_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.anchor_tolerance = tolerance;
        self
    }

    /// Set the candidate-side tolerance.
    pub fn with_candidate_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.candidate_tolerance = tolerance;
        self
    }

    /// Set the accepted relation set.
    pub fn with_allowed_relations(mut self, relations: RelationSet) -> Self {
        self.allowed_relations = relations;
        self
    }

    /// Declare input ordering guarantees.
    pub fn with_input_ordering(mut self, ordering: InputOrdering) -> Self {
        self.input_ordering = ordering;
        self
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::new()
    }
}
