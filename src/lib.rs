//! # Syzygy
//!
//! A temporal correlation engine for event-driven and telemetry pipelines.
//!
//! Syzygy takes two finite sequences of temporal entities — an **anchor**
//! sequence and a **candidate** sequence — and for each anchor reports the
//! candidates standing in a configured temporal relationship to it.
//! Entities are points (a single instant) or intervals (a span), and
//! matching is parameterized by a [`MatchPolicy`](policy::MatchPolicy):
//! tolerance windows on either side, the subset of Allen's thirteen
//! interval relations accepted as matches, and ordering guarantees that
//! unlock sub-linear scan strategies.
//!
//! ## Features
//!
//! - **Allocation-free hot path**: pair and buffered output write only to
//!   caller-owned storage
//! - **Strategy equivalence**: brute-force, binary-search, and dual-cursor
//!   scans emit bit-identical results; the policy only changes the work
//! - **Total Allen classifier**: every pair of well-formed spans maps to
//!   exactly one of the thirteen relations
//! - **Entity polymorphism**: any type exposing an instant or a span
//!   participates, monomorphized with no dispatch in inner loops
//!
//! ## Quick Start
//!
//! ```rust
//! use syzygy::prelude::*;
//!
//! # fn main() -> syzygy::Result<()> {
//! // Match sensor readings to command timestamps within ±10ms.
//! let policy = MatchPolicy::new()
//!     .with_anchor_tolerance(Tolerance::symmetric(TimeDelta::from_millis(10))?);
//! let matcher = Matcher::new(policy);
//!
//! let commands = [Timestamp::from_millis(1_000), Timestamp::from_millis(2_000)];
//! let readings = [Timestamp::from_millis(995), Timestamp::from_millis(3_000)];
//!
//! let mut sink = PairCollector::new();
//! matcher.points_to_points(&commands, &readings, &mut sink)?;
//!
//! assert_eq!(sink.matches().len(), 1);
//! assert_eq!(sink.misses().len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod error;
pub mod matcher;
pub mod policy;
pub mod relation;
pub mod time;
pub mod tolerance;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::entity::{TemporalInterval, TemporalPoint};
    pub use crate::error::{Error, Result};
    pub use crate::matcher::{
        GroupCollector, GroupSink, MatchGroup, MatchPair, MatchType, Matcher, NullSink,
        PairCollector, PairSink,
    };
    pub use crate::policy::{InputOrdering, MatchPolicy};
    pub use crate::relation::{classify, RelationSet, TemporalRelation};
    pub use crate::time::{TimeDelta, TimeSpan, Timestamp};
    pub use crate::tolerance::Tolerance;
}

pub use error::{Error, Result};
