//! Constrained random derangements.
//!
//! Builds a giver → receiver mapping over a fixed participant set in which
//! nobody is assigned to themselves and every caller-supplied rule holds.
//! Construction is randomized and incremental: one random pair at a time,
//! with a coarse two-tier restart policy when rules keep rejecting.
//!
//! This is a heuristic, not a constraint solver. It may fail on a
//! satisfiable instance once the restart budget runs out, and it does not
//! sample valid derangements uniformly.
//!
//! # Key Components
//!
//! - [`AssignmentRule`]: predicate over `(giver, receiver, &Assignment)`
//! - [`RuleSet`]: built-in no-self rule + caller rules + pair exclusions
//! - [`AssignConfig`]: local-attempt and restart budgets, seed
//! - [`AssignRunner`]: the construction loop

mod config;
mod rules;
mod runner;
mod types;

pub use config::AssignConfig;
pub use rules::{
    AllowedReceivers, GroupCoversReceiver, MutualExclusion, NoSelfAssignment, RuleSet,
    RuleSetBuilder,
};
pub use runner::{AssignResult, AssignRunner};
pub use types::{Assignment, AssignmentRule, ExclusivePair, Participant};
