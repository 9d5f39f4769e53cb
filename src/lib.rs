//! Randomized construction of constrained derangements.
//!
//! Given a participant set, pairs that must not be matched with each other,
//! and arbitrary extra rules, produces a mapping in which every participant
//! gives to exactly one other participant (the classic gift-exchange
//! draw).
//!
//! - [`assign`]: rule composition and the assignment engine
//! - [`random`]: uniform index sources, seeded or scripted
//! - [`error`]: the terminal failure type
//!
//! # Examples
//!
//! ```
//! use u_derange::assign::{AllowedReceivers, AssignConfig, AssignRunner, RuleSet};
//!
//! let participants = ["kayla", "mitch", "tyler", "zach", "alyssum", "emma", "sophie"];
//! let rules = RuleSet::builder()
//!     .with_exclusive_pair("zach", "alyssum")
//!     .with_exclusive_pair("kayla", "mitch")
//!     .with_rule(AllowedReceivers::new("tyler", ["sophie", "emma"]))
//!     .build();
//!
//! let config = AssignConfig::default().with_seed(7);
//! let result = AssignRunner::run(&participants, &rules, &config).unwrap();
//! assert_eq!(result.assignment.len(), participants.len());
//! ```

pub mod assign;
pub mod error;
pub mod random;

pub use error::AssignError;
