//! Assignment engine.
//!
//! # Algorithm
//!
//! While some participant has no receiver:
//!
//! 1. Pick a giver uniformly among participants without a receiver.
//! 2. Pick a receiver uniformly among participants nobody gives to yet.
//! 3. Commit the pair tentatively and evaluate every rule against it.
//! 4. On rejection, revert the pair and count one local attempt. Once the
//!    count exceeds `max_local_attempts`, discard the whole assignment and
//!    count one global restart. Reaching `max_restarts` aborts the run.
//!
//! The local counter spans the whole building episode. Successful commits
//! do not reset it; only a global restart does.

use std::collections::HashSet;

use tracing::{debug, error, info};

use super::config::AssignConfig;
use super::rules::RuleSet;
use super::types::{Assignment, Participant};
use crate::error::AssignError;
use crate::random::{create_rng, IndexSource};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct AssignResult {
    /// The complete assignment: every participant gives to exactly one
    /// other participant.
    pub assignment: Assignment,

    /// Number of global restarts performed before success.
    pub restarts: usize,

    /// Total rule rejections across all episodes.
    pub rejections: usize,

    /// Total candidate pairs evaluated.
    pub steps: usize,
}

/// Runs the randomized incremental construction.
pub struct AssignRunner;

impl AssignRunner {
    /// Builds an assignment using a generator created from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_derange::assign::{AssignConfig, AssignRunner, RuleSet};
    ///
    /// let participants = ["ann", "bob", "cat", "dan"];
    /// let rules = RuleSet::builder().with_exclusive_pair("ann", "bob").build();
    /// let config = AssignConfig::default().with_seed(42);
    ///
    /// let result = AssignRunner::run(&participants, &rules, &config).unwrap();
    /// assert_eq!(result.assignment.len(), 4);
    /// assert_ne!(result.assignment.receiver_of("ann"), Some("bob"));
    /// ```
    pub fn run<S: AsRef<str>>(
        participants: &[S],
        rules: &RuleSet,
        config: &AssignConfig,
    ) -> Result<AssignResult, AssignError> {
        let mut rng = create_rng(config.seed);
        Self::run_with_source(participants, rules, config, &mut rng)
    }

    /// Builds an assignment drawing choices from `source`.
    ///
    /// `config.seed` is ignored. The source is only read from; two runs with
    /// identical inputs and identically primed sources produce identical
    /// results.
    pub fn run_with_source<S, I>(
        participants: &[S],
        rules: &RuleSet,
        config: &AssignConfig,
        source: &mut I,
    ) -> Result<AssignResult, AssignError>
    where
        S: AsRef<str>,
        I: IndexSource + ?Sized,
    {
        config.validate().map_err(AssignError::InvalidConfig)?;
        let participants = unique_participants(participants)?;

        let mut assignment = Assignment::new();
        let mut local_attempts = 0usize;
        let mut restarts = 0usize;
        let mut rejections = 0usize;
        let mut steps = 0usize;

        let mut givers: Vec<&str> = Vec::with_capacity(participants.len());
        let mut receivers: Vec<&str> = Vec::with_capacity(participants.len());

        while assignment.len() < participants.len() {
            givers.clear();
            givers.extend(participants.iter().copied().filter(|p| !assignment.has_giver(p)));
            let giver = givers[source.next_index(givers.len())];

            receivers.clear();
            receivers.extend(
                participants
                    .iter()
                    .copied()
                    .filter(|p| !assignment.has_receiver(p)),
            );
            let receiver = receivers[source.next_index(receivers.len())];

            steps += 1;
            assignment.insert(giver, receiver);
            if rules.accepts_all(giver, receiver, &assignment) {
                continue;
            }

            assignment.remove(giver);
            rejections += 1;
            local_attempts += 1;

            if local_attempts > config.max_local_attempts {
                assignment.clear();
                restarts += 1;
                local_attempts = 0;
                info!(restart = restarts, "Attempt {restarts} failed");
            }

            if restarts >= config.max_restarts {
                error!(restarts, rejections, steps, "restart limit reached");
                return Err(AssignError::RestartLimitReached { restarts });
            }
        }

        debug!(
            participants = participants.len(),
            restarts, rejections, steps, "assignment complete"
        );

        Ok(AssignResult {
            assignment,
            restarts,
            rejections,
            steps,
        })
    }
}

/// Borrows the identifiers, rejecting duplicates.
fn unique_participants<S: AsRef<str>>(participants: &[S]) -> Result<Vec<&str>, AssignError> {
    let mut seen = HashSet::with_capacity(participants.len());
    participants
        .iter()
        .map(|p| {
            let p = p.as_ref();
            if seen.insert(p) {
                Ok(p)
            } else {
                Err(AssignError::DuplicateParticipant(Participant::from(p)))
            }
        })
        .collect()
}
