//! Uniform index sources.
//!
//! The engine only ever needs one thing from randomness: a uniform index
//! into the current candidate list. [`IndexSource`] captures exactly that,
//! so runs can be driven either by a real generator or by a recorded
//! sequence of choices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform indices in `[0, bound)`.
pub trait IndexSource {
    /// Returns an index in `[0, bound)`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Creates the generator used by [`AssignRunner::run`](crate::assign::AssignRunner::run).
///
/// Seeded runs are reproducible. Unseeded runs draw their seed from the
/// operating system. Both use `StdRng`, a cryptographically strong
/// generator.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Replays a recorded sequence of choices.
///
/// Each recorded value is reduced modulo the requested bound, and the
/// sequence wraps around when exhausted. An empty recording always
/// yields 0.
///
/// # Examples
///
/// ```
/// use u_derange::random::{IndexSource, ScriptedIndices};
///
/// let mut source = ScriptedIndices::new(vec![1, 4]);
/// assert_eq!(source.next_index(3), 1);
/// assert_eq!(source.next_index(3), 1); // 4 % 3
/// assert_eq!(source.next_index(2), 1); // wrapped: 1 % 2
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedIndices {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndices {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of indices handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
