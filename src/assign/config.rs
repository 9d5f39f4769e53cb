//! Assignment engine configuration.

/// Configuration for [`AssignRunner`](super::AssignRunner).
///
/// # Examples
///
/// ```
/// use u_derange::assign::AssignConfig;
///
/// let config = AssignConfig::default()
///     .with_max_local_attempts(20)
///     .with_max_restarts(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignConfig {
    /// Rejections tolerated within one building episode. Exceeding this
    /// count triggers a global restart.
    ///
    /// The counter is shared by all candidate pairs and is not reset by a
    /// successful commit.
    pub max_local_attempts: usize,

    /// Global restarts after which the run aborts.
    pub max_restarts: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            max_local_attempts: 10,
            max_restarts: 10_000,
            seed: None,
        }
    }
}

impl AssignConfig {
    pub fn with_max_local_attempts(mut self, n: usize) -> Self {
        self.max_local_attempts = n;
        self
    }

    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_restarts == 0 {
            return Err("max_restarts must be at least 1".into());
        }
        Ok(())
    }
}
