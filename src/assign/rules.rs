//! Rule set composition.
//!
//! A [`RuleSet`] is always laid out as: the built-in
//! [`NoSelfAssignment`] rule, then caller rules in the order given, then one
//! [`MutualExclusion`] per exclusive pair. All rules are evaluated
//! conjunctively, so the order only matters for [`RuleSet::names`].

use super::types::{Assignment, AssignmentRule, ExclusivePair, Participant};

/// Forbids a giver from receiving their own assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelfAssignment;

impl AssignmentRule for NoSelfAssignment {
    fn name(&self) -> &str {
        "NoSelfAssignment"
    }

    fn accepts(&self, giver: &str, receiver: &str, _assignment: &Assignment) -> bool {
        giver != receiver
    }
}

/// Forbids the two members of an [`ExclusivePair`] from being assigned to
/// each other.
///
/// A pair naming identifiers outside the participant set never fires.
#[derive(Debug, Clone)]
pub struct MutualExclusion {
    pair: ExclusivePair,
}

impl MutualExclusion {
    pub fn new(pair: ExclusivePair) -> Self {
        Self { pair }
    }

    pub fn pair(&self) -> &ExclusivePair {
        &self.pair
    }
}

impl AssignmentRule for MutualExclusion {
    fn name(&self) -> &str {
        "MutualExclusion"
    }

    fn accepts(&self, giver: &str, receiver: &str, _assignment: &Assignment) -> bool {
        !self.pair.forbids(giver, receiver)
    }
}

/// Restricts one giver to a fixed set of receivers. Other givers are
/// unaffected.
#[derive(Debug, Clone)]
pub struct AllowedReceivers {
    giver: Participant,
    allowed: Vec<Participant>,
}

impl AllowedReceivers {
    pub fn new<I, S>(giver: impl Into<Participant>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Participant>,
    {
        Self {
            giver: giver.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssignmentRule for AllowedReceivers {
    fn name(&self) -> &str {
        "AllowedReceivers"
    }

    fn accepts(&self, giver: &str, receiver: &str, _assignment: &Assignment) -> bool {
        giver != self.giver || self.allowed.iter().any(|a| a == receiver)
    }
}

/// Requires that at least one member of `group` gives to `target`.
///
/// Checked only when the candidate giver belongs to `group` and every
/// member already has a receiver (the tentative entry included). Until
/// then the rule accepts.
#[derive(Debug, Clone)]
pub struct GroupCoversReceiver {
    group: Vec<Participant>,
    target: Participant,
}

impl GroupCoversReceiver {
    pub fn new<I, S>(group: I, target: impl Into<Participant>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Participant>,
    {
        Self {
            group: group.into_iter().map(Into::into).collect(),
            target: target.into(),
        }
    }
}

impl AssignmentRule for GroupCoversReceiver {
    fn name(&self) -> &str {
        "GroupCoversReceiver"
    }

    fn accepts(&self, giver: &str, _receiver: &str, assignment: &Assignment) -> bool {
        if !self.group.iter().any(|m| m == giver) {
            return true;
        }
        let receivers: Option<Vec<&str>> = self
            .group
            .iter()
            .map(|m| assignment.receiver_of(m))
            .collect();
        match receivers {
            Some(receivers) => receivers.contains(&self.target.as_str()),
            None => true,
        }
    }
}

/// An immutable, ordered list of rules evaluated conjunctively.
pub struct RuleSet {
    rules: Vec<Box<dyn AssignmentRule>>,
}

impl RuleSet {
    /// Builds the rule set from exclusive pairs and additional rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_derange::assign::{Assignment, AssignmentRule, ExclusivePair, RuleSet};
    ///
    /// let rules = RuleSet::build(
    ///     vec![ExclusivePair::new("zach", "alyssum")],
    ///     Vec::<Box<dyn AssignmentRule>>::new(),
    /// );
    /// assert_eq!(rules.names(), vec!["NoSelfAssignment", "MutualExclusion"]);
    /// assert!(!rules.accepts_all("zach", "alyssum", &Assignment::new()));
    /// ```
    pub fn build<P>(pairs: P, additional: Vec<Box<dyn AssignmentRule>>) -> Self
    where
        P: IntoIterator,
        P::Item: Into<ExclusivePair>,
    {
        let mut rules: Vec<Box<dyn AssignmentRule>> = Vec::with_capacity(additional.len() + 1);
        rules.push(Box::new(NoSelfAssignment));
        rules.extend(additional);
        rules.extend(
            pairs
                .into_iter()
                .map(|p| Box::new(MutualExclusion::new(p.into())) as Box<dyn AssignmentRule>),
        );
        Self { rules }
    }

    /// Starts a fluent builder.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Returns `true` if every rule accepts the tentative entry.
    pub fn accepts_all(&self, giver: &str, receiver: &str, assignment: &Assignment) -> bool {
        self.rules
            .iter()
            .all(|rule| rule.accepts(giver, receiver, assignment))
    }

    /// Returns the number of rules, the built-in one included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false`: the built-in rule is always present.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the names of all rules in order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::build(Vec::<ExclusivePair>::new(), Vec::new())
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.names())
            .finish()
    }
}

/// Fluent construction of a [`RuleSet`].
///
/// Calls may be interleaved freely; [`build`](Self::build) still places
/// additional rules before the pair rules.
///
/// ```
/// use u_derange::assign::{AllowedReceivers, RuleSet};
///
/// let rules = RuleSet::builder()
///     .with_exclusive_pair("kayla", "mitch")
///     .with_rule(AllowedReceivers::new("tyler", ["sophie", "emma"]))
///     .build();
/// assert_eq!(
///     rules.names(),
///     vec!["NoSelfAssignment", "AllowedReceivers", "MutualExclusion"]
/// );
/// ```
#[derive(Default)]
pub struct RuleSetBuilder {
    pairs: Vec<ExclusivePair>,
    additional: Vec<Box<dyn AssignmentRule>>,
}

impl RuleSetBuilder {
    /// Appends an additional rule.
    pub fn with_rule<R: AssignmentRule + 'static>(mut self, rule: R) -> Self {
        self.additional.push(Box::new(rule));
        self
    }

    /// Appends an exclusive pair.
    pub fn with_exclusive_pair(
        mut self,
        first: impl Into<Participant>,
        second: impl Into<Participant>,
    ) -> Self {
        self.pairs.push(ExclusivePair::new(first, second));
        self
    }

    pub fn build(self) -> RuleSet {
        RuleSet::build(self.pairs, self.additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(entries: &[(&str, &str)]) -> Assignment {
        let mut a = Assignment::new();
        for (g, r) in entries {
            a.insert(g, r);
        }
        a
    }

    #[test]
    fn test_default_rule_only() {
        let rules = RuleSet::default();
        assert_eq!(rules.len(), 1);
        assert!(!rules.is_empty());
        let a = assignment(&[("ann", "ann")]);
        assert!(!rules.accepts_all("ann", "ann", &a));
        let a = assignment(&[("ann", "bob")]);
        assert!(rules.accepts_all("ann", "bob", &a));
    }

    #[test]
    fn test_build_order() {
        let never = |_: &str, _: &str, _: &Assignment| false;
        let rules = RuleSet::build(
            [("a", "b"), ("c", "d")],
            vec![
                Box::new(AllowedReceivers::new("x", ["y"])) as Box<dyn AssignmentRule>,
                Box::new(never),
            ],
        );
        let names = rules.names();
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "NoSelfAssignment");
        assert_eq!(names[1], "AllowedReceivers");
        assert_eq!(names[3], "MutualExclusion");
        assert_eq!(names[4], "MutualExclusion");
    }

    #[test]
    fn test_builder_interleaved_matches_build() {
        let rules = RuleSet::builder()
            .with_exclusive_pair("a", "b")
            .with_rule(NoSelfAssignment)
            .with_exclusive_pair("c", "d")
            .build();
        assert_eq!(
            rules.names(),
            vec![
                "NoSelfAssignment",
                "NoSelfAssignment",
                "MutualExclusion",
                "MutualExclusion"
            ]
        );
    }

    #[test]
    fn test_mutual_exclusion_both_directions() {
        let rules = RuleSet::builder().with_exclusive_pair("kayla", "mitch").build();
        let empty = Assignment::new();
        assert!(!rules.accepts_all("kayla", "mitch", &empty));
        assert!(!rules.accepts_all("mitch", "kayla", &empty));
        assert!(rules.accepts_all("kayla", "tyler", &empty));
        assert!(rules.accepts_all("tyler", "mitch", &empty));
    }

    #[test]
    fn test_unknown_pair_never_fires() {
        let rules = RuleSet::builder().with_exclusive_pair("ghost", "phantom").build();
        assert!(rules.accepts_all("ann", "bob", &Assignment::new()));
    }

    #[test]
    fn test_degenerate_pair_only_blocks_self() {
        let rule = MutualExclusion::new(ExclusivePair::new("ann", "ann"));
        assert!(!rule.accepts("ann", "ann", &Assignment::new()));
        assert!(rule.accepts("ann", "bob", &Assignment::new()));
    }

    #[test]
    fn test_allowed_receivers() {
        let rule = AllowedReceivers::new("tyler", ["sophie", "emma"]);
        let empty = Assignment::new();
        assert!(rule.accepts("tyler", "emma", &empty));
        assert!(!rule.accepts("tyler", "zach", &empty));
        assert!(rule.accepts("zach", "tyler", &empty));
    }

    #[test]
    fn test_group_covers_receiver_waits_for_full_group() {
        let rule = GroupCoversReceiver::new(["kayla", "mitch"], "tyler");

        let partial = assignment(&[("kayla", "zach")]);
        assert!(rule.accepts("kayla", "zach", &partial));

        let uncovered = assignment(&[("kayla", "zach"), ("mitch", "emma")]);
        assert!(!rule.accepts("mitch", "emma", &uncovered));

        let covered = assignment(&[("kayla", "zach"), ("mitch", "tyler")]);
        assert!(rule.accepts("mitch", "tyler", &covered));
    }

    #[test]
    fn test_group_covers_receiver_ignores_outsiders() {
        let rule = GroupCoversReceiver::new(["kayla", "mitch"], "tyler");
        let uncovered = assignment(&[("kayla", "zach"), ("mitch", "emma"), ("emma", "sophie")]);
        assert!(rule.accepts("emma", "sophie", &uncovered));
    }

    #[test]
    fn test_builds_are_equivalent() {
        let make = || {
            RuleSet::builder()
                .with_exclusive_pair("a", "b")
                .with_rule(AllowedReceivers::new("c", ["a"]))
                .build()
        };
        let (r1, r2) = (make(), make());
        let names = ["a", "b", "c"];
        let empty = Assignment::new();
        for g in names {
            for r in names {
                assert_eq!(r1.accepts_all(g, r, &empty), r2.accepts_all(g, r, &empty));
            }
        }
    }
}
