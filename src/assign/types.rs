//! Core types: the in-progress assignment and the rule trait.

use std::collections::{BTreeMap, BTreeSet};

/// A participant identifier.
pub type Participant = String;

/// A partial giver → receiver mapping.
///
/// At most one receiver per giver, and no receiver is claimed twice.
/// Rules only ever see `&Assignment`; writes are reserved for the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>"))]
pub struct Assignment {
    pairs: BTreeMap<Participant, Participant>,
    receivers: BTreeSet<Participant>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assigned givers.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The receiver assigned to `giver`, if any.
    pub fn receiver_of(&self, giver: &str) -> Option<&str> {
        self.pairs.get(giver).map(String::as_str)
    }

    /// The giver currently assigned to `receiver`, if any.
    pub fn giver_of(&self, receiver: &str) -> Option<&str> {
        if !self.receivers.contains(receiver) {
            return None;
        }
        self.pairs
            .iter()
            .find(|(_, r)| r.as_str() == receiver)
            .map(|(g, _)| g.as_str())
    }

    pub fn has_giver(&self, giver: &str) -> bool {
        self.pairs.contains_key(giver)
    }

    /// Whether `receiver` is already claimed by some giver.
    pub fn has_receiver(&self, receiver: &str) -> bool {
        self.receivers.contains(receiver)
    }

    /// Iterates `(giver, receiver)` entries in giver order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(g, r)| (g.as_str(), r.as_str()))
    }

    /// Consumes the assignment, returning the plain mapping.
    pub fn into_map(self) -> BTreeMap<Participant, Participant> {
        self.pairs
    }

    /// Sets `giver → receiver`, replacing any previous entry for `giver`.
    pub(crate) fn insert(&mut self, giver: &str, receiver: &str) {
        if let Some(previous) = self.pairs.insert(giver.to_owned(), receiver.to_owned()) {
            self.receivers.remove(&previous);
        }
        self.receivers.insert(receiver.to_owned());
    }

    pub(crate) fn remove(&mut self, giver: &str) {
        if let Some(receiver) = self.pairs.remove(giver) {
            self.receivers.remove(&receiver);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.pairs.clear();
        self.receivers.clear();
    }
}

impl From<BTreeMap<Participant, Participant>> for Assignment {
    fn from(pairs: BTreeMap<Participant, Participant>) -> Self {
        let receivers = pairs.values().cloned().collect();
        Self { pairs, receivers }
    }
}

impl From<Assignment> for BTreeMap<Participant, Participant> {
    fn from(assignment: Assignment) -> Self {
        assignment.pairs
    }
}

/// An acceptance predicate over a tentative `giver → receiver` entry.
///
/// The engine writes the tentative entry into the assignment *before*
/// evaluating rules, so `assignment` already contains it. Rules may read
/// any other entry too, including ones committed earlier in the same
/// attempt.
///
/// Any `Fn(&str, &str, &Assignment) -> bool` is a rule:
///
/// ```
/// use u_derange::assign::{Assignment, AssignmentRule};
///
/// let not_to_bob = |_giver: &str, receiver: &str, _a: &Assignment| receiver != "bob";
/// assert!(not_to_bob.accepts("ann", "cat", &Assignment::new()));
/// assert!(!not_to_bob.accepts("ann", "bob", &Assignment::new()));
/// ```
pub trait AssignmentRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Returns `true` if the tentative entry may be committed.
    fn accepts(&self, giver: &str, receiver: &str, assignment: &Assignment) -> bool;
}

impl<F> AssignmentRule for F
where
    F: Fn(&str, &str, &Assignment) -> bool + Send + Sync,
{
    fn accepts(&self, giver: &str, receiver: &str, assignment: &Assignment) -> bool {
        self(giver, receiver, assignment)
    }
}

/// Two participants who must not be assigned to each other, in either
/// direction. Order of the two members is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExclusivePair {
    pub first: Participant,
    pub second: Participant,
}

impl ExclusivePair {
    pub fn new(first: impl Into<Participant>, second: impl Into<Participant>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Whether `giver → receiver` would pair the two members.
    pub fn forbids(&self, giver: &str, receiver: &str) -> bool {
        (giver == self.first && receiver == self.second)
            || (giver == self.second && receiver == self.first)
    }
}

impl<A: Into<Participant>, B: Into<Participant>> From<(A, B)> for ExclusivePair {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_tracks_receivers() {
        let mut a = Assignment::new();
        a.insert("ann", "bob");
        assert_eq!(a.len(), 1);
        assert_eq!(a.receiver_of("ann"), Some("bob"));
        assert_eq!(a.giver_of("bob"), Some("ann"));
        assert!(a.has_giver("ann"));
        assert!(a.has_receiver("bob"));
        assert!(!a.has_receiver("ann"));
    }

    #[test]
    fn test_reinsert_releases_previous_receiver() {
        let mut a = Assignment::new();
        a.insert("ann", "bob");
        a.insert("ann", "cat");
        assert_eq!(a.len(), 1);
        assert!(!a.has_receiver("bob"));
        assert!(a.has_receiver("cat"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut a = Assignment::new();
        a.insert("ann", "bob");
        a.insert("bob", "ann");
        a.remove("ann");
        assert!(!a.has_giver("ann"));
        assert!(!a.has_receiver("bob"));
        assert_eq!(a.len(), 1);

        a.remove("nobody");
        assert_eq!(a.len(), 1);

        a.clear();
        assert!(a.is_empty());
        assert!(!a.has_receiver("ann"));
    }

    #[test]
    fn test_from_map_round_trip() {
        let mut map = BTreeMap::new();
        map.insert("ann".to_string(), "bob".to_string());
        map.insert("bob".to_string(), "ann".to_string());
        let a = Assignment::from(map.clone());
        assert!(a.has_receiver("ann"));
        assert_eq!(a.into_map(), map);
    }

    #[test]
    fn test_closure_is_rule() {
        let rule = |giver: &str, _receiver: &str, _a: &Assignment| giver != "ann";
        assert!(rule.accepts("bob", "cat", &Assignment::new()));
        assert!(!rule.accepts("ann", "cat", &Assignment::new()));
        assert!(!AssignmentRule::name(&rule).is_empty());
    }

    #[test]
    fn test_exclusive_pair_is_unordered() {
        let pair = ExclusivePair::from(("zach", "alyssum"));
        assert!(pair.forbids("zach", "alyssum"));
        assert!(pair.forbids("alyssum", "zach"));
        assert!(!pair.forbids("zach", "emma"));
        assert!(!pair.forbids("emma", "alyssum"));
    }
}
