//! Challenge identification.
//!
//! ## ChallengeId
//!
//! Opaque name of a microgame in the catalog (typically the name of the
//! screen the host loads to play it). The core never interprets it.
//!
//! ## ChallengeInstanceId
//!
//! Identifies one *play* of a challenge. Allocated when a selected challenge
//! begins and never reused, so a report from an abandoned play can always be
//! told apart from the active one.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Name of a challenge in the catalog.
///
/// ```
/// use rust_microgames::core::ChallengeId;
///
/// let id = ChallengeId::new("MG_Loteria");
/// assert_eq!(id.as_str(), "MG_Loteria");
/// assert_eq!(id.to_string(), "MG_Loteria");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeId(String);

impl ChallengeId {
    /// Create a new challenge ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the challenge name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChallengeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ChallengeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single play of a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChallengeInstanceId(pub u64);

impl ChallengeInstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ChallengeInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Yield each challenge once, keeping the first occurrence and its position.
pub fn distinct<'a>(
    catalog: impl IntoIterator<Item = &'a ChallengeId>,
) -> impl Iterator<Item = &'a ChallengeId> {
    let mut seen = FxHashSet::default();
    catalog.into_iter().filter(move |id| seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_id() {
        let id = ChallengeId::from("MG_Ruleta");
        assert_eq!(id.as_str(), "MG_Ruleta");
        assert_eq!(format!("{}", id), "MG_Ruleta");
        assert_eq!(id, ChallengeId::new(String::from("MG_Ruleta")));
    }

    #[test]
    fn test_challenge_id_serializes_as_string() {
        let id = ChallengeId::new("MG_SmashBar");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"MG_SmashBar\"");

        let back: ChallengeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_instance_id() {
        let id = ChallengeInstanceId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(id.next(), ChallengeInstanceId::new(4));
        assert_eq!(format!("{}", id), "Instance(3)");
        assert!(id < id.next());
    }

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        let catalog: Vec<ChallengeId> =
            ["b", "a", "b", "c", "a"].into_iter().map(ChallengeId::new).collect();

        let names: Vec<&str> = distinct(&catalog).map(ChallengeId::as_str).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(distinct(&Vec::new()).count(), 0);
    }
}
