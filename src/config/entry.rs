//! State configuration entries.

use serde::{Deserialize, Serialize};

/// One element of a state configuration.
///
/// Decodes from either a bare JSON string or a descriptor object:
///
/// ```rust
/// use immutable_state_machine::config::StateEntry;
///
/// let entries: Vec<StateEntry> =
///     serde_json::from_str(r#"["start", {"id": "stop", "initial": true}]"#).unwrap();
///
/// assert_eq!(entries[0].id(), "start");
/// assert!(entries[1].is_initial());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateEntry {
    /// A state id with no restrictions
    Plain(String),

    /// A state with optional restrictions and initial flag
    Spec(StateSpec),
}

impl StateEntry {
    pub fn id(&self) -> &str {
        match self {
            Self::Plain(id) => id,
            Self::Spec(spec) => &spec.id,
        }
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Spec(spec) if spec.initial)
    }

    /// Successor restriction, if declared.
    pub fn allowed_to(&self) -> Option<&[String]> {
        match self {
            Self::Plain(_) => None,
            Self::Spec(spec) => spec.to.as_deref(),
        }
    }

    /// Predecessor restriction, if declared.
    pub fn allowed_from(&self) -> Option<&[String]> {
        match self {
            Self::Plain(_) => None,
            Self::Spec(spec) => spec.from.as_deref(),
        }
    }
}

impl From<&str> for StateEntry {
    fn from(id: &str) -> Self {
        Self::Plain(id.to_string())
    }
}

impl From<String> for StateEntry {
    fn from(id: String) -> Self {
        Self::Plain(id)
    }
}

impl From<StateSpec> for StateEntry {
    fn from(spec: StateSpec) -> Self {
        Self::Spec(spec)
    }
}

/// Descriptor form of a state entry.
///
/// A missing (or `null`) `from`/`to` leaves that direction unrestricted, while
/// an empty list forbids every move in that direction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSpec {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub initial: bool,
}

impl StateSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Only allow transitions from this state to `ids`.
    pub fn to<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Only allow transitions into this state from `ids`.
    pub fn from<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Mark this state as the initial one.
    pub fn initial(mut self) -> Self {
        self.initial = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_decodes_as_plain() {
        let entry: StateEntry = serde_json::from_value(json!("start")).unwrap();

        assert_eq!(entry, StateEntry::Plain("start".to_string()));
        assert!(!entry.is_initial());
        assert!(entry.allowed_to().is_none());
    }

    #[test]
    fn object_decodes_as_spec() {
        let entry: StateEntry = serde_json::from_value(json!({
            "id": "step2",
            "from": ["step1"],
            "to": ["step3"],
            "initial": true,
        }))
        .unwrap();

        assert_eq!(entry.id(), "step2");
        assert!(entry.is_initial());
        assert_eq!(entry.allowed_from(), Some(&["step1".to_string()][..]));
        assert_eq!(entry.allowed_to(), Some(&["step3".to_string()][..]));
    }

    #[test]
    fn null_restrictions_are_absent() {
        let entry: StateEntry =
            serde_json::from_value(json!({ "id": "a", "to": null })).unwrap();

        assert!(entry.allowed_to().is_none());
        assert!(!entry.is_initial());
    }

    #[test]
    fn unrelated_values_do_not_decode() {
        assert!(serde_json::from_value::<StateEntry>(json!(42)).is_err());
        assert!(serde_json::from_value::<StateEntry>(json!({ "to": ["a"] })).is_err());
    }

    #[test]
    fn spec_serializes_without_defaults() {
        let spec = StateSpec::new("stop");

        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({ "id": "stop" }));
    }

    #[test]
    fn spec_builder_sets_fields() {
        let spec = StateSpec::new("bed").from(["finish"]).to(["start"]).initial();

        assert_eq!(spec.from, Some(vec!["finish".to_string()]));
        assert_eq!(spec.to, Some(vec!["start".to_string()]));
        assert!(spec.initial);
    }
}
