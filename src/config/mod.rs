//! State configuration input and table construction.
//!
//! A configuration is an ordered sequence of [`StateEntry`] values. It can be
//! written in Rust (`["start", "stop"]`, [`StateSpec`]) or decoded from JSON.
//! [`build_table`] turns a configuration into a [`StateTable`] plus the id
//! of the initial state, failing fast on the first hard error.

pub mod entry;
pub mod error;
pub mod lint;

pub use entry::{StateEntry, StateSpec};
pub use error::ConfigError;
pub use lint::{lint, ConfigIssue};

use crate::core::{StateDescriptor, StateTable};
use serde_json::Value;
use tracing::warn;

/// Minimum number of states a machine must declare.
pub const MIN_STATES: usize = 2;

/// Decode a configuration from a JSON value.
///
/// Anything other than an array (including `null`) is treated as a missing
/// configuration and reported as [`ConfigError::TooFewStates`].
pub fn parse_value(value: Value) -> Result<Vec<StateEntry>, ConfigError> {
    let Value::Array(items) = value else {
        return Err(ConfigError::TooFewStates { found: 0 });
    };

    if items.len() < MIN_STATES {
        return Err(ConfigError::TooFewStates { found: items.len() });
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| ConfigError::InvalidEntry {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Decode a configuration from JSON text.
pub fn parse_json(json: &str) -> Result<Vec<StateEntry>, ConfigError> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(value)
}

/// Build a state table from `entries`.
///
/// The first entry is the initial state unless some entry is flagged
/// `initial`; if several are, the last one wins.
pub fn build_table<D>(entries: &[StateEntry]) -> Result<(StateTable<D>, String), ConfigError> {
    if entries.len() < MIN_STATES {
        return Err(ConfigError::TooFewStates {
            found: entries.len(),
        });
    }

    let mut table = StateTable::new();
    let mut initial: Option<&str> = None;
    let mut flagged: Option<&str> = None;

    for (index, entry) in entries.iter().enumerate() {
        let id = entry.id();
        if id.is_empty() {
            return Err(ConfigError::EmptyStateId { index });
        }

        let mut descriptor = StateDescriptor::new(id);
        if let Some(from) = entry.allowed_from() {
            descriptor = descriptor.with_allowed_from(from.iter().cloned());
        }
        if let Some(to) = entry.allowed_to() {
            descriptor = descriptor.with_allowed_to(to.iter().cloned());
        }

        if !table.insert(descriptor) {
            return Err(ConfigError::DuplicateState { id: id.to_string() });
        }

        if entry.is_initial() {
            if let Some(previous) = flagged {
                warn!(
                    "State '{}' is marked initial after '{}'; '{}' wins",
                    id, previous, id
                );
            }
            flagged = Some(id);
            initial = Some(id);
        } else if initial.is_none() {
            initial = Some(id);
        }
    }

    // entries.len() >= MIN_STATES, so the loop ran and set `initial`
    let initial = initial.unwrap_or_default().to_string();
    Ok((table, initial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn too_few_states_rejected() {
        let result = build_table::<()>(&[StateEntry::from("only")]);
        assert!(matches!(result, Err(ConfigError::TooFewStates { found: 1 })));

        let result = build_table::<()>(&[]);
        assert!(matches!(result, Err(ConfigError::TooFewStates { found: 0 })));
    }

    #[test]
    fn first_entry_is_default_initial() {
        let entries = [StateEntry::from("start"), StateEntry::from("stop")];
        let (table, initial) = build_table::<()>(&entries).unwrap();

        assert_eq!(initial, "start");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn initial_flag_overrides_default() {
        let entries: Vec<StateEntry> =
            vec!["start".into(), StateSpec::new("stop").initial().into()];

        let (_, initial) = build_table::<()>(&entries).unwrap();
        assert_eq!(initial, "stop");
    }

    #[test]
    fn last_initial_flag_wins() {
        let entries: Vec<StateEntry> = vec![
            StateSpec::new("a").initial().into(),
            StateSpec::new("b").initial().into(),
            "c".into(),
        ];

        let (_, initial) = build_table::<()>(&entries).unwrap();
        assert_eq!(initial, "b");
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn repeated_initial_flag_is_logged() {
        let entries: Vec<StateEntry> = vec![
            StateSpec::new("a").initial().into(),
            StateSpec::new("b").initial().into(),
            "c".into(),
        ];

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let (_, initial) =
            tracing::subscriber::with_default(subscriber, || build_table::<()>(&entries)).unwrap();

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(initial, "b");
        assert!(output.contains("WARN"));
        assert!(output.contains("State 'b' is marked initial after 'a'; 'b' wins"));
    }

    #[test]
    fn single_initial_flag_is_not_logged() {
        let entries: Vec<StateEntry> = vec!["a".into(), StateSpec::new("b").initial().into()];

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || build_table::<()>(&entries)).unwrap();

        assert!(log.0.lock().unwrap().is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let entries: Vec<StateEntry> =
            vec!["state1".into(), StateSpec::new("state1").into()];

        let err = build_table::<()>(&entries).unwrap_err();
        assert!(matches!(&err, ConfigError::DuplicateState { id } if id == "state1"));
        assert_eq!(err.to_string(), "State already defined: state1");
    }

    #[test]
    fn empty_id_rejected() {
        let entries: Vec<StateEntry> = vec!["a".into(), "".into()];

        let result = build_table::<()>(&entries);
        assert!(matches!(result, Err(ConfigError::EmptyStateId { index: 1 })));
    }

    #[test]
    fn restrictions_are_stored() {
        let entries: Vec<StateEntry> = vec![
            StateSpec::new("start").to(["finish"]).into(),
            StateSpec::new("finish").from(["start"]).into(),
        ];

        let (table, _) = build_table::<()>(&entries).unwrap();

        let start = table.get("start").unwrap();
        assert!(start.permits_exit_to("finish"));
        assert!(start.allowed_from().is_none());

        let finish = table.get("finish").unwrap();
        assert!(finish.permits_entry_from("start"));
        assert!(finish.allowed_to().is_none());
    }

    #[test]
    fn non_array_values_are_missing_configuration() {
        for value in [json!(null), json!("bla"), json!({ "id": "a" })] {
            let result = parse_value(value);
            assert!(matches!(result, Err(ConfigError::TooFewStates { found: 0 })));
        }
    }

    #[test]
    fn short_array_rejected_before_decoding() {
        let result = parse_value(json!([42]));
        assert!(matches!(result, Err(ConfigError::TooFewStates { found: 1 })));
    }

    #[test]
    fn undecodable_entry_reports_index() {
        let result = parse_value(json!(["start", 42]));
        assert!(matches!(result, Err(ConfigError::InvalidEntry { index: 1, .. })));
    }

    #[test]
    fn malformed_json_rejected() {
        let result = parse_json("[\"start\",");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn parse_json_decodes_mixed_entries() {
        let entries = parse_json(r#"["start", {"id": "stop", "to": ["start"]}]"#).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].allowed_to(), Some(&["start".to_string()][..]));
    }
}
