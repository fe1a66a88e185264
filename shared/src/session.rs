use log::warn;
use serde_json::Value;

use crate::storage::{read_json, KeyValueStore};

/// Reads the signed-in flag the auth flow leaves in storage.
///
/// Any JSON value is accepted and judged by JavaScript truthiness, so a
/// missing key, `null`, `false`, `0` and `""` all mean signed out. Unreadable
/// values are treated as signed out.
pub fn is_user_logged_in(store: &dyn KeyValueStore, key: &str) -> bool {
    match read_json::<Value>(store, key) {
        Ok(Some(value)) => is_truthy(&value),
        Ok(None) => false,
        Err(e) => {
            warn!("Ignoring unreadable session flag '{}': {}", key, e);
            false
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    #[case("null", false)]
    #[case("0", false)]
    #[case("1", true)]
    #[case("\"\"", false)]
    #[case("\"uid-42\"", true)]
    #[case("{}", true)]
    #[case("not json", false)]
    fn test_session_flag_truthiness(#[case] raw: &str, #[case] expected: bool) {
        let store = MemoryStore::new().with_item("user-data", raw);
        assert_eq!(is_user_logged_in(&store, "user-data"), expected);
    }

    #[test]
    fn test_missing_session_flag_means_signed_out() {
        assert!(!is_user_logged_in(&MemoryStore::new(), "user-data"));
    }
}
