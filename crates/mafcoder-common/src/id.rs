use serde::{Deserialize, Serialize};
use std::fmt;

/// Short hex id used to tag a single chat turn in log output.
pub fn new_turn_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Identity of one conversation thread. A thread lives as long as the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(String);

impl ThreadId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThreadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_id_is_short_hex() {
        let id = new_turn_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn turn_id_is_unique() {
        assert_ne!(new_turn_id(), new_turn_id());
    }

    #[test]
    fn thread_id_is_v4_uuid() {
        let tid = ThreadId::new();
        let parsed = uuid::Uuid::parse_str(tid.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn thread_id_display_matches_str() {
        let tid = ThreadId::default();
        assert_eq!(tid.to_string(), tid.as_str());
    }

    #[test]
    fn thread_ids_differ() {
        let tid = ThreadId::new();
        assert_eq!(tid, tid.clone());
        assert_ne!(tid, ThreadId::new());
    }
}
