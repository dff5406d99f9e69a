use serde::{Deserialize, Serialize};

/// Store-assigned identity of a user record.
///
/// Wraps the database `BIGSERIAL` value so user ids cannot be mixed up
/// with arbitrary integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// The first id handed out by an empty store.
    pub fn first() -> Self {
        Self(1)
    }

    /// Creates a user id from a raw value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the id that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
