//! Set of identity strings seen via login or item creation.

use std::collections::BTreeSet;

/// Known identities. Membership only; no attributes.
#[derive(Debug, Clone, Default)]
pub struct Identities {
    users: BTreeSet<String>,
}

impl Identities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identity. Returns true if it was not known before.
    pub fn insert(&mut self, user: &str) -> bool {
        self.users.insert(user.to_string())
    }

    /// All identities, sorted
    pub fn list(&self) -> Vec<&str> {
        self.users.iter().map(String::as_str).collect()
    }
}
