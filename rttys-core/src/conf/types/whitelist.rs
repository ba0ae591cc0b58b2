use serde::Serialize;
use std::collections::BTreeSet;

/// Raw value meaning "no restriction".
pub const WILDCARD: &str = "*";

/// Client identifiers permitted to connect.
///
/// `Only` is never empty: an empty list collapses to `AllowAll`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Whitelist {
    #[default]
    AllowAll,
    Only(BTreeSet<String>),
}

impl Whitelist {
    /// Builds a whitelist from a whitespace-separated list of identifiers.
    pub fn from_ids(raw: &str) -> Self {
        let ids: BTreeSet<String> = raw.split_whitespace().map(str::to_owned).collect();
        if ids.is_empty() {
            Whitelist::AllowAll
        } else {
            Whitelist::Only(ids)
        }
    }

    pub fn allows(&self, id: &str) -> bool {
        match self {
            Whitelist::AllowAll => true,
            Whitelist::Only(ids) => ids.contains(id),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Whitelist::Only(_))
    }

    pub fn restricted_count(&self) -> Option<usize> {
        match self {
            Whitelist::AllowAll => None,
            Whitelist::Only(ids) => Some(ids.len()),
        }
    }
}
