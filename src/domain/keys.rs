//! Storage key namespace
//!
//! Every record family owns one literal prefix carrying its schema version.
//! Bumping a version tag produces a disjoint key space; data under the old
//! tag is left behind rather than migrated.

use crate::error::{LedgerError, Result};
use std::fmt;
use std::str::FromStr;

const DUES_PREFIX: &str = "aptledger:dues:v1:";
const OPENING_BALANCE_PREFIX: &str = "aptledger:opening-balance:v1:";
const FINANCE_PREFIX: &str = "aptledger:finance:v2:";
const FIRMS_PREFIX: &str = "aptledger:firms:v1:";
const POSTS_PREFIX: &str = "aptledger:posts:v1:";
const READ_PREFIX: &str = "aptledger:read:v1:";

/// Key of the global building roster
pub const BUILDINGS_KEY: &str = "aptledger:buildings:v1";
/// Key of the global user roster
pub const USERS_KEY: &str = "aptledger:users:v1";

/// Secondary namespace separating sibling record sets within one tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Notice board posts
    Board,
    /// Forum proposals
    Forum,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Board, ContentKind::Forum];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Board => "board",
            ContentKind::Forum => "forum",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "board" => Ok(ContentKind::Board),
            "forum" => Ok(ContentKind::Forum),
            _ => Err(LedgerError::UnknownContentKind(s.to_string())),
        }
    }
}

pub fn dues(tenant: &str) -> String {
    format!("{DUES_PREFIX}{tenant}")
}

pub fn opening_balance(tenant: &str) -> String {
    format!("{OPENING_BALANCE_PREFIX}{tenant}")
}

pub fn finance(tenant: &str) -> String {
    format!("{FINANCE_PREFIX}{tenant}")
}

pub fn firms(tenant: &str) -> String {
    format!("{FIRMS_PREFIX}{tenant}")
}

/// Board posts and forum proposals share one family, split by kind.
pub fn posts(kind: ContentKind, tenant: &str) -> String {
    format!("{POSTS_PREFIX}{kind}:{tenant}")
}

pub fn read_map(kind: ContentKind, tenant: &str) -> String {
    format!("{READ_PREFIX}{kind}:{tenant}")
}
