//! Plain record shapes stored as JSON arrays

use crate::domain::keys::ContentKind;
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Item id to read timestamp (milliseconds) or any other marker
pub type ReadMap = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FinanceKind {
    Income,
    #[default]
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceItem {
    pub id: String,
    pub kind: FinanceKind,
    pub amount: f64,
    /// `YYYY-MM-DD`
    pub date: String,
    pub category: String,
    pub memo: String,
}

impl FinanceItem {
    /// Amount with income positive and expense negative
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            FinanceKind::Income => self.amount,
            FinanceKind::Expense => -self.amount,
        }
    }
}

/// Contractor or vendor serving a building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Firm {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub phone: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardPost {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: i64,
    pub pinned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    #[default]
    Open,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: i64,
    pub votes_for: u32,
    pub votes_against: u32,
    pub status: ProposalStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Resident,
    Manager,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub building_id: String,
    pub role: Role,
}

/// Anything with a stable id that can be tracked in a read map
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for BoardPost {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Proposal {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Count items that have no entry in the read map
pub fn unread_count<T: Identified>(items: &[T], read: &ReadMap) -> usize {
    items
        .iter()
        .filter(|item| !read.contains_key(item.id()))
        .count()
}

/// Record families addressable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFamily {
    Finance,
    Firms,
    Posts(ContentKind),
    Buildings,
    Users,
}

impl RecordFamily {
    /// Whether records of this family are scoped to a building
    pub fn is_tenant_scoped(&self) -> bool {
        !matches!(self, RecordFamily::Buildings | RecordFamily::Users)
    }
}

impl FromStr for RecordFamily {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "finance" => Ok(RecordFamily::Finance),
            "firms" => Ok(RecordFamily::Firms),
            "board" => Ok(RecordFamily::Posts(ContentKind::Board)),
            "forum" => Ok(RecordFamily::Posts(ContentKind::Forum)),
            "buildings" => Ok(RecordFamily::Buildings),
            "users" => Ok(RecordFamily::Users),
            _ => Err(LedgerError::UnknownFamily(s.to_string())),
        }
    }
}
