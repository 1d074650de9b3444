//! Domain layer - Record shapes, key namespace and repair rules

pub mod dues;
pub mod keys;
pub mod month;
pub mod records;

pub use dues::{Dues, DEFAULT_MONTHLY_FEE};
pub use keys::ContentKind;
pub use records::{
    BoardPost, Building, FinanceItem, FinanceKind, Firm, Proposal, ProposalStatus, ReadMap,
    RecordFamily, Role, User,
};
