//! Opening balance accessor and balance summary
//!
//! The opening balance is kept as a bare decimal string, not JSON.

use crate::application::ledger::Ledger;
use crate::domain::keys;
use crate::domain::records::FinanceItem;
use crate::infrastructure::backend::Backend;
use crate::infrastructure::store::Slot;
use serde::Serialize;
use tracing::debug;

const SEED: &str = "0";

/// Opening balance, finance net and the resulting current balance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub opening: f64,
    pub income: f64,
    pub expense: f64,
    pub current: f64,
}

/// Finite number parsed from `raw`, or zero
pub fn coerce_balance(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn balance_summary(opening: f64, items: &[FinanceItem]) -> BalanceSummary {
    let (income, expense) = items.iter().fold((0.0, 0.0), |(inc, exp), item| {
        let signed = item.signed_amount();
        if signed >= 0.0 {
            (inc + signed, exp)
        } else {
            (inc, exp - signed)
        }
    });

    BalanceSummary {
        opening,
        income,
        expense,
        current: opening + income - expense,
    }
}

impl<B: Backend> Ledger<B> {
    /// Opening balance for `tenant`; the first read stores `0`
    pub fn load_opening_balance(&self, tenant: &str) -> f64 {
        let key = keys::opening_balance(tenant);
        match self.store.fetch(&key) {
            Slot::Empty => {
                debug!(key = %key, "seeding opening balance");
                // Logged by the store; the read still yields zero
                let _ = self.store.put(&key, SEED);
                0.0
            }
            Slot::Unreadable => 0.0,
            Slot::Filled(raw) => coerce_balance(&raw),
        }
    }

    /// Store `value`; non-finite values are stored as `0`
    pub fn save_opening_balance(&self, tenant: &str, value: f64) -> bool {
        let value = if value.is_finite() { value } else { 0.0 };
        self.store
            .put(&keys::opening_balance(tenant), &value.to_string())
    }

    pub fn balance_summary(&self, tenant: &str) -> BalanceSummary {
        balance_summary(
            self.load_opening_balance(tenant),
            &self.load_finance_items(tenant),
        )
    }
}
