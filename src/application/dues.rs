//! Dues accessor

use crate::application::ledger::Ledger;
use crate::domain::keys;
use crate::domain::month::{current_month, parse_month};
use crate::domain::Dues;
use crate::error::{LedgerError, Result};
use crate::infrastructure::backend::Backend;
use serde_json::{Map, Value};
use tracing::debug;

impl<B: Backend> Ledger<B> {
    /// Dues for `tenant`, repaired against the current month
    pub fn load_dues(&self, tenant: &str) -> Dues {
        self.load_dues_as_of(tenant, &current_month())
    }

    /// Dues for `tenant`, filling a missing start month with `month`.
    ///
    /// The repaired record is not written back; call [`Ledger::save_dues`]
    /// to persist it.
    pub fn load_dues_as_of(&self, tenant: &str, month: &str) -> Dues {
        let key = keys::dues(tenant);
        let raw = self.store.load(&key, Value::Object(Map::new()), None);
        let dues = Dues::normalize(&raw, month);

        let untouched = raw.as_object().is_some_and(Map::is_empty)
            || serde_json::to_value(&dues).is_ok_and(|repaired| repaired == raw);
        if !untouched {
            debug!(key = %key, "repaired stored dues record");
        }

        dues
    }

    pub fn save_dues(&self, tenant: &str, dues: &Dues) -> bool {
        self.store.save(&keys::dues(tenant), dues)
    }

    /// Apply `change` to the stored dues and persist the result.
    ///
    /// Inputs are checked before anything is written. Unlike the plain
    /// accessors this reports why a write was rejected.
    pub fn update_dues(&self, tenant: &str, month: &str, change: &DuesChange) -> Result<Dues> {
        let mut dues = self.load_dues_as_of(tenant, month);

        if let Some(fee) = change.monthly_fee {
            dues.monthly_fee = check_amount(fee)?;
        }
        if let Some(start) = &change.start_month {
            parse_month(start)?;
            dues.start_month = start.trim().to_string();
        }
        if let Some((user, amount)) = &change.payment {
            dues.record_payment(user, month, check_amount(*amount)?);
        }

        self.store.try_save(&keys::dues(tenant), &dues)?;
        Ok(dues)
    }
}

/// Edits accepted by [`Ledger::update_dues`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DuesChange {
    pub monthly_fee: Option<f64>,
    pub start_month: Option<String>,
    /// User id and amount, booked against the month passed to `update_dues`
    pub payment: Option<(String, f64)>,
}

fn check_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(LedgerError::InvalidAmount(amount.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::backend::MemoryBackend;
    use serde_json::json;

    #[test]
    fn test_never_written_dues_are_fresh_and_not_persisted() {
        let ledger = Ledger::new(MemoryBackend::new());

        let dues = ledger.load_dues_as_of("b1", "2025-06");

        assert_eq!(dues, Dues::new("2025-06"));
        assert!(ledger.store().backend().is_empty());
    }

    #[test]
    fn test_load_dues_uses_current_month() {
        let ledger = Ledger::new(MemoryBackend::new());
        assert_eq!(ledger.load_dues("b1").start_month, current_month());
    }

    #[test]
    fn test_partial_record_is_repaired_on_read_only() {
        let ledger = Ledger::new(MemoryBackend::new());
        let stored = r#"{"paymentsByUser":{"u1":100}}"#;
        ledger
            .store()
            .backend()
            .set(&keys::dues("b1"), stored)
            .unwrap();

        let dues = ledger.load_dues_as_of("b1", "2025-06");

        assert_eq!(dues.monthly_fee, 2000.0);
        assert_eq!(dues.start_month, "2025-06");
        assert_eq!(dues.payments_by_user.get("u1"), Some(&json!(100)));
        assert_eq!(
            ledger.store().backend().get(&keys::dues("b1")).unwrap(),
            Some(stored.to_string())
        );
    }

    #[test]
    fn test_corrupt_dues_fall_back_to_fresh() {
        let ledger = Ledger::new(MemoryBackend::new());
        ledger
            .store()
            .backend()
            .set(&keys::dues("b1"), "monthlyFee=3")
            .unwrap();

        assert_eq!(ledger.load_dues_as_of("b1", "2025-01"), Dues::new("2025-01"));
    }

    #[test]
    fn test_save_and_reload_dues() {
        let ledger = Ledger::new(MemoryBackend::new());
        let mut dues = Dues::new("2024-11");
        dues.monthly_fee = 1800.0;
        dues.record_payment("u7", "2024-11", 1800.0);

        assert!(ledger.save_dues("b1", &dues));
        assert_eq!(ledger.load_dues_as_of("b1", "2025-06"), dues);
    }

    #[test]
    fn test_update_dues_applies_and_persists() {
        let ledger = Ledger::new(MemoryBackend::new());
        let change = DuesChange {
            monthly_fee: Some(2200.0),
            start_month: Some("2025-01".to_string()),
            payment: Some(("u1".to_string(), 2200.0)),
        };

        let dues = ledger.update_dues("b1", "2025-03", &change).unwrap();

        assert_eq!(dues.monthly_fee, 2200.0);
        assert_eq!(dues.start_month, "2025-01");
        assert_eq!(dues.payments_by_user.get("u1"), Some(&json!({ "2025-03": 2200.0 })));
        assert_eq!(ledger.load_dues_as_of("b1", "2025-09"), dues);
    }

    #[test]
    fn test_update_dues_rejects_bad_input_without_writing() {
        let ledger = Ledger::new(MemoryBackend::new());

        let bad_month = DuesChange {
            start_month: Some("January".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ledger.update_dues("b1", "2025-03", &bad_month),
            Err(LedgerError::InvalidMonth(_))
        ));

        let bad_fee = DuesChange {
            monthly_fee: Some(-5.0),
            ..Default::default()
        };
        assert!(matches!(
            ledger.update_dues("b1", "2025-03", &bad_fee),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(ledger.store().backend().is_empty());
    }

    #[test]
    fn test_update_dues_surfaces_quota() {
        let ledger = Ledger::new(MemoryBackend::with_quota(16));
        let result = ledger.update_dues("b1", "2025-03", &DuesChange::default());
        assert!(matches!(result, Err(LedgerError::QuotaExceeded { .. })));
    }

    #[test]
    fn test_dues_are_isolated_per_tenant() {
        let ledger = Ledger::new(MemoryBackend::new());
        let mut dues = Dues::new("2024-01");
        dues.monthly_fee = 999.0;
        ledger.save_dues("b1", &dues);

        assert_eq!(ledger.load_dues_as_of("b2", "2025-01").monthly_fee, 2000.0);
    }
}
