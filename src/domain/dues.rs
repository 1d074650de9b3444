//! Dues schedule record and its read-time repair

use crate::domain::month::{months_between, parse_month};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fee applied when a stored record has no usable `monthlyFee`
pub const DEFAULT_MONTHLY_FEE: f64 = 2000.0;

/// Bucket that absorbs a non-map payment entry when it is converted to
/// per-month form.
const CARRIED_BUCKET: &str = "carried";

/// Dues schedule for one building.
///
/// Invariants after [`Dues::normalize`]: `monthly_fee` is finite,
/// `start_month` is non-empty and `payments_by_user` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dues {
    pub monthly_fee: f64,
    pub start_month: String,
    /// User id to opaque payment data. New payments are written as
    /// `{ "YYYY-MM": amount }` maps, older payloads may hold plain numbers.
    pub payments_by_user: BTreeMap<String, Value>,
}

impl Dues {
    /// Fresh schedule starting at `start_month` with the default fee
    pub fn new(start_month: impl Into<String>) -> Self {
        Dues {
            monthly_fee: DEFAULT_MONTHLY_FEE,
            start_month: start_month.into(),
            payments_by_user: BTreeMap::new(),
        }
    }

    /// Repair a raw stored value field by field.
    ///
    /// Anything that is not an object is treated as an empty object, so a
    /// `null`, an array or a bare number all come back as a fresh schedule.
    pub fn normalize(raw: &Value, current_month: &str) -> Self {
        let empty = Map::new();
        let fields = raw.as_object().unwrap_or(&empty);

        let monthly_fee = fields
            .get("monthlyFee")
            .and_then(Value::as_f64)
            .filter(|fee| fee.is_finite())
            .unwrap_or(DEFAULT_MONTHLY_FEE);

        let start_month = fields
            .get("startMonth")
            .and_then(Value::as_str)
            .filter(|month| !month.is_empty())
            .unwrap_or(current_month)
            .to_string();

        let payments_by_user = fields
            .get("paymentsByUser")
            .and_then(Value::as_object)
            .map(|payments| {
                payments
                    .iter()
                    .map(|(user, data)| (user.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Dues {
            monthly_fee,
            start_month,
            payments_by_user,
        }
    }

    /// Total paid by one user, summing every number found in their entry
    pub fn paid_by(&self, user: &str) -> f64 {
        self.payments_by_user
            .get(user)
            .map(payment_amount)
            .unwrap_or(0.0)
    }

    /// Total paid across all users
    pub fn paid_total(&self) -> f64 {
        self.payments_by_user.values().map(payment_amount).sum()
    }

    /// Add a payment for `user` in `month`, accumulating with any earlier
    /// payment for the same month.
    pub fn record_payment(&mut self, user: &str, month: &str, amount: f64) {
        let entry = self
            .payments_by_user
            .entry(user.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        if !entry.is_object() {
            let carried = payment_amount(entry);
            let mut converted = Map::new();
            if carried != 0.0 {
                converted.insert(CARRIED_BUCKET.to_string(), number(carried));
            }
            *entry = Value::Object(converted);
        }

        if let Value::Object(months) = entry {
            let previous = months.get(month).map(payment_amount).unwrap_or(0.0);
            months.insert(month.to_string(), number(previous + amount));
        }
    }

    /// Amount still owed by `user` for every month from the start month
    /// through `as_of`. `None` if the start month is not a valid `YYYY-MM`.
    pub fn outstanding(&self, user: &str, as_of: NaiveDate) -> Option<f64> {
        let start = parse_month(&self.start_month).ok()?;
        let due = self.monthly_fee * months_between(start, as_of) as f64;
        Some(due - self.paid_by(user))
    }
}

fn payment_amount(data: &Value) -> f64 {
    match data {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Array(items) => items.iter().map(payment_amount).sum(),
        Value::Object(fields) => fields.values().map(payment_amount).sum(),
        _ => 0.0,
    }
}

fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
