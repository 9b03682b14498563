//! Record normalization: VAT totals, base-currency resolution, and batch
//! validation with per-record rejection.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{LedgerRecord, RecordDraft};
use crate::error::{EngineError, Result};

/// `amount + vat_amount` when the VAT toggle is on, `amount` otherwise.
///
/// Total for all non-negative VAT amounts; a negative VAT amount fails
/// with `InvalidAmount`.
pub fn total_with_vat(amount: Decimal, vat_amount: Decimal, include_vat: bool) -> Result<Decimal> {
    if vat_amount.is_sign_negative() {
        return Err(EngineError::InvalidAmount(format!(
            "negative VAT amount: {vat_amount}"
        )));
    }
    Ok(if include_vat {
        amount + vat_amount
    } else {
        amount
    })
}

/// Base-currency value of a native amount.
///
/// Same-currency amounts pass through unchanged (rate implicitly 1).
/// Foreign amounts convert via the captured rate when one exists;
/// otherwise the base value is simply unknown. Rate capture is an
/// unreliable network dependency, so the absence is a valid state, not
/// an error, and must never block record creation.
pub fn resolve_base_amount(
    amount: Decimal,
    currency: &str,
    base_currency: &str,
    fx_rate_to_base: Option<Decimal>,
) -> Option<Decimal> {
    if currency.eq_ignore_ascii_case(base_currency) {
        return Some(amount);
    }
    fx_rate_to_base.map(|rate| amount * rate)
}

/// A draft that failed validation, kept alongside the reason so callers
/// can surface it per record.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub id: Uuid,
    pub error: EngineError,
}

/// Validates every draft individually. Invalid drafts are reported and
/// excluded; they never abort the batch.
pub fn normalize_records(
    drafts: &[RecordDraft],
    base_currency: &str,
) -> (Vec<LedgerRecord>, Vec<RejectedRecord>) {
    let mut records = Vec::with_capacity(drafts.len());
    let mut rejected = Vec::new();

    for draft in drafts {
        match draft.validate(base_currency) {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::debug!("Rejected record {}: {error}", draft.id);
                rejected.push(RejectedRecord {
                    id: draft.id,
                    error,
                });
            }
        }
    }

    (records, rejected)
}
