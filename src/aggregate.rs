//! Single-pass aggregation of validated records into summary totals.
//!
//! All filter state (window, VAT toggle, base currency, currency mode)
//! travels explicitly per call; the engine keeps no ambient context and
//! never mutates its input, so repeated or concurrent calls over the same
//! records produce identical results.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::currency::BASE_CURRENCY;
use crate::domain::{Client, Company, RecordDraft, RecordKind, RecordLink};
use crate::normalize::{RejectedRecord, normalize_records, total_with_vat};
use crate::window::DateWindow;

/// How global totals treat mixed currencies.
///
/// `Raw` reproduces the legacy dashboard behavior: native amounts are
/// summed across currencies as if comparable. `Normalized` (the default)
/// converts via each record's captured fx rate and excludes records that
/// have no rate, reporting their ids in `skipped_unconvertible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyMode {
    #[default]
    Normalized,
    Raw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOptions {
    pub include_vat: bool,
    pub base_currency: String,
    pub currency_mode: CurrencyMode,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            include_vat: true,
            base_currency: BASE_CURRENCY.to_string(),
            currency_mode: CurrencyMode::default(),
        }
    }
}

/// Which record field keys the per-entity breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    #[default]
    None,
    Company,
    Client,
    Project,
}

/// Running totals for one entity, kept in that entity's own currency.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTotals {
    pub currency: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregationResult {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net: Decimal,
    pub per_entity: BTreeMap<Uuid, EntityTotals>,
    /// Drafts excluded for failing validation, with reasons.
    pub rejected: Vec<RejectedRecord>,
    /// Records excluded from normalized totals for lack of an fx rate.
    pub skipped_unconvertible: Vec<Uuid>,
}

impl AggregationResult {
    /// True when any record was excluded; callers should annotate the
    /// displayed totals as computed over a subset.
    pub fn is_partial(&self) -> bool {
        !self.rejected.is_empty() || !self.skipped_unconvertible.is_empty()
    }
}

/// Entity-currency map for client grouping: each client's totals are kept
/// in that client's preferred currency.
pub fn client_currencies(clients: &[Client]) -> BTreeMap<Uuid, String> {
    clients
        .iter()
        .map(|c| (c.id, c.preferred_currency.clone()))
        .collect()
}

/// Entity-currency map for company grouping, keyed by default currency.
pub fn company_currencies(companies: &[Company]) -> BTreeMap<Uuid, String> {
    companies
        .iter()
        .map(|c| (c.id, c.default_currency.clone()))
        .collect()
}

/// Global totals over the window, no per-entity breakdown.
pub fn aggregate(
    drafts: &[RecordDraft],
    window: DateWindow,
    options: &AggregateOptions,
) -> AggregationResult {
    aggregate_grouped(drafts, window, options, GroupBy::None, &BTreeMap::new())
}

/// Global totals plus a per-entity breakdown in one linear scan.
///
/// `entity_currencies` maps each entity id to the currency its totals are
/// kept in (a client's preferred currency, a company's default currency).
/// Records in another currency are excluded from that entity's totals,
/// not converted; they still count toward the global totals. Records
/// whose entity is absent from the map get no per-entity bucket.
pub fn aggregate_grouped(
    drafts: &[RecordDraft],
    window: DateWindow,
    options: &AggregateOptions,
    group_by: GroupBy,
    entity_currencies: &BTreeMap<Uuid, String>,
) -> AggregationResult {
    let (records, rejected) = normalize_records(drafts, &options.base_currency);
    let base = options.base_currency.trim().to_ascii_uppercase();

    let mut result = AggregationResult {
        rejected,
        ..Default::default()
    };

    for record in &records {
        // Defensive re-filter: callers may have pre-filtered server-side,
        // but the window is a correctness boundary here.
        if !window.contains(record.date) {
            continue;
        }

        let effective = match total_with_vat(record.amount, record.vat_amount, options.include_vat)
        {
            Ok(v) => v,
            Err(error) => {
                result.rejected.push(RejectedRecord {
                    id: record.id,
                    error,
                });
                continue;
            }
        };

        let entity = match group_by {
            GroupBy::None => None,
            GroupBy::Company => record.company_id,
            GroupBy::Client => match record.link {
                RecordLink::Client(id) => Some(id),
                _ => None,
            },
            GroupBy::Project => match record.link {
                RecordLink::Project(id) => Some(id),
                _ => None,
            },
        };

        if let Some(id) = entity {
            if let Some(entity_currency) = entity_currencies.get(&id) {
                if record.currency.eq_ignore_ascii_case(entity_currency) {
                    let totals = result.per_entity.entry(id).or_insert_with(|| EntityTotals {
                        currency: entity_currency.trim().to_ascii_uppercase(),
                        income: Decimal::ZERO,
                        expenses: Decimal::ZERO,
                        net: Decimal::ZERO,
                    });
                    match record.kind {
                        RecordKind::Income => totals.income += effective,
                        RecordKind::Expense => totals.expenses += effective,
                    }
                }
            }
        }

        let contribution = match options.currency_mode {
            CurrencyMode::Raw => Some(effective),
            CurrencyMode::Normalized => {
                if record.currency == base {
                    Some(effective)
                } else if let Some(rate) = record.fx_rate_to_base {
                    // VAT applies to the native amount; the converted
                    // contribution is the effective native amount at the
                    // captured rate.
                    Some(effective * rate)
                } else {
                    result.skipped_unconvertible.push(record.id);
                    None
                }
            }
        };

        if let Some(value) = contribution {
            match record.kind {
                RecordKind::Income => result.total_income += value,
                RecordKind::Expense => result.total_expenses += value,
            }
        }
    }

    result.net = result.total_income - result.total_expenses;
    for totals in result.per_entity.values_mut() {
        totals.net = totals.income - totals.expenses;
    }

    result
}
