//! defter — aggregation and normalization engine for a multi-company
//! income/expense tracker.
//!
//! The crate is a pure, stateless function library: a persistence layer
//! hands it unordered collections of ledger records, and it returns
//! window-filtered, VAT-aware, currency-aware summary totals. It owns no
//! storage, no sessions, and no UI state; the only I/O it performs is the
//! optional HTTP exchange-rate lookup in [`rates`].

pub mod aggregate;
pub mod currency;
pub mod domain;
pub mod error;
pub mod export;
pub mod normalize;
pub mod rates;
pub mod window;

pub use crate::aggregate::{
    AggregateOptions, AggregationResult, CurrencyMode, EntityTotals, GroupBy, aggregate,
    aggregate_grouped, client_currencies, company_currencies,
};
pub use crate::currency::{BASE_CURRENCY, CURRENCIES, CurrencyInfo, currency_symbol, format_currency};
pub use crate::domain::{
    Client, Company, LedgerRecord, LinkedType, Project, ProjectStatus, RecordDraft, RecordKind,
    RecordLink, Scope,
};
pub use crate::error::{EngineError, Result};
pub use crate::export::export_csv;
pub use crate::normalize::{RejectedRecord, normalize_records, resolve_base_amount, total_with_vat};
pub use crate::rates::{HttpRateSource, RateQuote, RateSlot, RateSource, fetch_rate};
pub use crate::window::{DatePreset, DateWindow, filter_by_window, resolve_window, today_utc};
