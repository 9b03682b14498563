use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Income,
    Expense,
}

/// Separates personal ledger entries from company-owned entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Personal,
    Company,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkedType {
    Client,
    Project,
    None,
}

/// Validated linkage of a record: a client, a project, or neither.
/// Mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLink {
    Client(Uuid),
    Project(Uuid),
    None,
}

/// A ledger row as it arrives from storage or a submitted form.
///
/// The linkage is still the raw three-column shape here; [`RecordDraft::validate`]
/// collapses it into [`RecordLink`] and enforces the record invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDraft {
    pub id: Uuid,
    pub kind: RecordKind,
    pub scope: Scope,
    #[serde(default)]
    pub company_id: Option<Uuid>,
    pub date: NaiveDate,
    pub title: String,
    pub amount: Decimal,
    #[serde(default)]
    pub vat_amount: Decimal,
    pub currency: String,
    #[serde(default)]
    pub fx_rate_to_base: Option<Decimal>,
    /// Stored converted amount. Never trusted: recomputed on validation.
    #[serde(default)]
    pub base_amount: Option<Decimal>,
    pub linked_type: LinkedType,
    #[serde(default)]
    pub linked_client_id: Option<Uuid>,
    #[serde(default)]
    pub linked_project_id: Option<Uuid>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl RecordDraft {
    /// Checks the record invariants and produces the validated form.
    ///
    /// `base_amount` is recomputed from `amount` and `fx_rate_to_base`
    /// regardless of what storage carried; a foreign record without a
    /// captured rate is valid and keeps `base_amount = None`.
    pub fn validate(&self, base_currency: &str) -> Result<LedgerRecord> {
        if self.amount.is_sign_negative() {
            return Err(self.invalid(format!("negative amount: {}", self.amount)));
        }
        if self.vat_amount.is_sign_negative() {
            return Err(self.invalid(format!("negative VAT amount: {}", self.vat_amount)));
        }

        let currency = self.currency.trim().to_ascii_uppercase();
        if currency.is_empty() {
            return Err(self.invalid("empty currency code".to_string()));
        }
        let base_currency = base_currency.trim().to_ascii_uppercase();

        match self.scope {
            Scope::Company if self.company_id.is_none() => {
                return Err(self.invalid("company-scoped record without company_id".to_string()));
            }
            Scope::Personal if self.company_id.is_some() => {
                return Err(self.invalid("personal record must not carry a company_id".to_string()));
            }
            _ => {}
        }

        let link = match (self.linked_type, self.linked_client_id, self.linked_project_id) {
            (LinkedType::Client, Some(client), None) => RecordLink::Client(client),
            (LinkedType::Project, None, Some(project)) => RecordLink::Project(project),
            (LinkedType::None, None, None) => {
                let has_details = self.details.as_deref().is_some_and(|d| !d.trim().is_empty());
                if !has_details {
                    return Err(
                        self.invalid("unlinked record requires non-empty details".to_string())
                    );
                }
                RecordLink::None
            }
            _ => {
                return Err(self.invalid(format!(
                    "linkage inconsistent with linked_type {:?} (client_id set: {}, project_id set: {})",
                    self.linked_type,
                    self.linked_client_id.is_some(),
                    self.linked_project_id.is_some(),
                )));
            }
        };

        if let Some(rate) = self.fx_rate_to_base {
            if currency != base_currency && rate <= Decimal::ZERO {
                return Err(self.invalid(format!("fx rate must be positive: {rate}")));
            }
        }

        let base_amount = crate::normalize::resolve_base_amount(
            self.amount,
            &currency,
            &base_currency,
            self.fx_rate_to_base,
        );

        Ok(LedgerRecord {
            id: self.id,
            kind: self.kind,
            scope: self.scope,
            company_id: self.company_id,
            date: self.date,
            title: self.title.clone(),
            amount: self.amount,
            vat_amount: self.vat_amount,
            currency,
            fx_rate_to_base: self.fx_rate_to_base,
            base_amount,
            link,
            details: self.details.clone(),
            category: self.category.clone(),
        })
    }

    fn invalid(&self, reason: String) -> EngineError {
        EngineError::InvalidRecord {
            id: self.id,
            reason,
        }
    }
}

/// A validated ledger entry. Aggregation never mutates these.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRecord {
    pub id: Uuid,
    pub kind: RecordKind,
    pub scope: Scope,
    pub company_id: Option<Uuid>,
    pub date: NaiveDate,
    pub title: String,
    pub amount: Decimal,
    pub vat_amount: Decimal,
    /// Uppercased ISO-style code.
    pub currency: String,
    pub fx_rate_to_base: Option<Decimal>,
    /// `amount * fx_rate_to_base`, or `amount` for base-currency records.
    /// Absent when the rate was never captured.
    pub base_amount: Option<Decimal>,
    pub link: RecordLink,
    pub details: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub default_currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub preferred_currency: String,
    #[serde(default)]
    pub monthly_budget: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    Active,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub client_id: Option<Uuid>,
}

pub const SERVICE_CATEGORIES: &[&str] = &[
    "Growth & Performance Marketing",
    "Brand Strategy",
    "Creative Production",
    "Social Media Management",
    "Influencer / KOL Marketing",
    "PR & Communications",
    "Web / Product / UX",
    "Web3 / AI Consulting",
];

pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Ads", "Tools", "Payroll", "Travel", "Office", "Legal", "Other",
];
