//! Exchange-rate acquisition.
//!
//! Rate lookup is an external, unreliable network dependency: every
//! failure mode (timeout, non-2xx, malformed body, unknown code) degrades
//! to [`RateQuote::Unavailable`] rather than an error, and callers treat
//! that as "leave the rate blank for the user to fill in manually".

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

const DEFAULT_RATE_API: &str = "https://api.exchangerate-api.com/v4/latest";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a rate lookup. `Unavailable` is a sentinel, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateQuote {
    Rate(Decimal),
    Unavailable,
}

/// A provider that quotes how many units of `to` one unit of `from` buys.
pub trait RateSource {
    fn rate(&self, from: &str, to: &str) -> RateQuote;
}

/// Looks up a rate, short-circuiting same-currency pairs to 1 without
/// touching the provider. Non-positive quotes degrade to `Unavailable`.
pub fn fetch_rate<S: RateSource + ?Sized>(source: &S, from: &str, to: &str) -> RateQuote {
    if from.eq_ignore_ascii_case(to) {
        return RateQuote::Rate(Decimal::ONE);
    }
    match source.rate(from, to) {
        RateQuote::Rate(rate) if rate > Decimal::ZERO => RateQuote::Rate(rate),
        _ => RateQuote::Unavailable,
    }
}

#[derive(Debug, Deserialize)]
struct LatestRates {
    rates: BTreeMap<String, Decimal>,
}

/// Rate source backed by the hosted exchange-rate API
/// (`GET {base_url}/{FROM}`, rates keyed by quote code in the body).
pub struct HttpRateSource {
    client: Client,
    base_url: String,
}

impl HttpRateSource {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_RATE_API)
    }

    /// Points the source at a different endpoint with the same response
    /// shape (e.g. a mirror).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl RateSource for HttpRateSource {
    fn rate(&self, from: &str, to: &str) -> RateQuote {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            from.to_ascii_uppercase()
        );

        let resp = match self.client.get(&url).send() {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!("Exchange rate request failed for {from}->{to}: {err}");
                return RateQuote::Unavailable;
            }
        };

        if !resp.status().is_success() {
            tracing::warn!(
                "Exchange rate request for {from}->{to} returned HTTP {}",
                resp.status()
            );
            return RateQuote::Unavailable;
        }

        let parsed: LatestRates = match resp.json() {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!("Malformed exchange rate response for {from}->{to}: {err}");
                return RateQuote::Unavailable;
            }
        };

        match parsed.rates.get(&to.to_ascii_uppercase()) {
            Some(rate) if *rate > Decimal::ZERO => RateQuote::Rate(*rate),
            _ => RateQuote::Unavailable,
        }
    }
}

/// Write guard for rate lookups tied to an in-flight record edit.
///
/// Every edit that kicks off a lookup first calls [`RateSlot::begin`] and
/// holds the returned token. Only the token from the most recent `begin`
/// may commit, so a superseded lookup's late result is a no-op instead of
/// a stale write. No true cancellation is needed.
#[derive(Debug, Default)]
pub struct RateSlot {
    generation: u64,
    rate: Option<Decimal>,
}

impl RateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new lookup, invalidating all previously issued tokens.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Commits a lookup result. Returns false (and changes nothing) when
    /// the token has been superseded by a later `begin`.
    pub fn commit(&mut self, token: u64, quote: RateQuote) -> bool {
        if token != self.generation {
            return false;
        }
        self.rate = match quote {
            RateQuote::Rate(rate) => Some(rate),
            RateQuote::Unavailable => None,
        };
        true
    }

    /// The last committed rate, if the latest lookup produced one.
    pub fn rate(&self) -> Option<Decimal> {
        self.rate
    }
}
