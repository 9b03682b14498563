//! Static currency metadata and display formatting.
//!
//! The table is process-wide and read-only. Unknown codes are still
//! usable everywhere; they just render with the code in place of a symbol.

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub label: &'static str,
    pub symbol: &'static str,
}

/// Default base currency foreign records convert into.
pub const BASE_CURRENCY: &str = "TRY";

pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo {
        code: "TRY",
        label: "TRY - Turkish Lira",
        symbol: "₺",
    },
    CurrencyInfo {
        code: "USD",
        label: "USD - US Dollar",
        symbol: "$",
    },
    CurrencyInfo {
        code: "EUR",
        label: "EUR - Euro",
        symbol: "€",
    },
];

pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Display symbol for a code, falling back to the code itself.
pub fn currency_symbol(code: &str) -> &str {
    match currency_info(code) {
        Some(info) => info.symbol,
        None => code,
    }
}

/// Renders an amount as `<symbol><grouped integer>.<2dp>`, e.g. `₺1,234.50`.
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let abs = rounded.abs().to_string();

    let (int_part, frac_part) = match abs.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (abs, "00".to_string()),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        currency_symbol(code),
        grouped,
        frac_part
    )
}
