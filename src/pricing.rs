//! International price suggestions derived from the EUR retail price.
//!
//! The pricing form suggests foreign-currency prices whenever the EUR price
//! changes; the user can take them over verbatim. The formulas are fixed
//! business rules, not live exchange rates, and must stay bit-identical so
//! a given EUR input always produces the same suggestions.

/// Suggested prices for the three mandatory international currencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSuggestions {
    pub usd: f64,
    pub gbp: f64,
    pub aud: f64,
}

/// Compute all three suggestions for a EUR price.
pub fn suggest(eur: f64) -> PriceSuggestions {
    PriceSuggestions {
        usd: suggest_usd(eur),
        gbp: suggest_gbp(eur),
        aud: suggest_aud(eur),
    }
}

/// USD suggestion: next full dollar above EUR x 1.42, minus one cent.
pub fn suggest_usd(eur: f64) -> f64 {
    (eur * 1.42).ceil() - 0.01
}

/// GBP suggestion: EUR x 1.07, snapped to the nearer of the surrounding
/// .99 price points (the lower one on a tie).
pub fn suggest_gbp(eur: f64) -> f64 {
    let raw = eur * 1.07;
    let lo = raw.floor() - 0.01;
    let hi = raw.ceil() - 0.01;
    if (lo - raw).abs() <= (hi - raw).abs() {
        lo
    } else {
        hi
    }
}

/// AUD suggestion: EUR x 2.22, rounded up to a full dollar.
pub fn suggest_aud(eur: f64) -> f64 {
    (eur * 2.22).ceil()
}

/// Render a suggestion the way the form displays and applies it,
/// with exactly two decimal places.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}
