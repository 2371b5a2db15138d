//! Salary normalization into the platform's canonical currency.
//!
//! Resumes store two salary pairs: the figures as stated in the document
//! (original currency) and the converted KZT figures used for comparison.
//! When no rate can be resolved the converted pair is left empty: a missing
//! rate must never block resume persistence.

use tracing::{info, warn};

use super::RateSource;

/// The platform's canonical currency. All normalized salary figures are KZT.
pub const CANONICAL_CURRENCY: &str = "KZT";

/// Converts a desired salary range into KZT.
///
/// Canonical-currency input is returned unchanged. Otherwise each non-null
/// bound is multiplied by the feed rate and rounded to 2 decimal places;
/// an unavailable rate degrades both bounds to `None`.
pub async fn normalize_salary(
    rates: &dyn RateSource,
    min_salary: Option<f64>,
    max_salary: Option<f64>,
    currency: &str,
) -> (Option<f64>, Option<f64>) {
    if currency.trim().eq_ignore_ascii_case(CANONICAL_CURRENCY) {
        return (min_salary, max_salary);
    }

    match rates.tenge_rate(currency).await {
        Ok(Some(rate)) => {
            let converted = (
                min_salary.map(|v| round2(v * rate)),
                max_salary.map(|v| round2(v * rate)),
            );
            info!(
                "converted salary {min_salary:?}-{max_salary:?} {currency} -> {:?}-{:?} KZT (rate: {rate})",
                converted.0, converted.1
            );
            converted
        }
        Ok(None) => {
            warn!("no {currency} rate in feed, leaving normalized salary empty");
            (None, None)
        }
        Err(e) => {
            warn!("rate feed unavailable ({e}), leaving normalized salary empty");
            (None, None)
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
