//! Exchange rate resolution against the National Bank currency feed.
//!
//! The feed is an RSS/XML document with repeated `<item>` entries; each item
//! carries the currency code in `<title>` and the KZT rate in `<description>`.
//! Rate strings may use a comma as the decimal separator.

pub mod salary;

use std::time::Duration;

use async_trait::async_trait;
use quick_xml::events::Event;
use thiserror::Error;
use tracing::{info, warn};

/// Bounded timeout for the feed request. A slow feed must not hang the
/// salary-normalization stage.
const FEED_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RateFeedError {
    #[error("rate feed request failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Source of currency-to-KZT conversion rates.
///
/// `Ok(None)` means the feed answered but has no entry for the code; callers
/// treat both that and `Err(_)` as "conversion unavailable", never as fatal.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn tenge_rate(&self, currency: &str) -> Result<Option<f64>, RateFeedError>;
}

/// `RateSource` backed by the National Bank RSS feed.
pub struct NationalBankRates {
    client: reqwest::Client,
    feed_url: String,
}

impl NationalBankRates {
    pub fn new(feed_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FEED_TIMEOUT)
                .build()
                .expect("Failed to build rate feed HTTP client"),
            feed_url,
        }
    }
}

#[async_trait]
impl RateSource for NationalBankRates {
    async fn tenge_rate(&self, currency: &str) -> Result<Option<f64>, RateFeedError> {
        let body = self
            .client
            .get(&self.feed_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rate = parse_feed_rate(&body, currency);
        match rate {
            Some(r) => info!("exchange rate {} -> KZT: {r}", currency.to_uppercase()),
            None => warn!("exchange rate {} not present in feed", currency.to_uppercase()),
        }
        Ok(rate)
    }
}

/// Scans the feed payload for an `<item>` whose `<title>` equals the
/// uppercased currency code and parses its `<description>` as the rate.
/// A malformed feed yields `None` rather than an error.
pub(crate) fn parse_feed_rate(xml: &str, currency: &str) -> Option<f64> {
    enum Field {
        Title,
        Description,
    }

    let wanted = currency.trim().to_uppercase();
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut current: Option<Field> = None;
    let mut item_title: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                current = match e.name().as_ref() {
                    b"title" => Some(Field::Title),
                    b"description" => Some(Field::Description),
                    _ => {
                        if e.name().as_ref() == b"item" {
                            item_title = None;
                        }
                        None
                    }
                };
            }
            Ok(Event::Text(e)) => {
                if let Ok(text) = e.decode() {
                    let text = text.trim();
                    match current {
                        Some(Field::Title) => item_title = Some(text.to_string()),
                        Some(Field::Description)
                            if item_title.as_deref() == Some(wanted.as_str()) =>
                        {
                            if let Ok(rate) = text.replace(',', ".").parse::<f64>() {
                                return Some(rate);
                            }
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::End(_)) => current = None,
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!("rate feed XML is malformed: {e}");
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    None
}
