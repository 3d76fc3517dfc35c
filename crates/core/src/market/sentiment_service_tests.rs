//! Unit tests for the cached sentiment service.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::market_errors::MarketDataError;
use super::sentiment_model::{TrendDirection, TrendSignal};
use super::sentiment_service::SentimentService;
use super::sentiment_traits::{SentimentProviderTrait, SentimentServiceTrait};

struct MockSentimentProvider {
    direction: TrendDirection,
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl MockSentimentProvider {
    fn new(direction: TrendDirection) -> Self {
        Self {
            direction,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl SentimentProviderTrait for MockSentimentProvider {
    fn name(&self) -> &'static str {
        "MOCK"
    }

    async fn directional_trend(
        &self,
        symbol: &str,
    ) -> std::result::Result<TrendSignal, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(MarketDataError::ProviderError("feed offline".to_string()));
        }
        Ok(TrendSignal {
            symbol: symbol.to_string(),
            direction: self.direction,
            confidence: 0.8,
            source: "Mock Analyst Sentiment".to_string(),
        })
    }
}

#[tokio::test]
async fn second_lookup_is_served_from_cache() {
    let provider = Arc::new(MockSentimentProvider::new(TrendDirection::Up));
    let service = SentimentService::new(Some(provider.clone()));

    let symbols = vec!["TECHX".to_string()];
    let first = service.directions(&symbols).await;
    let second = service.directions(&symbols).await;

    assert_eq!(first.get("TECHX"), Some(&TrendDirection::Up));
    assert_eq!(second.get("TECHX"), Some(&TrendDirection::Up));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn provider_failure_falls_back_to_stale_cache() {
    let provider = Arc::new(MockSentimentProvider::new(TrendDirection::Down));
    // Zero TTL so every cache entry is immediately stale.
    let service = SentimentService::with_ttl(Some(provider.clone()), Duration::from_secs(0));

    let symbols = vec!["AUTOZ".to_string()];
    let first = service.directions(&symbols).await;
    assert_eq!(first.get("AUTOZ"), Some(&TrendDirection::Down));

    provider.fail.store(true, Ordering::SeqCst);
    let degraded = service.directions(&symbols).await;
    assert_eq!(degraded.get("AUTOZ"), Some(&TrendDirection::Down));
}

#[tokio::test]
async fn failure_with_empty_cache_leaves_symbol_absent() {
    let provider = Arc::new(MockSentimentProvider::new(TrendDirection::Up));
    provider.fail.store(true, Ordering::SeqCst);
    let service = SentimentService::new(Some(provider));

    let symbols = vec!["GREENNRG".to_string()];
    let result = service.directions(&symbols).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn no_provider_means_no_signals() {
    let service = SentimentService::new(None);
    let symbols = vec!["TECHX".to_string(), "FINCORP".to_string()];
    let result = service.directions(&symbols).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn duplicate_symbols_are_resolved_once() {
    let provider = Arc::new(MockSentimentProvider::new(TrendDirection::Up));
    let service = SentimentService::new(Some(provider.clone()));

    let symbols = vec!["TECHX".to_string(), "TECHX".to_string()];
    let result = service.directions(&symbols).await;
    assert_eq!(result.len(), 1);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}
