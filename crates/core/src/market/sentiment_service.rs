//! Cached, failure-tolerant sentiment lookup.

use async_trait::async_trait;
use dashmap::DashMap;
use futures::future::join_all;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::market_constants::SENTIMENT_CACHE_TTL_SECS;
use super::sentiment_model::{TrendDirection, TrendSignal};
use super::sentiment_traits::{SentimentProviderTrait, SentimentServiceTrait};

struct CachedSignal {
    signal: TrendSignal,
    fetched_at: Instant,
}

/// Caching layer over an analyst-sentiment provider.
///
/// Lookup order per symbol: fresh cache entry, then a live provider call,
/// then the stale cache entry if the call failed. A symbol with no result at
/// all is reported as absent, which downstream treats as neutral. Failures
/// never propagate: a dead feed degrades the simulation, it does not stop it.
pub struct SentimentService {
    provider: Option<Arc<dyn SentimentProviderTrait>>,
    cache: DashMap<String, CachedSignal>,
    ttl: Duration,
}

impl SentimentService {
    pub fn new(provider: Option<Arc<dyn SentimentProviderTrait>>) -> Self {
        Self::with_ttl(provider, Duration::from_secs(SENTIMENT_CACHE_TTL_SECS))
    }

    pub fn with_ttl(provider: Option<Arc<dyn SentimentProviderTrait>>, ttl: Duration) -> Self {
        Self {
            provider,
            cache: DashMap::new(),
            ttl,
        }
    }

    async fn resolve(&self, symbol: &str) -> Option<TrendSignal> {
        let key = symbol.to_uppercase();

        if let Some(cached) = self.cache.get(&key) {
            if cached.fetched_at.elapsed() < self.ttl {
                return Some(cached.signal.clone());
            }
        }

        let provider = self.provider.as_ref()?;
        match provider.directional_trend(&key).await {
            Ok(signal) => {
                debug!(
                    "Sentiment for {}: {:?} (confidence {:.2})",
                    key, signal.direction, signal.confidence
                );
                self.cache.insert(
                    key,
                    CachedSignal {
                        signal: signal.clone(),
                        fetched_at: Instant::now(),
                    },
                );
                Some(signal)
            }
            Err(e) => {
                warn!("Failed to fetch sentiment for {}: {}", key, e);
                // Serve stale data rather than nothing.
                self.cache.get(&key).map(|cached| cached.signal.clone())
            }
        }
    }
}

#[async_trait]
impl SentimentServiceTrait for SentimentService {
    async fn directions(&self, symbols: &[String]) -> HashMap<String, TrendDirection> {
        let unique: HashSet<&String> = symbols.iter().collect();
        let lookups = unique.into_iter().map(|symbol| async move {
            let signal = self.resolve(symbol).await?;
            Some((symbol.clone(), signal.direction))
        });
        join_all(lookups).await.into_iter().flatten().collect()
    }
}
