use super::{
    AggregateReport, FeedAggregator, FeedCatalog, NewsError, Region, RssArticle, DEFAULT_LIMIT,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

const HOMEPAGE_KEY: &str = "homepage";
const CACHE_CAPACITY: u64 = 64;

/// Serves aggregated news per region, caching each region's merged list
/// for a short time so repeated requests do not refetch every feed.
pub struct NewsService {
    catalog: FeedCatalog,
    aggregator: FeedAggregator,
    cache: Cache<String, Arc<Vec<RssArticle>>>,
    homepage_ceiling: Duration,
}

impl NewsService {
    pub fn new(
        catalog: FeedCatalog,
        aggregator: FeedAggregator,
        cache_ttl: Duration,
        homepage_ceiling: Duration,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(cache_ttl)
            .build();

        Self {
            catalog,
            aggregator,
            cache,
            homepage_ceiling,
        }
    }

    pub async fn region_news(
        &self,
        region: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RssArticle>, NewsError> {
        let region: Region = region
            .parse()
            .map_err(|_| NewsError::UnknownRegion(region.to_string()))?;

        let articles = match self.cache.get(region.slug()).await {
            Some(articles) => {
                tracing::debug!(region = %region, "News cache hit");
                articles
            }
            None => {
                let report = self
                    .aggregator
                    .fetch_feeds(self.catalog.sources(region))
                    .await;
                self.remember(region.slug(), report).await
            }
        };

        Ok(take(&articles, limit))
    }

    /// All regions at once, bounded by the homepage ceiling
    pub async fn homepage_news(&self, limit: Option<usize>) -> Vec<RssArticle> {
        let articles = match self.cache.get(HOMEPAGE_KEY).await {
            Some(articles) => articles,
            None => {
                let report = self
                    .aggregator
                    .fetch_feeds_within(&self.catalog.all_sources(), Some(self.homepage_ceiling))
                    .await;
                self.remember(HOMEPAGE_KEY, report).await
            }
        };

        take(&articles, limit)
    }

    /// A run where every feed failed is served but not cached, so the next
    /// request tries upstream again.
    async fn remember(&self, key: &str, report: AggregateReport) -> Arc<Vec<RssArticle>> {
        let degraded = report.is_degraded();
        let articles = Arc::new(report.articles);
        if degraded {
            tracing::warn!(
                key,
                failures = report.failures.len(),
                "Every feed failed, not caching"
            );
        } else {
            self.cache.insert(key.to_string(), articles.clone()).await;
        }
        articles
    }
}

fn take(articles: &[RssArticle], limit: Option<usize>) -> Vec<RssArticle> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, DEFAULT_LIMIT);
    articles.iter().take(limit).cloned().collect()
}
