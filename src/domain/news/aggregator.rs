use super::{FeedFetcher, FeedSource, RssArticle};
use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    /// The feed did not answer within the per-feed timeout
    Timeout,
    /// Still pending when the overall deadline passed
    DeadlineExceeded,
    Fetch(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedFailure {
    pub source: String,
    pub url: String,
    pub reason: FailureReason,
}

/// Outcome of one aggregation run. Failing feeds are reported here
/// instead of failing the whole run.
#[derive(Debug, Clone, Default)]
pub struct AggregateReport {
    pub articles: Vec<RssArticle>,
    pub failures: Vec<FeedFailure>,
}

impl AggregateReport {
    /// Every feed failed; an empty result reflects upstream trouble
    pub fn is_degraded(&self) -> bool {
        self.articles.is_empty() && !self.failures.is_empty()
    }
}

pub struct FeedAggregator {
    fetcher: Arc<dyn FeedFetcher>,
    feed_timeout: Duration,
}

impl FeedAggregator {
    pub fn new(fetcher: Arc<dyn FeedFetcher>, feed_timeout: Duration) -> Self {
        Self {
            fetcher,
            feed_timeout,
        }
    }

    pub async fn fetch_feeds(&self, sources: &[FeedSource]) -> AggregateReport {
        self.fetch_feeds_within(sources, None).await
    }

    /// Fetch all sources concurrently, each raced against the per-feed
    /// timeout. With a `ceiling`, feeds still running when it elapses are
    /// abandoned and whatever completed is merged.
    pub async fn fetch_feeds_within(
        &self,
        sources: &[FeedSource],
        ceiling: Option<Duration>,
    ) -> AggregateReport {
        let fetched_at = Utc::now();
        let deadline = ceiling.map(|ceiling| Instant::now() + ceiling);

        let mut pending: FuturesUnordered<_> = sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                let fetcher = self.fetcher.clone();
                let timeout = self.feed_timeout;
                async move {
                    let result = match tokio::time::timeout(timeout, fetcher.fetch(source)).await {
                        Ok(Ok(feed)) => Ok(feed),
                        Ok(Err(e)) => Err(FailureReason::Fetch(e.to_string())),
                        Err(_) => Err(FailureReason::Timeout),
                    };
                    (index, result)
                }
            })
            .collect();

        let mut batches: Vec<Option<Vec<RssArticle>>> = vec![None; sources.len()];
        let mut failures: Vec<(usize, FailureReason)> = Vec::new();
        let mut settled = vec![false; sources.len()];

        loop {
            let next = match deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, pending.next()).await {
                    Ok(next) => next,
                    Err(_) => {
                        tracing::warn!(
                            pending = pending.len(),
                            "Aggregation deadline reached, ignoring slow feeds"
                        );
                        break;
                    }
                },
                None => pending.next().await,
            };

            let Some((index, result)) = next else {
                break;
            };
            settled[index] = true;
            let source = &sources[index];

            match result {
                Ok(feed) => {
                    tracing::debug!(
                        source = %source.name,
                        items = feed.items.len(),
                        "Feed fetched"
                    );
                    let feed_title = feed.title.as_deref();
                    let articles = feed
                        .items
                        .into_iter()
                        .map(|item| RssArticle::from_item(item, source, feed_title, fetched_at))
                        .collect();
                    batches[index] = Some(articles);
                }
                Err(reason) => {
                    tracing::warn!(
                        source = %source.name,
                        url = %source.url,
                        reason = ?reason,
                        "Feed failed"
                    );
                    failures.push((index, reason));
                }
            }
        }
        drop(pending);

        failures.extend(
            settled
                .iter()
                .enumerate()
                .filter(|(_, done)| !**done)
                .map(|(index, _)| (index, FailureReason::DeadlineExceeded)),
        );
        failures.sort_by_key(|(index, _)| *index);

        let articles = merge_articles(batches.into_iter().flatten(), DEFAULT_LIMIT);

        tracing::info!(
            feeds = sources.len(),
            failed = failures.len(),
            articles = articles.len(),
            "Aggregation finished"
        );

        AggregateReport {
            articles,
            failures: failures
                .into_iter()
                .map(|(index, reason)| FeedFailure {
                    source: sources[index].name.clone(),
                    url: sources[index].url.clone(),
                    reason,
                })
                .collect(),
        }
    }
}

/// Flatten per-feed batches (in feed order), keep the first article for
/// each id, sort dated articles newest first, put undated ones after them in
/// their original order, and keep at most `limit`.
pub fn merge_articles(
    batches: impl IntoIterator<Item = Vec<RssArticle>>,
    limit: usize,
) -> Vec<RssArticle> {
    let mut seen = HashSet::new();
    let (mut dated, undated): (Vec<_>, Vec<_>) = batches
        .into_iter()
        .flatten()
        .filter(|article| seen.insert(article.id.clone()))
        .partition(|article| article.published.is_some());

    dated.sort_by(|a, b| b.published.cmp(&a.published));
    dated.extend(undated);
    dated.truncate(limit);
    dated
}
