pub mod aggregator;
pub mod article;
pub mod catalog;
pub mod error;
pub mod fetcher;
pub mod image;
pub mod item;
pub mod service;

pub use aggregator::{
    merge_articles, AggregateReport, FailureReason, FeedAggregator, FeedFailure, DEFAULT_LIMIT,
};
pub use article::RssArticle;
pub use catalog::{FeedCatalog, FeedSource, Region};
pub use error::NewsError;
pub use fetcher::{FeedFetchError, FeedFetcher};
pub use image::{extract_image, fallback_image, is_valid_image_url};
pub use item::{FeedItem, MediaRef, ParsedFeed};
pub use service::NewsService;
