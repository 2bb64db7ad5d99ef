pub mod api;
pub mod error;
pub mod model;
pub mod service;

pub use api::YouTubeApi;
pub use error::{YouTubeError, YouTubeServiceError};
pub use model::{
    ChannelInfo, LiveChannel, LiveVideo, TrendingQuery, TrendingVideo, VideoCategory,
    NEWS_CHANNELS, VIDEO_CATEGORIES,
};
pub use service::YouTubeService;
