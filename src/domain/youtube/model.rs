use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION_CODE: &str = "NG";
pub const DEFAULT_CATEGORY_ID: &str = "25";
pub const DEFAULT_MAX_RESULTS: u32 = 20;
pub const MAX_RESULTS_CAP: u32 = 50;

pub struct ChannelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub channel_id: &'static str,
    pub description: &'static str,
}

/// News channels offered on the live page
pub const NEWS_CHANNELS: &[ChannelInfo] = &[
    ChannelInfo {
        id: "channels-tv",
        name: "Channels Television",
        channel_id: "UCEXGDNclvmg6RW0vipJYsTQ",
        description: "Nigerian news and current affairs",
    },
    ChannelInfo {
        id: "aljazeera",
        name: "Al Jazeera English",
        channel_id: "UCNye-wNBqNL5ZzHSJj3l8Bg",
        description: "International news from Doha",
    },
    ChannelInfo {
        id: "bbc-news",
        name: "BBC News",
        channel_id: "UC16niRr50-MSBwiO3YDb3RA",
        description: "UK and world news",
    },
    ChannelInfo {
        id: "sky-news",
        name: "Sky News",
        channel_id: "UCoMdktPbSTixAyNGwb-UYkQ",
        description: "Breaking news from the UK",
    },
    ChannelInfo {
        id: "dw-news",
        name: "DW News",
        channel_id: "UCknLrEdhRCp1aegoMqRaCZg",
        description: "German international broadcaster",
    },
    ChannelInfo {
        id: "france24",
        name: "France 24 English",
        channel_id: "UCQfwfsi5VrQ8yKZ-UWmAEFg",
        description: "International news from Paris",
    },
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoCategory {
    pub id: String,
    pub title: String,
}

pub const VIDEO_CATEGORIES: &[(&str, &str)] = &[
    ("25", "News & Politics"),
    ("17", "Sports"),
    ("24", "Entertainment"),
    ("10", "Music"),
    ("28", "Science & Technology"),
    ("22", "People & Blogs"),
];

/// A broadcast currently live on a channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveVideo {
    pub video_id: String,
    pub title: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveChannel {
    pub id: String,
    pub name: String,
    pub channel_id: String,
    pub description: String,
    pub is_live: bool,
    pub live_video: Option<LiveVideo>,
}

impl LiveChannel {
    pub fn offline(channel: &ChannelInfo) -> Self {
        Self {
            id: channel.id.to_string(),
            name: channel.name.to_string(),
            channel_id: channel.channel_id.to_string(),
            description: channel.description.to_string(),
            is_live: false,
            live_video: None,
        }
    }
}

/// `GET /api/youtube/trending` query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingQuery {
    pub region_code: Option<String>,
    pub category_id: Option<String>,
    pub max_results: Option<u32>,
}

impl TrendingQuery {
    /// Fill in defaults and clamp the page size
    pub fn resolve(&self) -> (String, String, u32) {
        let region = self
            .region_code
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_REGION_CODE)
            .to_uppercase();
        let category = self
            .category_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_ID)
            .to_string();
        let max = self
            .max_results
            .unwrap_or(DEFAULT_MAX_RESULTS)
            .clamp(1, MAX_RESULTS_CAP);
        (region, category, max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: Option<String>,
    pub thumbnail: Option<String>,
    pub view_count: Option<String>,
}
