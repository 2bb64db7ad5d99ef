use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// News regions served under `/api/news/:region`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Nigerian,
    World,
    Sports,
    Ghana,
    Kenya,
    SouthAfrica,
    Uk,
    Usa,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Nigerian,
        Region::World,
        Region::Sports,
        Region::Ghana,
        Region::Kenya,
        Region::SouthAfrica,
        Region::Uk,
        Region::Usa,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Region::Nigerian => "nigerian",
            Region::World => "world",
            Region::Sports => "sports",
            Region::Ghana => "ghana",
            Region::Kenya => "kenya",
            Region::SouthAfrica => "south-africa",
            Region::Uk => "uk",
            Region::Usa => "usa",
        }
    }

    /// Category label attached to every article from this region
    pub fn label(&self) -> &'static str {
        match self {
            Region::Nigerian => "Nigeria",
            Region::World => "World",
            Region::Sports => "Sports",
            Region::Ghana => "Ghana",
            Region::Kenya => "Kenya",
            Region::SouthAfrica => "South Africa",
            Region::Uk => "UK",
            Region::Usa => "USA",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown region: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
    pub category: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            category: category.into(),
        }
    }
}

const BUILTIN_FEEDS: &[(Region, &str, &str)] = &[
    (Region::Nigerian, "Punch", "https://punchng.com/feed/"),
    (Region::Nigerian, "Vanguard", "https://www.vanguardngr.com/feed/"),
    (Region::Nigerian, "Premium Times", "https://www.premiumtimesng.com/feed"),
    (Region::Nigerian, "The Guardian Nigeria", "https://guardian.ng/feed/"),
    (Region::Nigerian, "Channels TV", "https://www.channelstv.com/feed/"),
    (Region::Nigerian, "TheCable", "https://www.thecable.ng/feed"),
    (Region::Nigerian, "Daily Trust", "https://dailytrust.com/feed/"),
    (Region::Nigerian, "Sahara Reporters", "https://saharareporters.com/feeds/latest/feed"),
    (Region::World, "BBC World", "https://feeds.bbci.co.uk/news/world/rss.xml"),
    (Region::World, "Al Jazeera", "https://www.aljazeera.com/xml/rss/all.xml"),
    (Region::World, "New York Times World", "https://rss.nytimes.com/services/xml/rss/nyt/World.xml"),
    (Region::World, "The Guardian World", "https://www.theguardian.com/world/rss"),
    (Region::World, "CNN World", "http://rss.cnn.com/rss/edition_world.rss"),
    (Region::World, "DW", "https://rss.dw.com/rdf/rss-en-world"),
    (Region::Sports, "BBC Sport", "https://feeds.bbci.co.uk/sport/rss.xml"),
    (Region::Sports, "ESPN", "https://www.espn.com/espn/rss/news"),
    (Region::Sports, "Sky Sports", "https://www.skysports.com/rss/12040"),
    (Region::Sports, "The Guardian Football", "https://www.theguardian.com/football/rss"),
    (Region::Sports, "Complete Sports", "https://www.completesports.com/feed/"),
    (Region::Ghana, "GhanaWeb", "https://www.ghanaweb.com/GhanaHomePage/NewsArchive/rss.xml"),
    (Region::Ghana, "MyJoyOnline", "https://www.myjoyonline.com/feed/"),
    (Region::Ghana, "Citi Newsroom", "https://citinewsroom.com/feed/"),
    (Region::Ghana, "Graphic Online", "https://www.graphic.com.gh/news.feed?type=rss"),
    (Region::Kenya, "The Standard", "https://www.standardmedia.co.ke/rss/headlines.php"),
    (Region::Kenya, "The Star", "https://www.the-star.co.ke/rss"),
    (Region::Kenya, "Capital FM", "https://www.capitalfm.co.ke/news/feed/"),
    (Region::Kenya, "Kenyans.co.ke", "https://www.kenyans.co.ke/feeds/news"),
    (Region::SouthAfrica, "News24", "https://feeds.news24.com/articles/news24/TopStories/rss"),
    (Region::SouthAfrica, "TimesLIVE", "https://www.timeslive.co.za/rss/"),
    (Region::SouthAfrica, "Daily Maverick", "https://www.dailymaverick.co.za/dmrss/"),
    (Region::SouthAfrica, "Mail & Guardian", "https://mg.co.za/feed/"),
    (Region::Uk, "BBC UK", "https://feeds.bbci.co.uk/news/uk/rss.xml"),
    (Region::Uk, "The Guardian UK", "https://www.theguardian.com/uk-news/rss"),
    (Region::Uk, "Sky News", "https://feeds.skynews.com/feeds/rss/uk.xml"),
    (Region::Uk, "The Independent", "https://www.independent.co.uk/news/uk/rss"),
    (Region::Usa, "NPR", "https://feeds.npr.org/1001/rss.xml"),
    (Region::Usa, "New York Times US", "https://rss.nytimes.com/services/xml/rss/nyt/US.xml"),
    (Region::Usa, "CBS News", "https://www.cbsnews.com/latest/rss/main"),
    (Region::Usa, "ABC News", "https://abcnews.go.com/abcnews/usheadlines"),
    (Region::Usa, "Fox News", "https://moxie.foxnews.com/google-publisher/us.xml"),
];

/// Static list of feed sources per region
#[derive(Debug, Clone, Default)]
pub struct FeedCatalog {
    feeds: HashMap<Region, Vec<FeedSource>>,
}

impl FeedCatalog {
    pub fn new(feeds: HashMap<Region, Vec<FeedSource>>) -> Self {
        Self { feeds }
    }

    pub fn builtin() -> Self {
        let mut feeds: HashMap<Region, Vec<FeedSource>> = HashMap::new();
        for (region, name, url) in BUILTIN_FEEDS {
            feeds
                .entry(*region)
                .or_default()
                .push(FeedSource::new(*name, *url, region.label()));
        }
        Self { feeds }
    }

    pub fn sources(&self, region: Region) -> &[FeedSource] {
        self.feeds.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every source across regions in region order, each URL once
    pub fn all_sources(&self) -> Vec<FeedSource> {
        let mut seen = HashSet::new();
        Region::ALL
            .iter()
            .flat_map(|region| self.sources(*region))
            .filter(|source| seen.insert(source.url.clone()))
            .cloned()
            .collect()
    }
}
