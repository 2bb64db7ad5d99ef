use super::{FeedItem, MediaRef};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const GENERIC_NEWS_IMAGE: &str =
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&q=80";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "avif", "bmp", "svg"];

/// Keyword sets checked in order against the lowercased title
const KEYWORD_IMAGES: &[(&[&str], &str)] = &[
    (
        &["football", "soccer", "sport", "match", "league", "fifa", "goal", "olympic", "athlet"],
        "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=800&q=80",
    ),
    (
        &["election", "president", "senate", "governor", "minister", "politic", "parliament", "vote", "government"],
        "https://images.unsplash.com/photo-1529107386315-e1a2ed48a620?w=800&q=80",
    ),
    (
        &["economy", "naira", "market", "stock", "bank", "inflation", "business", "oil", "trade", "price"],
        "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&q=80",
    ),
    (
        &["health", "hospital", "covid", "disease", "doctor", "medical", "vaccine", "outbreak"],
        "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&q=80",
    ),
    (
        &["tech", "artificial intelligence", "startup", "digital", "internet", "software", "cyber"],
        "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&q=80",
    ),
    (
        &["police", "court", "crime", "arrest", "attack", "judge", "prison"],
        "https://images.unsplash.com/photo-1589578527966-fdac0f44566c?w=800&q=80",
    ),
    (
        &["weather", "flood", "rain", "storm", "climate"],
        "https://images.unsplash.com/photo-1534088568595-a066f410bcda?w=800&q=80",
    ),
    (
        &["music", "movie", "film", "nollywood", "celebrity", "entertainment", "actor", "actress"],
        "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=800&q=80",
    ),
    (
        &["school", "education", "student", "university", "exam"],
        "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=800&q=80",
    ),
];

static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?\bsrc\s*=\s*["']([^"']+)["']"#).unwrap()
});

static REJECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        logo | placeholder | favicon
        | (blank|spacer|pixel|transparent)\.gif
        | (^|[/_.\-])icons?([/_.\-]|$)
        | 16x16 | 32x32 | \b1x1\b | width=1([^0-9]|$)
        | avatar | gravatar | profile_images
        | facebook\.com | twitter\.com | fbcdn | pbs\.twimg\.com/profile
        ",
    )
    .unwrap()
});

/// Pick the most representative image for an item. Never empty.
pub fn extract_image(item: &FeedItem) -> String {
    let from_markup = [item.content_html.as_deref(), item.summary_html.as_deref()]
        .into_iter()
        .flatten()
        .find_map(first_valid_img);

    from_markup
        .or_else(|| from_media(item, |m| matches!(m, MediaRef::Thumbnail(_))))
        .or_else(|| from_media(item, |m| matches!(m, MediaRef::Content { .. })))
        .or_else(|| from_media(item, |m| matches!(m, MediaRef::Enclosure { .. })))
        .or_else(|| from_media(item, |m| matches!(m, MediaRef::Field { .. })))
        .unwrap_or_else(|| fallback_image(&item.title).to_string())
}

fn first_valid_img(html: &str) -> Option<String> {
    IMG_SRC
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|m| normalize_url(m.as_str()))
        .find(|url| is_valid_image_url(url))
}

fn from_media(item: &FeedItem, kind: impl Fn(&MediaRef) -> bool) -> Option<String> {
    item.media
        .iter()
        .filter(|media| kind(media))
        .find_map(|media| {
            let url = normalize_url(media.url());
            is_acceptable_media(media, &url).then_some(url)
        })
}

/// Media elements that declare an image type may point at extensionless CDN
/// URLs; those only have to pass the rejection patterns.
fn is_acceptable_media(media: &MediaRef, url: &str) -> bool {
    let declared_image = match media {
        MediaRef::Thumbnail(_) => true,
        MediaRef::Content { mime, .. } | MediaRef::Enclosure { mime, .. } => mime
            .as_deref()
            .is_some_and(|mime| mime.to_ascii_lowercase().starts_with("image/")),
        MediaRef::Field { .. } => false,
    };

    if declared_image {
        parse_http(url).is_some() && !REJECTED.is_match(url)
    } else {
        is_valid_image_url(url)
    }
}

fn normalize_url(raw: &str) -> String {
    let url = raw.trim().replace("&amp;", "&");
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url
    }
}

fn parse_http(url: &str) -> Option<Url> {
    Url::parse(url)
        .ok()
        .filter(|parsed| matches!(parsed.scheme(), "http" | "https"))
}

/// http(s), looks like an image, and is not a logo, tracker or avatar
pub fn is_valid_image_url(url: &str) -> bool {
    let Some(parsed) = parse_http(url) else {
        return false;
    };
    if REJECTED.is_match(url) {
        return false;
    }

    let path = parsed.path().to_ascii_lowercase();
    let has_extension = path
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext));

    has_extension || path.contains("image") || path.contains("photo")
}

/// Stock image chosen from title keywords
pub fn fallback_image(title: &str) -> &'static str {
    let title = title.to_lowercase();
    KEYWORD_IMAGES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| title.contains(keyword)))
        .map(|(_, url)| *url)
        .unwrap_or(GENERIC_NEWS_IMAGE)
}
