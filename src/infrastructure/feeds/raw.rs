//! Regex scan over raw RSS for item data `feed-rs` drops or flattens:
//! enclosures and ad-hoc image elements.

use html_escape::decode_html_entities;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Non standard elements some publishers use for the lead image
pub const IMAGE_FIELDS: &[&str] = &["image", "imageUrl", "thumbnail", "featuredImage"];

static ITEM_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<item\b[^>]*>(.*?)</item>").unwrap());

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<link\b[^>]*>\s*(?:<!\[CDATA\[)?\s*(.*?)\s*(?:\]\]>)?\s*</link>").unwrap()
});

static ENCLOSURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<enclosure\b([^>]*)/?>").unwrap());

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b([a-z:]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// `(field_name, element_regex)` for every ad-hoc image element
static FIELD_ELEMENTS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    IMAGE_FIELDS
        .iter()
        .map(|name| {
            let pattern = format!(
                r"(?is)<{name}\b([^>]*?)(?:/>|>\s*(?:<!\[CDATA\[)?\s*(.*?)\s*(?:\]\]>)?\s*</{name}>)"
            );
            (*name, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static NESTED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<url>\s*(.*?)\s*</url>").unwrap());

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEnclosure {
    pub url: String,
    pub mime: Option<String>,
}

/// What the scan recovered for one `<item>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawItemMedia {
    pub enclosures: Vec<RawEnclosure>,
    /// `(element name, url)`
    pub fields: Vec<(String, String)>,
}

/// Media found per item, keyed by the item's `<link>`
pub fn scan_items(xml: &[u8]) -> HashMap<String, RawItemMedia> {
    let mut items = HashMap::new();
    let Ok(xml) = std::str::from_utf8(xml) else {
        return items;
    };

    for block in ITEM_BLOCK.captures_iter(xml).filter_map(|c| c.get(1)) {
        let block = block.as_str();
        let Some(link) = LINK
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|m| decode_entities(m.as_str()))
            .filter(|link| !link.is_empty())
        else {
            continue;
        };

        let media = RawItemMedia {
            enclosures: enclosures(block),
            fields: image_fields(block),
        };
        if media != RawItemMedia::default() {
            items.entry(link).or_insert(media);
        }
    }

    items
}

fn enclosures(block: &str) -> Vec<RawEnclosure> {
    ENCLOSURE
        .captures_iter(block)
        .filter_map(|c| c.get(1))
        .filter_map(|attrs| {
            let attrs = attributes(attrs.as_str());
            let url = attrs.get("url")?.clone();
            Some(RawEnclosure {
                url,
                mime: attrs.get("type").cloned(),
            })
        })
        .collect()
}

fn image_fields(block: &str) -> Vec<(String, String)> {
    FIELD_ELEMENTS
        .iter()
        .filter_map(|(name, element)| {
            let captures = element.captures(block)?;
            let from_attrs = captures
                .get(1)
                .and_then(|attrs| {
                    let attrs = attributes(attrs.as_str());
                    attrs.get("url").or_else(|| attrs.get("href")).cloned()
                });
            let from_body = captures.get(2).map(|body| {
                let body = body.as_str();
                // <image><url>...</url></image>
                NESTED_URL
                    .captures(body)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str())
                    .unwrap_or(body)
                    .to_string()
            });

            from_attrs
                .or(from_body)
                .map(|url| decode_entities(url.trim()))
                .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
                .map(|url| (name.to_string(), url))
        })
        .collect()
}

fn attributes(raw: &str) -> HashMap<String, String> {
    ATTRIBUTE
        .captures_iter(raw)
        .filter_map(|c| {
            let name = c.get(1)?.as_str().to_ascii_lowercase();
            let value = c.get(2).or_else(|| c.get(3))?.as_str();
            Some((name, decode_entities(value)))
        })
        .collect()
}

/// Named and numeric references alike (`&amp;`, `&#038;`, `&#x26;`)
fn decode_entities(value: &str) -> String {
    decode_html_entities(value.trim()).into_owned()
}
