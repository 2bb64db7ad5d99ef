use super::raw::{scan_items, RawItemMedia};
use crate::domain::news::{FeedFetchError, FeedItem, MediaRef, ParsedFeed};
use feed_rs::model::Entry;
use std::collections::{HashMap, HashSet};

/// Parse RSS 0.9x/1.0/2.0, Atom or JSON Feed bytes into normalized items
pub fn parse_feed(bytes: &[u8]) -> Result<ParsedFeed, FeedFetchError> {
    let raw_media = scan_items(bytes);
    let feed = feed_rs::parser::parse(bytes).map_err(|e| FeedFetchError::Parse(e.to_string()))?;

    Ok(ParsedFeed {
        title: feed.title.map(|title| title.content),
        items: feed
            .entries
            .into_iter()
            .map(|entry| adapt_entry(entry, &raw_media))
            .collect(),
    })
}

fn adapt_entry(entry: Entry, raw_media: &HashMap<String, RawItemMedia>) -> FeedItem {
    let link = entry.links.first().map(|link| link.href.clone());
    let raw = link.as_ref().and_then(|link| raw_media.get(link));

    FeedItem {
        id: Some(entry.id.clone()).filter(|id| !id.trim().is_empty()),
        title: entry
            .title
            .as_ref()
            .map(|title| title.content.clone())
            .unwrap_or_default(),
        published: entry.published.or(entry.updated),
        content_html: entry.content.as_ref().and_then(|content| content.body.clone()),
        summary_html: entry.summary.as_ref().map(|summary| summary.content.clone()),
        media: media_refs(&entry, raw),
        link,
    }
}

/// feed-rs folds `<enclosure>` into `media:content`; the raw scan tells the
/// two apart and supplies the ad-hoc image fields.
fn media_refs(entry: &Entry, raw: Option<&RawItemMedia>) -> Vec<MediaRef> {
    let enclosure_urls: HashSet<&str> = raw
        .map(|raw| raw.enclosures.iter().map(|e| e.url.as_str()).collect())
        .unwrap_or_default();

    let mut media = Vec::new();
    for object in &entry.media {
        for thumbnail in &object.thumbnails {
            media.push(MediaRef::Thumbnail(thumbnail.image.uri.clone()));
        }
        for content in &object.content {
            let Some(url) = &content.url else {
                continue;
            };
            let url = url.to_string();
            let mime = content.content_type.as_ref().map(|mime| mime.to_string());
            if enclosure_urls.contains(url.as_str())
                || enclosure_urls.contains(url.trim_end_matches('/'))
            {
                media.push(MediaRef::Enclosure { url, mime });
            } else {
                media.push(MediaRef::Content { url, mime });
            }
        }
    }

    if let Some(raw) = raw {
        for enclosure in &raw.enclosures {
            let known = media
                .iter()
                .any(|m| m.url().trim_end_matches('/') == enclosure.url.trim_end_matches('/'));
            if !known {
                media.push(MediaRef::Enclosure {
                    url: enclosure.url.clone(),
                    mime: enclosure.mime.clone(),
                });
            }
        }
        for (name, url) in &raw.fields {
            media.push(MediaRef::Field {
                name: name.clone(),
                url: url.clone(),
            });
        }
    }

    media
}
