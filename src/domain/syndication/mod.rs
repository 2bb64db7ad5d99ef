//! RSS 2.0 output for admin-authored articles.

use crate::domain::article::Article;
use chrono::Utc;
use rss::extension::atom::{AtomExtension, Link};
use rss::{
    CategoryBuilder, ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder,
    SourceBuilder,
};
use std::collections::BTreeMap;

pub const MAX_ITEMS: usize = 50;
const DEFAULT_CATEGORY: &str = "General";
pub const ALL_CATEGORIES: &str = "all";
const RSS_MIME: &str = "application/rss+xml";
const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Channel level metadata for a generated feed
#[derive(Debug, Clone)]
pub struct ChannelInfo {
    pub site_name: String,
    pub site_url: String,
}

/// Escape the five XML special characters for text spliced into markup
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Published articles whose category contains `category`, ignoring case.
/// `all` (or an empty category) keeps every published article, categorized or
/// not; uncategorized ones are never listed under a specific category.
pub fn select_articles<'a>(category: &str, articles: &'a [Article]) -> Vec<&'a Article> {
    let wanted = category.trim().to_lowercase();
    let everything = wanted.is_empty() || wanted == ALL_CATEGORIES;

    articles
        .iter()
        .filter(|article| article.is_published())
        .filter(|article| {
            if everything {
                return true;
            }
            article
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&wanted))
        })
        .take(MAX_ITEMS)
        .collect()
}

pub fn generate_rss_feed(category: &str, articles: &[Article], channel: &ChannelInfo) -> String {
    let site_url = channel.site_url.trim_end_matches('/');
    let slug = category.trim().to_lowercase();
    let slug = if slug.is_empty() { ALL_CATEGORIES } else { slug.as_str() };
    let title = if slug == ALL_CATEGORIES {
        channel.site_name.clone()
    } else {
        format!("{} - {}", channel.site_name, title_case(slug))
    };

    let mut self_link = Link::default();
    self_link.set_href(format!("{}/rss/{}.xml", site_url, urlencoding::encode(slug)));
    self_link.set_rel("self");
    self_link.set_mime_type(Some(RSS_MIME.to_string()));
    let mut atom_ext = AtomExtension::default();
    atom_ext.set_links(vec![self_link]);

    let namespaces = BTreeMap::from([("atom".to_string(), ATOM_NAMESPACE.to_string())]);

    let items: Vec<Item> = select_articles(slug, articles)
        .into_iter()
        .map(|article| item(article, site_url))
        .collect();

    ChannelBuilder::default()
        .title(title)
        .link(site_url)
        .description(format!("Latest {} news from {}", slug, channel.site_name))
        .language(Some("en".to_string()))
        .last_build_date(Some(Utc::now().to_rfc2822()))
        .namespaces(namespaces)
        .atom_ext(Some(atom_ext))
        .items(items)
        .build()
        .to_string()
}

fn item(article: &Article, site_url: &str) -> Item {
    let link = format!("{}/article/{}", site_url, article.id);
    let category = article
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CATEGORY);

    let enclosure = article.image.as_deref().filter(|i| !i.is_empty()).map(|image| {
        EnclosureBuilder::default()
            .url(image)
            .length("0")
            .mime_type(image_mime(image))
            .build()
    });

    let source = article.source.as_deref().filter(|s| !s.is_empty()).map(|source| {
        SourceBuilder::default()
            .url(site_url)
            .title(Some(source.to_string()))
            .build()
    });

    ItemBuilder::default()
        .title(Some(article.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().value(link).permalink(true).build()))
        .pub_date(Some(article.date.to_rfc2822()))
        .description(Some(article.excerpt.clone().unwrap_or_default()))
        .author(article.author.clone().filter(|a| !a.is_empty()))
        .categories(vec![CategoryBuilder::default().name(category).build()])
        .enclosure(enclosure)
        .source(source)
        .build()
}

fn image_mime(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        _ => "image/jpeg",
    }
}

fn title_case(slug: &str) -> String {
    slug.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
