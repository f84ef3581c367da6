//! Search engine metadata: page meta tags, schema.org data, sitemap

use serde_json::json;

use crate::constants::{SITE_NAME, SITE_TAGLINE};
use crate::model::Entry;

/// Head tags of an entry page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Empty when the entry has no image
    pub image: String,
    pub url: String,
}

pub fn meta_tags(entry: &Entry, site_url: &str) -> MetaTags {
    let keywords = if entry.keyword_list().is_empty() {
        format!("{}, Indian heritage, {}", entry.category, entry.location)
    } else {
        entry.keyword_list().join(", ")
    };

    MetaTags {
        title: format!("{} | {SITE_NAME} - {SITE_TAGLINE}", entry.title),
        description: entry.description(),
        keywords,
        image: entry.cover_image().unwrap_or_default().to_string(),
        url: entry.permalink(site_url),
    }
}

/// schema.org `Article` for the entry page
pub fn structured_data(entry: &Entry, site_url: &str) -> serde_json::Value {
    let site_url = site_url.trim_end_matches('/');
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": entry.title,
        "description": entry.description(),
        "image": entry.image_urls,
        "datePublished": entry.created_at,
        "dateModified": entry.updated_at,
        "author": {
            "@type": "Person",
            "name": entry.author_name().unwrap_or(SITE_NAME),
        },
        "publisher": {
            "@type": "Organization",
            "name": SITE_NAME,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{site_url}/logo.png"),
            },
        },
    })
}

/// Sitemap with the site root followed by every entry page
pub fn sitemap(entries: &[Entry], site_url: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    xml.push_str(&format!(
        "  <url>\n    <loc>{}</loc>\n    <changefreq>daily</changefreq>\n    <priority>1.0</priority>\n  </url>\n",
        escape_xml(site_url)
    ));

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&entry.permalink(site_url))
        ));
        if let Some(modified) = entry.updated_at.or(entry.created_at) {
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                modified.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
            ));
        }
        xml.push_str("    <changefreq>weekly</changefreq>\n");
        xml.push_str("    <priority>0.8</priority>\n");
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_meta_tags_fallback_keywords() {
        let entry = test::entry_fixture("E1", "hampi-temple");
        let tags = meta_tags(&entry, "https://bharat.example");
        assert_eq!(
            tags.title,
            format!("{} | BharatArchive - Indian Cultural Heritage", entry.title)
        );
        assert_eq!(
            tags.keywords,
            format!("temple, Indian heritage, {}", entry.location)
        );
        assert_eq!(tags.url, "https://bharat.example/entry/hampi-temple");
    }

    #[test]
    fn test_meta_tags_joined_keywords() {
        let mut entry = test::entry_fixture("E1", "hampi-temple");
        entry.keywords = Some(vec!["hampi".to_string(), "vijayanagara".to_string()]);
        assert_eq!(meta_tags(&entry, "http://site").keywords, "hampi, vijayanagara");
    }

    #[test]
    fn test_structured_data_author_fallback() {
        let entry = test::entry_fixture("E1", "hampi-temple");
        let data = structured_data(&entry, "https://bharat.example/");
        assert_eq!(data["@type"], "Article");
        assert_eq!(data["author"]["name"], "BharatArchive");
        assert_eq!(
            data["publisher"]["logo"]["url"],
            "https://bharat.example/logo.png"
        );
    }

    #[test]
    fn test_sitemap_lists_root_and_entries() {
        let mut entry = test::entry_fixture("E1", "hampi-temple");
        entry.updated_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        let xml = sitemap(&[entry], "https://bharat.example/");

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://bharat.example</loc>\n    <changefreq>daily</changefreq>\n    <priority>1.0</priority>"));
        assert!(xml.contains("<loc>https://bharat.example/entry/hampi-temple</loc>"));
        assert!(xml.contains("<lastmod>2024-03-01T12:00:00.000Z</lastmod>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.ends_with("</urlset>"));
    }
}
