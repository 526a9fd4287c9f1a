//! Podcast feed `<item>` rendering
//!
//! The layout is fixed (tab indentation, one element per line, no trailing
//! newline) because the fragment is pasted into an existing feed document.

use chrono::NaiveDate;
use quick_xml::escape::escape;

/// MIME type announced in the enclosure
const ENCLOSURE_TYPE: &str = "audio/mp4";

/// Resolved values of one feed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub title: String,
    pub url: String,
    pub size: u64,
    pub duration: u64,
    pub date: NaiveDate,
}

/// Formats an air date as an RFC 1123 publication date
///
/// Episodes count as published at the last second of their air date, UTC.
pub fn pub_date(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y 23:59:59 GMT").to_string()
}

/// Renders the `<item>` fragment
pub fn render_item(fields: &ItemFields) -> String {
    let lines = [
        "\t<item>".to_string(),
        format!("\t\t<title>{}</title>", escape(fields.title.as_str())),
        format!(
            "\t\t<enclosure url=\"{}\" length=\"{}\" type=\"{}\" />",
            escape(fields.url.as_str()),
            fields.size,
            ENCLOSURE_TYPE
        ),
        format!("\t\t<itunes:duration>{}</itunes:duration>", fields.duration),
        format!("\t\t<pubDate>{}</pubDate>", pub_date(fields.date)),
        "\t</item>".to_string(),
    ];

    lines.join("\n")
}
