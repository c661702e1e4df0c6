//! Result presentation
//!
//! Pure formatting of simplified result values into human-readable text. No
//! function here performs remote calls or panics on missing optional fields:
//! absent values render as an explicit `-` placeholder, and empty listings
//! render as a defined "(no results)" line rather than empty output.

use aws_smithy_types::DateTime;
use chrono::SecondsFormat;
use serde_json::Value;

use crate::dynamodb::TableSummary;
use crate::s3::{BucketSummary, ObjectContent, ObjectSummary};

/// Sentinel line produced for empty listings
pub const NO_RESULTS: &str = "(no results)";

/// Placeholder rendered for absent optional fields
pub const PLACEHOLDER: &str = "-";

/// Render a smithy timestamp as RFC 3339, if it is representable
pub fn rfc3339(dt: &DateTime) -> Option<String> {
    chrono::DateTime::from_timestamp(dt.secs(), dt.subsec_nanos())
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

/// Render label/value pairs as an aligned block
fn key_value_block(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(label, value)| format!("{label:width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a plain list of names, one per line
pub fn listing(items: &[String]) -> String {
    if items.is_empty() {
        return NO_RESULTS.to_string();
    }
    items.join("\n")
}

/// Render a table summary as a label/value block
pub fn table_summary(table: &TableSummary) -> String {
    key_value_block(&[
        ("Name", field(&table.name).to_string()),
        ("Status", field(&table.status).to_string()),
        ("ARN", field(&table.arn).to_string()),
        (
            "Items",
            table
                .item_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
        ("Created", field(&table.created_at).to_string()),
    ])
}

/// One-line view of a table, used in step summaries
pub fn table_line(table: &TableSummary) -> String {
    format!(
        "table {} ({})",
        field(&table.name),
        field(&table.status)
    )
}

/// Render a bucket listing, one bucket per line
pub fn bucket_listing(buckets: &[BucketSummary]) -> String {
    if buckets.is_empty() {
        return NO_RESULTS.to_string();
    }
    buckets
        .iter()
        .map(|b| format!("{}  {}", field(&b.created_at), field(&b.name)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an object listing, one object per line, in provider order
pub fn object_listing(objects: &[ObjectSummary]) -> String {
    if objects.is_empty() {
        return NO_RESULTS.to_string();
    }
    objects
        .iter()
        .map(|o| {
            format!(
                "{:>10}  {}  {}",
                o.size
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
                field(&o.last_modified),
                field(&o.key),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a downloaded object: metadata line plus a text preview when the
/// body is UTF-8
pub fn object_content(content: &ObjectContent) -> String {
    let mut out = format!(
        "{} ({} bytes, {})",
        content.key,
        content.len(),
        content.content_type.as_deref().unwrap_or(PLACEHOLDER)
    );
    if let Some(text) = content.as_text() {
        out.push('\n');
        out.push_str(text);
    }
    out
}

/// Render one optional item as pretty JSON
pub fn item_json(item: Option<&Value>) -> String {
    match item {
        Some(value) => serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| PLACEHOLDER.to_string()),
        None => NO_RESULTS.to_string(),
    }
}

/// Render a list of items as pretty JSON, page order preserved
pub fn items_json(items: &[Value]) -> String {
    if items.is_empty() {
        return NO_RESULTS.to_string();
    }
    serde_json::to_string_pretty(&Value::Array(items.to_vec()))
        .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_table() -> TableSummary {
        TableSummary {
            name: Some("movies".into()),
            status: Some("ACTIVE".into()),
            arn: None,
            item_count: Some(3),
            created_at: None,
        }
    }

    #[test]
    fn empty_listings_have_a_defined_message() {
        assert_eq!(listing(&[]), NO_RESULTS);
        assert_eq!(bucket_listing(&[]), NO_RESULTS);
        assert_eq!(object_listing(&[]), NO_RESULTS);
        assert_eq!(items_json(&[]), NO_RESULTS);
        assert_eq!(item_json(None), NO_RESULTS);
    }

    #[test]
    fn missing_optional_fields_render_as_placeholder() {
        let text = table_summary(&sample_table());
        assert!(text.contains("movies"));
        assert!(text.contains("ACTIVE"));
        assert!(text.lines().any(|l| l.starts_with("ARN") && l.ends_with('-')));
        assert!(text.lines().any(|l| l.starts_with("Created") && l.ends_with('-')));
    }

    #[test]
    fn presenting_is_pure() {
        let table = sample_table();
        assert_eq!(table_summary(&table), table_summary(&table));

        let objects = vec![ObjectSummary {
            key: Some("hello.txt".into()),
            size: Some(11),
            last_modified: None,
            storage_class: None,
        }];
        assert_eq!(object_listing(&objects), object_listing(&objects));
    }

    #[test]
    fn object_listing_preserves_order() {
        let objects: Vec<ObjectSummary> = ["b", "a", "c"]
            .iter()
            .map(|k| ObjectSummary {
                key: Some((*k).to_string()),
                size: Some(1),
                last_modified: None,
                storage_class: None,
            })
            .collect();
        let text = object_listing(&objects);
        let positions: Vec<usize> = ["b", "a", "c"]
            .iter()
            .map(|k| text.find(&format!("  {k}")).unwrap())
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }

    #[test]
    fn item_json_renders_value() {
        let value = json!({"id": "movie-001"});
        let text = item_json(Some(&value));
        assert!(text.contains("movie-001"));
    }

    #[test]
    fn object_content_includes_text_preview() {
        let content = ObjectContent {
            key: "hello.txt".into(),
            content_type: Some("text/plain".into()),
            bytes: b"hi there".to_vec(),
        };
        let text = object_content(&content);
        assert!(text.contains("hello.txt (8 bytes, text/plain)"));
        assert!(text.contains("hi there"));
    }

    #[test]
    fn rfc3339_renders_epoch() {
        let dt = DateTime::from_secs(0);
        assert_eq!(rfc3339(&dt).as_deref(), Some("1970-01-01T00:00:00Z"));
    }
}
