//! Continuation-table merging.

use super::document::ContentItem;

/// Collapse adjacent table fragments that share an identical header row.
///
/// Two tables are continuations iff both have at least one row and their
/// first rows are element-wise equal. The first table keeps its caption
/// and header; the follower contributes every row except its header.
/// Merging is transitive across a run of tables and is interrupted by any
/// non-table item, so a matching table on the far side of a paragraph
/// stays separate. Callers apply this per section and per subsection,
/// never across a boundary.
pub fn merge_continuation_tables(items: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut merged: Vec<ContentItem> = Vec::with_capacity(items.len());
    let mut pending: Option<(Option<String>, Vec<Vec<String>>)> = None;

    for item in items {
        match item {
            ContentItem::Table { caption, rows } => {
                if let Some((_, pending_rows)) = pending.as_mut() {
                    if is_continuation(pending_rows, &rows) {
                        pending_rows.extend(rows.into_iter().skip(1));
                        continue;
                    }
                }
                if let Some((caption, rows)) = pending.take() {
                    merged.push(ContentItem::table(caption, rows));
                }
                pending = Some((caption, rows));
            }
            other => {
                if let Some((caption, rows)) = pending.take() {
                    merged.push(ContentItem::table(caption, rows));
                }
                merged.push(other);
            }
        }
    }

    if let Some((caption, rows)) = pending {
        merged.push(ContentItem::table(caption, rows));
    }

    merged
}

fn is_continuation(pending_rows: &[Vec<String>], rows: &[Vec<String>]) -> bool {
    match (pending_rows.first(), rows.first()) {
        (Some(header), Some(other)) => header == other,
        _ => false,
    }
}
