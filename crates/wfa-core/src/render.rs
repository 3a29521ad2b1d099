//! Confluence storage-format rendering of a [`SummaryResult`]

use crate::SummaryResult;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Escape text for interpolation into storage-format (XHTML) markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the page body for a summary.
///
/// Every interpolated value is escaped; description newlines become `<br />`
/// after escaping so the break tags survive.
pub fn render_storage_body(summary: &SummaryResult) -> String {
    let created_at = summary.created_at.format(TIMESTAMP_FORMAT).to_string();
    let description = escape_html(&summary.jira_description).replace('\n', "<br />");

    format!(
        "<h1>WFA Summary for {key}</h1>\
         <p><strong>Generated:</strong> {created_at}</p>\
         <h2>Jira Summary</h2>\
         <p>{summary}</p>\
         <h2>Jira Description</h2>\
         <p>{description}</p>\
         <h2>LLM Response</h2>\
         <pre>{response}</pre>",
        key = escape_html(&summary.jira_key),
        created_at = escape_html(&created_at),
        summary = escape_html(&summary.jira_summary),
        description = description,
        response = escape_html(&summary.llm_response),
    )
}
