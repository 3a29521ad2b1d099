//! Human-readable run report

use serde_json::json;

use crate::RunReport;

pub fn render_report(report: &RunReport) -> String {
    let mut lines = vec!["Confluence page created/updated.".to_string()];

    if let Some(page_id) = &report.page_id {
        lines.push(format!("Confluence page ID: {}", page_id));
    }
    if let Some(url) = &report.page_url {
        lines.push(format!("Open page: {}", url));
    }

    lines.join("\n")
}

/// The summary record as shown in the "internal processing step" view
pub fn summary_json(report: &RunReport) -> serde_json::Value {
    let summary = &report.summary;
    json!({
        "jira_key": summary.jira_key,
        "jira_summary": summary.jira_summary,
        "jira_description": summary.jira_description,
        "llm_response": summary.llm_response,
        "created_at": summary.created_at.to_rfc3339(),
        "metadata": summary.metadata,
    })
}
