use serde_json::Value;
use subscriptcheck_core::InsightsError;

const MAX_LISTED_ISSUES: usize = 10;

pub fn render_error(error: &InsightsError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    let issue_lines = render_issue_lines(error.data.as_ref());
    if !issue_lines.is_empty() {
        lines.push(String::new());
        lines.push("Rows to fix:".to_string());
        lines.extend(issue_lines);
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

/// One line per normalizer issue, shared with the skipped-rows section of successful output.
pub fn render_issue_lines(data: Option<&Value>) -> Vec<String> {
    let Some(issues) = data
        .and_then(|value| value.get("issues"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut lines = issues
        .iter()
        .take(MAX_LISTED_ISSUES)
        .map(|issue| {
            let row = issue.get("row").and_then(Value::as_i64).unwrap_or(0);
            let description = issue
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("invalid value");
            format!("  Row {row}: {description}")
        })
        .collect::<Vec<String>>();

    if issues.len() > MAX_LISTED_ISSUES {
        lines.push(format!(
            "  ...and {} more.",
            issues.len() - MAX_LISTED_ISSUES
        ));
    }
    lines
}
