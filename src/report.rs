//! Human-readable evaluation report.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use canvas::score::ScoreResult;

/// One `key: value` line per fact, aligned for the terminal.
#[must_use]
pub fn human(result: &ScoreResult, samples: usize) -> String {
    let tier = result.tier;
    let mut lines = vec![
        format!("tier:    {} {}", tier.as_str(), tier.emoji()),
        format!("samples: {samples}"),
    ];
    if let Some(circle) = result.circle {
        lines.push(format!(
            "circle:  center ({:.2}, {:.2}), radius {:.2}",
            circle.center.x, circle.center.y, circle.radius
        ));
    }
    match result.percent_label() {
        Some(percent) => lines.push(format!("score:   {percent}")),
        None => lines.push(format!("note:    {}", tier.label())),
    }
    lines.join("\n")
}
