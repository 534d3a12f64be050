use crate::types::report::AggregateSummary;

pub fn to_markdown(summary: &AggregateSummary) -> String {
    let mut output = String::new();
    output.push_str("# Risk Aggregate\n\n");
    output.push_str(&format!("Score: {:.3}\n\n", summary.score));
    output.push_str(&format!(
        "- bounds: [{}, {}]\n- total weight: {}\n- contributing groups: {}\n- skipped groups: {}\n\n",
        summary.bounds.low,
        summary.bounds.high,
        summary.total_weight,
        summary.contributing_groups,
        summary.skipped_groups
    ));
    if !summary.has_signal() {
        output.push_str("No group carried both observations and members; score is the floor.\n\n");
    }

    output.push_str("## Groups\n\n");
    if summary.group_averages.is_empty() {
        output.push_str("- none\n");
    } else {
        for (index, average) in summary.group_averages.iter().enumerate() {
            match average {
                Some(average) => output.push_str(&format!("- group {index}: {average:.3}\n")),
                None => output.push_str(&format!("- group {index}: skipped (no observations)\n")),
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;
    use crate::types::scoring::{Group, ScoreBounds};

    #[test]
    fn markdown_report_contains_sections() {
        let summary = summarize(
            &[Group::uniform(3, 30.0), Group::new(2, vec![])],
            ScoreBounds::DEFAULT,
        );

        let rendered = to_markdown(&summary);
        assert!(rendered.contains("# Risk Aggregate"));
        assert!(rendered.contains("Score: 30.000"));
        assert!(rendered.contains("## Groups"));
        assert!(rendered.contains("group 1: skipped"));
    }

    #[test]
    fn markdown_report_flags_missing_signal() {
        let summary = summarize(&[], ScoreBounds::DEFAULT);
        let rendered = to_markdown(&summary);
        assert!(rendered.contains("score is the floor"));
        assert!(rendered.contains("- none"));
    }
}
