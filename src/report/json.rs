use crate::types::report::AggregateSummary;

pub fn to_json(summary: &AggregateSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;
    use crate::types::scoring::{Group, ScoreBounds};

    #[test]
    fn json_report_contains_score_and_skipped_groups() {
        let summary = summarize(
            &[Group::uniform(100, 10.0), Group::uniform(100, 90.0), Group::new(5, vec![])],
            ScoreBounds::DEFAULT,
        );

        let rendered = to_json(&summary).expect("json should serialize");
        assert!(rendered.contains("\"score\": 50.0"));
        assert!(rendered.contains("\"skipped_groups\": 1"));
        assert!(rendered.contains("null"));
    }
}
