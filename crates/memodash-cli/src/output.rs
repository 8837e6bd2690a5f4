//! Formatted output helpers for CLI commands.
//!
//! Lays render reports out as an aligned table, one column per dashboard.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use memodash_tui::report::RenderReport;

const TOTAL_ROW: &str = "TOTAL";
const FEED_ROW: &str = "activity feed derivations";

/// Formats `reports` as a component-by-variant table of render counts.
#[must_use]
pub fn render_table(reports: &[RenderReport]) -> String {
    let components: BTreeSet<&str> = reports
        .iter()
        .flat_map(|report| report.renders.keys().map(String::as_str))
        .collect();
    let width = components
        .iter()
        .map(|name| name.chars().count())
        .chain([FEED_ROW.len(), "COMPONENT".len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    if let Some(first) = reports.first() {
        let _ = writeln!(out, "steps: {}", display_steps(&first.steps));
    }
    let _ = write!(out, "{:<width$}", "COMPONENT");
    for report in reports {
        let _ = write!(out, " {:>8}", report.variant.to_string().to_uppercase());
    }
    out.push('\n');

    let mut row = |label: &str, count: &dyn Fn(&RenderReport) -> u64| {
        let _ = write!(out, "{label:<width$}");
        for report in reports {
            let _ = write!(out, " {:>8}", count(report));
        }
        out.push('\n');
    };
    for &name in &components {
        row(name, &|report| report.renders_of(name));
    }
    row(TOTAL_ROW, &|report| report.total_renders);
    row(FEED_ROW, &|report| report.activity_computations);
    out
}

fn display_steps(steps: &[String]) -> String {
    if steps.is_empty() {
        "(none)".to_string()
    } else {
        steps.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use memodash_common::types::Variant;

    use super::*;

    fn report(variant: Variant, renders: &[(&str, u64)]) -> RenderReport {
        let renders: BTreeMap<String, u64> = renders
            .iter()
            .map(|&(name, count)| (name.to_string(), count))
            .collect();
        RenderReport {
            variant,
            generated_at: Utc::now(),
            steps: vec!["stats".into()],
            total_renders: renders.values().sum(),
            renders,
            activity_computations: 1,
        }
    }

    #[test]
    fn table_has_a_column_per_variant() {
        let table = render_table(&[
            report(Variant::Before, &[("UserList", 2), ("ActivityFeed", 2)]),
            report(Variant::After, &[("UserList", 2), ("ProfileCard", 1)]),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "steps: stats");
        assert!(lines[1].starts_with("COMPONENT"));
        assert!(lines[1].ends_with("  BEFORE    AFTER"));
        assert!(lines.iter().any(|l| l.starts_with("ProfileCard") && l.ends_with("       0        1")));
        assert!(lines.iter().any(|l| l.starts_with("TOTAL") && l.ends_with("       4        3")));
    }

    #[test]
    fn empty_steps_are_spelled_out() {
        assert_eq!(display_steps(&[]), "(none)");
    }
}
