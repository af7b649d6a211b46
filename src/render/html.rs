//! Self-contained HTML document assembly.
//!
//! Important: the template is a raw string with `__SLOT__` placeholders
//! instead of one big `format!()` because the inline CSS is full of `{}`
//! that would conflict with Rust formatting.

use crate::dataset::Dataset;
use crate::diagnostics;
use crate::error::ReportError;
use crate::render::ranked_rows;

use std::fmt::Write as _;

/// Compose the full report document: embedded chart, ranked table, and the
/// fixed recommendations section. `chart_b64` is the base64 PNG payload.
pub fn render_report(dataset: &Dataset, chart_b64: &str) -> Result<String, ReportError> {
    if dataset.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let mut rows = String::new();
    for row in ranked_rows(dataset) {
        if row.explanation.is_empty() {
            diagnostics::warn(format!("driver '{}' has no explanation", row.name));
        }
        let _ = write!(
            rows,
            r#"        <tr>
          <td>{rank}</td>
          <td><strong>{name}</strong></td>
          <td>{weight} points</td>
          <td>{share:.1}%</td>
          <td>{explanation}</td>
        </tr>
"#,
            rank = row.rank,
            name = escape(row.name),
            weight = row.weight,
            share = row.share_pct,
            explanation = escape(row.explanation),
        );
    }

    Ok(TEMPLATE
        .replace("__ROWS__", &rows)
        .replace("__CHART__", chart_b64))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Cloud Adoption Drivers Report</title>
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <style>
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif; margin: 24px; color: #111; }
    header { margin-bottom: 20px; }
    table { border-collapse: collapse; width: 100%; margin-top: 12px; }
    th, td { border: 1px solid #ddd; text-align: left; padding: 8px; vertical-align: top; }
    th { background: #f7f7f7; padding: 10px; }
    .card { border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.08); padding: 16px; margin-bottom: 18px; }
    .chart { max-width: 900px; }
    .chart img { max-width: 100%; height: auto; border-radius: 6px; }
    footer { margin-top: 20px; font-size: 0.9em; color: #555; }
  </style>
</head>
<body>
  <header>
    <h1>Cloud Adoption Drivers &mdash; Enterprise Analysis</h1>
    <p class="card">This report lists common strategic and technical drivers for enterprise
    cloud adoption, along with relative weights and brief explanations. The driver table is
    compiled in; edit <code>src/dataset.rs</code> to reflect your organization's priorities.</p>
  </header>

  <section class="card">
    <h2>Visual summary</h2>
    <div class="chart">
      <img src="data:image/png;base64,__CHART__" alt="pie chart">
    </div>
  </section>

  <section class="card">
    <h2>Drivers (ranked)</h2>
    <table>
      <thead>
        <tr><th>#</th><th>Driver</th><th>Weight</th><th>Share</th><th>Short explanation</th></tr>
      </thead>
      <tbody>
__ROWS__      </tbody>
    </table>
  </section>

  <section class="card">
    <h2>Short recommendations</h2>
    <ol>
      <li>Map cloud drivers to business KPIs (e.g., time-to-market, TCO, uptime) before migration.</li>
      <li>Prioritize quick wins (dev/test in cloud, backups) while planning security and compliance controls.</li>
      <li>Use managed services for non-core infrastructure to accelerate innovation.</li>
      <li>Run a pilot and measure actual cost/performance before full-scale migration.</li>
      <li>Clarify shared responsibility model and implement guardrails (IAM, logging, encryption).</li>
    </ol>
  </section>

  <footer>
    Generated by <strong>cloud-report</strong>. Edit the driver table in
    <code>src/dataset.rs</code> to change weights or add/remove drivers.
  </footer>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Driver;
    use regex::Regex;

    const FAKE_CHART: &str = "iVBORw0KGgoAAAANSUhEUg==";

    fn dataset(entries: &[(&str, f64, &str)]) -> Dataset {
        Dataset::new(
            entries
                .iter()
                .map(|&(name, weight, explanation)| {
                    Driver::new(name, weight, explanation).unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            render_report(&Dataset::default(), FAKE_CHART),
            Err(ReportError::EmptyDataset)
        ));
    }

    #[test]
    fn document_embeds_exactly_one_inline_chart() {
        let ds = dataset(&[("A", 1.0, "a"), ("B", 3.0, "b")]);
        let doc = render_report(&ds, FAKE_CHART).unwrap();

        let images = Regex::new(r#"<img src="data:image/png;base64,"#).unwrap();
        assert_eq!(images.find_iter(&doc).count(), 1);
        assert!(doc.contains(FAKE_CHART));
    }

    #[test]
    fn table_has_one_row_per_driver() {
        let ds = Dataset::builtin();
        let doc = render_report(&ds, FAKE_CHART).unwrap();

        let body_rows = Regex::new(r"<tr>\s*<td>").unwrap();
        assert_eq!(body_rows.find_iter(&doc).count(), ds.len());

        for driver in ds.iter() {
            let cell = format!("<strong>{}</strong>", escape(&driver.name));
            assert_eq!(doc.matches(cell.as_str()).count(), 1, "{}", driver.name);
        }
    }

    #[test]
    fn rows_carry_rank_weight_and_share_formatting() {
        let ds = dataset(&[("A", 1.0, "why a"), ("B", 3.0, "why b")]);
        let doc = render_report(&ds, FAKE_CHART).unwrap();

        // B outweighs A, so it ranks first.
        let b_pos = doc.find("<strong>B</strong>").unwrap();
        let a_pos = doc.find("<strong>A</strong>").unwrap();
        assert!(b_pos < a_pos);

        assert!(doc.contains("3 points"));
        assert!(doc.contains("75.0%"));
        assert!(doc.contains("1 points"));
        assert!(doc.contains("25.0%"));
    }

    #[test]
    fn missing_explanation_renders_empty_cell() {
        let ds = dataset(&[("A", 2.0, ""), ("B", 2.0, "explained")]);
        let doc = render_report(&ds, FAKE_CHART).unwrap();

        let row = Regex::new(r"(?s)<strong>A</strong></td>\s*<td>2 points</td>\s*<td>50\.0%</td>\s*<td></td>")
            .unwrap();
        assert!(row.is_match(&doc));
    }

    #[test]
    fn zero_total_weight_renders_zero_shares() {
        let ds = dataset(&[("A", 0.0, "a"), ("B", 0.0, "b")]);
        let doc = render_report(&ds, FAKE_CHART).unwrap();

        let zero_shares = Regex::new(r"<td>0\.0%</td>").unwrap();
        assert_eq!(zero_shares.find_iter(&doc).count(), 2);
        assert!(!doc.contains("NaN"));
    }

    #[test]
    fn names_and_explanations_are_escaped() {
        let ds = dataset(&[("R&D <cloud>", 1.0, "uses \"managed\" services")]);
        let doc = render_report(&ds, FAKE_CHART).unwrap();

        assert!(doc.contains("R&amp;D &lt;cloud&gt;"));
        assert!(doc.contains("uses &quot;managed&quot; services"));
        assert!(!doc.contains("R&D <cloud>"));
    }
}
