mod chart;
mod dataset;
mod diagnostics;
mod error;
mod render;
mod viewer;

use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Output filename, always written into the current working directory.
const REPORT_FILE: &str = "cloud_adoption_report.html";

#[derive(Parser)]
#[command(name = "cloud-report")]
#[command(version, about = "Cloud adoption drivers report generator", long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // 1) Assemble the compiled-in dataset.
    let drivers = dataset::Dataset::builtin();

    // 2) Render the pie chart and encode it for inline embedding. Chart
    //    failures abort here, before any file is touched.
    let chart_b64 = chart::render_pie_b64(&drivers)
        .map_err(|err| anyhow!(diagnostics::error_message(format!("chart rendering failed: {err}"))))?;

    // 3) Compose the self-contained HTML document.
    let html = render::html::render_report(&drivers, &chart_b64)
        .map_err(|err| anyhow!(diagnostics::error_message(format!("report composition failed: {err}"))))?;

    // 4) Write the report, then best-effort open it.
    let out = PathBuf::from(REPORT_FILE);
    write_report(&out, html.as_bytes())?;

    let abs = std::fs::canonicalize(&out).unwrap_or(out);
    println!("Report generated: {}", abs.display());
    viewer::try_open(&abs);

    Ok(())
}

/// Whole-file replace: write a temp sibling, then rename over the target,
/// so a half-written report is never observable at the real path.
fn write_report(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let tmp = path.with_file_name(format!(".{}.tmp.{}", file_name, std::process::id()));

    std::fs::write(&tmp, bytes).with_context(|| {
        diagnostics::error_message(format!("write temp report {}", tmp.display()))
    })?;
    std::fs::rename(&tmp, path).with_context(|| {
        diagnostics::error_message(format!("replace report {}", path.display()))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_report_overwrites_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(REPORT_FILE);

        write_report(&target, b"first").unwrap();
        write_report(&target, b"second").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");

        let entries: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, [REPORT_FILE.to_string()]);
    }
}
