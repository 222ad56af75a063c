//! Reconcile command: retag posts whose day number drifted from their date.

use std::fmt::Write;

use anyhow::{Context, Result, bail};
use tracing::info_span;

use suhba_reconcile::{Correction, ReconcileReport, plan, reconcile};
use suhba_store::JsonFileStore;

use crate::cli::ReconcileArgs;
use crate::config::SuhbaConfig;
use crate::convert;

/// Correct (or with `--dry-run`, list) drifted post day numbers.
pub fn run(args: ReconcileArgs, config: &SuhbaConfig) -> Result<()> {
    let _cmd = info_span!("reconcile").entered();
    let engine = convert::build_engine(config, None)?;
    let mut store = JsonFileStore::open(&config.store.path)
        .with_context(|| format!("failed to open post store: {}", config.store.path.display()))?;

    if args.dry_run {
        let corrections = plan(&store, &engine).context("failed to list posts")?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&corrections)?);
        } else {
            print!("{}", render_plan(&corrections));
        }
        return Ok(());
    }

    let report = reconcile(&mut store, &engine).context("failed to list posts")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    if !report.is_clean() {
        bail!("{} post(s) could not be corrected", report.failed.len());
    }
    Ok(())
}

fn correction_line(c: &Correction) -> String {
    format!(
        "post {} ({}): day {} -> {}",
        c.id, c.date, c.stored_day, c.expected_day
    )
}

fn render_plan(corrections: &[Correction]) -> String {
    if corrections.is_empty() {
        return "all post days are correct\n".to_string();
    }
    let mut out = format!("{} post(s) would be corrected:\n", corrections.len());
    for c in corrections {
        let _ = writeln!(out, "  {}", correction_line(c));
    }
    out
}

fn render_report(report: &ReconcileReport) -> String {
    let mut out = format!(
        "examined {}, unchanged {}, corrected {}, failed {}\n",
        report.examined,
        report.unchanged,
        report.corrected.len(),
        report.failed.len()
    );
    for c in &report.corrected {
        let _ = writeln!(out, "  {}", correction_line(c));
    }
    for f in &report.failed {
        let _ = writeln!(out, "  post {} failed: {}", f.id, f.reason);
    }
    out
}
