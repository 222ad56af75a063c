//! Calendar command: print the countdown grid.

use std::collections::HashSet;
use std::fmt::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use suhba_calendar::{CalendarCell, calendar_cells};
use suhba_store::{JsonFileStore, PostStore};

use crate::cli::CalendarArgs;
use crate::config::SuhbaConfig;
use crate::convert;

/// Print every countdown day, marking today and days with a published post.
pub fn run(args: CalendarArgs, config: &SuhbaConfig) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let engine = convert::build_engine(config, args.today.as_deref())?;

    let store = JsonFileStore::open(&config.store.path)
        .with_context(|| format!("failed to open post store: {}", config.store.path.display()))?;
    let published: HashSet<u32> = store
        .all()
        .context("failed to list posts")?
        .into_iter()
        .filter(|p| p.is_published)
        .map(|p| p.day)
        .collect();
    info!(n_published = published.len(), "loaded published days");

    let cells = calendar_cells(&engine);
    println!(
        "Day {} of {} - {} days remaining",
        engine.current_day_number(),
        engine.config().total_days(),
        engine.days_remaining()
    );
    print!("{}", render_grid(&cells, &published, usize::from(args.columns)));
    println!("> today   * published");
    Ok(())
}

/// Lays cells out in rows of `columns`.
fn render_grid(cells: &[CalendarCell], published: &HashSet<u32>, columns: usize) -> String {
    let mut out = String::new();
    for row in cells.chunks(columns.max(1)) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let today = if cell.is_today { '>' } else { ' ' };
                let mark = if published.contains(&cell.day.get()) {
                    '*'
                } else {
                    ' '
                };
                format!("{today}{:>3} {}{mark}", cell.day.get(), cell.date.format("%b %d"))
            })
            .collect();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", line.join(" ").trim_end());
    }
    out
}
