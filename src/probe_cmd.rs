//! Probe command: echo the day-number math for an arbitrary date.

use anyhow::{Context, Result};
use tracing::info_span;

use suhba_calendar::{DateProbe, parse_date};

use crate::cli::ProbeArgs;
use crate::config::SuhbaConfig;
use crate::convert;

/// Print the countdown arithmetic for the requested date.
pub fn run(args: ProbeArgs, config: &SuhbaConfig) -> Result<()> {
    let _cmd = info_span!("probe").entered();
    let engine = convert::build_engine(config, None)?;
    let date = parse_date(&args.date).context("invalid date argument")?;
    let probe = DateProbe::new(&engine, date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&probe)?);
    } else {
        print!("{}", render(&probe));
    }
    Ok(())
}

fn render(probe: &DateProbe) -> String {
    let window = if probe.in_window {
        "inside the countdown"
    } else {
        "outside the countdown, day number saturated"
    };
    format!(
        "{} ({})\n\
         Day number:       {} ({window})\n\
         Days since start: {}\n\
         Days until event: {}\n",
        probe.date.display,
        probe.date.date,
        probe.day_number,
        probe.days_since_start,
        probe.days_until_event,
    )
}
