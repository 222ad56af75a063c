//! Status command: where the countdown stands today.

use anyhow::Result;
use tracing::info_span;

use suhba_calendar::DateReport;

use crate::cli::StatusArgs;
use crate::config::SuhbaConfig;
use crate::convert;

/// Print today's countdown status.
pub fn run(args: StatusArgs, config: &SuhbaConfig) -> Result<()> {
    let _cmd = info_span!("status").entered();
    let engine = convert::build_engine(config, args.today.as_deref())?;
    let report = DateReport::new(&engine);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}

fn render(report: &DateReport) -> String {
    format!(
        "Today is {} (Day {} of {}, dated {})\n\
         {} days remaining until {}\n\
         Countdown started {}\n",
        report.today.display,
        report.current_day,
        report.total_days,
        report.date_for_current_day.display,
        report.days_remaining,
        report.event_date.display,
        report.start_date.display,
    )
}
