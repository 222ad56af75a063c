use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SUHBA countdown calendar and status post maintenance.
#[derive(Parser)]
#[command(
    name = "suhba",
    version,
    about = "Countdown calendar and status post maintenance"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Defaults apply if it does not exist.
    #[arg(short, long, global = true, default_value = "suhba.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show where the countdown stands today.
    Status(StatusArgs),
    /// Show the day-number math for an arbitrary date.
    Probe(ProbeArgs),
    /// Print the countdown calendar grid.
    Calendar(CalendarArgs),
    /// Manage stored status posts.
    #[command(subcommand)]
    Posts(PostsCommand),
    /// Correct stored post day numbers against the calendar.
    Reconcile(ReconcileArgs),
}

/// Arguments for the `status` subcommand.
#[derive(clap::Args)]
pub struct StatusArgs {
    /// Evaluate as if today were this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `probe` subcommand.
#[derive(clap::Args)]
pub struct ProbeArgs {
    /// Date to evaluate (YYYY-MM-DD or RFC 3339).
    pub date: String,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Evaluate as if today were this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<String>,

    /// Cells per row.
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u16).range(1..=60))]
    pub columns: u16,
}

/// Post management subcommands.
#[derive(Subcommand)]
pub enum PostsCommand {
    /// List posts, highest day first.
    List(ListArgs),
    /// Show the post tagged with a day number.
    Show(ShowArgs),
    /// Show today's post, or the latest published one before it.
    Today(TodayArgs),
    /// Add a post; its day number is assigned from its date.
    Add(AddArgs),
    /// Edit the post tagged with a day number.
    Update(UpdateArgs),
    /// Delete a post by id.
    Delete(DeleteArgs),
}

/// Arguments for `posts list`.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Only show this many published posts.
    #[arg(long)]
    pub recent: Option<usize>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `posts show`.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Day number to look up.
    #[arg(allow_negative_numbers = true)]
    pub day: i64,
}

/// Arguments for `posts today`.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Evaluate as if today were this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for `posts add`.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Publication date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,

    /// Post title.
    #[arg(long)]
    pub title: String,

    /// Full-resolution image URL.
    #[arg(long = "image-url")]
    pub image_url: String,

    /// Post description.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Web-sized image URL; defaults to the full-resolution image.
    #[arg(long = "web-image-url")]
    pub web_image_url: Option<String>,

    /// Audio attachment URL.
    #[arg(long = "audio-url")]
    pub audio_url: Option<String>,

    /// Contributor credit.
    #[arg(long)]
    pub contributor: Option<String>,

    /// Store the post unpublished.
    #[arg(long)]
    pub draft: bool,
}

/// Arguments for `posts update`.
#[derive(clap::Args)]
pub struct UpdateArgs {
    /// Day number of the post to edit.
    #[arg(allow_negative_numbers = true)]
    pub day: i64,

    /// New publication date (YYYY-MM-DD). The day number is re-derived from it.
    #[arg(long)]
    pub date: Option<String>,

    /// New title.
    #[arg(long)]
    pub title: Option<String>,

    /// New description.
    #[arg(long)]
    pub description: Option<String>,

    /// Make the post public.
    #[arg(long, conflicts_with = "draft")]
    pub publish: bool,

    /// Hide the post from the public.
    #[arg(long)]
    pub draft: bool,
}

/// Arguments for `posts delete`.
#[derive(clap::Args)]
pub struct DeleteArgs {
    /// Post id.
    pub id: u64,
}

/// Arguments for the `reconcile` subcommand.
#[derive(clap::Args)]
pub struct ReconcileArgs {
    /// Show the corrections without writing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
