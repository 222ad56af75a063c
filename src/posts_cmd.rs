//! Posts command: list, show, add, update and delete stored status posts.

use std::fmt::Write;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};

use suhba_calendar::{Clock, CountdownEngine, format_display_date, parse_date};
use suhba_store::{JsonFileStore, NewPost, PostId, PostStore, PostUpdate, StatusPost};

use crate::cli::{AddArgs, ListArgs, PostsCommand, ShowArgs, UpdateArgs};
use crate::config::SuhbaConfig;
use crate::convert;

/// Run a `posts` subcommand against the configured JSON store.
pub fn run(command: PostsCommand, config: &SuhbaConfig) -> Result<()> {
    let _cmd = info_span!("posts").entered();
    let mut store = JsonFileStore::open(&config.store.path)
        .with_context(|| format!("failed to open post store: {}", config.store.path.display()))?;
    debug!(path = %store.path().display(), "post store ready");

    let output = match command {
        PostsCommand::List(args) => list(&store, &args)?,
        PostsCommand::Show(args) => {
            let engine = convert::build_engine(config, None)?;
            show(&store, &engine, &args)?
        }
        PostsCommand::Today(args) => {
            let engine = convert::build_engine(config, args.today.as_deref())?;
            today(&store, &engine)?
        }
        PostsCommand::Add(args) => {
            let engine = convert::build_engine(config, None)?;
            add(&mut store, &engine, args)?
        }
        PostsCommand::Update(args) => {
            let engine = convert::build_engine(config, None)?;
            update(&mut store, &engine, args)?
        }
        PostsCommand::Delete(args) => delete(&mut store, PostId::new(args.id))?,
    };
    print!("{output}");
    Ok(())
}

fn list<S: PostStore + ?Sized>(store: &S, args: &ListArgs) -> Result<String> {
    let posts = match args.recent {
        Some(limit) => store.recent(limit),
        None => store.all(),
    }
    .context("failed to list posts")?;

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&posts)?));
    }
    let mut out = String::new();
    for post in &posts {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", summary_line(post));
    }
    if posts.is_empty() {
        out.push_str("no posts\n");
    }
    Ok(out)
}

fn show<S, C>(store: &S, engine: &CountdownEngine<C>, args: &ShowArgs) -> Result<String>
where
    S: PostStore + ?Sized,
    C: Clock,
{
    let day = engine.day(args.day)?;
    match store.by_day(day.get()).context("failed to look up post")? {
        Some(post) => Ok(render_post(&post)),
        None => bail!("no post for day {day}"),
    }
}

fn today<S, C>(store: &S, engine: &CountdownEngine<C>) -> Result<String>
where
    S: PostStore + ?Sized,
    C: Clock,
{
    let day = engine.current_day_number();
    match store
        .today_post(day.get())
        .context("failed to look up today's post")?
    {
        Some(post) => Ok(render_post(&post)),
        None => bail!("no published post on or before day {day}"),
    }
}

fn add<S, C>(store: &mut S, engine: &CountdownEngine<C>, args: AddArgs) -> Result<String>
where
    S: PostStore + ?Sized,
    C: Clock,
{
    let date = parse_date(&args.date).context("invalid --date")?;
    let day = day_for_post_date(engine, date);

    let mut post = NewPost::new(day, date, args.title, args.image_url)
        .with_description(args.description)
        .with_published(!args.draft);
    if let Some(url) = args.web_image_url {
        post = post.with_image_web_url(url);
    }
    if let Some(url) = args.audio_url {
        post = post.with_audio_url(url);
    }
    if let Some(name) = args.contributor {
        post = post.with_contributor(name);
    }

    let stored = store.insert(post).context("failed to store post")?;
    info!(id = %stored.id, day = stored.day, "added post");
    Ok(format!("added post {} for day {}\n", stored.id, stored.day))
}

fn update<S, C>(store: &mut S, engine: &CountdownEngine<C>, args: UpdateArgs) -> Result<String>
where
    S: PostStore + ?Sized,
    C: Clock,
{
    let day = engine.day(args.day)?;
    let Some(post) = store.by_day(day.get()).context("failed to look up post")? else {
        bail!("no post for day {day}");
    };

    let mut changes = PostUpdate {
        title: args.title,
        description: args.description,
        ..PostUpdate::default()
    };
    if let Some(ref date) = args.date {
        let date = parse_date(date).context("invalid --date")?;
        changes.date = Some(date);
        changes.day = Some(day_for_post_date(engine, date));
    }
    if args.publish {
        changes.is_published = Some(true);
    } else if args.draft {
        changes.is_published = Some(false);
    }
    if changes.is_empty() {
        bail!("nothing to update for day {day}");
    }

    if !store.update(post.id, &changes).context("failed to update post")? {
        bail!("post {} disappeared before it could be updated", post.id);
    }
    let new_day = changes.day.unwrap_or(post.day);
    info!(id = %post.id, from = post.day, to = new_day, "updated post");
    Ok(format!("updated post {} (day {new_day})\n", post.id))
}

/// Day number for a post dated `date`, warning when it falls outside the countdown.
fn day_for_post_date<C: Clock>(engine: &CountdownEngine<C>, date: NaiveDate) -> u32 {
    let config = engine.config();
    if !config.contains(date) {
        warn!(
            %date,
            first = %config.start_date(),
            last = %config.last_date(),
            "post date is outside the countdown; day number will saturate"
        );
    }
    engine.day_for_date(date).get()
}

fn delete<S: PostStore + ?Sized>(store: &mut S, id: PostId) -> Result<String> {
    if !store.delete(id).context("failed to delete post")? {
        bail!("no post with id {id}");
    }
    info!(%id, "deleted post");
    Ok(format!("deleted post {id}\n"))
}

fn summary_line(post: &StatusPost) -> String {
    let draft = if post.is_published { "" } else { " [draft]" };
    format!(
        "#{:<4} day {:>3}  {}  {}{draft}",
        post.id.get(),
        post.day,
        post.date,
        post.title
    )
}

fn render_post(post: &StatusPost) -> String {
    let mut out = format!(
        "Day {}: {}\n{}\n",
        post.day,
        post.title,
        format_display_date(post.date)
    );
    if !post.description.is_empty() {
        let _ = writeln!(out, "\n{}\n", post.description);
    }
    let _ = writeln!(out, "image: {}", post.image_hd_url);
    if post.image_web_url != post.image_hd_url {
        let _ = writeln!(out, "web image: {}", post.image_web_url);
    }
    if let Some(ref audio) = post.audio_url {
        let _ = writeln!(out, "audio: {audio}");
    }
    if let Some(ref name) = post.contributed_by {
        let _ = writeln!(out, "contributed by: {name}");
    }
    if !post.is_published {
        out.push_str("(draft)\n");
    }
    out
}
