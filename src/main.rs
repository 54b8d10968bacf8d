//! taskdeck CLI entry point.
//!
//! A thin view layer over the library: each subcommand maps onto one store
//! or projector operation. Errors abort the single command with a message
//! and a non-zero exit code; nothing here panics.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::fs::OpenOptions;
use taskdeck::calendar;
use taskdeck::cli::{
    self, AddArgs, Cli, Command, DayArgs, EditArgs, ExportArgs, ListArgs, MonthArgs,
};
use taskdeck::config::Config;
use taskdeck::dates::{self, MonthCursor};
use taskdeck::db::Database;
use taskdeck::error::StoreError;
use taskdeck::export;
use taskdeck::types::Task;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let mut config = Config::load(cli.config.as_deref())?;

    // Override paths from CLI arguments
    if let Some(db_path) = &cli.database {
        config.db_path = db_path.clone();
    }

    config.ensure_db_dir()?;
    info!("Database: {:?}", config.db_path);
    let db = Database::open(&config.db_path)?;

    match cli.command {
        Command::Add(args) => run_add(&db, args)?,
        Command::List(args) => run_list(&db, args)?,
        Command::Day(args) => run_day(&db, args)?,
        Command::Month(args) => run_month(&db, args)?,
        Command::Edit(args) => run_edit(&db, args)?,
        Command::Done { id } => {
            db.mark_done(id)?;
            println!("Task {} marked done", id);
        }
        Command::Delete { id } => {
            db.delete_task(id)?;
            println!("Task {} deleted", id);
        }
        Command::Stats => run_stats(&db)?,
        Command::Export(args) => run_export(&db, args)?,
    }

    Ok(())
}

fn run_add(db: &Database, args: AddArgs) -> Result<()> {
    let due = dates::parse_display_date(&args.due)?;
    let category = cli::parse_category(&args.category)?;

    let id = db.add_task(&args.title, args.description.as_deref(), due, &category)?;
    info!(id, "Task added");
    println!("Added task {}", id);
    Ok(())
}

fn run_list(db: &Database, args: ListArgs) -> Result<()> {
    let status = cli::parse_status_filter(&args.status)?;
    let category = cli::parse_category_filter(&args.category)?;

    let tasks = db.list_tasks(&args.search, status, category.as_deref())?;
    print_task_table(&tasks);
    Ok(())
}

fn run_day(db: &Database, args: DayArgs) -> Result<()> {
    let date = dates::parse_display_date(&args.date)?;
    let tasks = db.tasks_by_date(date)?;

    println!("Tasks due {}", dates::format_display_date(date));
    print_task_table(&tasks);
    Ok(())
}

fn run_month(db: &Database, args: MonthArgs) -> Result<()> {
    let mut cursor = match (args.year, args.month) {
        (Some(year), Some(month)) => MonthCursor::new(year, month)?,
        (None, None) => MonthCursor::current(),
        _ => {
            anyhow::bail!("month view needs both a year and a month, or neither");
        }
    };
    for _ in 0..args.next {
        cursor = cursor.next();
    }
    for _ in 0..args.prev {
        cursor = cursor.prev();
    }

    let buckets = calendar::bucket_by_day(db, cursor.year, cursor.month)?;

    println!("{}-{:02}", cursor.year, cursor.month);
    if buckets.is_empty() {
        println!("  no tasks due this month");
        return Ok(());
    }

    let mut days: Vec<_> = buckets.into_iter().collect();
    days.sort_unstable();
    for (day, count) in days {
        println!(
            "  {:02}: {} task{} ({})",
            day,
            count,
            if count == 1 { "" } else { "s" },
            calendar::density_tier(count)
        );
    }
    Ok(())
}

fn run_edit(db: &Database, args: EditArgs) -> Result<()> {
    let current = db
        .get_task(args.id)?
        .ok_or(StoreError::TaskNotFound(args.id))?;

    let title = args.title.unwrap_or(current.title);
    let description = args.description.or(current.description);
    let due = match args.due {
        Some(ref s) => dates::parse_display_date(s)?,
        None => current.due_date,
    };
    let status = match args.status {
        Some(ref s) => cli::parse_status(s)?,
        None => current.status,
    };
    let category = match args.category {
        Some(ref s) => cli::parse_category(s)?,
        None => current.category,
    };

    db.update_task(args.id, &title, description.as_deref(), due, status, &category)?;
    info!(id = args.id, "Task updated");
    println!("Updated task {}", args.id);
    Ok(())
}

fn run_stats(db: &Database) -> Result<()> {
    let stats = db.stats()?;

    println!("By status:");
    let mut by_status: Vec<_> = stats.by_status.into_iter().collect();
    by_status.sort();
    for (status, count) in by_status {
        println!("  {:12} {}", status, count);
    }

    println!("By category:");
    let mut by_category: Vec<_> = stats.by_category.into_iter().collect();
    by_category.sort();
    for (category, count) in by_category {
        println!("  {:12} {}", category, count);
    }
    Ok(())
}

fn run_export(db: &Database, args: ExportArgs) -> Result<()> {
    let count = export::export_csv_file(db, &args.output)?;
    info!(count, path = ?args.output, "Exported tasks");
    println!("Exported {} tasks to {}", count, args.output.display());
    Ok(())
}

/// Render tasks as an aligned table with the classified display state.
fn print_task_table(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("  no tasks");
        return;
    }

    let today = Local::now().date_naive();
    println!(
        "  {:>4}  {:10}  {:10}  {:8}  {}",
        "ID", "Due", "State", "Category", "Title"
    );
    for task in tasks {
        let state = calendar::classify(task, today);
        println!(
            "  {:>4}  {:10}  {:10}  {:8}  {}",
            task.id,
            dates::format_display_date(task.due_date),
            state.to_string(),
            task.category,
            task.title
        );
        if let Some(desc) = &task.description {
            if !desc.is_empty() {
                println!("        {}", desc);
            }
        }
    }
}
