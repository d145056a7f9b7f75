use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use projecton::calendar::{DayCell, same_month};
use projecton::config::Config;
use projecton::error::DashboardError;
use projecton::filter::StatusFilter;
use projecton::i18n::Language;
use projecton::model::{ProjectStatus, parse_date};
use projecton::page::{CalendarPage, DashboardPage, ProjectsPage, TeamPage};
use projecton::provider::{self, DataProvider};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "projecton")]
#[command(about = "Projects, team and calendar dashboard for the terminal")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON dataset to read instead of the built-in sample data
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// ICS file whose events replace the dataset's events
    #[arg(long, global = true)]
    ics: Option<PathBuf>,

    /// Display language (ko or en)
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month grid, and the events of one date
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,

        /// Date whose events are listed (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// List projects
    Projects {
        /// Case-insensitive text matched against name and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// planned, waiting, active or done
        #[arg(short, long)]
        status: Option<ProjectStatus>,
    },
    /// List team members
    Team {
        /// Case-insensitive text matched against name, email and role
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Print the dashboard summary
    Dashboard,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = cli.data {
        config.data.dataset = Some(path);
    }
    if let Some(path) = cli.ics {
        config.data.events_ics = Some(path);
    }
    if let Some(lang) = cli.lang {
        config.ui.language = lang;
    }

    if let Some(dir) = config.log_dir() {
        if let Err(e) = projecton::logging::init_logging(&config.log.level, &dir) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }

    let provider = provider::open(&config.data).context("Failed to open data source")?;
    let lang = config.ui.language;

    match cli.command {
        None => projecton::tui::run(&config, provider),
        Some(Commands::Calendar { month, date }) => {
            print_calendar(provider.as_ref(), lang, month.as_deref(), date.as_deref())
        }
        Some(Commands::Projects { query, status }) => {
            print_projects(provider.as_ref(), lang, &query, status)
        }
        Some(Commands::Team { query }) => print_team(provider.as_ref(), lang, &query),
        Some(Commands::Dashboard) => print_dashboard(provider.as_ref(), lang),
    }
}

fn parse_month(value: &str) -> Result<NaiveDate, DashboardError> {
    parse_date(&format!("{}-01", value.trim()))
        .map_err(|_| DashboardError::InvalidDate(format!("'{}' (expected YYYY-MM)", value)))
}

fn print_calendar(
    provider: &dyn DataProvider,
    lang: Language,
    month: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let s = lang.strings();
    let date = date.map(parse_date).transpose()?;
    let reference = match (month, date) {
        (Some(m), _) => parse_month(m)?,
        (None, Some(d)) => d,
        (None, None) => Local::now().date_naive(),
    };
    if let Some(d) = date {
        if !same_month(d, reference) {
            return Err(DashboardError::InvalidArgument(format!(
                "--date {} is outside --month {}",
                d,
                reference.format("%Y-%m")
            ))
            .into());
        }
    }

    let mut page = CalendarPage::load(provider, reference)?;
    if let Some(d) = date {
        page.select(d);
    }

    println!("{}", lang.month_title(page.reference()));
    let header: Vec<String> = s.weekdays.iter().map(|d| format!("{:^5}", d)).collect();
    println!("{}", header.join(""));
    for week in page.weeks() {
        let line: String = week.iter().map(format_day).collect();
        println!("{}", line.trim_end());
    }
    println!();

    match page.selected_events() {
        Some(events) => {
            let when = page.selected().map(|d| lang.long_date(d)).unwrap_or_default();
            println!("{}", when);
            if events.is_empty() {
                println!("  {}", s.no_events_on_date);
            }
            for e in events {
                println!("  [{}] {}", e.category.label(lang), e.title);
                if !e.description.is_empty() {
                    println!("      {}", e.description);
                }
            }
        }
        None => {
            println!("{}", s.month_events_title);
            for e in page.month_events() {
                println!(
                    "  {:>8}  [{}] {}",
                    lang.short_date(e.date),
                    e.category.label(lang),
                    e.title
                );
            }
        }
    }
    Ok(())
}

fn format_day(cell: &DayCell<'_>) -> String {
    if !cell.in_current_month {
        return "  .  ".to_string();
    }
    let marker = match cell.events.len() {
        0 => ' ',
        1 => '*',
        _ => '+',
    };
    format!(" {:>2}{} ", cell.date.day(), marker)
}

fn print_projects(
    provider: &dyn DataProvider,
    lang: Language,
    query: &str,
    status: Option<ProjectStatus>,
) -> Result<()> {
    let s = lang.strings();
    let mut page = ProjectsPage::load(provider)?;
    page.set_search(query);
    page.set_status_filter(status.map_or(StatusFilter::All, StatusFilter::Only));

    let visible = page.visible();
    if visible.is_empty() {
        println!("{}", s.no_matching_projects);
    }
    for p in visible {
        println!(
            "{:<20} {:<8} {:>3}%  {} {}  {}: {}",
            p.name,
            p.status.label(lang),
            p.progress,
            p.priority.label(lang),
            s.priority_suffix,
            s.due_prefix,
            p.due_date
        );
    }
    Ok(())
}

fn print_team(provider: &dyn DataProvider, lang: Language, query: &str) -> Result<()> {
    let s = lang.strings();
    let mut page = TeamPage::load(provider)?;
    page.set_search(query);

    let visible = page.visible();
    if visible.is_empty() {
        println!("{}", s.no_matching_members);
    }
    for m in visible {
        println!(
            "({}) {:<8} {:<20} {:<28} {}",
            m.avatar_initial(),
            m.name,
            m.role,
            m.email,
            m.status.label(lang)
        );
    }
    Ok(())
}

fn print_dashboard(provider: &dyn DataProvider, lang: Language) -> Result<()> {
    let s = lang.strings();
    let page = DashboardPage::load(provider)?;
    let summary = page.summary();

    println!("{:<20} {}", s.stat_total_projects, summary.total_projects);
    println!("{:<20} {}", s.stat_active_members, summary.active_members);
    println!("{:<20} {}", s.stat_completed, summary.completed_projects);
    println!("{:<20} {}%", s.stat_progress, summary.average_progress);
    println!();

    println!("{}", s.in_progress_title);
    for p in page.in_flight() {
        println!("  {:<20} {:>3}%  {}", p.name, p.progress, p.status.label(lang));
    }
    println!();

    println!("{}", s.recent_activity_title);
    for entry in page.activity() {
        println!("  {} ({})", entry.sentence(lang), entry.when(lang));
    }
    Ok(())
}
