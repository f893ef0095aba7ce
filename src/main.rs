use chrono::Local;
use clap::Parser;
use moodlog::application::manage_config::format_max_attempts;
use moodlog::application::{
    init::init, ConfigService, DiagnoseService, HistoryService, MoodInput, RecordMoodService,
};
use moodlog::cli::{format_diagnose_result, format_entry_list, format_record_outcome};
use moodlog::cli::{Cli, Commands};
use moodlog::domain::{Mood, TimeReference};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{FileSystemRepository, JournalRepository, TerminalPrompt};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MOODLOG_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Diagnostics go to stderr so stdout stays the user-facing channel.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path, diary }) => {
            init(&path, diary.as_deref())?;
            Ok(())
        }
        Some(Commands::Diagnose) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = DiagnoseService::new(repo.entry_store(&config));

            let (diagnosis, entries) = service.execute()?;
            println!("{}", format_diagnose_result(diagnosis, entries));
            Ok(())
        }
        Some(Commands::History { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = HistoryService::new(repo.entry_store(&config));

            let entries = service.execute(limit)?;
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("diary = {}", config.diary);
                println!("max_attempts = {}", format_max_attempts(config.max_attempts));
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: diary, max_attempts, created");
                Ok(())
            }
        }
        None => record(cli.time_ref.as_deref(), cli.mood.as_deref()),
    }
}

fn record(time_ref: Option<&str>, mood: Option<&str>) -> Result<(), MoodlogError> {
    let date = match time_ref {
        Some(s) => TimeReference::parse(s)?,
        None => TimeReference::Today,
    }
    .resolve(Local::now().date_naive())?;

    // Validate a supplied mood before touching the diary.
    let given = mood
        .map(|label| {
            Mood::from_str(label).map_err(|_| MoodlogError::InvalidMood(label.to_string()))
        })
        .transpose()?;

    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let service =
        RecordMoodService::new(repo.entry_store(&config)).with_max_attempts(config.max_attempts);

    let mut prompt = TerminalPrompt::stdio();
    let input = match given {
        Some(mood) => MoodInput::Given(mood),
        None => MoodInput::Ask(&mut prompt),
    };

    let outcome = service.execute(date, input)?;
    println!("{}", format_record_outcome(&outcome));
    Ok(())
}
