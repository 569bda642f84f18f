//! Command-line front end for the meeting tracker.
//!
//! # Responsibility
//! - Load configuration, start logging, and call the core service.
//! - Render results as text (or JSON) and map failures to exit codes.

use clap::{Parser, Subcommand};
use meeting_core::{init_logging_from, AppConfig, Meeting, MeetingService};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "meeting")]
#[command(version)]
#[command(about = "Personal tutor meeting tracker", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = AppConfig::default_path())]
    config: PathBuf,

    /// Print listed meetings as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a meeting
    Add {
        /// Meeting date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Meeting time (HH:MM, 24-hour)
        #[arg(long)]
        time: String,
        /// Topics discussed
        #[arg(long)]
        topics: String,
        /// Referrals made, if any
        #[arg(long, default_value = "")]
        referrals: String,
    },
    /// List every recorded meeting
    List,
    /// Find meetings whose topics or referrals contain KEYWORD
    Search { keyword: String },
    /// Create the meeting store if it does not exist
    Init,
    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, Box<dyn Error>> {
    let config = AppConfig::load(&args.config)?;

    if let Command::Config = args.command {
        print!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    init_logging_from(&config.logging)?;
    let service = MeetingService::open(&config)?;

    match args.command {
        Command::Add {
            date,
            time,
            topics,
            referrals,
        } => {
            let outcome = service.add(&date, &time, &topics, &referrals);
            if outcome.success {
                println!("{}", outcome.message);
                return Ok(ExitCode::SUCCESS);
            }
            eprintln!("{}", outcome.message);
            Ok(ExitCode::FAILURE)
        }
        Command::List => {
            let meetings = service
                .list_all()
                .map_err(|err| format!("Failed to retrieve meetings: {err}"))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&meetings)?);
            } else if meetings.is_empty() {
                println!("No meetings found.");
            } else {
                println!("--- All Meetings ---");
                print_meetings(&meetings);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Search { keyword } => {
            let Some(keyword) = search_keyword(&keyword) else {
                eprintln!("Please enter a search keyword.");
                return Ok(ExitCode::FAILURE);
            };
            let meetings = service
                .search(keyword)
                .map_err(|err| format!("Failed to search meetings: {err}"))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&meetings)?);
            } else if meetings.is_empty() {
                println!("No meetings found matching '{keyword}'.");
            } else {
                println!("--- Meetings Matching '{keyword}' ---");
                print_meetings(&meetings);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Init => {
            log::info!("event=cli_init module=cli status=ok");
            println!(
                "Meeting store ready at {}",
                service.store().db_path().display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => Ok(ExitCode::SUCCESS),
    }
}

/// Rejects blank input but searches the keyword exactly as typed.
fn search_keyword(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn print_meetings(meetings: &[Meeting]) {
    for meeting in meetings {
        println!("{}", format_meeting(meeting));
    }
}

fn format_meeting(meeting: &Meeting) -> String {
    format!(
        "ID: {}, Date: {}, Time: {}, Topics: {}, Referrals: {}",
        meeting.id, meeting.date, meeting.time, meeting.topics, meeting.referrals
    )
}

#[cfg(test)]
mod tests {
    use super::{format_meeting, search_keyword, Args, Command};
    use clap::Parser;
    use meeting_core::Meeting;

    #[test]
    fn format_meeting_matches_result_pane_layout() {
        let meeting = Meeting {
            id: 7,
            date: "2023-10-01".to_string(),
            time: "14:30".to_string(),
            topics: "Essay plan".to_string(),
            referrals: String::new(),
        };
        assert_eq!(
            format_meeting(&meeting),
            "ID: 7, Date: 2023-10-01, Time: 14:30, Topics: Essay plan, Referrals: "
        );
    }

    #[test]
    fn add_referrals_default_to_empty() {
        let args = Args::try_parse_from([
            "meeting", "add", "--date", "2023-10-01", "--time", "14:30", "--topics", "Plan",
        ])
        .unwrap();
        match args.command {
            Command::Add { referrals, .. } => assert!(referrals.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn json_flag_is_accepted_after_subcommand() {
        let args = Args::try_parse_from(["meeting", "search", "Essay", "--json"]).unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Command::Search { ref keyword } if keyword == "Essay"));
    }

    #[test]
    fn search_keyword_rejects_blank_and_keeps_surrounding_spaces() {
        assert_eq!(search_keyword(""), None);
        assert_eq!(search_keyword("   "), None);
        assert_eq!(search_keyword(" 2"), Some(" 2"));
        assert_eq!(search_keyword("Referral 2"), Some("Referral 2"));
    }
}
