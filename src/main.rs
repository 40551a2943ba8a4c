mod board;
mod catalog;
mod hint;
mod models;
mod progress;
mod session;
mod store;
mod tui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hint::MascotHints;
use models::JsonOutput;
use store::{ProgressStore, SaveFile};

const DEFAULT_SAVE_NAME: &str = "mathtrail.db";

#[derive(Parser)]
#[command(name = "mathtrail")]
#[command(about = "A gamified terminal learning path for math, with discovery boards and streaks")]
#[command(version)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive learning path (default)
    Tui,

    /// Show saved progress
    Progress,

    /// List available courses and their levels
    Courses,

    /// Delete all saved progress
    Reset,
}

fn get_save_path() -> PathBuf {
    save_path_from(std::env::var("MATHTRAIL_SAVE").ok())
}

fn save_path_from(env_override: Option<String>) -> PathBuf {
    if let Some(path) = env_override {
        return PathBuf::from(path);
    }

    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mathtrail");
    std::fs::create_dir_all(&config_dir).ok();
    config_dir.join(DEFAULT_SAVE_NAME)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let save_path = get_save_path();
    let save = SaveFile::open(&save_path)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            tui::run(Box::new(save), Box::new(MascotHints), catalog::courses())?;
        }

        Commands::Progress => {
            let progress = save.load()?.unwrap_or_default();
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&progress))?);
            } else {
                println!("Score: {}", progress.score);
                println!("Streak: {} days", progress.streak);
                println!(
                    "Onboarding: {}",
                    if progress.onboarding_done { "done" } else { "pending" }
                );
                if let Some(date) = progress.last_completion_date {
                    println!("Last completion: {}", date);
                }
                println!("Levels completed: {}", progress.completed_levels.len());
                for id in &progress.completed_levels {
                    println!("  ✓ {}", id);
                }
            }
        }

        Commands::Courses => {
            let courses = catalog::courses();
            let progress = save.load()?.unwrap_or_default();
            if cli.json {
                let summary: Vec<_> = courses
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "id": c.id,
                            "title": c.title,
                            "comingSoon": c.coming_soon,
                            "levels": c.level_count(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string(&JsonOutput::ok(&summary))?);
            } else {
                for course in &courses {
                    if course.coming_soon {
                        println!("{} {} (coming soon)", course.icon, course.title);
                        continue;
                    }
                    println!("{} {}", course.icon, course.title);
                    for level in course.flattened_levels() {
                        let mark = if progress.is_completed(level.id) {
                            "✓"
                        } else {
                            " "
                        };
                        println!("  {} {:<10} {}", mark, level.id, level.title);
                    }
                }
            }
        }

        Commands::Reset => {
            let removed = save.clear()?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(
                        serde_json::json!({ "removed": removed })
                    ))?
                );
            } else if removed {
                println!("Progress reset.");
            } else {
                println!("Nothing to reset.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    mod cli_parsing_tests {
        use super::*;

        #[test]
        fn no_subcommand_defaults_to_tui() {
            let cli = Cli::try_parse_from(["mathtrail"]).unwrap();
            assert!(cli.command.is_none());
            assert!(matches!(cli.command.unwrap_or(Commands::Tui), Commands::Tui));
        }

        #[test]
        fn parse_progress_command() {
            let cli = Cli::try_parse_from(["mathtrail", "progress"]).unwrap();
            assert!(!cli.json);
            assert!(matches!(cli.command, Some(Commands::Progress)));
        }

        #[test]
        fn parse_progress_with_json() {
            let cli = Cli::try_parse_from(["mathtrail", "--json", "progress"]).unwrap();
            assert!(cli.json);
        }

        #[test]
        fn parse_courses_command() {
            let cli = Cli::try_parse_from(["mathtrail", "courses"]).unwrap();
            assert!(matches!(cli.command, Some(Commands::Courses)));
        }

        #[test]
        fn parse_reset_command() {
            let cli = Cli::try_parse_from(["mathtrail", "reset"]).unwrap();
            assert!(matches!(cli.command, Some(Commands::Reset)));
        }

        #[test]
        fn unknown_subcommand_is_rejected() {
            assert!(Cli::try_parse_from(["mathtrail", "bogus"]).is_err());
        }
    }

    mod save_path_tests {
        use super::*;

        #[test]
        fn env_override_wins() {
            let path = save_path_from(Some("/tmp/mathtrail-test.db".to_string()));
            assert_eq!(path, PathBuf::from("/tmp/mathtrail-test.db"));
        }

        #[test]
        fn default_path_ends_with_save_name() {
            let path = save_path_from(None);
            assert!(path.ends_with(format!("mathtrail/{}", DEFAULT_SAVE_NAME)));
        }
    }
}
