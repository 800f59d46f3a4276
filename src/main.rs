//! ATS Pro Scorer: score resumes against job descriptions the way
//! applicant tracking systems do

use ats_pro_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_pro_scorer::config::{Config, OutputFormat};
use ats_pro_scorer::error::{AtsProError, Result};
use ats_pro_scorer::job::JobDescription;
use ats_pro_scorer::output::{save_report_to_file, suggest_filename, ReportGenerator, ScoreReport};
use ats_pro_scorer::scoring::AtsProScorer;
use clap::Parser;
use log::{error, info};
use std::fs;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            matcher,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume scoring");

            // Validate input files
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| AtsProError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["toml", "json"])
                .map_err(|e| AtsProError::InvalidInput(format!("Job description file: {}", e)))?;

            // CLI format wins over the configured default
            let output_format = match output.as_deref() {
                Some(name) => cli::parse_output_format(name).map_err(AtsProError::InvalidInput)?,
                None => config.output.format,
            };

            // Machine-readable formats go to stdout unadorned
            let banner = matches!(output_format, OutputFormat::Console) || save.is_some();
            if banner {
                println!("🚀 ATS scoring");
                println!("📄 Resume: {}", resume.display());
                println!("💼 Job Description: {}", job.display());
                println!("🔧 Output Format: {:?}", output_format);
            }

            // Matcher override from the command line
            let mut rules = config.rules.clone();
            if let Some(matcher) = matcher.as_deref() {
                rules.matcher =
                    cli::parse_matcher_kind(matcher).map_err(AtsProError::InvalidInput)?;
            }

            let scorer = AtsProScorer::from_parts(config.weights, &rules)?;

            let resume_text = fs::read_to_string(&resume)?;
            let job_description = JobDescription::from_path(&job)?;

            info!("Scoring resume against '{}'", job_description.title);
            let result = scorer.score(Some(&resume_text), &job_description);

            let report = ScoreReport::new(
                result,
                scorer.weights(),
                scorer.matcher_kind(),
                resume.to_string_lossy(),
                job.to_string_lossy(),
                job_description.title.clone(),
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(suggest_filename(
                            &output_format,
                            &resume.to_string_lossy(),
                            true,
                        ))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &target)?;
                    println!("💾 Report saved to {}", target.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config File: {}", Config::config_path().display());
                println!("\nScoring Weights:");
                println!("  Skills: {:.1}%", config.weights.skills * 100.0);
                println!("  Experience: {:.1}%", config.weights.experience * 100.0);
                println!("  Education: {:.1}%", config.weights.education * 100.0);
                println!("  Formatting: {:.1}%", config.weights.formatting * 100.0);
                println!("\nSkill Matcher: {}", config.rules.matcher);
                println!(
                    "Required Headers: {}",
                    config.rules.required_headers.join(", ")
                );
                println!("Flag Penalty: {:.2}", config.rules.flag_penalty);
                println!("Default Output: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}
