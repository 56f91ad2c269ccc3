//! quizmaker CLI - pick quiz criteria and generate questions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use quizmaker::models::{Difficulty, Domain, OutputFormat, QuestionCount, QuestionType};
use quizmaker::render::{render_questions, render_selection, save_csv};
use quizmaker::{
    Config, CriteriaCatalog, GenerationSettings, GeneratorClient, Level, ProgressPolicy,
    SelectionController, Submitter,
};
use std::path::PathBuf;
use tracing::{Level as LogLevel, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "quizmaker")]
#[command(version)]
#[command(about = "Generate quiz questions from cascading criteria via a generation service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Criteria path, applied top-down through the selection controller.
#[derive(clap::Args)]
struct CriteriaArgs {
    /// Domain (IT, 일반, 법률, 동향)
    #[arg(short, long)]
    domain: Option<Domain>,

    /// Main criterion within the domain
    #[arg(long)]
    main: Option<String>,

    /// Sub criterion within the main criterion
    #[arg(long)]
    sub: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List domains
    Domains,

    /// List question types
    QuestionTypes,

    /// Show criteria options for a selection path
    Criteria {
        #[command(flatten)]
        path: CriteriaArgs,
    },

    /// Generate questions
    Generate {
        #[command(flatten)]
        path: CriteriaArgs,

        /// Detail criterion within the sub criterion
        #[arg(long)]
        detail: Option<String>,

        /// Question type
        #[arg(short = 't', long)]
        question_type: Option<QuestionType>,

        /// Number of questions (1-10)
        #[arg(short = 'n', long)]
        count: Option<u8>,

        /// Difficulty (하, 중, 상)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Omit explanations from answers
        #[arg(long)]
        no_explanation: bool,

        /// Output format (Plain Text, CSV)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Where to write the CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate,

    /// Show example configuration
    Example,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { LogLevel::DEBUG } else { LogLevel::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn print_example_config() {
    let example = r#"# quizmaker configuration file

[service]
# ${ENV_VAR} placeholders are expanded
base_url = "http://localhost:5000"
generate_path = "/generate"
csv_path = "/generate/csv"
timeout_secs = 180

[progress]
tick_ms = 500
step = 10
cap = 90
complete = 100
reset_delay_ms = 1500

[defaults]
domain = "IT"
question_type = "기본 정보 확인"
difficulty = "중"
num_questions = 1
include_explanation = true
output_format = "Plain Text"

[submission]
# Ignore completions of requests superseded by a newer submission
dedupe_stale = false
csv_output = "questions.csv"
"#;
    println!("{example}");
}

/// Apply one level of the selection, listing the valid options on failure.
fn select(controller: &mut SelectionController<'_>, level: Level, value: &str) -> Result<()> {
    let available = match level {
        Level::Domain => controller.domain_options(),
        _ => controller.options().at(level).to_vec(),
    };
    controller
        .select(level, value)
        .with_context(|| format!("Available {level} options: {}", available.join(" | ")))?;
    Ok(())
}

fn select_path<'c>(
    catalog: &'c CriteriaCatalog,
    config: &Config,
    path: &CriteriaArgs,
    detail: Option<&str>,
) -> Result<SelectionController<'c>> {
    let mut controller = SelectionController::new(catalog, &config.defaults.domain)?;

    if let Some(domain) = path.domain {
        select(&mut controller, Level::Domain, domain.label())?;
    }
    if let Some(main) = &path.main {
        select(&mut controller, Level::Main, main)?;
    }
    if let Some(sub) = &path.sub {
        select(&mut controller, Level::Sub, sub)?;
    }
    if let Some(detail) = detail {
        select(&mut controller, Level::Detail, detail)?;
    }
    Ok(controller)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Example => {
            print_example_config();
            return Ok(());
        }

        Commands::Domains => {
            for domain in CriteriaCatalog::builtin().domains() {
                println!("{domain}");
            }
        }

        Commands::QuestionTypes => {
            for ty in QuestionType::ALL {
                println!("{:<12} {}", ty.label(), ty.description());
            }
        }

        Commands::Validate => {
            let config = Config::from_file(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

            info!("Configuration is valid");
            info!("  Service: {}", config.service.generate_url());
            info!("  Default domain: {}", config.defaults.domain);
            info!(
                "  Progress: +{}% every {}ms up to {}%",
                config.progress.step, config.progress.tick_ms, config.progress.cap
            );
            return Ok(());
        }

        Commands::Criteria { path } => {
            let config = Config::load_or_default(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
            let controller = select_path(CriteriaCatalog::builtin(), &config, &path, None)?;
            print!(
                "{}",
                render_selection(controller.state(), controller.options())
            );
        }

        Commands::Generate {
            path,
            detail,
            question_type,
            count,
            difficulty,
            no_explanation,
            format,
            output,
        } => {
            let config = Config::load_or_default(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

            let controller =
                select_path(CriteriaCatalog::builtin(), &config, &path, detail.as_deref())?;

            let mut settings = GenerationSettings {
                include_explanation: config.defaults.include_explanation && !no_explanation,
                ..config.defaults.settings()
            };
            if let Some(question_type) = question_type {
                settings.question_type = question_type;
            }
            if let Some(count) = count {
                settings.num_questions = QuestionCount::new(count)?;
            }
            if let Some(difficulty) = difficulty {
                settings.difficulty = difficulty;
            }
            if let Some(format) = format {
                settings.output_format = format;
            }
            let settings = settings.with_selection(controller.state())?;

            let client = GeneratorClient::new(&config.service)?;
            let submitter = Submitter::new(client, ProgressPolicy::from_config(&config.progress))
                .with_dedupe_stale(config.submission.dedupe_stale);

            // Mirror the board's progress value on a terminal bar.
            let pb = ProgressBar::new(100);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}% {msg}")?
                    .progress_chars("##-"),
            );
            pb.set_message("문제 생성 중");
            let mut board = submitter.subscribe();
            let watcher = {
                let pb = pb.clone();
                tokio::spawn(async move {
                    while board.changed().await.is_ok() {
                        let progress = board.borrow_and_update().progress;
                        pb.set_position(u64::from(progress));
                    }
                })
            };

            info!(
                domain = %settings.domain,
                main = %settings.main_criteria,
                sub = %settings.sub_criteria,
                detail = %settings.detail_criteria,
                count = settings.num_questions.get(),
                format = %settings.output_format,
                "Submitting generation request"
            );

            let outcome = match settings.output_format {
                OutputFormat::PlainText => submitter.submit(&settings).await.map(Some),
                OutputFormat::Csv => {
                    let bytes = submitter.submit_csv(&settings).await;
                    match bytes {
                        Ok(bytes) => {
                            let path = output.unwrap_or_else(|| config.submission.csv_output.clone());
                            save_csv(&path, &bytes)?;
                            pb.println(format!("CSV saved to {}", path.display()));
                            Ok(None)
                        }
                        Err(e) => Err(e),
                    }
                }
            };

            watcher.abort();
            pb.finish_and_clear();

            let quiz = outcome.context("문제 생성 중 오류가 발생했습니다")?;
            if let Some(quiz) = quiz {
                if quiz.questions.is_empty() {
                    println!("생성된 문제가 없습니다.");
                } else {
                    print!("{}", render_questions(&quiz.questions));
                }
                info!(
                    request_id = %quiz.request_id,
                    received_at = %quiz.received_at.to_rfc3339(),
                    "Done"
                );
            }
        }
    }

    Ok(())
}
