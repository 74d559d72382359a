//! Command-line interface and command execution

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

use rsb_phonetics::{
    compare_phonetic_analysis, create_aggregate_phonetic_analysis, summarize_cohort,
    PhoneticAnalysisResult, PhoneticAnalyzer, RsbData, Transcriber, WordTest,
};

use crate::config::{OutputFormat, ReportConfig};
use crate::input::load_all;
use crate::lexicon::load_lexicon;
use crate::report::{self, AnalyzeReport, CompareReport, Envelope};

/// Phonetic error reports for RSB speech-in-noise tests
#[derive(Parser, Debug)]
#[command(name = "rsb-report", version)]
pub struct Cli {
    /// Configuration file (default: <config dir>/rsb-phonetics/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lexicon file, overrides `lexicon_path` from the configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the normalized form and phonemes of words
    Transcribe {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Align the phonemes of a target word and a response
    Align { target: String, response: String },

    /// Analyze participant session files
    Analyze {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Also report the pooled analysis and cohort statistics
        #[arg(long)]
        aggregate: bool,

        /// Confusions listed per participant
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Compare two participants, or one participant with the rest of a cohort
    Compare {
        #[arg(value_name = "FILE_A")]
        file_a: PathBuf,

        #[arg(value_name = "FILE_B", required_unless_present = "against_rest")]
        file_b: Option<PathBuf>,

        /// Compare FILE_A with the aggregate of these files
        #[arg(long, num_args = 1.., value_name = "FILE", conflicts_with = "file_b")]
        against_rest: Vec<PathBuf>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Explain a metric (lists the known keys without KEY)
    Explain { key: Option<String> },

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Log level from the flags, else from the configuration
    pub fn log_level(&self, config: &ReportConfig) -> Result<Level> {
        if self.quiet {
            return Ok(Level::ERROR);
        }
        match self.verbose {
            0 => config.level(),
            1 => Ok(Level::DEBUG),
            _ => Ok(Level::TRACE),
        }
    }

    /// Configuration for this run
    ///
    /// `init-config` never reads the existing file, so it can replace a broken one.
    pub fn load_config(&self) -> Result<ReportConfig> {
        let path = self.config.clone().unwrap_or_else(ReportConfig::default_config_path);

        if matches!(self.command, Command::InitConfig { .. }) {
            return Ok(ReportConfig {
                config_path: path,
                ..ReportConfig::default()
            });
        }

        ReportConfig::load_from(path)
    }
}

/// Analyze every session and pool them into one result
fn combined_analysis(analyzer: &PhoneticAnalyzer<'_>, sessions: &[RsbData]) -> Result<PhoneticAnalysisResult> {
    let results: Vec<PhoneticAnalysisResult> = sessions
        .iter()
        .map(|session| analyzer.analyze_person(session))
        .collect();

    create_aggregate_phonetic_analysis(&results).context("No sessions to analyze")
}

fn to_json<T: serde::Serialize>(body: T) -> Result<String> {
    serde_json::to_string_pretty(&Envelope::new(body)).context("Failed to serialize report")
}

/// Transcriber for the configured lexicon, or the built-in one
fn load_transcriber(cli: &Cli, config: &ReportConfig) -> Result<Cow<'static, Transcriber>> {
    match cli.lexicon.as_ref().or(config.lexicon_path.as_ref()) {
        Some(path) => {
            let transcriber = load_lexicon(path)
                .with_context(|| format!("Failed to load lexicon {}", path.display()))?;
            Ok(Cow::Owned(transcriber))
        }
        None => Ok(Cow::Borrowed(Transcriber::french())),
    }
}

/// Run a command and return what should be printed
pub fn execute(cli: &Cli, config: &ReportConfig) -> Result<String> {
    match &cli.command {
        Command::Transcribe { words } => {
            let transcriber = load_transcriber(cli, config)?;
            Ok(report::render_transcriptions(&transcriber, words))
        }

        Command::Align { target, response } => {
            let transcriber = load_transcriber(cli, config)?;
            let analyzer = PhoneticAnalyzer::new(&transcriber);
            let detail = analyzer.analyze_word_detail(&WordTest::new(target, response, 0.0));
            Ok(report::render_alignment(&detail))
        }

        Command::Analyze {
            files,
            aggregate,
            top,
            format,
        } => {
            let transcriber = load_transcriber(cli, config)?;
            let analyzer = PhoneticAnalyzer::new(&transcriber);

            let sessions = load_all(files)?;
            if sessions.is_empty() {
                bail!("No sessions found in the input files");
            }

            let participants: Vec<PhoneticAnalysisResult> = sessions
                .iter()
                .map(|session| analyzer.analyze_person(session))
                .collect();
            info!("✅ Analyzed {} participant(s)", participants.len());

            let (pooled, cohort) = if *aggregate && participants.len() > 1 {
                (
                    Some(create_aggregate_phonetic_analysis(&participants)?),
                    summarize_cohort(&participants),
                )
            } else {
                (None, None)
            };

            match format.unwrap_or(config.format) {
                OutputFormat::Json => to_json(AnalyzeReport {
                    participants,
                    aggregate: pooled,
                    cohort,
                }),
                OutputFormat::Text => {
                    let top = top.unwrap_or(config.top_confusions);
                    let mut sections: Vec<String> = participants
                        .iter()
                        .map(|result| report::render_analysis(result, top))
                        .collect();
                    if let Some(pooled) = &pooled {
                        sections.push(report::render_analysis(pooled, top));
                    }
                    if let Some(cohort) = &cohort {
                        sections.push(report::render_cohort(cohort));
                    }
                    Ok(sections.join("\n\n"))
                }
            }
        }

        Command::Compare {
            file_a,
            file_b,
            against_rest,
            format,
        } => {
            let transcriber = load_transcriber(cli, config)?;
            let analyzer = PhoneticAnalyzer::new(&transcriber);

            let first = combined_analysis(&analyzer, &load_all(std::slice::from_ref(file_a))?)
                .with_context(|| format!("Nothing to compare in {}", file_a.display()))?;

            let others: Vec<PathBuf> = match file_b {
                Some(path) => vec![path.clone()],
                None => against_rest.clone(),
            };
            let second = combined_analysis(&analyzer, &load_all(&others)?)
                .context("Nothing to compare against")?;

            let comparison = compare_phonetic_analysis(&first, &second);

            match format.unwrap_or(config.format) {
                OutputFormat::Json => to_json(CompareReport {
                    person1: first.person_name,
                    person2: second.person_name,
                    comparison,
                }),
                OutputFormat::Text => Ok(report::render_comparison(
                    &first.person_name,
                    &second.person_name,
                    &comparison,
                )),
            }
        }

        Command::Explain { key } => Ok(match key {
            Some(key) => report::render_explanation(key),
            None => report::render_explanation_keys(),
        }),

        Command::InitConfig { force } => init_config(&config.config_path, *force),
    }
}

fn init_config(path: &Path, force: bool) -> Result<String> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = ReportConfig {
        config_path: path.to_path_buf(),
        ..ReportConfig::default()
    };
    config.save()?;

    Ok(format!("📋 Configuration written to {}", path.display()))
}
