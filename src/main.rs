use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use cadence::config::{Config, ConfigOverrides, OutputFormat};
use cadence::output::csv::results_to_csv;
use cadence::output::json::render_json;
use cadence::output::table::{
    render_batch_table, render_breakdown_table, render_result_table, render_whatif_table,
};
use cadence::questionnaire::{DecisionType, QuestionnaireAnswers};
use cadence::scoring::breakdown::ScoreBreakdown;
use cadence::scoring::whatif::{AnswerChange, WhatIfResult};
use cadence::scoring::{explain, score, score_batch, simulate_whatif, RecommendationResult};
use cadence::server::run_server;
use cadence::telemetry;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "cadence",
    about = "Recommend a meeting, an email or an async message for an upcoming decision",
    version
)]
struct Cli {
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// table, json or csv (defaults to the configured format)
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct AnswerArgs {
    /// JSON file holding one answer set, or `-` for stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
    #[arg(long)]
    urgency: Option<String>,
    #[arg(long)]
    complexity: Option<String>,
    /// Repeat for several decision types
    #[arg(long = "decision-type")]
    decision_types: Vec<String>,
    /// One of 1–2, 3–5, 6–10, 10+ (en-dash)
    #[arg(long)]
    stakeholders: Option<String>,
    #[arg(long)]
    cross_team: bool,
    #[arg(long)]
    emotional_risk: Option<String>,
    #[arg(long)]
    change_impact: Option<String>,
    #[arg(long)]
    recurring: bool,
    #[arg(long)]
    recurring_type: Option<String>,
    #[arg(long)]
    project_length: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score one answer set
    Score(AnswerArgs),
    /// Show how each answer moved each channel score
    Explain(AnswerArgs),
    /// Compare the recommendation before and after changing some answers
    Whatif {
        #[command(flatten)]
        answers: AnswerArgs,
        /// field=value, e.g. `--set urgency=high --set decisionTypes='["decide"]'`
        #[arg(long = "set", value_parser = parse_change, required = true)]
        changes: Vec<AnswerChange>,
    },
    /// Score a JSON array of answer sets
    Batch { file: PathBuf },
    /// Start the REST API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Write a config template or print the effective config
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(config_path.as_path()))?;
    let (host, port) = match &cli.command {
        Commands::Serve { host, port } => (host.clone(), *port),
        _ => (None, None),
    };
    config.apply_overrides(ConfigOverrides {
        host,
        port,
        output_format: cli.output,
        log_level: cli.log_level.clone(),
    });
    telemetry::init(&config.logging.level)?;

    match &cli.command {
        Commands::Score(args) => {
            let answers = resolve_answers(args)?;
            let result = score(&answers);
            debug!(recommendation = %result.recommendation, "scored answer set");
            print_result(&result, &config)?;
        }
        Commands::Explain(args) => {
            let answers = resolve_answers(args)?;
            print_breakdown(&explain(&answers), &config)?;
        }
        Commands::Whatif { answers, changes } => {
            let answers = resolve_answers(answers)?;
            let result = simulate_whatif(&answers, changes)?;
            print_whatif(&result, &config)?;
        }
        Commands::Batch { file } => {
            let raw = read_input(file)?;
            let answer_sets = QuestionnaireAnswers::many_from_json(&raw)
                .with_context(|| format!("failed parsing answer sets: {}", file.display()))?;
            let results = score_batch(&answer_sets);
            info!("scored {} answer sets", results.len());
            print_batch(&results, &config)?;
        }
        Commands::Serve { .. } => {
            let bind = config.bind_address();
            let addr: SocketAddr = bind
                .parse()
                .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
            return run_server(config, addr).await;
        }
        Commands::Config { init, show } => {
            handle_config_command(*init, *show, &config, &config_path)?;
        }
    }

    Ok(())
}

fn handle_config_command(
    init: bool,
    show: bool,
    config: &Config,
    config_path: &Path,
) -> Result<()> {
    if init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if show || !init {
        println!("{}", render_json(config, config.output.pretty_json)?);
    }
    Ok(())
}

fn parse_change(raw: &str) -> std::result::Result<AnswerChange, String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{raw}'"))?;
    let field = field.trim();
    if QuestionnaireAnswers::canonical_field(field).is_none() {
        return Err(format!("unknown answer field: {field}"));
    }
    // Bare words such as `high` or `10+` are not JSON, so they are taken as strings.
    let value = serde_json::from_str(value.trim())
        .unwrap_or_else(|_| Value::String(value.trim().to_string()));
    Ok(AnswerChange {
        field: field.to_string(),
        value,
    })
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed reading answers from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed reading answers: {}", path.display()))
}

/// Starts from the input file (if any) and lets individual flags override it.
fn resolve_answers(args: &AnswerArgs) -> Result<QuestionnaireAnswers> {
    let mut answers = match &args.input {
        Some(path) => QuestionnaireAnswers::from_json(&read_input(path)?)
            .with_context(|| format!("failed parsing answers: {}", path.display()))?,
        None => QuestionnaireAnswers::default(),
    };

    let text_fields = [
        ("urgency", &args.urgency),
        ("complexity", &args.complexity),
        ("stakeholderCount", &args.stakeholders),
        ("emotionalRisk", &args.emotional_risk),
        ("changeImpact", &args.change_impact),
        ("recurring_type", &args.recurring_type),
        ("project_length", &args.project_length),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            answers.set_field(field, Value::String(value.clone()))?;
        }
    }
    if !args.decision_types.is_empty() {
        let kinds = args
            .decision_types
            .iter()
            .map(|kind| Value::String(kind.clone()))
            .collect();
        answers.set_field("decisionTypes", Value::Array(kinds))?;
    }
    if args.cross_team {
        answers.set_field("crossTeamDependencies", Value::Bool(true))?;
    }
    if args.recurring {
        answers.set_field("is_recurring", Value::Bool(true))?;
    }
    if answers.decision_types.contains(&DecisionType::Unrecognized) {
        warn!("some decision types are not recognized; they add no weight");
    }
    Ok(answers)
}

fn print_result(result: &RecommendationResult, config: &Config) -> Result<()> {
    match config.output.format {
        OutputFormat::Table => println!("{}", render_result_table(result)),
        OutputFormat::Json => println!("{}", render_json(result, config.output.pretty_json)?),
        OutputFormat::Csv => print!("{}", results_to_csv(std::slice::from_ref(result))?),
    }
    Ok(())
}

fn print_batch(results: &[RecommendationResult], config: &Config) -> Result<()> {
    match config.output.format {
        OutputFormat::Table => println!("{}", render_batch_table(results)),
        OutputFormat::Json => println!("{}", render_json(results, config.output.pretty_json)?),
        OutputFormat::Csv => print!("{}", results_to_csv(results)?),
    }
    Ok(())
}

fn print_breakdown(breakdown: &ScoreBreakdown, config: &Config) -> Result<()> {
    match config.output.format {
        OutputFormat::Table => println!("{}", render_breakdown_table(breakdown)),
        OutputFormat::Json => println!("{}", render_json(breakdown, config.output.pretty_json)?),
        OutputFormat::Csv => {
            warn!("CSV output for explain not implemented, using JSON");
            println!("{}", render_json(breakdown, config.output.pretty_json)?);
        }
    }
    Ok(())
}

fn print_whatif(result: &WhatIfResult, config: &Config) -> Result<()> {
    match config.output.format {
        OutputFormat::Table => println!("{}", render_whatif_table(result)),
        OutputFormat::Json => println!("{}", render_json(result, config.output.pretty_json)?),
        OutputFormat::Csv => print!(
            "{}",
            results_to_csv(&[result.before.clone(), result.after.clone()])?
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use clap::CommandFactory;

    use super::{parse_change, resolve_answers, AnswerArgs, Cli};
    use cadence::questionnaire::{StakeholderCount, Urgency};

    #[test]
    fn parses_bare_and_json_change_values() {
        let change = parse_change("urgency=high").expect("bare word");
        assert_eq!(change.value, json!("high"));

        let change = parse_change("decisionTypes=[\"decide\",\"align\"]").expect("json array");
        assert_eq!(change.value, json!(["decide", "align"]));

        let change = parse_change("cross_team=true").expect("bool");
        assert_eq!(change.value, json!(true));

        assert!(parse_change("urgency").is_err());
        assert!(parse_change("budget=3").is_err());
    }

    #[test]
    fn every_subcommand_has_help_text() {
        let command = Cli::command();
        for subcommand in command.get_subcommands().filter(|c| c.get_name() != "help") {
            assert!(
                subcommand.get_about().is_some(),
                "{} has no help text",
                subcommand.get_name()
            );
        }
    }

    #[test]
    fn flags_build_answers_without_a_file() {
        let args = AnswerArgs {
            urgency: Some("critical".to_string()),
            stakeholders: Some("10+".to_string()),
            decision_types: vec!["decide".to_string(), "escalate".to_string()],
            cross_team: true,
            ..AnswerArgs::default()
        };
        let answers = resolve_answers(&args).expect("answers");
        assert_eq!(answers.urgency, Urgency::Critical);
        assert_eq!(answers.stakeholder_count, StakeholderCount::TenPlus);
        assert_eq!(answers.decision_types.len(), 2);
        assert!(answers.cross_team_dependencies);
    }
}
