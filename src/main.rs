mod client;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod rouge;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL, Generator, OllamaClient, OllamaConfig};
use crate::model::scores::Averages;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage4_report::{Stage4Input, run_stage4};
use crate::pipeline::{PipelineError, run_samples};

const DEFAULT_FIXTURES: &str = "test.json";
const DEFAULT_CHART: &str = "rouge_scores.svg";

#[derive(Debug, Parser)]
#[command(
    name = "rouge-evalqc",
    version,
    about = "Score a local Ollama model against reference answers with ROUGE-1/2/L"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a reply for every fixture, score it and report.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// JSON array of {"input", "expected"} objects.
    #[arg(long, default_value = DEFAULT_FIXTURES)]
    fixtures: PathBuf,
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
    /// Where the SVG score chart is written.
    #[arg(long, default_value = DEFAULT_CHART)]
    chart: PathBuf,
    /// Per-request timeout. Unbounded when omitted.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_eval(&args, &mut out).map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

fn client_config(args: &RunArgs) -> OllamaConfig {
    OllamaConfig::new(args.model.as_str())
        .with_endpoint(args.endpoint.as_str())
        .with_timeout(args.timeout_secs.map(Duration::from_secs))
}

fn run_eval<W: Write>(args: &RunArgs, out: &mut W) -> Result<Averages, PipelineError> {
    let fixtures = run_stage1(&args.fixtures)?;
    let client = OllamaClient::new(client_config(args))?;
    tracing::info!(
        model = client.model(),
        endpoint = %client.config().endpoint,
        "starting evaluation"
    );
    evaluate(&fixtures, &client, &args.chart, &mut *out)
}

fn evaluate<G, W>(
    fixtures: &[input::Fixture],
    generator: &G,
    chart_path: &std::path::Path,
    out: &mut W,
) -> Result<Averages, PipelineError>
where
    G: Generator + ?Sized,
    W: Write,
{
    let records = run_samples(fixtures, generator, &mut *out)?;
    run_stage4(
        &Stage4Input {
            records: &records,
            model: generator.model(),
            chart_path,
        },
        out,
    )
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
