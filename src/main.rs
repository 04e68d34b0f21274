//! agentflow command line interface

use agentflow::config::AppConfig;
use agentflow::message::Message;
use agentflow::orchestrator::{build_orchestrator, OrchestratorConfig};
use agentflow::progress::{AgentProgress, ChannelObserver, ProgressObserver};
use agentflow::roles::{default_agents, DEFAULT_ROLES};
use agentflow::telemetry::{init_tracing, LogFormat};
use agentflow::{OrchestrationMode, Provider};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "agentflow", version, about = "Answer questions with a team of LLM agents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a question
    Ask(AskArgs),
    /// List the built-in agents
    Agents,
}

#[derive(clap::Args)]
struct AskArgs {
    /// The question to answer
    question: String,

    /// Orchestration strategy
    #[arg(long)]
    mode: Option<OrchestrationMode>,

    /// Application config file (TOML, YAML or JSON)
    #[arg(long, env = "AGENTFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// YAML file defining the agents (and optionally the pattern)
    #[arg(long)]
    agents: Option<PathBuf>,

    /// LLM backend
    #[arg(long, value_enum)]
    provider: Option<Provider>,

    /// Model identifier for the backend
    #[arg(long)]
    model: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Print the result message as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ask(args) => ask(args).await,
        Command::Agents => {
            for preset in DEFAULT_ROLES {
                println!("{} ({})\n{}\n", preset.name, preset.role, preset.system_prompt);
            }
            Ok(())
        }
    }
}

async fn ask(args: AskArgs) -> anyhow::Result<()> {
    if args.question.trim().is_empty() {
        bail!("question must not be blank");
    }

    let mut app = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(provider) = args.provider {
        app.provider = provider;
    }
    if let Some(model) = args.model {
        app.model = Some(model);
    }
    if let Some(format) = args.log_format {
        app.log_format = format;
    }
    init_tracing(app.log_format);

    let client = app.build_client()?;

    let (agents, file_mode) = match &args.agents {
        Some(path) => {
            let file = OrchestratorConfig::from_file(path)?;
            (file.build_agents(client)?, file.pattern)
        }
        None => (default_agents(client), None),
    };
    let mode = resolve_mode(args.mode, file_mode, app.mode);

    let (observer, mut events) = ChannelObserver::new();
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            print_progress(&event);
        }
    });

    let observer: Arc<dyn ProgressObserver> = Arc::new(observer);
    let orchestrator = build_orchestrator(mode, agents, Some(observer))?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Cancelling...");
            on_interrupt.cancel();
        }
    });

    let start = Instant::now();
    let result = orchestrator.execute(&args.question, &cancel).await;
    let elapsed = start.elapsed();

    // Dropping the orchestrator closes the progress channel.
    drop(orchestrator);
    let _ = printer.await;

    let message = result?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        println!("{}", format_result(&message, elapsed, mode));
    }
    Ok(())
}

/// `--mode`, then the agents file `pattern`, then the application config
fn resolve_mode(
    flag: Option<OrchestrationMode>,
    file: Option<OrchestrationMode>,
    app: OrchestrationMode,
) -> OrchestrationMode {
    flag.or(file).unwrap_or(app)
}

fn print_progress(event: &AgentProgress) {
    eprintln!("  [{}] {} ({}%)", event.agent, event.status, event.progress);
}

fn format_result(message: &Message, elapsed: Duration, mode: OrchestrationMode) -> String {
    let mut out = String::from("=== FINAL RESULT ===\n\n");
    out.push_str(&format!("From: {}\n\n", message.sender_or_user()));
    out.push_str(&format!("Content:\n{}\n\n", message.content()));
    out.push_str("=== METADATA ===\n");
    out.push_str(&format!("Processing Time: {:.2}s\n", elapsed.as_secs_f64()));
    out.push_str(&format!("Orchestration Mode: {}\n", mode));

    let sorted: BTreeMap<_, _> = message.metadata().iter().collect();
    for (key, value) in sorted {
        let rendered = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        out.push_str(&format!("{}: {}\n", key, rendered));
    }
    out
}
