//! CLI entrypoint for adchat
//!
//! Wires together all layers using dependency injection: loads the config,
//! resolves credentials (refusing to start without them), builds the
//! provider adapters, and runs either a one-shot question or the REPL.

use adchat_application::{ChatTurnUseCase, ConversationLogger, NoConversationLogger};
use adchat_infrastructure::{
    ConfigLoader, Credentials, JsonlConversationLogger, OpenAiGateway, SerpApiSearch,
};
use anyhow::{Context, Result, bail};
use clap::Parser;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "adchat",
    about = "Conversational assistant with periodic sponsored recommendations"
)]
struct Cli {
    /// Question to answer once (starts the interactive REPL when omitted)
    question: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a config file (overrides discovered configs)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the chat model
    #[arg(long)]
    model: Option<String>,

    /// Override the recommendation trigger period
    #[arg(long)]
    trigger_period: Option<u32>,

    /// Write a JSONL transcript of the conversation to this path
    #[arg(long)]
    log_conversation: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ConfigLoader::load(cli.config.as_ref())
        .context("failed to load configuration")?;
    for issue in config.validate() {
        warn!("config: {issue}");
    }

    // Startup-fatal: refuse to run without both provider keys
    let credentials = Credentials::resolve(&config).context("missing credentials")?;

    let mut params = config.to_chat_params();
    if let Some(model) = cli.model {
        params = params.with_model(model);
    }
    if let Some(period) = cli.trigger_period {
        params = params.with_trigger_period(period);
    }
    info!(model = %params.model, trigger_period = params.trigger_period, "starting adchat");

    // === Dependency Injection ===
    let gateway = Arc::new(
        OpenAiGateway::new(credentials.openai_api_key, params.model.clone())
            .with_base_url(config.openai.base_url.clone()),
    );
    let search = Arc::new(
        SerpApiSearch::new(credentials.serpapi_key)
            .with_base_url(config.serpapi.base_url.clone()),
    );

    let transcript_path = cli
        .log_conversation
        .or_else(|| config.log.conversation_log.clone());
    let logger: Arc<dyn ConversationLogger> = match transcript_path {
        Some(path) => match JsonlConversationLogger::new(&path) {
            Some(jsonl) => {
                info!("writing transcript to {}", jsonl.path().display());
                Arc::new(jsonl)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let mut chat =
        ChatTurnUseCase::new(gateway, search, params).with_conversation_logger(logger);

    // One-shot mode
    if let Some(question) = cli.question {
        let answer = chat.chat(&question).await?;
        println!("{answer}");
        return Ok(());
    }

    run_repl(&mut chat).await
}

/// Read-evaluate-print loop: one user line per iteration, terminated by
/// `quit`/`exit`, Ctrl-C, or end of input.
async fn run_repl(chat: &mut ChatTurnUseCase) -> Result<()> {
    println!("adchat - type 'quit' to exit.");

    let mut editor = Reedline::create();
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("you".to_string()),
        DefaultPromptSegment::Empty,
    );

    loop {
        match editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                    break;
                }
                // A failed answer ends the turn, not the session
                match chat.chat(line).await {
                    Ok(answer) => println!("\n{answer}\n"),
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => break,
            Err(e) => bail!("failed to read input: {e}"),
        }
    }

    Ok(())
}
