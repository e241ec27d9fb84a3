//! Portal client CLI
//!
//! Runs one search session from the terminal, either against the in-process
//! mock generator or a running portal API (`--api-url`).

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use portal_api::listings::{ApiJobSource, JobSource, LocaleProfile, MockJobGenerator, ProfileKind};
use portal_api::portal::animation::Typewriter;
use portal_api::portal::render::render_notice;
use portal_api::portal::session::{StatusLine, SubmitRejected};
use portal_api::portal::{Node, SearchSession, SessionConfig, SubmitOutcome};

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Deep Research Job Portal search client", version)]
struct Cli {
    /// Job search query (trimmed; must not be blank)
    #[arg(long, short = 'q')]
    query: String,

    /// Location filter (trimmed; blank means all locations)
    #[arg(long, short = 'l', default_value = "")]
    location: String,

    /// Locale profile for local generation: western | indian
    #[arg(long, short = 'p', default_value = "western")]
    profile: ProfileKind,

    /// Base URL of a running portal API; local generation when omitted
    #[arg(long)]
    api_url: Option<String>,

    /// Print status, notices and results as HTML fragments instead of plain text
    #[arg(long)]
    html: bool,

    /// Artificial search delay in milliseconds
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,

    /// Typewriter delay per character in milliseconds
    #[arg(long, default_value_t = 50)]
    type_ms: u64,
}

impl Cli {
    fn typewriter(&self, message: &str) -> Typewriter {
        Typewriter::new(message).with_delay(Duration::from_millis(self.type_ms))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source: Arc<dyn JobSource> = match &cli.api_url {
        Some(url) => Arc::new(ApiJobSource::new(url.as_str())),
        None => Arc::new(MockJobGenerator::new(Arc::new(LocaleProfile::from_kind(
            cli.profile,
        )))),
    };
    debug!("Portal client using {} source", source.backend());

    let config = SessionConfig {
        search_delay: Duration::from_millis(cli.delay_ms),
        ..SessionConfig::default()
    };
    let mut session = SearchSession::new(source, config);

    emit_status(&cli, session.status()).await;

    let outcome = match session.begin(&cli.query, &cli.location) {
        Ok(search) => {
            emit_status(&cli, session.status()).await;
            session.run(search).await
        }
        Err(rejected) => SubmitOutcome::Rejected(rejected),
    };

    for notice in session.visible_notices() {
        let node = render_notice(&notice.message);
        if cli.html {
            eprintln!("{}", node.to_html());
        } else {
            eprintln!("{}", node.to_text());
        }
    }

    match outcome {
        SubmitOutcome::Completed { counter, .. } => {
            print_results(session.results(), cli.html);
            emit_status(&cli, session.status()).await;
            counter
                .play(|value| {
                    print!("\rTOTAL JOBS: {value}");
                    std::io::stdout().flush().ok();
                })
                .await;
            println!();
            Ok(())
        }
        SubmitOutcome::Rejected(SubmitRejected::MissingQuery) => {
            Err(anyhow!("search query is required"))
        }
        SubmitOutcome::Rejected(SubmitRejected::Busy) => {
            Err(anyhow!("a search is already in progress"))
        }
        SubmitOutcome::Failed { message } => {
            emit_status(&cli, session.status()).await;
            Err(anyhow!("search failed: {message}"))
        }
    }
}

/// Prints the status line: the rendered fragment with `--html`, otherwise a
/// typewriter reveal on a single terminal line.
async fn emit_status(cli: &Cli, status: &StatusLine) {
    if cli.html {
        println!("{}", status.render().to_html());
        return;
    }
    cli.typewriter(&status.message)
        .play(|frame| {
            let cursor = if frame.cursor { "_" } else { " " };
            print!("\r{}{cursor}", frame.text);
            std::io::stdout().flush().ok();
        })
        .await;
    println!();
}

fn print_results(nodes: &[Node], html: bool) {
    for node in nodes {
        if html {
            println!("{}", node.to_html());
        } else {
            println!("{}\n", node.to_text());
        }
    }
}
