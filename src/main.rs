use std::sync::Arc;

use ray_docs_bot::channels::{ReplySink, SlackChannel};
use ray_docs_bot::config::Config;
use ray_docs_bot::pipeline::processor::EventProcessor;
use ray_docs_bot::pipeline::rules::RuleSet;
use ray_docs_bot::server::{AppState, EVENTS_PATH, event_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export SLACK_BOT_TOKEN=xoxb-...");
        eprintln!("  export SLACK_SIGNING_SECRET=...");
        std::process::exit(1);
    });

    // The signing secret is loaded to honor the hosting contract, but
    // inbound requests are not signature-verified.
    tracing::warn!(
        "Inbound request signatures are not verified; SLACK_SIGNING_SECRET is loaded but unused"
    );

    eprintln!("🤖 Ray Docs Bot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Events API: http://0.0.0.0:{}{}", config.port, EVENTS_PATH);

    // Process-wide immutable: the compiled rules and the bot token live for
    // the process lifetime and are shared by reference into every request.
    let sink: Arc<dyn ReplySink> = Arc::new(SlackChannel::new(config.bot_token));
    let processor = Arc::new(EventProcessor::new(RuleSet::default_rules(), sink));
    let app = event_routes(AppState { processor });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Slack events server started");
    axum::serve(listener, app).await?;

    Ok(())
}
