use secrecy::SecretString;

use lead_triage::config::{SourceMode, TriageConfig};
use lead_triage::pipeline::TriagePipeline;
use lead_triage::store::{LeadFilter, ReviewStore, StatusFilter};

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

    let config = TriageConfig {
        source_credential: std::env::var("LEAD_TRIAGE_SOURCE_KEY")
            .ok()
            .map(SecretString::from),
        source_channel_id: std::env::var("LEAD_TRIAGE_CHANNEL_ID").ok(),
        classifier_credential: std::env::var("LEAD_TRIAGE_CLASSIFIER_KEY")
            .ok()
            .map(SecretString::from),
    };

    // Unset mode defaults to fixture; a value that parses to neither mode
    // is a reported misconfiguration, not a silent fallback.
    let mode = match std::env::var("LEAD_TRIAGE_MODE") {
        Ok(raw) => match SourceMode::parse(&raw) {
            Ok(mode) => mode,
            Err(e) => {
                eprintln!("Error: LEAD_TRIAGE_MODE — {e}");
                std::process::exit(1);
            }
        },
        Err(_) => SourceMode::Fixture,
    };

    eprintln!("📋 Lead Triage v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Mode: {}", mode.label());

    let pipeline = match TriagePipeline::for_mode(mode, &config) {
        Ok(p) => p,
        Err(e) => {
            // Missing credentials route the user to configuration, never
            // to a failed network call.
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let store = ReviewStore::new();
    let count = pipeline.run_into(&store).await?;
    eprintln!("   Triaged {count} comment(s)\n");

    for comment in store.view(StatusFilter::Any, LeadFilter::Any).await {
        let badge = if comment.is_lead { "LEAD   " } else { "general" };
        println!(
            "[{badge}] {} — {} ({})",
            comment.author_name, comment.text, comment.rationale
        );
        println!("          ↳ suggested: {}", comment.suggested_reply);
    }

    println!(
        "\n{} unread lead(s) awaiting review",
        store.unread_lead_count().await
    );

    Ok(())
}
