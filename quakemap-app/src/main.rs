use anyhow::Context;
use quakemap::{FeedClient, FeedProfile, Layer, MapBuilder};

/// Standalone composition tool: fetches the configured feeds and prints
/// the composed map description as JSON on stdout, with a layer summary
/// on stderr.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let profile = match std::env::args().nth(1).as_deref() {
        Some("daily") => FeedProfile::Daily,
        Some("monthly") | None => FeedProfile::Monthly,
        Some(other) => anyhow::bail!("unknown profile '{}', expected daily or monthly", other),
    };

    // Opaque tile-provider credential; substituted into tile URLs as-is
    let token = std::env::var("MAPBOX_TOKEN").unwrap_or_default();
    if token.is_empty() {
        eprintln!("warning: MAPBOX_TOKEN is not set, tile URLs will lack a token");
    }

    let config = profile.resolve().with_access_token(token);

    let client = FeedClient::new();
    let map = MapBuilder::new()
        .with_config(config)
        .fetch_and_build(&client)
        .await
        .context("failed to compose map")?;

    eprintln!("composed layers:");
    for layer in map.layers().layers() {
        eprintln!(
            "  {:<8} {:<16} {}",
            layer.kind().to_string(),
            layer.name(),
            if layer.is_visible() { "visible" } else { "hidden" }
        );
    }
    if let Some(legend) = map.legend() {
        eprintln!("legend: {} ({} rows)", legend.title, legend.entries.len());
    }

    println!("{}", serde_json::to_string_pretty(&map.describe())?);
    Ok(())
}
