//! Lists the problem pages of the archived wiki presets
//!
//! Run with `cargo run --example archived_wiki [gfd|advanced-calculus]`.
//! Only the listing pages are fetched; nothing is downloaded.

use link_harvester::presets::Preset;
use link_harvester::{Config, Harvester};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let presets = match std::env::args().nth(1) {
        Some(name) => vec![Preset::find(&name)
            .ok_or_else(|| anyhow::anyhow!("unknown preset '{}'", name))?],
        None => Preset::all(),
    };

    let harvester = Harvester::new(Config::default())?;

    for preset in presets {
        let links = harvester.collect(&preset.listing_url, preset.contains).await?;
        println!("{} ({} links)", preset.name, links.len());
        for link in links {
            println!("  {}", link);
        }
    }

    Ok(())
}
