//! Build a `.pptx` deck from a YAML deck plan.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example build_deck -- demos/ngo_connect.yaml -o ngo_connect.pptx
//! ```
//!
//! Set `RUST_LOG=pitaya=debug` to trace every assembled slide and package part.

use clap::Parser;
use pitaya::{DeckPlan, DeckSummary};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render a deck plan to a PowerPoint file
#[derive(Parser, Debug)]
#[command(name = "build_deck", version, about, long_about = None)]
struct Args {
    /// Deck plan (YAML)
    #[arg(value_name = "PLAN")]
    plan: PathBuf,

    /// Output .pptx path; replaced atomically if it exists
    #[arg(short, long, value_name = "OUTPUT", default_value = "deck.pptx")]
    output: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    /// Re-read the saved deck and print its outline
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let plan = DeckPlan::from_yaml_file(&args.plan)?;
    let deck = plan.build()?;
    deck.save(&args.output)?;

    println!("Saved {} slides to {}", deck.slide_count(), args.output.display());

    if args.summary {
        let summary = DeckSummary::open(&args.output)?;
        for (index, slide) in summary.slides.iter().enumerate() {
            let title = slide
                .text_boxes()
                .flat_map(|shape| shape.paragraphs.first())
                .map(|p| p.text.as_str())
                .next()
                .unwrap_or("");
            println!("{:>3}. {:<40} {} shapes", index + 1, title, slide.shapes.len());
        }
    }

    Ok(())
}
