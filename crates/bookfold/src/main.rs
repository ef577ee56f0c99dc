//! Book-folding pattern generator.
//!
//! Loads an image, renders its folding pattern and saves the export as PNG.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    // Optional .env with BOOKFOLD_* overrides
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let params = cli.parameters();
    params.validate().context("invalid parameters")?;

    let source = pattern_engine::load_image(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    tracing::info!(
        path = %cli.input.display(),
        width = source.width(),
        height = source.height(),
        "Generating pattern"
    );

    let generated = pattern_engine::generate(source, &params)?;
    if generated.bbox.is_none() {
        tracing::warn!("No dark pixels at this threshold, the pattern is empty");
    }

    let exported = generated.export(&params.export)?;
    pattern_engine::save_png(&exported, &cli.output)
        .with_context(|| format!("failed to save {}", cli.output.display()))?;

    let stats = generated.stats();
    tracing::info!(
        path = %cli.output.display(),
        width = exported.width(),
        height = exported.height(),
        "Pattern saved"
    );
    println!("Lines:    {} ({} pages)", stats.line_count, stats.line_pages());
    println!(
        "Segments: {} ({} pages)",
        stats.segments_count,
        stats.segment_pages()
    );
    Ok(())
}
