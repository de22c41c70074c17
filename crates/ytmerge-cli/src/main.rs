use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use ytmerge_core::{
    PlaylistMerger, extract_playlist_ids, load_api_key, load_playlist_refs, write_report,
};

mod cli;
mod logging;

use cli::Cli;

fn main() {
    let cli = Cli::parse_args();
    logging::init_cli_logger(cli.verbose);

    if let Err(err) = run(&cli) {
        report_failure(&mut io::stderr().lock(), &err);
        std::process::exit(1);
    }
}

/// Prints the error chain once; the log only gets it at debug level.
fn report_failure<W: Write>(out: &mut W, err: &anyhow::Error) {
    tracing::debug!("merge failed: {:?}", err);
    let _ = writeln!(out, "Error: {:#}", err);
}

fn run(cli: &Cli) -> Result<()> {
    tracing::debug!("CLI config: {:?}", cli);

    let api_key = load_api_key(&cli.keyfile).context("Failed to load API key")?;
    let refs = load_playlist_refs(&cli.file).context("Failed to load playlist file")?;

    // Every line must resolve before the first request goes out.
    let playlist_ids = extract_playlist_ids(&refs).context("Failed to read playlist IDs")?;
    tracing::info!("Merging {} playlists", playlist_ids.len());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let merger = PlaylistMerger::new(api_key).context("Failed to create API client")?;
    let entries = runtime
        .block_on(merger.merge(&playlist_ids))
        .context("Failed to merge playlists")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = write_report(&mut out, &entries).context("Failed to write report")?;
    tracing::info!("Wrote {} entries", written);

    Ok(())
}
