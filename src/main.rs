use anyhow::{Context, Result};

use gistclip::cli::Config;
use gistclip::clipboard::serve_clipboard_daemon;
use gistclip::credential::load_token;
use gistclip::gist::GistClient;
use gistclip::loader::load_files;
use gistclip::logging::{init_logging, log_debug, log_error, log_info};
use gistclip::output::output_url;

fn main() -> Result<()> {
    let config = Config::from_args();
    init_logging(config.verbosity);

    if config.clipboard_daemon {
        return serve_clipboard_daemon();
    }

    log_info("Starting gistclip");
    log_debug(&format!("Configuration: {:?}", config));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime.block_on(run(config));

    // Reads abandoned by the loader may still be parked on the blocking
    // pool (FIFOs, stalled mounts); exit without joining them.
    runtime.shutdown_background();
    result
}

async fn run(config: Config) -> Result<()> {
    let token = load_token().context("Failed to load gist credential")?;

    if config.files.is_empty() {
        log_error("No files given");
        anyhow::bail!("No files given. Usage: gistclip [--desc TEXT] [--public] FILE...");
    }

    let files = load_files(&config.files).await?;
    if files.is_empty() {
        log_error("All input files are blank");
        anyhow::bail!("Nothing to upload: every input file is blank");
    }

    let client = GistClient::new()?;
    log_info(&format!(
        "Uploading {} file(s) to {}",
        files.len(),
        client.endpoint()
    ));

    let gist = client
        .publish(files, &config.description, config.public, &token)
        .await
        .context("Failed to create gist")?;

    output_url(&gist.html_url, &config.output_mode).context("Failed to output gist URL")?;

    log_info("Successfully completed request");
    Ok(())
}
