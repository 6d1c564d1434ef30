use anyhow::Result;

use crate::cli::OutputMode;
use crate::clipboard::write_clipboard;
use crate::logging::log_info;

pub fn output_url(url: &str, mode: &OutputMode) -> Result<()> {
    match mode {
        OutputMode::Clipboard => {
            log_info("Copying gist URL to clipboard");
            write_clipboard(url)
        }
        OutputMode::Stdout => {
            log_info("Writing gist URL to stdout");
            println!("{}", url);
            Ok(())
        }
    }
}
