//! # Page Export CLI
//!
//! Renders the page to a standalone HTML file. The GUI shows the same
//! document live; this binary is the static pipeline.
//!
//! ## Usage
//!
//! - `page_cli [OUTPUT_PATH]` - export HTML (default `index.html`)
//! - `page_cli --json` - print the document model as JSON to stdout
//!
//! `RUST_LOG` filters log output.

use std::path::PathBuf;
use std::process::ExitCode;

use page_core::clock::SystemClock;
use page_core::export::save_html;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("page_core=info".parse().unwrap()),
        )
        .init();

    let arg = std::env::args().nth(1);
    let doc = page_core::content::document(&SystemClock);

    if arg.as_deref() == Some("--json") {
        return match serde_json::to_string_pretty(&doc) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let path = PathBuf::from(arg.unwrap_or_else(|| "index.html".to_string()));
    match save_html(&doc, &path) {
        Ok(saved) => {
            println!("Page exported: {}", saved.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
