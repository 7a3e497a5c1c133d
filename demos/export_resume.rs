//! Resume Export Demo
//!
//! Loads a resume from JSON, exports it as a PDF and prints the file path
//! a host would hand to its share sheet.
//!
//! Usage:
//!   cargo run --example export_resume -- <resume.json> [config.json]
//!
//! Examples:
//!   cargo run --example export_resume -- demos/data/sample_resume.json
//!   RUST_LOG=debug cargo run --example export_resume -- demos/data/sample_resume.json demos/data/export_config.json

use anyhow::{bail, Context};
use resume::{export, ExportConfig, Resume, PDF_MIME_TYPE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <resume.json> [config.json]", args[0]);
        std::process::exit(1);
    }

    let resume_json = std::fs::read_to_string(&args[1])
        .with_context(|| format!("Failed to read resume '{}'", args[1]))?;
    let resume: Resume = serde_json::from_str(&resume_json).context("Invalid resume JSON")?;

    let config = match args.get(2) {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config '{path}'"))?;
            ExportConfig::from_json(&json)?
        }
        None => ExportConfig::default(),
    };

    std::fs::create_dir_all(&config.directory)?;

    match export(&resume, &config) {
        Some(path) => println!("Share {} ({})", path.display(), PDF_MIME_TYPE),
        None => bail!("Export failed"),
    }

    Ok(())
}
