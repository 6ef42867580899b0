use std::path::PathBuf;

use anyhow::{Context, Result};
use glowbook_core::config::GlowbookConfig;
use glowbook_core::ics::generate_series_ics;
use glowbook_core::recurrence::expand;
use owo_colors::OwoColorize;

use crate::SeriesArgs;
use crate::commands::build_request;

pub fn run(title: String, args: SeriesArgs, output: Option<PathBuf>) -> Result<()> {
    let config = GlowbookConfig::load()?;
    let request = build_request(&args, &config)?;

    let series = expand(&request);
    let ics = generate_series_ics(&request, &series, &title)?;

    let path = match output {
        Some(p) => p,
        None => config.export_path().join(format!("{}.ics", slugify(&title))),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }
    std::fs::write(&path, ics).with_context(|| format!("Could not write {}", path.display()))?;

    println!(
        "{}",
        format!("  Exported {} dates to {}", series.len(), path.display()).green()
    );

    Ok(())
}

/// Lowercase the title and replace anything non-alphanumeric with hyphens.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "series".to_string()
    } else {
        slug
    }
}
