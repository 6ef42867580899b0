use anyhow::Result;
use glowbook_core::config::GlowbookConfig;
use owo_colors::OwoColorize;

use crate::ConfigAction;

pub fn run(action: Option<ConfigAction>) -> Result<()> {
    match action {
        None => show(),
        Some(ConfigAction::Set { key, value }) => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let config = GlowbookConfig::load()?;
    let path = GlowbookConfig::config_path()?;

    println!("  {}", format!("Config: {}", path.display()).dimmed());
    println!("  export_dir = {}", config.export_dir.display());
    println!("  default_occurrences = {}", config.default_occurrences);
    println!("  currency = {}", config.currency);

    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = GlowbookConfig::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{}", format!("  Set {key} = {value}").green());

    Ok(())
}
