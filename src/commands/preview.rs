use anyhow::Result;
use glowbook_core::config::GlowbookConfig;
use glowbook_core::pricing;
use glowbook_core::recurrence::expand;
use owo_colors::OwoColorize;

use crate::SeriesArgs;
use crate::commands::build_request;
use crate::render;

pub fn run(args: SeriesArgs) -> Result<()> {
    let config = GlowbookConfig::load()?;
    let request = build_request(&args, &config)?;

    let series = expand(&request);

    println!();
    println!(
        "{}",
        format!(
            "  {} series from {}",
            request.frequency, request.start_date
        )
        .bold()
    );
    if !request.time_slot.is_empty() {
        println!("  {}", format!("Time slot: {}", request.time_slot).dimmed());
    }
    println!();

    for line in render::render_series(&series) {
        println!("{line}");
    }

    if let Some(price) = args.price {
        let total = pricing::project(&series, price);
        println!();
        println!("{}", render::render_cost(total, series.len(), &config.currency));
    }

    Ok(())
}
