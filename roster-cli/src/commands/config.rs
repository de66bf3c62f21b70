//! Config command - show the effective configuration

use anyhow::Result;
use colored::Colorize;
use roster_core::adapters::randomuser::get_base_url;

use super::get_context;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let config = &ctx.config;
    let api_base_url = config.api_base_url.clone().unwrap_or_else(get_base_url);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "rosterDir": ctx.roster_dir().to_string_lossy(),
                "demoMode": config.demo_mode,
                "results": config.results,
                "nationality": config.nationality,
                "apiBaseUrl": api_base_url,
                "searchMode": config.search_mode,
            })
        );
        return Ok(());
    }

    println!("{}", "Roster Configuration".bold());
    println!("  Directory:   {}", ctx.roster_dir().display());
    println!("  Demo mode:   {}", if config.demo_mode { "on" } else { "off" });
    println!("  Source:      {}", if config.demo_mode { "demo" } else { "randomuser" });
    println!("  API URL:     {}", api_base_url);
    println!("  Results:     {}", config.results);
    println!("  Nationality: {}", config.nationality);
    println!("  Search mode: {}", config.search_mode);

    Ok(())
}
