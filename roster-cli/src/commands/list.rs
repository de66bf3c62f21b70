//! List command - fetch the directory once and print the card grid

use std::collections::HashMap;

use anyhow::{bail, Result};
use roster_core::{DirectoryEvent, GridView, LogEvent, OperationResult, SearchMode, ViewUpdate};

use super::{fetch_session, get_context, get_logger, log_event};
use crate::output;

pub fn run(search: Option<String>, literal: bool, format: &str) -> Result<()> {
    let mut ctx = get_context()?;
    if literal {
        ctx.config.search_mode = SearchMode::Literal;
    }

    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("list"));

    let spinner = format == "table" && atty::is(atty::Stream::Stdout);
    let mut session = fetch_session(&ctx, &logger, "list", spinner)?;

    if let GridView::Failed(banner) = session.grid() {
        bail!("{}", banner);
    }

    let grid = match search {
        Some(query) => {
            let update = session.handle(DirectoryEvent::SearchSubmit { query })?;
            log_event(&logger, LogEvent::new("search_applied").with_command("list"));
            match update {
                ViewUpdate::ReplaceCards(grid) => grid,
                _ => session.grid(),
            }
        }
        None => session.grid(),
    };

    match format {
        "json" => {
            let total = session.store().map(|s| s.len()).unwrap_or_default();
            let context = HashMap::from([
                ("total".to_string(), serde_json::json!(total)),
                ("searchMode".to_string(), serde_json::json!(session.router().search_mode())),
            ]);
            let result = OperationResult::ok_with_context(grid.cards(), context);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "csv" => {
            output::write_cards_csv(grid.cards())?;
        }
        _ => {
            output::print_grid(&grid);
            println!();
            println!("{} employee(s) shown", grid.cards().len());
        }
    }

    Ok(())
}
