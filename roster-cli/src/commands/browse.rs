//! Browse command - interactive directory session
//!
//! Plays the part of the page: the grid is printed after every change, a
//! menu offers search and card selection, and an open card shows the detail
//! view with prev/next where the directory allows it.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use roster_core::{
    DirectoryEvent, DirectorySession, Error, GridView, LogEvent, LoggingService, ViewUpdate,
};

use super::{fetch_session, get_context, get_logger, log_event};
use crate::output;

pub fn run() -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) || atty::isnt(atty::Stream::Stdout) {
        bail!("'roster browse' needs an interactive terminal. Use 'roster list' instead.");
    }

    let ctx = get_context()?;
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("browse"));

    let mut session = fetch_session(&ctx, &logger, "browse", true)?;

    // No search or selection is offered once the fetch has failed
    if let GridView::Failed(banner) = session.grid() {
        bail!("{}", banner);
    }

    output::print_grid(&session.grid());

    loop {
        let query = session.router().query().to_string();
        let search_label = if query.is_empty() {
            "Search".to_string()
        } else {
            format!("Search (current: {})", query)
        };
        let items = [search_label.as_str(), "Open a card", "Quit"];

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => search(&mut session, &logger)?,
            1 => open_card(&mut session, &logger)?,
            _ => break,
        }
    }

    Ok(())
}

fn search(session: &mut DirectorySession, logger: &Option<LoggingService>) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Search by name")
        .allow_empty(true)
        .interact_text()?;

    match session.handle(DirectoryEvent::SearchSubmit { query }) {
        Ok(ViewUpdate::ReplaceCards(grid)) => {
            log_event(logger, LogEvent::new("search_applied").with_command("browse"));
            output::print_grid(&grid);
        }
        Ok(_) => {}
        Err(Error::InvalidQuery(reason)) => {
            output::warning(&format!("Invalid search pattern: {}", reason));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn open_card(session: &mut DirectorySession, logger: &Option<LoggingService>) -> Result<()> {
    let grid = session.grid();
    let cards = grid.cards();
    if cards.is_empty() {
        output::warning("No cards to open. Try a different search.");
        return Ok(());
    }

    let labels: Vec<String> = cards
        .iter()
        .map(|c| format!("{} ({})", c.full_name, c.location))
        .collect();
    let picked = Select::new()
        .with_prompt("Open")
        .items(&labels)
        .default(0)
        .interact()?;

    let mut update = session.handle(DirectoryEvent::CardClicked {
        email: cards[picked].email.clone(),
    })?;
    log_event(logger, LogEvent::new("modal_opened").with_command("browse"));

    loop {
        if let ViewUpdate::OpenModal(modal) = &update {
            output::print_modal(modal);
        }

        let Some(modal) = session.modal() else {
            break;
        };

        let mut actions = Vec::new();
        if modal.show_prev {
            actions.push(("Previous", DirectoryEvent::ModalPrev));
        }
        if modal.show_next {
            actions.push(("Next", DirectoryEvent::ModalNext));
        }
        actions.push(("Close", DirectoryEvent::ModalClose));

        let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();
        let choice = Select::new().items(&labels).default(0).interact()?;
        let (_, event) = actions.swap_remove(choice);

        update = session.handle(event)?;
        if update == ViewUpdate::CloseModal {
            output::print_grid(&session.grid());
            break;
        }
    }

    Ok(())
}
