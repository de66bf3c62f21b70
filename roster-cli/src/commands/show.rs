//! Show command - print the detail view for one employee

use anyhow::{bail, Context, Result};
use roster_core::{DirectoryEvent, GridView, LogEvent, ViewUpdate};

use super::{fetch_session, get_context, get_logger, log_event};
use crate::output;

pub fn run(email: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("show"));

    let spinner = !json && atty::is(atty::Stream::Stdout);
    let mut session = fetch_session(&ctx, &logger, "show", spinner)?;

    if let GridView::Failed(banner) = session.grid() {
        bail!("{}", banner);
    }

    let update = session
        .handle(DirectoryEvent::CardClicked {
            email: email.to_string(),
        })
        .with_context(|| format!("No employee with email '{}' in this batch", email))?;

    let ViewUpdate::OpenModal(modal) = update else {
        bail!("No employee with email '{}' in this batch", email);
    };
    log_event(&logger, LogEvent::new("modal_opened").with_command("show"));

    if json {
        println!("{}", serde_json::to_string_pretty(&modal)?);
    } else {
        output::print_modal(&modal);
    }

    Ok(())
}
