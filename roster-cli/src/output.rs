//! Output formatting utilities

use std::io;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use roster_core::services::CardView;
use roster_core::{GridView, ModalView};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Print the grid region
pub fn print_grid(grid: &GridView) {
    match grid {
        GridView::Loading => info("Loading..."),
        GridView::Failed(banner) => error(banner),
        GridView::Cards(cards) if cards.is_empty() => warning("No matching employees."),
        GridView::Cards(cards) => {
            let mut table = create_table();
            table.set_header(vec!["#", "Name", "Location", "Email"]);
            for (i, card) in cards.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(&card.full_name),
                    Cell::new(&card.location),
                    Cell::new(&card.email),
                ]);
            }
            println!("{}", table);
        }
    }
}

/// Print the detail modal
pub fn print_modal(modal: &ModalView) {
    let mut table = create_table();
    table.set_header(vec![Cell::new(&modal.full_name), Cell::new("")]);
    table.add_row(vec!["Email", modal.email.as_str()]);
    table.add_row(vec!["City", modal.city.as_str()]);
    table.add_row(vec!["Phone", modal.phone.as_str()]);
    table.add_row(vec!["Address", modal.address.as_str()]);
    table.add_row(vec!["Birthday", modal.birthday.as_str()]);
    table.add_row(vec!["Picture", modal.picture_url.as_str()]);
    println!("{}", table);
}

/// Write cards as CSV to stdout
pub fn write_cards_csv(cards: &[CardView]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    for card in cards {
        writer.serialize(card)?;
    }
    writer.flush()?;
    Ok(())
}
