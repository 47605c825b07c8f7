pub mod add;
pub mod analyze;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod filter;
pub mod import;
pub mod init;
pub mod list;
pub mod plot;

use crate::models::WorkEntry;
use crate::ui::messages::{info, warning};

/// Print `(number, entry)` pairs, numbers being 1-based list positions.
pub(crate) fn print_entries<'a, I>(entries: I)
where
    I: IntoIterator<Item = (usize, &'a WorkEntry)>,
{
    let mut any = false;
    for (pos, e) in entries {
        if !any {
            info("Entries:");
            any = true;
        }
        println!("{:>2}. {}", pos, e);
    }
    if !any {
        warning("No entries to display.");
    }
}
