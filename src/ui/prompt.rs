use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no question on stdin. Anything but `y`/`yes` (or EOF) is a no.
pub fn confirm(question: &str) -> bool {
    warning(question);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match io::stdin().read_line(&mut s) {
        Ok(_) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
