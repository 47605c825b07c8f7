use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing worklog…");
    cfg.init_all(cli.test)?;
    println!("🎉 worklog initialization completed!");
    Ok(())
}
