use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes a configuration
/// file holding the default values. An existing file is left untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config_path();

    println!("⚙️  Initializing rWorktime…");

    if path.exists() {
        messages::warning(format!(
            "Configuration file already exists: {}",
            path.display()
        ));
        return Ok(());
    }

    Config::init_at(&path, cli.test)?;

    if cli.test {
        messages::info("Test mode: configuration file not written");
    } else {
        messages::success(format!("Config file: {}", path.display()));
    }

    println!("🎉 rWorktime initialization completed!");
    Ok(())
}
