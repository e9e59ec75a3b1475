use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let row = |key: &str, value: Option<&str>, fallback: &str| match value {
        Some(v) => println!("  {:<22} {}", key, v.green()),
        None => println!("  {:<22} {}", key, format!("{fallback} (default)").dimmed()),
    };
    let particles = config.particles().to_string();
    let defaults = config.defaults.clone().unwrap_or_default();
    row("defaults.theme", config.theme(), "dark");
    row("defaults.transition", config.transition(), "fade");
    row(
        "defaults.particles",
        defaults.particles.map(|_| particles.as_str()),
        "true",
    );
    row("defaults.start_mode", defaults.start_mode.as_deref(), "first");
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {} = {} ({})",
        "Set".green().bold(),
        key,
        value,
        path.display()
    );
    Ok(())
}
