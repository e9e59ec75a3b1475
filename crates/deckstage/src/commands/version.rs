use colored::Colorize;

pub fn run() {
    println!(
        "{} {}",
        "deckstage".bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
}
