//! Module for shared constants used across the codebase

/// Box drawing characters used to render rectangles
pub mod frame {
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
    pub const FILL: char = ' ';
}

pub mod template {
    /// Default greeting pattern rendered with tera
    pub const DEFAULT_GREETING: &str = "Hello, {{ first_name }} {{ last_name }}!";

    /// Name under which the greeting is registered in the tera instance
    pub const GREETING_TEMPLATE_NAME: &str = "greeting";
}

/// Upper bound, in bytes, for text produced by repetition
pub const MAX_REPEAT_BYTES: usize = 64 * 1024 * 1024;

pub mod config {
    /// Default main configuration file name
    pub const DEFAULT_CONF_FILE: &str = "strkit.toml";

    /// Default separator for e-mail lists
    pub const DEFAULT_EMAIL_SEPARATOR: &str = ";";
}

/// Standard 52-card deck in its initial order (clubs, diamonds, hearts, spades)
pub const DECK: [&str; 52] = [
    "A♣", "2♣", "3♣", "4♣", "5♣", "6♣", "7♣", "8♣", "9♣", "10♣", "J♣", "Q♣", "K♣",
    "A♦", "2♦", "3♦", "4♦", "5♦", "6♦", "7♦", "8♦", "9♦", "10♦", "J♦", "Q♦", "K♦",
    "A♥", "2♥", "3♥", "4♥", "5♥", "6♥", "7♥", "8♥", "9♥", "10♥", "J♥", "Q♥", "K♥",
    "A♠", "2♠", "3♠", "4♠", "5♠", "6♠", "7♠", "8♠", "9♠", "10♠", "J♠", "Q♠", "K♠",
];
