use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => (FG_GREEN, "✅"),
            Level::Warning => (FG_YELLOW, "⚠️"),
            Level::Error => (FG_RED, "❌"),
        }
    }
}

/// Honour the NO_COLOR convention (https://no-color.org).
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn render<T: fmt::Display>(level: Level, msg: T) -> String {
    let (color, icon) = level.style();
    if colors_enabled() {
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, msg));
}

/// Section header, e.g. one per unit in listings.
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("{FG_BLUE}{BOLD}=== {msg}{RESET}");
    } else {
        println!("=== {msg}");
    }
}
