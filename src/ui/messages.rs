//! User-facing status lines (stdout for progress, stderr for errors).

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Colors are dropped when NO_COLOR is set.
fn paint(colour: Colour, text: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        text.to_string()
    } else {
        colour.bold().paint(text).to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", paint(Colour::Red, ICON_ERR), msg);
}

/// Indented secondary line under a status message.
pub fn detail<T: fmt::Display>(msg: T) {
    let dimmed = Style::new().dimmed();
    if std::env::var_os("NO_COLOR").is_some() {
        println!("   {msg}");
    } else {
        println!("   {}", dimmed.paint(msg.to_string()));
    }
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", paint(Colour::Blue, &format!("====================== {msg}")));
}
