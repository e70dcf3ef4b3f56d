use owo_colors::{OwoColorize, Style};
use std::fmt::Display;

/// Apply `style` only when color output is enabled
pub fn paint<T: Display>(value: T, style: Style, enable_color: bool) -> String {
    if enable_color {
        value.style(style).to_string()
    } else {
        value.to_string()
    }
}
