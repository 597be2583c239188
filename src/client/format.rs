use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("BOLD is a valid regex pattern"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("ITALIC is a valid regex pattern"));
static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n+").expect("BLANK_RUN is a valid regex pattern"));
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\s").expect("BULLET is a valid regex pattern"));
static SPACED_BLANK_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n\s*\n").expect("SPACED_BLANK_RUN is a valid regex pattern")
});

/// Flattens the markdown emphasis models like to emit into plain text for
/// display, turning `* ` list markers into bullets.
pub fn format_message(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    let text = BULLET.replace_all(&text, "\n• ");
    let text = SPACED_BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
