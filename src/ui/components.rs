// Reusable UI components
// Small rendering helpers shared by the chat screens: HTML to terminal text,
// status and confidence badges

use crate::pipeline::ResolvedResponse;
use crate::state::RemoteStatus;
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;
use regex::Regex;

static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"<li>\s*").expect("static regex"));
static BLOCK_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</(p|h1|h2|h3|ul)>|<br\s*/?>").expect("static regex")
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("static regex"));
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("static regex"));

/// Width of the confidence meter, in cells
const METER_WIDTH: usize = 20;

/// Render answer HTML as plain terminal text
/// List items become bullets; all other tags are dropped
pub fn html_to_text(html: &str) -> String {
    let text = LIST_ITEM.replace_all(html, "  • ");
    let text = BLOCK_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    BLANK_RUN.replace_all(&text, "\n\n").trim().to_string()
}

/// Render the remote status indicator
/// Colors: Online (green), Offline (red), Disabled (yellow), Connecting (dimmed)
pub fn status_badge(status: RemoteStatus) -> String {
    let label = status.label();
    match status {
        RemoteStatus::Online => label.bright_green().to_string(),
        RemoteStatus::Offline => label.bright_red().to_string(),
        RemoteStatus::Disabled => label.yellow().to_string(),
        RemoteStatus::Connecting => label.dimmed().to_string(),
    }
}

/// Uncolored text of the badge under an answer
pub fn confidence_label(response: &ResolvedResponse) -> String {
    format!(
        "{}% confident · {}",
        response.confidence,
        response.primary_source()
    )
}

/// The badge under an answer, colored by confidence
pub fn confidence_badge(response: &ResolvedResponse) -> String {
    let label = confidence_label(response);
    if response.confidence >= 90 {
        label.bright_green().to_string()
    } else if response.confidence >= 70 {
        label.yellow().to_string()
    } else {
        label.bright_red().to_string()
    }
}

/// A fixed-width bar for the confidence value
pub fn confidence_meter(confidence: u8) -> String {
    let filled = (usize::from(confidence) * METER_WIDTH + 50) / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled),
        confidence
    )
}
