// Response formatting
// Converts the model's markdown-flavoured text into the HTML the chat view renders

use mitk_backend::gemini::NO_RESPONSE_TEXT;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("static regex"));
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\* (.+)$").expect("static regex"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("static regex"));
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").expect("static regex"));
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").expect("static regex"));
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").expect("static regex"));
static LIST_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)(<li>.*</li>)").expect("static regex"));

/// Format raw model text as HTML
///
/// Bullets are converted before single-star emphasis so a `* ` list marker is
/// never read as the start of an `<em>` span. All list items are wrapped in a
/// single `<ul>` spanning the first to the last item.
pub fn format_response(raw: &str) -> String {
    let raw = raw.trim_end();
    if raw.trim().is_empty() {
        return NO_RESPONSE_TEXT.to_string();
    }

    let formatted = BOLD.replace_all(raw, "<strong>${1}</strong>");
    let formatted = BULLET.replace_all(&formatted, "<li>${1}</li>");
    let formatted = ITALIC.replace_all(&formatted, "<em>${1}</em>");
    let formatted = H3.replace_all(&formatted, "<h3>${1}</h3>");
    let formatted = H2.replace_all(&formatted, "<h2>${1}</h2>");
    let formatted = H1.replace_all(&formatted, "<h1>${1}</h1>");
    let formatted = LIST_SPAN.replace(&formatted, "<ul>${1}</ul>");

    let mut html = formatted.replace("\n\n", "</p><p>");
    if !html.starts_with("<h") && !html.starts_with("<p>") {
        html.insert_str(0, "<p>");
    }
    if !html.ends_with("</p>") && !html.ends_with('>') {
        html.push_str("</p>");
    }
    html
}
