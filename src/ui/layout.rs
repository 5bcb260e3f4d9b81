// Chat screen layout
// Builds the blocks the REPL prints: welcome banner, answers, the sources
// view and command help

use crate::pipeline::ResolvedResponse;
use crate::state::{ChatSession, Language};
use crate::ui::components::*;
use owo_colors::OwoColorize;

/// Topic cards shown under the welcome text
const WELCOME_CATEGORIES: [(&str, &str); 4] = [
    ("Admissions", "Eligibility, application process, entrance exams"),
    ("Courses", "BE programs (CSE, AI/ML, ECE, ME, CE), MBA"),
    ("Campus Life", "Facilities, hostels, events, activities"),
    ("Placements", "Career services, companies, packages"),
];

const CONFIDENCE_NOTE: &str = "This score indicates how confident the AI is in the accuracy of the response based on available information and context.";

/// Render the welcome banner for the current session
pub fn render_welcome(session: &ChatSession) -> String {
    let strings = session.language.strings();
    let mode = if session.remote_status().is_available() {
        "🤖 AI Powered (Gemini)"
    } else {
        "📚 Knowledge Base Mode"
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Welcome to MITK AI Assistant".bold()));
    out.push_str(&format!("{}\n\n", strings.welcome));
    out.push_str(&format!("Status: {}   {}\n\n", mode, status_badge(session.remote_status())));
    for (title, detail) in WELCOME_CATEGORIES {
        out.push_str(&format!("  {} - {}\n", title.cyan(), detail));
    }
    out.push_str(&format!("\n{}\n", strings.ask_anything));
    out.push_str(&format!("{}\n", render_help().dimmed()));
    out
}

/// Render one bot answer with its confidence badge
pub fn render_answer(response: &ResolvedResponse) -> String {
    format!(
        "{}\n{}",
        html_to_text(&response.text),
        confidence_badge(response)
    )
}

/// Render the confidence meter and full source list of an answer
pub fn render_sources(response: &ResolvedResponse) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", confidence_meter(response.confidence)));
    out.push_str("\nInformation Sources:\n");
    for source in &response.sources {
        out.push_str(&format!("  • {}\n", source));
    }
    out.push_str(&format!("\nAbout Confidence Score:\n{}\n", CONFIDENCE_NOTE));
    out
}

/// Notice printed after a language switch
pub fn render_language_notice(language: Language) -> String {
    format!(
        "Language: {}\n{}",
        language.strings().name,
        language.strings().ask_anything
    )
}

/// One-line command reference
pub fn render_help() -> &'static str {
    "Commands: /new (new chat), /lang (English/ಕನ್ನಡ), /sources (last answer), /quit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_reflects_remote_status() {
        let mut session = ChatSession::new(true);
        session.record_probe(true);
        let online = render_welcome(&session);
        assert!(online.contains("🤖 AI Powered (Gemini)"));
        assert!(online.contains("Campus Life"));

        session.record_probe(false);
        let offline = render_welcome(&session);
        assert!(offline.contains("📚 Knowledge Base Mode"));
        assert!(offline.contains("🔴 AI Offline"));
    }

    #[test]
    fn test_welcome_uses_session_language() {
        let mut session = ChatSession::new(false);
        session.toggle_language();
        assert!(render_welcome(&session).contains(Language::Kannada.strings().ask_anything));
    }

    #[test]
    fn test_sources_view_lists_every_source() {
        let response = ResolvedResponse::new(
            "<p>x</p>",
            92,
            vec![
                "MITK Official Information".to_string(),
                "Local Knowledge Base".to_string(),
            ],
            None,
        );
        let view = render_sources(&response);
        assert!(view.contains("92%"));
        assert!(view.contains("  • MITK Official Information"));
        assert!(view.contains("  • Local Knowledge Base"));
    }

    #[test]
    fn test_answer_is_plain_text() {
        let response = ResolvedResponse::new("<p>Hello <strong>there</strong></p>", 88, vec![], None);
        let rendered = render_answer(&response);
        assert!(rendered.starts_with("Hello there\n"));
        assert!(rendered.contains("88% confident · MITK AI Assistant"));
    }
}
