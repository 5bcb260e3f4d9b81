//! Transcript builder
//!
//! Gemini is called in single-turn mode, so the conversation is flattened into
//! one prompt: system instruction, the recent Human/Assistant turns, and a
//! trailing prompt for the new turn.

use crate::api::models::HistoryEntry;

/// Fixed system instruction describing the institution and tone
pub const SYSTEM_PROMPT: &str = "You are an intelligent AI assistant for Moodlakatte Institute of Technology, Kundapura (MITK).
Be helpful, concise, and encouraging. Provide clear, structured answers with headings and bullet points when useful.

MITK INFORMATION:
- Name: Moodlakatte Institute of Technology, Kundapura (MITK)
- Established: 2004
- Affiliation: VTU, Belagavi
- Location: Moodlakatte, Near Kundapura Railway Station, Udupi District, Karnataka - 576217
- Contact: +91-8254-237630, info@mitkundapura.com
- Website: https://www.mitkundapura.com

Courses:
- CSE, ECE, ME, CE, AI/ML

Facilities:
- Labs, library, hostels, sports, Wi-Fi, transport, cafeteria, placement cell

Guidelines:
- Prefer facts relevant to MITK.
- If unsure about specific fees/dates, suggest contacting the college.
- Keep tone friendly and professional.";

/// Build the prompt sent to Gemini
///
/// Only the last `window` history entries are considered; entries without a
/// role or content, or with a role other than `user`/`assistant`, are skipped
/// after the window is applied.
///
/// # Arguments
/// * `message` - The new user message
/// * `history` - Prior turns, oldest first
/// * `window` - Maximum number of trailing history entries to include
/// * `language` - Optional reply language code (`kn` adds a Kannada instruction)
pub fn build_transcript(
    message: &str,
    history: &[HistoryEntry],
    window: usize,
    language: Option<&str>,
) -> String {
    let mut transcript = String::with_capacity(SYSTEM_PROMPT.len() + message.len() + 256);
    transcript.push_str(SYSTEM_PROMPT);
    if let Some(instruction) = language.and_then(language_instruction) {
        transcript.push('\n');
        transcript.push_str(instruction);
    }
    transcript.push_str("\n\n");

    let start = history.len().saturating_sub(window);
    for entry in &history[start..] {
        let (Some(role), Some(content)) = (entry.role.as_deref(), entry.content.as_deref()) else {
            continue;
        };
        if content.is_empty() {
            continue;
        }
        match role {
            "user" => transcript.push_str(&format!("Human: {}\n\n", content)),
            "assistant" => transcript.push_str(&format!("Assistant: {}\n\n", content)),
            _ => {}
        }
    }

    transcript.push_str(&format!("Human: {}\n\nAssistant: ", message));
    transcript
}

fn language_instruction(code: &str) -> Option<&'static str> {
    match code {
        "kn" => Some("- Reply in Kannada."),
        _ => None,
    }
}
