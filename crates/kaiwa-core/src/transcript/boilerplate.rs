//! Removal of chat-export UI artifacts that are not part of the conversation.

use regex::Regex;
use std::sync::OnceLock;

fn standalone_lines() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?mi)^[\s&&[^\n]]*(?:skip to content|report conversation)[\s&&[^\n]]*$")
            .expect("static boilerplate regex")
    })
}

fn file_picker_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)no file chosenno file chosen").expect("static marker regex"))
}

fn upgrade_banner() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `.` stops at '\n', so only the rest of the banner line goes.
    RE.get_or_init(|| {
        Regex::new(r"(?i)new version of gpt available.*").expect("static banner regex")
    })
}

/// Strip known boilerplate from a raw transcript.
///
/// Standalone "Skip to content" / "Report conversation" lines are blanked (the
/// line break survives), the doubled file-picker marker is removed wherever it
/// occurs, and an upgrade banner is cut together with the rest of its line.
pub fn strip(raw: &str) -> String {
    let text = standalone_lines().replace_all(raw, "");
    let text = file_picker_marker().replace_all(&text, "");
    upgrade_banner().replace_all(&text, "").into_owned()
}
