//! Transcript segmentation.
//!
//! Pasted chat exports carry one header line per speaker change
//! (`You said:` / `ChatGPT said:`). [`segment`] turns such text into an ordered
//! list of [`Turn`]s. Input without any header becomes a single user turn.

pub mod boilerplate;

use crate::model::{Role, Turn};
use regex::Regex;
use std::sync::OnceLock;

const USER_HEADER: &str = "you said:";
const ASSISTANT_HEADER: &str = "chatgpt said:";

/// Split a raw transcript into turns. Total over all inputs.
pub fn segment(raw: &str) -> Vec<Turn> {
    let normalized = line_breaks().replace_all(raw, "\n");
    if normalized.trim().is_empty() {
        return Vec::new();
    }

    let stripped = boilerplate::strip(&normalized);

    let mut segmenter = Segmenter::default();
    for line in stripped.lines() {
        segmenter.feed(line);
    }
    let turns = segmenter.finish();

    if turns.is_empty() {
        return vec![Turn::user(stripped.trim())];
    }
    turns
}

/// `\r\n` plus every single-character line separator (CR, VT, FF, FS, GS, RS, NEL, LS, PS).
fn line_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]")
            .expect("static line break regex")
    })
}

fn header_role(line: &str) -> Option<Role> {
    if line.eq_ignore_ascii_case(USER_HEADER) {
        Some(Role::User)
    } else if line.eq_ignore_ascii_case(ASSISTANT_HEADER) {
        Some(Role::Assistant)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    NoRoleYet,
    Accumulating(Role),
}

#[derive(Debug, Default)]
struct Segmenter<'a> {
    state: State,
    buf: Vec<&'a str>,
    turns: Vec<Turn>,
}

impl<'a> Segmenter<'a> {
    fn feed(&mut self, line: &'a str) {
        let line = line.trim();

        if let Some(role) = header_role(line) {
            self.flush();
            self.state = State::Accumulating(role);
            return;
        }

        if self.state == State::NoRoleYet && line.is_empty() {
            return;
        }
        self.buf.push(line);
    }

    /// Emit the buffered lines under the active role and clear the buffer.
    ///
    /// Lines buffered before the first header have no role and are dropped here.
    fn flush(&mut self) {
        if let State::Accumulating(role) = self.state {
            let joined = self.buf.join("\n");
            let content = joined.trim();
            if !content.is_empty() {
                self.turns.push(Turn::new(role, content));
            }
        }
        self.buf.clear();
    }

    fn finish(mut self) -> Vec<Turn> {
        self.flush();
        self.turns
    }
}

#[cfg(test)]
mod tests;
