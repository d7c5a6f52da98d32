use super::segment;
use crate::model::{Role, Turn};

#[test]
fn blank_input_yields_no_turns() {
    for raw in ["", " ", "\n\n", "\t \r\n  "] {
        assert!(segment(raw).is_empty(), "input {:?}", raw);
    }
}

#[test]
fn splits_user_and_assistant_turns() {
    let turns = segment("You said:\nHello\nChatGPT said:\nHi there");
    assert_eq!(
        turns,
        vec![Turn::user("Hello"), Turn::assistant("Hi there")]
    );
}

#[test]
fn headers_are_case_insensitive_and_whitespace_tolerant() {
    let shouted = segment("  YOU SAID:  \nHello\n\tchatgpt SAID:\nHi");
    let plain = segment("You said:\nHello\nChatGPT said:\nHi");
    assert_eq!(shouted, plain);
}

#[test]
fn multi_line_turn_keeps_inner_blank_lines_and_trims_each_line() {
    let raw = "You said:\n  first line  \n\n  second line\n\nChatGPT said:\nok";
    let turns = segment(raw);
    assert_eq!(turns[0].content, "first line\n\nsecond line");
    assert_eq!(turns[1].content, "ok");
}

#[test]
fn consecutive_headers_drop_empty_turns() {
    let turns = segment("You said:\n\n   \nYou said:\nreal question\nChatGPT said:\n\n");
    assert_eq!(turns, vec![Turn::user("real question")]);
}

#[test]
fn same_role_twice_produces_two_turns() {
    let turns = segment("You said:\none\nYou said:\ntwo");
    assert_eq!(turns, vec![Turn::user("one"), Turn::user("two")]);
}

#[test]
fn text_without_headers_becomes_single_user_turn() {
    let raw = "\n  just some text\nspanning lines  \n";
    assert_eq!(
        segment(raw),
        vec![Turn::user("just some text\nspanning lines")]
    );
}

#[test]
fn fallback_uses_boilerplate_stripped_text() {
    let raw = "Skip to content\nhola\nNo file chosenNo file chosen\nReport conversation";
    let turns = segment(raw);
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[0].content, "hola");
}

#[test]
fn fallback_when_headers_only_carry_empty_turns() {
    let turns = segment("You said:\n\nChatGPT said:");
    assert_eq!(turns, vec![Turn::user("You said:\n\nChatGPT said:")]);
}

#[test]
fn fallback_may_be_empty_after_stripping() {
    let turns = segment("Skip to content");
    assert_eq!(turns, vec![Turn::user("")]);
}

#[test]
fn lines_before_first_header_are_dropped() {
    // Preamble is buffered without a role and cleared by the first flush.
    let turns = segment("Intro text\nmore intro\nYou said:\nHi\nChatGPT said:\nHello");
    assert_eq!(turns, vec![Turn::user("Hi"), Turn::assistant("Hello")]);
}

#[test]
fn header_must_be_the_whole_line() {
    let turns = segment("You said: hello\nChatGPT said: hi");
    assert_eq!(turns, vec![Turn::user("You said: hello\nChatGPT said: hi")]);
}

#[test]
fn boilerplate_never_reaches_turn_content() {
    let raw = "Skip to content\n\
               You said:\n\
               こんにちは\n\
               No file chosenNo file chosen\n\
               ChatGPT said:\n\
               こんにちは！元気ですか？\n\
               New version of GPT available - Continue chatting to use the old version, or start a new chat for the latest version.\n\
               Report conversation\n";
    let turns = segment(raw);
    assert_eq!(
        turns,
        vec![
            Turn::user("こんにちは"),
            Turn::assistant("こんにちは！元気ですか？"),
        ]
    );
    for turn in &turns {
        let lower = turn.content.to_lowercase();
        assert!(!lower.contains("skip to content"));
        assert!(!lower.contains("report conversation"));
        assert!(!lower.contains("no file chosen"));
        assert!(!lower.contains("new version of gpt available"));
    }
}

#[test]
fn crlf_transcripts_segment_like_lf() {
    let turns = segment("You said:\r\nHello\r\nChatGPT said:\r\nHi there\r\n");
    assert_eq!(
        turns,
        vec![Turn::user("Hello"), Turn::assistant("Hi there")]
    );
}

#[test]
fn lone_carriage_returns_and_unicode_separators_split_lines() {
    for sep in ["\r", "\u{2028}", "\u{2029}", "\u{85}", "\u{c}"] {
        let raw = ["You said:", "Hello", "ChatGPT said:", "Hi there"].join(sep);
        assert_eq!(
            segment(&raw),
            vec![Turn::user("Hello"), Turn::assistant("Hi there")],
            "separator {:?}",
            sep
        );
    }
}

#[test]
fn boilerplate_with_unicode_padding_is_stripped() {
    let turns = segment("You said:\nhi\nSkip to content\u{a0}\nChatGPT said:\nok");
    assert_eq!(turns, vec![Turn::user("hi"), Turn::assistant("ok")]);
    for turn in &turns {
        assert!(!turn.content.to_lowercase().contains("skip to content"));
    }
}

#[test]
fn separator_only_input_is_blank() {
    assert!(segment("\u{2028}\r\u{1c}").is_empty());
}
