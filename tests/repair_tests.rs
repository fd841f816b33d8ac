//! Tests for truncation repair.

use pretty_assertions::assert_eq;

use augur::orchestrator::repair;

fn markers() -> Vec<char> {
    ".!?…🔮✨🌙⭐🌟".chars().collect()
}

#[test]
fn unreconstructable_fragment_gets_an_ellipsis() {
    let out = repair("The stars reveal much about your path and also", &markers(), 80);
    assert_eq!(out, "The stars reveal much about your path and also...");
}

#[test]
fn truncated_text_is_cut_back_to_the_last_complete_sentence() {
    let input = "The alignment of the planets tonight speaks of a rare turning point in your \
                 long journey onward. The omens are clear and";
    let out = repair(input, &markers(), 80);
    assert_eq!(
        out,
        "The alignment of the planets tonight speaks of a rare turning point in your \
         long journey onward."
    );
}

#[test]
fn reconstruction_below_the_floor_falls_back_to_an_ellipsis() {
    let out = repair("Trust the process. The omens are clear and", &markers(), 80);
    assert_eq!(out, "Trust the process. The omens are clear and...");
}

#[test]
fn sentence_terminated_text_is_returned_as_is() {
    let input = "The cards have spoken clearly tonight.";
    assert_eq!(repair(input, &markers(), 80), input);
}

#[test]
fn emoji_closers_count_as_complete() {
    let input = "The spirits have heard your question 🔮";
    assert_eq!(repair(input, &markers(), 80), input);
}

#[test]
fn trailing_ascii_ellipsis_counts_as_complete() {
    let input = "Some mysteries are not yet ready to be revealed...";
    assert_eq!(repair(input, &markers(), 80), input);
}

#[test]
fn trailing_unicode_ellipsis_counts_as_complete() {
    let input = "The veil remains drawn…";
    assert_eq!(repair(input, &markers(), 80), input);
}

#[test]
fn fenced_code_spans_are_stripped() {
    let input = "Here is wisdom. ```let x = tarot();``` And the rest was lost midw";
    let out = repair(input, &markers(), 10);
    assert_eq!(out, "Here is wisdom.");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let out = repair("  The answer lies within you.  \n", &markers(), 80);
    assert_eq!(out, "The answer lies within you.");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(repair("   ", &markers(), 80), "");
}

#[test]
fn repair_is_idempotent() {
    let inputs = [
        "The stars reveal much about your path and also",
        "Trust the process. The omens are clear and",
        "The cards have spoken clearly tonight.",
        "The spirits have heard your question 🔮",
        "Some mysteries are not yet ready to be revealed...",
        "Here is wisdom. ```let x = tarot();``` And the rest was lost midw",
        "",
    ];
    for input in inputs {
        let once = repair(input, &markers(), 80);
        let twice = repair(&once, &markers(), 80);
        assert_eq!(twice, once, "repair not idempotent for {input:?}");
    }
}
