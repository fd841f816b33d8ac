//! Truncation repair for accepted responses.
//!
//! Hosted models routinely run out of output tokens mid-clause. This pass
//! trims an accepted text back to its last complete sentence so the user
//! never sees a mid-word cut. Heuristic only; it makes no promise of
//! semantic completeness.

use std::sync::OnceLock;

use regex::Regex;

/// Punctuation that ends a sentence segment during reconstruction.
const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', '…'];

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

fn fence_re() -> &'static Regex {
    FENCE_RE.get_or_init(|| Regex::new(r"```[\s\S]*?```").expect("valid fence regex"))
}

/// Repair a possibly-truncated response.
///
/// Applied only to the final accepted text, never to intermediate attempts.
/// The result is idempotent: repairing an already-repaired text returns it
/// unchanged.
///
/// * `terminal_markers`: characters accepted as a valid closing character
///   (sentence punctuation plus persona-specific emoji closers).
/// * `floor`: minimum char count for a sentence-level reconstruction to be
///   worth returning; below it the original text is kept with `"..."`
///   appended.
pub fn repair(text: &str, terminal_markers: &[char], floor: usize) -> String {
    let stripped = fence_re().replace_all(text.trim(), "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let ends_complete = trimmed.ends_with("...")
        || trimmed
            .chars()
            .next_back()
            .is_some_and(|last| terminal_markers.contains(&last));
    if ends_complete {
        return trimmed.to_string();
    }

    let rebuilt = complete_segments(trimmed);
    if rebuilt.chars().count() > floor {
        rebuilt
    } else {
        format!("{trimmed}...")
    }
}

/// Concatenate only the fully-terminated sentence segments of `text`,
/// dropping the trailing fragment that has no terminal punctuation.
fn complete_segments(text: &str) -> String {
    let mut kept = String::new();
    let mut segment = String::new();
    for c in text.chars() {
        segment.push(c);
        if SENTENCE_TERMINATORS.contains(&c) {
            kept.push_str(&segment);
            segment.clear();
        }
    }
    kept.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_segments_keeps_punctuation_and_drops_fragment() {
        assert_eq!(
            complete_segments("First one. Second one! And a tail"),
            "First one. Second one!"
        );
    }

    #[test]
    fn complete_segments_of_terminated_text_is_identity() {
        assert_eq!(complete_segments("All done here."), "All done here.");
    }

    #[test]
    fn complete_segments_without_any_terminator_is_empty() {
        assert_eq!(complete_segments("no punctuation at all"), "");
    }
}
