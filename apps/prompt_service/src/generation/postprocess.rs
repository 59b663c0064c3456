//! Post-processing of free-form completion text.
//!
//! Everything here is best-effort: the model is asked for a bold title and a
//! labelled tips section, and whatever it actually returns is split into
//! `(title, content, tips)` with generic fallbacks.

use regex::Regex;

use crate::generation::tips::MAX_TIPS;
use crate::llm_client::prompts::SOUND_DESIGN_TIPS_HEADING;

/// Only this many leading lines are searched for a title.
const TITLE_SCAN_LINES: usize = 5;
/// Bullets this short are treated as noise.
const MIN_TIP_CHARS: usize = 10;
const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];
/// Prefix of the requested writing-tips heading; models often shorten the rest.
const WRITING_TIPS_LABEL: &str = "Writing Tips";

/// Split of a completion into its display parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Postprocessed {
    pub title: String,
    pub content: String,
    pub tips: Vec<String>,
}

/// Locates and removes a labelled tips section.
///
/// The section is a heading line containing the label (bold or `#` heading,
/// case-insensitive) followed by lines up to the first blank line. A prose
/// line that merely starts with the label is not a heading.
pub struct TipSection {
    heading: Regex,
}

impl TipSection {
    /// Matches headings that begin with `label`, e.g. `**Writing Tips for This Exercise**:`.
    pub fn new(label: &str) -> Self {
        let pattern = format!(
            r"(?im)^[ \t]*(?:#{{1,6}}[ \t]*(?:\*\*[ \t]*)?|\*\*[ \t]*){}[^\n]*(?:\n|$)",
            regex::escape(label)
        );
        Self {
            heading: Regex::new(&pattern).expect("tip heading regex is valid"),
        }
    }

    pub fn writing() -> Self {
        Self::new(WRITING_TIPS_LABEL)
    }

    pub fn sound_design() -> Self {
        Self::new(SOUND_DESIGN_TIPS_HEADING)
    }

    /// Returns the bullet tips of the section and `text` with the section removed.
    ///
    /// Without a matching heading the tips are empty and the text comes back trimmed.
    pub fn extract_and_strip_tips(&self, text: &str) -> (Vec<String>, String) {
        let Some(heading) = self.heading.find(text) else {
            return (Vec::new(), text.trim().to_string());
        };

        // Blank lines between the heading and the first bullet belong to the section.
        let after = &text[heading.end()..];
        let body_start = heading.end() + (after.len() - after.trim_start().len());
        let body = &text[body_start..];
        let body_len = first_blank_line(body).unwrap_or(body.len());

        let tips = bullet_lines(&body[..body_len]);

        let before = text[..heading.start()].trim_end();
        let rest = text[body_start + body_len..].trim_start();
        let remaining = match (before.is_empty(), rest.is_empty()) {
            (true, _) => rest.to_string(),
            (_, true) => before.to_string(),
            _ => format!("{before}\n\n{rest}"),
        };

        (tips, remaining.trim().to_string())
    }
}

/// Byte offset of the first whitespace-only line in `body`.
fn first_blank_line(body: &str) -> Option<usize> {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.trim().is_empty() {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

fn bullet_lines(section: &str) -> Vec<String> {
    section
        .lines()
        .filter_map(|line| line.trim().strip_prefix(BULLET_MARKERS))
        .map(|tip| tip.trim().to_string())
        .filter(|tip| tip.chars().count() > MIN_TIP_CHARS)
        .collect()
}

/// Strips bold and heading markers from a candidate title line.
fn strip_markers(line: &str) -> String {
    line.replace("**", "").replace('#', "").trim().to_string()
}

fn is_marked(line: &str) -> bool {
    line.starts_with("**") || line.starts_with('#')
}

/// First bold or heading line among the leading lines, if it is a plausible title.
pub fn extract_title(text: &str) -> Option<String> {
    text.lines()
        .take(TITLE_SCAN_LINES)
        .map(str::trim)
        .filter(|line| is_marked(line))
        .map(strip_markers)
        .find(|title| {
            let len = title.chars().count();
            len > 3 && len < 100
        })
}

/// Splits off the first non-empty line as a title when it reads like one.
///
/// A heading line always qualifies; an unmarked line qualifies when it is
/// shorter than 60 characters and does not end in a period.
pub fn split_leading_title(text: &str) -> Option<(String, String)> {
    let text = text.trim();
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let first = first.trim();
    let looks_like_title =
        is_marked(first) || (first.chars().count() < 60 && !first.ends_with('.'));
    if !looks_like_title {
        return None;
    }
    let title = strip_markers(first);
    if title.is_empty() {
        return None;
    }
    Some((title, rest.trim().to_string()))
}

/// Tips used when a writing completion carries none.
pub fn generic_writing_tips(exercise_name: &str) -> Vec<String> {
    vec![
        format!(
            "Practice this exercise regularly to build muscle memory for {}",
            exercise_name.to_lowercase()
        ),
        "Don't edit while doing the exercise - focus on exploration first".to_string(),
        "Review your work after completing the exercise to identify patterns".to_string(),
    ]
}

/// Splits a writing-exercise completion into title, body and tips.
pub fn postprocess(text: &str, exercise_name: &str, genre_string: &str) -> Postprocessed {
    let title =
        extract_title(text).unwrap_or_else(|| format!("{exercise_name}: {genre_string}"));

    let (mut tips, content) = TipSection::writing().extract_and_strip_tips(text);
    if tips.is_empty() {
        tips = generic_writing_tips(exercise_name);
    }
    tips.truncate(MAX_TIPS);

    Postprocessed {
        title,
        content,
        tips,
    }
}
