//! Turns raw instruction text into an ordered step list.
//!
//! Instruction quality varies wildly across free recipe sources: some send
//! HTML lists, some numbered lines, some bare lines, some a single block of
//! prose. The branches below are tried in that order; whatever falls through
//! every structural check is returned as one whole-text step, so content is
//! never dropped.

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s*").expect("leading-number pattern is valid"));
static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

/// Parse author-formatted instruction text into discrete steps.
///
/// Returns an empty vector only for blank input; any non-blank input yields
/// at least one non-empty step.
pub fn parse_instructions(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    // Markup is the most explicit structure, so it wins over line splitting.
    if let Some(steps) = markup_list_steps(text) {
        return steps;
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() > 1 {
        if LEADING_NUMBER.is_match(lines[0]) {
            return lines
                .iter()
                .map(|line| decode_step(LEADING_NUMBER.replace(line, "").trim()))
                .collect();
        }
        return lines.iter().map(|line| decode_step(line)).collect();
    }

    sentence_steps(text)
}

/// Text content of every list item, if the input parses as markup with at
/// least one `<li>`. Entities are already decoded by the HTML parser.
fn markup_list_steps(text: &str) -> Option<Vec<String>> {
    let fragment = Html::parse_fragment(text);
    let selector = Selector::parse("li").unwrap();
    let steps: Vec<String> = fragment
        .select(&selector)
        .map(|item| item.text().collect::<String>().trim().to_string())
        .filter(|step| !step.is_empty())
        .collect();
    if steps.is_empty() {
        None
    } else {
        Some(steps)
    }
}

/// Split a single block of prose on sentence-terminal punctuation, keeping
/// the terminator. An unterminated trailing fragment becomes a final step;
/// text with no boundary at all is returned whole.
fn sentence_steps(text: &str) -> Vec<String> {
    let mut steps = Vec::new();
    let mut tail = 0;
    for sentence in SENTENCE.find_iter(text) {
        let step = sentence.as_str().trim();
        if !step.is_empty() {
            steps.push(decode_step(step));
        }
        tail = sentence.end();
    }
    let rest = text[tail..].trim();
    if !rest.is_empty() {
        steps.push(decode_step(rest));
    }
    steps
}

fn decode_step(step: &str) -> String {
    decode_html_entities(step).into_owned()
}
