//! Heuristic English verb inflection used when filling subcat frames.
//!
//! The rules are a fixed suffix table applied first-match-wins. Irregular
//! verbs and consonant doubling are not handled: `gerund("run")` is
//! `"runing"`.

fn ends_with_any(word : &str, suffixes : &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}

fn strip_chars(word : &str, n : usize) -> &str {
    match word.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &word[..i],
        None => ""
    }
}

pub fn third_person_singular(word : &str) -> String {
    let lower = word.to_ascii_lowercase();
    if lower.ends_with('s') {
        format!("{}es", word)
    } else if ends_with_any(&lower, &["ay", "ey", "iy", "oy", "uy"]) {
        format!("{}s", word)
    } else if lower.ends_with('y') {
        format!("{}ies", strip_chars(word, 1))
    } else if lower.ends_with('e') {
        format!("{}s", word)
    } else if lower.ends_with('o') {
        format!("{}es", word)
    } else if ends_with_any(&lower, &["ch", "sh", "x"]) {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

pub fn gerund(word : &str) -> String {
    let lower = word.to_ascii_lowercase();
    if lower.ends_with("ie") {
        format!("{}ying", strip_chars(word, 2))
    } else if lower.ends_with('e') {
        format!("{}ing", strip_chars(word, 1))
    } else {
        format!("{}ing", word)
    }
}
