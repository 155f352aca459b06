use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::tone::strip_tone;

/// Initials in match order: two-letter initials first so `zh` wins over `z`.
const INITIALS: [&str; 23] = [
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

/// Plain final → (head, body, tail) lengths in chars.
const FINAL_PARTS: [(&str, (usize, usize, usize)); 41] = [
    ("a", (0, 1, 0)),
    ("o", (0, 1, 0)),
    ("e", (0, 1, 0)),
    ("ê", (0, 1, 0)),
    ("ai", (0, 1, 1)),
    ("ei", (0, 1, 1)),
    ("ao", (0, 1, 1)),
    ("ou", (0, 1, 1)),
    ("an", (0, 1, 1)),
    ("en", (0, 1, 1)),
    ("ang", (0, 1, 2)),
    ("eng", (0, 1, 2)),
    ("ong", (0, 1, 2)),
    ("er", (0, 1, 1)),
    ("i", (0, 1, 0)),
    ("ia", (1, 1, 0)),
    ("ie", (1, 1, 0)),
    ("io", (1, 1, 0)),
    ("iao", (1, 1, 1)),
    ("iu", (1, 1, 0)),
    ("ian", (1, 1, 1)),
    ("in", (0, 1, 1)),
    ("iang", (1, 1, 2)),
    ("ing", (0, 1, 2)),
    ("iong", (1, 1, 2)),
    ("u", (0, 1, 0)),
    ("ua", (1, 1, 0)),
    ("uo", (1, 1, 0)),
    ("uai", (1, 1, 1)),
    ("ui", (1, 1, 0)),
    ("uan", (1, 1, 1)),
    ("un", (0, 1, 1)),
    ("uang", (1, 1, 2)),
    ("ueng", (1, 1, 2)),
    ("ue", (1, 1, 0)),
    ("ü", (0, 1, 0)),
    ("üe", (1, 1, 0)),
    ("üan", (1, 1, 1)),
    ("ün", (0, 1, 1)),
    ("ng", (0, 0, 2)),
    ("m", (0, 1, 0)),
];

static FINAL_PARTS_MAP: Lazy<HashMap<&'static str, (usize, usize, usize)>> =
    Lazy::new(|| FINAL_PARTS.into_iter().collect());

/// Splits a syllable into `(initial, final)`. The initial is only taken
/// when a letter follows it, so syllabic `m̄`, `ńg` or a bare `ng` stay
/// whole in the final.
pub fn split_initial(syllable: &str) -> (&str, &str) {
    if matches!(strip_tone(syllable).as_str(), "m" | "n" | "ng") {
        return ("", syllable);
    }
    for initial in INITIALS {
        if let Some(rest) = syllable.strip_prefix(initial) {
            if rest.chars().next().is_some_and(char::is_alphabetic) {
                return (initial, rest);
            }
        }
    }
    ("", syllable)
}

/// Splits a final into `(head, body, tail)` with `head + body + tail ==
/// final`. Finals outside the table are returned as the body.
pub fn split_final(final_: &str) -> (&str, &str, &str) {
    let plain = strip_tone(final_).replace('v', "ü");
    let chars = final_.chars().count();
    match FINAL_PARTS_MAP.get(plain.as_str()) {
        Some(&(head, body, tail)) if head + body + tail == chars => {
            let head_end = byte_offset(final_, head);
            let body_end = byte_offset(final_, head + body);
            (
                &final_[..head_end],
                &final_[head_end..body_end],
                &final_[body_end..],
            )
        }
        _ => ("", final_, ""),
    }
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(s.len())
}
