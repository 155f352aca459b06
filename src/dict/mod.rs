//! Reading lookup: character → ordered candidate readings.
//!
//! Readings come from the `pinyin` crate's heteronym data, most common
//! reading first. Surname mode moves a surname reading to the front.

use log::debug;
use pinyin::{Pinyin, ToPinyinMulti};
use serde::Serialize;

use crate::{
    options::Mode,
    syllable::{Syllable, mark_tone, split_tone_num, tone_of},
};

pub mod surname;

pub use surname::{SURNAMES, SurnameTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllableCandidate {
    pub origin: String,
    pub pinyin: String,
    pub initial: String,
    #[serde(rename = "final")]
    pub final_: String,
    pub tone: u8,
    /// The dictionary's most common reading for `origin`.
    pub is_default: bool,
    pub is_zh: bool,
}

impl SyllableCandidate {
    fn zh(origin: char, pinyin: &str, tone: u8, is_default: bool) -> Self {
        let syllable = Syllable::decompose(pinyin, Some(tone));
        Self {
            origin: origin.to_string(),
            pinyin: syllable.pinyin,
            initial: syllable.initial,
            final_: syllable.final_,
            tone,
            is_default,
            is_zh: true,
        }
    }

    /// Stand-in for a char the dictionary does not know.
    pub fn passthrough(origin: char) -> Self {
        Self {
            origin: origin.to_string(),
            pinyin: origin.to_string(),
            initial: String::new(),
            final_: String::new(),
            tone: 0,
            is_default: true,
            is_zh: false,
        }
    }
}

/// Tone digit carried by the dictionary entry, falling back to the
/// diacritic when the entry has none.
fn carried_tone(p: Pinyin) -> u8 {
    match p.with_tone_num_end().chars().last().and_then(|d| d.to_digit(10)) {
        Some(d @ 1..=4) => d as u8,
        Some(_) => 0,
        None => tone_of(p.with_tone()),
    }
}

/// Every reading of `c`, default first. Empty if `c` is not Chinese.
pub fn readings(c: char) -> Vec<SyllableCandidate> {
    let Some(multi) = c.to_pinyin_multi() else {
        return Vec::new();
    };
    let mut out: Vec<SyllableCandidate> = Vec::new();
    for p in multi {
        if out.iter().any(|r| r.pinyin == p.with_tone()) {
            continue;
        }
        let is_default = out.is_empty();
        out.push(SyllableCandidate::zh(
            c,
            p.with_tone(),
            carried_tone(p),
            is_default,
        ));
    }
    out
}

/// Moves the reading given in tone-number notation to the front, adding it
/// when the dictionary lacks it.
fn prefer(candidates: &mut Vec<SyllableCandidate>, origin: char, num_form: &str) {
    let (plain, tone) = split_tone_num(num_form);
    let marked = mark_tone(plain, tone);
    match candidates.iter().position(|c| c.pinyin == marked) {
        Some(0) => {}
        Some(i) => {
            let c = candidates.remove(i);
            candidates.insert(0, c);
        }
        None => candidates.insert(0, SyllableCandidate::zh(origin, &marked, tone, false)),
    }
}

/// Candidate readings for every char of `text`, using `surnames` in
/// [`Mode::Surname`]. Non-Chinese chars get an empty list.
pub fn lookup_text_with(
    text: &str,
    mode: Mode,
    surnames: &SurnameTable,
) -> Vec<Vec<SyllableCandidate>> {
    let chars: Vec<char> = text.chars().collect();
    let mut out: Vec<Vec<SyllableCandidate>> = chars.iter().map(|&c| readings(c)).collect();
    if mode == Mode::Surname {
        for (i, reading) in surnames.readings_for(&chars).into_iter().enumerate() {
            if let Some(reading) = reading {
                if out[i].is_empty() {
                    continue;
                }
                debug!("surname reading {} for {}", reading, chars[i]);
                prefer(&mut out[i], chars[i], reading);
            }
        }
    }
    out
}

pub fn lookup_text(text: &str, mode: Mode) -> Vec<Vec<SyllableCandidate>> {
    lookup_text_with(text, mode, &SURNAMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monophonic_reading() {
        let r = readings('国');
        assert_eq!(r[0].pinyin, "guó");
        assert_eq!(r[0].tone, 2);
        assert_eq!(r[0].initial, "g");
        assert_eq!(r[0].final_, "uó");
        assert!(r[0].is_default);
    }

    #[test]
    fn polyphonic_default_first() {
        let r = readings('中');
        assert!(r.len() >= 2);
        assert_eq!(r[0].pinyin, "zhōng");
        assert!(r.iter().any(|c| c.pinyin == "zhòng"));
        assert_eq!(r.iter().filter(|c| c.is_default).count(), 1);
    }

    #[test]
    fn non_chinese_has_no_readings() {
        assert!(readings('a').is_empty());
        assert!(readings('1').is_empty());
        assert!(readings('，').is_empty());
    }

    #[test]
    fn surname_mode_reorders() {
        let normal = lookup_text("单", Mode::Normal);
        assert_eq!(normal[0][0].pinyin, "dān");
        let surname = lookup_text("单", Mode::Surname);
        assert_eq!(surname[0][0].pinyin, "shàn");
        assert_eq!(surname[0].len(), normal[0].len());
    }

    #[test]
    fn surname_reading_is_added_when_missing() {
        let table = SurnameTable::from_json(r#"{"single": {"国": "guo3"}}"#).unwrap();
        let r = lookup_text_with("国", Mode::Surname, &table);
        assert_eq!(r[0][0].pinyin, "guǒ");
        assert_eq!(r[0][0].tone, 3);
        assert!(!r[0][0].is_default);
        assert_eq!(r[0][1].pinyin, "guó");
    }

    #[test]
    fn one_entry_per_char() {
        let r = lookup_text("中a国", Mode::Normal);
        assert_eq!(r.len(), 3);
        assert!(r[1].is_empty());
    }
}
