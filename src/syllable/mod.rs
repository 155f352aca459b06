//! Rule-based decomposition of a pinyin syllable into its phonetic parts.

use log::trace;
use serde::Serialize;

pub mod split;
pub mod tone;

pub use split::{split_final, split_initial};
pub use tone::{is_tone_marked, mark_tone, split_tone_num, strip_tone, tone_of};

/// A syllable split into initial and final, with the final further split
/// into head (glide), body (nucleus) and tail (coda).
///
/// `initial + final_ == pinyin` and `final_head + final_body + final_tail ==
/// final_` always hold, whatever tone marks the syllable carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllable {
    pub pinyin: String,
    pub initial: String,
    #[serde(rename = "final")]
    pub final_: String,
    pub final_head: String,
    pub final_body: String,
    pub final_tail: String,
    pub tone: u8,
}

impl Syllable {
    /// Decomposes `pinyin`. `tone` is the digit carried by the dictionary
    /// entry; when absent it is read from the diacritic.
    pub fn decompose(pinyin: &str, tone: Option<u8>) -> Self {
        let (initial, final_) = split_initial(pinyin);
        let (head, body, tail) = split_final(final_);
        let tone = tone.unwrap_or_else(|| tone_of(pinyin));
        trace!(
            "decompose {:?}: {:?} + {:?} ({:?}|{:?}|{:?}) tone {}",
            pinyin, initial, final_, head, body, tail, tone
        );
        Self {
            pinyin: pinyin.to_string(),
            initial: initial.to_string(),
            final_: final_.to_string(),
            final_head: head.to_string(),
            final_body: body.to_string(),
            final_tail: tail.to_string(),
            tone,
        }
    }
}

/// Strips the diacritics of `text` and appends `tone`, leaving neutral-tone
/// and empty text without a digit.
pub fn with_tone_num(text: &str, tone: u8) -> String {
    let mut out = strip_tone(text);
    if !out.is_empty() && (1..=4).contains(&tone) {
        out.push(char::from(b'0' + tone));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_zhuang() {
        let s = Syllable::decompose("zhuàng", Some(4));
        assert_eq!(s.initial, "zh");
        assert_eq!(s.final_, "uàng");
        assert_eq!(s.final_head, "u");
        assert_eq!(s.final_body, "à");
        assert_eq!(s.final_tail, "ng");
        assert_eq!(with_tone_num(&s.pinyin, s.tone), "zhuang4");
    }

    #[test]
    fn zero_initial() {
        let s = Syllable::decompose("ān", None);
        assert_eq!(s.initial, "");
        assert_eq!(s.final_, "ān");
        assert_eq!(s.final_body, "ā");
        assert_eq!(s.final_tail, "n");
        assert_eq!(s.tone, 1);
    }

    #[test]
    fn explicit_tone_wins_over_diacritic() {
        let s = Syllable::decompose("ma", Some(0));
        assert_eq!(s.tone, 0);
        assert_eq!(with_tone_num(&s.pinyin, s.tone), "ma");
        let s = Syllable::decompose("mā", Some(1));
        assert_eq!(with_tone_num(&s.pinyin, s.tone), "ma1");
    }

    #[test]
    fn parts_concatenate_back() {
        for p in [
            "zhōng", "guó", "xiǎng", "lüè", "yuán", "wēng", "ér", "ńg", "hm", "jiǒng", "ǹ", "ê",
            "kuài", "shuǐ", "qún",
        ] {
            let s = Syllable::decompose(p, None);
            assert_eq!(format!("{}{}", s.initial, s.final_), p);
            assert_eq!(
                format!("{}{}{}", s.final_head, s.final_body, s.final_tail),
                s.final_
            );
        }
    }
}
