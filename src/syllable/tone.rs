//! Tone marks on pinyin syllables: reading, stripping and placing them.

const COMBINING_MACRON: char = '\u{0304}';
const COMBINING_ACUTE: char = '\u{0301}';
const COMBINING_CARON: char = '\u{030C}';
const COMBINING_GRAVE: char = '\u{0300}';

/// Base letter and tone of a precomposed tone-marked char.
fn decompose_char(c: char) -> Option<(char, u8)> {
    let r = match c {
        'ā' => ('a', 1),
        'á' => ('a', 2),
        'ǎ' => ('a', 3),
        'à' => ('a', 4),
        'ē' => ('e', 1),
        'é' => ('e', 2),
        'ě' => ('e', 3),
        'è' => ('e', 4),
        'ī' => ('i', 1),
        'í' => ('i', 2),
        'ǐ' => ('i', 3),
        'ì' => ('i', 4),
        'ō' => ('o', 1),
        'ó' => ('o', 2),
        'ǒ' => ('o', 3),
        'ò' => ('o', 4),
        'ū' => ('u', 1),
        'ú' => ('u', 2),
        'ǔ' => ('u', 3),
        'ù' => ('u', 4),
        'ǖ' => ('ü', 1),
        'ǘ' => ('ü', 2),
        'ǚ' => ('ü', 3),
        'ǜ' => ('ü', 4),
        'ế' => ('ê', 2),
        'ề' => ('ê', 4),
        'ń' => ('n', 2),
        'ň' => ('n', 3),
        'ǹ' => ('n', 4),
        'ḿ' => ('m', 2),
        _ => return None,
    };
    Some(r)
}

fn combining_tone(c: char) -> Option<u8> {
    match c {
        COMBINING_MACRON => Some(1),
        COMBINING_ACUTE => Some(2),
        COMBINING_CARON => Some(3),
        COMBINING_GRAVE => Some(4),
        _ => None,
    }
}

/// Tone digit carried by the diacritic of `syllable`, `0` for the neutral
/// tone.
pub fn tone_of(syllable: &str) -> u8 {
    syllable
        .chars()
        .find_map(|c| decompose_char(c).map(|(_, t)| t).or_else(|| combining_tone(c)))
        .unwrap_or(0)
}

/// Removes every tone diacritic, keeping `ü` and `ê`.
pub fn strip_tone(syllable: &str) -> String {
    syllable
        .chars()
        .filter(|c| combining_tone(*c).is_none())
        .map(|c| decompose_char(c).map(|(base, _)| base).unwrap_or(c))
        .collect()
}

pub fn is_tone_marked(c: char) -> bool {
    decompose_char(c).is_some() || combining_tone(c).is_some()
}

fn marked(base: char, tone: u8) -> Option<String> {
    let idx = match tone {
        1..=4 => (tone - 1) as usize,
        _ => return None,
    };
    let table: [&str; 4] = match base {
        'a' => ["ā", "á", "ǎ", "à"],
        'e' => ["ē", "é", "ě", "è"],
        'i' => ["ī", "í", "ǐ", "ì"],
        'o' => ["ō", "ó", "ǒ", "ò"],
        'u' => ["ū", "ú", "ǔ", "ù"],
        'ü' => ["ǖ", "ǘ", "ǚ", "ǜ"],
        'ê' => ["ê\u{0304}", "ế", "ê\u{030C}", "ề"],
        'n' => ["n\u{0304}", "ń", "ň", "ǹ"],
        'm' => ["m\u{0304}", "ḿ", "m\u{030C}", "m\u{0300}"],
        _ => return None,
    };
    Some(table[idx].to_string())
}

/// Places the diacritic for `tone` on a plain syllable. The mark goes on
/// `a` or `e` when present, on the `o` of `ou`, otherwise on the last vowel;
/// syllabic `m`/`n` carry it when there is no vowel. `v` is written `ü`.
pub fn mark_tone(plain: &str, tone: u8) -> String {
    let plain = plain.replace('v', "ü");
    let chars: Vec<char> = plain.chars().collect();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ü' | 'ê');

    let target = chars
        .iter()
        .position(|&c| c == 'a' || c == 'e' || c == 'ê')
        .or_else(|| {
            chars
                .windows(2)
                .position(|w| w[0] == 'o' && w[1] == 'u')
        })
        .or_else(|| chars.iter().rposition(|&c| is_vowel(c)))
        .or_else(|| chars.iter().position(|&c| c == 'n' || c == 'm'));

    let Some(pos) = target else {
        return plain;
    };
    let Some(mark) = marked(chars[pos], tone) else {
        return plain;
    };

    let mut out = String::with_capacity(plain.len() + 2);
    out.extend(&chars[..pos]);
    out.push_str(&mark);
    out.extend(&chars[pos + 1..]);
    out
}

/// Parses tone-number notation such as `shan4` or `de5` into
/// `(plain, tone)`. Digits 0 and 5 both mean neutral.
pub fn split_tone_num(num_form: &str) -> (&str, u8) {
    match num_form.char_indices().last() {
        Some((i, d)) if d.is_ascii_digit() => {
            let tone = d.to_digit(10).unwrap_or(0) as u8;
            (&num_form[..i], if tone > 4 { 0 } else { tone })
        }
        _ => (num_form, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tone() {
        assert_eq!(tone_of("zhōng"), 1);
        assert_eq!(tone_of("guó"), 2);
        assert_eq!(tone_of("nǚ"), 3);
        assert_eq!(tone_of("lǜ"), 4);
        assert_eq!(tone_of("de"), 0);
        assert_eq!(tone_of("ń"), 2);
        assert_eq!(tone_of("m\u{0300}"), 4);
    }

    #[test]
    fn strips_tone() {
        assert_eq!(strip_tone("zhōng"), "zhong");
        assert_eq!(strip_tone("lǜ"), "lü");
        assert_eq!(strip_tone("ế"), "ê");
        assert_eq!(strip_tone("m\u{0304}"), "m");
        assert_eq!(strip_tone("abc123"), "abc123");
    }

    #[test]
    fn detects_marks() {
        assert!(is_tone_marked('ǜ'));
        assert!(is_tone_marked('ń'));
        assert!(is_tone_marked(COMBINING_CARON));
        assert!(!is_tone_marked('ü'));
        assert!(!is_tone_marked('ê'));
        assert!(!is_tone_marked('a'));
    }

    #[test]
    fn marks_tone() {
        assert_eq!(mark_tone("zhong", 1), "zhōng");
        assert_eq!(mark_tone("shan", 4), "shàn");
        assert_eq!(mark_tone("lou", 2), "lóu");
        assert_eq!(mark_tone("gui", 4), "guì");
        assert_eq!(mark_tone("liu", 2), "liú");
        assert_eq!(mark_tone("xue", 3), "xuě");
        assert_eq!(mark_tone("lv", 4), "lǜ");
        assert_eq!(mark_tone("de", 0), "de");
        assert_eq!(mark_tone("n", 2), "ń");
    }

    #[test]
    fn tone_num_form() {
        assert_eq!(split_tone_num("shan4"), ("shan", 4));
        assert_eq!(split_tone_num("de5"), ("de", 0));
        assert_eq!(split_tone_num("ma"), ("ma", 0));
    }
}
