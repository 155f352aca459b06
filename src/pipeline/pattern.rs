use crate::{options::Pattern, pipeline::SyllableRecord, syllable::Syllable};

/// Replaces the result of every live Chinese record with the part of the
/// syllable selected by `pattern`.
pub fn apply(records: &mut [SyllableRecord], pattern: Pattern) {
    if pattern == Pattern::Pinyin {
        return;
    }
    for r in records.iter_mut().filter(|r| r.is_live_zh()) {
        r.result = extract(&r.result, r.tone, pattern);
    }
}

fn extract(pinyin: &str, tone: u8, pattern: Pattern) -> String {
    let s = Syllable::decompose(pinyin, Some(tone));
    match pattern {
        Pattern::Pinyin => s.pinyin,
        Pattern::Initial => s.initial,
        Pattern::Final => s.final_,
        Pattern::FinalHead => s.final_head,
        Pattern::FinalBody => s.final_body,
        Pattern::FinalTail => s.final_tail,
        Pattern::First => s.pinyin.chars().next().map(String::from).unwrap_or_default(),
        Pattern::Num => s.tone.to_string(),
    }
}
