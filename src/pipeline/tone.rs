use crate::{
    options::{NormalizedOptions, ToneType},
    pipeline::SyllableRecord,
    syllable::{is_tone_marked, strip_tone, with_tone_num},
};

pub fn apply(records: &mut [SyllableRecord], tone_type: ToneType) {
    let render: fn(&str, u8) -> String = match tone_type {
        ToneType::Symbol => return,
        ToneType::None => without_tone,
        ToneType::Num => with_tone_num,
    };
    for r in records.iter_mut().filter(|r| r.is_live_zh()) {
        r.result = render(&r.result, r.tone);
    }
}

fn without_tone(s: &str, _tone: u8) -> String {
    if s.chars().any(is_tone_marked) {
        strip_tone(s)
    } else {
        s.to_string()
    }
}

/// `ü` → `v`, only together with `toneType=none`.
pub fn apply_v(records: &mut [SyllableRecord], options: &NormalizedOptions) {
    if !options.v || options.tone_type != ToneType::None {
        return;
    }
    for r in records.iter_mut().filter(|r| r.is_live_zh()) {
        if r.result.contains('ü') {
            r.result = r.result.replace('ü', "v");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn record(result: &str, tone: u8) -> SyllableRecord {
        SyllableRecord {
            origin: "绿".into(),
            origin_pinyin: result.into(),
            result: result.into(),
            tone,
            is_zh: true,
            deleted: false,
        }
    }

    #[test]
    fn renders_tones() {
        let mut r = vec![record("lǜ", 4), record("de", 0)];
        apply(&mut r, ToneType::Num);
        assert_eq!(r[0].result, "lü4");
        assert_eq!(r[1].result, "de");

        let mut r = vec![record("lǜ", 4), record("4", 4), record("", 4)];
        apply(&mut r, ToneType::None);
        assert_eq!(r[0].result, "lü");
        assert_eq!(r[1].result, "4");
        assert_eq!(r[2].result, "");

        let mut r = vec![record("lǜ", 4)];
        apply(&mut r, ToneType::Symbol);
        assert_eq!(r[0].result, "lǜ");
    }

    #[test]
    fn v_needs_no_tone() {
        let with_tone = Options::builder().v(true).build().normalize();
        let mut r = vec![record("lǜ", 4)];
        apply_v(&mut r, &with_tone);
        assert_eq!(r[0].result, "lǜ");

        let no_tone = Options::builder()
            .v(true)
            .tone_type(ToneType::None)
            .build()
            .normalize();
        let mut r = vec![record("lü", 4)];
        apply_v(&mut r, &no_tone);
        assert_eq!(r[0].result, "lv");
    }
}
