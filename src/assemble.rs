//! Turns pipeline records into the requested output shape.

use log::error;
use serde::Serialize;
use serde_json::Value;

use crate::{
    options::{NonZh, NormalizedOptions, OutputType},
    pipeline::{Records, SyllableRecord},
    syllable::{Syllable, split_tone_num},
};

/// Full detail for one output entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllData {
    pub origin: String,
    pub pinyin: String,
    pub initial: String,
    #[serde(rename = "final")]
    pub final_: String,
    pub final_head: String,
    pub final_body: String,
    pub final_tail: String,
    pub num: u8,
    pub first: String,
    pub is_zh: bool,
}

impl AllData {
    fn from_record(record: &SyllableRecord) -> Self {
        let first = record
            .result
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        if !record.is_zh {
            return Self {
                origin: record.origin.clone(),
                pinyin: record.result.clone(),
                first,
                ..Default::default()
            };
        }
        // a trailing tone digit belongs to `num`, not to the final
        let (letters, _) = split_tone_num(&record.result);
        let s = Syllable::decompose(letters, Some(record.tone));
        Self {
            origin: record.origin.clone(),
            pinyin: record.result.clone(),
            initial: s.initial,
            final_: s.final_,
            final_head: s.final_head,
            final_body: s.final_body,
            final_tail: s.final_tail,
            num: record.tone,
            first,
            is_zh: true,
        }
    }
}

/// Conversion output, shaped by [`OutputType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    Text(String),
    List(Vec<String>),
    All(Vec<AllData>),
}

impl Converted {
    pub fn empty(output: OutputType) -> Self {
        match output {
            OutputType::String => Self::Text(String::new()),
            OutputType::Array => Self::List(Vec::new()),
            OutputType::All => Self::All(Vec::new()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_all(&self) -> Option<&[AllData]> {
        match self {
            Self::All(a) => Some(a),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            error!("failed to serialize conversion result: {}", e);
            Value::Null
        })
    }
}

pub fn assemble(records: &Records, options: &NormalizedOptions) -> Converted {
    match options.output {
        OutputType::String => {
            let sep = match options.non_zh {
                _ if records.expanded => " ",
                NonZh::Spaced => " ",
                NonZh::Consecutive | NonZh::Removed => "",
            };
            let parts: Vec<&str> = records.live().map(|r| r.result.as_str()).collect();
            Converted::Text(parts.join(sep))
        }
        OutputType::Array => Converted::List(records.live().map(|r| r.result.clone()).collect()),
        OutputType::All => Converted::All(records.live().map(AllData::from_record).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn record(origin: &str, result: &str, tone: u8, is_zh: bool) -> SyllableRecord {
        SyllableRecord {
            origin: origin.into(),
            origin_pinyin: result.into(),
            result: result.into(),
            tone,
            is_zh,
            deleted: false,
        }
    }

    fn sample() -> Records {
        let mut gone = record("!", "!", 0, false);
        gone.deleted = true;
        Records {
            records: vec![
                record("中", "zhōng", 1, true),
                record("国", "guó", 2, true),
                record("12", "12", 0, false),
                gone,
            ],
            expanded: false,
        }
    }

    #[test]
    fn text_separator_follows_policy() {
        let spaced = Options::default().normalize();
        assert_eq!(
            assemble(&sample(), &spaced).as_text(),
            Some("zhōng guó 12")
        );
        let consecutive = Options::builder().non_zh(NonZh::Consecutive).build().normalize();
        assert_eq!(
            assemble(&sample(), &consecutive).as_text(),
            Some("zhōngguó12")
        );
    }

    #[test]
    fn expanded_readings_always_spaced() {
        let mut records = Records {
            records: vec![record("中", "zhōng", 1, true), record("中", "zhòng", 4, true)],
            expanded: true,
        };
        let options = Options::builder().non_zh(NonZh::Removed).build().normalize();
        assert_eq!(
            assemble(&records, &options).as_text(),
            Some("zhōng zhòng")
        );
        records.expanded = false;
        assert_eq!(assemble(&records, &options).as_text(), Some("zhōngzhòng"));
    }

    #[test]
    fn all_data_fields() {
        let options = Options::builder().output(OutputType::All).build().normalize();
        let out = assemble(&sample(), &options);
        let all = out.as_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].initial, "zh");
        assert_eq!(all[0].final_, "ōng");
        assert_eq!(all[0].final_body, "ō");
        assert_eq!(all[0].final_tail, "ng");
        assert_eq!(all[0].num, 1);
        assert_eq!(all[0].first, "z");
        assert!(!all[2].is_zh);
        assert_eq!(all[2].pinyin, "12");
        assert_eq!(all[2].initial, "");
    }

    #[test]
    fn all_data_with_tone_numbers() {
        let a = AllData::from_record(&record("中", "zhong1", 1, true));
        assert_eq!(a.pinyin, "zhong1");
        assert_eq!(a.initial, "zh");
        assert_eq!(a.final_, "ong");
        assert_eq!(a.num, 1);
    }

    #[test]
    fn serializes_untagged_camel_case() {
        let options = Options::builder().output(OutputType::All).build().normalize();
        let v = assemble(&sample(), &options).to_value();
        assert_eq!(v[0]["finalTail"], "ng");
        assert_eq!(v[0]["final"], "ōng");
        assert_eq!(v[0]["isZh"], true);
        assert_eq!(Converted::Text("a".into()).to_value(), Value::from("a"));
    }

    #[test]
    fn empty_shapes() {
        assert_eq!(Converted::empty(OutputType::String).as_text(), Some(""));
        assert_eq!(Converted::empty(OutputType::Array).as_list(), Some(&[][..]));
        assert!(Converted::empty(OutputType::All).as_all().unwrap().is_empty());
    }
}
