//! The conversion pipeline.
//!
//! One [`SyllableRecord`] is created per input char and every stage mutates
//! the records in place. Records are never removed before assembly; a stage
//! that drops one sets `deleted` so indices keep matching the input.
//!
//! Stage order matters: non-Chinese handling, multiplicity, pattern
//! extraction, tone rendering, then ü→v.

use log::debug;

use crate::{
    dict::{self, SyllableCandidate},
    options::NormalizedOptions,
};

pub mod multiple;
pub mod non_zh;
pub mod pattern;
pub mod tone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableRecord {
    pub origin: String,
    /// Tone-marked pinyin of the selected reading, never rewritten.
    pub origin_pinyin: String,
    /// Working value, rewritten by each stage.
    pub result: String,
    /// Tone digit of the selected reading, `0` for neutral and non-Chinese.
    pub tone: u8,
    pub is_zh: bool,
    pub deleted: bool,
}

impl SyllableRecord {
    pub fn from_candidate(candidate: &SyllableCandidate) -> Self {
        Self {
            origin: candidate.origin.clone(),
            origin_pinyin: candidate.pinyin.clone(),
            result: candidate.pinyin.clone(),
            tone: candidate.tone,
            is_zh: candidate.is_zh,
            deleted: false,
        }
    }

    /// Record for `c` holding its default reading, or the char itself when
    /// it has none.
    pub fn new(c: char, candidates: &[SyllableCandidate]) -> Self {
        match candidates.first() {
            Some(candidate) => Self::from_candidate(candidate),
            None => Self::from_candidate(&SyllableCandidate::passthrough(c)),
        }
    }

    pub(crate) fn is_live_zh(&self) -> bool {
        self.is_zh && !self.deleted
    }
}

/// Records after every stage, plus whether they are the alternative
/// readings of a single char rather than a char sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records {
    pub records: Vec<SyllableRecord>,
    pub expanded: bool,
}

impl Records {
    pub fn live(&self) -> impl Iterator<Item = &SyllableRecord> {
        self.records.iter().filter(|r| !r.deleted)
    }
}

pub fn run(text: &str, options: &NormalizedOptions) -> Records {
    let candidates = dict::lookup_text(text, options.mode);
    let mut records: Vec<SyllableRecord> = text
        .chars()
        .zip(&candidates)
        .map(|(c, cands)| SyllableRecord::new(c, cands))
        .collect();
    debug!("{} records for {:?}", records.len(), text);

    non_zh::apply(&mut records, options.non_zh);

    let expanded = match multiple::expand(&candidates, options) {
        Some(all) => {
            records = all;
            true
        }
        None => false,
    };

    pattern::apply(&mut records, options.pattern);
    tone::apply(&mut records, options.tone_type);
    tone::apply_v(&mut records, options);

    debug!(
        "{} live records after pipeline",
        records.iter().filter(|r| !r.deleted).count()
    );
    Records { records, expanded }
}
