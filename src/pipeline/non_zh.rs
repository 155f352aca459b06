use log::trace;

use crate::{options::NonZh, pipeline::SyllableRecord};

/// Applies the non-Chinese policy. `Removed` soft-deletes every
/// non-Chinese record; `Spaced` and `Consecutive` fold each maximal run of
/// non-Chinese records into the first record of the run. Chinese records
/// are left alone.
pub fn apply(records: &mut [SyllableRecord], policy: NonZh) {
    match policy {
        NonZh::Removed => {
            for r in records.iter_mut().filter(|r| !r.is_zh) {
                r.deleted = true;
            }
        }
        NonZh::Spaced | NonZh::Consecutive => collapse_runs(records),
    }
}

fn collapse_runs(records: &mut [SyllableRecord]) {
    let mut head: Option<usize> = None;
    for i in 0..records.len() {
        if records[i].is_zh || records[i].deleted {
            head = None;
            continue;
        }
        match head {
            None => head = Some(i),
            Some(h) => {
                let (before, after) = records.split_at_mut(i);
                let run = &mut before[h];
                let cur = &mut after[0];
                run.origin.push_str(&cur.origin);
                run.result.push_str(&cur.result);
                run.origin_pinyin.push_str(&cur.origin_pinyin);
                cur.deleted = true;
                trace!("folded {:?} into run {:?}", cur.origin, run.origin);
            }
        }
    }
}
