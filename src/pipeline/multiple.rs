use log::debug;

use crate::{dict::SyllableCandidate, options::NormalizedOptions, pipeline::SyllableRecord};

/// One record per reading when the input is a single Chinese char and
/// `multiple` is set; `None` otherwise, leaving the default reading.
pub fn expand(
    candidates: &[Vec<SyllableCandidate>],
    options: &NormalizedOptions,
) -> Option<Vec<SyllableRecord>> {
    if !options.multiple {
        return None;
    }
    let [readings] = candidates else {
        return None;
    };
    if readings.is_empty() {
        return None;
    }
    debug!(
        "expanding {} into {} readings",
        readings[0].origin,
        readings.len()
    );
    Some(readings.iter().map(SyllableRecord::from_candidate).collect())
}
