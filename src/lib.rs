use log::debug;
use serde_json::Value;

mod assemble;
mod error;

pub mod dict;
pub mod options;
pub mod pipeline;
pub mod syllable;

pub use assemble::{AllData, Converted};
pub use dict::SyllableCandidate;
pub use error::PinyinError;
pub use options::{Mode, NonZh, Options, OptionsBuilder, OutputType, Pattern, ToneType};

/// Converts `text` to pinyin.
///
/// The shape of the result follows `options.output`: a joined string, one
/// string per entry, or one [`AllData`] per entry.
///
/// ```
/// use zh_pinyin_rs::{convert, Options, ToneType};
///
/// let out = convert("中国", &Options::default());
/// assert_eq!(out.as_text(), Some("zhōng guó"));
///
/// let num = Options::builder().tone_type(ToneType::Num).build();
/// assert_eq!(convert("中国", &num).as_text(), Some("zhong1 guo2"));
/// ```
pub fn convert(text: &str, options: &Options) -> Converted {
    let options = options.normalize();
    if text.is_empty() {
        return Converted::empty(options.output);
    }
    let records = pipeline::run(text, &options);
    assemble::assemble(&records, &options)
}

/// Every dictionary reading of every char of `text`, without any option
/// processing. A char the dictionary does not know yields a single
/// passthrough candidate so the outer list lines up with the input.
pub fn convert_all_readings(text: &str) -> Vec<Vec<SyllableCandidate>> {
    text.chars()
        .zip(dict::lookup_text(text, Mode::Normal))
        .map(|(c, readings)| {
            if readings.is_empty() {
                vec![SyllableCandidate::passthrough(c)]
            } else {
                readings
            }
        })
        .collect()
}

/// [`convert`] over a dynamic value. Anything but a JSON string is returned
/// unchanged.
pub fn convert_value(value: &Value, options: &Options) -> Value {
    match value.as_str() {
        Some(text) => convert(text, options).to_value(),
        None => {
            debug!("not a string, returned as is: {}", value);
            value.clone()
        }
    }
}

/// [`convert_all_readings`] over a dynamic value. Anything but a JSON string
/// is returned unchanged.
pub fn convert_all_readings_value(value: &Value) -> Value {
    match value.as_str() {
        Some(text) => serde_json::to_value(convert_all_readings(text)).unwrap_or_else(|e| {
            log::error!("failed to serialize readings: {}", e);
            Value::Null
        }),
        None => {
            debug!("not a string, returned as is: {}", value);
            value.clone()
        }
    }
}
