use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PinyinError;

macro_rules! option_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $text),+
                })
            }
        }

        impl FromStr for $name {
            type Err = PinyinError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(PinyinError::from(format!(
                        "unknown {}: {:?}",
                        stringify!($name),
                        s
                    ))),
                }
            }
        }
    };
}

option_enum!(
    /// How the tone of each syllable is shown.
    ToneType {
        Symbol => "symbol",
        Num => "num",
        None => "none",
    }
);

option_enum!(
    /// Which part of each syllable is returned.
    Pattern {
        Pinyin => "pinyin",
        Initial => "initial",
        Final => "final",
        Num => "num",
        First => "first",
        FinalHead => "finalHead",
        FinalBody => "finalBody",
        FinalTail => "finalTail",
    }
);

option_enum!(
    /// Reading priority. `Surname` prefers surname readings for characters
    /// found in the surname table.
    Mode {
        Normal => "normal",
        Surname => "surname",
    }
);

option_enum!(
    /// Treatment of characters that are not Chinese.
    NonZh {
        Spaced => "spaced",
        Consecutive => "consecutive",
        Removed => "removed",
    }
);

option_enum!(
    /// Shape of the value returned by [`crate::convert`].
    OutputType {
        String => "string",
        Array => "array",
        All => "all",
    }
);

/// Per-call conversion options. Conflicting combinations are not errors;
/// they are resolved by [`Options::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub tone_type: ToneType,
    pub pattern: Pattern,
    pub multiple: bool,
    pub mode: Mode,
    /// Legacy switch, superseded by `non_zh: NonZh::Removed`.
    pub remove_non_zh: bool,
    pub non_zh: NonZh,
    pub v: bool,
    #[serde(rename = "type")]
    pub output: OutputType,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tone_type: ToneType::Symbol,
            pattern: Pattern::Pinyin,
            multiple: false,
            mode: Mode::Normal,
            remove_non_zh: false,
            non_zh: NonZh::Spaced,
            v: false,
            output: OutputType::String,
        }
    }
}

/// Options after the forced overrides have been applied. Every pipeline
/// stage reads these, never the raw [`Options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedOptions {
    pub tone_type: ToneType,
    pub pattern: Pattern,
    pub multiple: bool,
    pub mode: Mode,
    pub non_zh: NonZh,
    pub v: bool,
    pub output: OutputType,
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    pub fn from_json(s: &str) -> Result<Self, PinyinError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Resolves option coupling in one place:
    /// `type=all` forces `pattern=pinyin`, `pattern=num` forces
    /// `toneType=none` and `removeNonZh` forces `nonZh=removed`.
    pub fn normalize(&self) -> NormalizedOptions {
        let pattern = match self.output {
            OutputType::All => Pattern::Pinyin,
            _ => self.pattern,
        };
        let tone_type = match pattern {
            Pattern::Num => ToneType::None,
            _ => self.tone_type,
        };
        let non_zh = if self.remove_non_zh {
            NonZh::Removed
        } else {
            self.non_zh
        };
        NormalizedOptions {
            tone_type,
            pattern,
            multiple: self.multiple,
            mode: self.mode,
            non_zh,
            v: self.v,
            output: self.output,
        }
    }
}

#[derive(Debug, Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tone_type(mut self, tone_type: ToneType) -> Self {
        self.options.tone_type = tone_type;
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.options.pattern = pattern;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.options.multiple = multiple;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.options.mode = mode;
        self
    }

    pub fn remove_non_zh(mut self, remove_non_zh: bool) -> Self {
        self.options.remove_non_zh = remove_non_zh;
        self
    }

    pub fn non_zh(mut self, non_zh: NonZh) -> Self {
        self.options.non_zh = non_zh;
        self
    }

    pub fn v(mut self, v: bool) -> Self {
        self.options.v = v;
        self
    }

    pub fn output(mut self, output: OutputType) -> Self {
        self.options.output = output;
        self
    }

    pub fn build(self) -> Options {
        self.options
    }
}
