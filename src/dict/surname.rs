use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use log::{debug, error, warn};
use serde::Deserialize;

use crate::error::PinyinError;

pub static SURNAME_DICT_STR: &str = include_str!("../../resource/surname.json");

/// Env var naming a directory whose `surname.json` replaces the embedded
/// table.
pub const DICT_DIR_ENV: &str = "ZH_PINYIN_DICT_DIR";

/// Surname readings in tone-number notation (`shan4`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurnameTable {
    #[serde(default)]
    pub single: HashMap<char, String>,
    #[serde(default)]
    pub compound: HashMap<String, Vec<String>>,
}

impl SurnameTable {
    pub fn from_json(s: &str) -> Result<Self, PinyinError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_dir<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let path = dir.as_ref().join("surname.json");
        let s = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&s).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Surname reading per char of `chars`; `None` where no surname applies.
    /// Compound surnames are matched before single ones.
    pub fn readings_for(&self, chars: &[char]) -> Vec<Option<&str>> {
        let mut out = vec![None; chars.len()];
        let mut i = 0;
        while i < chars.len() {
            if i + 1 < chars.len() {
                let pair: String = chars[i..i + 2].iter().collect();
                if let Some(readings) = self.compound.get(&pair) {
                    if readings.len() == 2 {
                        out[i] = Some(readings[0].as_str());
                        out[i + 1] = Some(readings[1].as_str());
                        i += 2;
                        continue;
                    }
                    warn!("compound surname {} has {} readings", pair, readings.len());
                }
            }
            out[i] = self.single.get(&chars[i]).map(String::as_str);
            i += 1;
        }
        out
    }
}

fn embedded() -> SurnameTable {
    SurnameTable::from_json(SURNAME_DICT_STR).unwrap_or_else(|e| {
        error!("embedded surname table is malformed: {}", e);
        SurnameTable::default()
    })
}

/// Table from `dir/surname.json`, or the embedded one when `dir` is unset
/// or unusable.
fn load_surnames_from(dir: Option<&str>) -> SurnameTable {
    let Some(dir) = dir else {
        return embedded();
    };
    match SurnameTable::from_dir(dir) {
        Ok(table) => {
            debug!("loaded surname table from {}", dir);
            table
        }
        Err(e) => {
            warn!("{:#}, using the embedded surname table", e);
            embedded()
        }
    }
}

pub fn load_surnames() -> SurnameTable {
    load_surnames_from(std::env::var(DICT_DIR_ENV).ok().as_deref())
}

lazy_static::lazy_static! {
    pub static ref SURNAMES: SurnameTable = load_surnames();
}
