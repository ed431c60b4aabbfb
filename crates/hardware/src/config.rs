//! Machine configuration.
//!
//! Deserialized from a JSON file or built with [`Config::default`]. Every
//! field has a standalone default so partial files work: a config naming only
//! `memory_words` inherits the rest.

use serde::{Deserialize, Serialize};

/// Tunable machine parameters.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Size of the flat word-addressed memory, in 32-bit words.
    pub memory_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_words: defaults::MEMORY_WORDS,
        }
    }
}

mod defaults {
    /// 65536 words (256 KiB), addressable by a 16-bit word address.
    pub const MEMORY_WORDS: usize = 0x1_0000;
}
