//! Fortune result types
//!
//! [`FortuneText`] is the model-generated part; [`Fortune`] is the complete
//! daily result handed to the consumer. Serialized field names match the
//! JSON the original web endpoint exposed (camelCase).

use serde::{Deserialize, Serialize};

/// The generated flavor text: a fortune line and a play tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneText {
    /// The fortune line for the day
    pub fortune: String,
    /// A practical play tip
    pub tip: String,
}

/// A complete daily fortune
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fortune {
    /// Unpadded date string, e.g. `2026-8-6`
    pub date: String,
    /// The fortune line
    pub fortune: String,
    /// The play tip
    pub tip: String,
    /// Lucky tile picked from the fixed table
    pub lucky_tile: String,
    /// Lucky yaku picked from the fixed table
    pub lucky_yaku: String,
    /// Which model produced the text
    pub model: String,
}

impl Fortune {
    pub fn new(
        date: impl Into<String>,
        text: FortuneText,
        lucky_tile: impl Into<String>,
        lucky_yaku: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            fortune: text.fortune,
            tip: text.tip,
            lucky_tile: lucky_tile.into(),
            lucky_yaku: lucky_yaku.into(),
            model: model.into(),
        }
    }
}
