use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The two classes a dataset may carry.
///
/// The textual form is the vocabulary of the input files (`yes` / `no`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
pub enum Label {
    #[strum(serialize = "yes")]
    #[serde(rename = "yes")]
    Positive,
    #[strum(serialize = "no")]
    #[serde(rename = "no")]
    Negative,
}

impl Label {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Label::Positive => 0,
            Label::Negative => 1,
        }
    }
}
