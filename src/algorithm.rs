use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The closed set of sorting algorithms the engine can dispatch to.
///
/// There is deliberately no `Default`, callers always pick one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Stable, O(n log n). Use when the order of equal keys matters.
    MergeSort,
    /// Unstable, O(n * distinct keys). Use for inputs with few distinct keys.
    BingoSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::MergeSort, Algorithm::BingoSort];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MergeSort => "merge_sort",
            Algorithm::BingoSort => "bingo_sort",
        }
    }

    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::MergeSort => true,
            Algorithm::BingoSort => false,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAlgorithmError {
    #[error("unknown sorting algorithm '{0}', expected one of: merge_sort, bingo_sort")]
    UnknownName(String),
    #[error("unknown sorting algorithm tag {0}, expected 1 (merge_sort) or 2 (bingo_sort)")]
    UnknownTag(u8),
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "merge_sort" | "merge" => Ok(Algorithm::MergeSort),
            "bingo_sort" | "bingo" => Ok(Algorithm::BingoSort),
            _ => Err(ParseAlgorithmError::UnknownName(s.to_owned())),
        }
    }
}

/// The numeric tags used by the rental tool's menus and saved settings.
impl TryFrom<u8> for Algorithm {
    type Error = ParseAlgorithmError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Algorithm::MergeSort),
            2 => Ok(Algorithm::BingoSort),
            _ => Err(ParseAlgorithmError::UnknownTag(tag)),
        }
    }
}
