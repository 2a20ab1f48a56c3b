//! Canonical axis labels: columns `1`..`10` and rows `A`..`J`.
//!
//! Labels are plain `Copy` enums, so every label value is canonical and
//! comparisons are always by value. Each label knows its zero-based ordinal,
//! a word name (`"three"`, `"c"`) and a short display label (`"3"`, `"C"`).

use core::fmt;
use core::str::FromStr;

use crate::common::LookupError;

macro_rules! axis_labels {
    (
        $(#[$meta:meta])*
        $name:ident, index_error = $index_err:path, name_error = $name_err:path;
        $($variant:ident = $index:literal, $word:literal, $label:literal;)+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every label of this axis in ordinal order.
            pub const ALL: [$name; $crate::config::GRID_SIZE] = [$($name::$variant,)+];

            /// Zero-based ordinal of the label.
            pub const fn index(self) -> usize {
                match self {
                    $($name::$variant => $index,)+
                }
            }

            /// Lower-case word name.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $word,)+
                }
            }

            /// Short label used when printing cells.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Label whose ordinal equals `index`.
            pub fn from_index(index: usize) -> Result<Self, LookupError> {
                Self::ALL
                    .get(index)
                    .copied()
                    .ok_or($index_err(index))
            }

            /// Label matching `name` by word name or short label, ignoring ASCII case.
            pub fn from_name(name: &str) -> Result<Self, LookupError> {
                let name = name.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|l| {
                        l.name().eq_ignore_ascii_case(name) || l.label().eq_ignore_ascii_case(name)
                    })
                    .ok_or($name_err)
            }
        }

        impl FromStr for $name {
            type Err = LookupError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl TryFrom<usize> for $name {
            type Error = LookupError;

            fn try_from(index: usize) -> Result<Self, Self::Error> {
                Self::from_index(index)
            }
        }
    };
}

axis_labels! {
    /// Horizontal position of a cell, numbered from the left.
    Column, index_error = LookupError::ColumnIndex, name_error = LookupError::ColumnName;
    One = 0, "one", "1";
    Two = 1, "two", "2";
    Three = 2, "three", "3";
    Four = 3, "four", "4";
    Five = 4, "five", "5";
    Six = 5, "six", "6";
    Seven = 6, "seven", "7";
    Eight = 7, "eight", "8";
    Nine = 8, "nine", "9";
    Ten = 9, "ten", "10";
}

axis_labels! {
    /// Vertical position of a cell, lettered from the top.
    Row, index_error = LookupError::RowIndex, name_error = LookupError::RowName;
    A = 0, "a", "A";
    B = 1, "b", "B";
    C = 2, "c", "C";
    D = 3, "d", "D";
    E = 4, "e", "E";
    F = 5, "f", "F";
    G = 6, "g", "G";
    H = 7, "h", "H";
    I = 8, "i", "I";
    J = 9, "j", "J";
}

/// All columns, left to right.
pub fn all_columns() -> &'static [Column; crate::config::GRID_SIZE] {
    &Column::ALL
}

/// All rows, top to bottom.
pub fn all_rows() -> &'static [Row; crate::config::GRID_SIZE] {
    &Row::ALL
}
