//! The fixed pattern data shipped with the puzzle.
//!
//! - [`standard_pool`]: the twelve patterns playable wheels are drawn from.
//! - [`bonus_pattern`]: the 4x3 table the bonus wheel is selected from. Rows are
//!   keyed by the battery surplus, columns by the serial number's odd/vowel score.

use std::sync::{Arc, LazyLock};

use crate::Pattern;

/// Number of rows in the bonus table.
pub const BONUS_ROWS: usize = 4;

/// Number of columns in the bonus table.
pub const BONUS_COLUMNS: usize = 3;

const STANDARD: [(&str, &str); 12] = [
    ("+-]!<0#<", "O.^^^.OO"),
    ("$)2=*/>!", "^.^.O^O."),
    ("78/?(-7~", "O.O..^.^"),
    ("96394?#!", "O^..^^OO"),
    ("+!2#!@*@", "^^O..OO."),
    ("%*&50$52", "^..O^O.."),
    ("%*!%~*+$", "O^.^O.^^"),
    ("[%?/1{]}", "^.^..O^^"),
    ("1@3!2312", "O^..^^.O"),
    ("%^O<#>^(", ".^.^OOO."),
    ("->-~>@<%", ".O...^.^"),
    ("{]}[%?/$", ".^..OOO."),
];

const BONUS_SYMBOLS: &str = "12345678";

const BONUS: [[&str; BONUS_COLUMNS]; BONUS_ROWS] = [
    ["..O..^^O", "..^O..^^", "..^^.^.O"],
    ["^^.O.^^^", "....OOOO", "..^OO..."],
    ["^...OOOO", ".^^O..^^", "...^O^^."],
    [".^O^O^.O", ".O^.^.O^", "..^^.OOO"],
];

fn parse(symbols: &str, holes: &str) -> Arc<Pattern> {
    Arc::new(Pattern::from_strs(symbols, holes).expect("catalog patterns are valid"))
}

static STANDARD_POOL: LazyLock<Vec<Arc<Pattern>>> = LazyLock::new(|| {
    STANDARD
        .iter()
        .map(|(symbols, holes)| parse(symbols, holes))
        .collect()
});

static BONUS_TABLE: LazyLock<[[Arc<Pattern>; BONUS_COLUMNS]; BONUS_ROWS]> =
    LazyLock::new(|| BONUS.map(|row| row.map(|holes| parse(BONUS_SYMBOLS, holes))));

/// Returns the patterns playable wheels are drawn from.
#[must_use]
pub fn standard_pool() -> &'static [Arc<Pattern>] {
    &STANDARD_POOL
}

/// Returns the bonus pattern at `(row, column)` of the bonus table.
///
/// # Panics
///
/// Panics if `row >= BONUS_ROWS` or `column >= BONUS_COLUMNS`.
#[must_use]
pub fn bonus_pattern(row: usize, column: usize) -> &'static Arc<Pattern> {
    &BONUS_TABLE[row][column]
}
