//! Roman numerals for specialization and elective slot numbers

use std::collections::BTreeSet;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Render `number` as an uppercase Roman numeral
///
/// # Returns
/// The numeral (e.g., "XL" for 40), or an empty string for 0
#[must_use]
pub fn to_roman_numeral(number: u32) -> String {
    let mut remaining = number;
    let mut numeral = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }
    numeral
}

/// Render a set of slot numbers as a compact label
///
/// A single number renders as its numeral, a consecutive run as
/// "first–last", anything else as a comma-separated list.
///
/// # Returns
/// The label (e.g., "II", "I–III", "I, III"), or an empty string for an empty set
#[must_use]
pub fn format_number_set(numbers: &BTreeSet<u32>) -> String {
    let (Some(&first), Some(&last)) = (numbers.first(), numbers.last()) else {
        return String::new();
    };
    if first == last {
        return to_roman_numeral(first);
    }

    let consecutive = numbers
        .iter()
        .zip(numbers.iter().skip(1))
        .all(|(a, b)| a + 1 == *b);
    if consecutive {
        return format!("{}–{}", to_roman_numeral(first), to_roman_numeral(last));
    }

    numbers
        .iter()
        .map(|n| to_roman_numeral(*n))
        .collect::<Vec<_>>()
        .join(", ")
}
