//! Ordinal suffixes for integers

/// Append the English ordinal suffix: `1st`, `2nd`, `3rd`, `11th`, `21st`.
///
/// The remainders use floored modulus, so negative numbers follow the same
/// residues as their positive counterparts modulo 100.
pub fn ordinal(num: i64) -> String {
    let suffix = if (10..=20).contains(&num.rem_euclid(100)) {
        "th"
    } else {
        match num.rem_euclid(10) {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{num}{suffix}")
}
