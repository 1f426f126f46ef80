//! Digit-string helpers shared by the identifier modules.
//!
//! Only ASCII `0-9` count as digits. Other Unicode decimal digits are
//! treated like any other non-digit character.

/// Keep the ASCII digits of `input` in order, stopping after `max` of them.
pub fn digits_only(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Numeric values of every ASCII digit in `input`, separators skipped.
pub fn digit_values(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

/// `Σ digit[i] * weight[i] mod 11`, pairing digits and weights by position.
pub fn weighted_mod11(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum::<u32>()
        % 11
}

/// Insert `sep` between consecutive groups of the given sizes.
///
/// A separator is only written when another character follows it, so a
/// partially typed value gets partial grouping (`"1234"` with `[3, 3]`
/// becomes `"123-4"`).
pub fn group(digits: &str, sizes: &[usize], sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + sizes.len());
    let mut boundaries = sizes.iter().scan(0, |end, &size| {
        *end += size;
        Some(*end)
    });
    let mut next = boundaries.next();
    for (i, c) in digits.chars().enumerate() {
        if next == Some(i) {
            out.push(sep);
            next = boundaries.next();
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_caps() {
        assert_eq!(digits_only("a1b2c3", 2), "12");
        assert_eq!(digits_only("", 10), "");
    }

    #[test]
    fn non_ascii_digits_ignored() {
        // Arabic-Indic digits and fullwidth digits
        assert_eq!(digits_only("١٢٣１２３7", 10), "7");
        assert_eq!(digit_values("٣4"), vec![4]);
    }

    #[test]
    fn weighted_sum() {
        assert_eq!(weighted_mod11(&[1, 2, 3], &[1, 1, 1]), 6);
        assert_eq!(weighted_mod11(&[9, 9], &[6, 5]), 99 % 11);
    }

    #[test]
    fn group_partial() {
        assert_eq!(group("", &[3, 3], '-'), "");
        assert_eq!(group("123", &[3, 3], '-'), "123");
        assert_eq!(group("1234", &[3, 3], '-'), "123-4");
        assert_eq!(group("123456", &[3, 3], '-'), "123-456");
    }
}
