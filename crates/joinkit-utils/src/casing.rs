//! String case conversion and digit grouping.

use convert_case::{Case, Casing};

/// `some_identifier`
#[must_use]
pub fn to_snake(text: &str) -> String {
    text.to_case(Case::Snake)
}

/// `SomeIdentifier`
#[must_use]
pub fn to_pascal(text: &str) -> String {
    text.to_case(Case::Pascal)
}

/// `someIdentifier`
#[must_use]
pub fn to_camel(text: &str) -> String {
    text.to_case(Case::Camel)
}

/// `some-identifier`
#[must_use]
pub fn to_kebab(text: &str) -> String {
    text.to_case(Case::Kebab)
}

/// `Some Identifier`
#[must_use]
pub fn to_title(text: &str) -> String {
    text.to_case(Case::Title)
}

/// Render an integer with `,` thousands separators.
#[must_use]
pub fn group_digits(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }

    let lead = digits.len() % 3;
    for (n, ch) in digits.chars().enumerate() {
        if n > 0 && n % 3 == lead % 3 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversions() {
        assert_eq!(to_snake("LeftJoin"), "left_join");
        assert_eq!(to_pascal("left_join"), "LeftJoin");
        assert_eq!(to_camel("left_join"), "leftJoin");
        assert_eq!(to_kebab("LeftJoin"), "left-join");
        assert_eq!(to_title("left_join"), "Left Join");
    }

    #[test]
    fn digit_grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(group_digits(-12_345), "-12,345");
    }
}
