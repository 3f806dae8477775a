//! Russian phone number mask, `+7 (XXX) XXX-XX-XX`.

const MAX_DIGITS: usize = 11;

fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

pub fn digit_count(input: &str) -> usize {
    input.chars().filter(char::is_ascii_digit).count()
}

/// Reformats whatever the user typed. A leading `8` becomes `7`, any other
/// leading digit gets a `7` in front, and input past eleven digits is cut.
pub fn mask(input: &str) -> String {
    let mut digits = digits(input);
    if !digits.starts_with('7') {
        if digits.starts_with('8') {
            digits.replace_range(..1, "7");
        } else if !digits.is_empty() {
            digits.insert(0, '7');
        }
    }
    digits.truncate(MAX_DIGITS);

    let len = digits.len();

    let mut out = String::from("+7");
    if len > 1 {
        out.push_str(" (");
        out.push_str(slice(&digits, 1, 4));
    }
    if len >= 4 {
        out.push(')');
    }
    if len > 4 {
        out.push(' ');
        out.push_str(slice(&digits, 4, 7));
    }
    if len > 7 {
        out.push('-');
        out.push_str(slice(&digits, 7, 9));
    }
    if len > 9 {
        out.push('-');
        out.push_str(slice(&digits, 9, 11));
    }
    out
}

fn slice(digits: &str, from: usize, to: usize) -> &str {
    let len = digits.len();
    &digits[from.min(len)..to.min(len)]
}

/// A field left at the bare prefix is cleared when it loses focus.
pub fn on_blur(value: &str) -> String {
    if value == "+7" {
        String::new()
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_number() {
        assert_eq!(mask("79991234567"), "+7 (999) 123-45-67");
    }

    #[test]
    fn leading_eight_is_normalized() {
        assert_eq!(mask("89991234567"), mask("79991234567"));
    }

    #[test]
    fn other_leading_digit_gets_country_code() {
        assert_eq!(mask("9991234567"), "+7 (999) 123-45-67");
    }

    #[test]
    fn formats_progressively() {
        assert_eq!(mask(""), "+7");
        assert_eq!(mask("7"), "+7");
        assert_eq!(mask("79"), "+7 (9");
        assert_eq!(mask("7999"), "+7 (999)");
        assert_eq!(mask("79991"), "+7 (999) 1");
        assert_eq!(mask("79991234"), "+7 (999) 123-4");
        assert_eq!(mask("7999123456"), "+7 (999) 123-45-6");
    }

    #[test]
    fn remasking_is_stable_and_extra_digits_are_cut() {
        let masked = mask("+7 (999) 123-45-67");
        assert_eq!(masked, "+7 (999) 123-45-67");
        assert_eq!(mask("7999123456789"), masked);
        assert_eq!(digit_count(&masked), 11);
    }

    #[test]
    fn blur_clears_bare_prefix() {
        assert_eq!(on_blur("+7"), "");
        assert_eq!(on_blur("+7 (9"), "+7 (9");
    }
}
