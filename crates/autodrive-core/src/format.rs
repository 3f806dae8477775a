//! ru-RU number formatting for prices, mileage and power.

/// Group separator used by the ru-RU locale (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

pub fn price(value: u64) -> String {
    format!("{} ₽", group_thousands(value))
}

pub fn mileage(km: u32) -> String {
    format!("{} км", group_thousands(u64::from(km)))
}

pub fn power(hp: u16) -> String {
    format!("{hp} л.с.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_three_with_no_break_space() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1\u{a0}000");
        assert_eq!(group_thousands(1_250_000), "1\u{a0}250\u{a0}000");
    }

    #[test]
    fn price_and_mileage_have_units() {
        assert_eq!(price(3500), "3\u{a0}500 ₽");
        assert_eq!(mileage(38_000), "38\u{a0}000 км");
        assert_eq!(power(249), "249 л.с.");
    }
}
