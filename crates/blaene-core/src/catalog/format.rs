use super::entry::parse_leading_integer;

/// Currency presentation for price labels. Defaults to Turkish lira
/// conventions: `₺` prefix, `.` thousands grouping, `,` decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub symbol: String,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            symbol: "₺".to_string(),
            group_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl PriceFormat {
    pub fn new(symbol: impl Into<String>, group_separator: char, decimal_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            group_separator,
            decimal_separator,
        }
    }

    /// Whole-unit label shown next to the price slider, e.g. `₺15.000`.
    pub fn label(&self, amount: i64) -> String {
        let sign = if amount < 0 { "-" } else { "" };
        format!(
            "{}{}{}",
            self.symbol,
            sign,
            group_digits(amount.unsigned_abs(), self.group_separator)
        )
    }

    /// Label for a raw slider value. A value with no leading integer reads
    /// `₺NaN`, the same as an unparseable amount in [`PriceFormat::currency`].
    pub fn slider_label(&self, raw: &str) -> String {
        match parse_leading_integer(raw) {
            Some(amount) => self.label(amount),
            None => format!("{}NaN", self.symbol),
        }
    }

    /// Full currency rendering with two decimals, e.g. `₺1.500,00`.
    pub fn currency(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.symbol);
        }

        let sign = if amount.is_sign_negative() && amount != 0.0 { "-" } else { "" };
        if amount.is_infinite() {
            return format!("{}{}∞", sign, self.symbol);
        }

        let cents = (amount.abs() * 100.0).round() as u64;
        format!(
            "{}{}{}{}{:02}",
            sign,
            self.symbol,
            group_digits(cents / 100, self.group_separator),
            self.decimal_separator,
            cents % 100
        )
    }
}

/// Insert `separator` between every group of three digits.
pub fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, '.'), "0");
        assert_eq!(group_digits(999, '.'), "999");
        assert_eq!(group_digits(1000, '.'), "1.000");
        assert_eq!(group_digits(1234567, '.'), "1.234.567");
        assert_eq!(group_digits(100000, ','), "100,000");
    }

    #[test]
    fn test_slider_label() {
        let format = PriceFormat::default();
        assert_eq!(format.label(15000), "₺15.000");
        assert_eq!(format.label(500), "₺500");
        assert_eq!(format.label(-2500), "₺-2.500");
    }

    #[test]
    fn test_label_from_raw_slider_value() {
        let format = PriceFormat::default();
        assert_eq!(format.slider_label("15000"), "₺15.000");
        assert_eq!(format.slider_label(" 2500.75"), "₺2.500");
        assert_eq!(format.slider_label("abc"), "₺NaN");
        assert_eq!(format.slider_label(""), "₺NaN");
    }

    #[test]
    fn test_currency_rendering() {
        let format = PriceFormat::default();
        assert_eq!(format.currency(1500.0), "₺1.500,00");
        assert_eq!(format.currency(1234.5), "₺1.234,50");
        assert_eq!(format.currency(0.0), "₺0,00");
        assert_eq!(format.currency(-99.999), "-₺100,00");
        assert_eq!(format.currency(f64::NAN), "₺NaN");
    }

    #[test]
    fn test_custom_format() {
        let format = PriceFormat::new("$", ',', '.');
        assert_eq!(format.label(2500), "$2,500");
        assert_eq!(format.currency(2500.25), "$2,500.25");
    }
}
