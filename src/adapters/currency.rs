use crate::domain::ports::CurrencyFormatter;

/// Whole-unit currency renderer configured with a locale and currency code.
/// The shipped configuration is Saudi riyal, Arabic locale.
#[derive(Debug, Clone)]
pub struct SarFormatter {
    locale: String,
    currency: String,
}

impl SarFormatter {
    pub fn new(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency: currency.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn symbol(&self) -> &str {
        match self.currency.as_str() {
            "SAR" => "ر.س.",
            other => other,
        }
    }
}

impl Default for SarFormatter {
    fn default() -> Self {
        Self::new("ar-SA", "SAR")
    }
}

impl CurrencyFormatter for SarFormatter {
    fn format(&self, amount: u64) -> String {
        format!("{} {}", group_thousands(amount), self.symbol())
    }
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
