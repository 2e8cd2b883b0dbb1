//! Localized currency formatting for headline figures

use serde::{Deserialize, Serialize};

/// Most fraction digits rendered; an f64 carries no meaningful digits past this
pub const MAX_FRACTION_DIGITS: u32 = 9;

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Currency display rules for one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub position: SymbolPosition,
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub fraction_digits: u32,
    /// Integer digits needed in the leading group before grouping kicks in
    /// (2 in Spanish: `5000` but `10.000`)
    pub min_grouping_digits: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::es_es_usd()
    }
}

impl CurrencyFormat {
    /// US dollars in Spanish (Spain) conventions, whole units: `125.000 US$`
    pub fn es_es_usd() -> Self {
        Self {
            symbol: "\u{a0}US$".to_string(),
            position: SymbolPosition::Suffix,
            grouping_separator: '.',
            decimal_separator: ',',
            fraction_digits: 0,
            min_grouping_digits: 2,
        }
    }

    /// US dollars in US English conventions, whole units: `$125,000`
    pub fn en_us_usd() -> Self {
        Self {
            symbol: "$".to_string(),
            position: SymbolPosition::Prefix,
            grouping_separator: ',',
            decimal_separator: '.',
            fraction_digits: 0,
            min_grouping_digits: 1,
        }
    }

    /// Set the number of fraction digits, capped at [`MAX_FRACTION_DIGITS`]
    pub fn with_fraction_digits(mut self, fraction_digits: u32) -> Self {
        self.fraction_digits = fraction_digits.min(MAX_FRACTION_DIGITS);
        self
    }

    /// Format a value, rounding halves away from zero
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.attach_symbol(&value.abs().to_string(), value.is_sign_negative() && !value.is_nan());
        }

        let fraction_digits = self.fraction_digits.min(MAX_FRACTION_DIGITS);
        let scale = 10u64.pow(fraction_digits) as f64;
        let scaled = (value.abs() * scale).round();
        let negative = value < 0.0 && scaled > 0.0;

        let digits = format!("{scaled:.0}");
        let split = digits.len().saturating_sub(fraction_digits as usize);
        let (int_part, frac_part) = if split == 0 {
            ("0".to_string(), format!("{digits:0>width$}", width = fraction_digits as usize))
        } else {
            (digits[..split].to_string(), digits[split..].to_string())
        };

        let mut number = self.group(&int_part);
        if fraction_digits > 0 {
            number.push(self.decimal_separator);
            number.push_str(&frac_part);
        }

        self.attach_symbol(&number, negative)
    }

    fn group(&self, int_part: &str) -> String {
        if int_part.len() < 3 + self.min_grouping_digits as usize {
            return int_part.to_string();
        }

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(ch);
        }
        grouped
    }

    fn attach_symbol(&self, number: &str, negative: bool) -> String {
        let sign = if negative { "-" } else { "" };
        match self.position {
            SymbolPosition::Prefix => format!("{sign}{}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{number}{}", self.symbol),
        }
    }
}

/// Format with the default display rules
pub fn format_currency(value: f64) -> String {
    CurrencyFormat::default().format(value)
}
