//! FormattingPort trait for abstracting display formatting.
//!
//! The engine resolves header dates, state lines and the amount-in-words
//! footer through this trait without owning any locale or styling policy.
//! Presentation layers supply their own implementation; tests may stub it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt::Debug;

/// Display formatting consumed by the assembly stage.
///
/// All methods are pure and infallible: a formatter renders whatever it is
/// given, and `state_code` returns `None` for names it cannot map rather
/// than failing the document.
///
/// # Implementations
///
/// - [`PlainFormatter`]: deterministic plain-text output, always available
///   (used by default and in tests).
pub trait FormattingPort: Send + Sync + Debug {
    /// Render a monetary amount for display, e.g. `₹1,234.50`.
    ///
    /// Assembly keeps item and totals amounts numeric; this is for
    /// renderers turning those sections into display text.
    fn currency(&self, amount: Decimal) -> String;

    /// Render a quantity with its unit, e.g. `3 pcs`. Renderer-facing,
    /// like [`FormattingPort::currency`].
    fn quantity(&self, quantity: Decimal, unit: &str) -> String;

    /// Render a monetary amount in words, e.g. for the "Rupees ... Only"
    /// footer line.
    fn number_to_words(&self, amount: Decimal) -> String;

    /// Render a raw phone number for display.
    fn phone(&self, raw: &str) -> String;

    /// Map a state name to its two-digit GST state code, if known.
    fn state_code(&self, state_name: &str) -> Option<String>;

    /// Render a date for the document header.
    fn date(&self, date: NaiveDate) -> String;
}

/// GST state codes as notified for GSTIN prefixes, keyed by conventional
/// state name. Lookup is trimmed and case-insensitive.
const STATE_CODES: &[(&str, &str)] = &[
    ("jammu and kashmir", "01"),
    ("himachal pradesh", "02"),
    ("punjab", "03"),
    ("chandigarh", "04"),
    ("uttarakhand", "05"),
    ("haryana", "06"),
    ("delhi", "07"),
    ("rajasthan", "08"),
    ("uttar pradesh", "09"),
    ("bihar", "10"),
    ("sikkim", "11"),
    ("arunachal pradesh", "12"),
    ("nagaland", "13"),
    ("manipur", "14"),
    ("mizoram", "15"),
    ("tripura", "16"),
    ("meghalaya", "17"),
    ("assam", "18"),
    ("west bengal", "19"),
    ("jharkhand", "20"),
    ("odisha", "21"),
    ("chhattisgarh", "22"),
    ("madhya pradesh", "23"),
    ("gujarat", "24"),
    ("maharashtra", "27"),
    ("andhra pradesh", "28"),
    ("karnataka", "29"),
    ("goa", "30"),
    ("lakshadweep", "31"),
    ("kerala", "32"),
    ("tamil nadu", "33"),
    ("puducherry", "34"),
    ("andaman and nicobar islands", "35"),
    ("telangana", "36"),
    ("ladakh", "38"),
];

/// A plain-text formatter with no locale dependencies.
///
/// Currency renders with two decimals and a rupee sign, dates as
/// `dd-mm-yyyy`, and amounts in words follow Indian numbering
/// (thousand, lakh, crore).
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl FormattingPort for PlainFormatter {
    fn currency(&self, amount: Decimal) -> String {
        format!("₹{:.2}", amount)
    }

    fn quantity(&self, quantity: Decimal, unit: &str) -> String {
        format!("{} {}", quantity.normalize(), unit)
    }

    fn number_to_words(&self, amount: Decimal) -> String {
        amount_in_words(amount)
    }

    fn phone(&self, raw: &str) -> String {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() == 10 {
            format!("{} {}", &digits[..5], &digits[5..])
        } else {
            raw.to_string()
        }
    }

    fn state_code(&self, state_name: &str) -> Option<String> {
        let needle = state_name.trim().to_lowercase();
        STATE_CODES
            .iter()
            .find(|(name, _)| *name == needle)
            .map(|(_, code)| (*code).to_string())
    }

    fn date(&self, date: NaiveDate) -> String {
        date.format("%d-%m-%Y").to_string()
    }
}

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn two_digit_words(n: u64, out: &mut Vec<String>) {
    debug_assert!(n < 100);
    if n == 0 {
        return;
    }
    if n < 20 {
        out.push(ONES[n as usize].to_string());
    } else {
        out.push(TENS[(n / 10) as usize].to_string());
        if n % 10 != 0 {
            out.push(ONES[(n % 10) as usize].to_string());
        }
    }
}

/// Words for a non-negative integer in Indian numbering: groups of two
/// digits (crore, lakh, thousand) over a trailing group of three.
fn integer_words(mut n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }
    let mut out = Vec::new();
    if n >= 10_000_000 {
        out.push(integer_words(n / 10_000_000));
        out.push("Crore".to_string());
        n %= 10_000_000;
    }
    if n >= 100_000 {
        two_digit_words(n / 100_000, &mut out);
        out.push("Lakh".to_string());
        n %= 100_000;
    }
    if n >= 1_000 {
        two_digit_words(n / 1_000, &mut out);
        out.push("Thousand".to_string());
        n %= 1_000;
    }
    if n >= 100 {
        out.push(ONES[(n / 100) as usize].to_string());
        out.push("Hundred".to_string());
        n %= 100;
    }
    two_digit_words(n, &mut out);
    out.join(" ")
}

/// Renders e.g. `1234567.89` as
/// "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees and
/// Eighty Nine Paise Only".
fn amount_in_words(amount: Decimal) -> String {
    let amount = amount.abs().round_dp(2);
    let rupees = amount.trunc().to_u64().unwrap_or(u64::MAX);
    let paise = ((amount - amount.trunc()) * Decimal::from(100))
        .to_u64()
        .unwrap_or(0);

    let mut words = format!("{} Rupees", integer_words(rupees));
    if paise > 0 {
        words.push_str(&format!(" and {} Paise", integer_words(paise)));
    }
    words.push_str(" Only");
    words
}
