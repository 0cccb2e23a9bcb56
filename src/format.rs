use crate::types::StockSummary;

const NOT_AVAILABLE: &str = "N/A";
// Enough fractional digits to print any f64 exactly.
const EXACT_DIGITS: usize = 1100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTone {
    Positive,
    Negative,
}

impl ChangeTone {
    // zero counts as positive
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            ChangeTone::Positive
        } else {
            ChangeTone::Negative
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeDisplay {
    pub text: String,
    pub tone: ChangeTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

pub fn format_price(price: f64) -> String {
    format!("${}", fixed(price, 2))
}

pub fn format_change(change: f64, change_percent: f64) -> ChangeDisplay {
    let tone = ChangeTone::of(change);
    let sign = match tone {
        ChangeTone::Positive => "+",
        ChangeTone::Negative => "",
    };
    ChangeDisplay {
        text: format!(
            "{sign}{} ({}%)",
            fixed(change, 2),
            fixed(change_percent, 2)
        ),
        tone,
    }
}

pub fn format_market_cap(market_cap: f64) -> String {
    format!("${}B", fixed(market_cap / 1e9, 1))
}

pub fn format_pe(pe: Option<f64>) -> String {
    match pe {
        Some(value) if value.is_finite() => fixed(value, 1),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_dividend_yield(dividend_yield: Option<f64>) -> String {
    match dividend_yield {
        Some(value) if value != 0.0 && value.is_finite() => format!("{}%", fixed(value, 2)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_volume(volume: f64) -> String {
    format!("{}M", fixed(volume / 1e6, 1))
}

pub fn metrics(summary: &StockSummary) -> [Metric; 4] {
    [
        Metric {
            label: "Market Cap",
            value: format_market_cap(summary.market_cap),
        },
        Metric {
            label: "P/E Ratio",
            value: format_pe(summary.pe),
        },
        Metric {
            label: "Dividend Yield",
            value: format_dividend_yield(summary.dividend_yield),
        },
        Metric {
            label: "Volume",
            value: format_volume(summary.volume),
        },
    ]
}

/// Rounds like JavaScript's `toFixed`: the exact binary value, ties away from zero.
/// `{:.N}` alone would round ties to even.
fn fixed(value: f64, decimals: usize) -> String {
    // -0.0 prints as "-0.00" otherwise
    let value = if value == 0.0 { 0.0 } else { value };
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}
