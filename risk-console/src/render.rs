//! Result Renderer
//!
//! Turns a scored result into the contents of the result panel. Pure: the
//! same result always yields the same panel, and no state is kept between
//! calls. Applying the panel is the surface's job.

use crate::models::ScoreResult;

/// Fractional digits needed to print any finite `f64` exactly
const EXACT_DIGITS: usize = 1100;

/// Visual theme of the panel, chosen by the decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Denied,
    Allowed,
}

impl Theme {
    /// Short mark shown in front of the decision
    pub fn icon(&self) -> char {
        match self {
            Theme::Denied => '!',
            Theme::Allowed => '+',
        }
    }

    /// Color used for the decision text and the confidence fill
    pub fn color(&self) -> &'static str {
        match self {
            Theme::Denied => "danger",
            Theme::Allowed => "success",
        }
    }

    pub fn decision_text(&self) -> &'static str {
        match self {
            Theme::Denied => "⛔ ACCESS DENIED",
            Theme::Allowed => "✅ ACCESS GRANTED",
        }
    }
}

/// One line of the breakdown list
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine {
    pub label: String,
    /// Value formatted with two decimals, e.g. `40.00%`
    pub percent: String,
}

impl BreakdownLine {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.percent)
    }
}

/// Everything the result panel shows
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub theme: Theme,
    pub decision_text: String,
    /// Confidence label, one decimal, e.g. `87.3%`
    pub confidence_label: String,
    /// Fill width in percent, clamped to 0..=100
    pub fill_percent: f64,
    pub reason_line: String,
    /// Explanation sent by the engine, if any
    pub service_reason: Option<String>,
    pub breakdown: Vec<BreakdownLine>,
}

/// Format a fraction as a percentage with `decimals` fractional digits
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(fraction * 100.0, decimals))
}

/// Fixed-point formatting that rounds exact halves away from zero
///
/// `{:.N}` rounds ties to even (`0.25` -> `0.2`); the engine's web front end
/// shows `0.3`, so the exact decimal expansion is rounded by hand.
fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Build the panel for a scored result
pub fn render(result: &ScoreResult) -> ResultPanel {
    let theme = if result.decision.is_denied() {
        Theme::Denied
    } else {
        Theme::Allowed
    };

    let breakdown = result
        .breakdown
        .iter()
        .map(|(label, value)| BreakdownLine {
            label: label.to_string(),
            percent: format_percent(value, 2),
        })
        .collect();

    let fill = result.confidence * 100.0;

    ResultPanel {
        theme,
        decision_text: theme.decision_text().to_string(),
        confidence_label: format_percent(result.confidence, 1),
        fill_percent: if fill.is_nan() { 0.0 } else { fill.clamp(0.0, 100.0) },
        reason_line: format!("Reason: Predicted as {}", result.predicted_grade),
        service_reason: result.reason.clone(),
        breakdown,
    }
}
