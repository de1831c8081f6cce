//! Native-style constraint checks for the input layer.
//!
//! Mirrors what a number input enforces on its own: the value must parse, and
//! it must sit on the step grid counted from zero.

/// Relative to the magnitude of the value.
const STEP_EPSILON: f64 = 1e-12;

#[derive(Debug, PartialEq)]
pub enum Violation {
    Missing,
    NotANumber,
    OffStep { below: String, above: String },
}

impl Violation {
    pub fn message(&self) -> String {
        match self {
            Violation::Missing => "Please fill out this field.".to_string(),
            Violation::NotANumber => "Please enter a number.".to_string(),
            Violation::OffStep { below, above } => format!(
                "Please enter a valid value. The two nearest valid values are {below} and {above}."
            ),
        }
    }
}

pub fn check_required(value: &str) -> Result<(), Violation> {
    if value.is_empty() {
        return Err(Violation::Missing);
    }

    Ok(())
}

pub fn check_number(value: &str, step: f64) -> Result<(), Violation> {
    let number: f64 = value.trim().parse().map_err(|_| Violation::NotANumber)?;

    if !number.is_finite() {
        return Err(Violation::NotANumber);
    }

    let steps = number / step;
    let snapped = steps.round() * step;
    if (number - snapped).abs() <= STEP_EPSILON * number.abs().max(1.0) {
        return Ok(());
    }

    let below = steps.floor() * step;
    let above = below + step;
    let decimals = decimals_of(step);

    Err(Violation::OffStep {
        below: format!("{below:.decimals$}"),
        above: format!("{above:.decimals$}"),
    })
}

fn decimals_of(step: f64) -> usize {
    let text = step.to_string();

    text.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}
