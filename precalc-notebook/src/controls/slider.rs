use precalc_compute::primitive::{is_integer, rational, rational_from_decimal};
use precalc_error::ErrorKind;
use rug::Rational;
use super::{error::InvalidValue, Control, ControlKind};

/// Parses a decimal number such as `3`, `-0.5`, or `+.25` exactly.
fn parse_decimal(input: &str) -> Option<Rational> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let valid = digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !valid {
        return None;
    }

    let value = rational_from_decimal(digits);
    Some(if negative { -value } else { value })
}

/// A slider over the multiples of `step` in `[min, max]`, offset from `min`.
///
/// Values are exact: a slider with a step of `0.1` holds `3/10`, not the nearest float. Values
/// set from outside the range are clamped to it, and values between steps snap to the nearest
/// step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    name: &'static str,
    description: &'static str,
    min: Rational,
    max: Rational,
    step: Rational,
    value: Rational,
}

impl Slider {
    /// Creates a slider over the integers in `[min, max]`.
    pub fn int(name: &'static str, min: i32, max: i32, default: i32) -> Self {
        Self::new(name, rational(min), rational(max), rational(1), rational(default))
    }

    /// Creates a slider over the multiples of `step` in `[min, max]`. The bounds, step, and
    /// default are written as decimals, such as `"0.1"`.
    ///
    /// Malformed decimals are read as zero, and a zero step as `1`.
    pub fn float(
        name: &'static str,
        min: &str,
        max: &str,
        step: &str,
        default: &str,
    ) -> Self {
        let parse = |s: &str| parse_decimal(s).unwrap_or_default();
        Self::new(name, parse(min), parse(max), parse(step), parse(default))
    }

    fn new(
        name: &'static str,
        min: Rational,
        max: Rational,
        step: Rational,
        default: Rational,
    ) -> Self {
        let step = if step.cmp0().is_gt() { step } else { rational(1) };
        let mut slider = Self {
            name,
            description: name,
            value: min.clone(),
            min,
            max,
            step,
        };
        slider.value = slider.snap(default);
        slider
    }

    /// Returns the exact value of the slider.
    pub fn value(&self) -> &Rational {
        &self.value
    }

    /// Returns the value of the slider as a float.
    pub fn value_f64(&self) -> f64 {
        self.value.to_f64()
    }

    /// Clamps the value to the range, then rounds it to the nearest step.
    fn snap(&self, value: Rational) -> Rational {
        let clamped = if value < self.min {
            self.min.clone()
        } else if value > self.max {
            self.max.clone()
        } else {
            value
        };

        let steps = (Rational::from(&clamped - &self.min) / &self.step).round();
        let snapped = steps * &self.step + &self.min;
        if snapped > self.max {
            snapped - &self.step
        } else {
            snapped
        }
    }
}

impl Control for Slider {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn kind(&self) -> ControlKind {
        if is_integer(&self.step) && is_integer(&self.min) {
            ControlKind::IntSlider
        } else {
            ControlKind::FloatSlider
        }
    }

    fn display_value(&self) -> String {
        match self.kind() {
            ControlKind::IntSlider => self.value.to_string(),
            _ => format!("{:?}", self.value_f64()),
        }
    }

    fn set(&mut self, input: &str) -> Result<bool, Box<dyn ErrorKind>> {
        let Some(value) = parse_decimal(input) else {
            return Err(Box::new(InvalidValue {
                control: self.name.to_string(),
                expected: format!(
                    "a number from {} to {} in steps of {}",
                    self.min.to_f64(),
                    self.max.to_f64(),
                    self.step.to_f64(),
                ),
            }));
        };

        let snapped = self.snap(value);
        let changed = snapped != self.value;
        self.value = snapped;
        Ok(changed)
    }
}
