/// Returns a spacing of about `span / target` that is 1, 2, or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }

    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Returns the multiples of `step` in the closed interval `[min, max]`.
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Formats a tick value with at most three decimal places and no trailing zeros.
pub fn format_tick(n: f64) -> String {
    let raw = format!("{:.3}", n);
    let trimmed = raw.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(20.0, 10), 2.0);
        assert_eq!(nice_step(60.0, 10), 5.0);
        assert_eq!(nice_step(100.0, 10), 10.0);
        assert_eq!(nice_step(0.0, 10), 1.0);
    }

    #[test]
    fn ticks_in_range() {
        assert_eq!(ticks(-5.5, 5.5, 2.0), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
        assert_eq!(ticks(0.0, 10.0, 5.0), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(-12.25), "-12.25");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(1.0 / 3.0), "0.333");
    }
}
