use crate::error::{ChartError, ChartResult};

pub const VALUE_AXIS_TARGET_SPACING_PX: f64 = 40.0;
pub const VALUE_AXIS_MIN_TICKS: usize = 2;
pub const VALUE_AXIS_MAX_TICKS: usize = 11;

/// Resolved value-axis range and its evenly spaced tick positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTicks {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub values: Vec<f64>,
}

impl ValueTicks {
    /// Formats one tick value with just enough decimals for `step`.
    #[must_use]
    pub fn label(&self, value: f64) -> String {
        let decimals = step_decimals(self.step);
        format!("{value:.decimals$}")
    }
}

/// How many ticks fit along an axis of `axis_span_px` pixels.
#[must_use]
pub fn value_tick_target_count(axis_span_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return VALUE_AXIS_MIN_TICKS;
    }

    let raw = (axis_span_px / VALUE_AXIS_TARGET_SPACING_PX).floor() as usize + 1;
    raw.clamp(VALUE_AXIS_MIN_TICKS, VALUE_AXIS_MAX_TICKS)
}

/// Data extent of a value axis before tick rounding.
///
/// Empty data maps to `[0, 1]`. A degenerate extent is widened by one unit.
pub fn value_extent(values: &[f64], begin_at_zero: bool) -> ChartResult<(f64, f64)> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(
            "axis values must be finite".to_owned(),
        ));
    }

    let (mut min, mut max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(*value), hi.max(*value))
        });
    if values.is_empty() {
        (min, max) = (0.0, 1.0);
    }
    if begin_at_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }
    if (max - min).abs() <= f64::EPSILON {
        if begin_at_zero && min == 0.0 {
            max = 1.0;
        } else {
            min -= 1.0;
            max += 1.0;
        }
    }
    Ok((min, max))
}

/// Builds 1/2/5-stepped ticks covering `[min, max]` with at most `max_ticks` entries.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> ChartResult<ValueTicks> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(ChartError::InvalidData(
            "tick range must be finite and ascending".to_owned(),
        ));
    }
    let max_ticks = max_ticks.max(VALUE_AXIS_MIN_TICKS);
    let spaces = (max_ticks - 1) as f64;

    let nice_range = nice_number(max - min, false);
    let mut step = nice_number(nice_range / spaces, true);
    let mut nice_min = (min / step).floor() * step;
    let mut nice_max = (max / step).ceil() * step;
    while ((nice_max - nice_min) / step).round() > spaces {
        step = next_nice_step(step);
        nice_min = (min / step).floor() * step;
        nice_max = (max / step).ceil() * step;
    }

    let decimals = step_decimals(step);
    let count = ((nice_max - nice_min) / step).round() as usize;
    let values = (0..=count)
        .map(|index| round_to(nice_min + index as f64 * step, decimals))
        .collect::<Vec<_>>();

    Ok(ValueTicks {
        min: round_to(nice_min, decimals),
        max: round_to(nice_max, decimals),
        step,
        values,
    })
}

fn nice_number(value: f64, round: bool) -> f64 {
    let magnitude = 10_f64.powf(decade(value));
    let fraction = value / magnitude;
    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice_fraction * magnitude
}

/// Next coarser step in the 1, 2, 5, 10 ladder.
fn next_nice_step(step: f64) -> f64 {
    let magnitude = 10_f64.powf(decade(step));
    let fraction = (step / magnitude).round();
    let next = if fraction < 2.0 {
        2.0
    } else if fraction < 5.0 {
        5.0
    } else {
        10.0
    };
    next * magnitude
}

fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    (-decade(step)).max(0.0) as usize
}

// log10 of exact powers of ten can land a hair below the integer.
fn decade(value: f64) -> f64 {
    (value.log10() + 1e-9).floor()
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid `-0.0` tick labels.
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::{nice_ticks, value_extent, value_tick_target_count};

    #[test]
    fn placeholder_accuracies_get_tenth_steps_from_zero_to_one() {
        let (min, max) = value_extent(&[0.85, 0.88, 0.92, 0.91, 0.94], true).expect("extent");
        assert_eq!((min, max), (0.0, 0.94));

        let ticks = nice_ticks(min, max, 11).expect("ticks");
        assert_eq!(ticks.min, 0.0);
        assert_eq!(ticks.max, 1.0);
        assert_eq!(ticks.values.len(), 11);
        assert_eq!(ticks.values[3], 0.3);
        assert_eq!(ticks.label(0.3), "0.3");
    }

    #[test]
    fn symmetric_range_escalates_to_coarser_step() {
        let ticks = nice_ticks(-0.5, 0.5, 6).expect("ticks");
        assert_eq!(ticks.values, vec![-0.5, 0.0, 0.5]);
        assert_eq!(ticks.label(-0.5), "-0.5");
    }

    #[test]
    fn tick_count_respects_limit_when_axis_is_short() {
        let ticks = nice_ticks(0.0, 0.94, 4).expect("ticks");
        assert!(ticks.values.len() <= 4);
        assert!(ticks.max >= 0.94);
    }

    #[test]
    fn extent_without_zero_anchor_follows_data() {
        let (min, max) = value_extent(&[0.85, 0.94], false).expect("extent");
        assert_eq!((min, max), (0.85, 0.94));
    }

    #[test]
    fn degenerate_extent_is_widened() {
        assert_eq!(value_extent(&[], true).expect("extent"), (0.0, 1.0));
        assert_eq!(value_extent(&[0.0, 0.0], true).expect("extent"), (0.0, 1.0));
        assert_eq!(value_extent(&[2.0], false).expect("extent"), (1.0, 3.0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(value_extent(&[0.5, f64::NAN], true).is_err());
    }

    #[test]
    fn target_count_is_clamped() {
        assert_eq!(value_tick_target_count(10.0), 2);
        assert_eq!(value_tick_target_count(2_000.0), 11);
        assert_eq!(value_tick_target_count(f64::NAN), 2);
    }
}
