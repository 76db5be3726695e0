//! Synthetic dyno curve generation.
//!
//! There is no real dynamometer data anywhere in the system; charts are
//! drawn from a parametric curve seeded only by a stage's peak figure.
//! This is cosmetics, not simulation — the shape just has to look like
//! a plausible power or torque trace.

use serde::Serialize;

use crate::catalog::Fuel;

/// RPM axis step between sample points.
const RPM_STEP: u32 = 500;

/// Fraction of peak value at the lowest RPM point.
const LOW_END_FRACTION: f64 = 0.5;

/// Maximum falloff from peak toward the top of the RPM range.
const FALLOFF_FRACTION: f64 = 0.35;

/// Easing exponent on the rising segment.
const RISE_EXPONENT: f64 = 1.2;

/// One chart sample: RPM on the x axis, output on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub rpm: u32,
    pub value: f64,
}

/// The RPM sample axis for a fuel type. Diesel engines rev lower and
/// narrower than petrol engines.
pub fn rpm_axis(fuel: Fuel) -> Vec<u32> {
    let (start, end) = match fuel {
        Fuel::Diesel => (1500, 5000),
        _ => (2000, 7000),
    };
    (start..=end).step_by(RPM_STEP as usize).collect()
}

/// Index of the curve's peak on an axis of `len` points.
///
/// Horsepower peaks 60% of the way through the range, torque 40%.
fn peak_index(len: usize, is_horsepower: bool) -> usize {
    let fraction = if is_horsepower { 0.6 } else { 0.4 };
    (((len - 1) as f64) * fraction).round() as usize
}

/// Generate a curve that rises from 50% of `peak_value` to exactly
/// `peak_value` at the designated peak index, then falls off by up to
/// 35% toward the high end.
///
/// Deterministic, no failure modes; `peak_value` is assumed finite and
/// non-negative.
pub fn curve(peak_value: f64, is_horsepower: bool, fuel: Fuel) -> Vec<CurvePoint> {
    let axis = rpm_axis(fuel);
    let peak_idx = peak_index(axis.len(), is_horsepower);
    let last_idx = axis.len() - 1;

    axis.iter()
        .enumerate()
        .map(|(i, &rpm)| {
            let value = if i <= peak_idx {
                let t = i as f64 / peak_idx as f64;
                peak_value * (LOW_END_FRACTION + (1.0 - LOW_END_FRACTION) * t.powf(RISE_EXPONENT))
            } else {
                let t = (i - peak_idx) as f64 / (last_idx - peak_idx) as f64;
                peak_value * (1.0 - FALLOFF_FRACTION * t)
            };
            CurvePoint { rpm, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_axis_is_lower_and_narrower() {
        let axis = rpm_axis(Fuel::Diesel);
        assert_eq!(axis.first(), Some(&1500));
        assert_eq!(axis.last(), Some(&5000));
        assert_eq!(axis.len(), 8);
    }

    #[test]
    fn petrol_axis_spans_2000_to_7000() {
        let axis = rpm_axis(Fuel::Petrol);
        assert_eq!(axis.first(), Some(&2000));
        assert_eq!(axis.last(), Some(&7000));
        assert_eq!(axis.len(), 11);
    }

    #[test]
    fn curve_has_one_point_per_axis_sample() {
        assert_eq!(curve(310.0, true, Fuel::Petrol).len(), 11);
        assert_eq!(curve(480.0, false, Fuel::Diesel).len(), 8);
    }

    /// Strictly increasing up to the peak, strictly decreasing after
    /// it, with the peak value hit exactly.
    fn assert_monotonic_shape(peak_value: f64, is_horsepower: bool, fuel: Fuel) {
        let points = curve(peak_value, is_horsepower, fuel);
        let peak_idx = points
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
            .map(|(i, _)| i)
            .unwrap();

        assert_eq!(points[peak_idx].value, peak_value);
        for w in points[..=peak_idx].windows(2) {
            assert!(w[0].value < w[1].value, "rising segment must strictly increase");
        }
        for w in points[peak_idx..].windows(2) {
            assert!(w[0].value > w[1].value, "falling segment must strictly decrease");
        }
    }

    #[test]
    fn horsepower_curve_is_monotonic_around_peak() {
        assert_monotonic_shape(310.0, true, Fuel::Petrol);
        assert_monotonic_shape(240.0, true, Fuel::Diesel);
    }

    #[test]
    fn torque_curve_is_monotonic_around_peak() {
        assert_monotonic_shape(440.0, false, Fuel::Petrol);
        assert_monotonic_shape(480.0, false, Fuel::Diesel);
    }

    #[test]
    fn horsepower_peaks_later_than_torque() {
        let hp = curve(300.0, true, Fuel::Petrol);
        let nm = curve(400.0, false, Fuel::Petrol);
        let idx_of_peak = |points: &[CurvePoint]| {
            points
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
                .map(|(i, _)| i)
                .unwrap()
        };
        assert!(idx_of_peak(&hp) > idx_of_peak(&nm));
    }

    #[test]
    fn low_end_starts_at_half_of_peak() {
        let points = curve(200.0, true, Fuel::Petrol);
        assert_eq!(points[0].value, 100.0);
    }

    #[test]
    fn high_end_falls_off_by_35_percent() {
        let points = curve(200.0, false, Fuel::Diesel);
        let last = points.last().unwrap().value;
        assert!((last - 200.0 * 0.65).abs() < 1e-9);
    }

    #[test]
    fn curve_is_deterministic() {
        assert_eq!(
            curve(333.0, true, Fuel::Petrol),
            curve(333.0, true, Fuel::Petrol)
        );
    }
}
