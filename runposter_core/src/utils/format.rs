/// Formats a statistic with one decimal, e.g. a distance on the poster footer.
#[must_use]
pub fn format_float(value: f64) -> String {
	format!("{value:.1}")
}

/// Rounds `value` to `decimals` places, ties to even.
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
	let factor = 10f64.powi(i32::from(decimals));
	(value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, "0.0")]
	#[case(12.345, "12.3")]
	#[case(1999.96, "2000.0")]
	#[case(-3.04, "-3.0")]
	fn format(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(format_float(value), expected);
	}

	#[rstest]
	#[case(0.333_333, 2, 0.33)]
	#[case(0.666_666, 2, 0.67)]
	#[case(1.0, 2, 1.0)]
	#[case(2.5, 0, 2.0)]
	#[case(0.125, 2, 0.12)]
	#[case(0.375, 2, 0.38)]
	fn rounding(#[case] value: f64, #[case] decimals: u8, #[case] expected: f64) {
		assert_eq!(round_to(value, decimals), expected);
	}
}
