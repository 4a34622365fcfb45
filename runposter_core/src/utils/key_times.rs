use crate::round_to;
use anyhow::{Result, ensure};

/// Builds the `keyTimes` list for an animation that advances one step per year.
///
/// The result holds `0, 1/n, 2/n, ...` for every fraction below `1`, each
/// rounded to two decimals, followed by a final `"1"` because SVG requires the
/// last key time to be exactly one.
///
/// # Examples
/// ```
/// use runposter_core::make_key_times;
///
/// assert_eq!(make_key_times(4).unwrap(), ["0.0", "0.25", "0.5", "0.75", "1"]);
/// ```
pub fn make_key_times(year_count: usize) -> Result<Vec<String>> {
	ensure!(year_count > 0, "key times need at least one year");

	let mut key_times: Vec<String> = (0u32..)
		.map(|i| f64::from(i) / year_count as f64)
		.take_while(|fraction| *fraction < 1.0)
		.map(|fraction| format!("{:?}", round_to(fraction, 2)))
		.collect();
	key_times.push(String::from("1"));

	log::trace!("key times for {year_count} years: {key_times:?}");
	Ok(key_times)
}
