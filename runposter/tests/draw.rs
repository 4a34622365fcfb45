use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn grid_poster_with_defaults() {
	let svg = draw_poster(&[]);
	assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n<svg "));
	assert!(svg.contains("viewBox=\"0 0 200 300\""));
	assert!(svg.contains(">My Tracks</text>"));
	// the 650 m track is shorter than the minimum distance
	assert!(svg.contains(">Runs: 5  Distance: 50.0 km</text>"));
	assert_eq!(svg.matches("<g ").count(), 5);
	assert!(!svg.contains("<animate "));
}

#[test]
fn grid_poster_with_config() {
	let config = get_testdata("poster.yml");
	let svg = draw_poster(&["--config", &path_to_string(&config), "--animate"]);
	assert!(svg.contains(">Berlin Runs</text>"));
	assert!(svg.contains(">Jane Doe</text>"));
	// 21.4 km reaches the second special distance
	assert!(svg.contains("stroke=\"#ff5500\""));
	assert_eq!(svg.matches("<animate ").count(), 5);
	assert!(svg.contains("keyTimes=\"0.0;0.33;0.67;1\""));
	assert!(svg.contains("dur=\"20s\""));
}

#[test]
fn laps_poster() {
	let svg = draw_poster(&["--type", "laps", "--title", "Laps", "--units", "imperial"]);
	assert!(svg.contains(">Laps</text>"));
	assert!(svg.contains(">Runs: 5  Distance: 31.0 mi</text>"));
	assert_eq!(svg.matches("<polygon ").count(), 5);
	assert_eq!(svg.matches("<animateMotion ").count(), 5);
}

#[rstest]
#[case("2022", "Runs: 1  Distance: 8.1 km")]
#[case("2021-2022", "Runs: 3  Distance: 34.8 km")]
#[case("2023", "Runs: 2  Distance: 15.2 km")]
fn year_selection(#[case] year: &str, #[case] statistics: &str) {
	let svg = draw_poster(&["--year", year]);
	assert!(svg.contains(statistics), "missing '{statistics}'");
}

#[test]
fn no_tracks_in_selected_years() {
	let (_dir, output) = get_temp_output("poster.svg");
	runposter_cmd()
		.arg("--tracks")
		.arg(get_testdata("tracks.json"))
		.arg("--output")
		.arg(&output)
		.args(["--year", "2019"])
		.assert()
		.failure()
		.stderr(str::contains("no tracks to draw"));
	assert!(!output.exists());
}

#[test]
fn missing_tracks_file() {
	runposter_cmd()
		.args(["--tracks", "does-not-exist.json"])
		.assert()
		.failure()
		.stderr(str::contains("failed to open tracks file"));
}

#[test]
fn per_track_posters() {
	let dir = tempfile::tempdir().unwrap();
	let run = || {
		runposter_cmd()
			.arg("--tracks")
			.arg(get_testdata("tracks.json"))
			.arg("--per-track")
			.arg(dir.path())
			.args(["--type", "laps"])
			.assert()
			.success();
	};
	run();

	let poster = dir.path().join("run_2021").join("20210926_2.svg");
	let svg = std::fs::read_to_string(&poster).unwrap();
	assert!(svg.contains("viewBox=\"0 0 120 190\""));
	assert!(!svg.contains("<text"));
	// the 650 m track of 2022 is below the minimum distance
	assert!(!dir.path().join("run_2022").join("20220719_4.svg").exists());
	let count = ["run_2021", "run_2022", "run_2023"]
		.iter()
		.map(|year| std::fs::read_dir(dir.path().join(year)).unwrap().count())
		.sum::<usize>();
	assert_eq!(count, 5);

	std::fs::write(&poster, "kept").unwrap();
	run();
	assert_eq!(std::fs::read_to_string(&poster).unwrap(), "kept");
}
