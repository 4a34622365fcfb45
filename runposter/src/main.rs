use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use runposter::{DrawerKind, Poster, PosterConfig, YearRange, filter_tracks, load_tracks, render_track_posters};
use runposter_core::Units;
use std::path::PathBuf;

/// Draws GPS tracks onto an SVG poster
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	arg_required_else_help = true,
)]
struct Cli {
	/// JSON file with the tracks to draw
	#[arg(long, value_name = "FILE")]
	tracks: PathBuf,

	/// YAML file with the poster configuration
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Name of the SVG file to write
	#[arg(long, short, value_name = "FILE", default_value = "poster.svg")]
	output: PathBuf,

	/// Draw every track on its own small poster into DIR/run_<year>/ instead,
	/// skipping tracks whose poster already exists
	#[arg(long, value_name = "DIR", conflicts_with = "output", verbatim_doc_comment)]
	per_track: Option<PathBuf>,

	/// Type of poster to draw
	#[arg(long = "type", value_enum, default_value_t = DrawerKind::Grid)]
	kind: DrawerKind,

	/// Years to draw: "all", a single year, or a range like 2020-2023
	#[arg(long, default_value = "all")]
	year: YearRange,

	/// Title of the poster, overrides the configuration
	#[arg(long)]
	title: Option<String>,

	/// Name of the athlete, overrides the configuration
	#[arg(long)]
	athlete: Option<String>,

	/// Units of the statistics, overrides the configuration
	#[arg(long, value_enum)]
	units: Option<Units>,

	/// Let the tracks appear year by year
	#[arg(long)]
	animate: bool,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn load_config(cli: &Cli) -> Result<PosterConfig> {
	let mut config = match &cli.config {
		Some(path) => PosterConfig::from_path(path)?,
		None => PosterConfig::default(),
	};
	if let Some(title) = &cli.title {
		config.title.clone_from(title);
	}
	if let Some(athlete) = &cli.athlete {
		config.athlete.clone_from(athlete);
	}
	if let Some(units) = cli.units {
		config.units = units;
	}
	config.animate |= cli.animate;
	Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
	let config = load_config(cli)?;
	let tracks = load_tracks(&cli.tracks)?;
	let tracks = filter_tracks(tracks, &cli.year, config.min_distance_meters());
	if let Some(dir) = &cli.per_track {
		let written = render_track_posters(&config, &tracks, cli.kind.drawer().as_ref(), dir)?;
		log::info!("{} track posters written to {dir:?}", written.len());
		return Ok(());
	}

	log::info!("drawing {} tracks as {} poster", tracks.len(), cli.kind);
	let poster = Poster::new(config, tracks)?;
	let svg = poster.render(cli.kind.drawer().as_ref())?;
	std::fs::write(&cli.output, svg).with_context(|| format!("failed to write poster to {:?}", cli.output))?;
	log::info!("poster written to {:?}", cli.output);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
		Cli::try_parse_from(std::iter::once("runposter").chain(args.iter().copied()))
	}

	#[test]
	fn defaults() {
		let cli = parse(&["--tracks", "tracks.json"]).unwrap();
		assert_eq!(cli.output, PathBuf::from("poster.svg"));
		assert_eq!(cli.kind, DrawerKind::Grid);
		assert_eq!(cli.year, YearRange::all());
		assert_eq!(cli.per_track, None);
		assert!(!cli.animate);
	}

	#[test]
	fn overrides() {
		let cli = parse(&[
			"--tracks",
			"tracks.json",
			"--type",
			"laps",
			"--year",
			"2021-2022",
			"--title",
			"Laps",
			"--units",
			"imperial",
			"--animate",
		])
		.unwrap();
		assert_eq!(cli.kind, DrawerKind::Laps);
		assert_eq!(cli.year.to_string(), "2021-2022");

		let config = load_config(&cli).unwrap();
		assert_eq!(config.title, "Laps");
		assert_eq!(config.athlete, "John Doe");
		assert_eq!(config.units, Units::Imperial);
		assert!(config.animate);
	}

	#[test]
	fn invalid_arguments() {
		assert!(parse(&[]).is_err());
		assert!(parse(&["--tracks", "t.json", "--type", "circular"]).is_err());
		assert!(parse(&["--tracks", "t.json", "--year", "20"]).is_err());
		assert!(parse(&["--tracks", "t.json", "--per-track", "out", "--output", "x.svg"]).is_err());
	}
}
