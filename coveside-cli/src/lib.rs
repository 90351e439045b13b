//! Command-line interface for Coveside's offline ranking tools.
//!
//! Three subcommands operate on a catalogue directory: `related` ranks the
//! posts most relevant to a reference post, `match` ranks the property
//! portfolio for a topic's matching profile, and `distance` reports the
//! travel estimate between a property and a reference point.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use coveside_core::{RankOptions, Score, TravelEstimate};
use coveside_data::{Catalogue, CatalogueError};
use coveside_ranker::{
    PropertyMatchScorer, RelatedContentScorer, rank_properties_for_profile, rank_related,
};
use geo::Coord;
use thiserror::Error;

mod output;

use output::{PropertyRow, RelatedRow};

/// Run the Coveside CLI with the current process arguments.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, catalogue loading, or
/// rendering fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let rendered = cli.execute()?;
    println!("{rendered}");
    Ok(())
}

/// Errors emitted by the Coveside CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The catalogue directory could not be loaded.
    #[error("failed to load catalogue: {0}")]
    Catalogue(#[from] CatalogueError),
    /// The reference post does not exist in the catalogue.
    #[error("no published post matches {key:?} in the catalogue")]
    UnknownPost {
        /// The id or slug the user asked for.
        key: String,
    },
    /// The property does not exist in the catalogue.
    #[error("no property matches {key:?} in the catalogue")]
    UnknownProperty {
        /// The id or slug the user asked for.
        key: String,
    },
    /// The property has no coordinates to measure from.
    #[error("property {slug:?} has no surveyed coordinates")]
    MissingCoordinates {
        /// Slug of the property without coordinates.
        slug: String,
    },
    /// Serialising results to JSON failed.
    #[error("failed to serialise results: {0}")]
    Serialise(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "coveside",
    about = "Offline ranking utilities for the Coveside content engine",
    version
)]
struct Cli {
    /// Directory holding posts.json, properties.json, and profiles.json.
    #[arg(
        long,
        value_name = "dir",
        default_value = "catalogue",
        global = true
    )]
    catalogue: Utf8PathBuf,
    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank blog posts related to a reference post.
    Related(RelatedArgs),
    /// Rank properties for a topic's matching profile.
    Match(MatchArgs),
    /// Report the travel estimate between a property and a reference point.
    Distance(DistanceArgs),
}

#[derive(Debug, Args)]
struct RelatedArgs {
    /// Id or slug of the reference post.
    #[arg(value_name = "post")]
    post: String,
    /// Maximum number of results.
    #[arg(long, default_value_t = RankOptions::DEFAULT_LIMIT)]
    limit: usize,
    /// Minimum score a candidate must reach.
    #[arg(long, default_value_t = RankOptions::DEFAULT_MIN_SCORE)]
    min_score: Score,
    /// Include a per-result match breakdown.
    #[arg(long)]
    explain: bool,
}

#[derive(Debug, Args)]
struct MatchArgs {
    /// Topic slug, resolved through the profile registry.
    #[arg(value_name = "topic")]
    topic: String,
    /// Maximum number of results.
    #[arg(long, default_value_t = 3)]
    limit: usize,
    /// Include a per-result match breakdown.
    #[arg(long)]
    explain: bool,
}

#[derive(Debug, Args)]
struct DistanceArgs {
    /// Id or slug of the property to measure from.
    #[arg(value_name = "property")]
    property: String,
    /// Reference point as decimal degrees, e.g. "-37.5578,149.7587".
    #[arg(long, value_name = "lat,lng", value_parser = parse_point)]
    from: Coord<f64>,
}

impl Cli {
    fn execute(&self) -> Result<String, CliError> {
        let catalogue = Catalogue::load(&self.catalogue)?;
        match &self.command {
            Command::Related(args) => self.run_related(&catalogue, args),
            Command::Match(args) => self.run_match(&catalogue, args),
            Command::Distance(args) => self.run_distance(&catalogue, args),
        }
    }

    fn run_related(&self, catalogue: &Catalogue, args: &RelatedArgs) -> Result<String, CliError> {
        let reference = catalogue
            .find_post(&args.post)
            .ok_or_else(|| CliError::UnknownPost {
                key: args.post.clone(),
            })?;
        let options = RankOptions::new()
            .with_min_score(args.min_score)
            .with_limit(args.limit);
        let scorer = RelatedContentScorer::default();
        let rows: Vec<RelatedRow> = rank_related(reference, catalogue.posts(), &options)
            .into_iter()
            .map(|entry| {
                let breakdown = args
                    .explain
                    .then(|| scorer.breakdown(reference, entry.item));
                RelatedRow::new(entry.item, entry.score, breakdown)
            })
            .collect();
        output::render_related(&reference.title, &rows, self.json)
    }

    fn run_match(&self, catalogue: &Catalogue, args: &MatchArgs) -> Result<String, CliError> {
        let profile = catalogue.profiles().for_slug(&args.topic);
        let scorer = PropertyMatchScorer::default();
        let rows: Vec<PropertyRow> =
            rank_properties_for_profile(profile, catalogue.properties(), args.limit)
                .into_iter()
                .map(|entry| {
                    let breakdown = args.explain.then(|| scorer.breakdown(profile, entry.item));
                    PropertyRow::new(entry.item, entry.score, breakdown)
                })
                .collect();
        output::render_properties(&args.topic, &rows, self.json)
    }

    fn run_distance(&self, catalogue: &Catalogue, args: &DistanceArgs) -> Result<String, CliError> {
        let property =
            catalogue
                .find_property(&args.property)
                .ok_or_else(|| CliError::UnknownProperty {
                    key: args.property.clone(),
                })?;
        let coordinates = property
            .coordinates
            .ok_or_else(|| CliError::MissingCoordinates {
                slug: property.slug.clone(),
            })?;
        let estimate = TravelEstimate::between(args.from, coordinates);
        output::render_distance(&property.title, &estimate, self.json)
    }
}

/// Parse a "lat,lng" pair into a coordinate.
fn parse_point(raw: &str) -> Result<Coord<f64>, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got {raw:?}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude {lat:?}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude {lng:?}"))?;
    Ok(Coord { x: lng, y: lat })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coveside_data::{POSTS_FILE, PROFILES_FILE, PROPERTIES_FILE};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn catalogue_dir() -> TempDir {
        let dir = TempDir::new().expect("create tempdir");
        let write = |name: &str, contents: &str| {
            std::fs::write(dir.path().join(name), contents).expect("write catalogue file");
        };
        write(
            POSTS_FILE,
            r#"[
                {"id": "nature-guide", "title": "A Nature Guide", "slug": "nature-guide",
                 "published_date": "2024-01-05", "category_id": "nature",
                 "audience_ids": ["families"], "season_ids": ["summer", "winter"]},
                {"id": "walking-guide", "title": "The Walking Guide", "slug": "walking-guide",
                 "published_date": "2024-02-01", "category_id": "nature",
                 "audience_ids": ["families", "couples"], "season_ids": ["summer"]}
            ]"#,
        );
        write(
            PROPERTIES_FILE,
            r#"[
                {"id": "house", "title": "Waterfront House", "slug": "waterfront-house",
                 "location_tags": ["waterfront"], "distance_from_town": 3,
                 "coordinates": {"lat": -37.5578, "lng": 149.7587},
                 "nearby_activities": ["fishing"], "feature_tags": ["luxury"]}
            ]"#,
        );
        write(
            PROFILES_FILE,
            r#"{"topics": {"luxury-waterfront": {
                "location_focus": ["waterfront"],
                "activity_tags": ["fishing"],
                "ideal_features": ["luxury"],
                "max_distance_from_focus": 5
            }}}"#,
        );
        dir
    }

    fn cli_for(dir: &TempDir, command: Command) -> Cli {
        Cli {
            catalogue: Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 path"),
            json: false,
            command,
        }
    }

    #[rstest]
    fn related_command_ranks_the_pool(catalogue_dir: TempDir) {
        let cli = cli_for(
            &catalogue_dir,
            Command::Related(RelatedArgs {
                post: "nature-guide".to_owned(),
                limit: 5,
                min_score: 1,
                explain: false,
            }),
        );
        let rendered = cli.execute().expect("related should succeed");
        assert!(rendered.contains("The Walking Guide"));
        assert!(rendered.contains("score 6"));
    }

    #[rstest]
    fn match_command_scores_the_portfolio(catalogue_dir: TempDir) {
        let cli = cli_for(
            &catalogue_dir,
            Command::Match(MatchArgs {
                topic: "luxury-waterfront".to_owned(),
                limit: 3,
                explain: false,
            }),
        );
        let rendered = cli.execute().expect("match should succeed");
        assert!(rendered.contains("Waterfront House"));
        assert!(rendered.contains("score 65"));
    }

    #[rstest]
    fn distance_command_reports_an_estimate(catalogue_dir: TempDir) {
        let cli = cli_for(
            &catalogue_dir,
            Command::Distance(DistanceArgs {
                property: "waterfront-house".to_owned(),
                from: Coord {
                    x: 149.7587,
                    y: -37.5578,
                },
            }),
        );
        let rendered = cli.execute().expect("distance should succeed");
        assert!(rendered.contains("0m"));
    }

    #[rstest]
    fn unknown_post_is_reported(catalogue_dir: TempDir) {
        let cli = cli_for(
            &catalogue_dir,
            Command::Related(RelatedArgs {
                post: "missing".to_owned(),
                limit: 5,
                min_score: 1,
                explain: false,
            }),
        );
        let err = cli.execute().expect_err("missing post should fail");
        assert!(matches!(err, CliError::UnknownPost { .. }));
    }

    #[rstest]
    #[case("-37.5578,149.7587", 149.7587, -37.5578)]
    #[case(" -37.5 , 149.7 ", 149.7, -37.5)]
    fn parses_coordinate_pairs(#[case] raw: &str, #[case] x: f64, #[case] y: f64) {
        let coord = parse_point(raw).expect("valid pair");
        assert_eq!(coord.x, x);
        assert_eq!(coord.y, y);
    }

    #[rstest]
    #[case("not-a-pair")]
    #[case("north,east")]
    fn rejects_malformed_coordinates(#[case] raw: &str) {
        assert!(parse_point(raw).is_err());
    }

    #[rstest]
    fn arguments_parse_into_subcommands() {
        let cli = Cli::try_parse_from(["coveside", "related", "my-post", "--limit", "3"])
            .expect("arguments should parse");
        match cli.command {
            Command::Related(args) => {
                assert_eq!(args.post, "my-post");
                assert_eq!(args.limit, 3);
                assert_eq!(args.min_score, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
