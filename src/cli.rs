use clap::{Args, Parser, Subcommand};
use rusty_recommender_common::{Recommendation, RecommenderError};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rusty-recommender")]
#[command(about = "Rank labelled feature vectors against a query by cosine similarity")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the top-K entries for a query vector (default)
    Recommend(RecommendArgs),

    /// Serve the store over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub struct RecommendArgs {
    /// Comma-separated query vector, e.g. "27,60,180,1,0,1"
    #[arg(short, long, allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Number of results; zero or negative prints none
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub top_k: Option<i64>,

    /// JSON dataset file replacing the built-in travel destinations
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// JSON dataset file to preload
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,
}

/// Parses a comma-separated list of finite numbers.
pub fn parse_vector(raw: &str) -> Result<Vec<f64>, RecommenderError> {
    let values = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(RecommenderError::InvalidArgument(format!(
                "'{}' is not a finite number",
                part
            ))),
            Err(_) => Err(RecommenderError::InvalidArgument(format!(
                "'{}' is not a number",
                part
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(RecommenderError::InvalidArgument(
            "query vector must not be empty".to_string(),
        ));
    }

    Ok(values)
}

pub fn clamp_top_k(top_k: i64) -> usize {
    usize::try_from(top_k).unwrap_or(0)
}

pub fn print_recommendations<W: Write>(out: &mut W, results: &[Recommendation]) -> std::io::Result<()> {
    writeln!(out, "Top {} Recommended Destinations:", results.len())?;
    for result in results {
        writeln!(
            out,
            "Destination: {}, Similarity: {:.4}",
            result.label, result.similarity
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("27, 60,180,1,0,1").unwrap(), vec![27.0, 60.0, 180.0, 1.0, 0.0, 1.0]);
        assert_eq!(parse_vector("-1.5,2e2").unwrap(), vec![-1.5, 200.0]);
    }

    #[test]
    fn test_parse_vector_rejects_malformed_input() {
        assert!(matches!(parse_vector("1,two,3"), Err(RecommenderError::InvalidArgument(_))));
        assert!(matches!(parse_vector("1,NaN"), Err(RecommenderError::InvalidArgument(_))));
        assert!(matches!(parse_vector("inf"), Err(RecommenderError::InvalidArgument(_))));
        assert!(matches!(parse_vector(" , "), Err(RecommenderError::InvalidArgument(_))));
    }

    #[test]
    fn test_clamp_top_k() {
        assert_eq!(clamp_top_k(3), 3);
        assert_eq!(clamp_top_k(0), 0);
        assert_eq!(clamp_top_k(-4), 0);
    }

    #[test]
    fn test_print_recommendations_format() {
        let results = vec![
            Recommendation { label: "Beach and Adventure in Brazil".into(), similarity: 0.999291402848206 },
            Recommendation { label: "Mountain Hiking in Switzerland".into(), similarity: 0.996062479760946 },
        ];
        let mut out = Vec::new();
        print_recommendations(&mut out, &results).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Top 2 Recommended Destinations:\n\
             Destination: Beach and Adventure in Brazil, Similarity: 0.9993\n\
             Destination: Mountain Hiking in Switzerland, Similarity: 0.9961\n"
        );
    }

    #[test]
    fn test_cli_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["rusty-recommender"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_recommend_accepts_negative_top_k() {
        let cli = Cli::try_parse_from([
            "rusty-recommender",
            "recommend",
            "--query",
            "-1,2,3",
            "--top-k",
            "-2",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Recommend(args)) => {
                assert_eq!(args.query.as_deref(), Some("-1,2,3"));
                assert_eq!(args.top_k, Some(-2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_serve_options() {
        let cli = Cli::try_parse_from(["rusty-recommender", "--config", "rec.toml", "serve", "--port", "9000"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("rec.toml")));
        match cli.command {
            Some(Commands::Serve(args)) => assert_eq!(args.port, Some(9000)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
