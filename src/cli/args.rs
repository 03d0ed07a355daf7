//! Command line argument parsing for corsa CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::inference::{DEFAULT_MODEL_DIR, MODEL_DIR_ENV};

/// Corsa - course recommendation from free-text interests
#[derive(Parser, Debug, Clone)]
#[command(name = "corsa")]
#[command(about = "Recommend courses from comma-separated interest keywords")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CorsaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CorsaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recommend a course for an interest list
    Predict(PredictArgs),

    /// Show what the stored artifacts look like
    Inspect(InspectArgs),

    /// Write the bundled demo artifacts to disk
    #[command(name = "init-demo")]
    InitDemo(InitDemoArgs),

    /// Serve the HTTP prediction API
    Serve(ServeArgs),
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Comma-separated interests, e.g. "nlp, transformers, deep learning"
    #[arg(value_name = "INTERESTS")]
    pub interests: String,

    /// Directory holding the model artifacts
    #[arg(short, long, value_name = "DIR", env = MODEL_DIR_ENV, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: PathBuf,
}

/// Arguments for artifact inspection
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Directory holding the model artifacts
    #[arg(short, long, value_name = "DIR", env = MODEL_DIR_ENV, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: PathBuf,
}

/// Arguments for writing the demo artifacts
#[derive(Parser, Debug, Clone)]
pub struct InitDemoArgs {
    /// Directory to write the artifacts into
    #[arg(short, long, value_name = "DIR", env = MODEL_DIR_ENV, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: PathBuf,

    /// Overwrite existing artifact files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the HTTP server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Directory holding the model artifacts
    #[arg(short, long, value_name = "DIR", env = MODEL_DIR_ENV, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_predict_command() {
        let args = CorsaArgs::try_parse_from([
            "corsa",
            "predict",
            "nlp, transformers",
            "--model-dir",
            "/srv/corsa/models",
        ])
        .unwrap();

        if let Command::Predict(predict_args) = args.command {
            assert_eq!(predict_args.interests, "nlp, transformers");
            assert_eq!(
                predict_args.model_dir,
                PathBuf::from("/srv/corsa/models")
            );
        } else {
            panic!("Expected Predict command");
        }
    }

    #[test]
    fn test_init_demo_command() {
        let args = CorsaArgs::try_parse_from([
            "corsa",
            "init-demo",
            "--model-dir",
            "/tmp/demo-models",
            "--force",
        ])
        .unwrap();

        if let Command::InitDemo(init_args) = args.command {
            assert_eq!(init_args.model_dir, PathBuf::from("/tmp/demo-models"));
            assert!(init_args.force);
        } else {
            panic!("Expected InitDemo command");
        }
    }

    #[test]
    fn test_serve_command() {
        let args = CorsaArgs::try_parse_from([
            "corsa",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ])
        .unwrap();

        if let Command::Serve(serve_args) = args.command {
            assert_eq!(serve_args.host, "127.0.0.1");
            assert_eq!(serve_args.port, 9000);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = CorsaArgs::try_parse_from(["corsa", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = CorsaArgs::try_parse_from(["corsa", "-v", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = CorsaArgs::try_parse_from(["corsa", "-vv", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = CorsaArgs::try_parse_from(["corsa", "--quiet", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = CorsaArgs::try_parse_from(["corsa", "--format", "json", "inspect"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
