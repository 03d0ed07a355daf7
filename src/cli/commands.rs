//! Command implementations for corsa CLI.

use std::sync::Arc;

use tracing::warn;

use crate::artifact::{ArtifactStore, FsArtifactStore, MODEL_FILE, demo_bundle};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{CorsaError, Result};
use crate::inference::{EngineConfig, InferenceEngine};
use crate::server;

/// Execute a CLI command.
pub fn execute_command(args: CorsaArgs) -> Result<()> {
    match &args.command {
        Command::Predict(predict_args) => predict(predict_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect(inspect_args.clone(), &args),
        Command::InitDemo(init_args) => init_demo(init_args.clone(), &args),
        Command::Serve(serve_args) => serve(serve_args.clone(), &args),
    }
}

/// Recommend a course for an interest list.
fn predict(args: PredictArgs, cli_args: &CorsaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading artifacts from: {}", args.model_dir.display());
    }

    let engine = InferenceEngine::new(&EngineConfig::new(args.model_dir));
    engine.load_artifacts()?;
    let result = engine.predict(&args.interests)?;

    output_result("Recommendation", &result, cli_args)?;

    Ok(())
}

/// Show what the stored artifacts look like.
fn inspect(args: InspectArgs, cli_args: &CorsaArgs) -> Result<()> {
    let store = FsArtifactStore::new(args.model_dir);
    let bundle = store.load()?.ok_or_else(|| {
        CorsaError::model_not_loaded(format!("no artifacts found at {}", store.location()))
    })?;

    output_result(
        "Artifact bundle",
        &BundleReport {
            location: store.location(),
            model_type: bundle.classifier.kind_name().to_string(),
            vectorizer_type: bundle.vectorizer.kind_name().to_string(),
            n_classes: bundle.n_classes(),
            classes: bundle.metadata.classes.clone(),
            vocabulary_size: bundle.vectorizer.n_features(),
            explanation_method: bundle.explainer().method().as_str().to_string(),
            note: bundle.metadata.note.clone(),
        },
        cli_args,
    )?;

    Ok(())
}

/// Write the bundled demo artifacts to disk.
fn init_demo(args: InitDemoArgs, cli_args: &CorsaArgs) -> Result<()> {
    let model_path = args.model_dir.join(MODEL_FILE);
    if model_path.exists() && !args.force {
        return Err(CorsaError::artifact(format!(
            "{} already exists. Use --force to overwrite.",
            model_path.display()
        )));
    }

    let bundle = demo_bundle()?;
    let store = FsArtifactStore::new(args.model_dir);
    store.save(&bundle)?;

    output_result(
        "Demo artifacts written",
        &DemoInitResult {
            directory: store.location(),
            classes: bundle.metadata.classes.clone(),
            vocabulary_size: bundle.vectorizer.n_features(),
        },
        cli_args,
    )?;

    Ok(())
}

/// Serve the HTTP prediction API.
///
/// Missing artifacts do not stop the server from starting; predictions
/// return errors until the server is restarted with artifacts in place.
fn serve(args: ServeArgs, cli_args: &CorsaArgs) -> Result<()> {
    let models_directory = args.model_dir.display().to_string();
    let engine = Arc::new(InferenceEngine::new(&EngineConfig::new(args.model_dir)));

    match engine.load_artifacts() {
        Ok(true) => {}
        Ok(false) => warn!("no artifacts found at {models_directory}; /predict will fail"),
        Err(e) => warn!("failed to load artifacts from {models_directory}: {e}"),
    }

    if cli_args.verbosity() > 0 {
        println!("Serving on {}:{}", args.host, args.port);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(engine, &args.host, args.port))
}
