//! Integration tests for artifact loading and reload behavior.

use std::sync::Arc;
use std::thread;

use tempfile::TempDir;

use corsa::artifact::{
    ArtifactBundle, ArtifactMetadata, FsArtifactStore, VECTORIZER_FILE, demo_bundle,
};
use corsa::classifier::{ClassifierModel, LogisticRegression};
use corsa::error::{CorsaError, Result};
use corsa::features::{CountVectorizer, VectorizerModel};
use corsa::inference::{EngineConfig, InferenceEngine};

fn two_course_bundle() -> Result<ArtifactBundle> {
    let classifier = ClassifierModel::LogisticRegression(LogisticRegression::new(
        vec![vec![1.2, 1.5, -0.4, -0.6], vec![-0.3, -0.4, 1.4, 1.1]],
        vec![0.0, 0.0],
    ));
    let vectorizer = VectorizerModel::Count(CountVectorizer::new(
        ["python", "ml", "nlp", "transformers"]
            .iter()
            .map(|name| name.to_string())
            .collect(),
    )?);
    ArtifactBundle::new(
        classifier,
        vectorizer,
        ArtifactMetadata::with_classes(["intro_ml", "nlp"]),
    )
}

#[test]
fn test_engine_loads_from_directory() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    FsArtifactStore::new(temp_dir.path()).save(&demo_bundle()?)?;

    let engine = InferenceEngine::new(&EngineConfig::new(temp_dir.path()));
    assert!(!engine.is_loaded());
    assert!(engine.load_artifacts()?);

    let result = engine.predict("spark, sql, pipelines")?;
    assert_eq!(result.recommended_course, "data_engineering");

    Ok(())
}

#[test]
fn test_missing_artifacts_reported_at_predict() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let engine = InferenceEngine::new(&EngineConfig::new(temp_dir.path()));

    assert!(!engine.load_artifacts()?);

    let error = engine.predict("python").unwrap_err();
    assert!(matches!(error, CorsaError::ModelNotLoaded(_)));
    assert!(
        error
            .to_string()
            .contains(&temp_dir.path().display().to_string())
    );

    Ok(())
}

#[test]
fn test_reload_swaps_bundle() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FsArtifactStore::new(temp_dir.path());
    store.save(&demo_bundle()?)?;

    let engine = InferenceEngine::new(&EngineConfig::new(temp_dir.path()));
    engine.load_artifacts()?;
    assert_eq!(
        engine.predict("spark, sql")?.recommended_course,
        "data_engineering"
    );

    // Replace the files on disk; the engine keeps serving the old bundle
    // until a reload is requested.
    store.save(&two_course_bundle()?)?;
    assert_eq!(
        engine.predict("spark, sql")?.recommended_course,
        "data_engineering"
    );

    engine.reload_artifacts()?;

    // The new vocabulary has no spark/sql, so the scores tie and the
    // lowest class index wins.
    assert_eq!(engine.predict("spark, sql")?.recommended_course, "intro_ml");

    Ok(())
}

#[test]
fn test_reload_with_incomplete_store_keeps_current_bundle() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FsArtifactStore::new(temp_dir.path());
    store.save(&demo_bundle()?)?;

    let engine = InferenceEngine::new(&EngineConfig::new(temp_dir.path()));
    engine.load_artifacts()?;

    std::fs::remove_file(temp_dir.path().join(VECTORIZER_FILE)).unwrap();

    // The reload finds no complete set and keeps what is loaded.
    assert!(engine.reload_artifacts()?);
    assert!(engine.is_loaded());
    assert_eq!(
        engine.predict("nlp, transformers")?.recommended_course,
        "nlp"
    );

    Ok(())
}

#[test]
fn test_concurrent_predictions_during_reload() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FsArtifactStore::new(temp_dir.path());
    store.save(&demo_bundle()?)?;

    let engine = Arc::new(InferenceEngine::new(&EngineConfig::new(temp_dir.path())));
    engine.load_artifacts()?;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                let result = engine.predict("nlp, transformers").unwrap();
                assert!(!result.recommended_course.is_empty());
                assert!(result.probability > 0.0 && result.probability <= 1.0);
            }
        }));
    }

    // Keep swapping the bundle underneath the predicting threads.
    for _ in 0..20 {
        engine.reload_artifacts()?;
    }

    for handle in handles {
        handle.join().unwrap();
    }

    Ok(())
}
