//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{CorsaArgs, OutputFormat};
use crate::error::Result;

/// Report structure for artifact inspection.
#[derive(Debug, Serialize, Deserialize)]
pub struct BundleReport {
    pub location: String,
    pub model_type: String,
    pub vectorizer_type: String,
    pub n_classes: usize,
    pub classes: Vec<String>,
    pub vocabulary_size: usize,
    pub explanation_method: String,
    pub note: Option<String>,
}

/// Result structure for demo initialization.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoInitResult {
    pub directory: String,
    pub classes: Vec<String>,
    pub vocabulary_size: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CorsaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CorsaArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("PredictionResult") => {
            output_prediction_human(&value, args)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value, args)
        }
    }
}

/// Output a prediction in human format.
fn output_prediction_human(value: &serde_json::Value, _args: &CorsaArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(course) = obj.get("recommended_course").and_then(|c| c.as_str()) {
            println!("Recommended course: {course}");
        }

        if let Some(probability) = obj.get("probability").and_then(|p| p.as_f64()) {
            println!("Probability: {probability:.4}");
        }

        if let Some(explanation) = obj.get("explanation").and_then(|e| e.as_object()) {
            println!();
            println!("Explanation:");
            println!("───────────");

            if let Some(method) = explanation.get("method").and_then(|m| m.as_str()) {
                println!("Method: {method}");
            }

            if let Some(tokens) = explanation
                .get("top_contributing_tokens")
                .and_then(|t| t.as_object())
            {
                for (token, weight) in tokens {
                    if let Some(contribution) = weight.as_f64() {
                        println!("  {token}: {contribution:.4}");
                    }
                }
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &CorsaArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CorsaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
