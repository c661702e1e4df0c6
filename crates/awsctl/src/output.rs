//! Output formatting for command results
//!
//! Structured output (`-o json` / `-o yaml`) serializes whatever the handler
//! passes in; table output renders generic JSON values with comfy-table.
//! The default `auto` format leaves presentation to the handler, which
//! prints the core crate's plain-text rendering.

use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AwsctlError, Result};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text chosen per command
    #[default]
    Auto,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Table format
    Table,
}

impl OutputFormat {
    /// True for formats meant for scripting rather than reading
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }
}

/// Serialize and print a value in the requested format.
///
/// `Auto` falls back to pretty JSON; handlers that have a nicer plain-text
/// rendering print it themselves instead of calling this.
pub fn print_output<T: Serialize>(data: T, format: OutputFormat) -> Result<()> {
    let value = serde_json::to_value(data)?;

    match format {
        OutputFormat::Json | OutputFormat::Auto => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Yaml => {
            let text = serde_yaml::to_string(&value).map_err(|e| AwsctlError::OutputError {
                message: format!("YAML error: {e}"),
            })?;
            print!("{}", text);
        }
        OutputFormat::Table => {
            print_as_table(&value);
        }
    }

    Ok(())
}

fn print_as_table(value: &Value) {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            let mut table = Table::new();

            // Get headers from first object
            if let Value::Object(first) = &arr[0] {
                let headers: Vec<String> = first.keys().cloned().collect();
                table.set_header(&headers);

                for item in arr {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| format_value(obj.get(h).unwrap_or(&Value::Null)))
                            .collect();
                        table.add_row(row);
                    }
                }
            } else {
                // Simple array of values
                table.set_header(vec!["Value"]);
                for item in arr {
                    table.add_row(vec![format_value(item)]);
                }
            }

            println!("{}", table);
        }
        Value::Object(obj) => {
            let mut table = Table::new();
            table.set_header(vec!["Key", "Value"]);

            for (key, val) in obj {
                table.add_row(vec![key.clone(), format_value(val)]);
            }

            println!("{}", table);
        }
        _ => {
            println!("{}", format_value(value));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
