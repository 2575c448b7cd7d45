use std::io::Write;

use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::envelope::Envelope;
use crate::error::CliError;

pub fn render<W: Write>(
    writer: &mut W,
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(writer, "{payload}")?;
        }
        OutputFormat::Ndjson => render_ndjson(writer, envelope)?,
        OutputFormat::Table => render_table(writer, envelope)?,
    }

    Ok(())
}

/// One object per line report, then a summary with meta and errors.
fn render_ndjson<W: Write>(writer: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    let Some(reports) = envelope.data.as_array() else {
        writeln!(writer, "{}", serde_json::to_string(envelope)?)?;
        return Ok(());
    };

    for report in reports {
        writeln!(writer, "{}", serde_json::to_string(report)?)?;
    }

    let summary = json!({
        "meta": envelope.meta,
        "errors": envelope.errors,
    });
    writeln!(writer, "{}", serde_json::to_string(&summary)?)?;
    Ok(())
}

fn render_table<W: Write>(writer: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(writer, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(writer, "schema      : {}", envelope.meta.schema_version)?;
    writeln!(writer, "parsed      : {}", envelope.meta.parsed)?;
    writeln!(writer, "failed      : {}", envelope.meta.failed)?;

    if !envelope.meta.warnings.is_empty() {
        writeln!(writer, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(writer, "  - {warning}")?;
        }
    }

    match envelope.data.as_array() {
        Some(reports) => {
            writeln!(writer, "lines:")?;
            for report in reports {
                writeln!(writer, "  {}", describe_report(report))?;
            }
        }
        None => {
            writeln!(writer, "data:")?;
            let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
            for line in pretty_data.lines() {
                writeln!(writer, "  {line}")?;
            }
        }
    }

    if !envelope.errors.is_empty() {
        writeln!(writer, "errors:")?;
        for error in &envelope.errors {
            match error.line {
                Some(line) => writeln!(writer, "  - line {line}: {}: {}", error.code, error.message)?,
                None => writeln!(writer, "  - {}: {}", error.code, error.message)?,
            }
        }
    }

    Ok(())
}

fn describe_report(report: &Value) -> String {
    let line = report["line"].as_u64().unwrap_or_default();
    let command = &report["command"];
    if command.is_null() {
        let code = report["error"]["code"].as_str().unwrap_or("ERROR");
        return format!("{line:>4}  {code}");
    }

    let action = command["action"].as_str().unwrap_or_default();
    let chain = command["chain"].as_str().unwrap_or_default();
    let target = command["target"].as_str().unwrap_or_default();
    match command["value"].as_f64() {
        Some(value) => {
            let percent = if command["isPercent"].as_bool().unwrap_or(false) {
                "%"
            } else {
                ""
            };
            let unit = command["unit"].as_str().unwrap_or_default();
            format!("{line:>4}  {action:<5} {value}{percent} {unit} on {chain}  {target}")
        }
        None => format!("{line:>4}  {action:<5} {chain}  {target}"),
    }
}
