//! Operator execution logging. The wrapped call is timed and its outcome logged;
//! errors and panics reach the caller exactly as the operator produced them.

use crate::logger::Logger;
use crate::settings::{Setting, SettingValue};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;

const HIDDEN: &str = "(hidden for security reasons)";
const PROPERTY_INDENT: usize = 40;

/// Runs `f`, logging start, end, duration and outcome under `label`.
///
/// `Err` values are logged at ERROR and returned unchanged; a panic is logged at
/// ERROR and then resumed with its original payload.
///
/// The panic line carries the payload message only. The panic location and any
/// backtrace (`RUST_BACKTRACE`) come from the process panic hook, which runs
/// before this function sees the unwind.
#[track_caller]
pub fn log_execution<T, E, F>(
    logger: &Logger,
    label: &str,
    properties: &[Setting],
    f: F,
) -> Result<T, E>
where
    T: fmt::Debug,
    E: fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    if properties.is_empty() {
        logger.info(&format!("\"{label}\" execution started"));
    } else {
        let props = format_properties(properties);
        logger.info(&format!(
            "\"{label}\" execution started with properties:\n{props}"
        ));
    }

    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    let elapsed = start.elapsed().as_secs_f64();

    match outcome {
        Ok(Ok(value)) => {
            logger.info(&format!(
                "\"{label}\" execution ended as {value:?} in {elapsed:.6} second(s)"
            ));
            Ok(value)
        }
        Ok(Err(e)) => {
            logger.error(&format!(
                "\"{label}\" execution failed after {elapsed:.6} second(s): {e}"
            ));
            Err(e)
        }
        Err(payload) => {
            let msg = panic_message(&*payload);
            logger.error(&format!(
                "\"{label}\" execution panicked after {elapsed:.6} second(s): {msg}"
            ));
            panic::resume_unwind(payload)
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("(non-string panic payload)")
}

/// Pretty JSON of the (redacted) properties, indented under the log line.
fn format_properties(properties: &[Setting]) -> String {
    let map: serde_json::Map<String, serde_json::Value> = redact_paths(properties)
        .into_iter()
        .map(|s| {
            let value = serde_json::to_value(&s.value).unwrap_or(serde_json::Value::Null);
            (s.name, value)
        })
        .collect();

    let pretty = serde_json::to_string_pretty(&map).unwrap_or_default();
    let indent = " ".repeat(PROPERTY_INDENT);
    pretty
        .lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// File paths chosen by the user may contain personal information: only whether
/// they exist is logged.
#[must_use]
pub fn redact_paths(properties: &[Setting]) -> Vec<Setting> {
    properties
        .iter()
        .map(|setting| {
            let SettingValue::Str(value) = &setting.value else {
                return setting.clone();
            };
            if value.is_empty() {
                return setting.clone();
            }

            let redacted = match setting.name.as_str() {
                "filepath" if Path::new(value).exists() => format!("Existing File Path {HIDDEN}"),
                "filepath" => format!("Missing File Path {HIDDEN}"),
                "directory" if Path::new(value).is_dir() => {
                    format!("Existing Directory Path {HIDDEN}")
                }
                "directory" => format!("Missing Directory Path {HIDDEN}"),
                "filename" => format!("Some Filename {HIDDEN}"),
                _ => return setting.clone(),
            };
            Setting::new(setting.name.clone(), redacted)
        })
        .collect()
}

/// A host operator: a labelled, user-invokable action with declared properties.
pub trait Operator {
    /// Host execution context handed to every call.
    type Context: ?Sized;
    type Output: fmt::Debug;
    type Error: fmt::Display;

    fn label(&self) -> &str;

    fn properties(&self) -> Vec<Setting> {
        Vec::new()
    }

    /// # Errors
    /// Whatever the operator reports as failure.
    fn execute(&mut self, context: &mut Self::Context) -> Result<Self::Output, Self::Error>;

    /// [`Operator::execute`] wrapped in [`log_execution`].
    ///
    /// # Errors
    /// Returns the operator's own error unchanged.
    #[track_caller]
    fn execute_with_logging(
        &mut self,
        logger: &Logger,
        context: &mut Self::Context,
    ) -> Result<Self::Output, Self::Error> {
        let label = self.label().to_string();
        let properties = self.properties();
        log_execution(logger, &label, &properties, || self.execute(context))
    }
}
