//! Settings that describe themselves. An add-on implements [`Describable`] for its
//! preferences or scene settings, and the helpers here write them to the log.

use crate::logger::Logger;
use serde::Serialize;
use std::fmt;

/// Strings longer than this are shortened in the log.
const MAX_STRING_LEN: usize = 50;

/// Value of one declared setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<SettingValue>),
    /// A nested settings group, logged with dotted names.
    Group(Vec<Setting>),
    /// The value can't be read from the object.
    Readonly,
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.6}"),
            Self::Str(s) => f.write_str(&shorten(s)),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Group(settings) => write!(f, "({} settings)", settings.len()),
            Self::Readonly => f.write_str("(readonly)"),
        }
    }
}

fn shorten(s: &str) -> String {
    if let Some((first, _)) = s.split_once('\n') {
        return format!("{} ... (multi-lined string skipped)", first.trim_end());
    }
    if s.chars().count() > MAX_STRING_LEN {
        let head: String = s.chars().take(MAX_STRING_LEN).collect();
        return format!("{head} ... (long string skipped)");
    }
    s.to_string()
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for SettingValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Self>> From<Vec<T>> for SettingValue {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

/// One declared setting: its identifier and current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Setting {
    pub name: String,
    pub value: SettingValue,
}

impl Setting {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A nested group, e.g. a sub-panel of preferences.
    #[must_use]
    pub fn group(name: impl Into<String>, settings: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            value: SettingValue::Group(settings),
        }
    }
}

/// An object that can list its declared settings in declaration order.
pub trait Describable {
    /// Type name shown in change notifications, e.g. `AddonPreferences`.
    fn type_name(&self) -> &str;

    fn settings(&self) -> Vec<Setting>;

    /// Looks a single setting up by identifier.
    fn setting(&self, name: &str) -> Option<SettingValue> {
        self.settings()
            .into_iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
    }
}

/// Logs `<name> = <value>` at DEBUG for each declared setting. Groups are
/// expanded with dotted names.
pub fn log_settings(logger: &Logger, item: &dyn Describable) {
    log_setting_list(logger, "", &item.settings());
}

fn log_setting_list(logger: &Logger, prefix: &str, settings: &[Setting]) {
    for setting in settings {
        let name = if prefix.is_empty() {
            setting.name.clone()
        } else {
            format!("{prefix}.{}", setting.name)
        };

        match &setting.value {
            SettingValue::Group(children) => log_setting_list(logger, &name, children),
            value => logger.debug(&format!("{name} = {value}")),
        }
    }
}

/// Builds a property-update callback: whenever the host calls it with its context
/// and the owning object, the current value of `identifier` is logged at DEBUG.
pub fn log_setting_changed<'a, C: ?Sized>(
    logger: &'a Logger,
    identifier: &'a str,
) -> impl Fn(&C, &dyn Describable) {
    move |_context: &C, item: &dyn Describable| {
        let value = item.setting(identifier).unwrap_or(SettingValue::Readonly);
        logger.debug(&format!(
            "'{}.{identifier}' changed to {value}",
            item.type_name()
        ));
    }
}
