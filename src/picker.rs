use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::{
    convert::{icu_to_moment, posix_to_moment},
    error::Error,
};

/// The marker prefix for `format` values written in the ICU dialect.
const ICU_MARKER: &str = "icu:";
/// The marker prefix for `format` values written in the POSIX dialect.
const POSIX_MARKER: &str = "posix:";

/// The default display format. Already a Moment.js pattern, so it carries
/// no marker.
const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Client side configuration for a date-time picker widget.
///
/// The options form a single JSON object handed to the widget. Two entries
/// are always present: `format`, the display pattern, and `locale`. Any
/// further entries are set with [`PickerOptions::option`].
///
/// The `format` value may be written in a source dialect by prepending its
/// marker: `icu:` for the ICU dialect or `posix:` for the POSIX dialect.
/// The marker is stripped and the pattern translated when the payload is
/// built. A value with no marker is already a Moment.js pattern and passes
/// through untouched.
///
/// The locale is never read from ambient process state. Callers hand a
/// language tag to [`PickerOptions::new`], or set the locale directly with
/// [`PickerOptions::locale`].
///
/// # Example
///
/// ```
/// use moment_fmt::PickerOptions;
///
/// let options = PickerOptions::new("en-US")
///     .format("icu:yyyy-MM-dd")
///     .option("sideBySide", true);
/// assert_eq!(options.moment_format(), "YYYY-MM-DD");
/// assert_eq!(
///     options.to_json()?,
///     r#"{"format":"YYYY-MM-DD","locale":"en","sideBySide":true}"#,
/// );
///
/// # Ok::<(), moment_fmt::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct PickerOptions {
    options: Map<String, Value>,
}

impl PickerOptions {
    /// Creates options holding the defaults: a `YYYY-MM-DD HH:mm:ss`
    /// display format and a locale derived from `language`.
    ///
    /// The derived locale is the primary subtag of the language tag, that
    /// is, its first two characters: `"en-US"` becomes `"en"`.
    pub fn new(language: &str) -> PickerOptions {
        let mut options = Map::new();
        options.insert("format".to_string(), Value::from(DEFAULT_FORMAT));
        options.insert(
            "locale".to_string(),
            Value::from(primary_subtag(language)),
        );
        PickerOptions { options }
    }

    /// Sets the display format.
    ///
    /// `format` is either a Moment.js pattern, or a source dialect pattern
    /// carrying its marker prefix (`icu:` or `posix:`).
    pub fn format(self, format: &str) -> PickerOptions {
        self.option("format", format)
    }

    /// Sets the widget locale directly, replacing the one derived from the
    /// language tag. The value is used as given.
    pub fn locale(self, locale: &str) -> PickerOptions {
        self.option("locale", locale)
    }

    /// Sets an arbitrary client option.
    ///
    /// Setting the same option twice keeps the later value. This includes
    /// the built in `format` and `locale` entries.
    pub fn option(
        mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> PickerOptions {
        self.options.insert(name.to_string(), value.into());
        self
    }

    /// Returns the `format` entry resolved to a Moment.js pattern, with
    /// any dialect marker stripped and the pattern translated.
    pub fn moment_format(&self) -> String {
        let raw = self
            .options
            .get("format")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_FORMAT);
        resolve_format(raw)
    }

    /// Serializes the options to the JSON payload consumed by the client
    /// side widget. The `format` entry is resolved to a Moment.js pattern;
    /// every other entry is emitted as set.
    ///
    /// # Errors
    ///
    /// This returns an error when an option value could not be serialized
    /// to JSON.
    ///
    /// # Example
    ///
    /// ```
    /// use moment_fmt::PickerOptions;
    ///
    /// let options = PickerOptions::new("de-CH").format("posix:d.m.Y");
    /// assert_eq!(
    ///     options.to_json()?,
    ///     r#"{"format":"DD.MM.YYYY","locale":"de"}"#,
    /// );
    ///
    /// # Ok::<(), moment_fmt::Error>(())
    /// ```
    pub fn to_json(&self) -> Result<String, Error> {
        let json = serde_json::to_string(self)?;
        debug!("built picker options payload: {json}");
        Ok(json)
    }
}

impl Serialize for PickerOptions {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.options.len()))?;
        for (name, value) in &self.options {
            match value.as_str() {
                Some(raw) if name == "format" => {
                    map.serialize_entry(name, &resolve_format(raw))?;
                }
                _ => map.serialize_entry(name, value)?,
            }
        }
        map.end()
    }
}

/// Applies the dialect marker convention to a raw `format` value.
///
/// A recognized marker selects the translator for its dialect and is
/// stripped from the pattern. No marker means the value is already a
/// Moment.js pattern, which must not be re-translated.
fn resolve_format(format: &str) -> String {
    if let Some(pattern) = format.strip_prefix(ICU_MARKER) {
        icu_to_moment(pattern)
    } else if let Some(pattern) = format.strip_prefix(POSIX_MARKER) {
        posix_to_moment(pattern)
    } else {
        format.to_string()
    }
}

/// Extracts the two character primary subtag from a language tag.
fn primary_subtag(language: &str) -> String {
    language.chars().take(2).collect()
}
