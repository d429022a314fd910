//! Tool entries and their replacement tables.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One generated page described by the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    /// Unique identifier, also the fallback display name
    pub slug: String,

    /// Display name shown on the index card
    pub name: Option<String>,

    /// Secondary text shown on the index card
    pub description: Option<String>,

    /// Template filename, relative to the templates root
    pub template: String,

    /// Output filename, relative to the output root
    pub output: String,

    /// Ordered literal substitutions applied to the template
    pub replacements: Replacements,
}

impl ToolSpec {
    /// Name to show on the index card, falling back to the slug.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.slug)
    }

    /// Description to show on the index card, empty when unset.
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Ordered `(token, value)` pairs.
///
/// Order follows the manifest. A token repeated in the JSON object keeps its
/// first position and takes its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Replacements(Vec<(String, String)>);

impl Replacements {
    /// Build a replacement table from pairs, in order.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Iterate over the pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Replacements {
    fn from(map: Map<String, Value>) -> Self {
        Self(
            map.into_iter()
                .map(|(token, value)| (token, value_to_text(value)))
                .collect(),
        )
    }
}

/// Textual form of a replacement value.
///
/// Strings are used as-is; everything else uses its compact JSON spelling
/// (`true`, `null`, `[1,"x"]`), not Python's `str()` spelling
/// (`True`, `None`, `[1, 'x']`).
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// A tool entry as it appears in JSON, before required fields are checked.
#[derive(Debug, Deserialize)]
pub(crate) struct RawToolSpec {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub replacements: Replacements,
}

impl RawToolSpec {
    /// Check required fields, returning the first missing one on failure.
    pub(crate) fn validate(self) -> Result<ToolSpec, (Option<String>, &'static str)> {
        let Some(slug) = self.slug else {
            return Err((None, "slug"));
        };
        let Some(template) = self.template else {
            return Err((Some(slug), "template"));
        };
        let Some(output) = self.output else {
            return Err((Some(slug), "output"));
        };

        Ok(ToolSpec {
            slug,
            name: self.name,
            description: self.description,
            template,
            output,
            replacements: self.replacements,
        })
    }
}
