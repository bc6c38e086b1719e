//! Prompt template model for pvault.
//!
//! A prompt is a reusable text template: a title, a body that may contain
//! `{variable}` placeholders, and an ordered list of defined variable names.
//! Values supplied at render time are kept separately as [`VariableValues`].
//!
//! Prompts are constructed per render/compare operation; nothing in this
//! module persists state. File loading exists for the CLI boundary and
//! supports YAML and JSON by extension.

use crate::error::{Result, VaultError};
use crate::variables::sanitize_variables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Values supplied for a prompt's variables, keyed by the exact stored
/// variable spelling. Missing entries read as the empty string.
pub type VariableValues = BTreeMap<String, String>;

/// A reusable prompt template.
///
/// Invariant: `variables` contains no two entries that normalize to the same
/// key (see [`crate::variables::normalize_key`]). The invariant is enforced
/// when loading from a file; code constructing prompts directly should run
/// the list through [`sanitize_variables`] first. Matching tolerates a
/// violated invariant with first-match-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Display title of the prompt.
    pub title: String,

    /// Template body; may contain zero or more `{name}` placeholders.
    pub body: String,

    /// Defined variable names, in insertion order, as displayed.
    #[serde(default)]
    pub variables: Vec<String>,
}

impl Prompt {
    /// Create a prompt, sanitizing the variable list.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        variables: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            variables: sanitize_variables(&variables),
        }
    }

    /// Compare two prompts field by field.
    ///
    /// True iff `title`, `body`, and `variables` (element-wise, in order)
    /// are all equal. Used by the version-history feature to decide whether
    /// a snapshot differs from the current prompt.
    pub fn is_identical(&self, other: &Prompt) -> bool {
        self.title == other.title && self.body == other.body && self.variables == other.variables
    }

    /// Load a prompt from a YAML or JSON file (chosen by extension;
    /// anything other than `.json` is treated as YAML).
    ///
    /// The variable list is sanitized on load so the dedup invariant holds
    /// for the rest of the pipeline.
    ///
    /// # Returns
    ///
    /// * `Ok(Prompt)` - Successfully loaded prompt
    /// * `Err(VaultError::UserError)` - File could not be read
    /// * `Err(VaultError::ParseError)` - File could not be parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            VaultError::UserError(format!(
                "failed to read template file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse a prompt from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let prompt: Prompt = serde_yaml::from_str(yaml)
            .map_err(|e| VaultError::ParseError(format!("failed to parse template YAML: {}", e)))?;
        Ok(prompt.sanitized())
    }

    /// Parse a prompt from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let prompt: Prompt = serde_json::from_str(json)
            .map_err(|e| VaultError::ParseError(format!("failed to parse template JSON: {}", e)))?;
        Ok(prompt.sanitized())
    }

    /// Serialize the prompt to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| VaultError::ParseError(format!("failed to serialize template: {}", e)))
    }

    fn sanitized(mut self) -> Self {
        self.variables = sanitize_variables(&self.variables);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn prompt(title: &str, body: &str, variables: &[&str]) -> Prompt {
        Prompt {
            title: title.to_string(),
            body: body.to_string(),
            variables: variables.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn new_sanitizes_variables() {
        let p = Prompt::new(
            "Greeting",
            "Hi {name}",
            vec!["  name ".to_string(), "na me".to_string(), String::new()],
        );
        assert_eq!(p.variables, vec!["name"]);
    }

    #[test]
    fn identical_prompts_compare_equal() {
        let p = prompt("Greeting", "Hi {name}", &["name"]);
        assert!(p.is_identical(&p.clone()));
    }

    #[test]
    fn title_difference_breaks_identity() {
        let a = prompt("Greeting", "Hi {name}", &["name"]);
        let b = prompt("Welcome", "Hi {name}", &["name"]);
        assert!(!a.is_identical(&b));
    }

    #[test]
    fn body_difference_breaks_identity() {
        let a = prompt("Greeting", "Hi {name}", &["name"]);
        let b = prompt("Greeting", "Hello {name}", &["name"]);
        assert!(!a.is_identical(&b));
    }

    #[test]
    fn variable_order_matters_for_identity() {
        let a = prompt("Greeting", "Hi", &["a", "b"]);
        let b = prompt("Greeting", "Hi", &["b", "a"]);
        assert!(!a.is_identical(&b));
    }

    #[test]
    fn from_yaml_parses_and_sanitizes() {
        let yaml = "title: Greeting\nbody: \"Hi {name}\"\nvariables:\n  - ' name '\n  - 'na me'\n";
        let p = Prompt::from_yaml(yaml).unwrap();
        assert_eq!(p.title, "Greeting");
        assert_eq!(p.body, "Hi {name}");
        assert_eq!(p.variables, vec!["name"]);
    }

    #[test]
    fn from_yaml_defaults_missing_variables() {
        let p = Prompt::from_yaml("title: T\nbody: B\n").unwrap();
        assert!(p.variables.is_empty());
    }

    #[test]
    fn from_json_parses() {
        let json = r#"{"title": "T", "body": "Hello {who}", "variables": ["who"]}"#;
        let p = Prompt::from_json(json).unwrap();
        assert_eq!(p.variables, vec!["who"]);
    }

    #[test]
    fn from_yaml_failure_is_parse_error() {
        let result = Prompt::from_yaml("title: [unclosed");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), VaultError::ParseError(_)));
    }

    #[test]
    fn load_yaml_file() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "title: T\nbody: 'Hi {{name}}'\nvariables: [name]\n").unwrap();

        let p = Prompt::load(file.path()).unwrap();
        assert_eq!(p.body, "Hi {name}");
    }

    #[test]
    fn load_json_file_by_extension() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"title": "T", "body": "B", "variables": []}}"#).unwrap();

        let p = Prompt::load(file.path()).unwrap();
        assert_eq!(p.title, "T");
    }

    #[test]
    fn load_missing_file_is_user_error() {
        let result = Prompt::load("/nonexistent/template.yaml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), VaultError::UserError(_)));
    }

    #[test]
    fn extensionless_file_parses_as_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "title: T\nbody: B\n").unwrap();

        let p = Prompt::load(file.path()).unwrap();
        assert_eq!(p.title, "T");
    }

    #[test]
    fn yaml_round_trip() {
        let p = prompt("Greeting", "Hi {name}", &["name"]);
        let yaml = p.to_yaml().unwrap();
        let parsed = Prompt::from_yaml(&yaml).unwrap();
        assert!(p.is_identical(&parsed));
    }
}
