//! Implementation of the `pvault render` command.
//!
//! Loads a template, merges variable values from a values file and repeated
//! `--var` flags, builds the payload, and prints it verbatim to stdout.
//! When the payload crossed the configured character limit (and was
//! therefore duplicated by the builder), a notice goes to stderr.

use crate::cli::RenderArgs;
use crate::config::RenderConfig;
use crate::error::{Result, VaultError};
use crate::payload::build_payload_with;
use crate::prompt::{Prompt, VariableValues};
use std::io::Write;
use std::path::Path;

/// Execute the `pvault render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let (payload, exceeded, char_limit) = render_payload(&args)?;

    // The payload is printed verbatim: no trailing newline is added, so the
    // output matches what would land on the clipboard.
    print!("{}", payload);
    std::io::stdout().flush().ok();

    if exceeded {
        eprintln!(
            "notice: payload exceeded {} characters and was duplicated",
            char_limit
        );
    }

    Ok(())
}

/// Build the payload for the given arguments.
///
/// Returns the payload, whether it crossed the character limit, and the
/// limit itself (for the notice message).
fn render_payload(args: &RenderArgs) -> Result<(String, bool, usize)> {
    let prompt = Prompt::load(&args.template)?;

    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    let mut values = match &args.values {
        Some(path) => load_values(path)?,
        None => VariableValues::new(),
    };
    for var in &args.vars {
        let (name, value) = parse_var_flag(var)?;
        values.insert(name, value);
    }

    let payload = build_payload_with(&prompt, &values, &config);
    let exceeded = payload.chars().count() > config.char_limit;

    Ok((payload, exceeded, config.char_limit))
}

/// Parse a `--var NAME=VALUE` flag.
///
/// The value may itself contain `=`; only the first one splits.
fn parse_var_flag(flag: &str) -> Result<(String, String)> {
    match flag.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(VaultError::UserError(format!(
            "invalid --var '{}': expected NAME=VALUE",
            flag
        ))),
    }
}

/// Load a values file mapping variable names to values.
///
/// YAML or JSON, chosen by extension (anything other than `.json` is
/// treated as YAML).
fn load_values<P: AsRef<Path>>(path: P) -> Result<VariableValues> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        VaultError::UserError(format!(
            "failed to read values file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .map_err(|e| VaultError::ParseError(format!("failed to parse values JSON: {}", e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| VaultError::ParseError(format!("failed to parse values YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::{Builder, TempPath};

    fn write_file(suffix: &str, content: &str) -> TempPath {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.into_temp_path()
    }

    fn args(template: &Path) -> RenderArgs {
        RenderArgs {
            template: template.to_path_buf(),
            vars: Vec::new(),
            values: None,
            config: None,
        }
    }

    #[test]
    fn parse_var_flag_splits_on_first_equals() {
        assert_eq!(
            parse_var_flag("name=Sam").unwrap(),
            ("name".to_string(), "Sam".to_string())
        );
        assert_eq!(
            parse_var_flag("query=a=b").unwrap(),
            ("query".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_var_flag("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
    }

    #[test]
    fn parse_var_flag_rejects_missing_equals() {
        assert!(parse_var_flag("name").is_err());
        assert!(parse_var_flag("=value").is_err());
    }

    #[test]
    fn load_values_yaml() {
        let path = write_file(".yaml", "name: Sam\ncity: Oslo\n");
        let values = load_values(&path).unwrap();
        assert_eq!(values.get("name"), Some(&"Sam".to_string()));
        assert_eq!(values.get("city"), Some(&"Oslo".to_string()));
    }

    #[test]
    fn load_values_json() {
        let path = write_file(".json", r#"{"name": "Sam"}"#);
        let values = load_values(&path).unwrap();
        assert_eq!(values.get("name"), Some(&"Sam".to_string()));
    }

    #[test]
    fn load_values_missing_file_is_user_error() {
        let result = load_values(PathBuf::from("/nonexistent/values.yaml"));
        assert!(matches!(result.unwrap_err(), VaultError::UserError(_)));
    }

    #[test]
    fn render_payload_substitutes_values() {
        let template = write_file(".yaml", "title: T\nbody: 'Hi {name}!'\nvariables: [name]\n");
        let mut a = args(&template);
        a.vars = vec!["name=Sam".to_string()];

        let (payload, exceeded, _) = render_payload(&a).unwrap();
        assert_eq!(payload, "Hi Sam!");
        assert!(!exceeded);
    }

    #[test]
    fn var_flags_override_values_file() {
        let template = write_file(".yaml", "title: T\nbody: 'Hi {name}!'\nvariables: [name]\n");
        let values = write_file(".yaml", "name: FromFile\n");
        let mut a = args(&template);
        a.values = Some(values.to_path_buf());
        a.vars = vec!["name=FromFlag".to_string()];

        let (payload, _, _) = render_payload(&a).unwrap();
        assert_eq!(payload, "Hi FromFlag!");
    }

    #[test]
    fn custom_config_changes_the_limit() {
        let template = write_file(".yaml", "title: T\nbody: 'twelve chars'\n");
        let config = write_file(".yaml", "char_limit: 10\n");
        let mut a = args(&template);
        a.config = Some(config.to_path_buf());

        let (payload, exceeded, limit) = render_payload(&a).unwrap();
        assert_eq!(payload, "twelve chars twelve chars");
        assert!(exceeded);
        assert_eq!(limit, 10);
    }

    #[test]
    fn missing_template_is_user_error() {
        let a = args(Path::new("/nonexistent/template.yaml"));
        assert!(matches!(
            render_payload(&a).unwrap_err(),
            VaultError::UserError(_)
        ));
    }
}
