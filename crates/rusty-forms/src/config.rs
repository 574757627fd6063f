// File: rusty-forms/src/config.rs
// Purpose: Form configuration parsing from forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings applied to every form a [`FormContext`](crate::FormContext) binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// CSS class on the `<form>` element
    #[serde(default)]
    pub class: Option<String>,

    /// CSS class added to every bound input
    #[serde(default)]
    pub input_class: Option<String>,

    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub action: Option<String>,

    /// Server-rendered forms carry method, action and a submit button
    #[serde(default = "default_false")]
    pub ssr: bool,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

fn default_method() -> String {
    "POST".to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            class: None,
            input_class: None,
            method: default_method(),
            action: None,
            ssr: false,
            submit_label: default_submit_label(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "form config not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form config: {:?}", path))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse form config: {:?}", path))?;

        tracing::debug!(?path, ssr = config.ssr, "loaded form config");
        Ok(config)
    }

    /// Load configuration from the default path (./forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("forms.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.method, "POST");
        assert_eq!(config.submit_label, "Submit");
        assert!(!config.ssr);
        assert!(config.input_class.is_none());
    }

    #[test]
    fn test_empty_config() {
        let config = FormConfig::from_toml_str("  \n").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            input_class = "form-control"
            ssr = true
            action = "/signup"
        "#;
        let config = FormConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.input_class.as_deref(), Some("form-control"));
        assert_eq!(config.action.as_deref(), Some("/signup"));
        assert!(config.ssr);
        assert_eq!(config.method, "POST");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = FormConfig::load("/definitely/not/here/forms.toml").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("rusty-forms-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "method = \"GET\"\nsubmit_label = \"Send\"").unwrap();

        let config = FormConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.method, "GET");
        assert_eq!(config.submit_label, "Send");
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let path = std::env::temp_dir().join(format!("rusty-forms-bad-{}.toml", std::process::id()));
        fs::write(&path, "ssr = [").unwrap();

        let err = FormConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.to_string().contains("Failed to parse form config"));
    }
}
