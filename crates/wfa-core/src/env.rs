//! Loading settings from the process environment and `.env` files

use std::collections::HashMap;
use std::path::Path;

use crate::{Result, Settings};

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Read `KEY=value` pairs from an env file without touching the process
/// environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}

/// Load settings from the environment, falling back to values in an env file.
///
/// With `env_file = None` a `.env` in the working directory is used when it
/// exists. An explicitly given file must exist. Variables already set in the
/// process environment win over file values.
pub fn load_settings(env_file: Option<&Path>) -> Result<Settings> {
    let file_vars = match env_file {
        Some(path) => read_env_file(path)?,
        None => match read_env_file(Path::new(DEFAULT_ENV_FILE)) {
            Ok(vars) => vars,
            Err(crate::Error::Env(e)) if e.not_found() => HashMap::new(),
            Err(e) => return Err(e),
        },
    };

    if !file_vars.is_empty() {
        tracing::debug!(count = file_vars.len(), "Loaded variables from env file");
    }

    Ok(settings_from_sources(&file_vars, |name| std::env::var(name).ok()))
}

fn settings_from_sources<F>(file_vars: &HashMap<String, String>, process_var: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    Settings::from_lookup(|name| {
        process_var(name)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| file_vars.get(name).cloned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_env_file() {
        let file = write_env_file(
            "# comment\nJIRA_BASE_URL=https://acme.atlassian.net/\nLLM_MODEL=\"gpt-4o\"\n",
        );

        let vars = read_env_file(file.path()).unwrap();
        assert_eq!(vars["JIRA_BASE_URL"], "https://acme.atlassian.net/");
        assert_eq!(vars["LLM_MODEL"], "gpt-4o");
    }

    #[test]
    fn test_process_env_wins_over_file() {
        let file_vars = HashMap::from([
            ("LLM_MODEL".to_string(), "from-file".to_string()),
            ("JIRA_EMAIL".to_string(), "file@acme.test".to_string()),
        ]);

        let settings = settings_from_sources(&file_vars, |name| match name {
            "LLM_MODEL" => Some("from-process".to_string()),
            "JIRA_EMAIL" => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(settings.llm.model, "from-process");
        // Blank process values fall through to the file
        assert_eq!(settings.jira.email, "file@acme.test");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_settings(Some(&dir.path().join("nope.env")));
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_load_settings_from_file() {
        let file = write_env_file("CONFLUENCE_SPACE_KEY=DOCS\nWFA_TEST_UNUSED=1\n");

        unsafe {
            std::env::remove_var("CONFLUENCE_SPACE_KEY");
        }

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.confluence.space_key.as_deref(), Some("DOCS"));
    }

    #[test]
    #[serial]
    fn test_load_settings_prefers_process_env() {
        let file = write_env_file("CONFLUENCE_SPACE_KEY=DOCS\n");

        unsafe {
            std::env::set_var("CONFLUENCE_SPACE_KEY", "ENG");
        }
        let settings = load_settings(Some(file.path())).unwrap();
        unsafe {
            std::env::remove_var("CONFLUENCE_SPACE_KEY");
        }

        assert_eq!(settings.confluence.space_key.as_deref(), Some("ENG"));
    }
}
