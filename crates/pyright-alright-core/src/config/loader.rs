//! Environment loading helpers.
//!
//! Fallback chains (primary key, then aliases, then default) live here so the
//! schema structs stay declarative.

use std::env;
use std::path::Path;

/// Load `.env` from the current directory into the process environment.
///
/// Runs once per process and never overrides a variable that is already set.
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        load_dotenv_from_dir(&dir);
    });
}

/// Load `<dir>/.env` without the once-per-process guard.
pub fn load_dotenv_from_dir(dir: &Path) {
    let Ok(content) = std::fs::read_to_string(dir.join(".env")) else {
        return;
    };
    for (key, value) in parse_dotenv(&content) {
        if env::var(&key).is_err() {
            set_env_var(&key, &value);
        }
    }
}

/// Parse `KEY=value` lines. Blank lines and `#` comments are skipped, matching
/// quotes around the value are stripped, and an unquoted trailing `# comment`
/// is dropped.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let mut value = value.trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    pairs
}

/// Read the primary key or the first alias that is set; empty values fall back
/// to `default`.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env_optional(primary, aliases).unwrap_or_else(default)
}

/// Read the primary key or the first alias that is set; empty values count as
/// unset.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
}

/// Boolean flag: `0/false/no/off` are false, any other value is true.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    let v = env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()));
    match v.as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

// All `set_var` calls go through here. Callers must invoke it before spawning
// threads.
#[allow(unsafe_code)]
fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotenv_basic() {
        let pairs = parse_dotenv("A=1\n# comment\n\nB = two\n");
        assert_eq!(
            pairs,
            vec![("A".to_string(), "1".to_string()), ("B".to_string(), "two".to_string())]
        );
    }

    #[test]
    fn test_parse_dotenv_quotes_and_inline_comment() {
        let pairs = parse_dotenv("RUNTIME=\"python -m pybun\"\nLEVEL=debug # verbose\nQ='x # y'\n");
        assert_eq!(pairs[0].1, "python -m pybun");
        assert_eq!(pairs[1].1, "debug");
        assert_eq!(pairs[2].1, "x # y");
    }

    #[test]
    fn test_parse_dotenv_skips_lines_without_equals() {
        assert!(parse_dotenv("export\nnot a pair\n").is_empty());
    }

    // Keep every process env write in this one test: set_var races with
    // reads from parallel test threads.
    #[test]
    fn test_env_helpers_against_process_env() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "PYRIGHT_ALRIGHT_TEST_DOTENV_NEW=from-file\nPYRIGHT_ALRIGHT_TEST_DOTENV_SET=from-file\n",
        )
        .unwrap();
        set_env_var("PYRIGHT_ALRIGHT_TEST_DOTENV_SET", "already");
        set_env_var("PYRIGHT_ALRIGHT_TEST_BLANK", "   ");
        set_env_var("PYRIGHT_ALRIGHT_TEST_BOOL_OFF", "off");
        set_env_var("PYRIGHT_ALRIGHT_TEST_BOOL_ON", "1");
        load_dotenv_from_dir(dir.path());

        // .env never overrides
        assert_eq!(env::var("PYRIGHT_ALRIGHT_TEST_DOTENV_NEW").unwrap(), "from-file");
        assert_eq!(env::var("PYRIGHT_ALRIGHT_TEST_DOTENV_SET").unwrap(), "already");

        // blank counts as unset
        assert_eq!(env_optional("PYRIGHT_ALRIGHT_TEST_BLANK", &[]), None);
        assert_eq!(
            env_or("PYRIGHT_ALRIGHT_TEST_BLANK", &[], || "fallback".into()),
            "fallback"
        );

        assert!(!env_bool("PYRIGHT_ALRIGHT_TEST_BOOL_OFF", &[], true));
        assert!(env_bool("PYRIGHT_ALRIGHT_TEST_BOOL_ON", &[], false));
        assert!(env_bool("PYRIGHT_ALRIGHT_TEST_BOOL_MISSING", &[], true));
    }
}
