use crate::args::Mode;
use crate::file_paths;
use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub prompt: String,
    pub default_mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            default_mode: Mode::Escape,
        }
    }
}

pub const DEFAULT_CONFIG_FILE: &str = r#"# jsonesc configuration file

# The prompt shown in interactive mode.
prompt = "> "

# Which direction to transform in when no flag is given:
# "escape" or "unescape".
default-mode = "escape"
"#;

pub fn read() -> Config {
    let path = match file_paths::get_config_file_location() {
        Some(path) => path,
        None => return Config::default(),
    };
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => return Config::default(),
    };
    match toml::from_str(contents.as_str()) {
        Ok(config) => config,
        Err(_) => {
            eprintln!("Invalid config file in {}", path.display());
            eprintln!("Using the default configuration instead");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_CONFIG_FILE};
    use crate::args::Mode;

    #[test]
    fn default_config_file_matches_default_config() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        let default = Config::default();
        assert_eq!(parsed.prompt, default.prompt);
        assert_eq!(parsed.default_mode, default.default_mode);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("default-mode = \"unescape\"").unwrap();
        assert_eq!(parsed.prompt, "> ");
        assert_eq!(parsed.default_mode, Mode::Unescape);
    }

    #[test]
    fn empty_config_is_valid() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.default_mode, Mode::Escape);
    }
}
