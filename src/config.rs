use crate::domain::{BumpKind, SelectionPolicy};
use crate::error::{BumpTagError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// String some pipelines pass for an input that was never set.
const UNDEFINED_SENTINEL: &str = "undefined";

/// Complete configuration for one bump-tag run.
///
/// Read once, then passed by reference to every stage.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,

    #[serde(default)]
    pub bump: BumpKind,

    /// Render the result with `new_suffix` instead of the selected tag's suffix
    #[serde(default, alias = "copy_from")]
    pub replace_suffix: bool,

    #[serde(
        default,
        alias = "target_suffix",
        deserialize_with = "deserialize_optional_input"
    )]
    pub new_suffix: Option<String>,

    #[serde(default)]
    pub selection: SelectionPolicy,

    #[serde(default)]
    pub source: SourceConfig,
}

/// Where existing tags are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// GitHub when a repository is configured, the local repository otherwise
    #[default]
    Auto,
    Git,
    GitHub,
}

impl FromStr for SourceKind {
    type Err = BumpTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SourceKind::Auto),
            "git" => Ok(SourceKind::Git),
            "github" => Ok(SourceKind::GitHub),
            _ => Err(BumpTagError::config(format!(
                "Invalid tag source: '{}' - expected auto, git or github",
                s
            ))),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Auto => write!(f, "auto"),
            SourceKind::Git => write!(f, "git"),
            SourceKind::GitHub => write!(f, "github"),
        }
    }
}

/// Tag source settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// Local repository path, discovered upwards
    #[serde(default = "default_path")]
    pub path: String,

    /// `owner/repo` on GitHub
    #[serde(default)]
    pub repository: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default, skip_serializing)]
    pub github_token: Option<String>,
}

fn default_path() -> String {
    ".".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            kind: SourceKind::Auto,
            path: default_path(),
            repository: None,
            api_url: default_api_url(),
            github_token: None,
        }
    }
}

impl SourceConfig {
    /// Resolve [`SourceKind::Auto`] to a concrete source
    pub fn resolved_kind(&self) -> SourceKind {
        match self.kind {
            SourceKind::Auto if self.repository.is_some() => SourceKind::GitHub,
            SourceKind::Auto => SourceKind::Git,
            other => other,
        }
    }
}

/// Raw string inputs, as handed over by a CLI or a pipeline environment.
///
/// `None` and empty strings leave the file configuration untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub bump: Option<String>,
    pub replace_suffix: Option<String>,
    pub copy_from: Option<String>,
    pub new_suffix: Option<String>,
    pub target_suffix: Option<String>,
    pub selection: Option<String>,
    pub source: Option<String>,
    pub path: Option<String>,
    pub repository: Option<String>,
    pub api_url: Option<String>,
    pub github_token: Option<String>,
}

impl Config {
    /// Overlay raw inputs on this configuration.
    ///
    /// Boolean inputs are true only for the string `"true"`. The `"undefined"`
    /// sentinel counts as absent.
    pub fn apply_inputs(mut self, inputs: &Inputs) -> Result<Config> {
        if let Some(prefix) = provided(&inputs.prefix) {
            self.prefix = prefix;
        }
        if let Some(suffix) = provided(&inputs.suffix) {
            self.suffix = suffix;
        }
        if let Some(bump) = provided(&inputs.bump) {
            self.bump = bump.parse()?;
        }

        let replace_flags: Vec<String> = [&inputs.replace_suffix, &inputs.copy_from]
            .into_iter()
            .filter_map(provided)
            .collect();
        if !replace_flags.is_empty() {
            self.replace_suffix = replace_flags.iter().any(|flag| parse_bool_input(flag));
        }

        if let Some(new_suffix) =
            provided(&inputs.new_suffix).or_else(|| provided(&inputs.target_suffix))
        {
            self.new_suffix = Some(new_suffix);
        }
        if let Some(selection) = provided(&inputs.selection) {
            self.selection = selection.parse()?;
        }
        if let Some(kind) = provided(&inputs.source) {
            self.source.kind = kind.parse()?;
        }
        if let Some(path) = provided(&inputs.path) {
            self.source.path = path;
        }
        if let Some(repository) = provided(&inputs.repository) {
            self.source.repository = Some(repository);
        }
        if let Some(api_url) = provided(&inputs.api_url) {
            self.source.api_url = api_url;
        }
        if let Some(token) = provided(&inputs.github_token) {
            self.source.github_token = Some(token);
        }

        Ok(self)
    }
}

/// `"true"` is true; anything else is false.
pub fn parse_bool_input(value: &str) -> bool {
    value.trim() == "true"
}

/// Trimmed value, or `None` for empty strings and the `"undefined"` sentinel.
pub fn normalize_optional_input(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == UNDEFINED_SENTINEL {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn provided(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(normalize_optional_input)
}

fn deserialize_optional_input<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(normalize_optional_input))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumptag.toml` in current directory
/// 3. `.bumptag.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bumptag.toml").exists() {
        fs::read_to_string("./bumptag.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bumptag.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| BumpTagError::config(e.to_string()))
}
