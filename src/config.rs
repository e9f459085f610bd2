//! Planner configuration.
//!
//! Values come from [`PlannerConfig::default`], optionally overridden by a
//! JSON file and then by command-line flags.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::utils::json::load_json;

/// How solved trips are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Turn-by-turn itineraries.
    #[default]
    Pretty,
    /// One summary row per trip.
    Table,
    Csv,
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub format: OutputFormat,
    /// Also test whether the distance and time graphs are strongly connected.
    pub check_connectivity: bool,
    /// Colorize pretty output.
    pub color: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            check_connectivity: false,
            color: true,
        }
    }
}

/// Command-line settings that take precedence over the config file.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    /// Only ever turns the check on.
    pub check_connectivity: bool,
    pub no_color: bool,
    /// The report goes to a file, which never gets color codes.
    pub writes_file: bool,
}

impl PlannerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        load_json(path)
    }

    /// Loads `path` when given, otherwise starts from the defaults, then
    /// applies `overrides`.
    pub fn resolve<P: AsRef<Path>>(path: Option<P>, overrides: Overrides) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.check_connectivity {
            self.check_connectivity = true;
        }
        if overrides.no_color || overrides.writes_file {
            self.color = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn data_file(name: &str) -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("data");
        path.push(name);
        path
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{ "format": "csv" }"#).unwrap();
        assert_eq!(
            config,
            PlannerConfig {
                format: OutputFormat::Csv,
                ..Default::default()
            }
        );
    }

    #[test]
    fn full_config() {
        let config: PlannerConfig = serde_json::from_str(
            r#"{ "format": "json", "check_connectivity": true, "color": false }"#,
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.check_connectivity);
        assert!(!config.color);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(serde_json::from_str::<PlannerConfig>(r#"{ "format": "xml" }"#).is_err());
    }

    #[test]
    fn loads_bundled_config() {
        let config = PlannerConfig::from_file(data_file("config.json")).unwrap();
        assert_eq!(
            config,
            PlannerConfig {
                format: OutputFormat::Pretty,
                check_connectivity: true,
                color: true,
            }
        );
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let err = PlannerConfig::from_file(data_file("no_such_config.json")).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("failed to open"));
        assert!(message.contains("no_such_config.json"));
    }

    #[test]
    fn non_json_config_fails_to_parse() {
        let err = PlannerConfig::from_file(data_file("sample.txt")).unwrap_err();
        assert!(format!("{err}").starts_with("failed to parse"));
        assert!(format!("{err}").contains("sample.txt"));
    }

    #[test]
    fn flags_take_precedence_over_file() {
        let overrides = Overrides {
            format: Some(OutputFormat::Json),
            no_color: true,
            ..Default::default()
        };
        let config = PlannerConfig::resolve(Some(data_file("config.json")), overrides).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
        // Not passing the flag keeps the file's value.
        assert!(config.check_connectivity);
    }

    #[test]
    fn writing_to_a_file_disables_color() {
        let overrides = Overrides {
            writes_file: true,
            ..Default::default()
        };
        let config = PlannerConfig::default().with_overrides(overrides);
        assert!(!config.color);
        assert_eq!(config.format, OutputFormat::Pretty);
    }

    #[test]
    fn connectivity_flag_turns_check_on() {
        let overrides = Overrides {
            check_connectivity: true,
            ..Default::default()
        };
        let config = PlannerConfig::resolve(None::<PathBuf>, overrides).unwrap();
        assert!(config.check_connectivity);
        assert!(config.color);
    }

    #[test]
    fn no_overrides_keep_defaults() {
        assert_eq!(
            PlannerConfig::resolve(None::<PathBuf>, Overrides::default()).unwrap(),
            PlannerConfig::default()
        );
    }
}
