//! Configuration loading and parsing

use anyhow::{Context, Result};
use patterns_core::{
    CounterConfig, DecoratorConfig, FactoryConfig, ObserverConfig, PatternKind, ShowcaseConfig,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration (loaded from a TOML file)
///
/// The pattern sections (`patterns`, `[observer]`, `[counter]`, `[factory]`,
/// `[decorator]`) live at the top level next to `[output]`.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub showcase: ShowcaseConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub summary: SummaryFormat,
    #[serde(default)]
    pub sink: SinkKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Txt,
    Json,
}

/// Where pattern output lines go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Plain lines on stdout
    #[default]
    Console,
    /// Info-level records through the logger
    Log,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    parse_config(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Parse configuration from TOML text
///
/// Sections are decoded one by one so a bad value is reported with the
/// section it belongs to; missing sections keep their defaults.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let table: toml::Table = content.parse()?;

    let patterns = match table.get("patterns") {
        Some(value) => value
            .clone()
            .try_into::<Vec<PatternKind>>()
            .context("Invalid `patterns` list")?,
        None => PatternKind::ALL.to_vec(),
    };

    Ok(AppConfig {
        showcase: ShowcaseConfig {
            patterns,
            observer: section::<ObserverConfig>(&table, "observer")?,
            counter: section::<CounterConfig>(&table, "counter")?,
            factory: section::<FactoryConfig>(&table, "factory")?,
            decorator: section::<DecoratorConfig>(&table, "decorator")?,
        },
        output: section::<OutputConfig>(&table, "output")?,
    })
}

fn section<T: DeserializeOwned + Default>(table: &toml::Table, name: &str) -> Result<T> {
    match table.get(name) {
        Some(value) => value
            .clone()
            .try_into()
            .with_context(|| format!("Invalid [{}] section", name)),
        None => Ok(T::default()),
    }
}
