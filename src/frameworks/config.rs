use crate::domain::MatchmakingError;
use crate::interface_adapters::resources::{StaticResourceMapping, load_resource_mapping};
use crate::use_cases::request_match::MATCHMAKING_RESOURCE_NAME;
use serde::Deserialize;
use std::{env, path::PathBuf};

// Runtime settings: optional TOML file first, then env var overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Path to the AWS resource mapping JSON document.
    pub resource_mapping: Option<PathBuf>,
    // Overrides the mapping document's region.
    pub region: Option<String>,
    pub resource_name: String,
    // Direct resource id; takes precedence over the mapping document.
    pub resource_id: Option<String>,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resource_mapping: None,
            region: None,
            resource_name: MATCHMAKING_RESOURCE_NAME.to_string(),
            resource_id: None,
            port: 3004,
        }
    }
}

impl Settings {
    pub fn from_toml(document: &str) -> Result<Self, MatchmakingError> {
        toml::from_str(document).map_err(|error| {
            MatchmakingError::configuration(format!("invalid settings file: {error}"))
        })
    }

    // Apply overrides from a key lookup (the process env in production).
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup("MATCHMAKING_RESOURCE_MAPPING") {
            self.resource_mapping = Some(PathBuf::from(path));
        }
        if let Some(region) = lookup("MATCHMAKING_REGION") {
            self.region = Some(region);
        }
        if let Some(name) = lookup("MATCHMAKING_RESOURCE_NAME") {
            self.resource_name = name;
        }
        if let Some(id) = lookup("MATCHMAKING_RESOURCE_ID") {
            self.resource_id = Some(id);
        }
        if let Some(port) = lookup("MATCHMAKING_PORT").and_then(|v| v.parse().ok()) {
            self.port = port;
        }
        self
    }

    // Resolve the resource mapping the initiator will query.
    pub fn resource_mapping(&self) -> Result<StaticResourceMapping, MatchmakingError> {
        let mut mapping = match &self.resource_mapping {
            Some(path) => load_resource_mapping(path)?,
            None => StaticResourceMapping::default(),
        };
        if let Some(region) = &self.region {
            mapping = mapping.with_region(region.clone());
        }
        if let Some(id) = &self.resource_id {
            mapping = mapping.with_resource(self.resource_name.clone(), id.clone());
        }
        Ok(mapping)
    }
}

pub fn load() -> Result<Settings, MatchmakingError> {
    let settings = match env::var("MATCHMAKING_CONFIG") {
        Ok(path) => {
            let document = std::fs::read_to_string(&path).map_err(|error| {
                MatchmakingError::configuration(format!(
                    "failed to read settings file {path}: {error}"
                ))
            })?;
            Settings::from_toml(&document)?
        }
        Err(_) => Settings::default(),
    };

    Ok(settings.apply_overrides(|key| env::var(key).ok()))
}
