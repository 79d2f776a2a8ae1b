use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::{MatchmakingError, ResourceMapping};

// In-memory resource mapping: a region plus logical name -> resource id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticResourceMapping {
    region: String,
    resources: HashMap<String, String>,
}

impl StaticResourceMapping {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            resources: HashMap::new(),
        }
    }

    pub fn with_resource(
        mut self,
        logical_name: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        self.resources.insert(logical_name.into(), resource_id.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

impl ResourceMapping for StaticResourceMapping {
    fn default_region(&self) -> String {
        self.region.clone()
    }

    fn resource_name_id(&self, logical_name: &str) -> String {
        self.resources.get(logical_name).cloned().unwrap_or_default()
    }
}

// Resource mapping document produced by the game's AWS deployment tooling.
#[derive(Debug, Deserialize)]
struct ResourceMappingDocument {
    #[serde(rename = "Region", default)]
    region: String,
    #[serde(rename = "AWSResourceMappings", default)]
    resources: HashMap<String, ResourceEntry>,
}

#[derive(Debug, Deserialize)]
struct ResourceEntry {
    #[serde(rename = "Name/ID")]
    name_id: String,
}

pub fn parse_resource_mapping(document: &str) -> Result<StaticResourceMapping, MatchmakingError> {
    let document: ResourceMappingDocument = serde_json::from_str(document).map_err(|error| {
        MatchmakingError::configuration(format!("invalid resource mapping: {error}"))
    })?;

    Ok(StaticResourceMapping {
        region: document.region,
        resources: document
            .resources
            .into_iter()
            .map(|(logical_name, entry)| (logical_name, entry.name_id))
            .collect(),
    })
}

pub fn load_resource_mapping(path: &Path) -> Result<StaticResourceMapping, MatchmakingError> {
    let document = std::fs::read_to_string(path).map_err(|error| {
        MatchmakingError::configuration(format!(
            "failed to read resource mapping {}: {error}",
            path.display()
        ))
    })?;
    parse_resource_mapping(&document)
}
