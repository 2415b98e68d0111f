use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ViewError};
use crate::to::Service;

#[derive(Debug, Clone)]
pub struct ServiceListing {
    pub services: Vec<Service>,
    pub raw: Option<String>,
}

/// Where service descriptors come from.
pub trait ServiceSource {
    fn list_services(&self) -> Result<ServiceListing>;
}

/// Reads services from a JSON file: either a bare array or `{"services": [...]}`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ServicesDocument {
    List(Vec<Service>),
    Wrapped { services: Vec<Service> },
}

pub fn parse_services(text: &str, context: &str) -> Result<Vec<Service>> {
    let doc: ServicesDocument =
        serde_json::from_str(text).map_err(|e| ViewError::json(context, e))?;
    Ok(match doc {
        ServicesDocument::List(services) => services,
        ServicesDocument::Wrapped { services } => services,
    })
}

impl ServiceSource for JsonFileSource {
    fn list_services(&self) -> Result<ServiceListing> {
        let raw = fs::read_to_string(&self.path).map_err(|e| ViewError::io(&self.path, e))?;
        let services = parse_services(&raw, &self.path.display().to_string())?;
        debug!(path = %self.path.display(), count = services.len(), "loaded services");
        Ok(ServiceListing {
            services,
            raw: Some(raw),
        })
    }
}

/// Fixed in-memory list, handy when services were fetched elsewhere.
pub struct StaticSource {
    services: Vec<Service>,
}

impl StaticSource {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }
}

impl ServiceSource for StaticSource {
    fn list_services(&self) -> Result<ServiceListing> {
        Ok(ServiceListing {
            services: self.services.clone(),
            raw: None,
        })
    }
}

pub fn source(path: &Path) -> Box<dyn ServiceSource> {
    Box::new(JsonFileSource::new(path))
}
