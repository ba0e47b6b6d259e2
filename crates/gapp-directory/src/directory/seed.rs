//! CSV import for provider seeds exported from the listings table.
//!
//! Column names follow the persistence schema (`counties_served`, `is_verified`, ...).
//! List columns are `;`-separated.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Provider, ProviderId, ServiceType, UnknownServiceType};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to open provider seed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse provider seed: {0}")]
    Csv(#[from] csv::Error),
    #[error("provider seed row {row}: {source}")]
    Service {
        row: usize,
        #[source]
        source: UnknownServiceType,
    },
}

pub fn load_providers_from_path(path: impl AsRef<Path>) -> Result<Vec<Provider>, SeedError> {
    let file = File::open(path)?;
    load_providers_from_reader(file)
}

pub fn load_providers_from_reader<R: Read>(reader: R) -> Result<Vec<Provider>, SeedError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut providers = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProviderRow>().enumerate() {
        let row = record?;
        let provider = row
            .into_provider()
            .map_err(|source| SeedError::Service {
                row: index + 1,
                source,
            })?;
        providers.push(provider);
    }

    Ok(providers)
}

#[derive(Debug, Deserialize)]
struct ProviderRow {
    id: String,
    name: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    counties_served: String,
    #[serde(default)]
    services_offered: String,
    #[serde(default)]
    accepting_new_patients: bool,
    #[serde(default)]
    tier_level: u8,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    is_claimed: bool,
    #[serde(default)]
    is_verified: bool,
    #[serde(default)]
    is_featured: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
}

fn default_active() -> bool {
    true
}

impl ProviderRow {
    fn into_provider(self) -> Result<Provider, UnknownServiceType> {
        let services_offered = split_list(&self.services_offered)
            .map(str::parse::<ServiceType>)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Provider {
            id: ProviderId(self.id),
            name: self.name,
            city: self.city,
            counties_served: split_list(&self.counties_served)
                .map(str::to_string)
                .collect(),
            services_offered,
            accepting_new_patients: self.accepting_new_patients,
            tier_level: self.tier_level,
            is_active: self.is_active,
            is_claimed: self.is_claimed,
            is_verified: self.is_verified,
            is_featured: self.is_featured,
            phone: self.phone,
            website: self.website,
            email: self.email,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';')
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
