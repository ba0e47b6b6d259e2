use serde::Serialize;

use super::domain::{LifecycleStage, Provider, ProviderId};
use super::engine::filters::{hidden_county_count, visible_counties};
use super::engine::ranking::tier_score;

/// Directory card rendered for each provider in a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCardView {
    pub id: ProviderId,
    pub name: String,
    pub city: String,
    pub counties: Vec<String>,
    pub hidden_county_count: usize,
    pub services: Vec<ServiceBadge>,
    pub accepting_new_patients: bool,
    pub tier_level: u8,
    pub score: u8,
    pub lifecycle: LifecycleStage,
    pub is_verified: bool,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceBadge {
    pub code: &'static str,
    pub label: &'static str,
}

impl From<&Provider> for ProviderCardView {
    fn from(provider: &Provider) -> Self {
        let mut counties: Vec<String> = visible_counties(provider)
            .into_iter()
            .map(str::to_string)
            .collect();
        counties.sort();

        Self {
            id: provider.id.clone(),
            name: provider.name.clone(),
            city: provider.city.clone(),
            counties,
            hidden_county_count: hidden_county_count(provider),
            services: provider
                .services_offered
                .iter()
                .map(|service| ServiceBadge {
                    code: service.code(),
                    label: service.label(),
                })
                .collect(),
            accepting_new_patients: provider.accepting_new_patients,
            tier_level: provider.tier_level,
            score: tier_score(provider),
            lifecycle: provider.lifecycle(),
            is_verified: provider.is_verified,
            is_featured: provider.is_featured,
            phone: provider.phone.clone(),
            website: provider.website.clone(),
        }
    }
}
