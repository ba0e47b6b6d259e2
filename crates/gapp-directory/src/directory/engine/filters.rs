use super::super::domain::{Provider, ServiceFilter};

/// Counties an unverified listing is discoverable under.
pub const FREE_TIER_COUNTY_CAP: usize = 5;

/// Counties a provider can be found under. Unverified listings only surface their
/// alphabetically-first few counties.
pub fn visible_counties(provider: &Provider) -> Vec<&str> {
    let mut counties: Vec<&str> = provider
        .counties_served
        .iter()
        .map(String::as_str)
        .collect();

    if !provider.is_verified {
        counties.sort_unstable();
        counties.truncate(FREE_TIER_COUNTY_CAP);
    }

    counties
}

/// Number of served counties hidden by the free-tier cap.
pub fn hidden_county_count(provider: &Provider) -> usize {
    if provider.is_verified {
        0
    } else {
        provider
            .counties_served
            .len()
            .saturating_sub(FREE_TIER_COUNTY_CAP)
    }
}

/// Trimmed, ASCII case-insensitive match against the visible counties only.
pub(crate) fn matches_county(provider: &Provider, county: Option<&str>) -> bool {
    let Some(county) = county.map(str::trim).filter(|value| !value.is_empty()) else {
        return true;
    };

    visible_counties(provider)
        .iter()
        .any(|visible| visible.trim().eq_ignore_ascii_case(county))
}

pub(crate) fn matches_service(provider: &Provider, service: ServiceFilter) -> bool {
    match service.service() {
        None => true,
        Some(service) => provider.services_offered.contains(&service),
    }
}

pub(crate) fn matches_search(provider: &Provider, needle: Option<&str>) -> bool {
    let Some(needle) = needle.map(str::trim).filter(|value| !value.is_empty()) else {
        return true;
    };

    let needle = needle.to_lowercase();
    provider.name.to_lowercase().contains(&needle) || provider.city.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::domain::{ProviderId, ServiceType};

    fn provider(counties: &[&str], verified: bool) -> Provider {
        let mut provider = Provider::unclaimed(ProviderId("p".into()), "Magnolia Nursing", "Albany");
        provider.counties_served = counties.iter().map(|c| c.to_string()).collect();
        provider.is_verified = verified;
        provider
    }

    #[test]
    fn unverified_visibility_is_sorted_and_capped() {
        let listing = provider(
            &["Worth", "Lee", "Dougherty", "Terrell", "Baker", "Mitchell", "Calhoun"],
            false,
        );
        assert_eq!(
            visible_counties(&listing),
            vec!["Baker", "Calhoun", "Dougherty", "Lee", "Mitchell"]
        );
        assert_eq!(hidden_county_count(&listing), 2);
    }

    #[test]
    fn verified_visibility_keeps_every_county() {
        let listing = provider(
            &["Worth", "Lee", "Dougherty", "Terrell", "Baker", "Mitchell"],
            true,
        );
        assert_eq!(visible_counties(&listing).len(), 6);
        assert_eq!(hidden_county_count(&listing), 0);
        assert!(matches_county(&listing, Some("Worth")));
    }

    #[test]
    fn missing_sets_never_match_active_filters() {
        let listing = provider(&[], false);
        assert!(!matches_county(&listing, Some("Fulton")));
        assert!(!matches_service(&listing, ServiceFilter::Rn));
        assert!(matches_county(&listing, None));
        assert!(matches_service(&listing, ServiceFilter::All));
    }

    #[test]
    fn service_filter_checks_membership() {
        let mut listing = provider(&["Fulton"], false);
        listing.services_offered.insert(ServiceType::Lpn);
        assert!(matches_service(&listing, ServiceFilter::Lpn));
        assert!(!matches_service(&listing, ServiceFilter::Pcs));
    }

    #[test]
    fn blank_search_matches_everything() {
        let listing = provider(&["Fulton"], false);
        assert!(matches_search(&listing, Some("   ")));
        assert!(matches_search(&listing, Some("ALBA")));
        assert!(!matches_search(&listing, Some("savannah")));
    }

    #[test]
    fn county_filter_ignores_case_and_padding() {
        let listing = provider(&["Fulton", "DeKalb"], false);
        assert!(matches_county(&listing, Some("  fulton ")));
        assert!(matches_county(&listing, Some("DEKALB")));
        assert!(!matches_county(&listing, Some("Fult")));
    }

    #[test]
    fn county_filter_ignores_hidden_counties() {
        let listing = provider(
            &["Worth", "Lee", "Dougherty", "Terrell", "Baker", "Mitchell"],
            false,
        );
        assert!(!matches_county(&listing, Some("worth")));
        assert!(matches_county(&listing, Some("mitchell")));
    }
}
