use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::Provider;

/// Admin transitions applied from the verification panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    Verify,
    Unverify,
    Feature,
    Unfeature,
    Deactivate,
}

impl AdminAction {
    pub const fn label(self) -> &'static str {
        match self {
            AdminAction::Verify => "verify",
            AdminAction::Unverify => "unverify",
            AdminAction::Feature => "feature",
            AdminAction::Unfeature => "unfeature",
            AdminAction::Deactivate => "deactivate",
        }
    }

    /// Apply the transition and its side effects on acceptance and tier.
    pub fn apply(self, provider: &mut Provider) {
        match self {
            AdminAction::Verify => {
                provider.is_verified = true;
                provider.accepting_new_patients = true;
            }
            AdminAction::Unverify => {
                provider.is_verified = false;
                provider.accepting_new_patients = false;
            }
            AdminAction::Feature => {
                provider.is_featured = true;
                provider.tier_level = 1;
            }
            AdminAction::Unfeature => {
                provider.is_featured = false;
                provider.tier_level = 0;
            }
            AdminAction::Deactivate => provider.is_active = false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown admin action '{0}'")]
pub struct UnknownAdminAction(pub String);

impl FromStr for AdminAction {
    type Err = UnknownAdminAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "verify" => Ok(AdminAction::Verify),
            "unverify" => Ok(AdminAction::Unverify),
            "feature" => Ok(AdminAction::Feature),
            "unfeature" => Ok(AdminAction::Unfeature),
            "deactivate" => Ok(AdminAction::Deactivate),
            _ => Err(UnknownAdminAction(value.to_string())),
        }
    }
}

/// Contact details supplied by an agency claiming its listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub contact_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimError {
    #[error("contact name is required to claim a listing")]
    MissingContactName,
    #[error("a contact email address is required to claim a listing")]
    MissingContactEmail,
}

impl ClaimRequest {
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.contact_name.trim().is_empty() {
            return Err(ClaimError::MissingContactName);
        }
        if !self.contact_email.contains('@') {
            return Err(ClaimError::MissingContactEmail);
        }
        Ok(())
    }

    /// Mark the provider claimed, keeping any contact details already on file.
    pub fn apply(&self, provider: &mut Provider) {
        provider.is_claimed = true;
        if provider.email.is_none() {
            provider.email = Some(self.contact_email.trim().to_string());
        }
        if provider.phone.is_none() {
            provider.phone = self.contact_phone.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::domain::ProviderId;

    fn provider() -> Provider {
        Provider::unclaimed(ProviderId("p-1".into()), "Sunrise Home Health", "Savannah")
    }

    #[test]
    fn verification_toggles_patient_acceptance() {
        let mut listing = provider();
        AdminAction::Verify.apply(&mut listing);
        assert!(listing.is_verified);
        assert!(listing.accepting_new_patients);

        AdminAction::Unverify.apply(&mut listing);
        assert!(!listing.is_verified);
        assert!(!listing.accepting_new_patients);
    }

    #[test]
    fn featuring_resets_tier_level() {
        let mut listing = provider();
        listing.tier_level = 3;
        AdminAction::Feature.apply(&mut listing);
        assert!(listing.is_featured);
        assert_eq!(listing.tier_level, 1);

        AdminAction::Unfeature.apply(&mut listing);
        assert!(!listing.is_featured);
        assert_eq!(listing.tier_level, 0);
    }

    #[test]
    fn feature_flag_is_orthogonal_to_verification() {
        let mut listing = provider();
        AdminAction::Verify.apply(&mut listing);
        AdminAction::Feature.apply(&mut listing);
        AdminAction::Unverify.apply(&mut listing);
        assert!(listing.is_featured);
        assert!(!listing.is_verified);
    }

    #[test]
    fn parses_actions_from_path_segments() {
        assert_eq!("Verify".parse::<AdminAction>(), Ok(AdminAction::Verify));
        assert!("promote".parse::<AdminAction>().is_err());
    }

    #[test]
    fn claim_keeps_existing_contact_details() {
        let mut listing = provider();
        listing.email = Some("office@sunrise.example".to_string());
        let claim = ClaimRequest {
            contact_name: "Lee Carter".to_string(),
            contact_email: "lee@sunrise.example".to_string(),
            contact_phone: Some("912-555-0100".to_string()),
        };
        assert!(claim.validate().is_ok());
        claim.apply(&mut listing);
        assert!(listing.is_claimed);
        assert_eq!(listing.email.as_deref(), Some("office@sunrise.example"));
        assert_eq!(listing.phone.as_deref(), Some("912-555-0100"));
    }
}
