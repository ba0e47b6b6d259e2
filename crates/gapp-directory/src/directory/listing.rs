use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Provider, ProviderId, ServiceType};

/// Identifier wrapper for listing requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingRequestId(pub String);

impl fmt::Display for ListingRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl ListingRequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ListingRequestStatus::Pending => "pending",
            ListingRequestStatus::Approved => "approved",
            ListingRequestStatus::Rejected => "rejected",
        }
    }
}

/// Public form asking for an agency to be added to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSubmission {
    pub provider_name: String,
    pub city: String,
    pub counties_served: Vec<String>,
    #[serde(default)]
    pub services_offered: BTreeSet<ServiceType>,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("provider name is required")]
    MissingProviderName,
    #[error("a contact email address is required")]
    MissingContactEmail,
    #[error("at least one county served is required")]
    MissingCounties,
}

impl ListingSubmission {
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.provider_name.trim().is_empty() {
            return Err(SubmissionError::MissingProviderName);
        }
        if !self.contact_email.contains('@') {
            return Err(SubmissionError::MissingContactEmail);
        }
        if self.counties_served.iter().all(|county| county.trim().is_empty()) {
            return Err(SubmissionError::MissingCounties);
        }
        Ok(())
    }
}

/// A submission plus its review trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRequest {
    pub id: ListingRequestId,
    pub submission: ListingSubmission,
    pub status: ListingRequestStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<ProviderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl ListingRequest {
    pub fn pending(
        id: ListingRequestId,
        submission: ListingSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            submission,
            status: ListingRequestStatus::Pending,
            submitted_at,
            reviewed_at: None,
            provider_id: None,
            rejection_reason: None,
        }
    }

    /// Provider created on approval: claimed by the requester but not yet verified.
    pub fn to_provider(&self, id: ProviderId) -> Provider {
        let submission = &self.submission;
        let mut provider = Provider::unclaimed(
            id,
            submission.provider_name.trim(),
            submission.city.trim(),
        );
        provider.counties_served = submission
            .counties_served
            .iter()
            .map(|county| county.trim().to_string())
            .filter(|county| !county.is_empty())
            .collect();
        provider.services_offered = submission.services_offered.clone();
        provider.is_claimed = true;
        provider.phone = submission.contact_phone.clone();
        provider.website = submission.website.clone();
        provider.email = Some(submission.contact_email.trim().to_string());
        provider
    }
}
