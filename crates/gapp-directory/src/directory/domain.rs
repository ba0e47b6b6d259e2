use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for directory providers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProviderId(pub String);

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Care levels an agency can deliver under GAPP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "RN")]
    Rn,
    #[serde(rename = "LPN")]
    Lpn,
    #[serde(rename = "PCS")]
    Pcs,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [ServiceType::Rn, ServiceType::Lpn, ServiceType::Pcs];

    pub const fn code(self) -> &'static str {
        match self {
            ServiceType::Rn => "RN",
            ServiceType::Lpn => "LPN",
            ServiceType::Pcs => "PCS",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ServiceType::Rn => "Registered Nurse (RN)",
            ServiceType::Lpn => "Licensed Practical Nurse (LPN)",
            ServiceType::Pcs => "Personal Care Services (PCS)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service type '{0}' (expected RN, LPN, or PCS)")]
pub struct UnknownServiceType(pub String);

impl FromStr for ServiceType {
    type Err = UnknownServiceType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "RN" => Ok(ServiceType::Rn),
            "LPN" => Ok(ServiceType::Lpn),
            "PCS" => Ok(ServiceType::Pcs),
            _ => Err(UnknownServiceType(value.to_string())),
        }
    }
}

/// Service filter accepted by directory queries; `All` disables the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "RN")]
    Rn,
    #[serde(rename = "LPN")]
    Lpn,
    #[serde(rename = "PCS")]
    Pcs,
}

impl ServiceFilter {
    pub const fn service(self) -> Option<ServiceType> {
        match self {
            ServiceFilter::All => None,
            ServiceFilter::Rn => Some(ServiceType::Rn),
            ServiceFilter::Lpn => Some(ServiceType::Lpn),
            ServiceFilter::Pcs => Some(ServiceType::Pcs),
        }
    }
}

impl From<ServiceType> for ServiceFilter {
    fn from(value: ServiceType) -> Self {
        match value {
            ServiceType::Rn => ServiceFilter::Rn,
            ServiceType::Lpn => ServiceFilter::Lpn,
            ServiceType::Pcs => ServiceFilter::Pcs,
        }
    }
}

impl FromStr for ServiceFilter {
    type Err = UnknownServiceType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() || value.trim().eq_ignore_ascii_case("all") {
            return Ok(ServiceFilter::All);
        }
        value.parse::<ServiceType>().map(ServiceFilter::from)
    }
}

/// One care agency as the directory sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub counties_served: Vec<String>,
    #[serde(default)]
    pub services_offered: BTreeSet<ServiceType>,
    pub accepting_new_patients: bool,
    pub tier_level: u8,
    pub is_active: bool,
    pub is_claimed: bool,
    pub is_verified: bool,
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Provider {
    /// A fresh, unclaimed listing with no lifecycle flags set.
    pub fn unclaimed(id: ProviderId, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city: city.into(),
            counties_served: Vec::new(),
            services_offered: BTreeSet::new(),
            accepting_new_patients: false,
            tier_level: 0,
            is_active: true,
            is_claimed: false,
            is_verified: false,
            is_featured: false,
            phone: None,
            website: None,
            email: None,
        }
    }

    pub fn lifecycle(&self) -> LifecycleStage {
        if self.is_verified {
            LifecycleStage::Verified
        } else if self.is_claimed {
            LifecycleStage::Claimed
        } else {
            LifecycleStage::Unclaimed
        }
    }
}

/// Coarse lifecycle position derived from the independent provider flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    Unclaimed,
    Claimed,
    Verified,
}

impl LifecycleStage {
    pub const fn label(self) -> &'static str {
        match self {
            LifecycleStage::Unclaimed => "unclaimed",
            LifecycleStage::Claimed => "claimed",
            LifecycleStage::Verified => "verified",
        }
    }
}
