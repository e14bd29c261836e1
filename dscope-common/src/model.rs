//! Catalog record types
//!
//! Value types for the distribution catalog. Wire names (`req`, `req_rec`,
//! `longDescription`, `useCase`, `"Red Hat"`) follow the bundled dataset
//! format in `data/distros.json`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Distribution family a record derives from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Base {
    Debian,
    Ubuntu,
    Arch,
    #[serde(rename = "Red Hat")]
    RedHat,
    Independent,
}

impl Base {
    /// Wire/display form, matching the dataset values exactly
    pub fn as_str(&self) -> &'static str {
        match self {
            Base::Debian => "Debian",
            Base::Ubuntu => "Ubuntu",
            Base::Arch => "Arch",
            Base::RedHat => "Red Hat",
            Base::Independent => "Independent",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Base {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Debian" => Ok(Base::Debian),
            "Ubuntu" => Ok(Base::Ubuntu),
            "Arch" => Ok(Base::Arch),
            "Red Hat" => Ok(Base::RedHat),
            "Independent" => Ok(Base::Independent),
            other => Err(Error::InvalidInput(format!("unknown base: {}", other))),
        }
    }
}

/// User experience level a distribution targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Experience {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Experience::Beginner),
            "intermediate" => Ok(Experience::Intermediate),
            "advanced" => Ok(Experience::Advanced),
            other => Err(Error::InvalidInput(format!("unknown experience: {}", other))),
        }
    }
}

/// Primary use case a distribution is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCase {
    General,
    Development,
    Gaming,
    Privacy,
    Server,
    Lightweight,
}

impl UseCase {
    /// Lowercase form, also used for membership tests against record tags
    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::General => "general",
            UseCase::Development => "development",
            UseCase::Gaming => "gaming",
            UseCase::Privacy => "privacy",
            UseCase::Server => "server",
            UseCase::Lightweight => "lightweight",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(UseCase::General),
            "development" => Ok(UseCase::Development),
            "gaming" => Ok(UseCase::Gaming),
            "privacy" => Ok(UseCase::Privacy),
            "server" => Ok(UseCase::Server),
            "lightweight" => Ok(UseCase::Lightweight),
            other => Err(Error::InvalidInput(format!("unknown use case: {}", other))),
        }
    }
}

/// Hardware requirements (minimum or recommended)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirements {
    /// Free-text CPU description, not comparable programmatically
    pub cpu: String,
    /// Required RAM in GB
    #[serde(rename = "ram")]
    pub ram_gb: u32,
    /// Required storage in GB
    #[serde(rename = "storage")]
    pub storage_gb: u32,
}

/// External links for a distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    pub homepage: String,
    pub download: String,
    pub documentation: String,
}

/// One distribution in the catalog. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistroRecord {
    /// Unique stable identifier (slug), never reused
    pub id: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    #[serde(rename = "longDescription")]
    pub long_description: String,
    /// Lowercase labels; membership is the semantic operation
    pub tags: Vec<String>,
    /// Minimum hardware requirements
    #[serde(rename = "req")]
    pub requirements_minimum: Requirements,
    /// Recommended hardware requirements, when the project publishes them
    #[serde(rename = "req_rec", skip_serializing_if = "Option::is_none")]
    pub requirements_recommended: Option<Requirements>,
    pub links: Links,
    pub base: Base,
    pub experience: Experience,
    #[serde(rename = "useCase")]
    pub use_case: UseCase,
}

impl DistroRecord {
    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_round_trips_through_display() {
        for base in [
            Base::Debian,
            Base::Ubuntu,
            Base::Arch,
            Base::RedHat,
            Base::Independent,
        ] {
            assert_eq!(base.to_string().parse::<Base>().unwrap(), base);
        }
    }

    #[test]
    fn red_hat_wire_form_has_space() {
        assert_eq!(serde_json::to_string(&Base::RedHat).unwrap(), "\"Red Hat\"");
        assert_eq!(
            serde_json::from_str::<Base>("\"Red Hat\"").unwrap(),
            Base::RedHat
        );
    }

    #[test]
    fn experience_and_use_case_are_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&Experience::Beginner).unwrap(),
            "\"beginner\""
        );
        assert_eq!(serde_json::to_string(&UseCase::Gaming).unwrap(), "\"gaming\"");
        assert_eq!(
            "lightweight".parse::<UseCase>().unwrap(),
            UseCase::Lightweight
        );
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        assert!("Slackware".parse::<Base>().is_err());
        assert!("expert".parse::<Experience>().is_err());
        assert!("multimedia".parse::<UseCase>().is_err());
    }
}
