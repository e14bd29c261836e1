//! Questionnaire-driven recommendation for the wizard view
//!
//! Two mutually exclusive decision modes, hardware taking precedence over
//! profile. With neither mode triggered the full catalog passes through.

use crate::model::{DistroRecord, Experience, UseCase};

/// One wizard submission.
///
/// `ram_gb` stays raw user text rather than a parsed number: presence and
/// parseability are distinct concerns. A present but unparseable value
/// still selects hardware mode while exerting no RAM constraint.
#[derive(Debug, Clone, Default)]
pub struct RecommendationCriteria {
    /// Free-text CPU description. Accepted as input, but the catalog holds
    /// no structured CPU data to compare against, so it never filters.
    pub cpu: Option<String>,
    /// Raw text from the RAM field, in GB
    pub ram_gb: Option<String>,
    pub experience: Option<Experience>,
    pub use_case: Option<UseCase>,
}

impl RecommendationCriteria {
    fn cpu_present(&self) -> bool {
        self.cpu.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    fn ram_present(&self) -> bool {
        self.ram_gb.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Whether hardware mode applies. Hardware fields take precedence:
    /// when this is true, profile fields are ignored entirely.
    pub fn hardware_mode(&self) -> bool {
        self.cpu_present() || self.ram_present()
    }

    /// The gate the presentation layer must check before calling
    /// [`recommend`]: hardware input, or a complete experience/use-case
    /// pair. A lone profile field does not satisfy it.
    pub fn satisfies_gate(&self) -> bool {
        self.hardware_mode() || (self.experience.is_some() && self.use_case.is_some())
    }
}

/// Leading-digits parse of the RAM text. Anything without leading digits
/// means "no RAM constraint"; a trailing unit suffix ("8 GB") is tolerated.
fn parse_ram_gb(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Map questionnaire answers to an ordered subset of the catalog.
///
/// Pure and deterministic; preserves catalog order; never fails. Malformed
/// numeric input degrades to an absent constraint.
pub fn recommend<'a>(
    records: &'a [DistroRecord],
    criteria: &RecommendationCriteria,
) -> Vec<&'a DistroRecord> {
    if criteria.hardware_mode() {
        let ram_cap = criteria.ram_gb.as_deref().and_then(parse_ram_gb);
        return records
            .iter()
            .filter(|record| {
                ram_cap.map_or(true, |cap| record.requirements_minimum.ram_gb <= cap)
            })
            .collect();
    }

    if criteria.experience.is_some() || criteria.use_case.is_some() {
        return records
            .iter()
            .filter(|record| {
                let matches_experience = criteria
                    .experience
                    .map_or(true, |experience| record.experience == experience);
                // A use case counts on either the dedicated field or a tag
                let matches_use_case = criteria.use_case.map_or(true, |use_case| {
                    record.use_case == use_case || record.has_tag(use_case.as_str())
                });
                matches_experience && matches_use_case
            })
            .collect();
    }

    records.iter().collect()
}
