//! Free-text / tag / base filtering for the explorer view

use crate::model::{Base, DistroRecord};

/// One explorer query. An empty search string and absent tag/base leave
/// that dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name and description
    pub search: String,
    /// Exact, case-sensitive tag membership
    pub tag: Option<String>,
    pub base: Option<Base>,
}

/// Stable filter over the catalog: keeps input order, matches with a
/// logical AND across the three dimensions. An empty result is an
/// ordinary result, not an error.
pub fn filter<'a>(records: &'a [DistroRecord], criteria: &FilterCriteria) -> Vec<&'a DistroRecord> {
    let needle = criteria.search.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let matches_search = needle.is_empty()
                || record.name.to_lowercase().contains(&needle)
                || record.description.to_lowercase().contains(&needle);
            let matches_tag = criteria
                .tag
                .as_deref()
                .map_or(true, |tag| record.has_tag(tag));
            let matches_base = criteria.base.map_or(true, |base| record.base == base);

            matches_search && matches_tag && matches_base
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    #[test]
    fn empty_criteria_is_an_order_preserving_identity() {
        let catalog = catalog();
        let result = filter(catalog.records(), &FilterCriteria::default());
        assert_eq!(result.len(), catalog.len());
        for (kept, original) in result.iter().zip(catalog.records()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let catalog = catalog();

        let by_name = filter(
            catalog.records(),
            &FilterCriteria {
                search: "ARCH".to_string(),
                ..Default::default()
            },
        );
        assert!(by_name.iter().any(|r| r.id == "arch"));

        // "rolling" appears only in descriptions, not in any name
        let by_description = filter(
            catalog.records(),
            &FilterCriteria {
                search: "Rolling-Release".to_string(),
                ..Default::default()
            },
        );
        assert!(by_description.iter().any(|r| r.id == "arch"));
    }

    #[test]
    fn tag_membership_is_exact_and_case_sensitive() {
        let catalog = catalog();

        let gaming = filter(
            catalog.records(),
            &FilterCriteria {
                tag: Some("gaming".to_string()),
                ..Default::default()
            },
        );
        assert!(gaming.iter().all(|r| r.has_tag("gaming")));
        assert!(!gaming.is_empty());

        let upper = filter(
            catalog.records(),
            &FilterCriteria {
                tag: Some("GAMING".to_string()),
                ..Default::default()
            },
        );
        assert!(upper.is_empty());
    }

    #[test]
    fn dimensions_combine_with_and() {
        let catalog = catalog();
        let result = filter(
            catalog.records(),
            &FilterCriteria {
                search: "linux".to_string(),
                tag: Some("server".to_string()),
                base: Some(Base::Independent),
            },
        );
        for record in &result {
            let text_match = record.name.to_lowercase().contains("linux")
                || record.description.to_lowercase().contains("linux");
            assert!(text_match);
            assert!(record.has_tag("server"));
            assert_eq!(record.base, Base::Independent);
        }
        assert!(result.iter().any(|r| r.id == "alpine"));
    }

    #[test]
    fn no_match_yields_an_empty_result() {
        let catalog = catalog();
        let result = filter(
            catalog.records(),
            &FilterCriteria {
                search: "plan 9 from bell labs".to_string(),
                ..Default::default()
            },
        );
        assert!(result.is_empty());
    }

    #[test]
    fn result_is_a_subset_in_catalog_order() {
        let catalog = catalog();
        let result = filter(
            catalog.records(),
            &FilterCriteria {
                base: Some(Base::Ubuntu),
                ..Default::default()
            },
        );
        let catalog_positions: Vec<usize> = result
            .iter()
            .map(|r| {
                catalog
                    .records()
                    .iter()
                    .position(|c| c.id == r.id)
                    .expect("filter must not fabricate records")
            })
            .collect();
        assert!(catalog_positions.windows(2).all(|w| w[0] < w[1]));
    }
}
