use crate::features::asteroids::models::Asteroid;
use crate::shared::constants::RISK_FILTER_ALL;

/// Derive the filtered view of the loaded asteroid sequence.
///
/// Both predicates must hold:
/// - category: `risk` is the `"all"` sentinel, or the record's risk level
///   equals it exactly. The comparison is case-sensitive, unlike the
///   alert-severity comparisons elsewhere in the system; that inconsistency
///   is inherited behavior and kept as-is.
/// - text: `query` is empty, or its lowercase form is a substring of the
///   lowercase name or designation. An absent field is a non-match for that
///   field only.
///
/// Pure and re-computed on every change; the working set is at most a few
/// pages of records, so no indexing is needed.
pub fn filter_asteroids(asteroids: &[Asteroid], risk: &str, query: &str) -> Vec<Asteroid> {
    let query_lower = query.to_lowercase();

    asteroids
        .iter()
        .filter(|a| risk_matches(a, risk) && text_matches(a, &query_lower))
        .cloned()
        .collect()
}

fn risk_matches(asteroid: &Asteroid, risk: &str) -> bool {
    risk == RISK_FILTER_ALL || asteroid.risk_is(risk)
}

fn text_matches(asteroid: &Asteroid, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }

    let field_matches =
        |field: &Option<String>| matches!(field, Some(v) if v.to_lowercase().contains(query_lower));

    field_matches(&asteroid.name) || field_matches(&asteroid.designation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{RISK_HIGH, RISK_LOW, RISK_MEDIUM};

    fn asteroid(id: &str, name: &str, designation: Option<&str>, risk: Option<&str>) -> Asteroid {
        Asteroid {
            id: id.to_string(),
            created_date: None,
            updated_date: None,
            name: Some(name.to_string()),
            designation: designation.map(String::from),
            absolute_magnitude: None,
            estimated_diameter_min: None,
            estimated_diameter_max: None,
            relative_velocity: None,
            miss_distance: None,
            close_approach_date: None,
            close_approach_time: None,
            risk_level: risk.map(String::from),
            is_potentially_hazardous: None,
        }
    }

    fn names(filtered: &[Asteroid]) -> Vec<&str> {
        filtered.iter().filter_map(|a| a.name.as_deref()).collect()
    }

    #[test]
    fn test_category_filter_selects_exact_risk() {
        let loaded = vec![
            asteroid("1", "Apophis", Some("99942"), Some(RISK_HIGH)),
            asteroid("2", "Bennu", Some("101955"), Some(RISK_LOW)),
        ];

        let filtered = filter_asteroids(&loaded, RISK_HIGH, "");
        assert_eq!(names(&filtered), vec!["Apophis"]);
    }

    #[test]
    fn test_query_matches_name_substring_case_insensitive() {
        let loaded = vec![
            asteroid("1", "Apophis", Some("99942"), Some(RISK_HIGH)),
            asteroid("2", "Bennu", Some("101955"), Some(RISK_LOW)),
        ];

        let filtered = filter_asteroids(&loaded, RISK_FILTER_ALL, "ben");
        assert_eq!(names(&filtered), vec!["Bennu"]);
    }

    #[test]
    fn test_query_matches_designation_when_name_misses() {
        let loaded = vec![
            asteroid("1", "Apophis", Some("99942 MN4"), Some(RISK_HIGH)),
            asteroid("2", "Bennu", None, Some(RISK_LOW)),
        ];

        let filtered = filter_asteroids(&loaded, RISK_FILTER_ALL, "mn4");
        assert_eq!(names(&filtered), vec!["Apophis"]);
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let loaded = vec![
            asteroid("1", "Apophis", None, Some(RISK_HIGH)),
            asteroid("2", "Apollo", None, Some(RISK_MEDIUM)),
            asteroid("3", "Bennu", None, Some(RISK_HIGH)),
        ];

        let filtered = filter_asteroids(&loaded, RISK_HIGH, "ap");
        assert_eq!(names(&filtered), vec!["Apophis"]);
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let loaded = vec![
            asteroid("1", "Apophis", None, Some(RISK_HIGH)),
            asteroid("2", "Bennu", None, None),
            asteroid("3", "Ryugu", None, Some(RISK_LOW)),
        ];

        let filtered = filter_asteroids(&loaded, RISK_FILTER_ALL, "");
        assert_eq!(names(&filtered), vec!["Apophis", "Bennu", "Ryugu"]);
    }

    #[test]
    fn test_risk_comparison_is_case_sensitive() {
        let loaded = vec![asteroid("1", "Apophis", None, Some(RISK_HIGH))];

        // "high" != "High"; lowercase selection matches nothing.
        let filtered = filter_asteroids(&loaded, "high", "");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_absent_risk_level_never_matches_a_category() {
        let loaded = vec![asteroid("1", "Unlabeled", None, None)];

        assert!(filter_asteroids(&loaded, RISK_LOW, "").is_empty());
        assert_eq!(filter_asteroids(&loaded, RISK_FILTER_ALL, "").len(), 1);
    }
}
