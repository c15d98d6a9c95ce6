use serde::Deserialize;

use crate::error::ValidationError;
use crate::reference;
use crate::timeline::Timeline;

/// Every generated case is set in India.
pub const COUNTRY: &str = "India";

/// Home screen fields exactly as the browser submitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomeForm {
    pub region: String,
    pub locality: String,
    pub category: String,
    pub timeline: String,
}

/// A validated request for a case scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRequest {
    pub category: String,
    pub region: String,
    pub locality: String,
    pub country: &'static str,
    pub timeline: Timeline,
}

impl CaseRequest {
    /// Validate the home form. The date is checked first, then required
    /// fields, then membership in the reference tables.
    pub fn from_form(form: &HomeForm) -> Result<Self, ValidationError> {
        let timeline = Timeline::parse(&form.timeline)?;

        let region = form.region.trim();
        let locality = form.locality.trim();
        let category = form.category.trim();
        if region.is_empty() || locality.is_empty() || category.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        if reference::find_region(region).is_none() {
            return Err(ValidationError::UnknownRegion(region.to_string()));
        }
        if !reference::is_locality_of(region, locality) {
            return Err(ValidationError::LocalityNotInRegion {
                region: region.to_string(),
                locality: locality.to_string(),
            });
        }
        if !reference::is_category(category) {
            return Err(ValidationError::UnknownCategory(category.to_string()));
        }

        Ok(Self {
            category: category.to_string(),
            region: region.to_string(),
            locality: locality.to_string(),
            country: COUNTRY,
            timeline,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolutionForm {
    pub solution: String,
}

/// Reject blank solutions. Returns the text with surrounding whitespace removed.
pub fn validate_solution(solution: &str) -> Result<&str, ValidationError> {
    let trimmed = solution.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptySolution)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kerala_form() -> HomeForm {
        HomeForm {
            region: "Kerala".to_string(),
            locality: "Kochi".to_string(),
            category: "Consumer protection and unfair trade practices".to_string(),
            timeline: "2024-05-01".to_string(),
        }
    }

    #[test]
    fn valid_form_becomes_request() {
        let request = CaseRequest::from_form(&kerala_form()).unwrap();
        assert_eq!(request.region, "Kerala");
        assert_eq!(request.locality, "Kochi");
        assert_eq!(request.category, "Consumer protection and unfair trade practices");
        assert_eq!(request.country, "India");
        assert_eq!(request.timeline.to_string(), "2024-05-01");
    }

    #[test]
    fn bad_date_is_reported_before_missing_fields() {
        let form = HomeForm {
            timeline: "05/01/2024".to_string(),
            ..HomeForm::default()
        };
        assert_eq!(CaseRequest::from_form(&form), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn empty_form_is_a_date_error() {
        assert_eq!(
            CaseRequest::from_form(&HomeForm::default()),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn blank_fields_are_rejected() {
        for blank in ["region", "locality", "category"] {
            let mut form = kerala_form();
            match blank {
                "region" => form.region = "  ".to_string(),
                "locality" => form.locality = String::new(),
                _ => form.category = String::new(),
            }
            assert_eq!(
                CaseRequest::from_form(&form),
                Err(ValidationError::MissingFields),
                "blank {blank}"
            );
        }
    }

    #[test]
    fn locality_must_belong_to_region() {
        let form = HomeForm {
            locality: "Mumbai".to_string(),
            ..kerala_form()
        };
        assert_eq!(
            CaseRequest::from_form(&form),
            Err(ValidationError::LocalityNotInRegion {
                region: "Kerala".to_string(),
                locality: "Mumbai".to_string(),
            })
        );
    }

    #[test]
    fn unknown_region_and_category_are_rejected() {
        let form = HomeForm {
            region: "Atlantis".to_string(),
            ..kerala_form()
        };
        assert!(matches!(
            CaseRequest::from_form(&form),
            Err(ValidationError::UnknownRegion(_))
        ));

        let form = HomeForm {
            category: "Space law".to_string(),
            ..kerala_form()
        };
        assert!(matches!(
            CaseRequest::from_form(&form),
            Err(ValidationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn solution_must_not_be_blank() {
        assert_eq!(validate_solution(""), Err(ValidationError::EmptySolution));
        assert_eq!(validate_solution(" \n\t"), Err(ValidationError::EmptySolution));
        assert_eq!(validate_solution("  File a complaint.  "), Ok("File a complaint."));
    }
}
