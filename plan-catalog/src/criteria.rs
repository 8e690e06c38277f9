use serde::{Deserialize, Serialize};

pub const AGE_GROUPS: [&str; 5] = ["18-25", "26-35", "36-45", "46-60", "61+"];
pub const TOBACCO_ANSWERS: [&str; 3] = ["No", "Yes", "Prefer not to say"];
pub const PLAN_TYPES: [&str; 3] = ["Individual", "Family", "Child-only"];
pub const STATES: [&str; 10] = ["CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI"];
pub const COVERAGE_NEEDS: [&str; 4] = ["Wellness", "Maternity", "Mental Health", "Dental"];

/// The plan-finder form, one field per control.
///
/// `age_group`, `tobacco` and `plan_type` are required; `state` and `needs`
/// are optional. Empty string means "not selected". The struct serializes
/// camelCase so it matches the payload the eventual matching backend expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub age_group: String,
    pub tobacco: String,
    pub plan_type: String,
    pub state: String,
    pub needs: Vec<String>,
}

impl SearchCriteria {
    /// Add `need` if it is not selected, remove it if it is.
    pub fn toggle_need(&mut self, need: &str) {
        if let Some(pos) = self.needs.iter().position(|n| n == need) {
            self.needs.remove(pos);
        } else {
            self.needs.push(need.to_string());
        }
    }
}

/// Required-field check gating form submission.
pub fn validate(criteria: &SearchCriteria) -> Result<(), String> {
    if criteria.age_group.trim().is_empty() {
        return Err("age group is required".into());
    }
    if criteria.tobacco.trim().is_empty() {
        return Err("tobacco answer is required".into());
    }
    if criteria.plan_type.trim().is_empty() {
        return Err("plan type is required".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SearchCriteria {
        SearchCriteria {
            age_group: "26-35".into(),
            tobacco: "No".into(),
            plan_type: "Individual".into(),
            state: String::new(),
            needs: vec!["Wellness".into()],
        }
    }

    #[test]
    fn validates_with_required_fields_filled() {
        assert!(validate(&filled()).is_ok());
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let mut c = filled();
        c.state = String::new();
        c.needs.clear();
        assert!(validate(&c).is_ok());
    }

    #[test]
    fn rejects_each_missing_required_field() {
        for blank in ["age_group", "tobacco", "plan_type"] {
            let mut c = filled();
            match blank {
                "age_group" => c.age_group.clear(),
                "tobacco" => c.tobacco.clear(),
                _ => c.plan_type.clear(),
            }
            assert!(validate(&c).is_err(), "expected {blank} to be required");
        }
    }

    #[test]
    fn whitespace_only_field_is_rejected() {
        let mut c = filled();
        c.tobacco = "   ".into();
        assert!(validate(&c).is_err());
    }

    #[test]
    fn double_toggle_restores_selection() {
        let mut c = filled();
        let before = c.needs.clone();
        c.toggle_need("Dental");
        assert!(c.needs.iter().any(|n| n == "Dental"));
        c.toggle_need("Dental");
        assert_eq!(c.needs, before);
    }

    #[test]
    fn toggle_removes_existing_need() {
        let mut c = filled();
        c.toggle_need("Wellness");
        assert!(c.needs.is_empty());
    }

    #[test]
    fn criteria_serializes_camel_case() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["ageGroup"], "26-35");
        assert_eq!(json["planType"], "Individual");
    }
}
