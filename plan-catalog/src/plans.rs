use serde::{Deserialize, Serialize};

/// Marketplace metal tier, display attribute only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetalTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MetalTier {
    pub fn label(self) -> &'static str {
        match self {
            MetalTier::Bronze => "Bronze",
            MetalTier::Silver => "Silver",
            MetalTier::Gold => "Gold",
            MetalTier::Platinum => "Platinum",
        }
    }
}

/// One recommended plan as shown on a result card.
///
/// Coverage answers are kept as display strings ("Yes"/"No") because that is
/// all the cards render; there is no underwriting logic behind them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    pub name: String,
    pub metal_tier: MetalTier,
    pub plan_type: String,
    pub monthly_cost: u32,
    pub wellness: String,
    pub maternity: String,
    pub mental_health: String,
    pub match_score: u8,
}

/// Highest score a plan can carry, shown as the denominator on result cards.
pub const MAX_MATCH_SCORE: u8 = 4;

/// The canned result list the plan finder returns for every search.
///
/// This is a stand-in for a backend matching service that does not exist
/// yet; the list is fixed and already sorted by descending match score.
pub fn sample_results() -> Vec<PlanRecord> {
    vec![
        PlanRecord {
            name: "Blue Cross Blue Shield Gold".into(),
            metal_tier: MetalTier::Gold,
            plan_type: "PPO".into(),
            monthly_cost: 450,
            wellness: "Yes".into(),
            maternity: "Yes".into(),
            mental_health: "Yes".into(),
            match_score: 4,
        },
        PlanRecord {
            name: "Aetna Silver Choice".into(),
            metal_tier: MetalTier::Silver,
            plan_type: "HMO".into(),
            monthly_cost: 320,
            wellness: "Yes".into(),
            maternity: "No".into(),
            mental_health: "Yes".into(),
            match_score: 3,
        },
        PlanRecord {
            name: "Cigna Bronze Plus".into(),
            metal_tier: MetalTier::Bronze,
            plan_type: "EPO".into(),
            monthly_cost: 280,
            wellness: "No".into(),
            maternity: "Yes".into(),
            mental_health: "No".into(),
            match_score: 2,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_results_are_three_fixed_plans() {
        let plans = sample_results();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].name, "Blue Cross Blue Shield Gold");
        assert_eq!(plans[1].name, "Aetna Silver Choice");
        assert_eq!(plans[2].name, "Cigna Bronze Plus");
    }

    #[test]
    fn sample_results_sorted_by_descending_match_score() {
        let plans = sample_results();
        assert!(plans
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
        assert!(plans.iter().all(|p| p.match_score <= MAX_MATCH_SCORE));
    }

    #[test]
    fn sample_results_identical_across_calls() {
        assert_eq!(sample_results(), sample_results());
    }

    #[test]
    fn plan_record_serializes_camel_case() {
        let plan = &sample_results()[0];
        let json = serde_json::to_value(plan).unwrap();
        assert_eq!(json["metalTier"], "Gold");
        assert_eq!(json["monthlyCost"], 450);
        assert_eq!(json["matchScore"], 4);
    }
}
