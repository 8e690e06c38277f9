//! Chart series shared by the home page and the dashboard.
//!
//! The same plan-distribution data backs a chart on both pages, so all
//! series live here instead of being re-declared per view. Nothing updates
//! them; every constructor returns the same values on every call.

use serde::Serialize;

/// One month of premium/claims/savings figures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyFigures {
    pub month: &'static str,
    pub premium: u32,
    pub claims: u32,
    pub savings: u32,
}

/// One month of marketplace average vs. premium-tier pricing, for the
/// home-page trend chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PricePoint {
    pub month: &'static str,
    pub average: u32,
    pub premium: u32,
}

/// A labeled share of a whole, with its display color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Share {
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
}

pub fn premium_trend() -> Vec<MonthlyFigures> {
    vec![
        MonthlyFigures { month: "Jan", premium: 320, claims: 280, savings: 40 },
        MonthlyFigures { month: "Feb", premium: 315, claims: 290, savings: 25 },
        MonthlyFigures { month: "Mar", premium: 310, claims: 275, savings: 35 },
        MonthlyFigures { month: "Apr", premium: 305, claims: 300, savings: 5 },
        MonthlyFigures { month: "May", premium: 300, claims: 265, savings: 35 },
        MonthlyFigures { month: "Jun", premium: 295, claims: 280, savings: 15 },
    ]
}

pub fn price_trend() -> Vec<PricePoint> {
    vec![
        PricePoint { month: "Jan", average: 320, premium: 450 },
        PricePoint { month: "Feb", average: 315, premium: 440 },
        PricePoint { month: "Mar", average: 310, premium: 430 },
        PricePoint { month: "Apr", average: 305, premium: 425 },
        PricePoint { month: "May", average: 300, premium: 420 },
        PricePoint { month: "Jun", average: 295, premium: 415 },
    ]
}

pub fn plan_distribution() -> Vec<Share> {
    vec![
        Share { label: "Bronze", value: 35, color: "#cd7f32" },
        Share { label: "Silver", value: 40, color: "#c0c0c0" },
        Share { label: "Gold", value: 20, color: "#ffd700" },
        Share { label: "Platinum", value: 5, color: "#e5e4e2" },
    ]
}

pub fn claims_breakdown() -> Vec<Share> {
    vec![
        Share { label: "Preventive", value: 45, color: "#10b981" },
        Share { label: "Emergency", value: 25, color: "#ef4444" },
        Share { label: "Specialist", value: 20, color: "#3b82f6" },
        Share { label: "Prescription", value: 10, color: "#8b5cf6" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_trend_covers_six_months() {
        let trend = premium_trend();
        assert_eq!(trend.len(), 6);
        assert_eq!(trend[0].month, "Jan");
        assert_eq!(trend[5].month, "Jun");
    }

    #[test]
    fn plan_distribution_shares_sum_to_whole() {
        let total: u32 = plan_distribution().iter().map(|s| s.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn claims_breakdown_shares_sum_to_whole() {
        let total: u32 = claims_breakdown().iter().map(|s| s.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn price_trend_declines_month_over_month() {
        let trend = price_trend();
        assert!(trend.windows(2).all(|w| w[1].average < w[0].average));
        assert!(trend.windows(2).all(|w| w[1].premium < w[0].premium));
    }

    #[test]
    fn series_identical_across_calls() {
        assert_eq!(premium_trend(), premium_trend());
        assert_eq!(price_trend(), price_trend());
        assert_eq!(plan_distribution(), plan_distribution());
        assert_eq!(claims_breakdown(), claims_breakdown());
    }
}
