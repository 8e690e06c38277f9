//! Fixture data behind the dashboard's metric cards, goals and activity feed.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
}

/// A headline metric card: value, period-over-period change, direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActivityStatus {
    Pending,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub date: &'static str,
    pub status: ActivityStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub title: &'static str,
    pub target: u32,
    pub current: u32,
}

pub fn metrics() -> Vec<Metric> {
    vec![
        Metric { title: "Monthly Premium", value: "₹320", change: "+2.5%", trend: Trend::Up },
        Metric { title: "Total Claims", value: "₹280", change: "-5.2%", trend: Trend::Down },
        Metric { title: "Net Savings", value: "₹40", change: "+12.8%", trend: Trend::Up },
        Metric { title: "Coverage Score", value: "92%", change: "+3.1%", trend: Trend::Up },
    ]
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            kind: "Claim Submitted",
            description: "Annual physical examination",
            amount: "₹1,200",
            date: "2 hours ago",
            status: ActivityStatus::Pending,
        },
        Activity {
            kind: "Premium Paid",
            description: "Monthly premium payment",
            amount: "₹320",
            date: "1 day ago",
            status: ActivityStatus::Completed,
        },
        Activity {
            kind: "Plan Updated",
            description: "Added dental coverage",
            amount: "+₹50",
            date: "3 days ago",
            status: ActivityStatus::Completed,
        },
        Activity {
            kind: "Claim Processed",
            description: "Prescription medication",
            amount: "₹85",
            date: "1 week ago",
            status: ActivityStatus::Completed,
        },
    ]
}

pub fn goals() -> Vec<Goal> {
    vec![
        Goal { title: "Emergency Fund", target: 50_000, current: 35_000 },
        Goal { title: "Health Savings", target: 25_000, current: 18_000 },
        Goal { title: "Premium Reduction", target: 50, current: 25 },
    ]
}

/// Percent complete for a goal bar, rounded to the nearest whole percent.
pub fn goal_progress_percent(goal: &Goal) -> u32 {
    if goal.target == 0 {
        return 0;
    }
    ((goal.current as f64 / goal.target as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_metric_cards() {
        assert_eq!(metrics().len(), 4);
    }

    #[test]
    fn goal_progress_rounds() {
        let g = Goal { title: "Emergency Fund", target: 50_000, current: 35_000 };
        assert_eq!(goal_progress_percent(&g), 70);
        let half = Goal { title: "Premium Reduction", target: 50, current: 25 };
        assert_eq!(goal_progress_percent(&half), 50);
    }

    #[test]
    fn goal_progress_handles_zero_target() {
        let g = Goal { title: "x", target: 0, current: 10 };
        assert_eq!(goal_progress_percent(&g), 0);
    }

    #[test]
    fn only_newest_activity_is_pending() {
        let acts = recent_activities();
        assert_eq!(acts[0].status, ActivityStatus::Pending);
        assert!(acts[1..]
            .iter()
            .all(|a| a.status == ActivityStatus::Completed));
    }
}
