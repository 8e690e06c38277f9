use crate::components::charts::{AreaChart, BarChart, LineChart, PieChart, Series};
use leptos::*;
use plan_catalog::charts;
use plan_catalog::stats;
use plan_catalog::dashboard::{
    self, goal_progress_percent, Activity, ActivityStatus, Goal, Metric, Trend,
};

/// Dashboard tab identifiers. Selection is pure display state; every panel
/// renders from the same fixture constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Analytics,
    Goals,
    Activity,
}

const TABS: [Tab; 4] = [Tab::Overview, Tab::Analytics, Tab::Goals, Tab::Activity];

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Analytics => "Analytics",
            Tab::Goals => "Goals",
            Tab::Activity => "Activity",
        }
    }
}

const TIME_RANGES: [&str; 4] = ["Week", "Month", "Quarter", "Year"];

#[component]
pub fn Dashboard() -> impl IntoView {
    let active_tab = create_rw_signal(Tab::Overview);
    // Display-only; changing it re-renders nothing but the select itself.
    let time_range = create_rw_signal("Month".to_string());

    view! {
      <div class="dashboard">
        <header class="page-header">
          <h1>"Insurance Dashboard"</h1>
          <p>"Track your coverage, claims, and savings in one place"</p>
        </header>

        <div class="metric-grid">
          {dashboard::metrics()
              .into_iter()
              .map(|m| view! { <MetricCard metric=m/> })
              .collect_view()}
        </div>

        <nav class="tab-bar">
          {TABS
              .into_iter()
              .map(|tab| view! {
                <button
                  class=move || if active_tab.get() == tab { "tab tab-active" } else { "tab" }
                  on:click=move |_| active_tab.set(tab)
                >
                  {tab.label()}
                </button>
              })
              .collect_view()}
        </nav>

        <Show when=move || active_tab.get() == Tab::Overview>
          <OverviewPanel time_range=time_range/>
        </Show>
        <Show when=move || active_tab.get() == Tab::Analytics>
          <AnalyticsPanel/>
        </Show>
        <Show when=move || active_tab.get() == Tab::Goals>
          <GoalsPanel/>
        </Show>
        <Show when=move || active_tab.get() == Tab::Activity>
          <ActivityPanel/>
        </Show>
      </div>
    }
}

#[component]
fn MetricCard(metric: Metric) -> impl IntoView {
    let (arrow, class) = match metric.trend {
        Trend::Up => ("▲", "metric-change up"),
        Trend::Down => ("▼", "metric-change down"),
    };
    view! {
      <div class="card metric-card">
        <div class="metric-title">{metric.title}</div>
        <div class="metric-value">{metric.value}</div>
        <div class=class>{format!("{arrow} {}", metric.change)}</div>
      </div>
    }
}

#[component]
fn OverviewPanel(time_range: RwSignal<String>) -> impl IntoView {
    let trend = charts::premium_trend();
    let months: Vec<&'static str> = trend.iter().map(|m| m.month).collect();
    let series = vec![
        Series {
            name: "Premium",
            color: "#3b82f6",
            values: trend.iter().map(|m| f64::from(m.premium)).collect(),
        },
        Series {
            name: "Claims",
            color: "#ef4444",
            values: trend.iter().map(|m| f64::from(m.claims)).collect(),
        },
    ];

    view! {
      <div class="panel-grid">
        <div class="card">
          <div class="card-head">
            <h3>"Premium & Claims Trend"</h3>
            <select
              prop:value=move || time_range.get()
              on:change=move |ev| time_range.set(event_target_value(&ev))
            >
              {TIME_RANGES
                  .into_iter()
                  .map(|r| view! { <option value=r>{r}</option> })
                  .collect_view()}
            </select>
          </div>
          <AreaChart labels=months series=series/>
        </div>
        <div class="card">
          <h3>"Plan Distribution"</h3>
          <PieChart shares=charts::plan_distribution()/>
        </div>
      </div>
    }
}

#[component]
fn AnalyticsPanel() -> impl IntoView {
    let trend = charts::premium_trend();
    let months: Vec<&'static str> = trend.iter().map(|m| m.month).collect();
    let savings = vec![Series {
        name: "Savings",
        color: "#10b981",
        values: trend.iter().map(|m| f64::from(m.savings)).collect(),
    }];

    view! {
      <div class="panel-grid">
        <div class="card">
          <h3>"Claims Breakdown"</h3>
          <BarChart shares=charts::claims_breakdown()/>
        </div>
        <div class="card">
          <h3>"Monthly Savings"</h3>
          <LineChart labels=months series=savings/>
        </div>
      </div>
    }
}

#[component]
fn GoalsPanel() -> impl IntoView {
    view! {
      <div class="panel-grid goals">
        {dashboard::goals()
            .into_iter()
            .map(|g| view! { <GoalCard goal=g/> })
            .collect_view()}
      </div>
    }
}

#[component]
fn GoalCard(goal: Goal) -> impl IntoView {
    let percent = goal_progress_percent(&goal);
    view! {
      <div class="card goal-card">
        <h3>{goal.title}</h3>
        <p class="goal-amounts">{format!(
            "₹{} / ₹{}",
            stats::format_grouped(u64::from(goal.current)),
            stats::format_grouped(u64::from(goal.target)),
        )}</p>
        <div class="progress-track">
          <div class="progress-fill" style=format!("width:{percent}%")></div>
        </div>
        <p class="goal-percent">{format!("{percent}% complete")}</p>
      </div>
    }
}

#[component]
fn ActivityPanel() -> impl IntoView {
    view! {
      <div class="card">
        <h3>"Recent Activity"</h3>
        <ul class="activity-list">
          {dashboard::recent_activities()
              .into_iter()
              .map(|a| view! { <ActivityRow activity=a/> })
              .collect_view()}
        </ul>
      </div>
    }
}

#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    let dot = match activity.status {
        ActivityStatus::Completed => "dot completed",
        ActivityStatus::Pending => "dot pending",
    };
    view! {
      <li class="activity-row">
        <span class=dot></span>
        <div class="activity-body">
          <div class="activity-kind">{activity.kind}</div>
          <div class="activity-desc">{activity.description}</div>
        </div>
        <div class="activity-meta">
          <div class="activity-amount">{activity.amount}</div>
          <div class="activity-date">{activity.date}</div>
        </div>
      </li>
    }
}
