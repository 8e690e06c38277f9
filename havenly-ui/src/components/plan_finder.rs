use crate::bridge;
use crate::toast::use_toasts;
use leptos::*;
use plan_catalog::criteria::{
    self, AGE_GROUPS, COVERAGE_NEEDS, PLAN_TYPES, STATES, TOBACCO_ANSWERS,
};
use plan_catalog::plans::MAX_MATCH_SCORE;
use plan_catalog::{PlanRecord, SearchCriteria};

/// Plan finder: criteria form on the left, result cards on the right.
///
/// Submission is guarded by a loading flag and goes through the bridge seam;
/// the error arm below is unreachable while the bridge is simulated, but it
/// is the path a real backend failure will take.
#[component]
pub fn PlanFinder() -> impl IntoView {
    let toasts = use_toasts();
    let criteria = create_rw_signal(SearchCriteria::default());
    let is_loading = create_rw_signal(false);
    let results = create_rw_signal(None::<Vec<PlanRecord>>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let current = criteria.get_untracked();
        if let Err(reason) = criteria::validate(&current) {
            log::debug!("blocked submission: {reason}");
            return;
        }
        is_loading.set(true);
        spawn_local(async move {
            match bridge::search_plans(&current).await {
                Ok(plans) => {
                    results.set(Some(plans));
                    toasts.success("Found matching plans!");
                }
                Err(e) => {
                    log::error!("plan search failed: {e}");
                    toasts.error("Error finding plans. Please try again.");
                }
            }
            is_loading.set(false);
        });
    };

    view! {
      <div class="plan-finder">
        <header class="page-header">
          <h1>"Find Your Perfect Plan"</h1>
          <p>
            "Tell us about yourself and we'll match you with the best \
             insurance plans tailored to your needs."
          </p>
        </header>

        <div class="finder-layout">
          <form class="card finder-form" on:submit=submit>
            <h2>"Search Criteria"</h2>

            <label class="field">
              <span>"Age Group"</span>
              <select
                prop:value=move || criteria.get().age_group
                on:change=move |ev| {
                  criteria.update(|c| c.age_group = event_target_value(&ev));
                }
              >
                <option value="">"Select age group"</option>
                {AGE_GROUPS
                    .into_iter()
                    .map(|g| view! { <option value=g>{g}</option> })
                    .collect_view()}
              </select>
            </label>

            <fieldset class="field">
              <legend>"Do you use tobacco?"</legend>
              {TOBACCO_ANSWERS
                  .into_iter()
                  .map(|answer| view! {
                    <label class="radio">
                      <input
                        type="radio"
                        name="tobacco"
                        value=answer
                        prop:checked=move || criteria.get().tobacco == answer
                        on:change=move |_| {
                          criteria.update(|c| c.tobacco = answer.to_string());
                        }
                      />
                      {answer}
                    </label>
                  })
                  .collect_view()}
            </fieldset>

            <label class="field">
              <span>"Type of Insurance"</span>
              <select
                prop:value=move || criteria.get().plan_type
                on:change=move |ev| {
                  criteria.update(|c| c.plan_type = event_target_value(&ev));
                }
              >
                <option value="">"Select plan type"</option>
                {PLAN_TYPES
                    .into_iter()
                    .map(|t| view! { <option value=t>{t}</option> })
                    .collect_view()}
              </select>
            </label>

            <label class="field">
              <span>"State (optional)"</span>
              <select
                prop:value=move || criteria.get().state
                on:change=move |ev| {
                  criteria.update(|c| c.state = event_target_value(&ev));
                }
              >
                <option value="">"Any state"</option>
                {STATES
                    .into_iter()
                    .map(|s| view! { <option value=s>{s}</option> })
                    .collect_view()}
              </select>
            </label>

            <fieldset class="field">
              <legend>"Coverage Preferences (optional)"</legend>
              {COVERAGE_NEEDS
                  .into_iter()
                  .map(|need| view! {
                    <label class="checkbox">
                      <input
                        type="checkbox"
                        prop:checked=move || criteria.get().needs.iter().any(|n| n.as_str() == need)
                        on:change=move |_| {
                          criteria.update(|c| c.toggle_need(need));
                        }
                      />
                      {need}
                    </label>
                  })
                  .collect_view()}
            </fieldset>

            <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
              <Show when=move || is_loading.get() fallback=|| "Find Matching Plans">
                <span class="spinner"></span>
              </Show>
            </button>
          </form>

          <div class="finder-results">
            <Show
              when=move || results.get().is_some()
              fallback=|| view! {
                <div class="card placeholder">
                  <h3>"Ready to find your plan?"</h3>
                  <p>"Fill out the form on the left to get personalized plan recommendations."</p>
                </div>
              }
            >
              <div class="results-header">
                <h2>{move || {
                    let count = results.get().map(|r| r.len()).unwrap_or(0);
                    format!("Top Matching Plans ({count})")
                }}</h2>
                <span class="results-sort">"Sorted by match score"</span>
              </div>
              <For
                each=move || results.get().unwrap_or_default()
                key=|plan| plan.name.clone()
                children=|plan| view! { <PlanCard plan=plan/> }
              />
            </Show>
          </div>
        </div>
      </div>
    }
}

#[component]
fn PlanCard(plan: PlanRecord) -> impl IntoView {
    view! {
      <div class="card plan-card">
        <div class="plan-card-head">
          <div>
            <h3>{plan.name.clone()}</h3>
            <div class="plan-meta">
              <span>{format!("{} Level", plan.metal_tier.label())}</span>
              <span>{plan.plan_type.clone()}</span>
            </div>
          </div>
          <div class="plan-cost">
            <div class="plan-cost-amount">{format!("₹{}", plan.monthly_cost)}</div>
            <div class="plan-cost-period">"per month"</div>
          </div>
        </div>
        <ul class="plan-coverage">
          <li>{format!("Wellness: {}", plan.wellness)}</li>
          <li>{format!("Maternity: {}", plan.maternity)}</li>
          <li>{format!("Mental Health: {}", plan.mental_health)}</li>
          <li>{format!("Match Score: {}/{MAX_MATCH_SCORE}", plan.match_score)}</li>
        </ul>
        <div class="plan-actions">
          <button class="btn btn-primary">"View Details"</button>
          <button class="btn btn-secondary">"Compare"</button>
        </div>
      </div>
    }
}
