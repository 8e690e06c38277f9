//! Async seam in front of the plan-matching backend.
//!
//! There is no backend yet: `search_plans` sleeps for a fixed delay to feel
//! like a network call, then returns the canned result list no matter what
//! the criteria say. When a real matching service exists, only this module
//! changes; the views already consume `Result<Vec<PlanRecord>, String>`.

use plan_catalog::{sample_results, PlanRecord, SearchCriteria};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Simulated round-trip latency of the matching call.
pub const SEARCH_DELAY_MS: i32 = 2_000;

async fn sleep(ms: i32) -> Result<(), String> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    JsFuture::from(promise)
        .await
        .map(|_: JsValue| ())
        .map_err(|e| format!("timer failed: {e:?}"))
}

/// Pretend to call the matching service. Never fails today; the error
/// channel stays in the signature for the real backend.
pub async fn search_plans(criteria: &SearchCriteria) -> Result<Vec<PlanRecord>, String> {
    log::debug!(
        "searching plans for age_group={} plan_type={}",
        criteria.age_group,
        criteria.plan_type
    );
    sleep(SEARCH_DELAY_MS).await?;
    Ok(sample_results())
}
