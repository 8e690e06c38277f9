use crate::components::charts::{LineChart, PieChart, Series};
use leptos::*;
use leptos_router::*;
use plan_catalog::charts;
use plan_catalog::stats;
use std::time::Duration;

/// Owns the interval handle for the stat ramp. The handle can be taken out
/// at most once, so whichever of the finished path and the teardown path
/// runs first clears the interval and the other finds nothing to clear.
struct RampInterval<H> {
    handle: Option<H>,
}

impl<H> RampInterval<H> {
    fn new() -> Self {
        Self { handle: None }
    }

    fn set(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    fn take(&mut self) -> Option<H> {
        self.handle.take()
    }

    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

/// Marketing landing page: hero, animated stat counters, feature cards,
/// market-insight charts, testimonials and CTA.
#[component]
pub fn HomePage() -> impl IntoView {
    let step = create_rw_signal(0u32);
    let interval = store_value(RampInterval::<leptos_dom::helpers::IntervalHandle>::new());

    let stop = move || {
        if let Some(handle) = interval.try_update_value(RampInterval::take).flatten() {
            handle.clear();
        }
    };

    // Advance the counters once per tick; the interval clears itself at the
    // final step, and again on unmount so a torn-down page never ticks.
    let started = set_interval_with_handle(
        move || {
            step.update(|s| *s += 1);
            if stats::finished(step.get_untracked()) {
                stop();
            }
        },
        Duration::from_millis(u64::from(stats::tick_interval_ms())),
    );
    match started {
        Ok(handle) => interval.update_value(|r| r.set(handle)),
        Err(e) => log::warn!("stat counter animation not started: {e:?}"),
    }
    on_cleanup(stop);

    let counters = move || stats::values_at(step.get());

    let price_trend = charts::price_trend();
    let months: Vec<&'static str> = price_trend.iter().map(|p| p.month).collect();
    let trend_series = vec![
        Series {
            name: "Average",
            color: "#3b82f6",
            values: price_trend.iter().map(|p| f64::from(p.average)).collect(),
        },
        Series {
            name: "Premium",
            color: "#ef4444",
            values: price_trend.iter().map(|p| f64::from(p.premium)).collect(),
        },
    ];

    view! {
      <div class="home">
        <section class="hero">
          <div class="hero-copy">
            <h1>
              "Not just policies — "
              <span class="hero-highlight">"a plan that fits right"</span>
            </h1>
            <p>
              "Because whether you're starting out or starting over — we've got \
               you covered with AI-powered insurance recommendations."
            </p>
            <div class="hero-actions">
              <A href="/plans" class="btn btn-primary">"Find Your Plan"</A>
              <button class="btn btn-secondary">"Watch Demo"</button>
            </div>
          </div>
          <div class="hero-card">
            <h3>"AI Insurance Advisor"</h3>
            <p>"Get personalized recommendations in seconds"</p>
          </div>
        </section>

        <section class="stats">
          <div class="stat">
            <div class="stat-value">{move || format!("{}+", stats::format_grouped(counters().plans))}</div>
            <div class="stat-label">"Available Plans"</div>
          </div>
          <div class="stat">
            <div class="stat-value">{move || format!("{}+", stats::format_grouped(counters().users))}</div>
            <div class="stat-label">"Happy Customers"</div>
          </div>
          <div class="stat">
            <div class="stat-value">{move || format!("₹{}", stats::format_grouped(counters().savings))}</div>
            <div class="stat-label">"Total Savings"</div>
          </div>
          <div class="stat">
            <div class="stat-value">{move || format!("{}%", counters().satisfaction)}</div>
            <div class="stat-label">"Satisfaction Rate"</div>
          </div>
        </section>

        <section class="features">
          <h2>"How we help you"</h2>
          <p class="section-lead">
            "Explore plans that make sense for your life and your budget with \
             our comprehensive tools and AI assistance."
          </p>
          <div class="feature-grid">
            <FeatureCard
              title="AI-Powered Matching"
              description="Our advanced AI analyzes your needs and finds the perfect plan match."
            />
            <FeatureCard
              title="Smart Cost Analysis"
              description="Compare premiums, deductibles, and out-of-pocket costs side by side."
            />
            <FeatureCard
              title="Health-First Approach"
              description="Plans that prioritize your health with wellness programs and preventive care."
            />
            <FeatureCard
              title="Family Coverage"
              description="Comprehensive family plans that grow with your changing needs."
            />
          </div>
        </section>

        <section class="insights">
          <h2>"Market Insights"</h2>
          <p class="section-lead">"Stay informed with real-time market data and trends"</p>
          <div class="insight-grid">
            <div class="card">
              <h3>"Premium Trends"</h3>
              <LineChart labels=months series=trend_series/>
            </div>
            <div class="card">
              <h3>"Plan Distribution"</h3>
              <PieChart shares=charts::plan_distribution()/>
            </div>
          </div>
        </section>

        <section class="testimonials">
          <h2>"What our customers say"</h2>
          <p class="section-lead">"Real stories from real people who found their perfect plan"</p>
          <div class="testimonial-grid">
            <Testimonial
              name="Sarah Johnson"
              role="Small Business Owner"
              content="Havenly helped me find a plan that actually fits my budget and covers what I need. The AI recommendations were spot-on!"
            />
            <Testimonial
              name="Michael Chen"
              role="Family of 4"
              content="Switching our family insurance was a breeze. The comparison tools made it easy to see exactly what we were getting."
            />
            <Testimonial
              name="Emily Rodriguez"
              role="Freelancer"
              content="As a freelancer, I was worried about finding affordable coverage. Havenly found me a great plan with dental included!"
            />
          </div>
        </section>

        <section class="cta">
          <h2>"Ready to find your perfect plan?"</h2>
          <p>"Join thousands of customers who've already found their ideal insurance coverage"</p>
          <div class="hero-actions">
            <A href="/plans" class="btn btn-primary">"Start Your Search"</A>
            <button class="btn btn-secondary">"Talk to Expert"</button>
          </div>
        </section>

        <footer class="footer">
          <div class="footer-col">
            <div class="brand-name">"Havenly"</div>
            <p>"AI-powered insurance advisor helping you find the perfect coverage for your needs."</p>
          </div>
          <div class="footer-col">
            <h4>"Quick Links"</h4>
            <A href="/plans">"Find Plans"</A>
            <A href="/dashboard">"Dashboard"</A>
            <A href="/about">"About Us"</A>
          </div>
          <div class="footer-col">
            <h4>"Support"</h4>
            <span>"1-800-HAVENLY"</span>
            <span>"support@havenly.com"</span>
            <span>"24/7 Online Support"</span>
          </div>
          <div class="footer-note">"© 2024 Havenly. All rights reserved."</div>
        </footer>
      </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
      <div class="card feature-card">
        <h3>{title}</h3>
        <p>{description}</p>
      </div>
    }
}

#[component]
fn Testimonial(name: &'static str, role: &'static str, content: &'static str) -> impl IntoView {
    view! {
      <div class="card testimonial">
        <div class="testimonial-stars">"★★★★★"</div>
        <p class="testimonial-quote">{format!("\u{201c}{content}\u{201d}")}</p>
        <div class="testimonial-name">{name}</div>
        <div class="testimonial-role">{role}</div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::RampInterval;
    use plan_catalog::stats;

    #[test]
    fn ramp_clears_exactly_once_when_finished() {
        let mut ramp = RampInterval::new();
        ramp.set(7u32);
        let mut clears = 0;
        let mut step = 0u32;
        while ramp.is_active() {
            step += 1;
            if stats::finished(step) && ramp.take().is_some() {
                clears += 1;
            }
            assert!(step <= stats::STEPS);
        }
        assert_eq!(step, stats::STEPS);
        assert_eq!(clears, 1);
        // unmount after the ramp finished finds nothing left to clear
        assert_eq!(ramp.take(), None);
    }

    #[test]
    fn teardown_mid_animation_clears_the_interval() {
        let mut ramp = RampInterval::new();
        ramp.set(7u32);
        // a few ticks happen, none reaching the final step
        for step in 1..5 {
            assert!(!stats::finished(step));
        }
        assert_eq!(ramp.take(), Some(7));
        assert!(!ramp.is_active());
        // a tick that raced past teardown must not clear again
        assert_eq!(ramp.take(), None);
    }

    #[test]
    fn ramp_without_a_started_interval_is_inert() {
        let mut ramp = RampInterval::<u32>::new();
        assert!(!ramp.is_active());
        assert_eq!(ramp.take(), None);
    }
}
