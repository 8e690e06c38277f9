use leptos::*;

/// Static company page; no interactive state.
#[component]
pub fn About() -> impl IntoView {
    view! {
      <div class="about">
        <section class="page-header">
          <h1>"About " <span class="brand-accent">"Havenly"</span></h1>
          <p>
            "We're on a mission to make healthcare insurance simple, \
             transparent, and accessible for everyone. Our AI-powered platform \
             helps you find the perfect coverage that fits your life and budget."
          </p>
          <div class="about-facts">
            <span>"Founded 2022"</span>
            <span>"50,000+ Customers"</span>
            <span>"Industry Leader"</span>
          </div>
        </section>

        <section class="values">
          <h2>"Our Values"</h2>
          <div class="feature-grid">
            <ValueCard
              title="Trust & Security"
              description="Your data and privacy are our top priorities. We use bank-level security to protect your information."
            />
            <ValueCard
              title="Health First"
              description="We believe everyone deserves access to quality healthcare that fits their lifestyle and budget."
            />
            <ValueCard
              title="Community Focus"
              description="Building a community of informed healthcare consumers who support each other's wellness journey."
            />
            <ValueCard
              title="Personalized Care"
              description="Every recommendation is tailored to your unique needs, preferences, and life circumstances."
            />
          </div>
        </section>

        <section class="team">
          <h2>"Meet the Team"</h2>
          <div class="team-grid">
            <TeamCard
              name="Dr. Sarah Chen"
              role="Chief Medical Officer"
              bio="Board-certified physician with 15+ years in healthcare policy and patient advocacy."
            />
            <TeamCard
              name="Michael Rodriguez"
              role="Head of AI & Technology"
              bio="Former Google AI researcher specializing in healthcare machine learning and predictive analytics."
            />
            <TeamCard
              name="Emily Johnson"
              role="VP of Customer Experience"
              bio="Healthcare industry veteran focused on making insurance accessible and understandable for everyone."
            />
          </div>
        </section>

        <section class="milestones">
          <h2>"Our Journey"</h2>
          <ul class="milestone-list">
            <Milestone
              year="2024"
              title="AI-Powered Platform Launch"
              description="Launched our revolutionary AI insurance advisor platform"
            />
            <Milestone
              year="2023"
              title="Series A Funding"
              description="Secured $10M in funding to expand our technology and team"
            />
            <Milestone
              year="2022"
              title="Company Founded"
              description="Founded with a mission to democratize healthcare access"
            />
          </ul>
        </section>
      </div>
    }
}

#[component]
fn ValueCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
      <div class="card feature-card">
        <h3>{title}</h3>
        <p>{description}</p>
      </div>
    }
}

#[component]
fn TeamCard(name: &'static str, role: &'static str, bio: &'static str) -> impl IntoView {
    view! {
      <div class="card team-card">
        <h3>{name}</h3>
        <div class="team-role">{role}</div>
        <p>{bio}</p>
      </div>
    }
}

#[component]
fn Milestone(year: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
      <li class="milestone">
        <span class="milestone-year">{year}</span>
        <div>
          <div class="milestone-title">{title}</div>
          <div class="milestone-desc">{description}</div>
        </div>
      </li>
    }
}
