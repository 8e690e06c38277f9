use leptos::*;
use leptos_router::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
      <nav class="navbar">
        <A href="/" exact=true class="brand">
          <span class="brand-mark">"H"</span>
          <span class="brand-name">"Havenly"</span>
        </A>
        <div class="nav-links">
          <A href="/" exact=true>"Home"</A>
          <A href="/plans">"Find a Plan"</A>
          <A href="/dashboard">"Dashboard"</A>
          <A href="/about">"About"</A>
        </div>
      </nav>
    }
}
