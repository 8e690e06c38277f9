use crate::components::{
    about::About, dashboard::Dashboard, home::HomePage, navbar::Navbar, plan_finder::PlanFinder,
};
use crate::toast::{provide_toasts, ToastHost};
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let toasts = provide_toasts();

    view! {
      <Router>
        <div class="app">
          <Navbar/>
          <Routes>
            <Route path="/" view=HomePage/>
            <Route path="/plans" view=PlanFinder/>
            <Route path="/dashboard" view=Dashboard/>
            <Route path="/about" view=About/>
          </Routes>
          <ToastHost toasts=toasts/>
        </div>
      </Router>
    }
}
