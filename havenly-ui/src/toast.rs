//! Transient top-right notifications.
//!
//! A `Toasts` handle lives in the Leptos context; any component can raise a
//! success or error message and it disappears on its own after a few
//! seconds. `ToastHost` renders the stack once, at the app shell level.

use leptos::*;
use std::time::Duration;

const DISMISS_AFTER_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, message }));

        let items = self.items;
        set_timeout(
            move || items.update(|items| items.retain(|t| t.id != id)),
            Duration::from_millis(DISMISS_AFTER_MS),
        );
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastHost(toasts: Toasts) -> impl IntoView {
    view! {
      <div class="toast-host">
        <For
          each=move || toasts.items.get()
          key=|t| t.id
          children=|t| {
            let class = match t.kind {
              ToastKind::Success => "toast toast-success",
              ToastKind::Error => "toast toast-error",
            };
            view! { <div class=class>{t.message}</div> }
          }
        />
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toasts_start_empty() {
        let runtime = create_runtime();
        let toasts = Toasts::default();
        assert!(toasts.items.get_untracked().is_empty());
        assert_eq!(toasts.next_id.get_value(), 0);
        runtime.dispose();
    }
}
