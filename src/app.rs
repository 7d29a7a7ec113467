//! Root application module.
//!
//! Contains the main App component and the AppContext definition following
//! Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::AppRouter;
use crate::components::toast::{Toast, ToastKind, ToastStack};
use crate::config::TOAST_DURATION_MS;
use crate::models::Team;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Transient notifications, newest last.
    pub toasts: RwSignal<Vec<Toast>>,
    /// Teams fetched once at startup; drives tabs and team filters.
    pub teams: RwSignal<Vec<Team>>,
    next_toast_id: RwSignal<u64>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            teams: RwSignal::new(Vec::new()),
            next_toast_id: RwSignal::new(0),
        }
    }

    /// Show a transient notification that dismisses itself.
    pub fn push_toast(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message);
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message);
    }

    /// Resolve a team filter name from the URL to its id, case-insensitively.
    pub fn team_id_by_name(&self, name: Option<&str>) -> Option<i64> {
        let name = name?;
        self.teams.with(|teams| {
            teams
                .iter()
                .find(|team| team.name.eq_ignore_ascii_case(name))
                .map(|team| team.team_id)
        })
    }

    /// Fetch the team list once at startup.
    fn load_teams(&self) {
        let teams = self.teams;
        let ctx = *self;
        spawn_local(async move {
            match api::get_teams().await {
                Ok(fetched) => teams.set(fetched),
                Err(e) => ctx.toast_error(format!("Failed to load teams: {}", e)),
            }
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the global AppContext, kicks off the initial team
/// fetch, and renders the router plus the toast overlay.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.load_teams();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <AppRouter />
            <ToastStack />
        </ErrorBoundary>
    }
}
