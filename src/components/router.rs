//! Hash-based application router.
//!
//! The URL hash is the source of truth. Programmatic navigation goes through
//! [`Navigator`], which pushes a history entry and updates the route signal;
//! a `hashchange` listener keeps browser back/forward working.
//!
//! Pages are mounted per [`PageKind`], not per route value, so query-only
//! changes (page, size, team filter) update the page reactively instead of
//! remounting it and losing search/sort state.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::components::pages::{
    ApplicationDetailPage, ApplicationFormListPage, ApplicationListPage, FormEditorPage,
};
use crate::models::{ListQuery, Route};
use crate::utils::dom::scroll_to_top;

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Navigator
// ============================================================================

/// Programmatic navigation handle provided below the router.
#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
}

impl Navigator {
    pub fn route(&self) -> Signal<Route> {
        self.route.into()
    }

    /// Navigate to a route, adding a history entry.
    pub fn go(&self, route: Route) {
        route.push();
        self.route.set(route);
    }
}

/// Which page component a route mounts.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PageKind {
    ApplicationList,
    ApplicationDetail,
    ApplicationFormList,
    FormEditor,
    NotFound,
}

fn kind_of(route: &Route) -> PageKind {
    match route {
        Route::ApplicationList(_) => PageKind::ApplicationList,
        Route::ApplicationDetail { .. } => PageKind::ApplicationDetail,
        Route::ApplicationFormList(_) => PageKind::ApplicationFormList,
        Route::ApplicationFormNew | Route::ApplicationFormEdit { .. } => PageKind::FormEditor,
        Route::NotFound => PageKind::NotFound,
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Dispatches the current route to its page component.
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(Route::current());
    provide_context(Navigator { route });

    // Browser back/forward updates the hash without going through Navigator.
    let closure = Closure::wrap(Box::new(move || {
        route.set(Route::current());
    }) as Box<dyn Fn()>);
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    Effect::new(move |previous: Option<Route>| {
        let current = route.get();
        if previous.is_some_and(|previous| previous != current) {
            scroll_to_top();
        }
        current
    });

    let kind = Memo::new(move |_| kind_of(&route.get()));
    let list_query = Signal::derive(move || match route.get() {
        Route::ApplicationList(query) => query,
        _ => ListQuery::default(),
    });
    let form_query = Signal::derive(move || match route.get() {
        Route::ApplicationFormList(query) => query,
        _ => ListQuery::default(),
    });
    let application_id = Signal::derive(move || match route.get() {
        Route::ApplicationDetail { id } => id,
        _ => 0,
    });
    let editor_form_id = Signal::derive(move || match route.get() {
        Route::ApplicationFormEdit { id } => Some(id),
        _ => None,
    });

    view! {
        <div class=css::layout>
            <NavBar />
            <main class=css::content>
                {move || match kind.get() {
                    PageKind::ApplicationList => {
                        view! { <ApplicationListPage query=list_query /> }.into_any()
                    }
                    PageKind::ApplicationDetail => {
                        view! { <ApplicationDetailPage application_id=application_id /> }
                            .into_any()
                    }
                    PageKind::ApplicationFormList => {
                        view! { <ApplicationFormListPage query=form_query /> }.into_any()
                    }
                    PageKind::FormEditor => {
                        view! { <FormEditorPage form_id=editor_form_id /> }.into_any()
                    }
                    PageKind::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

// ============================================================================
// Navigation Bar
// ============================================================================

#[component]
fn NavBar() -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let route = navigator.route();

    let applications_active = Signal::derive(move || {
        matches!(
            route.get(),
            Route::ApplicationList(_) | Route::ApplicationDetail { .. }
        )
    });
    let forms_active = Signal::derive(move || {
        matches!(
            route.get(),
            Route::ApplicationFormList(_) | Route::ApplicationFormNew
                | Route::ApplicationFormEdit { .. }
        )
    });

    let tab_class = |active: Signal<bool>| {
        move || {
            if active.get() {
                format!("{} {}", css::nav_link, css::active)
            } else {
                css::nav_link.to_string()
            }
        }
    };

    view! {
        <header class=css::nav>
            <span class=css::brand>"Recruit Admin"</span>
            <nav class=css::nav_links>
                <a
                    class=tab_class(applications_active)
                    on:click=move |_| navigator.go(Route::ApplicationList(ListQuery::default()))
                >
                    "Applications"
                </a>
                <a
                    class=tab_class(forms_active)
                    on:click=move |_| {
                        navigator.go(Route::ApplicationFormList(ListQuery::default()))
                    }
                >
                    "Application Forms"
                </a>
            </nav>
        </header>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    view! {
        <div class=css::not_found>
            <h1>"Page not found"</h1>
            <a
                class=css::nav_link
                on:click=move |_| navigator.go(Route::ApplicationList(ListQuery::default()))
            >
                "Back to applications"
            </a>
        </div>
    }
}
