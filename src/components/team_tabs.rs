//! Team filter tabs shown above list pages.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/team_tabs.module.css");

/// "All" plus one tab per team; the active tab is the team name in the URL.
#[component]
pub fn TeamTabs(
    active: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let tab_class = move |is_active: bool| {
        if is_active {
            format!("{} {}", css::tab, css::active)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <div class=css::tabs>
            <button
                class=move || tab_class(active.get().is_none())
                on:click=move |_| on_select.run(None)
            >
                "All"
            </button>
            <For
                each=move || ctx.teams.get()
                key=|team| team.team_id
                children=move |team| {
                    let name = team.name.clone();
                    let is_active = {
                        let name = name.clone();
                        Signal::derive(move || {
                            active
                                .get()
                                .is_some_and(|active| active.eq_ignore_ascii_case(&name))
                        })
                    };
                    view! {
                        <button
                            class=move || tab_class(is_active.get())
                            on:click=move |_| on_select.run(Some(name.clone()))
                        >
                            {team.name.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
