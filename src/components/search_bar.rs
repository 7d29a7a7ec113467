//! Search input with submit-on-Enter, plus a slot for page filters.

use leptos::prelude::*;

use crate::components::icons;
use leptos_icons::Icon;

stylance::import_crate_style!(css, "src/components/search_bar.module.css");

/// The draft text only reaches the page when submitted, so typing never
/// triggers a refetch.
#[component]
pub fn SearchBar(
    placeholder: &'static str,
    on_submit: Callback<String>,
    /// Draft owner; pages pass their own signal when they need to clear the
    /// input (e.g. on a team switch).
    #[prop(optional)]
    draft: Option<RwSignal<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let draft = draft.unwrap_or_else(|| RwSignal::new(String::new()));
    let submit = move || on_submit.run(draft.get_untracked().trim().to_string());

    view! {
        <div class=css::bar>
            <div class=css::search>
                <input
                    class=css::input
                    type="text"
                    placeholder=placeholder
                    prop:value=draft
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button class=css::submit on:click=move |_| submit()>
                    <Icon icon=icons::SEARCH />
                </button>
            </div>
            {children.map(|children| view! { <div class=css::filters>{children()}</div> })}
        </div>
    }
}
