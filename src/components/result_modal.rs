//! Dialog for changing the result status of the selected applications.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::models::ApplicationResultStatus;

stylance::import_crate_style!(css, "src/components/result_modal.module.css");

#[component]
pub fn ResultModal(
    target_count: Signal<usize>,
    on_submit: Callback<ApplicationResultStatus>,
    on_close: Callback<()>,
) -> impl IntoView {
    let selected = RwSignal::new(ApplicationResultStatus::NotRated);

    view! {
        <Modal title="Change result" on_close=on_close>
            <p class=css::targets>
                {move || format!("Changing the result of {} application(s).", target_count.get())}
            </p>
            <select
                class=css::status_select
                on:change=move |ev| {
                    if let Some(status) =
                        ApplicationResultStatus::from_wire(&event_target_value(&ev))
                    {
                        selected.set(status);
                    }
                }
            >
                {ApplicationResultStatus::ALL
                    .iter()
                    .map(|&status| {
                        view! {
                            <option
                                value=status.as_str()
                                selected=move || selected.get() == status
                            >
                                {status.label()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <div class=css::footer>
                <button class=css::cancel on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class=css::submit
                    on:click=move |_| on_submit.run(selected.get_untracked())
                >
                    "Apply"
                </button>
            </div>
        </Modal>
    }
}
