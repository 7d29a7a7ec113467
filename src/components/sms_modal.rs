//! Compose dialog for sending an SMS to the selected applicants.

use leptos::prelude::*;

use crate::components::modal::Modal;

stylance::import_crate_style!(css, "src/components/sms_modal.module.css");

#[component]
pub fn SmsModal(
    recipient_count: Signal<usize>,
    on_send: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let can_send = Signal::derive(move || !content.with(|c| c.trim().is_empty()));

    view! {
        <Modal title="Send SMS" on_close=on_close>
            <p class=css::recipients>
                {move || format!("Sending to {} applicant(s).", recipient_count.get())}
            </p>
            <textarea
                class=css::content
                rows="6"
                placeholder="Message content"
                prop:value=content
                on:input=move |ev| content.set(event_target_value(&ev))
            />
            <div class=css::footer>
                <button class=css::cancel on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class=css::send
                    disabled=move || !can_send.get()
                    on:click=move |_| {
                        let message = content.get_untracked().trim().to_string();
                        if !message.is_empty() {
                            on_send.run(message);
                        }
                    }
                >
                    "Send"
                </button>
            </div>
        </Modal>
    }
}
