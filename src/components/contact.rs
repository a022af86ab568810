use leptos::prelude::*;

use crate::state::use_shop;

/// Contact page: store details next to a message form. Nothing is sent
/// anywhere; a valid submit just flips the form into a thank-you note.
#[component]
pub fn ContactPage() -> impl IntoView {
    let state = use_shop();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filled = !name.get().trim().is_empty()
            && !email.get().trim().is_empty()
            && !message.get().trim().is_empty();
        if filled {
            submitted.set(true);
        } else {
            form_error.set(Some("Please fill in all three fields.".to_string()));
        }
    };

    view! {
        <section class="contact-page">
            <h1>"Contact us"</h1>
            <div class="contact-layout">
                <div class="contact-info">
                    <p class="footer-title">"The store"</p>
                    <p>"36 Cau Giay, Hanoi"</p>
                    <p>"Daily 8:00 - 21:00"</p>
                    <p>"(+84) 24 555 0136"</p>
                    <p>"hello@gaumeo.shop"</p>
                    <p class="contact-note">
                        "Bring your pet along; the water bowls by the door are for them."
                    </p>
                </div>
                <Show
                    when=move || !submitted.get()
                    fallback=move || {
                        view! {
                            <div class="thanks-note">
                                <h2>"Thanks, " {move || name.get()} "!"</h2>
                                <p>"We read every message and reply within a day."</p>
                                <button class="ghost" on:click=move |_| state.navigate_slug("home")>
                                    "Back to home"
                                </button>
                            </div>
                        }
                    }
                >
                    <form class="contact-form" on:submit=submit>
                        <label>
                            "Name"
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Message"
                            <textarea
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        {move || {
                            form_error
                                .get()
                                .map(|text| view! { <p class="form-error">{text}</p> })
                        }}
                        <button class="cta" type="submit">
                            "Send message"
                        </button>
                    </form>
                </Show>
            </div>
        </section>
    }
}
