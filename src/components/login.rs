use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::models::{Role, User};
use crate::state::use_shop;

/// Derive a display name from the email's local part, so
/// "mai.anh@example.com" signs in as "Mai Anh".
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let words: Vec<String> = local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect();
    if words.is_empty() {
        "Shopper".to_string()
    } else {
        words.join(" ")
    }
}

/// Session user ids only need to be distinct within a browser session.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn session_user_id() -> u32 {
    (js_sys::Date::now() as u64 % u64::from(u32::MAX)) as u32
}

/// Sign-in form. This is a stub: no credential is verified anywhere, any
/// email and password pair works, and an email whose local part is exactly
/// `admin` signs in with the admin role.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_shop();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let email_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = email_ref.get() {
            let input: &HtmlInputElement = &input;
            let _ = input.focus();
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_lowercase();
        if email_value.is_empty() || !email_value.contains('@') {
            form_error.set(Some("Enter a valid email address.".to_string()));
            return;
        }
        if password.get().is_empty() {
            form_error.set(Some("Enter a password.".to_string()));
            return;
        }
        let role = if email_value.split('@').next() == Some("admin") {
            Role::Admin
        } else {
            Role::User
        };
        let name = display_name(&email_value);
        state.login(User {
            id: session_user_id(),
            email: email_value,
            name,
            role,
        });
    };

    view! {
        <section class="login-page">
            <form class="login-form" on:submit=submit>
                <h1>"Sign in"</h1>
                <p class="form-hint">
                    "Demo shop: any email and password work. Use an admin@… address for the dashboard."
                </p>
                <label>
                    "Email"
                    <input
                        type="email"
                        node_ref=email_ref
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    form_error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
                <button class="cta" type="submit">
                    "Sign in"
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::display_name;

    #[test]
    fn test_display_name_capitalizes_each_word() {
        assert_eq!(display_name("mai.anh@example.com"), "Mai Anh");
        assert_eq!(display_name("linh_tran@example.com"), "Linh Tran");
        assert_eq!(display_name("bo@example.com"), "Bo");
    }

    #[test]
    fn test_display_name_never_comes_back_empty() {
        assert_eq!(display_name("...@example.com"), "Shopper");
    }
}
