//! Registration page posting to `/auth/register`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use bank_types::RegisterRequest;
use leptos::prelude::*;

use crate::net::api;
use crate::util::task;

const REGISTER_FAILED: &str = "Registration failed";
const MISSING_FIELDS: &str = "Username, email and password are required.";
const INVALID_EMAIL: &str = "Enter a valid email address.";
const PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Build a registration request from raw form input.
///
/// # Errors
///
/// Returns the inline message for blank fields, an email without `@`, or a
/// confirmation that differs from the password.
pub fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        roles: None,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let registered = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        task::spawn(async move {
            match api::register(&request).await {
                Ok(resp) => {
                    log::info!("registered {}", request.username);
                    info.set(resp.message);
                    registered.set(true);
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    info.set(e.user_message(REGISTER_FAILED));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Bank Dashboard"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <Show when=move || !registered.get()>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Registering..." } else { "Register" }}
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" class:login-message--success=move || registered.get()>
                        {move || info.get()}
                    </p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    {move || if registered.get() { "Ready? " } else { "Already registered? " }}
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
