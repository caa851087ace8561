use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, SessionState};
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let auth = ctx.auth();
        let mut session = session;
        spawn(async move {
            pending.set(true);
            match auth.login(&username(), &password()).await {
                Ok(user) => {
                    error.set(None);
                    session.set(SessionState::SignedIn(user));
                    navigator.push(Route::Home {});
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "page page--auth",
            div { class: "card card--auth",
                h2 { "Welcome Back" }
                p { class: "card__subtitle", "Please sign in to continue" }

                if let Some(message) = error() {
                    div { class: "form__error", "{message}" }
                }

                form { class: "form", onsubmit: on_submit,
                    div { class: "form__field",
                        label { "Username" }
                        input {
                            r#type: "text",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                            required: true,
                        }
                    }
                    div { class: "form__field",
                        label { "Password" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                            required: true,
                        }
                    }
                    button {
                        class: "btn btn--primary btn--block",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() { "Signing in…" } else { "Log In" }
                    }
                }

                p { class: "card__footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
