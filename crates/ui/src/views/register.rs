use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let auth = ctx.auth();
        spawn(async move {
            pending.set(true);
            match auth.register(&username(), &email(), &password()).await {
                Ok(()) => {
                    navigator.push(Route::Login {});
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
                h2 { "Create Account" }
                p { class: "card__subtitle", "Join us to start transcribing" }

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
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
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
                        if pending() { "Creating…" } else { "Sign Up" }
                    }
                }

                p { class: "card__footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
