use dioxus::prelude::*;

use crate::context::SessionState;
use crate::routes::RequireSession;

#[component]
pub fn ProfileView() -> Element {
    rsx! {
        RequireSession {
            ProfileBody {}
        }
    }
}

#[component]
fn ProfileBody() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let snapshot = session();
    let user = snapshot.user();
    let username = user.map_or("Guest", |u| u.username.as_str());
    let email = user.map_or("—", |u| u.email.as_str());

    rsx! {
        div { class: "page page--narrow",
            span { class: "page__badge", "Account Settings" }
            h1 { "Your Profile" }
            p { class: "page__lead", "Manage your personal information and preferences." }

            section { class: "card",
                h3 { "Basic Information" }
                div { class: "profile-grid",
                    div { class: "profile-field",
                        label { "Username" }
                        div { class: "profile-value", "{username}" }
                    }
                    div { class: "profile-field",
                        label { "Email" }
                        div { class: "profile-value", "{email}" }
                    }
                }
            }

            section { class: "card",
                h3 { "Security" }
                p { class: "card__subtitle",
                    "Sessions are secured with short-lived bearer tokens. Signing out on this "
                    "device discards the stored credential."
                }
            }
        }
    }
}
