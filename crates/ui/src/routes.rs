use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::{AppContext, SessionState};
use crate::views::{
    AboutView, AdminView, ContactView, DataSheetView, FeaturesView, HomeView, LoginView,
    ProfileView, QuizView, RegisterView, UploadView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[route("/features", FeaturesView)] Features {},
        #[route("/datasheet", DataSheetView)] DataSheet {},
        #[route("/about", AboutView)] About {},
        #[route("/contact", ContactView)] Contact {},
        #[route("/upload", UploadView)] Upload {},
        #[route("/profile", ProfileView)] Profile {},
        #[route("/admin", AdminView)] Admin {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let on_logout = move |_| {
        let auth = ctx.auth();
        let mut session = session;
        spawn(async move {
            if let Err(err) = auth.logout().await {
                tracing::warn!(%err, "logout failed");
            }
            session.set(SessionState::SignedOut);
            navigator.push(Route::Login {});
        });
    };

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar__brand", to: Route::Home {}, "SpeechPro" }
            ul { class: "navbar__links",
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Upload {}, "Upload Audio" } }
                li { Link { to: Route::Features {}, "Features" } }
                li { Link { to: Route::About {}, "About" } }
                li { Link { to: Route::Contact {}, "Contact" } }
            }
            div { class: "navbar__session",
                match session() {
                    SessionState::SignedIn(user) => rsx! {
                        Link { class: "navbar__profile", to: Route::Profile {}, "{user.username}" }
                        button { class: "navbar__logout", onclick: on_logout, "Log Out" }
                    },
                    SessionState::SignedOut => rsx! {
                        Link { class: "navbar__login", to: Route::Login {}, "Login" }
                        Link { class: "navbar__register", to: Route::Register {}, "Get Started" }
                    },
                    SessionState::Loading => rsx! {
                        span { class: "navbar__loading", "…" }
                    },
                }
            }
        }
    }
}

/// Gate for views that require an active session.
///
/// While the stored credential is being re-validated a spinner is shown;
/// a signed-out visitor is sent to the login page.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let session = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();

    use_effect(move || {
        if session() == SessionState::SignedOut {
            navigator.replace(Route::Login {});
        }
    });

    match session() {
        SessionState::Loading => rsx! {
            div { class: "page page--loading",
                div { class: "spinner" }
            }
        },
        SessionState::SignedOut => rsx! {},
        SessionState::SignedIn(_) => rsx! {
            {children}
        },
    }
}
