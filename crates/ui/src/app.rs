use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, SessionState};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    // Session state lives at the root so the navbar and the route guards see
    // the same signal. It starts in `Loading` until the stored credential has
    // been checked against the backend.
    let session = use_signal(|| SessionState::Loading);
    use_context_provider(|| session);

    use_future(move || {
        let auth = ctx.auth();
        let mut session = session;
        async move {
            match auth.restore().await {
                Ok(Some(user)) => session.set(SessionState::SignedIn(user)),
                Ok(None) => session.set(SessionState::SignedOut),
                Err(err) => {
                    tracing::warn!(%err, "session restore failed");
                    session.set(SessionState::SignedOut);
                }
            }
        }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route titles are rendered inside the page.
        document::Title { "SpeechPro" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
