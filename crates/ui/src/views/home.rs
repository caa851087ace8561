use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::SessionState;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let signed_in = matches!(session(), SessionState::SignedIn(_));

    rsx! {
        div { class: "page page--hero",
            h1 { class: "hero__title", "Speech to Text, Instantly." }
            p { class: "hero__subtitle",
                "Transform your audio files into accurate text transcriptions in seconds. "
                "Powered by advanced speech recognition technology."
            }

            div { class: "hero__actions",
                if signed_in {
                    Link { class: "btn btn--primary", to: Route::Upload {}, "Open Studio" }
                } else {
                    Link { class: "btn btn--primary", to: Route::Register {}, "Get Started Free" }
                    Link { class: "btn btn--secondary", to: Route::Login {}, "Login" }
                }
            }

            div { class: "feature-grid",
                FeatureCard {
                    title: "High Accuracy",
                    description: "State-of-the-art recognition tuned for natural speech.",
                }
                FeatureCard {
                    title: "Lightning Fast",
                    description: "Transcripts come back in seconds, not minutes.",
                }
                FeatureCard {
                    title: "Multiple Formats",
                    description: "MP3, WAV, M4A and live microphone recordings.",
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "feature-card",
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
