use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Upload or Record",
        description: "Drop in an existing file or capture audio straight from your microphone.",
    },
    Feature {
        title: "Instant Transcripts",
        description: "Audio is processed on submission; the text appears as soon as it's ready.",
    },
    Feature {
        title: "Generated Questions",
        description: "Every transcript comes with comprehension questions you can quiz yourself on.",
    },
    Feature {
        title: "Searchable History",
        description: "All your past transcriptions in one sidebar, newest first.",
    },
    Feature {
        title: "One-click Cleanup",
        description: "Remove any transcription from your history permanently.",
    },
    Feature {
        title: "Session Security",
        description: "Bearer-token sessions that expire server-side; nothing to remember locally.",
    },
];

#[component]
pub fn FeaturesView() -> Element {
    rsx! {
        div { class: "page",
            h1 { "Features" }
            p { class: "page__lead", "Everything the studio does, at a glance." }

            div { class: "card-grid card-grid--three",
                for feature in &FEATURES {
                    div { class: "card",
                        h3 { "{feature.title}" }
                        p { "{feature.description}" }
                    }
                }
            }

            div { class: "page__cta",
                Link { class: "btn btn--primary", to: Route::Register {}, "Try it now" }
            }
        }
    }
}
