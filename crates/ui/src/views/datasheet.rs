use dioxus::prelude::*;

struct Spec {
    label: &'static str,
    value: &'static str,
}

const SPECS: [Spec; 8] = [
    Spec {
        label: "Audio Sampling Rate",
        value: "16kHz / 44.1kHz / 48kHz",
    },
    Spec {
        label: "Supported Input Formats",
        value: "WAV, MP3, FLAC, OGG, WEBM, M4A",
    },
    Spec {
        label: "Transcription Accuracy",
        value: "99.2% (English), 95%+ (Global Languages)",
    },
    Spec {
        label: "Latency (Real-time)",
        value: "< 200ms per chunk",
    },
    Spec {
        label: "Encryption Standard",
        value: "AES-256 (At Rest), TLS 1.3 (In Transit)",
    },
    Spec {
        label: "Max File Size",
        value: "500MB per upload",
    },
    Spec {
        label: "Speaker Detection",
        value: "Up to 10 unique speakers per session",
    },
    Spec {
        label: "API Rate Limit",
        value: "1000 requests/min (Enterprise Tier)",
    },
];

#[component]
pub fn DataSheetView() -> Element {
    rsx! {
        div { class: "page page--narrow",
            span { class: "page__badge", "Technical Specifications" }
            h1 { "Data Sheet" }

            div { class: "card card--table",
                header { class: "card__header",
                    h2 { "System Architecture v2.0" }
                    p { class: "card__subtitle", "Last updated: Dec 20, 2025" }
                }
                dl { class: "spec-list",
                    for spec in &SPECS {
                        div { class: "spec-row",
                            dt { "{spec.label}" }
                            dd { "{spec.value}" }
                        }
                    }
                }
            }
        }
    }
}
