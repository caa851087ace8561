use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page page--narrow",
            h1 { "About SpeechPro" }
            p { class: "page__lead",
                "Transforming the way you interact with audio. Whether you're transcribing "
                "meetings, lectures, or personal notes, SpeechPro provides accurate, secure, "
                "and fast results powered by advanced speech recognition technology."
            }

            div { class: "card-grid",
                div { class: "card",
                    h3 { "Fast Transcription" }
                    p { "Get your audio converted to text in seconds using our optimized processing engine." }
                }
                div { class: "card",
                    h3 { "History Tracking" }
                    p { "Access your past transcriptions anytime. Securely stored for your convenience." }
                }
                div { class: "card",
                    h3 { "Comprehension Quizzes" }
                    p { "Auto-generated questions help you check how much of the audio actually stuck." }
                }
                div { class: "card",
                    h3 { "Private by Default" }
                    p { "Your recordings belong to you. Delete any transcript with one click." }
                }
            }
        }
    }
}
