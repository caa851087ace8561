use dioxus::prelude::*;

#[component]
pub fn ContactView() -> Element {
    rsx! {
        div { class: "page page--narrow",
            h1 { "Contact Us" }
            p { class: "page__lead", "We'd love to hear from you. Send us a message below." }

            div { class: "card",
                form { class: "form",
                    div { class: "form__field",
                        label { "Name" }
                        input { r#type: "text", placeholder: "Your Name" }
                    }
                    div { class: "form__field",
                        label { "Email" }
                        input { r#type: "email", placeholder: "you@example.com" }
                    }
                    div { class: "form__field",
                        label { "Message" }
                        textarea { rows: "5", placeholder: "How can we help?" }
                    }
                    button { class: "btn btn--primary btn--block", r#type: "button", "Send Message" }
                }
            }
        }
    }
}
