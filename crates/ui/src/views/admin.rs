use dioxus::prelude::*;

use crate::routes::RequireSession;

struct HealthMetric {
    label: &'static str,
    value: &'static str,
    level: u32,
}

const HEALTH: [HealthMetric; 3] = [
    HealthMetric {
        label: "CPU Usage",
        value: "14%",
        level: 14,
    },
    HealthMetric {
        label: "Memory",
        value: "2.4GB / 8GB",
        level: 30,
    },
    HealthMetric {
        label: "Storage",
        value: "1.2TB / 4TB",
        level: 25,
    },
];

#[component]
pub fn AdminView() -> Element {
    rsx! {
        RequireSession {
            div { class: "page",
                span { class: "page__badge page__badge--danger", "Restricted Access" }
                h1 { "Admin Control" }
                p { class: "page__lead", "System-wide monitoring and infrastructure management." }

                div { class: "card-grid card-grid--three",
                    for metric in &HEALTH {
                        div { class: "card",
                            h3 { "{metric.label}" }
                            div { class: "meter",
                                div {
                                    class: "meter__fill",
                                    style: "width: {metric.level}%",
                                }
                            }
                            p { class: "card__subtitle", "{metric.value}" }
                        }
                    }
                }
            }
        }
    }
}
