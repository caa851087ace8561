use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::{RequireSession, Route};
use crate::vm::{QuizStage, QuizVm};

#[component]
pub fn QuizView() -> Element {
    rsx! {
        RequireSession {
            QuizBody {}
        }
    }
}

#[component]
fn QuizBody() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // The quiz runs over the questions of the latest transcript. Arriving
    // here without one (or with no valid questions) redirects back to the
    // studio instead of rendering an empty quiz.
    let mut quiz = use_signal(move || {
        ctx.transcriptions()
            .latest_transcript()
            .and_then(|transcript| QuizVm::new(transcript.questions).ok())
    });

    use_effect(move || {
        if quiz.read().is_none() {
            navigator.replace(Route::Upload {});
        }
    });

    let stage = quiz.read().as_ref().map(QuizVm::stage);
    let Some(stage) = stage else {
        return rsx! {};
    };

    rsx! {
        div { class: "page page--quiz",
            span { class: "page__badge", "Audio Comprehension Quiz" }
            h1 { "Test Your Knowledge" }
            p { class: "page__lead", "Let's see how much you remembered from the audio." }

            match stage {
                QuizStage::InProgress(card) => rsx! {
                    div { class: "quiz-progress",
                        for segment in card.segments.iter().copied() {
                            div { class: "{segment.css_class()}" }
                        }
                    }

                    div { class: "card card--quiz",
                        div { class: "quiz-question",
                            span { class: "quiz-question__number", "{card.number}" }
                            h2 { "{card.prompt}" }
                        }

                        div { class: "quiz-options",
                            for (idx, option) in card.options.iter().enumerate() {
                                {
                                    let selected = card.selected == Some(idx);
                                    let class = if selected {
                                        "quiz-option quiz-option--selected"
                                    } else {
                                        "quiz-option"
                                    };
                                    let label = option.clone();
                                    rsx! {
                                        button {
                                            class: "{class}",
                                            onclick: move |_| {
                                                if let Some(vm) = quiz.write().as_mut() {
                                                    vm.select(idx);
                                                }
                                            },
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }

                        footer { class: "quiz-footer",
                            span { class: "quiz-footer__count",
                                "Question {card.number} of {card.total}"
                            }
                            if card.is_last {
                                button {
                                    class: "btn btn--primary",
                                    disabled: card.selected.is_none(),
                                    onclick: move |_| {
                                        if let Some(vm) = quiz.write().as_mut() {
                                            vm.submit();
                                        }
                                    },
                                    "Submit Quiz"
                                }
                            } else {
                                button {
                                    class: "btn btn--primary",
                                    disabled: card.selected.is_none(),
                                    onclick: move |_| {
                                        if let Some(vm) = quiz.write().as_mut() {
                                            vm.advance();
                                        }
                                    },
                                    "Next Question"
                                }
                            }
                        }
                    }
                },
                QuizStage::Completed(score) => rsx! {
                    div { class: "quiz-progress",
                        for segment in score.segments.iter().copied() {
                            div { class: "{segment.css_class()}" }
                        }
                    }

                    div { class: "card card--quiz card--quiz-complete",
                        h2 { "Quiz Completed!" }
                        p { class: "card__subtitle", "Here's how you performed:" }

                        div { class: "quiz-score",
                            div { class: "quiz-score__box",
                                div { class: "quiz-score__value", "{score.score}/{score.total}" }
                                div { class: "quiz-score__label", "Total Score" }
                            }
                            div { class: "quiz-score__box",
                                div { class: "quiz-score__value", "{score.percentage}%" }
                                div { class: "quiz-score__label", "Accuracy" }
                            }
                        }

                        div { class: "quiz-review",
                            h3 { "Review Answers" }
                            for row in &score.rows {
                                {
                                    let row_class = if row.is_correct {
                                        "quiz-review__row quiz-review__row--correct"
                                    } else {
                                        "quiz-review__row quiz-review__row--incorrect"
                                    };
                                    rsx! {
                                        div { class: "{row_class}",
                                            p { class: "quiz-review__prompt", "{row.prompt}" }
                                            p { class: "quiz-review__answer",
                                                "Your Answer: {row.selected_text}"
                                            }
                                            if !row.is_correct {
                                                p { class: "quiz-review__correct",
                                                    "Correct: {row.correct_text}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "quiz-actions",
                            button {
                                class: "btn btn--secondary",
                                onclick: move |_| {
                                    navigator.push(Route::Upload {});
                                },
                                "Back to Upload"
                            }
                            button {
                                class: "btn btn--primary",
                                onclick: move |_| {
                                    if let Some(vm) = quiz.write().as_mut() {
                                        vm.retake();
                                    }
                                },
                                "Retake Quiz"
                            }
                        }
                    }
                },
            }
        }
    }
}
