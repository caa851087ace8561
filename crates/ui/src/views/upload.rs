use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::api::AudioPayload;
use speech_core::model::RecordId;

use crate::context::AppContext;
use crate::routes::{RequireSession, Route};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{StatusMessage, SubmissionState, format_date};

const NOTICE_SECS: u64 = 2;

#[derive(Clone, Debug, PartialEq)]
struct HistoryRowVm {
    id: RecordId,
    filename: String,
    date: String,
    preview: String,
    text: String,
}

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    rows: Vec<HistoryRowVm>,
}

#[component]
pub fn UploadView() -> Element {
    rsx! {
        RequireSession {
            StudioBody {}
        }
    }
}

#[component]
fn StudioBody() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut submission = use_signal(SubmissionState::default);
    let mut recording = use_signal(|| false);
    let mut drag_active = use_signal(|| false);
    // Transient banner (recording hint, delete/copy feedback); wins over the
    // submission-derived banner while set.
    let mut notice = use_signal(|| None::<StatusMessage>);
    // The transcript text currently shown in the result pane: the latest
    // submission, or a history entry the user clicked.
    let mut displayed = use_signal(|| None::<String>);

    let history_ctx = ctx.clone();
    let history_resource = use_resource(move || {
        let service = history_ctx.transcriptions();
        async move {
            let records = service.history().await.map_err(ViewError::from)?;
            let rows = records
                .into_iter()
                .map(|record| HistoryRowVm {
                    id: record.id,
                    filename: record.filename.clone(),
                    date: format_date(record.created_at),
                    preview: record.preview(60),
                    text: record.text,
                })
                .collect();
            Ok(HistoryData { rows })
        }
    });

    let submit_ctx = ctx.clone();
    let submit_payload = use_callback(move |payload: AudioPayload| {
        if submission().is_pending() {
            return;
        }
        let service = submit_ctx.transcriptions();
        let mut history_resource = history_resource;
        spawn(async move {
            submission.set(SubmissionState::Pending);
            match service.submit(payload).await {
                Ok(transcript) => {
                    displayed.set(Some(transcript.text.clone()));
                    submission.set(SubmissionState::Success(transcript));
                    // Refresh only after the upload resolved; the list is a
                    // full server reload, not an incremental merge.
                    history_resource.restart();
                }
                Err(err) => {
                    submission.set(SubmissionState::Error(
                        ViewError::from(err).message().to_string(),
                    ));
                }
            }
        });
    });

    let file_ctx = ctx.clone();
    let submit_files = use_callback(move |files: Vec<FileData>| {
        let service = file_ctx.transcriptions();
        spawn(async move {
            let Some(file) = files.into_iter().next() else {
                return;
            };
            let name = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(err) => {
                    submission.set(SubmissionState::Error(format!("Could not read file: {err}")));
                    return;
                }
            };
            match service.payload_from_file(&name, bytes) {
                Ok(payload) => submit_payload.call(payload),
                Err(err) => submission.set(SubmissionState::Error(err.to_string())),
            }
        });
    });

    let record_ctx = ctx.clone();
    let on_record = use_callback(move |(): ()| {
        let recorder = record_ctx.recorder();
        if recording() {
            recording.set(false);
            notice.set(None);
            match recorder.stop() {
                Ok(payload) => submit_payload.call(payload),
                Err(err) => submission.set(SubmissionState::Error(err.to_string())),
            }
        } else {
            match recorder.start() {
                Ok(()) => {
                    recording.set(true);
                    notice.set(Some(StatusMessage::info("Recording in progress…")));
                }
                Err(err) => {
                    submission.set(SubmissionState::Error(format!(
                        "Microphone access denied or error: {err}"
                    )));
                }
            }
        }
    });

    let delete_ctx = ctx.clone();
    let on_delete = use_callback(move |id: RecordId| {
        let service = delete_ctx.transcriptions();
        let mut history_resource = history_resource;
        spawn(async move {
            match service.delete(id).await {
                Ok(()) => {
                    notice.set(Some(StatusMessage::success("Item deleted")));
                    history_resource.restart();
                }
                Err(_) => notice.set(Some(StatusMessage::error("Failed to delete"))),
            }
            tokio::time::sleep(Duration::from_secs(NOTICE_SECS)).await;
            notice.set(None);
        });
    });

    let on_copy = use_callback(move |(): ()| {
        let Some(text) = displayed() else { return };
        let js = format!("navigator.clipboard.writeText({text:?});");
        let _ = eval(&js);
        notice.set(Some(StatusMessage::success("Copied to clipboard!")));
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(NOTICE_SECS)).await;
            notice.set(None);
        });
    });

    let clear_ctx = ctx.clone();
    let on_clear = use_callback(move |(): ()| {
        clear_ctx.transcriptions().clear_latest();
        displayed.set(None);
        submission.set(SubmissionState::Idle);
    });

    let history_state = view_state_from_resource(&history_resource);
    let banner = notice().or_else(|| submission().status());
    let submission_now = submission();
    let quiz_ready = submission_now
        .transcript()
        .is_some_and(speech_core::model::Transcript::has_quiz);
    let question_prompts: Vec<String> = submission_now
        .transcript()
        .map(|transcript| {
            transcript
                .questions
                .iter()
                .map(|q| q.prompt().to_string())
                .collect()
        })
        .unwrap_or_default();
    let displayed_text = displayed();
    let history_count = match &history_state {
        ViewState::Ready(data) => data.rows.len(),
        _ => 0,
    };
    let dropzone_class = if drag_active() {
        "dropzone dropzone--active"
    } else {
        "dropzone"
    };
    let record_class = if recording() {
        "btn btn--record btn--record-active"
    } else {
        "btn btn--record"
    };

    rsx! {
        div { class: "studio",
            aside { class: "studio__sidebar",
                header { class: "studio__sidebar-header",
                    h2 { "History" }
                    span { class: "studio__count", "{history_count}" }
                }
                div { class: "studio__history",
                    match history_state {
                        ViewState::Idle => rsx! {
                            p { class: "studio__empty", "Idle" }
                        },
                        ViewState::Loading => rsx! {
                            p { class: "studio__empty", "Loading…" }
                        },
                        ViewState::Error(err) => rsx! {
                            p { class: "studio__empty", "{err.message()}" }
                        },
                        ViewState::Ready(data) => rsx! {
                            if data.rows.is_empty() {
                                p { class: "studio__empty", "No history yet." }
                            } else {
                                ul {
                                    for row in data.rows {
                                        HistoryItem {
                                            row: row.clone(),
                                            on_view: move |text| displayed.set(Some(text)),
                                            on_delete,
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }

            section { class: "studio__main",
                header { class: "studio__header",
                    div {
                        h1 { "Transcription Studio" }
                        p { class: "page__lead", "Upload audio or record voice to generate text instantly." }
                    }
                    if let Some(status) = banner {
                        div { class: "{status.kind.css_class()}", "{status.text}" }
                    }
                }

                div { class: "studio__grid",
                    div { class: "studio__input",
                        label {
                            class: "{dropzone_class}",
                            ondragover: move |evt| {
                                evt.prevent_default();
                                drag_active.set(true);
                            },
                            ondragleave: move |evt| {
                                evt.prevent_default();
                                drag_active.set(false);
                            },
                            ondrop: move |evt| {
                                evt.prevent_default();
                                drag_active.set(false);
                                submit_files.call(evt.files());
                            },
                            input {
                                class: "dropzone__input",
                                r#type: "file",
                                accept: "audio/*",
                                onchange: move |evt| submit_files.call(evt.files()),
                            }
                            h3 { "Upload Audio File" }
                            p { "Drag & drop or click to browse" }
                            p { class: "dropzone__hint", "(MP3, WAV, M4A supported)" }
                        }

                        div { class: "studio__divider", span { "or record" } }

                        button {
                            class: "{record_class}",
                            disabled: submission_now.is_pending(),
                            onclick: move |_| on_record.call(()),
                            if recording() { "Stop Recording" } else { "Start Recording" }
                        }
                    }

                    div { class: "studio__output",
                        header { class: "studio__output-header",
                            h3 { "Transcription Result" }
                            div { class: "studio__output-actions",
                                button {
                                    class: "btn btn--icon",
                                    title: "Copy to Clipboard",
                                    disabled: displayed_text.is_none(),
                                    onclick: move |_| on_copy.call(()),
                                    "Copy"
                                }
                                button {
                                    class: "btn btn--icon",
                                    title: "Clear",
                                    disabled: displayed_text.is_none(),
                                    onclick: move |_| on_clear.call(()),
                                    "Clear"
                                }
                            }
                        }
                        div { class: "studio__transcript",
                            if let Some(text) = displayed_text {
                                p { "{text}" }
                            } else {
                                p { class: "studio__placeholder", "Transcription will appear here…" }
                            }
                        }
                    }
                }

                if !question_prompts.is_empty() {
                    section { class: "studio__questions",
                        h3 { "Relevant Questions" }
                        ol {
                            for prompt in question_prompts {
                                li { "{prompt}" }
                            }
                        }
                        if quiz_ready {
                            button {
                                class: "btn btn--primary",
                                onclick: move |_| {
                                    navigator.push(Route::Quiz {});
                                },
                                "Take the Quiz"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryItem(
    row: HistoryRowVm,
    on_view: EventHandler<String>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let text = row.text.clone();
    let id = row.id;
    rsx! {
        li { class: "history-item",
            div { class: "history-item__body", onclick: move |_| on_view.call(text.clone()),
                div { class: "history-item__meta",
                    span { class: "history-item__name", "{row.filename}" }
                    span { class: "history-item__date", "{row.date}" }
                }
                p { class: "history-item__preview", "{row.preview}" }
            }
            button {
                class: "history-item__delete",
                title: "Delete",
                onclick: move |_| on_delete.call(id),
                "✕"
            }
        }
    }
}
