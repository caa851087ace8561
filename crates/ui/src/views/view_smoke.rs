use services::api::AudioPayload;

use crate::context::SessionState;

use super::test_harness::{
    StubApi, ViewKind, setup_view_harness, setup_view_harness_with_session, test_record,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero() {
    let mut harness = setup_view_harness(ViewKind::Home, StubApi::empty());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Speech to Text, Instantly."), "missing hero in {html}");
    assert!(html.contains("Open Studio"), "missing signed-in CTA in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login, StubApi::empty());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Welcome Back"), "missing title in {html}");
    assert!(html.contains("Username"), "missing username field in {html}");
    assert!(html.contains("Log In"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_smoke_renders_idle_studio() {
    let mut harness = setup_view_harness(ViewKind::Upload, StubApi::empty());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Transcription Studio"), "missing title in {html}");
    assert!(html.contains("Start Recording"), "missing record button in {html}");
    assert!(html.contains("No history yet."), "missing empty history in {html}");
    assert!(
        html.contains("Transcription will appear here"),
        "missing result placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_smoke_lists_history_rows() {
    let api = StubApi::with_records(vec![test_record(1), test_record(2)]);
    let mut harness = setup_view_harness(ViewKind::Upload, api);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("clip-1.wav"), "missing first row in {html}");
    assert!(html.contains("clip-2.wav"), "missing second row in {html}");
    assert!(html.contains("Nov 14, 2023"), "missing formatted date in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_waits_while_session_restores() {
    let mut harness = setup_view_harness_with_session(
        ViewKind::Upload,
        StubApi::empty(),
        SessionState::Loading,
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("spinner"), "missing loading gate in {html}");
    assert!(
        !html.contains("Transcription Studio"),
        "studio should not render while restoring in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let api = StubApi::with_upload_questions(2);
    let mut harness = setup_view_harness(ViewKind::Quiz, api);

    // Seed the latest transcript the quiz reads its questions from.
    let payload = AudioPayload::from_file("seed.wav", vec![0]).unwrap();
    harness
        .transcriptions
        .submit(payload)
        .await
        .expect("seed upload");

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Test Your Knowledge"), "missing title in {html}");
    assert!(
        html.contains("generated question 0"),
        "missing first prompt in {html}"
    );
    assert!(html.contains("Question 1 of 2"), "missing counter in {html}");
    assert!(html.contains("option 0"), "missing options in {html}");
}
