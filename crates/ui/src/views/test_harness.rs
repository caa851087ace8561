use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use services::api::{AudioPayload, SpeechApi};
use services::error::ApiError;
use services::{AuthService, Recorder, SessionStore, TranscriptionService};
use speech_core::model::{Question, RecordId, Transcript, TranscriptionRecord, User};
use speech_core::time::fixed_now;
use storage::repository::InMemoryRepository;

use crate::context::{SessionState, UiApp, build_app_context};
use crate::views::{HomeView, LoginView, QuizView, UploadView};

fn test_user() -> User {
    User {
        username: "alice".into(),
        email: "alice@example.com".into(),
    }
}

/// Scripted backend for view tests.
pub struct StubApi {
    pub records: Vec<TranscriptionRecord>,
    pub upload_questions: usize,
}

impl StubApi {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            upload_questions: 0,
        }
    }

    pub fn with_records(records: Vec<TranscriptionRecord>) -> Self {
        Self {
            records,
            upload_questions: 0,
        }
    }

    pub fn with_upload_questions(count: usize) -> Self {
        Self {
            records: Vec::new(),
            upload_questions: count,
        }
    }
}

#[async_trait]
impl SpeechApi for StubApi {
    async fn login(&self, _: &str, _: &str) -> Result<String, ApiError> {
        Ok("test-token".into())
    }

    async fn register(&self, _: &str, _: &str, _: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn me(&self) -> Result<User, ApiError> {
        Ok(test_user())
    }

    async fn upload(&self, _: AudioPayload) -> Result<Transcript, ApiError> {
        let options: Vec<String> = (0..4).map(|i| format!("option {i}")).collect();
        let questions = (0..self.upload_questions)
            .map(|i| Question::new(format!("generated question {i}"), options.clone(), 0).unwrap())
            .collect();
        Ok(Transcript {
            text: "stub transcript".into(),
            questions,
        })
    }

    async fn history(&self) -> Result<Vec<TranscriptionRecord>, ApiError> {
        Ok(self.records.clone())
    }

    async fn delete_record(&self, _: RecordId) -> Result<(), ApiError> {
        Ok(())
    }
}

pub fn test_record(id: i64) -> TranscriptionRecord {
    TranscriptionRecord {
        id: RecordId::new(id),
        filename: format!("clip-{id}.wav"),
        text: format!("transcript text {id}"),
        created_at: fixed_now(),
    }
}

struct TestApp {
    auth: Arc<AuthService>,
    transcriptions: Arc<TranscriptionService>,
    recorder: Arc<Recorder>,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn transcriptions(&self) -> Arc<TranscriptionService> {
        Arc::clone(&self.transcriptions)
    }

    fn recorder(&self) -> Arc<Recorder> {
        Arc::clone(&self.recorder)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Login,
    Upload,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: SessionState,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let session = props.session.clone();
    use_context_provider(move || Signal::new(session));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Upload => rsx! { UploadView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub transcriptions: Arc<TranscriptionService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: StubApi) -> ViewHarness {
    setup_view_harness_with_session(view, api, SessionState::SignedIn(test_user()))
}

pub fn setup_view_harness_with_session(
    view: ViewKind,
    api: StubApi,
    session: SessionState,
) -> ViewHarness {
    let api: Arc<dyn SpeechApi> = Arc::new(api);
    let store = SessionStore::new();
    let credentials = Arc::new(InMemoryRepository::new());
    let auth = Arc::new(AuthService::new(
        Arc::clone(&api),
        Arc::clone(&store),
        credentials,
    ));
    let transcriptions = Arc::new(TranscriptionService::new(api));
    let recorder = Arc::new(Recorder::new());

    let app = Arc::new(TestApp {
        auth,
        transcriptions: Arc::clone(&transcriptions),
        recorder,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps { app, view, session },
    );

    ViewHarness {
        dom,
        transcriptions,
    }
}
