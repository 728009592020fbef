//! Integration tests for the page controllers
//!
//! The backend, navigator and notifier are in-memory fakes implementing the
//! port traits; session state uses the real in-memory and file stores.
//!
//! Run with: cargo test --test page_flows_test -- --nocapture

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value as JsonValue};
use tempfile::TempDir;

use letterbox_core::adapters::{FileSessionStore, MemorySessionStore};
use letterbox_core::domain::result::{Error, Result as CoreResult};
use letterbox_core::ports::{Backend, Navigator, Notifier, SessionStore};
use letterbox_core::services::{
    LettersPage, LoginPage, MyPage, PageContext, PageState, RegisterPage, SendLetterPage,
    SendOutcome, AUTH_REQUIRED_MESSAGE, LETTER_SENT_MESSAGE, LOGIN_SUCCESS_MESSAGE, LOGOUT_MESSAGE,
};
use letterbox_core::{
    Failure, LetterDraft, LoginForm, Notice, NoticeLevel, RegisterForm, Route, SessionToken,
};

// ============================================================================
// Test Helpers
// ============================================================================

#[derive(Debug, Clone)]
struct Call {
    method: &'static str,
    path: String,
    token: Option<String>,
    body: Option<JsonValue>,
}

/// Backend answering from a script keyed by method and path
#[derive(Default)]
struct FakeBackend {
    responses: Mutex<HashMap<(&'static str, String), Result<JsonValue, Failure>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    fn respond(&self, method: &'static str, path: &str, response: Result<JsonValue, Failure>) {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), response);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&JsonValue>,
        token: Option<&SessionToken>,
    ) -> Result<JsonValue, Failure> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            token: token.map(|t| t.as_str().to_string()),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .get(&(method, path.to_string()))
            .cloned()
            .unwrap_or_else(|| Err(Failure::from_status(404, "")))
    }
}

impl Backend for FakeBackend {
    fn get(&self, path: &str, token: Option<&SessionToken>) -> Result<JsonValue, Failure> {
        self.answer("GET", path, None, token)
    }

    fn post(
        &self,
        path: &str,
        body: &JsonValue,
        token: Option<&SessionToken>,
    ) -> Result<JsonValue, Failure> {
        self.answer("POST", path, Some(body), token)
    }
}

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    fn last(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().copied()
    }

    fn count(&self) -> usize {
        self.routes.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Session store whose storage is unusable
struct BrokenSessionStore;

impl SessionStore for BrokenSessionStore {
    fn get(&self) -> CoreResult<Option<SessionToken>> {
        Err(Error::storage("disk unavailable"))
    }

    fn set(&self, _token: &SessionToken) -> CoreResult<()> {
        Err(Error::storage("disk unavailable"))
    }

    fn clear(&self) -> CoreResult<()> {
        Err(Error::storage("disk unavailable"))
    }
}

struct Harness {
    backend: Arc<FakeBackend>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<RecordingNavigator>,
    notifier: Arc<RecordingNotifier>,
    ctx: PageContext,
}

fn harness_with(session: Arc<dyn SessionStore>) -> Harness {
    let backend = Arc::new(FakeBackend::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let ctx = PageContext::new(
        backend.clone(),
        session.clone(),
        navigator.clone(),
        notifier.clone(),
    );
    Harness {
        backend,
        session,
        navigator,
        notifier,
        ctx,
    }
}

fn harness() -> Harness {
    harness_with(Arc::new(MemorySessionStore::new()))
}

fn signed_in() -> Harness {
    let token = SessionToken::new("abc123").unwrap();
    harness_with(Arc::new(MemorySessionStore::with_token(token)))
}

fn alice() -> JsonValue {
    json!({"username": "alice", "name": "Alice", "createdAt": "2024-01-01T00:00:00Z"})
}

fn error_notice(message: &str) -> Notice {
    Notice {
        level: NoticeLevel::Error,
        message: message.to_string(),
    }
}

// ============================================================================
// Route Guarding
// ============================================================================

#[test]
fn test_protected_load_without_token_makes_no_request() {
    let h = harness();

    let mut my_page = MyPage::new(h.ctx.clone());
    assert!(matches!(my_page.load(), Err(Error::AuthRequired)));
    assert_eq!(my_page.state(), &PageState::Unauthenticated);

    let mut letters = LettersPage::new(h.ctx.clone());
    assert!(matches!(letters.load(), Err(Error::AuthRequired)));

    let mut compose = SendLetterPage::new(h.ctx.clone());
    assert!(matches!(compose.load(), Err(Error::AuthRequired)));

    assert!(h.backend.calls().is_empty());
    assert_eq!(h.navigator.last(), Some(Route::Login));
    assert_eq!(h.notifier.last(), Some(error_notice(AUTH_REQUIRED_MESSAGE)));
}

#[test]
fn test_auth_failure_clears_session_then_next_load_is_unauthenticated() {
    let h = signed_in();
    h.backend.respond(
        "GET",
        "/api/letters/received",
        Err(Failure::from_status(401, r#"{"message":"token expired"}"#)),
    );

    let mut letters = LettersPage::new(h.ctx.clone());
    assert!(matches!(letters.load(), Err(Error::AuthInvalid(_))));
    assert_eq!(h.session.get().unwrap(), None);
    assert_eq!(h.navigator.last(), Some(Route::Login));
    assert_eq!(h.notifier.last(), Some(error_notice("token expired")));

    let calls_before = h.backend.calls().len();
    let mut my_page = MyPage::new(h.ctx.clone());
    assert!(matches!(my_page.load(), Err(Error::AuthRequired)));
    assert_eq!(h.backend.calls().len(), calls_before);
}

#[test]
fn test_data_fetch_server_error_keeps_session() {
    let h = signed_in();
    h.backend.respond(
        "GET",
        "/api/letters/received",
        Err(Failure::from_status(500, "")),
    );

    let mut letters = LettersPage::new(h.ctx.clone());
    assert!(letters.load().is_err());
    assert!(h.session.get().unwrap().is_some());
    assert_eq!(
        letters.state().error_message(),
        Some("Failed to load letters.")
    );
    assert_eq!(h.navigator.count(), 0);
}

#[test]
fn test_identity_fetch_any_failure_clears_session() {
    let h = signed_in();
    h.backend.respond("GET", "/api/auth/me", Err(Failure::transport("refused")));

    let mut my_page = MyPage::new(h.ctx.clone());
    assert!(my_page.load().is_err());
    assert_eq!(h.session.get().unwrap(), None);
    assert_eq!(h.navigator.last(), Some(Route::Login));
    assert_eq!(
        h.notifier.last(),
        Some(error_notice("Failed to load user information."))
    );
}

#[test]
fn test_unreadable_session_file_redirects_to_login() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("session.json")).unwrap();
    let h = harness_with(Arc::new(FileSessionStore::new(temp_dir.path())));

    let mut my_page = MyPage::new(h.ctx.clone());
    assert!(matches!(my_page.load(), Err(Error::AuthRequired)));
    assert_eq!(my_page.state(), &PageState::Unauthenticated);
    assert_eq!(h.navigator.last(), Some(Route::Login));
    assert_eq!(h.notifier.last(), Some(error_notice(AUTH_REQUIRED_MESSAGE)));
    assert!(h.backend.calls().is_empty());
}

#[test]
fn test_broken_session_store_fails_the_load() {
    let h = harness_with(Arc::new(BrokenSessionStore));

    let mut letters = LettersPage::new(h.ctx.clone());
    assert!(matches!(letters.load(), Err(Error::Storage(_))));
    assert!(matches!(letters.state(), PageState::Failed(_)));
    assert!(h.backend.calls().is_empty());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_blank_fields_make_no_request() {
    let h = signed_in();
    h.backend.respond("GET", "/api/auth/me", Ok(alice()));

    let mut login = LoginPage::new(h.ctx.clone());
    login.form = LoginForm::new("   ", "secret");
    assert!(matches!(login.submit(), Err(Error::Validation(_))));

    let mut register = RegisterPage::new(h.ctx.clone());
    register.form = RegisterForm::new("Alice", "", "secret");
    assert!(matches!(register.submit(), Err(Error::Validation(_))));

    let mut compose = SendLetterPage::new(h.ctx.clone());
    compose.load().unwrap();
    compose.draft = LetterDraft::new("Hi", "bob", "  ");
    assert!(matches!(compose.submit(), Err(Error::Validation(_))));

    let calls = h.backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/api/auth/me");
    assert_eq!(h.notifier.count(), 3);
    assert!(!login.is_submitting());
    assert!(!register.is_submitting());
    assert!(!compose.is_submitting());
}

// ============================================================================
// Login / Logout
// ============================================================================

#[test]
fn test_login_stores_token_used_by_next_request() {
    let h = harness();
    h.backend
        .respond("POST", "/api/auth/login", Ok(json!({"token": "abc123"})));
    h.backend.respond("GET", "/api/auth/me", Ok(alice()));

    let mut login = LoginPage::new(h.ctx.clone());
    login.form = LoginForm::new(" alice ", "secret");
    login.submit().unwrap();

    assert_eq!(h.session.get().unwrap().unwrap().as_str(), "abc123");
    assert_eq!(h.navigator.last(), Some(Route::MyPage));
    assert_eq!(
        h.notifier.last().map(|n| n.message),
        Some(LOGIN_SUCCESS_MESSAGE.to_string())
    );
    assert_eq!(login.form, LoginForm::default());

    let mut my_page = MyPage::new(h.ctx.clone());
    my_page.load().unwrap();
    assert_eq!(my_page.greeting(), "Welcome, Alice!");

    let calls = h.backend.calls();
    assert_eq!(calls[0].body, Some(json!({"username": "alice", "password": "secret"})));
    assert_eq!(calls[0].token, None);
    assert_eq!(calls[1].token.as_deref(), Some("abc123"));
}

#[test]
fn test_login_rejected_does_not_touch_session() {
    let h = signed_in();
    h.backend.respond(
        "POST",
        "/api/auth/login",
        Err(Failure::from_status(401, "")),
    );

    let mut login = LoginPage::new(h.ctx.clone());
    login.form = LoginForm::new("alice", "wrong");
    assert!(matches!(login.submit(), Err(Error::AuthInvalid(_))));

    assert!(h.session.get().unwrap().is_some());
    assert_eq!(h.navigator.count(), 0);
    assert_eq!(
        h.notifier.last(),
        Some(error_notice(
            "Login failed! Please check your username and password."
        ))
    );
}

#[test]
fn test_logout_clears_and_goes_home_even_when_call_fails() {
    let h = signed_in();
    h.backend.respond(
        "POST",
        "/api/auth/logout",
        Err(Failure::transport("connection reset")),
    );

    let mut my_page = MyPage::new(h.ctx.clone());
    assert!(my_page.logout().is_err());

    assert_eq!(h.session.get().unwrap(), None);
    assert_eq!(h.navigator.last(), Some(Route::Home));
    let calls = h.backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].token.as_deref(), Some("abc123"));
}

#[test]
fn test_logout_success() {
    let h = signed_in();
    h.backend
        .respond("POST", "/api/auth/logout", Ok(JsonValue::Null));

    let mut my_page = MyPage::new(h.ctx.clone());
    my_page.logout().unwrap();

    assert_eq!(h.session.get().unwrap(), None);
    assert_eq!(h.navigator.last(), Some(Route::Home));
    assert_eq!(
        h.notifier.last().map(|n| n.message),
        Some(LOGOUT_MESSAGE.to_string())
    );
}

#[test]
fn test_logout_without_token_skips_backend() {
    let h = harness();

    let mut my_page = MyPage::new(h.ctx.clone());
    my_page.logout().unwrap();

    assert!(h.backend.calls().is_empty());
    assert_eq!(h.navigator.last(), Some(Route::Home));
    assert_eq!(
        h.notifier.last().map(|n| n.message),
        Some(LOGOUT_MESSAGE.to_string())
    );
}

#[test]
fn test_logout_goes_home_before_reporting_storage_error() {
    let h = harness_with(Arc::new(BrokenSessionStore));

    let mut my_page = MyPage::new(h.ctx.clone());
    assert!(matches!(my_page.logout(), Err(Error::Storage(_))));

    assert_eq!(h.navigator.last(), Some(Route::Home));
    assert!(h.backend.calls().is_empty());
    assert_eq!(h.notifier.count(), 0);
}

// ============================================================================
// Register
// ============================================================================

#[test]
fn test_register_success_goes_to_login() {
    let h = harness();
    h.backend
        .respond("POST", "/api/auth/register", Ok(JsonValue::Null));

    let mut register = RegisterPage::new(h.ctx.clone());
    register.form = RegisterForm::new(" Alice ", "alice", "secret");
    register.submit().unwrap();

    assert_eq!(h.navigator.last(), Some(Route::Login));
    assert_eq!(
        h.backend.calls()[0].body,
        Some(json!({"name": "Alice", "username": "alice", "password": "secret"}))
    );
}

#[test]
fn test_register_conflict_shows_server_text() {
    let h = harness();
    h.backend.respond(
        "POST",
        "/api/auth/register",
        Err(Failure::from_status(409, "username already taken")),
    );

    let mut register = RegisterPage::new(h.ctx.clone());
    register.form = RegisterForm::new("Alice", "alice", "secret");
    assert!(matches!(register.submit(), Err(Error::Request(_))));

    assert_eq!(h.navigator.count(), 0);
    assert_eq!(h.notifier.last(), Some(error_notice("username already taken")));
}

// ============================================================================
// Inbox
// ============================================================================

#[test]
fn test_inbox_open_letter() {
    let h = signed_in();
    h.backend.respond(
        "GET",
        "/api/letters/received",
        Ok(json!([
            {"id": 1, "title": "Hi", "senderName": "bob", "sentAt": "2024-01-01T00:00:00Z"}
        ])),
    );
    h.backend.respond(
        "GET",
        "/api/letters/1",
        Ok(json!({
            "id": 1,
            "title": "Hi",
            "senderName": "bob",
            "recipientUsername": "alice",
            "content": "Hello!",
            "sentAt": "2024-01-01T00:00:00Z"
        })),
    );

    let mut letters = LettersPage::new(h.ctx.clone());
    letters.load().unwrap();
    assert_eq!(letters.letters().len(), 1);
    assert_eq!(letters.letters()[0].id, "1");

    let id = letters.letters()[0].id.clone();
    letters.open(&id).unwrap();
    assert_eq!(letters.selected().map(|l| l.content.as_str()), Some("Hello!"));
    assert_eq!(letters.letters().len(), 1);

    let calls = h.backend.calls();
    assert_eq!(calls[1].path, "/api/letters/1");
    assert_eq!(calls[1].token.as_deref(), Some("abc123"));

    letters.close();
    assert!(letters.selected().is_none());
}

fn inbox_with_one_letter(h: &Harness) -> LettersPage {
    h.backend.respond(
        "GET",
        "/api/letters/received",
        Ok(json!([
            {"id": "7", "title": "Hi", "senderName": "bob", "sentAt": "2024-01-01T00:00:00Z"}
        ])),
    );
    let mut letters = LettersPage::new(h.ctx.clone());
    letters.load().unwrap();
    letters
}

#[test]
fn test_open_letter_auth_failure_clears_session() {
    let h = signed_in();
    let mut letters = inbox_with_one_letter(&h);
    h.backend.respond(
        "GET",
        "/api/letters/7",
        Err(Failure::from_status(401, "")),
    );

    assert!(matches!(letters.open("7"), Err(Error::AuthInvalid(_))));
    assert_eq!(h.session.get().unwrap(), None);
    assert_eq!(h.navigator.last(), Some(Route::Login));
    assert_eq!(letters.letters().len(), 1);
    assert!(letters.selected().is_none());
}

#[test]
fn test_open_letter_server_error_keeps_inbox_and_session() {
    let h = signed_in();
    let mut letters = inbox_with_one_letter(&h);
    h.backend.respond(
        "GET",
        "/api/letters/7",
        Err(Failure::from_status(500, "")),
    );

    assert!(matches!(letters.open("7"), Err(Error::Unknown(_))));
    assert!(h.session.get().unwrap().is_some());
    assert_eq!(h.navigator.count(), 0);
    assert_eq!(
        h.notifier.last(),
        Some(error_notice("Failed to load the letter."))
    );
    assert_eq!(letters.letters().len(), 1);
    assert!(letters.selected().is_none());
}

#[test]
fn test_open_letter_id_is_one_path_segment() {
    let h = signed_in();
    let mut letters = inbox_with_one_letter(&h);
    h.backend.respond(
        "GET",
        "/api/letters/a%2Fb",
        Err(Failure::from_status(404, "")),
    );

    assert!(letters.open("a/b").is_err());
    let calls = h.backend.calls();
    assert_eq!(calls.last().map(|c| c.path.as_str()), Some("/api/letters/a%2Fb"));
}

#[test]
fn test_empty_inbox() {
    let h = signed_in();
    h.backend
        .respond("GET", "/api/letters/received", Ok(json!([])));

    let mut letters = LettersPage::new(h.ctx.clone());
    letters.load().unwrap();
    assert!(letters.letters().is_empty());
    assert_eq!(letters.state(), &PageState::Ready(Vec::new()));
}

// ============================================================================
// Send Letter
// ============================================================================

#[test]
fn test_send_letter_server_message_shown_and_control_reenabled() {
    let h = signed_in();
    h.backend.respond("GET", "/api/auth/me", Ok(alice()));
    h.backend.respond(
        "POST",
        "/api/letters/send",
        Err(Failure::from_status(400, r#"{"message":"unknown recipient"}"#)),
    );

    let mut compose = SendLetterPage::new(h.ctx.clone());
    compose.load().unwrap();
    compose.draft = LetterDraft::new("Hi", "nobody", "Hello!");

    assert!(matches!(compose.submit(), Err(Error::Request(_))));
    assert_eq!(h.notifier.last(), Some(error_notice("unknown recipient")));
    assert_eq!(h.navigator.count(), 0);
    assert!(!compose.is_submitting());
    assert_eq!(compose.draft, LetterDraft::new("Hi", "nobody", "Hello!"));
    assert!(h.session.get().unwrap().is_some());
}

#[test]
fn test_send_letter_success() {
    let h = signed_in();
    h.backend.respond("GET", "/api/auth/me", Ok(alice()));
    h.backend
        .respond("POST", "/api/letters/send", Ok(JsonValue::Null));

    let mut compose = SendLetterPage::new(h.ctx.clone());
    compose.load().unwrap();
    compose.draft = LetterDraft::new(" Hi ", "bob", "Hello!");
    assert_eq!(compose.submit().unwrap(), SendOutcome::Sent);

    let calls = h.backend.calls();
    assert_eq!(
        calls[1].body,
        Some(json!({
            "title": "Hi",
            "recipientUsername": "bob",
            "content": "Hello!",
            "senderUsername": "alice"
        }))
    );
    assert_eq!(calls[1].token.as_deref(), Some("abc123"));
    assert_eq!(h.navigator.last(), Some(Route::MyPage));
    assert_eq!(
        h.notifier.last().map(|n| n.message),
        Some(LETTER_SENT_MESSAGE.to_string())
    );
    assert_eq!(compose.draft, LetterDraft::default());
}

#[test]
fn test_send_letter_auth_failure_clears_session() {
    let h = signed_in();
    h.backend.respond("GET", "/api/auth/me", Ok(alice()));
    h.backend.respond(
        "POST",
        "/api/letters/send",
        Err(Failure::from_status(401, "")),
    );

    let mut compose = SendLetterPage::new(h.ctx.clone());
    compose.load().unwrap();
    compose.draft = LetterDraft::new("Hi", "bob", "Hello!");

    assert!(matches!(compose.submit(), Err(Error::AuthInvalid(_))));
    assert_eq!(h.session.get().unwrap(), None);
    assert_eq!(h.navigator.last(), Some(Route::Login));
    assert!(!compose.is_submitting());
}

#[test]
fn test_send_before_sender_loaded_sends_nothing() {
    let h = signed_in();

    let mut compose = SendLetterPage::new(h.ctx.clone());
    compose.draft = LetterDraft::new("Hi", "bob", "Hello!");
    assert_eq!(compose.submit().unwrap(), SendOutcome::SenderNotLoaded);

    assert!(h.backend.calls().is_empty());
    assert_eq!(h.notifier.count(), 0);
}

// ============================================================================
// Late Results
// ============================================================================

#[test]
fn test_stale_settle_after_unmount_has_no_effect() {
    let h = signed_in();

    let mut my_page = MyPage::new(h.ctx.clone());
    let (ticket, _token) = my_page.begin_load().unwrap();
    my_page.unmount();

    my_page
        .settle(ticket, Err(Failure::from_status(401, "")))
        .unwrap();

    assert_eq!(my_page.state(), &PageState::Loading);
    assert!(h.session.get().unwrap().is_some());
    assert_eq!(h.navigator.count(), 0);
    assert_eq!(h.notifier.count(), 0);
}

#[test]
fn test_superseded_load_is_ignored() {
    let h = signed_in();

    let mut letters = LettersPage::new(h.ctx.clone());
    let (first, _) = letters.begin_load().unwrap();
    let (second, _) = letters.begin_load().unwrap();

    letters.settle(first, Ok(Vec::new())).unwrap();
    assert!(letters.state().is_loading());

    letters.settle(second, Ok(Vec::new())).unwrap();
    assert_eq!(letters.state(), &PageState::Ready(Vec::new()));
}

// ============================================================================
// File Session Store
// ============================================================================

#[test]
fn test_file_session_survives_new_context() {
    let temp_dir = TempDir::new().unwrap();

    {
        let h = harness_with(Arc::new(FileSessionStore::new(temp_dir.path())));
        h.backend
            .respond("POST", "/api/auth/login", Ok(json!("abc123")));
        let mut login = LoginPage::new(h.ctx.clone());
        login.form = LoginForm::new("alice", "secret");
        login.submit().unwrap();
    }

    let h = harness_with(Arc::new(FileSessionStore::new(temp_dir.path())));
    h.backend.respond("GET", "/api/auth/me", Ok(alice()));
    let mut my_page = MyPage::new(h.ctx.clone());
    my_page.load().unwrap();

    assert_eq!(h.backend.calls()[0].token.as_deref(), Some("abc123"));
}
