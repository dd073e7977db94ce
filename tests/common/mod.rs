#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;

use yoga_studio::api::{
    AuthApi, AuthClient, HttpClient, SessionApi, SessionApiClient, TeacherApi, TeacherClient,
    UserApi, UserClient,
};
use yoga_studio::error::{ClientError, ClientResult};
use yoga_studio::models::auth::{LoginRequest, RegisterRequest};
use yoga_studio::models::identity::Identity;
use yoga_studio::models::session::Session;
use yoga_studio::models::teacher::Teacher;
use yoga_studio::models::user::User;
use yoga_studio::views::{Navigator, Notifier, Route};
use yoga_studio::{routes, AppState, Config, SessionState};

pub const ADMIN_EMAIL: &str = "yoga@studio.com";
pub const ADMIN_PASSWORD: &str = "test!1234";

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

// Reference backend

pub struct TestBackend {
    pub addr: SocketAddr,
    pub base_url: String,
    pub state: AppState,
}

/// Starts a freshly seeded backend on an ephemeral port.
pub async fn spawn_backend() -> TestBackend {
    init_tracing();

    let config = Config::default();
    let state = AppState::new(&config).await.unwrap();
    let app = routes::app(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestBackend {
        addr,
        base_url: format!("http://{}", addr),
        state,
    }
}

/// The four HTTP clients sharing one holder.
pub struct Clients {
    pub state: Arc<SessionState>,
    pub auth: AuthClient,
    pub sessions: SessionApiClient,
    pub teachers: TeacherClient,
    pub users: UserClient,
}

impl Clients {
    pub fn new(base_url: &str) -> Self {
        let state = Arc::new(SessionState::new());
        let http = HttpClient::new(base_url, state.clone()).unwrap();
        Self {
            auth: AuthClient::new(http.clone()),
            sessions: SessionApiClient::new(http.clone()),
            teachers: TeacherClient::new(http.clone()),
            users: UserClient::new(http),
            state,
        }
    }

    /// Logs in through the auth client and stores the identity.
    pub async fn log_in(&self, email: &str, password: &str) -> Identity {
        let identity = self
            .auth
            .login(&LoginRequest::new(email, password))
            .await
            .unwrap();
        self.state.log_in(identity.clone());
        identity
    }
}

pub fn register_request(email: &str, first_name: &str, last_name: &str, password: &str) -> RegisterRequest {
    let mut request = RegisterRequest::default();
    request.email = email.to_string();
    request.first_name = first_name.to_string();
    request.last_name = last_name.to_string();
    request.password = password.to_string();
    request
}

// Fixtures

pub fn identity(id: u64, admin: bool) -> Identity {
    Identity {
        id,
        username: "yoga@studio.com".to_string(),
        first_name: "Yoga".to_string(),
        last_name: "Studio".to_string(),
        admin,
        token: "token".to_string(),
        token_type: "Bearer".to_string(),
    }
}

pub fn logged_in(id: u64, admin: bool) -> Arc<SessionState> {
    let state = Arc::new(SessionState::new());
    state.log_in(identity(id, admin));
    state
}

pub fn session(id: u64, teacher_id: u64, users: Vec<u64>) -> Session {
    Session {
        id: Some(id),
        name: "Morning Flow".to_string(),
        description: "Relaxing class".to_string(),
        date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        teacher_id,
        users,
        created_at: Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        updated_at: Some(Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap()),
    }
}

pub fn teacher(id: u64) -> Teacher {
    Teacher {
        id,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        created_at: None,
        updated_at: None,
    }
}

pub fn user(id: u64) -> User {
    User {
        id,
        email: "user@yoga.com".to_string(),
        first_name: "Yoga".to_string(),
        last_name: "User".to_string(),
        admin: false,
        password: None,
        created_at: None,
        updated_at: None,
    }
}

fn rejected(status: u16) -> ClientError {
    ClientError::Status {
        status,
        message: "rejected".to_string(),
    }
}

// Navigation and notices

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    To(Route),
    Back,
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub history: Mutex<Vec<Nav>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn history(&self) -> Vec<Nav> {
        self.history.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Nav> {
        self.history.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.history.lock().unwrap().push(Nav::To(route));
    }

    fn back(&self) {
        self.history.lock().unwrap().push(Nav::Back);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub action: String,
    pub duration: Duration,
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn open(&self, message: &str, action: &str, duration: Duration) {
        self.notices.lock().unwrap().push(Notice {
            message: message.to_string(),
            action: action.to_string(),
            duration,
        });
    }
}

// Scripted API doubles

/// Answers login with `identity` (or 401 when `None`) and register with
/// success unless `reject_register` is set.
#[derive(Default)]
pub struct FakeAuth {
    pub identity: Option<Identity>,
    pub reject_register: bool,
    pub logins: Mutex<Vec<LoginRequest>>,
    pub registrations: Mutex<Vec<RegisterRequest>>,
}

impl AuthApi for FakeAuth {
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.registrations.lock().unwrap().push(request.clone());
        if self.reject_register {
            Err(rejected(400))
        } else {
            Ok(())
        }
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<Identity> {
        self.logins.lock().unwrap().push(request.clone());
        self.identity.clone().ok_or_else(|| rejected(401))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCall {
    All,
    Detail(u64),
    Create(Session),
    Update(u64, Session),
    Delete(u64),
    Participate(u64, u64),
    UnParticipate(u64, u64),
}

/// Keeps sessions in a vector and applies participation changes to it.
#[derive(Default)]
pub struct FakeSessions {
    pub sessions: Mutex<Vec<Session>>,
    pub calls: Mutex<Vec<SessionCall>>,
}

impl FakeSessions {
    pub fn with(sessions: Vec<Session>) -> Arc<Self> {
        Arc::new(Self {
            sessions: Mutex::new(sessions),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<SessionCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, wanted: &SessionCall) -> usize {
        self.calls().iter().filter(|call| *call == wanted).count()
    }

    fn record(&self, call: SessionCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn find(&self, id: u64) -> ClientResult<Session> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == Some(id))
            .cloned()
            .ok_or_else(|| rejected(404))
    }
}

impl SessionApi for FakeSessions {
    async fn all(&self) -> ClientResult<Vec<Session>> {
        self.record(SessionCall::All);
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn detail(&self, id: u64) -> ClientResult<Session> {
        self.record(SessionCall::Detail(id));
        self.find(id)
    }

    async fn create(&self, session: &Session) -> ClientResult<Session> {
        self.record(SessionCall::Create(session.clone()));
        let mut created = session.clone();
        created.id = Some(100);
        self.sessions.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u64, session: &Session) -> ClientResult<Session> {
        self.record(SessionCall::Update(id, session.clone()));
        let mut updated = session.clone();
        updated.id = Some(id);
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> ClientResult<()> {
        self.record(SessionCall::Delete(id));
        self.sessions.lock().unwrap().retain(|s| s.id != Some(id));
        Ok(())
    }

    async fn participate(&self, id: u64, user_id: u64) -> ClientResult<()> {
        self.record(SessionCall::Participate(id, user_id));
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .iter_mut()
            .find(|s| s.id == Some(id))
            .ok_or_else(|| rejected(404))?;
        session.users.push(user_id);
        Ok(())
    }

    async fn un_participate(&self, id: u64, user_id: u64) -> ClientResult<()> {
        self.record(SessionCall::UnParticipate(id, user_id));
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .iter_mut()
            .find(|s| s.id == Some(id))
            .ok_or_else(|| rejected(404))?;
        session.users.retain(|u| *u != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeTeachers {
    pub teachers: Vec<Teacher>,
    pub details: Mutex<Vec<u64>>,
}

impl FakeTeachers {
    pub fn with(teachers: Vec<Teacher>) -> Arc<Self> {
        Arc::new(Self {
            teachers,
            details: Mutex::new(Vec::new()),
        })
    }

    pub fn details(&self) -> Vec<u64> {
        self.details.lock().unwrap().clone()
    }
}

impl TeacherApi for FakeTeachers {
    async fn all(&self) -> ClientResult<Vec<Teacher>> {
        Ok(self.teachers.clone())
    }

    async fn detail(&self, id: u64) -> ClientResult<Teacher> {
        self.details.lock().unwrap().push(id);
        self.teachers
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| rejected(404))
    }
}

#[derive(Default)]
pub struct FakeUsers {
    pub users: Vec<User>,
    pub lookups: Mutex<Vec<u64>>,
    pub deletions: Mutex<Vec<u64>>,
}

impl UserApi for FakeUsers {
    async fn get_by_id(&self, id: u64) -> ClientResult<User> {
        self.lookups.lock().unwrap().push(id);
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| rejected(404))
    }

    async fn delete(&self, id: u64) -> ClientResult<()> {
        self.deletions.lock().unwrap().push(id);
        Ok(())
    }
}
