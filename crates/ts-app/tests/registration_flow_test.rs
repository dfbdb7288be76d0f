use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use tracing_subscriber::EnvFilter;
use ts_app::usecases::{RegistrationOrchestrator, SubmitRegistration};
use ts_core::ports::{
    AccountPort, ImagePickerPort, ImageUploadPort, NavigationPort, RequestError, UploadError,
    UserProfileImagePort,
};
use ts_core::registration::{RegistrationForm, RegistrationState};
use ts_core::{Account, AccountId, AvatarOutcome, AvatarSelection, NewAccount, Role, Screen};

#[derive(Clone)]
struct SharedLogBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedLogBuffer {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            buffer: self.buffer.clone(),
        }
    }
}

struct SharedLogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

static LOG_BUFFER: OnceLock<Arc<Mutex<Vec<u8>>>> = OnceLock::new();

fn init_test_tracing() -> Arc<Mutex<Vec<u8>>> {
    LOG_BUFFER
        .get_or_init(|| {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            let writer = SharedLogBuffer {
                buffer: buffer.clone(),
            };
            let subscriber = tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::new("warn"))
                .with_writer(writer)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .expect("set global tracing subscriber");
            buffer
        })
        .clone()
}

fn captured_logs(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8_lossy(&buffer.lock().unwrap()).into_owned()
}

#[derive(Default)]
struct CallLog(Mutex<Vec<String>>);

impl CallLog {
    fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct FakeAccounts {
    log: Arc<CallLog>,
    fail: bool,
}

#[async_trait]
impl AccountPort for FakeAccounts {
    async fn create_account(&self, request: NewAccount) -> Result<Account, RequestError> {
        self.log.push(format!(
            "create_account:{}:{}:{}",
            request.name, request.email, request.role
        ));
        if self.fail {
            return Err(RequestError::Status {
                status: 409,
                message: "email already registered".into(),
            });
        }
        Ok(Account {
            id: AccountId::new("acc-1"),
            name: request.name,
            email: request.email,
            phone: request.phone,
            role: request.role,
            profile_image: None,
        })
    }
}

struct FakeUploads {
    log: Arc<CallLog>,
}

#[async_trait]
impl ImageUploadPort for FakeUploads {
    async fn upload_image(
        &self,
        image: &AvatarSelection,
        destination: &str,
    ) -> Result<String, UploadError> {
        self.log
            .push(format!("upload_image:{}:{destination}", image.local_ref()));
        Ok(format!("https://img.example.com/{destination}/avatar.jpg"))
    }
}

struct FakeProfileImages {
    log: Arc<CallLog>,
    fail: bool,
}

#[async_trait]
impl UserProfileImagePort for FakeProfileImages {
    async fn attach_profile_image(
        &self,
        account_id: &AccountId,
        image_url: &str,
    ) -> Result<(), RequestError> {
        self.log
            .push(format!("attach_profile_image:{account_id}:{image_url}"));
        if self.fail {
            return Err(RequestError::Status {
                status: 503,
                message: "profile service unavailable".into(),
            });
        }
        Ok(())
    }
}

struct FixedPicker(Option<AvatarSelection>);

#[async_trait]
impl ImagePickerPort for FixedPicker {
    async fn pick_single_image(&self) -> Option<AvatarSelection> {
        self.0.clone()
    }
}

struct RecordingNavigation {
    log: Arc<CallLog>,
}

#[async_trait]
impl NavigationPort for RecordingNavigation {
    async fn navigate_to(&self, screen: Screen) -> anyhow::Result<()> {
        self.log.push(format!("navigate_to:{screen}"));
        Ok(())
    }

    async fn go_back(&self) -> anyhow::Result<()> {
        self.log.push("go_back");
        Ok(())
    }
}

fn build_orchestrator(
    fail_create: bool,
    picked: Option<&str>,
) -> (RegistrationOrchestrator, Arc<CallLog>) {
    build_orchestrator_with_attach(fail_create, false, picked)
}

fn build_orchestrator_with_attach(
    fail_create: bool,
    fail_attach: bool,
    picked: Option<&str>,
) -> (RegistrationOrchestrator, Arc<CallLog>) {
    let log = Arc::new(CallLog::default());
    let submit = SubmitRegistration::new(
        Arc::new(FakeAccounts {
            log: log.clone(),
            fail: fail_create,
        }),
        Arc::new(FakeUploads { log: log.clone() }),
        Arc::new(FakeProfileImages {
            log: log.clone(),
            fail: fail_attach,
        }),
    );
    let orchestrator = RegistrationOrchestrator::new(
        Arc::new(submit),
        Arc::new(FixedPicker(picked.map(AvatarSelection::new))),
        Arc::new(RecordingNavigation { log: log.clone() }),
    );
    (orchestrator, log)
}

fn filled_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ana".into(),
        last_name: "Souza".into(),
        email: "ana@escola.com".into(),
        phone: "(81) 98888-7777".into(),
        password: "s3nh4-forte".into(),
        confirm_password: "s3nh4-forte".into(),
    }
}

#[tokio::test]
async fn registration_flow_creates_guardian_with_avatar_then_goes_to_login() {
    let (orchestrator, log) = build_orchestrator(false, Some("file:///tmp/me.jpg"));

    let state = orchestrator
        .submit_details(filled_form())
        .await
        .expect("submit details");
    assert!(matches!(state, RegistrationState::ChooseRole { .. }));

    orchestrator.pick_avatar().await.expect("pick avatar");
    orchestrator
        .select_role(Role::Guardian)
        .await
        .expect("select role");

    let state = orchestrator.finalize().await.expect("finalize");
    assert_eq!(
        state,
        RegistrationState::Completed {
            account_id: AccountId::new("acc-1")
        }
    );

    assert_eq!(
        log.entries(),
        vec![
            "create_account:Ana Souza:ana@escola.com:GUARDIAN".to_string(),
            "upload_image:file:///tmp/me.jpg:users/acc-1".to_string(),
            "attach_profile_image:acc-1:https://img.example.com/users/acc-1/avatar.jpg".to_string(),
            "navigate_to:Login".to_string(),
        ]
    );

    let outcome = orchestrator
        .last_submission()
        .await
        .expect("submission outcome recorded");
    assert!(matches!(outcome.avatar, AvatarOutcome::Attached { .. }));
}

#[tokio::test]
async fn registration_flow_back_preserves_values_and_failure_stays_on_role_step() {
    let (orchestrator, log) = build_orchestrator(true, None);

    orchestrator
        .submit_details(filled_form())
        .await
        .expect("submit details");
    orchestrator
        .select_role(Role::Guardian)
        .await
        .expect("select role");

    let state = orchestrator.back().await.expect("back");
    match &state {
        RegistrationState::Details { form, role, .. } => {
            assert_eq!(form, &filled_form());
            assert_eq!(*role, Role::Guardian);
        }
        other => panic!("expected details step, got {other:?}"),
    }

    orchestrator
        .submit_details(filled_form())
        .await
        .expect("resubmit details");
    let state = orchestrator.finalize().await.expect("finalize");

    match state {
        RegistrationState::ChooseRole { role, error, .. } => {
            assert_eq!(role, Role::Guardian);
            assert!(error.is_some(), "failure should be recorded");
        }
        other => panic!("expected role step, got {other:?}"),
    }
    assert_eq!(
        log.entries(),
        vec!["create_account:Ana Souza:ana@escola.com:GUARDIAN".to_string()]
    );
}

#[tokio::test]
async fn registration_flow_exit_only_goes_back() {
    let (orchestrator, log) = build_orchestrator(false, None);

    let state = orchestrator.exit().await.expect("exit");

    assert_eq!(state, RegistrationState::Exited);
    assert_eq!(log.entries(), vec!["go_back".to_string()]);
}

#[tokio::test]
async fn registration_flow_attach_failure_still_completes_and_is_logged() {
    let logs = init_test_tracing();
    let (orchestrator, log) = build_orchestrator_with_attach(false, true, Some("/tmp/me.jpg"));

    orchestrator
        .submit_details(filled_form())
        .await
        .expect("submit details");
    orchestrator.pick_avatar().await.expect("pick avatar");
    let state = orchestrator.finalize().await.expect("finalize");

    assert_eq!(
        state,
        RegistrationState::Completed {
            account_id: AccountId::new("acc-1")
        }
    );
    assert_eq!(
        log.entries(),
        vec![
            "create_account:Ana Souza:ana@escola.com:TUTOR".to_string(),
            "upload_image:/tmp/me.jpg:users/acc-1".to_string(),
            "attach_profile_image:acc-1:https://img.example.com/users/acc-1/avatar.jpg".to_string(),
            "navigate_to:Login".to_string(),
        ]
    );

    let outcome = orchestrator
        .last_submission()
        .await
        .expect("submission outcome recorded");
    assert_eq!(
        outcome.avatar,
        AvatarOutcome::AttachFailed {
            url: "https://img.example.com/users/acc-1/avatar.jpg".into(),
            reason: "server responded with 503: profile service unavailable".into(),
        }
    );
    assert!(captured_logs(&logs).contains("profile image attach failed"));
}
