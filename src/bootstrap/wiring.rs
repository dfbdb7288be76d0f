//! # Dependency Injection
//!
//! Builds the infra adapters from [`AppConfig`] and hands them to the use
//! cases as port trait objects. Assembly only: no business decisions here.

use std::sync::Arc;
use std::time::Duration;

use ts_app::usecases::{
    AddSchool, LoadSchoolDetails, LoadTaskDetails, OpenStudentDetails, RegistrationOrchestrator,
    ResolvePostalCode, SubmitRegistration, UnlinkStudent,
};
use ts_core::config::AppConfig;
use ts_core::ports::{ImagePickerPort, NavigationPort, SelectionStorePort, SessionPort};
use ts_core::SessionUser;
use ts_infra::http::build_http_client;
use ts_infra::{
    FileSelectionStore, HttpApiClient, HttpImageStorage, InMemorySessionStore, ViaCepClient,
};

/// Timeout used when the config leaves `api.timeout_secs` at 0.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),

    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),
}

/// Concrete adapters shared by every command.
pub struct AppDeps {
    pub api: Arc<HttpApiClient>,
    pub images: Arc<HttpImageStorage>,
    pub postal_codes: Arc<ViaCepClient>,
    pub selection: Arc<dyn SelectionStorePort>,
    pub session: Arc<dyn SessionPort>,
    pub navigation: Arc<dyn NavigationPort>,
}

fn http_timeout(config: &AppConfig) -> Duration {
    match config.api_timeout_secs {
        0 => DEFAULT_HTTP_TIMEOUT,
        secs => Duration::from_secs(secs),
    }
}

pub fn wire_dependencies(
    config: &AppConfig,
    session_user: Option<SessionUser>,
    navigation: Arc<dyn NavigationPort>,
) -> WiringResult<AppDeps> {
    if config.api_base_url.is_empty() {
        return Err(WiringError::MissingConfig("api.base_url"));
    }

    let client = build_http_client(http_timeout(config))
        .map_err(|e| WiringError::HttpClient(e.to_string()))?;

    Ok(AppDeps {
        api: Arc::new(HttpApiClient::new(client.clone(), &config.api_base_url)),
        images: Arc::new(HttpImageStorage::new(client.clone(), &config.image_base_url)),
        postal_codes: Arc::new(ViaCepClient::new(client, &config.postal_code_base_url)),
        selection: Arc::new(FileSelectionStore::new(config.selection_store_path())),
        session: Arc::new(InMemorySessionStore::new(session_user)),
        navigation,
    })
}

impl AppDeps {
    pub fn registration(&self, picker: Arc<dyn ImagePickerPort>) -> RegistrationOrchestrator {
        let submit = SubmitRegistration::new(
            self.api.clone(),
            self.images.clone(),
            self.api.clone(),
        );
        RegistrationOrchestrator::new(Arc::new(submit), picker, self.navigation.clone())
    }

    pub fn add_school(&self) -> AddSchool {
        AddSchool::new(
            self.session.clone(),
            self.api.clone(),
            self.images.clone(),
            self.navigation.clone(),
        )
    }

    pub fn resolve_postal_code(&self) -> ResolvePostalCode {
        ResolvePostalCode::new(self.postal_codes.clone())
    }

    pub fn load_school_details(&self) -> LoadSchoolDetails {
        LoadSchoolDetails::new(
            self.selection.clone(),
            self.session.clone(),
            self.api.clone(),
            self.api.clone(),
        )
    }

    pub fn unlink_student(&self) -> UnlinkStudent {
        UnlinkStudent::new(self.api.clone())
    }

    pub fn open_student_details(&self) -> OpenStudentDetails {
        OpenStudentDetails::new(self.selection.clone(), self.navigation.clone())
    }

    pub fn load_task_details(&self) -> LoadTaskDetails {
        LoadTaskDetails::new(self.selection.clone(), self.api.clone(), self.api.clone())
    }
}
