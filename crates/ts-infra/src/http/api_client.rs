//! REST client for the tutoring-school backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use ts_core::ports::{
    AccountPort, RequestError, SchoolPort, StudentPort, SubjectPort, TaskPort,
    UserProfileImagePort,
};
use ts_core::school::{NewSchool, School, Student};
use ts_core::task::{Subject, Task};
use ts_core::{Account, AccountId, NewAccount, Role, SchoolId, StudentId, SubjectId, TaskId};

use super::error::{check_status, transport_error};
use super::join_url;

/// Wire body of `POST /users`.
#[derive(Serialize)]
struct CreateUserBody<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    role: Role,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileImageBody<'a> {
    profile_image: &'a str,
}

pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let response = check_status(response).await?;
        response.json::<T>().await.map_err(|e| RequestError::Decode(e.to_string()))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        response.json::<T>().await.map_err(|e| RequestError::Decode(e.to_string()))
    }

    async fn patch<B>(&self, path: &str, body: Option<&B>) -> Result<(), RequestError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(%url, "PATCH");
        let mut request = self.client.patch(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl AccountPort for HttpApiClient {
    async fn create_account(&self, request: NewAccount) -> Result<Account, RequestError> {
        let body = CreateUserBody {
            name: &request.name,
            email: &request.email,
            phone: &request.phone,
            role: request.role,
            password: request.password.expose(),
        };
        self.post_json("users", &body).await
    }
}

#[async_trait]
impl UserProfileImagePort for HttpApiClient {
    async fn attach_profile_image(
        &self,
        account_id: &AccountId,
        image_url: &str,
    ) -> Result<(), RequestError> {
        let body = ProfileImageBody {
            profile_image: image_url,
        };
        self.patch(&format!("users/{account_id}/profile-image"), Some(&body))
            .await
    }
}

#[async_trait]
impl SchoolPort for HttpApiClient {
    async fn create_school(&self, school: NewSchool) -> Result<School, RequestError> {
        self.post_json("schools", &school).await
    }

    async fn get_school(&self, school_id: &SchoolId) -> Result<School, RequestError> {
        self.get_json(&format!("schools/{school_id}")).await
    }

    async fn update_school_profile_image(
        &self,
        school_id: &SchoolId,
        image_url: &str,
    ) -> Result<(), RequestError> {
        let body = ProfileImageBody {
            profile_image: image_url,
        };
        self.patch(&format!("schools/{school_id}/profile-image"), Some(&body))
            .await
    }
}

#[async_trait]
impl StudentPort for HttpApiClient {
    async fn list_students_by_school(
        &self,
        school_id: &SchoolId,
    ) -> Result<Vec<Student>, RequestError> {
        self.get_json(&format!("schools/{school_id}/students")).await
    }

    async fn unlink_student_from_school(
        &self,
        student_id: &StudentId,
    ) -> Result<(), RequestError> {
        self.patch::<()>(&format!("students/{student_id}/unlink-school"), None)
            .await
    }
}

#[async_trait]
impl TaskPort for HttpApiClient {
    async fn get_task(&self, task_id: &TaskId) -> Result<Task, RequestError> {
        self.get_json(&format!("tasks/{task_id}")).await
    }
}

#[async_trait]
impl SubjectPort for HttpApiClient {
    async fn get_subject(&self, subject_id: &SubjectId) -> Result<Subject, RequestError> {
        self.get_json(&format!("subjects/{subject_id}")).await
    }
}
