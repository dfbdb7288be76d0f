//! Mock implementations of the ports for unit tests.

use async_trait::async_trait;
use mockall::mock;
use ts_core::ids::{AccountId, SchoolId, StudentId, SubjectId, TaskId};
use ts_core::ports::{
    AccountPort, ImagePickerPort, ImageUploadPort, NavigationPort, PostalCodeError,
    PostalCodePort, RequestError, SchoolPort, SelectionStoreError, SelectionStorePort,
    SessionPort, StudentPort, SubjectPort, TaskPort, UploadError, UserProfileImagePort,
};
use ts_core::registration::{Account, NewAccount};
use ts_core::school::{NewSchool, PostalAddress, School, Student};
use ts_core::task::{Subject, Task};
use ts_core::{AvatarSelection, Screen, SessionUser};

mock! {
    pub Accounts {}

    #[async_trait]
    impl AccountPort for Accounts {
        async fn create_account(&self, request: NewAccount) -> Result<Account, RequestError>;
    }
}

mock! {
    pub ProfileImages {}

    #[async_trait]
    impl UserProfileImagePort for ProfileImages {
        async fn attach_profile_image(
            &self,
            account_id: &AccountId,
            image_url: &str,
        ) -> Result<(), RequestError>;
    }
}

mock! {
    pub Uploads {}

    #[async_trait]
    impl ImageUploadPort for Uploads {
        async fn upload_image(
            &self,
            image: &AvatarSelection,
            destination: &str,
        ) -> Result<String, UploadError>;
    }
}

mock! {
    pub Picker {}

    #[async_trait]
    impl ImagePickerPort for Picker {
        async fn pick_single_image(&self) -> Option<AvatarSelection>;
    }
}

mock! {
    pub Navigation {}

    #[async_trait]
    impl NavigationPort for Navigation {
        async fn navigate_to(&self, screen: Screen) -> anyhow::Result<()>;
        async fn go_back(&self) -> anyhow::Result<()>;
    }
}

mock! {
    pub Session {}

    #[async_trait]
    impl SessionPort for Session {
        async fn current_user(&self) -> Option<SessionUser>;
    }
}

mock! {
    pub Schools {}

    #[async_trait]
    impl SchoolPort for Schools {
        async fn create_school(&self, school: NewSchool) -> Result<School, RequestError>;
        async fn get_school(&self, school_id: &SchoolId) -> Result<School, RequestError>;
        async fn update_school_profile_image(
            &self,
            school_id: &SchoolId,
            image_url: &str,
        ) -> Result<(), RequestError>;
    }
}

mock! {
    pub Students {}

    #[async_trait]
    impl StudentPort for Students {
        async fn list_students_by_school(
            &self,
            school_id: &SchoolId,
        ) -> Result<Vec<Student>, RequestError>;
        async fn unlink_student_from_school(
            &self,
            student_id: &StudentId,
        ) -> Result<(), RequestError>;
    }
}

mock! {
    pub Tasks {}

    #[async_trait]
    impl TaskPort for Tasks {
        async fn get_task(&self, task_id: &TaskId) -> Result<Task, RequestError>;
    }
}

mock! {
    pub Subjects {}

    #[async_trait]
    impl SubjectPort for Subjects {
        async fn get_subject(&self, subject_id: &SubjectId) -> Result<Subject, RequestError>;
    }
}

mock! {
    pub PostalCodes {}

    #[async_trait]
    impl PostalCodePort for PostalCodes {
        async fn lookup(&self, postal_code: &str) -> Result<PostalAddress, PostalCodeError>;
    }
}

mock! {
    pub Selection {}

    #[async_trait]
    impl SelectionStorePort for Selection {
        async fn get(&self, key: &str) -> Result<Option<String>, SelectionStoreError>;
        async fn set(&self, key: &str, value: &str) -> Result<(), SelectionStoreError>;
    }
}
