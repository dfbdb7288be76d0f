use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, info_span, warn, Instrument};
use ts_core::ports::{
    ImageUploadPort, NavigationPort, PostalCodePort, RequestError, SchoolPort, SessionPort,
};
use ts_core::school::{NewSchool, School, SchoolAddressForm};
use ts_core::{AvatarOutcome, AvatarSelection, ImageDestination, Screen};

use crate::usecases::profile_image::UploadProfileImage;

#[derive(Debug, thiserror::Error)]
pub enum AddSchoolError {
    #[error("no signed-in user")]
    NotAuthenticated,
    #[error("create school failed: {0}")]
    CreateSchool(#[from] RequestError),
    #[error("navigation failed: {0}")]
    Navigation(#[source] anyhow::Error),
}

/// Values of the add-school form.
#[derive(Debug, Clone, Default)]
pub struct AddSchoolInput {
    pub name: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: SchoolAddressForm,
    pub avatar: Option<AvatarSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddSchoolOutcome {
    pub school: School,
    pub avatar: AvatarOutcome,
}

/// Creates a school owned by the signed-in user, attaches its picture when
/// one was picked and returns the user to the tutor home screen.
pub struct AddSchool {
    session: Arc<dyn SessionPort>,
    schools: Arc<dyn SchoolPort>,
    upload_profile_image: UploadProfileImage,
    navigation: Arc<dyn NavigationPort>,
}

impl AddSchool {
    pub fn new(
        session: Arc<dyn SessionPort>,
        schools: Arc<dyn SchoolPort>,
        uploads: Arc<dyn ImageUploadPort>,
        navigation: Arc<dyn NavigationPort>,
    ) -> Self {
        Self {
            session,
            schools,
            upload_profile_image: UploadProfileImage::new(uploads),
            navigation,
        }
    }

    pub async fn execute(&self, input: AddSchoolInput) -> Result<AddSchoolOutcome, AddSchoolError> {
        let span = info_span!("usecase.add_school.execute", name = %input.name);
        async {
            let user = self
                .session
                .current_user()
                .await
                .ok_or(AddSchoolError::NotAuthenticated)?;

            let request = NewSchool {
                user_id: Some(user.id),
                name: input.name,
                description: input.description,
                phone: input.phone,
                email: input.email,
                postal_code: input.address.postal_code,
                address: input.address.street,
                address_number: input.address.number,
                district: input.address.district,
                city: input.address.city,
                state: input.address.state,
                profile_image: None,
            };

            let school = self.schools.create_school(request).await.map_err(|err| {
                error!(error = %err, "school creation failed");
                err
            })?;
            info!(school_id = %school.id, "school created");

            let schools = Arc::clone(&self.schools);
            let school_id = school.id.clone();
            let avatar = self
                .upload_profile_image
                .execute(
                    input.avatar.as_ref(),
                    ImageDestination::School(school.id.clone()),
                    move |url| async move {
                        schools.update_school_profile_image(&school_id, &url).await
                    },
                )
                .await;

            self.navigation
                .navigate_to(Screen::TutorHome)
                .await
                .map_err(AddSchoolError::Navigation)?;

            Ok(AddSchoolOutcome { school, avatar })
        }
        .instrument(span)
        .await
    }
}

/// Fills the address fields from the postal code once it is complete.
pub struct ResolvePostalCode {
    postal_codes: Arc<dyn PostalCodePort>,
}

impl ResolvePostalCode {
    pub fn new(postal_codes: Arc<dyn PostalCodePort>) -> Self {
        Self { postal_codes }
    }

    /// Returns whether the address was filled from the lookup.
    pub async fn execute(&self, form: &mut SchoolAddressForm) -> bool {
        let Some(postal_code) = form.complete_postal_code() else {
            form.apply_lookup(None);
            return false;
        };

        match self.postal_codes.lookup(&postal_code).await {
            Ok(address) => {
                form.apply_lookup(Some(address));
                true
            }
            Err(err) => {
                warn!(postal_code = %postal_code, error = %err, "postal code lookup failed");
                form.apply_lookup(None);
                false
            }
        }
    }
}
