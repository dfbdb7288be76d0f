use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing::info;
use ts_app::usecases::AddSchoolInput;
use ts_app::usecases::selection::write_selected_id;
use ts_core::ports::SelectionKey;
use ts_core::registration::{RegistrationForm, RegistrationState};
use ts_core::school::SchoolAddressForm;
use ts_core::{AccountId, AvatarSelection, Role, SessionUser, StudentId};
use tutoring_school_lib::bootstrap::{self, AppDeps};
use tutoring_school_lib::host::{ConsoleNavigator, PathImagePicker};

#[derive(Parser)]
#[command(name = "tutoring-school")]
#[command(about = "Tutoring School client flows from the terminal", long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SessionArgs {
    /// Id of the signed-in user
    #[arg(long, global = true)]
    user_id: Option<String>,

    /// Display name of the signed-in user
    #[arg(long, global = true, default_value = "")]
    user_name: String,

    /// Role of the signed-in user (tutor or guardian)
    #[arg(long, global = true, default_value = "tutor")]
    user_role: Role,
}

impl SessionArgs {
    fn user(&self) -> Option<SessionUser> {
        self.user_id.as_ref().map(|id| SessionUser {
            id: AccountId::new(id.as_str()),
            name: self.user_name.clone(),
            role: self.user_role,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the two-step sign-up wizard
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        /// Account type (tutor or guardian)
        #[arg(long, default_value = "tutor")]
        role: Role,
        /// Profile picture to upload after the account is created
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// Register a school owned by the signed-in user
    AddSchool {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Postal code (CEP); a complete one fills the address fields
        #[arg(long)]
        cep: String,
        #[arg(long)]
        number: String,
        /// Used only when the CEP lookup does not fill the address
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// Show the selected school and, for tutors, its students
    SchoolDetails {
        /// Select this school before loading
        #[arg(long)]
        school_id: Option<String>,
        /// Only list students whose name contains this text
        #[arg(long)]
        search: Option<String>,
        /// Unlink this student from the school
        #[arg(long)]
        unlink: Option<String>,
        /// Open this student's details
        #[arg(long)]
        open: Option<String>,
    },
    /// Show the selected task
    TaskDetails {
        /// Select this task before loading
        #[arg(long)]
        task_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::resolve_config(cli.config.as_deref())?;
    bootstrap::tracing::init_tracing_subscriber(&config.logs_dir())?;
    info!(data_dir = %config.data_dir.display(), "configuration loaded");

    let deps = bootstrap::wire_dependencies(&config, cli.session.user(), Arc::new(ConsoleNavigator))?;

    let output = match cli.command {
        Commands::Register {
            first_name,
            last_name,
            email,
            phone,
            password,
            confirm_password,
            role,
            avatar,
        } => {
            let form = RegistrationForm {
                first_name,
                last_name,
                email,
                phone,
                password,
                confirm_password,
            };
            run_register(&deps, form, role, avatar).await?
        }
        Commands::AddSchool {
            name,
            description,
            phone,
            email,
            cep,
            number,
            street,
            district,
            city,
            state,
            avatar,
        } => {
            let mut address = SchoolAddressForm {
                postal_code: cep,
                number,
                ..Default::default()
            };
            if !deps.resolve_postal_code().execute(&mut address).await {
                address.street = street.unwrap_or_default();
                address.district = district.unwrap_or_default();
                address.city = city.unwrap_or_default();
                address.state = state.unwrap_or_default();
            }
            let input = AddSchoolInput {
                name,
                description,
                phone,
                email,
                address,
                avatar: avatar.map(|p| AvatarSelection::new(p.display().to_string())),
            };
            let outcome = deps.add_school().execute(input).await?;
            serde_json::to_value(&outcome)?
        }
        Commands::SchoolDetails {
            school_id,
            search,
            unlink,
            open,
        } => run_school_details(&deps, school_id, search, unlink, open).await?,
        Commands::TaskDetails { task_id } => {
            if let Some(id) = task_id {
                write_selected_id(deps.selection.as_ref(), SelectionKey::Task, &id).await?;
            }
            let view = deps.load_task_details().execute().await?;
            json!({
                "task": view.task,
                "subjectName": view.subject_name,
                "canMarkConcluded": view.can_mark_concluded(),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run_register(
    deps: &AppDeps,
    form: RegistrationForm,
    role: Role,
    avatar: Option<PathBuf>,
) -> Result<serde_json::Value> {
    let wizard = deps.registration(Arc::new(PathImagePicker::new(avatar)));

    if let RegistrationState::Details { errors, .. } = wizard.submit_details(form).await? {
        return Ok(json!({ "step": 1, "errors": errors }));
    }
    wizard.pick_avatar().await?;
    wizard.select_role(role).await?;

    match wizard.finalize().await? {
        RegistrationState::Completed { .. } => {
            let submission = wizard
                .last_submission()
                .await
                .context("Registration completed without a submission outcome")?;
            Ok(serde_json::to_value(&submission)?)
        }
        RegistrationState::ChooseRole {
            error: Some(error), ..
        } => bail!("{error}"),
        other => bail!("Registration stopped at an unexpected step: {other:?}"),
    }
}

async fn run_school_details(
    deps: &AppDeps,
    school_id: Option<String>,
    search: Option<String>,
    unlink: Option<String>,
    open: Option<String>,
) -> Result<serde_json::Value> {
    if let Some(id) = school_id {
        write_selected_id(deps.selection.as_ref(), SelectionKey::School, &id).await?;
    }
    let mut view = deps.load_school_details().execute().await?;

    if let Some(student_id) = unlink {
        if !view.is_tutor {
            bail!("Only tutors can unlink students");
        }
        view.students = deps
            .unlink_student()
            .execute(&view.school_id, &StudentId::new(student_id))
            .await?;
    }

    let students: Vec<_> = view
        .filtered(search.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    let result = json!({
        "school": view.school,
        "address": view.formatted_address(),
        "showsQrCode": view.shows_qr_code(),
        "students": students,
    });

    if let Some(student_id) = open {
        deps.open_student_details()
            .execute(&StudentId::new(student_id))
            .await?;
    }

    Ok(result)
}
