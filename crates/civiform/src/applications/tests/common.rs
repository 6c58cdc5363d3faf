use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::applicant::{ApplicantData, QuestionDefinition, QuestionKind};
use crate::applications::domain::{
    Account, Applicant, Application, ApplicationId, LifecycleStage, ProgramId,
};
use crate::applications::repository::{
    ApplicationRepository, NotifierError, RepositoryError, StatusNotification, StatusNotifier,
    StatusWrite,
};
use crate::applications::{admin_router, AdminState, ProgramAdminService};
use crate::i18n::MessageCatalog;
use crate::program::{Block, LocalizedStrings, ProgramDefinition, Status, StatusDefinitions};
use crate::views::{BaseHtmlLayout, ProgramApplicationView};

pub(super) const PROGRAM: ProgramId = ProgramId(3);
pub(super) const APPLICATION: ApplicationId = ApplicationId(12);

pub(super) fn program() -> ProgramDefinition {
    ProgramDefinition {
        id: PROGRAM,
        name: "Utility Discount".to_string(),
        blocks: vec![
            Block::new(
                "1",
                "Income",
                "Household income",
                vec![QuestionDefinition::new(
                    1,
                    "Monthly income",
                    "monthly_income",
                    QuestionKind::Currency,
                )],
            ),
            Block::new(
                "2",
                "Documents",
                "Proof of residence",
                vec![QuestionDefinition::new(
                    2,
                    "Utility bill",
                    "utility_bill",
                    QuestionKind::FileUpload,
                )],
            ),
        ],
        statuses: StatusDefinitions::new(vec![
            Status::new("Approved")
                .with_email(LocalizedStrings::with_default("Your application was approved.")),
            Status::new("Denied"),
        ]),
    }
}

pub(super) fn application(email: Option<&str>) -> Application {
    let program = program();
    let data = ApplicantData::from_json(
        &json!({
            "applicant": {
                "monthly_income": { "currency_cents": 150_000, "updated_at": 1_708_453_800_000_i64 },
                "utility_bill": { "file_key": "applicant-7/bill.pdf" }
            }
        }),
        &program.question_definitions(),
    )
    .expect("applicant data loads");

    Application {
        id: APPLICATION,
        program_id: PROGRAM,
        applicant: Applicant {
            name: Some("Ada Lovelace".to_string()),
            account: Account {
                email_address: email.map(str::to_string),
            },
            data,
        },
        latest_status: None,
        note: None,
        submitted_at: Utc.with_ymd_and_hms(2024, 2, 21, 12, 0, 0).unwrap(),
        lifecycle: LifecycleStage::Active,
    }
}

pub(super) fn build_service(
    application: Application,
) -> (
    ProgramAdminService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::seeded(program(), application));
    let notifier = Arc::new(MemoryNotifier::default());
    let service = ProgramAdminService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}

pub(super) fn admin_router_with_service<R, N>(service: ProgramAdminService<R, N>) -> axum::Router
where
    R: ApplicationRepository + 'static,
    N: StatusNotifier + 'static,
{
    let view = ProgramApplicationView::new(
        BaseHtmlLayout::default(),
        Arc::new(MessageCatalog::en_us()),
    );
    admin_router(Arc::new(AdminState::new(Arc::new(service), Arc::new(view))))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    programs: Arc<Mutex<HashMap<ProgramId, ProgramDefinition>>>,
    applications: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl MemoryRepository {
    pub(super) fn seeded(program: ProgramDefinition, application: Application) -> Self {
        let repository = Self::default();
        repository
            .programs
            .lock()
            .expect("repository mutex poisoned")
            .insert(program.id, program);
        repository
            .applications
            .lock()
            .expect("repository mutex poisoned")
            .insert(application.id, application);
        repository
    }

    pub(super) fn stored(&self, id: ApplicationId) -> Application {
        self.applications
            .lock()
            .expect("repository mutex poisoned")
            .get(&id)
            .cloned()
            .expect("application stored")
    }
}

impl ApplicationRepository for MemoryRepository {
    fn program(&self, id: ProgramId) -> Result<Option<ProgramDefinition>, RepositoryError> {
        let guard = self.programs.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn fetch(&self, id: ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let guard = self.applications.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn update(&self, application: Application) -> Result<(), RepositoryError> {
        let mut guard = self.applications.lock().expect("repository mutex poisoned");
        if !guard.contains_key(&application.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(application.id, application);
        Ok(())
    }

    fn update_if_status(
        &self,
        application: Application,
        expected: Option<&str>,
    ) -> Result<StatusWrite, RepositoryError> {
        let mut guard = self.applications.lock().expect("repository mutex poisoned");
        let stored = guard.get(&application.id).ok_or(RepositoryError::NotFound)?;
        if stored.latest_status.as_deref() != expected {
            return Ok(StatusWrite::Conflict {
                found: stored.latest_status.clone(),
            });
        }
        guard.insert(application.id, application);
        Ok(StatusWrite::Applied)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    sent: Arc<Mutex<Vec<StatusNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn sent(&self) -> Vec<StatusNotification> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

impl StatusNotifier for MemoryNotifier {
    fn notify(&self, notification: StatusNotification) -> Result<(), NotifierError> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl StatusNotifier for FailingNotifier {
    fn notify(&self, _notification: StatusNotification) -> Result<(), NotifierError> {
        Err(NotifierError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn program(&self, _id: ProgramId) -> Result<Option<ProgramDefinition>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _application: Application) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_if_status(
        &self,
        _application: Application,
        _expected: Option<&str>,
    ) -> Result<StatusWrite, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
