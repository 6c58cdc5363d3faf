use chrono::{DateTime, Utc};
use civiform::applicant::{
    ApplicantData, ApplicantDataError, NumberValidation, QuestionDefinition, QuestionKind,
    TextValidation,
};
use civiform::applications::{
    Account, Applicant, Application, ApplicationId, ApplicationRepository, LifecycleStage,
    NotifierError, ProgramId, RepositoryError, StatusNotification, StatusNotifier, StatusWrite,
};
use civiform::program::{Block, LocalizedStrings, ProgramDefinition, Status, StatusDefinitions};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

pub(crate) const DEMO_PROGRAM: ProgramId = ProgramId(1);
pub(crate) const DEMO_APPLICATION: ApplicationId = ApplicationId(1);

/// Whitelabel values used when the environment does not provide them.
const DEMO_SETTINGS: [(&str, &str); 2] = [
    ("WHITELABEL_CIVIC_ENTITY_FULL_NAME", "City of Civiform"),
    ("WHITELABEL_CIVIC_ENTITY_SHORT_NAME", "Civiform"),
];

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    programs: Arc<Mutex<HashMap<ProgramId, ProgramDefinition>>>,
    applications: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl InMemoryApplicationRepository {
    pub(crate) fn seed(&self, program: ProgramDefinition, applications: Vec<Application>) {
        self.programs
            .lock()
            .expect("repository mutex poisoned")
            .insert(program.id, program);
        let mut guard = self.applications.lock().expect("repository mutex poisoned");
        for application in applications {
            guard.insert(application.id, application);
        }
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
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
        if guard.contains_key(&application.id) {
            guard.insert(application.id, application);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn update_if_status(
        &self,
        application: Application,
        expected: Option<&str>,
    ) -> Result<StatusWrite, RepositoryError> {
        let mut guard = self.applications.lock().expect("repository mutex poisoned");
        let Some(stored) = guard.get(&application.id) else {
            return Err(RepositoryError::NotFound);
        };
        if stored.latest_status.as_deref() != expected {
            return Ok(StatusWrite::Conflict {
                found: stored.latest_status.clone(),
            });
        }
        guard.insert(application.id, application);
        Ok(StatusWrite::Applied)
    }
}

/// Records notifications instead of delivering them; mail transport lives outside this service.
#[derive(Default, Clone)]
pub(crate) struct InMemoryStatusNotifier {
    events: Arc<Mutex<Vec<StatusNotification>>>,
}

impl StatusNotifier for InMemoryStatusNotifier {
    fn notify(&self, notification: StatusNotification) -> Result<(), NotifierError> {
        info!(
            application_id = %notification.application_id,
            status = %notification.status_text,
            "status email queued"
        );
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryStatusNotifier {
    pub(crate) fn events(&self) -> Vec<StatusNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

pub(crate) fn demo_setting(key: &str) -> Option<String> {
    DEMO_SETTINGS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_string())
}

pub(crate) fn demo_program() -> ProgramDefinition {
    ProgramDefinition {
        id: DEMO_PROGRAM,
        name: "Utility Discount Program".to_string(),
        blocks: vec![
            Block::new(
                "1",
                "Household",
                "Tell us about your household",
                vec![
                    QuestionDefinition::new(
                        1,
                        "Household size",
                        "household_size",
                        QuestionKind::Number(NumberValidation {
                            min: Some(1),
                            max: Some(20),
                        }),
                    ),
                    QuestionDefinition::new(
                        2,
                        "Utility account number",
                        "utility_account",
                        QuestionKind::Text(TextValidation {
                            min_length: Some(6),
                            max_length: Some(12),
                        }),
                    ),
                ],
            ),
            Block::new(
                "2",
                "Income",
                "Monthly income and proof",
                vec![
                    QuestionDefinition::new(
                        3,
                        "Monthly household income",
                        "monthly_income",
                        QuestionKind::Currency,
                    ),
                    QuestionDefinition::new(4, "Pay stub", "pay_stub", QuestionKind::FileUpload),
                ],
            ),
        ],
        statuses: StatusDefinitions::new(vec![
            Status::new("Pending documents").with_email(LocalizedStrings::with_default(
                "We need more documents before we can review your application.",
            )),
            Status::new("Approved").with_email(
                LocalizedStrings::with_default("Your utility discount was approved.")
                    .with_translation("es-US", "Su descuento de servicios fue aprobado."),
            ),
            Status::new("Denied"),
        ]),
    }
}

pub(crate) fn demo_application(
    program: &ProgramDefinition,
) -> Result<Application, ApplicantDataError> {
    let data = ApplicantData::from_json(
        &json!({
            "applicant": {
                "household_size": { "number": 3, "updated_at": 1_717_430_400_000_i64 },
                "utility_account": { "text": "SCL-448812", "updated_at": 1_717_430_400_000_i64 },
                "monthly_income": { "currency_cents": 286_050, "updated_at": 1_717_516_800_000_i64 },
                "pay_stub": { "file_key": "applicant-1/program-1/pay stub.pdf" }
            }
        }),
        &program.question_definitions(),
    )?;

    Ok(Application {
        id: DEMO_APPLICATION,
        program_id: program.id,
        applicant: Applicant {
            name: Some("Jordan Rivera".to_string()),
            account: Account {
                email_address: Some("jordan.rivera@example.org".to_string()),
            },
            data,
        },
        latest_status: None,
        note: None,
        submitted_at: DateTime::<Utc>::from_timestamp(1_717_605_900, 0).unwrap_or_default(),
        lifecycle: LifecycleStage::Active,
    })
}

/// Repository holding the demo program and its single submitted application.
pub(crate) fn seeded_repository() -> Result<InMemoryApplicationRepository, ApplicantDataError> {
    let program = demo_program();
    let application = demo_application(&program)?;
    let repository = InMemoryApplicationRepository::default();
    repository.seed(program, vec![application]);
    Ok(repository)
}
