use crate::infra::{
    demo_setting, seeded_repository, InMemoryStatusNotifier, DEMO_APPLICATION, DEMO_PROGRAM,
};
use civiform::applications::{
    NoteUpdateMessage, ProgramAdminService, StatusUpdateMessage, NOTE_UPDATED_MESSAGE,
    STATUS_UPDATED_MESSAGE,
};
use civiform::config::AppConfig;
use civiform::error::AppError;
use civiform::i18n::{MessageCatalog, Messages};
use civiform::views::{
    ApplicationReviewPage, BaseHtmlLayout, LoginForm, ProgramApplicationView, RequestContext,
};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoPage {
    Login,
    Review,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Page to render
    #[arg(long, value_enum, default_value_t = DemoPage::Review)]
    pub(crate) page: DemoPage,
    /// Host the page is rendered for; controls the demo login panel
    #[arg(long, default_value = "localhost:9000")]
    pub(crate) host: String,
    /// Flash message shown on the login page
    #[arg(long)]
    pub(crate) message: Option<String>,
    /// Apply this status to the demo application before rendering the review page
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Email the applicant when applying --status
    #[arg(long)]
    pub(crate) send_email: bool,
    /// Store this admin note before rendering the review page
    #[arg(long)]
    pub(crate) note: Option<String>,
    /// Write the HTML to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load_with_fallback(demo_setting)?;
    let messages: Arc<dyn Messages> = Arc::new(MessageCatalog::en_us());
    let layout = BaseHtmlLayout::default();

    let html = match args.page {
        DemoPage::Login => {
            let form = LoginForm::from_config(layout, &config);
            form.render(
                &RequestContext::new(args.host.as_str()),
                messages.as_ref(),
                args.message.as_deref(),
            )
            .to_html()
        }
        DemoPage::Review => render_review(&args, layout, messages)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, html)?;
            println!("Wrote {:?} page to {}", args.page, path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn render_review(
    args: &DemoArgs,
    layout: BaseHtmlLayout,
    messages: Arc<dyn Messages>,
) -> Result<String, AppError> {
    let notifier = Arc::new(InMemoryStatusNotifier::default());
    let service = ProgramAdminService::new(Arc::new(seeded_repository()?), notifier.clone());
    let mut flash = None;

    if let Some(status) = &args.status {
        let outcome = service.update_status(&StatusUpdateMessage {
            program_id: DEMO_PROGRAM,
            application_id: DEMO_APPLICATION,
            current_status: String::new(),
            new_status: status.clone(),
            send_email: args.send_email,
        })?;
        eprintln!(
            "Status set to {} (email sent: {})",
            status, outcome.email_sent
        );
        flash = Some(STATUS_UPDATED_MESSAGE.to_string());
    }

    if let Some(note) = &args.note {
        service.update_note(&NoteUpdateMessage {
            program_id: DEMO_PROGRAM,
            application_id: DEMO_APPLICATION,
            note: note.clone(),
        })?;
        flash = Some(NOTE_UPDATED_MESSAGE.to_string());
    }

    for event in notifier.events() {
        eprintln!("  Email to {}: {}", event.recipient, event.body);
    }

    let review = service.review(DEMO_PROGRAM, DEMO_APPLICATION)?;
    let view = ProgramApplicationView::new(layout, messages);
    let request = RequestContext::new(args.host.as_str()).with_flash_success(flash);
    let document = view.render(&ApplicationReviewPage::from_review(&review), &request)?;
    Ok(document.to_html())
}
