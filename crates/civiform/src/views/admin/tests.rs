use std::sync::Arc;

use chrono::{TimeZone, Utc};

use super::application_view::{status_modal_id, NOTE_MODAL_ID, STATUS_SELECTOR_ID};
use super::{ApplicationReviewPage, EmailNotice, ProgramApplicationView};
use crate::applicant::{AnswerData, ApplicantData};
use crate::applications::{
    Account, Applicant, Application, ApplicationId, LifecycleStage, ProgramId,
};
use crate::html::{Document, Element};
use crate::i18n::MessageCatalog;
use crate::program::{Block, BlockId, LocalizedStrings, Status, StatusDefinitions};
use crate::views::styles::reference;
use crate::views::{BaseHtmlLayout, RequestContext, ViewError};

const LABEL: &str = "Ada Lovelace (12)";

fn view() -> ProgramApplicationView {
    ProgramApplicationView::new(BaseHtmlLayout::default(), Arc::new(MessageCatalog::en_us()))
}

fn application(status: Option<&str>, email: Option<&str>) -> Application {
    Application {
        id: ApplicationId(12),
        program_id: ProgramId(3),
        applicant: Applicant {
            name: Some("Ada Lovelace".to_string()),
            account: Account {
                email_address: email.map(str::to_string),
            },
            data: ApplicantData::default(),
        },
        latest_status: status.map(str::to_string),
        note: Some("Called on Monday".to_string()),
        submitted_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        lifecycle: LifecycleStage::Active,
    }
}

fn blocks() -> Vec<Block> {
    vec![
        Block::new("1", "Income", "Household income", Vec::new()),
        Block::new("2", "Documents", "Supporting documents", Vec::new()),
    ]
}

fn answers() -> Vec<AnswerData> {
    vec![
        AnswerData {
            block_id: BlockId::from("1"),
            question_id: 7,
            question_name: "Monthly income".to_string(),
            answer_text: "1500.00".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 2, 20, 18, 30, 0).unwrap(),
            encoded_file_key: None,
        },
        AnswerData {
            block_id: BlockId::from("2"),
            question_id: 8,
            question_name: "Pay stub".to_string(),
            answer_text: "stub.pdf".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 2, 21, 8, 0, 0).unwrap(),
            encoded_file_key: Some("applicant-1%2Fstub.pdf".to_string()),
        },
    ]
}

fn statuses() -> StatusDefinitions {
    StatusDefinitions::new(vec![
        Status::new("Approved").with_email(LocalizedStrings::with_default("Congratulations!")),
        Status::new("Denied"),
    ])
}

fn render(
    application: &Application,
    answers: &[AnswerData],
    statuses: &StatusDefinitions,
) -> Result<Document, ViewError> {
    let blocks = blocks();
    let page = ApplicationReviewPage {
        program_id: ProgramId(3),
        program_name: "Utility Discount",
        application,
        applicant_label: LABEL,
        blocks: &blocks,
        answers,
        statuses,
        note: application.note.as_deref(),
    };
    view().render(&page, &RequestContext::new("localhost:9000"))
}

fn status_modal(root: &Element, index: usize) -> &Element {
    root.find_by_id(&status_modal_id(index)).expect("status modal")
}

#[test]
fn placeholder_selected_when_application_has_no_status() {
    let application = application(None, None);
    let document = render(&application, &answers(), &statuses()).expect("renders");
    let selector = document
        .root()
        .find_by_id(STATUS_SELECTOR_ID)
        .expect("status selector");
    let options: Vec<&Element> = selector.find_all(|element| element.tag == "option");

    assert_eq!(options.len(), 3);
    assert_eq!(options[0].text_content(), "Choose an option:");
    assert!(options[0].has_attr("disabled"));
    assert!(options[0].has_attr("selected"));
    assert!(options[1..].iter().all(|option| !option.has_attr("selected")));
    assert_eq!(options[1].get_attr("value"), Some("Approved"));
    assert_eq!(options[2].get_attr("value"), Some("Denied"));
}

#[test]
fn current_status_option_is_selected() {
    let application = application(Some("Denied"), None);
    let document = render(&application, &answers(), &statuses()).expect("renders");
    let selector = document
        .root()
        .find_by_id(STATUS_SELECTOR_ID)
        .expect("status selector");
    let selected: Vec<String> = selector
        .find_all(|element| element.tag == "option" && element.has_attr("selected"))
        .into_iter()
        .map(Element::text_content)
        .collect();

    assert_eq!(selected, vec!["Denied".to_string()]);
}

#[test]
fn renders_one_modal_per_status_and_one_note_modal() {
    let application = application(Some("Approved"), None);
    let document = render(&application, &answers(), &statuses()).expect("renders");
    let root = document.root();

    assert_eq!(root.find_by_class(reference::STATUS_UPDATE_FORM).len(), 2);
    assert_eq!(root.find_by_class(reference::EDIT_NOTE_FORM).len(), 1);

    let data_attr = format!("data-{}", reference::STATUS_CONFIRM_DATA_KEY);
    let triggers: Vec<&str> = root
        .find_all(|element| element.has_attr(&data_attr))
        .into_iter()
        .filter_map(|element| element.get_attr(&data_attr))
        .collect();
    assert_eq!(triggers, vec!["Approved", "Denied"]);

    let note_modal = root.find_by_id(NOTE_MODAL_ID).expect("note modal");
    let note = note_modal.fields_named("note");
    assert_eq!(note.len(), 1);
    assert_eq!(note[0].text_content(), "Called on Monday");
    assert_eq!(note[0].get_attr("rows"), Some("8"));
}

#[test]
fn status_modal_carries_contract_fields() {
    let application = application(None, None);
    let document = render(&application, &answers(), &statuses()).expect("renders");
    let modal = status_modal(document.root(), 1);

    let value_of = |name: &str| {
        modal
            .fields_named(name)
            .first()
            .and_then(|field| field.get_attr("value"))
            .map(str::to_string)
    };
    assert_eq!(value_of("programId").as_deref(), Some("3"));
    assert_eq!(value_of("applicationId").as_deref(), Some("12"));
    assert_eq!(value_of("newStatus").as_deref(), Some("Denied"));
    assert_eq!(value_of("currentStatus").as_deref(), Some(""));
    assert!(modal
        .text_content()
        .contains("Status Change: Unset -> Denied (visible to applicant)"));
    assert!(modal.text_content().contains("Program: Utility Discount"));
}

#[test]
fn status_without_email_text_hides_checkbox_even_with_applicant_email() {
    for email in [None, Some("ada@example.com")] {
        let application = application(None, email);
        let document = render(&application, &answers(), &statuses()).expect("renders");
        let modal = status_modal(document.root(), 1);
        let send_email = modal.fields_named("sendEmail");

        assert_eq!(send_email.len(), 1);
        assert!(send_email[0].has_attr("hidden"));
        assert!(!send_email[0].has_attr("checked"));
        assert!(modal
            .text_content()
            .contains("will not receive an email because there is no email content set"));
    }
}

#[test]
fn applicant_without_email_gets_explanation() {
    let application = application(None, None);
    let document = render(&application, &answers(), &statuses()).expect("renders");
    let modal = status_modal(document.root(), 0);
    let send_email = modal.fields_named("sendEmail");

    assert!(send_email[0].has_attr("hidden"));
    assert!(modal
        .text_content()
        .contains("since they have not provided an email address"));
}

#[test]
fn opt_in_checkbox_names_recipient() {
    let application = application(None, Some("ada@example.com"));
    let document = render(&application, &answers(), &statuses()).expect("renders");
    let modal = status_modal(document.root(), 0);
    let send_email = modal.fields_named("sendEmail");

    assert_eq!(send_email.len(), 1);
    assert!(send_email[0].has_attr("checked"));
    assert!(!send_email[0].has_attr("hidden"));
    assert_eq!(
        EmailNotice::for_status(&application, &statuses().statuses()[0]),
        EmailNotice::OptIn {
            recipient: "ada@example.com"
        }
    );
    assert!(modal
        .text_content()
        .contains(&format!("Notify {LABEL} of this change at ada@example.com")));
}

#[test]
fn answers_render_inside_their_blocks() {
    let application = application(None, None);
    let document = render(&application, &answers(), &statuses()).expect("renders");
    let cards = document.root().find_by_class(reference::BLOCK_CARD);

    assert_eq!(cards.len(), 2);
    assert!(cards[0].text_content().contains("1500.00"));
    assert!(cards[0].text_content().contains("Answered on 2024-02-20"));
    let link = cards[1]
        .find(|element| element.tag == "a")
        .expect("file link");
    assert_eq!(
        link.get_attr("href"),
        Some("/admin/programs/3/files/applicant-1%2Fstub.pdf")
    );
}

#[test]
fn answer_for_unknown_block_is_an_error() {
    let application = application(None, None);
    let mut answers = answers();
    answers[1].block_id = BlockId::from("99");

    match render(&application, &answers, &statuses()) {
        Err(ViewError::UnknownBlock { block_id }) => assert_eq!(block_id, BlockId::from("99")),
        other => panic!("expected unknown block error, got {other:?}"),
    }
}

#[test]
fn without_statuses_no_selector_is_rendered() {
    let application = application(None, None);
    let document =
        render(&application, &answers(), &StatusDefinitions::default()).expect("renders");
    let root = document.root();

    assert!(root.find_by_id(STATUS_SELECTOR_ID).is_none());
    assert!(root.find_by_class(reference::STATUS_UPDATE_FORM).is_empty());
    assert_eq!(root.find_by_class(reference::EDIT_NOTE_FORM).len(), 1);
}

#[test]
fn flash_success_renders_toast() {
    let application = application(None, None);
    let blocks = blocks();
    let answers = answers();
    let statuses = statuses();
    let page = ApplicationReviewPage {
        program_id: ProgramId(3),
        program_name: "Utility Discount",
        application: &application,
        applicant_label: LABEL,
        blocks: &blocks,
        answers: &answers,
        statuses: &statuses,
        note: None,
    };
    let request = RequestContext::new("localhost:9000")
        .with_flash_success(Some("Application status updated".to_string()));

    let document = view().render(&page, &request).expect("renders");
    let toast = document
        .root()
        .find_by_id("toast-container")
        .expect("toast container");
    assert!(toast.text_content().contains("Application status updated"));
}
