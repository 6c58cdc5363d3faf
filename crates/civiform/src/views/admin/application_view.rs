use std::sync::Arc;

use tracing::error;

use crate::applicant::AnswerData;
use crate::applications::messages::{
    APPLICATION_ID_FIELD, CURRENT_STATUS_FIELD, NEW_STATUS_FIELD, NOTE_FIELD, PROGRAM_ID_FIELD,
    SEND_EMAIL_FIELD,
};
use crate::applications::{Application, ApplicationReview, ProgramId};
use crate::html::node::{
    a, button, div, form, h2, input, label, option, p, select, span, submit_button, textarea,
    Element,
};
use crate::html::Document;
use crate::i18n::{MessageKey, Messages};
use crate::program::{Block, BlockIndex, Status, StatusDefinitions};
use crate::routes;
use crate::views::components::{link_button, Modal, ModalWidth, ToastMessage};
use crate::views::layout::BaseHtmlLayout;
use crate::views::styles::{components, reference, utility};
use crate::views::{RequestContext, ViewError};

pub const APPLICATION_VIEW_ID: &str = "application-view";
pub const STATUS_SELECTOR_ID: &str = "status-selector";
pub const NOTE_MODAL_ID: &str = "edit-note-modal";
pub const NOTE_FORM_ID: &str = "edit-note-form";

pub fn status_modal_id(index: usize) -> String {
    format!("status-update-modal-{index}")
}

/// Inputs for one render of the review page.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationReviewPage<'a> {
    pub program_id: ProgramId,
    pub program_name: &'a str,
    pub application: &'a Application,
    pub applicant_label: &'a str,
    pub blocks: &'a [Block],
    pub answers: &'a [AnswerData],
    pub statuses: &'a StatusDefinitions,
    pub note: Option<&'a str>,
}

impl<'a> ApplicationReviewPage<'a> {
    pub fn from_review(review: &'a ApplicationReview) -> Self {
        Self {
            program_id: review.program.id,
            program_name: &review.program.name,
            application: &review.application,
            applicant_label: &review.applicant_label,
            blocks: &review.program.blocks,
            answers: &review.answers,
            statuses: &review.program.statuses,
            note: review.application.note.as_deref(),
        }
    }
}

/// Email section state of a status-change modal, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailNotice<'a> {
    NoEmailContent,
    NoApplicantEmail,
    OptIn { recipient: &'a str },
}

impl<'a> EmailNotice<'a> {
    pub fn for_status(application: &'a Application, status: &Status) -> Self {
        if !status.has_email() {
            return Self::NoEmailContent;
        }
        match application.applicant_email() {
            Some(recipient) => Self::OptIn { recipient },
            None => Self::NoApplicantEmail,
        }
    }
}

/// Review page for a single submitted application.
pub struct ProgramApplicationView {
    layout: BaseHtmlLayout,
    en_us_messages: Arc<dyn Messages>,
}

impl ProgramApplicationView {
    pub fn new(layout: BaseHtmlLayout, en_us_messages: Arc<dyn Messages>) -> Self {
        Self {
            layout,
            en_us_messages,
        }
    }

    pub fn render(
        &self,
        page: &ApplicationReviewPage<'_>,
        request: &RequestContext,
    ) -> Result<Document, ViewError> {
        let grouped = group_answers(page.blocks, page.answers).map_err(|err| {
            error!(
                application_id = %page.application.id,
                error = %err,
                "application answers do not match program blocks"
            );
            err
        })?;

        let status_modals: Vec<Modal> = page
            .statuses
            .statuses()
            .iter()
            .enumerate()
            .map(|(index, status)| status_update_modal(page, index, status))
            .collect();
        let note_modal = note_modal(page);

        let header = div()
            .class(utility::FLEX)
            .child(
                p().text(page.applicant_label)
                    .classes(&[utility::MY_4, utility::TEXT_2XL, reference::APPLICANT_LABEL]),
            )
            .child(p().class(utility::FLEX_GROW))
            .child_if(!page.statuses.is_empty(), || {
                div()
                    .classes(&[utility::FLEX, utility::GAP_4])
                    .child(self.status_selector(page.application, page.statuses))
                    .child(note_modal.trigger())
                    .into()
            })
            .child(link_button(
                "Export to PDF",
                routes::application_download(page.program_id, page.application.id),
            ));

        let content = div()
            .id(APPLICATION_VIEW_ID)
            .class(utility::PX_20)
            .child(h2(format!("Program: {}", page.program_name)).class(utility::MY_4))
            .child(header)
            .children(
                page.blocks
                    .iter()
                    .zip(&grouped)
                    .map(|(block, answers)| render_block(page.program_id, block, answers)),
            )
            .children(status_modals.iter().map(Modal::trigger));

        let mut bundle = self
            .layout
            .bundle()
            .title("Program Application View")
            .main_content(content)
            .body_styles(&[utility::FLEX])
            .main_styles(&[utility::WIDTH_FULL])
            .modals(std::iter::once(note_modal))
            .modals(status_modals)
            .footer_script(routes::ADMIN_APPLICATION_SCRIPT);
        if let Some(success) = &request.flash_success {
            bundle = bundle.toast(ToastMessage::success(success.clone()));
        }

        Ok(self.layout.render(bundle))
    }

    fn status_selector(&self, application: &Application, statuses: &StatusDefinitions) -> Element {
        let current = application.latest_status.as_deref();
        let placeholder = option(self.en_us_messages.at(MessageKey::DropdownPlaceholder, &[]))
            .flag("disabled")
            .flag_if(current.is_none(), "selected");

        let options = statuses.statuses().iter().map(|status| {
            option(status.status_text.clone())
                .attr("value", status.status_text.clone())
                .flag_if(current == Some(status.status_text.as_str()), "selected")
        });

        div()
            .classes(&[utility::FLEX, reference::STATUS_SELECTOR])
            .child(label().attr("for", STATUS_SELECTOR_ID).text("Status:"))
            .child(
                select()
                    .id(STATUS_SELECTOR_ID)
                    .classes(&[utility::BORDER, utility::ROUNDED, utility::BG_WHITE, utility::TEXT_SM])
                    .child(placeholder)
                    .children(options),
            )
    }
}

fn group_answers<'p>(
    blocks: &'p [Block],
    answers: &'p [AnswerData],
) -> Result<Vec<Vec<&'p AnswerData>>, ViewError> {
    let index = BlockIndex::new(blocks);
    let mut grouped = vec![Vec::new(); blocks.len()];
    for answer in answers {
        let position = index
            .position(&answer.block_id)
            .ok_or_else(|| ViewError::UnknownBlock {
                block_id: answer.block_id.clone(),
            })?;
        grouped[position].push(answer);
    }
    Ok(grouped)
}

fn render_block(program_id: ProgramId, block: &Block, answers: &[&AnswerData]) -> Element {
    let top = div()
        .class(utility::FLEX)
        .child(div().child(div().classes(&[utility::BOLD, utility::MB_2]).text(block.name.clone())))
        .child(p().class(utility::FLEX_GROW))
        .child(p().class(utility::TEXT_GRAY).text(block.description.clone()));

    let body = div()
        .class(utility::WIDTH_FULL)
        .children(answers.iter().map(|answer| render_answer(program_id, answer)));

    div()
        .classes(&[reference::BLOCK_CARD, utility::WIDTH_FULL, utility::SHADOW])
        .data("block-id", block.id.to_string())
        .child(
            div()
                .classes(&[utility::BORDER, utility::BG_WHITE, utility::ROUNDED])
                .child(top)
                .child(body),
        )
}

fn render_answer(program_id: ProgramId, answer: &AnswerData) -> Element {
    let content = match &answer.encoded_file_key {
        Some(key) => div().child(
            a(answer.answer_text.clone()).attr("href", routes::admin_file(program_id, key)),
        ),
        None => div().text(answer.answer_text.clone()),
    };

    div()
        .class(utility::FLEX)
        .data("question-id", answer.question_id.to_string())
        .child(div().child(div().class(utility::TEXT_GRAY).text(answer.question_name.clone())))
        .child(content.class(utility::TEXT_GRAY))
        .child(p().class(utility::FLEX_GROW))
        .child(
            div()
                .class(utility::TEXT_SM)
                .text(format!("Answered on {}", answer.timestamp.date_naive())),
        )
}

fn hidden_id_inputs(page: &ApplicationReviewPage<'_>) -> [Element; 2] {
    [
        input()
            .attr("name", PROGRAM_ID_FIELD)
            .attr("value", page.program_id.to_string())
            .flag("hidden"),
        input()
            .attr("name", APPLICATION_ID_FIELD)
            .attr("value", page.application.id.to_string())
            .flag("hidden"),
    ]
}

fn modal_actions(confirm: &str) -> Element {
    div()
        .classes(&[utility::FLEX, utility::GAP_4, utility::PT_4])
        .child(div().class(utility::FLEX_GROW))
        .child(button("Cancel").classes(&[reference::MODAL_CLOSE, components::TERTIARY_BUTTON]))
        .child(submit_button(confirm).class(components::TERTIARY_BUTTON))
}

// Neither form has an action: client script reads the fields and posts them to the
// top frame, which performs the submission.
fn note_modal(page: &ApplicationReviewPage<'_>) -> Modal {
    let content = form()
        .id(NOTE_FORM_ID)
        .class(reference::EDIT_NOTE_FORM)
        .children(hidden_id_inputs(page))
        .child(
            textarea()
                .attr("name", NOTE_FIELD)
                .attr("form", NOTE_FORM_ID)
                .attr("rows", "8")
                .class(utility::WIDTH_FULL)
                .text(page.note.unwrap_or_default()),
        )
        .child(modal_actions("Save"));

    Modal::new(NOTE_MODAL_ID, content)
        .title("Edit note")
        .trigger_button(button("Edit note").class(components::TERTIARY_BUTTON))
        .width(ModalWidth::ThreeFourths)
}

fn status_update_modal(page: &ApplicationReviewPage<'_>, index: usize, status: &Status) -> Modal {
    let previous = page.application.latest_status.as_deref();

    let content = form()
        .class(reference::STATUS_UPDATE_FORM)
        .children(hidden_id_inputs(page))
        .child(
            p().child(span("Status Change: "))
                .child(span(previous.unwrap_or("Unset")).class(utility::BOLD))
                .child(span(" -> ").class(utility::BOLD))
                .child(span(status.status_text.clone()).class(utility::BOLD))
                .child(span(" (visible to applicant)")),
        )
        .child(
            p().child(span("Applicant: ")).child(
                span(page.applicant_label).classes(&[utility::BOLD, reference::APPLICANT_LABEL]),
            ),
        )
        .child(
            p().child(span("Program: "))
                .child(span(page.program_name).class(utility::BOLD)),
        )
        .child(
            div()
                .class(utility::MY_4)
                .child(
                    input()
                        .flag("hidden")
                        .attr("type", "text")
                        .attr("name", NEW_STATUS_FIELD)
                        .attr("value", status.status_text.clone()),
                )
                // Lets the update endpoint detect edits made since this page was rendered.
                .child(
                    input()
                        .flag("hidden")
                        .attr("type", "text")
                        .attr("name", CURRENT_STATUS_FIELD)
                        .attr("value", previous.unwrap_or_default()),
                )
                .child(email_section(
                    page.applicant_label,
                    EmailNotice::for_status(page.application, status),
                )),
        )
        .child(modal_actions("Confirm"));

    let trigger = button("")
        .class(utility::HIDDEN)
        .data(reference::STATUS_CONFIRM_DATA_KEY, status.status_text.clone());

    Modal::new(status_modal_id(index), content)
        .title("Change the status of this application?")
        .trigger_button(trigger)
        .width(ModalWidth::ThreeFourths)
}

fn email_section(applicant_label: &str, notice: EmailNotice<'_>) -> Element {
    let checkbox = input()
        .attr("type", "checkbox")
        .attr("name", SEND_EMAIL_FIELD)
        .class(components::CHECKBOX);

    match notice {
        EmailNotice::NoEmailContent => div().child(checkbox.flag("hidden")).child(
            p().child(span(applicant_label).classes(&[utility::BOLD, reference::APPLICANT_LABEL]))
                .child(span(
                    " will not receive an email because there is no email content set for this \
                     status. Connect with your CiviForm Admin to add an email to this status.",
                )),
        ),
        EmailNotice::NoApplicantEmail => div().child(checkbox.flag("hidden")).child(
            p().child(span(applicant_label).class(utility::BOLD)).child(span(
                " will not receive an email for this change since they have not provided an \
                 email address.",
            )),
        ),
        EmailNotice::OptIn { recipient } => label()
            .child(checkbox.flag("checked"))
            .child(span("Notify "))
            .child(span(applicant_label).class(utility::BOLD))
            .child(span(" of this change at "))
            .child(span(recipient).class(utility::BOLD)),
    }
}
