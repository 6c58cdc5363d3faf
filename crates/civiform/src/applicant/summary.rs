use chrono::{DateTime, Utc};
use serde::Serialize;

use super::data::ApplicantData;
use super::question::ApplicantQuestion;
use crate::program::{Block, BlockId};
use crate::routes::encode_component;

/// One answered question prepared for display, tagged with the block it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerData {
    pub block_id: BlockId,
    pub question_id: u64,
    pub question_name: String,
    pub answer_text: String,
    pub timestamp: DateTime<Utc>,
    /// URL-safe storage key when the answer is an uploaded file.
    pub encoded_file_key: Option<String>,
}

/// Flatten answered questions in block order.
///
/// Questions without an answer are left out. A missing update time falls back to `submitted_at`.
pub fn summarize_answers(
    blocks: &[Block],
    data: &ApplicantData,
    submitted_at: DateTime<Utc>,
) -> Vec<AnswerData> {
    let mut answers = Vec::new();
    for block in blocks {
        for definition in &block.questions {
            let question = ApplicantQuestion::new(definition, data);
            if !question.is_answered() {
                continue;
            }

            answers.push(AnswerData {
                block_id: block.id.clone(),
                question_id: definition.id,
                question_name: definition.name.clone(),
                answer_text: question.answer_string(),
                timestamp: data
                    .updated_at(&question.contextualized_path())
                    .unwrap_or(submitted_at),
                encoded_file_key: question.file_key().map(|key| encode_component(&key)),
            });
        }
    }
    answers
}
