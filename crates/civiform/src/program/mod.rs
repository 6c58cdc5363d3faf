pub mod block;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::applications::ProgramId;

pub use block::{Block, BlockId, BlockIndex};
pub use status::{LocalizedStrings, Status, StatusDefinitions};

/// Program configuration needed to review its applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDefinition {
    pub id: ProgramId,
    pub name: String,
    pub blocks: Vec<Block>,
    pub statuses: StatusDefinitions,
}

impl ProgramDefinition {
    pub fn question_definitions(&self) -> Vec<crate::applicant::QuestionDefinition> {
        self.blocks
            .iter()
            .flat_map(|block| block.questions.iter().cloned())
            .collect()
    }
}
