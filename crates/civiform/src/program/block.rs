use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::applicant::QuestionDefinition;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub String);

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Group of related questions shown together on one screen of a program's form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub name: String,
    pub description: String,
    pub questions: Vec<QuestionDefinition>,
}

impl Block {
    pub fn new(
        id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<QuestionDefinition>,
    ) -> Self {
        Self {
            id: BlockId::from(id),
            name: name.into(),
            description: description.into(),
            questions,
        }
    }
}

/// Position of each block in an ordered block list, built once per render.
#[derive(Debug)]
pub struct BlockIndex<'a> {
    positions: HashMap<&'a BlockId, usize>,
}

impl<'a> BlockIndex<'a> {
    pub fn new(blocks: &'a [Block]) -> Self {
        let mut positions = HashMap::with_capacity(blocks.len());
        for (position, block) in blocks.iter().enumerate() {
            // First occurrence wins if a program ever repeats an id.
            positions.entry(&block.id).or_insert(position);
        }
        Self { positions }
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.positions.get(id).copied()
    }
}
