//! Grouping decisions for consecutive list-item siblings.
//!
//! The data source keeps list items as flat siblings with no enclosing
//! list container; the renderer has to decide where a run starts and what
//! ordinal a numbered run begins at.

use crate::models::{Block, RecordMap};

/// True when this item starts a new list rather than continuing one
/// already wrapped by a parent of the same type. Items with a missing
/// parent are heads by definition.
pub fn is_list_head(block: &Block, map: &RecordMap) -> bool {
    map.parent_of(block)
        .map(|parent| parent.block_type != block.block_type)
        .unwrap_or(true)
}

/// `start` value for a numbered list: 1 + the number of contiguous
/// preceding siblings of the same type. Reproduces flat sibling numbering
/// without an explicit list container in the data.
pub fn ordinal_start(block: &Block, map: &RecordMap) -> usize {
    let Some(parent) = map.parent_of(block) else {
        return 1;
    };
    let Some(siblings) = &parent.content else {
        return 1;
    };
    let Some(index) = siblings.iter().position(|id| *id == block.id) else {
        return 1;
    };

    let mut start = 1;
    for sibling_id in siblings[..index].iter().rev() {
        match map.block(sibling_id) {
            Some(sibling) if sibling.block_type == block.block_type => start += 1,
            _ => break,
        }
    }
    start
}
