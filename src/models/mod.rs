use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Closed set of block type tags.
///
/// The wire format is an open string; unrecognized tags land in `Unknown`
/// with the raw tag preserved, so the dispatcher can degrade gracefully
/// without losing the offending value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BlockType {
    Page,
    CollectionViewPage,
    CollectionView,
    /// Rank-1 heading.
    Header,
    /// Rank-2 heading.
    SubHeader,
    /// Rank-3 heading.
    SubSubHeader,
    Text,
    BulletedList,
    NumberedList,
    Divider,
    Embed,
    Audio,
    File,
    Equation,
    Code,
    ColumnList,
    Quote,
    Callout,
    Bookmark,
    Toggle,
    TableOfContents,
    ToDo,
    TransclusionContainer,
    TransclusionReference,
    Alias,
    Table,
    TableRow,
    ExternalObjectInstance,
    #[strum(default)]
    Unknown(String),
}

impl BlockType {
    /// Heading rank (1..=3), or `None` for non-heading blocks.
    pub fn heading_rank(&self) -> Option<usize> {
        match self {
            BlockType::Header => Some(1),
            BlockType::SubHeader => Some(2),
            BlockType::SubSubHeader => Some(3),
            _ => None,
        }
    }

    /// Types that start a new page context. The outline walk never
    /// descends through these.
    pub fn is_page_boundary(&self) -> bool {
        matches!(
            self,
            BlockType::Page | BlockType::CollectionViewPage | BlockType::CollectionView
        )
    }
}

/// Pointer to another block by id (alias / sync-reference edges).
///
/// Reference relation only: the pointed-to block keeps its original parent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BlockPointer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

/// Per-column visual attributes of a simple table.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ColumnFormat {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

/// Visual/layout attribute bag.
///
/// Only the fields the renderer reads are typed; everything else is kept
/// in `extra` to avoid breaking when the data source evolves.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BlockFormat {
    #[serde(default)]
    pub block_color: Option<String>,
    #[serde(default)]
    pub toggleable: bool,

    #[serde(default)]
    pub page_icon: Option<String>,
    #[serde(default)]
    pub page_cover: Option<String>,
    /// Vertical focal position of the cover, 0.0 (bottom) to 1.0 (top).
    #[serde(default)]
    pub page_cover_position: Option<f64>,
    #[serde(default)]
    pub page_full_width: bool,
    #[serde(default)]
    pub page_small_text: bool,

    #[serde(default)]
    pub bookmark_icon: Option<String>,
    #[serde(default)]
    pub bookmark_cover: Option<String>,

    #[serde(default)]
    pub alias_pointer: Option<BlockPointer>,
    #[serde(default)]
    pub transclusion_reference_pointer: Option<BlockPointer>,

    #[serde(default)]
    pub table_block_column_order: Option<Vec<String>>,
    #[serde(default)]
    pub table_block_column_format: Option<HashMap<String, ColumnFormat>>,

    #[serde(flatten)]
    pub extra: serde_json::Value,
}

/// One typed unit of document content.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Block {
    pub id: String,

    /// Raw type tag; use [`Block::kind`] for dispatch.
    #[serde(rename = "type")]
    pub block_type: String,

    #[serde(default)]
    pub parent_id: Option<String>,

    /// Which table the parent lives in ("block", "collection", "space").
    /// A page whose parent is a collection is a database row.
    #[serde(default)]
    pub parent_table: Option<String>,

    #[serde(default)]
    pub collection_id: Option<String>,

    /// Ownership edges, in document order. May reference blocks missing
    /// from the record map; those render as absent.
    #[serde(default)]
    pub content: Option<Vec<String>>,

    /// Per-type attribute bag (rich-text runs, links, checked state,
    /// column values). Shape varies by type; the accessors below
    /// tolerate anything.
    #[serde(default)]
    pub properties: Option<serde_json::Value>,

    #[serde(default)]
    pub format: Option<BlockFormat>,
}

/// Sentinel marking a to-do block as checked.
pub const CHECKED_SENTINEL: &str = "Yes";

impl Block {
    pub fn kind(&self) -> BlockType {
        // EnumString with a default arm is total.
        BlockType::from_str(&self.block_type)
            .unwrap_or_else(|_| BlockType::Unknown(self.block_type.clone()))
    }

    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Plain text of the title runs, if any.
    pub fn title_text(&self) -> Option<String> {
        self.property("title").map(crate::util::plain_text)
    }

    /// To-do checked state. Anything other than the literal sentinel in
    /// the first cell of the `checked` runs (including absence) is
    /// unchecked.
    pub fn checked(&self) -> bool {
        self.property("checked")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get(0))
            .and_then(|v| v.as_str())
            == Some(CHECKED_SENTINEL)
    }

    pub fn block_color(&self) -> Option<&str> {
        self.format.as_ref()?.block_color.as_deref()
    }

    pub fn toggleable(&self) -> bool {
        self.format.as_ref().map(|f| f.toggleable).unwrap_or(false)
    }

    /// Collection backing this block, for database pages and views.
    pub fn collection_pointer_id(&self) -> Option<String> {
        if let Some(id) = &self.collection_id {
            return Some(id.clone());
        }
        self.format
            .as_ref()?
            .extra
            .get("collection_pointer")?
            .get("id")?
            .as_str()
            .map(str::to_string)
    }

    /// True for pages that live inside a collection (database rows).
    pub fn is_collection_row(&self) -> bool {
        self.parent_table.as_deref() == Some("collection")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BlockRecord {
    /// Absent on partial loads; treat as a missing block.
    #[serde(default)]
    pub value: Option<Block>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Collection {
    #[serde(default)]
    pub id: String,
    /// Display name as rich-text runs.
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CollectionRecord {
    #[serde(default)]
    pub value: Option<Collection>,
    #[serde(default)]
    pub role: Option<String>,
}

/// The complete keyed collection of blocks reachable from a document.
/// Owned by the caller; read-only for the duration of one render pass.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RecordMap {
    #[serde(default)]
    pub block: HashMap<String, BlockRecord>,
    #[serde(default)]
    pub collection: HashMap<String, CollectionRecord>,
}

impl RecordMap {
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.block.get(id)?.value.as_ref()
    }

    pub fn collection_name(&self, id: &str) -> Option<String> {
        let collection = self.collection.get(id)?.value.as_ref()?;
        collection.name.as_ref().map(crate::util::plain_text)
    }

    /// Parent block, following the ownership edge only.
    pub fn parent_of(&self, block: &Block) -> Option<&Block> {
        self.block(block.parent_id.as_deref()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_json(ty: &str) -> Block {
        serde_json::from_value(serde_json::json!({
            "id": "b1",
            "type": ty,
        }))
        .expect("minimal block should parse")
    }

    #[test]
    fn known_type_tags_parse_to_variants() {
        assert_eq!(block_json("page").kind(), BlockType::Page);
        assert_eq!(block_json("sub_header").kind(), BlockType::SubHeader);
        assert_eq!(block_json("to_do").kind(), BlockType::ToDo);
        assert_eq!(
            block_json("transclusion_reference").kind(),
            BlockType::TransclusionReference
        );
    }

    #[test]
    fn unrecognized_type_tag_keeps_raw_string() {
        let kind = block_json("miro_board").kind();
        assert_eq!(kind, BlockType::Unknown("miro_board".to_string()));
        assert_eq!(kind.to_string(), "miro_board");
    }

    #[test]
    fn heading_ranks() {
        assert_eq!(BlockType::Header.heading_rank(), Some(1));
        assert_eq!(BlockType::SubHeader.heading_rank(), Some(2));
        assert_eq!(BlockType::SubSubHeader.heading_rank(), Some(3));
        assert_eq!(BlockType::Text.heading_rank(), None);
    }

    #[test]
    fn checked_requires_exact_sentinel() {
        let checked: Block = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "type": "to_do",
            "properties": { "checked": [["Yes"]], "title": [["task"]] },
        }))
        .unwrap();
        assert!(checked.checked());

        let unchecked: Block = serde_json::from_value(serde_json::json!({
            "id": "b2",
            "type": "to_do",
            "properties": { "checked": [["No"]], "title": [["task"]] },
        }))
        .unwrap();
        assert!(!unchecked.checked());

        let absent: Block = serde_json::from_value(serde_json::json!({
            "id": "b3",
            "type": "to_do",
        }))
        .unwrap();
        assert!(!absent.checked());
    }

    #[test]
    fn format_tolerates_unknown_fields() {
        let block: Block = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "type": "table",
            "format": {
                "table_block_column_order": ["a", "b"],
                "table_block_column_format": { "a": { "width": 200.0, "color": "red" } },
                "copied_from_pointer": { "id": "x" },
            },
        }))
        .unwrap();

        let format = block.format.as_ref().unwrap();
        assert_eq!(
            format.table_block_column_order.as_deref(),
            Some(["a".to_string(), "b".to_string()].as_slice())
        );
        let a = &format.table_block_column_format.as_ref().unwrap()["a"];
        assert_eq!(a.width, Some(200.0));
        assert_eq!(a.color.as_deref(), Some("red"));
        assert!(format.extra.get("copied_from_pointer").is_some());
    }

    #[test]
    fn record_map_resolves_blocks_and_collections() {
        let map: RecordMap = serde_json::from_value(serde_json::json!({
            "block": {
                "p1": { "role": "reader", "value": { "id": "p1", "type": "page" } },
                "hole": { "role": "none" },
            },
            "collection": {
                "c1": { "value": { "id": "c1", "name": [["Tasks"]] } },
            },
        }))
        .unwrap();

        assert!(map.block("p1").is_some());
        assert!(map.block("hole").is_none(), "empty record is a missing block");
        assert!(map.block("nope").is_none());
        assert_eq!(map.collection_name("c1").as_deref(), Some("Tasks"));
        assert_eq!(map.collection_name("c2"), None);
    }

    #[test]
    fn collection_pointer_falls_back_to_format() {
        let block: Block = serde_json::from_value(serde_json::json!({
            "id": "v1",
            "type": "collection_view",
            "format": { "collection_pointer": { "id": "c9", "table": "collection" } },
        }))
        .unwrap();
        assert_eq!(block.collection_pointer_id().as_deref(), Some("c9"));
    }
}
