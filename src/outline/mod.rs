use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::{Block, RecordMap};

/// One heading entry of a page outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    pub id: String,
    pub text: String,
    /// Zero-based indentation, derived from heading rank and context
    /// rather than stored on the block.
    pub indent_level: usize,
}

/// Memoization shared across one render pass.
///
/// Scoped to a single `PageRenderer` mount on purpose: keys are block ids
/// and content-derived strings, so a process-wide cache would let two
/// documents that reuse ids bleed into each other.
#[derive(Default)]
pub struct RenderCaches {
    outlines: RefCell<HashMap<String, Rc<Vec<OutlineEntry>>>>,
    indent_levels: RefCell<HashMap<String, usize>>,
    cover_styles: RefCell<HashMap<String, String>>,
}

impl RenderCaches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent level already derived for a heading, if any walk found it.
    pub fn cached_indent_level(&self, block_id: &str) -> Option<usize> {
        self.indent_levels.borrow().get(block_id).copied()
    }

    /// Cover focal-position style memoized by the derived position string.
    pub fn cover_style(&self, object_position: &str) -> String {
        if let Some(style) = self.cover_styles.borrow().get(object_position) {
            return style.clone();
        }
        let style = format!("object-position: {object_position}");
        self.cover_styles
            .borrow_mut()
            .insert(object_position.to_string(), style.clone());
        style
    }
}

/// Nearest ancestor page of a block, following ownership edges.
///
/// The climb is bounded so a malformed parent cycle degrades to `None`
/// instead of spinning.
pub fn parent_page<'a>(block: &'a Block, map: &'a RecordMap) -> Option<&'a Block> {
    const MAX_HOPS: usize = 256;

    let mut current = block;
    for _ in 0..MAX_HOPS {
        if current.kind().is_page_boundary() {
            return Some(current);
        }
        current = map.parent_of(current)?;
    }
    None
}

/// Build the outline of a page: every heading among its descendants, in
/// document order, with computed indent levels.
///
/// The walk stops at page boundaries, so headings of nested pages and
/// database views never leak into the outline of the page that embeds
/// them.
pub fn table_of_contents(page: &Block, map: &RecordMap) -> Vec<OutlineEntry> {
    let mut out = Vec::new();
    let mut open = Vec::new();
    if let Some(content) = &page.content {
        walk(content, map, &mut open, &mut out);
    }
    out
}

/// Stack of still-open headings as (rank, level) pairs. A new heading
/// closes everything at the same or deeper rank, then indents one past
/// the nearest shallower heading still open (or starts at 0).
fn walk(
    ids: &[String],
    map: &RecordMap,
    open: &mut Vec<(usize, usize)>,
    out: &mut Vec<OutlineEntry>,
) {
    for id in ids {
        let Some(block) = map.block(id) else {
            continue;
        };

        let kind = block.kind();
        if kind.is_page_boundary() {
            continue;
        }

        if let Some(rank) = kind.heading_rank() {
            while open.last().is_some_and(|&(r, _)| r >= rank) {
                open.pop();
            }
            let level = open.last().map_or(0, |&(_, l)| l + 1);
            open.push((rank, level));

            out.push(OutlineEntry {
                id: block.id.clone(),
                text: block.title_text().unwrap_or_default(),
                indent_level: level,
            });
        }

        if let Some(content) = &block.content {
            walk(content, map, open, out);
        }
    }
}

/// Outline of a page, memoized per page id. Populates the indent-level
/// cache for every heading discovered, not just the ones asked about.
pub fn page_outline(caches: &RenderCaches, page: &Block, map: &RecordMap) -> Rc<Vec<OutlineEntry>> {
    if let Some(outline) = caches.outlines.borrow().get(&page.id) {
        return outline.clone();
    }

    let outline = Rc::new(table_of_contents(page, map));
    {
        let mut indents = caches.indent_levels.borrow_mut();
        for entry in outline.iter() {
            indents.insert(entry.id.clone(), entry.indent_level);
        }
    }
    caches
        .outlines
        .borrow_mut()
        .insert(page.id.clone(), outline.clone());
    outline
}

/// Indent level of one heading, cache-first. A heading whose ancestor
/// page cannot be resolved has no outline and no level.
pub fn indent_level_of(caches: &RenderCaches, block: &Block, map: &RecordMap) -> Option<usize> {
    if let Some(level) = caches.cached_indent_level(&block.id) {
        return Some(level);
    }

    let page = parent_page(block, map)?;
    page_outline(caches, page, map);
    caches.cached_indent_level(&block.id)
}
