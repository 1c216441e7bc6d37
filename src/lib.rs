//! Renderer for recursively linked block documents.
//!
//! A document arrives as a flat [`RecordMap`] of typed blocks joined by
//! id edges; [`PageRenderer`] walks it from a root page and produces the
//! corresponding view tree. Callers customize link targets, asset URLs,
//! and the heavyweight block types (embeds, equations, code, database
//! views) through [`Slots`] without touching the traversal itself.

pub mod components;
pub mod context;
pub mod list;
pub mod models;
pub mod outline;
pub mod render;
pub mod scrollspy;
pub mod util;

use std::rc::Rc;

use leptos::logging::warn;
use leptos::prelude::*;

pub use context::{
    CalloutProps, CheckboxProps, CodeProps, CollectionProps, EmbedProps, EquationProps,
    HeaderChromeProps, ImageProps, LinkProps, MapImageUrlFn, MapPageUrlFn, PageLinkProps,
    RendererContext, RendererOptions, SearchFn, Slots,
};
pub use models::{Block, BlockType, RecordMap};
pub use outline::{table_of_contents, OutlineEntry};
pub use render::{
    effective_kind, render_block, render_block_with, table_row_cells, PageDecorations,
    TableCell,
};

/// Root block to render when the caller names none: a top-level page
/// boundary whose parent is outside the map, or failing that any block.
/// Maps holding several documents should pass an explicit root.
fn default_root_id(map: &RecordMap) -> Option<String> {
    map.block
        .iter()
        .filter_map(|(id, record)| record.value.as_ref().map(|block| (id, block)))
        .find(|(_, block)| {
            block.kind().is_page_boundary()
                && !block
                    .parent_id
                    .as_deref()
                    .is_some_and(|parent| map.block.contains_key(parent))
        })
        .map(|(id, _)| id.clone())
        .or_else(|| map.block.keys().next().cloned())
}

/// Render one document from its record map.
#[component]
pub fn PageRenderer(
    record_map: RecordMap,
    /// Root block id; defaults to the map's top-level page.
    #[prop(optional, into)]
    root_page_id: Option<String>,
    #[prop(optional)] options: RendererOptions,
    #[prop(optional)] slots: Slots,
    #[prop(optional)] map_page_url: Option<MapPageUrlFn>,
    #[prop(optional)] map_image_url: Option<MapImageUrlFn>,
    /// Search hook surfaced through the header chrome slot.
    #[prop(optional)]
    search: Option<SearchFn>,
    #[prop(optional)] header: Option<AnyView>,
    #[prop(optional)] footer: Option<AnyView>,
    #[prop(optional)] page_header: Option<AnyView>,
    #[prop(optional)] page_footer: Option<AnyView>,
    #[prop(optional)] page_title: Option<AnyView>,
    #[prop(optional)] page_aside: Option<AnyView>,
    #[prop(optional)] page_cover: Option<AnyView>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] body_class: Option<String>,
) -> impl IntoView {
    let ctx = RendererContext::new(
        Rc::new(record_map),
        options,
        slots,
        map_page_url,
        map_image_url,
        search,
    );

    let Some(root) = root_page_id.or_else(|| default_root_id(&ctx.record_map)) else {
        warn!("record map holds no blocks, nothing to render");
        return ().into_view().into_any();
    };

    let decorations = PageDecorations {
        header,
        footer,
        page_header,
        page_footer,
        page_title,
        page_aside,
        page_cover,
        class,
        body_class,
    };

    render_block_with(&root, 0, &ctx, Some(decorations))
        .unwrap_or_else(|| ().into_view().into_any())
}
