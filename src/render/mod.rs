//! Block dispatcher: one typed unit of content in, one view out.
//!
//! Rendering is a recursive descent over ownership edges. Every arm
//! degrades gracefully on malformed data; a missing or unrenderable
//! block contributes nothing and never takes the rest of the tree down
//! with it.

pub mod page;

use leptos::logging::{debug_warn, warn};
use leptos::prelude::*;

use crate::components::{image_view, page_title_view, text_view};
use crate::context::{
    CalloutProps, CheckboxProps, CodeProps, CollectionProps, EmbedProps, EquationProps,
    LinkProps, PageLinkProps, RendererContext,
};
use crate::list::{is_list_head, ordinal_start};
use crate::models::{Block, BlockPointer, BlockType, RecordMap};
use crate::outline::{page_outline, parent_page};
use crate::util::{cs, hostname, plain_text, uuid_to_id};

pub use page::PageDecorations;

/// Render one block and its subtree. `level` 0 is the document root.
pub fn render_block(block_id: &str, level: usize, ctx: &RendererContext) -> Option<AnyView> {
    render_block_with(block_id, level, ctx, None)
}

/// Root entry point: like [`render_block`] but with page chrome
/// decorations for the level-0 frame.
pub fn render_block_with(
    block_id: &str,
    level: usize,
    ctx: &RendererContext,
    decorations: Option<PageDecorations>,
) -> Option<AnyView> {
    let Some(block) = ctx.record_map.block(block_id) else {
        debug_warn!("block {block_id} is not in the record map");
        return None;
    };
    let block = block.clone();
    let kind = effective_kind(&block, level);

    match &kind {
        BlockType::Page | BlockType::CollectionViewPage => {
            if level == 0 {
                let body = if matches!(kind, BlockType::CollectionViewPage) {
                    collection_view(&block, "bp-collection-page", ctx)
                } else {
                    let mut parts = Vec::new();
                    // Database rows link back to their backing collection
                    // above their own content.
                    if block.is_collection_row() {
                        parts.push(collection_view(&block, "bp-collection-row", ctx));
                    }
                    parts.extend(render_children(&block, level, ctx));
                    children_fragment(parts)
                };
                Some(page::render_page(
                    &block,
                    body,
                    ctx,
                    decorations.unwrap_or_default(),
                ))
            } else {
                let href = (ctx.map_page_url)(&block.id);
                let class = cs(&[
                    "bp-page-link",
                    &color_class(&block),
                    &ctx.block_dom_id(&block.id),
                ]);
                let children = page_title_view(&block, ctx);
                Some((ctx.slots.page_link)(PageLinkProps {
                    href,
                    class,
                    children,
                }))
            }
        }

        BlockType::CollectionView => {
            Some(collection_view(&block, "bp-collection-view", ctx))
        }

        BlockType::Header | BlockType::SubHeader | BlockType::SubSubHeader => {
            render_heading(&block, &kind, level, ctx)
        }

        BlockType::Text => {
            let body = if block.property("title").is_some() {
                text_view(&block, "title")
            } else {
                view! { <span class="bp-blank">{"\u{a0}"}</span> }.into_any()
            };
            let children = render_children(&block, level, ctx);
            let nested = (!children.is_empty()).then(|| {
                view! { <div class="bp-text-children">{children_fragment(children)}</div> }
            });
            let class = cs(&["bp-text", &color_class(&block), &ctx.block_dom_id(&block.id)]);
            Some(view! { <div class=class>{body} {nested}</div> }.into_any())
        }

        BlockType::BulletedList | BlockType::NumberedList => {
            render_list_item(&block, &kind, level, ctx)
        }

        BlockType::Divider => Some(view! { <hr class="bp-hr" /> }.into_any()),

        BlockType::Embed => {
            let source =
                source_url(&block).map(|source| (ctx.map_image_url)(&source, &block));
            Some((ctx.slots.embed)(EmbedProps {
                class: color_class(&block),
                source,
                block,
            }))
        }

        BlockType::Audio => {
            let src = source_url(&block).map(|source| (ctx.map_image_url)(&source, &block));
            let class = cs(&["bp-audio", &ctx.block_dom_id(&block.id)]);
            Some(view! {
                <div class=class>
                    <audio controls=true preload="none" src=src></audio>
                </div>
            }
            .into_any())
        }

        BlockType::File => {
            let source = source_url(&block)?;
            let href = (ctx.map_image_url)(&source, &block);
            let title = block
                .title_text()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "File".to_string());
            let children =
                view! { <span class="bp-file-title">{title}</span> }.into_any();
            Some((ctx.slots.link)(LinkProps {
                href,
                class: cs(&["bp-file", &ctx.block_dom_id(&block.id)]),
                new_tab: true,
                children,
            }))
        }

        BlockType::Equation => {
            let expression = block.property("title").map(plain_text).unwrap_or_default();
            Some((ctx.slots.equation)(EquationProps {
                class: color_class(&block),
                expression,
                block,
            }))
        }

        BlockType::Code => {
            let code = block.property("title").map(plain_text).unwrap_or_default();
            let language = block
                .property("language")
                .map(plain_text)
                .filter(|l| !l.is_empty());
            Some((ctx.slots.code)(CodeProps {
                class: ctx.block_dom_id(&block.id),
                code,
                language,
                block,
            }))
        }

        BlockType::ColumnList => {
            // Children are column wrappers; flatten each into its own
            // cell so the row lays out without a dedicated column type.
            let columns = block
                .content
                .iter()
                .flatten()
                .filter_map(|id| ctx.record_map.block(id))
                .map(|column| {
                    let cell = children_fragment(render_children(column, level + 1, ctx));
                    view! { <div class="bp-column">{cell}</div> }
                })
                .collect_view();
            Some(view! { <div class="bp-row">{columns}</div> }.into_any())
        }

        BlockType::Quote => {
            let children = render_children(&block, level, ctx);
            let nested =
                (!children.is_empty()).then(|| children_fragment(children));
            let class = cs(&["bp-quote", &color_class(&block), &ctx.block_dom_id(&block.id)]);
            Some(view! {
                <blockquote class=class>
                    {text_view(&block, "title")}
                    {nested}
                </blockquote>
            }
            .into_any())
        }

        BlockType::Callout => {
            let children = render_children(&block, level, ctx);
            let body = view! {
                {text_view(&block, "title")}
                {(!children.is_empty()).then(|| children_fragment(children))}
            }
            .into_any();
            let class = cs(&["bp-callout", &color_class(&block), &ctx.block_dom_id(&block.id)]);

            if let Some(slot) = &ctx.slots.callout {
                return Some(slot(CalloutProps {
                    class,
                    children: body,
                    block,
                }));
            }

            let icon = crate::components::page_icon_view(&block, ctx, true);
            Some(view! {
                <div class=class>
                    {icon}
                    <div class="bp-callout-text">{body}</div>
                </div>
            }
            .into_any())
        }

        BlockType::Bookmark => render_bookmark(&block, ctx),

        BlockType::Toggle => {
            let children = children_fragment(render_children(&block, level, ctx));
            let class = cs(&["bp-toggle", &color_class(&block), &ctx.block_dom_id(&block.id)]);
            Some(view! {
                <details class=class>
                    <summary class="bp-toggle-summary">{text_view(&block, "title")}</summary>
                    {children}
                </details>
            }
            .into_any())
        }

        BlockType::TableOfContents => {
            let page = parent_page(&block, &ctx.record_map)?;
            let outline = page_outline(&ctx.caches, page, &ctx.record_map);
            let entries = outline
                .iter()
                .map(|entry| {
                    let href = format!("#{}", uuid_to_id(&entry.id));
                    let style = format!("margin-left: {}px", entry.indent_level * 24);
                    let text = entry.text.clone();
                    view! {
                        <a class="bp-table-of-contents-item" href=href style=style>
                            {text}
                        </a>
                    }
                })
                .collect_view();
            let class = cs(&["bp-table-of-contents-block", &color_class(&block)]);
            Some(view! { <div class=class>{entries}</div> }.into_any())
        }

        BlockType::ToDo => {
            let checked = block.checked();
            let checkbox = (ctx.slots.checkbox)(CheckboxProps {
                block_id: uuid_to_id(&block.id),
                checked,
            });
            let body_class = cs(&[
                "bp-to-do-body",
                if checked { "bp-to-do-checked" } else { "" },
            ]);
            let children = render_children(&block, level, ctx);
            let nested = (!children.is_empty()).then(|| {
                view! { <div class="bp-to-do-children">{children_fragment(children)}</div> }
            });
            let class = cs(&["bp-to-do", &ctx.block_dom_id(&block.id)]);
            Some(view! {
                <div class=class>
                    <div class="bp-to-do-item">
                        {checkbox}
                        <span class=body_class>{text_view(&block, "title")}</span>
                    </div>
                    {nested}
                </div>
            }
            .into_any())
        }

        BlockType::TransclusionContainer => {
            let children = children_fragment(render_children(&block, level, ctx));
            Some(view! { <div class="bp-sync-block">{children}</div> }.into_any())
        }

        BlockType::TransclusionReference => {
            let pointer = block
                .format
                .as_ref()
                .and_then(|f| f.transclusion_reference_pointer.clone());
            render_reference_link(&block, pointer, ctx)
        }

        BlockType::Alias => {
            let pointer = block.format.as_ref().and_then(|f| f.alias_pointer.clone());
            render_reference_link(&block, pointer, ctx)
        }

        BlockType::Table => {
            let rows = children_fragment(render_children(&block, level, ctx));
            let class = cs(&["bp-simple-table", &ctx.block_dom_id(&block.id)]);
            Some(view! {
                <table class=class>
                    <tbody>{rows}</tbody>
                </table>
            }
            .into_any())
        }

        BlockType::TableRow => {
            let cells = table_row_cells(
                &block,
                &ctx.record_map,
                &ctx.options.blank_cell_placeholder,
            )?;
            let tds = cells
                .into_iter()
                .map(|cell| {
                    let class = cs(&[
                        "bp-simple-table-cell",
                        &cell
                            .color
                            .map(|c| format!("bp-{c}"))
                            .unwrap_or_default(),
                    ]);
                    let style = format!("width: {}px", cell.width);
                    view! {
                        <td class=class style=style>
                            <div class="bp-simple-table-cell-text">{cell.text}</div>
                        </td>
                    }
                })
                .collect_view();
            Some(
                view! { <tr class=table_row_class(&block)>{tds}</tr> }.into_any(),
            )
        }

        BlockType::ExternalObjectInstance => render_external_object(&block, ctx),

        BlockType::Unknown(raw) => {
            let payload = serde_json::to_string(&block).unwrap_or_default();
            debug_warn!("unsupported block type {raw}: {payload}");
            Some(view! { <div class="bp-unsupported"></div> }.into_any())
        }
    }
}

/// Dispatch type of a block in context. A collection view at the
/// document root stands in for its page; everywhere else the declared
/// type wins.
pub fn effective_kind(block: &Block, level: usize) -> BlockType {
    let kind = block.kind();
    if level == 0 && matches!(kind, BlockType::CollectionView) {
        BlockType::CollectionViewPage
    } else {
        kind
    }
}

/// Views of a block's children, in document order, skipping anything
/// missing or unrenderable.
pub(crate) fn render_children(
    block: &Block,
    level: usize,
    ctx: &RendererContext,
) -> Vec<AnyView> {
    block
        .content
        .iter()
        .flatten()
        .filter_map(|id| render_block(id, level + 1, ctx))
        .collect()
}

pub(crate) fn children_fragment(children: Vec<AnyView>) -> AnyView {
    children.into_any()
}

/// Row color applies to the whole `<tr>`; per-cell colors come from the
/// column format.
fn table_row_class(block: &Block) -> String {
    cs(&["bp-simple-table-row", &color_class(block)])
}

fn color_class(block: &Block) -> String {
    block
        .block_color()
        .map(|c| format!("bp-{c}"))
        .unwrap_or_default()
}

/// First cell of the `source` property, which is where upload and embed
/// blocks keep their asset URL.
fn source_url(block: &Block) -> Option<String> {
    block
        .property("source")
        .map(plain_text)
        .filter(|s| !s.is_empty())
}

fn collection_view(block: &Block, class: &str, ctx: &RendererContext) -> AnyView {
    let collection_name = block
        .collection_pointer_id()
        .and_then(|id| ctx.record_map.collection_name(&id));
    let href = (ctx.map_page_url)(&block.id);
    (ctx.slots.collection)(CollectionProps {
        class: class.to_string(),
        collection_name,
        href,
        block: block.clone(),
    })
}

/// Headings with no title property render nothing at all, children
/// included.
fn render_heading(
    block: &Block,
    kind: &BlockType,
    level: usize,
    ctx: &RendererContext,
) -> Option<AnyView> {
    block.property("title")?;

    let rank = kind.heading_rank().unwrap_or(1);
    let indent = crate::outline::indent_level_of(&ctx.caches, block, &ctx.record_map)
        .unwrap_or(0);
    let anchor = uuid_to_id(&block.id);
    let class = cs(&[
        crate::components::hooks::use_scroll_spy::HEADING_ANCHOR_CLASS,
        &format!("bp-h{rank}"),
        &format!("bp-h-indent-{indent}"),
        &color_class(block),
        &ctx.block_dom_id(&block.id),
    ]);
    // Title plus a hash link to the heading's own fragment.
    let hash_href = format!("#{anchor}");
    let title = view! {
        <span class="bp-h-title">{text_view(block, "title")}</span>
        <a class="bp-hash-link" href=hash_href aria-hidden="true">"#"</a>
    }
    .into_any();

    // The page title owns <h1>; document headings start at <h2>.
    let heading = match rank {
        1 => view! {
            <h2 id=anchor.clone() data-id=anchor class=class>{title}</h2>
        }
        .into_any(),
        2 => view! {
            <h3 id=anchor.clone() data-id=anchor class=class>{title}</h3>
        }
        .into_any(),
        _ => view! {
            <h4 id=anchor.clone() data-id=anchor class=class>{title}</h4>
        }
        .into_any(),
    };

    Some(if block.toggleable() {
        let children = children_fragment(render_children(block, level, ctx));
        view! {
            <details class="bp-toggle bp-toggle-heading">
                <summary class="bp-toggle-summary">{heading}</summary>
                {children}
            </details>
        }
        .into_any()
    } else {
        heading
    })
}

/// An item with neither text nor renderable children contributes
/// nothing, not even empty list markup.
fn render_list_item(
    block: &Block,
    kind: &BlockType,
    level: usize,
    ctx: &RendererContext,
) -> Option<AnyView> {
    let numbered = matches!(kind, BlockType::NumberedList);
    let body = block.property("title").map(|_| text_view(block, "title"));
    let children = render_children(block, level, ctx);
    if body.is_none() && children.is_empty() {
        return None;
    }
    let nested = (!children.is_empty()).then(|| {
        let inner = children_fragment(children);
        if numbered {
            view! { <ol class="bp-list bp-list-numbered">{inner}</ol> }.into_any()
        } else {
            view! { <ul class="bp-list bp-list-disc">{inner}</ul> }.into_any()
        }
    });

    let class = cs(&["bp-list-item", &color_class(block), &ctx.block_dom_id(&block.id)]);
    let item = view! { <li class=class>{body} {nested}</li> }.into_any();

    if !is_list_head(block, &ctx.record_map) {
        return Some(item);
    }

    Some(if numbered {
        let start = ordinal_start(block, &ctx.record_map);
        view! {
            <ol class="bp-list bp-list-numbered" start=start.to_string()>{item}</ol>
        }
        .into_any()
    } else {
        view! { <ul class="bp-list bp-list-disc">{item}</ul> }.into_any()
    })
}

fn render_bookmark(block: &Block, ctx: &RendererContext) -> Option<AnyView> {
    let link = block
        .property("link")
        .map(plain_text)
        .filter(|s| !s.is_empty())?;
    let title = block
        .title_text()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| hostname(&link));
    let description = block
        .property("description")
        .map(plain_text)
        .filter(|s| !s.is_empty());

    let format = block.format.as_ref();
    let icon = format.and_then(|f| f.bookmark_icon.clone()).map(|icon| {
        image_view(
            ctx,
            (ctx.map_image_url)(&icon, block),
            title.clone(),
            "bp-bookmark-icon",
            String::new(),
        )
    });
    let cover = format.and_then(|f| f.bookmark_cover.clone()).map(|cover| {
        let image = image_view(
            ctx,
            (ctx.map_image_url)(&cover, block),
            title.clone(),
            "bp-bookmark-cover",
            String::new(),
        );
        view! { <div class="bp-bookmark-image">{image}</div> }
    });

    let link_text = link.clone();
    let card = view! {
        <div class="bp-bookmark-content">
            <div class="bp-bookmark-title">{title}</div>
            {description.map(|d| view! { <div class="bp-bookmark-description">{d}</div> })}
            <div class="bp-bookmark-link">{icon} <span>{link_text}</span></div>
        </div>
        {cover}
    }
    .into_any();

    let class = cs(&["bp-bookmark", &color_class(block), &ctx.block_dom_id(&block.id)]);
    Some((ctx.slots.link)(LinkProps {
        href: link,
        class,
        new_tab: true,
        children: card,
    }))
}

/// Alias and sync-reference blocks render as a link to their target
/// page. A dangling pointer renders nothing; the surrounding document is
/// unaffected.
fn render_reference_link(
    block: &Block,
    pointer: Option<BlockPointer>,
    ctx: &RendererContext,
) -> Option<AnyView> {
    let Some(pointer) = pointer.filter(|p| !p.id.is_empty()) else {
        warn!("block {} has no reference pointer", block.id);
        return None;
    };
    let Some(target) = ctx.record_map.block(&pointer.id) else {
        warn!("block {} references missing block {}", block.id, pointer.id);
        return None;
    };

    let href = (ctx.map_page_url)(&target.id);
    let class = cs(&["bp-page-link", "bp-reference-link", &ctx.block_dom_id(&block.id)]);
    let children = page_title_view(target, ctx);
    Some((ctx.slots.page_link)(PageLinkProps {
        href,
        class,
        children,
    }))
}

fn render_external_object(block: &Block, ctx: &RendererContext) -> Option<AnyView> {
    let extra = block.format.as_ref().map(|f| &f.extra)?;
    let url = extra.get("original_url")?.as_str()?.to_string();
    let title = extra
        .get("attributes")
        .and_then(|a| a.as_array())
        .and_then(|attrs| {
            attrs
                .iter()
                .find(|a| a.get("id").and_then(|v| v.as_str()) == Some("title"))
        })
        .and_then(|a| a.get("values")?.get(0)?.as_str().map(str::to_string))
        .unwrap_or_else(|| url.clone());

    let children = view! { <span class="bp-external-object-title">{title}</span> }.into_any();
    Some((ctx.slots.link)(LinkProps {
        href: url,
        class: cs(&["bp-external-object", &ctx.block_dom_id(&block.id)]),
        new_tab: true,
        children,
    }))
}

/// One rendered cell of a simple-table row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableCell {
    pub column: String,
    pub text: String,
    pub color: Option<String>,
    pub width: f64,
}

/// Cells for a table row, in the column order declared on the parent
/// table block. `None` when the row is detached from its table or the
/// table declares no columns. Cells with no value get the configured
/// blank placeholder so the grid keeps its shape.
pub fn table_row_cells(row: &Block, map: &RecordMap, blank: &str) -> Option<Vec<TableCell>> {
    const DEFAULT_COLUMN_WIDTH: f64 = 120.0;

    let table = map.parent_of(row)?;
    let format = table.format.as_ref()?;
    let order = format.table_block_column_order.as_ref()?;
    let column_format = format.table_block_column_format.as_ref();

    Some(
        order
            .iter()
            .map(|column| {
                let text = row.property(column).map(plain_text).unwrap_or_default();
                let text = if text.is_empty() {
                    blank.to_string()
                } else {
                    text
                };
                let cf = column_format.and_then(|m| m.get(column));
                TableCell {
                    column: column.clone(),
                    text,
                    color: cf.and_then(|c| c.color.clone()),
                    width: cf.and_then(|c| c.width).unwrap_or(DEFAULT_COLUMN_WIDTH),
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::context::{RendererOptions, Slots};

    fn context_for(map: RecordMap) -> RendererContext {
        RendererContext::new(
            Rc::new(map),
            RendererOptions::default(),
            Slots::default(),
            None,
            None,
            None,
        )
    }

    #[test]
    fn empty_list_item_renders_nothing() {
        let map: RecordMap = serde_json::from_value(serde_json::json!({ "block": {
            "p": { "value": { "id": "p", "type": "page", "content": ["n", "m"] } },
            "n": { "value": { "id": "n", "type": "bulleted_list", "parent_id": "p" } },
            "m": { "value": { "id": "m", "type": "bulleted_list", "parent_id": "p",
                              "properties": { "title": [["item"]] } } },
        }}))
        .unwrap();
        let ctx = context_for(map);

        assert!(render_block("n", 1, &ctx).is_none());
        assert!(render_block("m", 1, &ctx).is_some());
    }

    #[test]
    fn textless_item_with_children_still_renders() {
        let map: RecordMap = serde_json::from_value(serde_json::json!({ "block": {
            "p": { "value": { "id": "p", "type": "page", "content": ["n"] } },
            "n": { "value": { "id": "n", "type": "bulleted_list", "parent_id": "p",
                              "content": ["t"] } },
            "t": { "value": { "id": "t", "type": "text", "parent_id": "n",
                              "properties": { "title": [["nested"]] } } },
        }}))
        .unwrap();
        let ctx = context_for(map);
        assert!(render_block("n", 1, &ctx).is_some());
    }

    #[test]
    fn heading_without_title_renders_nothing() {
        let map: RecordMap = serde_json::from_value(serde_json::json!({ "block": {
            "p": { "value": { "id": "p", "type": "page", "content": ["h", "h2"] } },
            "h": { "value": { "id": "h", "type": "header", "parent_id": "p" } },
            "h2": { "value": { "id": "h2", "type": "header", "parent_id": "p",
                               "properties": { "title": [["Titled"]] } } },
        }}))
        .unwrap();
        let ctx = context_for(map);

        assert!(render_block("h", 1, &ctx).is_none());
        assert!(render_block("h2", 1, &ctx).is_some());
    }

    #[test]
    fn row_color_lands_on_the_row_class() {
        let colored: Block = serde_json::from_value(serde_json::json!({
            "id": "r", "type": "table_row",
            "format": { "block_color": "red" },
        }))
        .unwrap();
        assert_eq!(table_row_class(&colored), "bp-simple-table-row bp-red");

        let plain: Block =
            serde_json::from_value(serde_json::json!({ "id": "r", "type": "table_row" }))
                .unwrap();
        assert_eq!(table_row_class(&plain), "bp-simple-table-row");
    }

    #[test]
    fn root_collection_view_is_promoted_to_a_page() {
        let block: Block = serde_json::from_value(serde_json::json!({
            "id": "v", "type": "collection_view",
        }))
        .unwrap();
        assert_eq!(effective_kind(&block, 0), BlockType::CollectionViewPage);
        assert_eq!(effective_kind(&block, 1), BlockType::CollectionView);

        let page: Block = serde_json::from_value(serde_json::json!({
            "id": "p", "type": "page",
        }))
        .unwrap();
        assert_eq!(effective_kind(&page, 0), BlockType::Page);
    }

    fn table_map() -> RecordMap {
        serde_json::from_value(serde_json::json!({ "block": {
            "tbl": { "value": { "id": "tbl", "type": "table", "content": ["r1"],
                "format": {
                    "table_block_column_order": ["ca", "cb", "cc"],
                    "table_block_column_format": {
                        "ca": { "width": 200.0 },
                        "cb": { "color": "red" },
                    },
                } } },
            "r1": { "value": { "id": "r1", "type": "table_row", "parent_id": "tbl",
                "properties": { "ca": [["alpha"]], "cb": [["beta"]] } } },
        }}))
        .unwrap()
    }

    #[test]
    fn row_cells_follow_the_parent_column_order() {
        let map = table_map();
        let cells = table_row_cells(map.block("r1").unwrap(), &map, "\u{3164}").unwrap();

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].text, "alpha");
        assert_eq!(cells[0].width, 200.0);
        assert_eq!(cells[1].text, "beta");
        assert_eq!(cells[1].color.as_deref(), Some("red"));
        assert_eq!(cells[1].width, 120.0);
    }

    #[test]
    fn valueless_cell_gets_the_blank_placeholder() {
        let map = table_map();
        let cells = table_row_cells(map.block("r1").unwrap(), &map, "\u{3164}").unwrap();
        assert_eq!(cells[2].text, "\u{3164}");
    }

    #[test]
    fn detached_row_has_no_cells() {
        let map: RecordMap = serde_json::from_value(serde_json::json!({ "block": {
            "r1": { "value": { "id": "r1", "type": "table_row", "parent_id": "gone" } },
            "bare": { "value": { "id": "bare", "type": "table", "content": ["r2"] } },
            "r2": { "value": { "id": "r2", "type": "table_row", "parent_id": "bare" } },
        }}))
        .unwrap();

        assert!(table_row_cells(map.block("r1").unwrap(), &map, "").is_none());
        assert!(
            table_row_cells(map.block("r2").unwrap(), &map, "").is_none(),
            "a table with no declared columns renders no cells"
        );
    }
}
