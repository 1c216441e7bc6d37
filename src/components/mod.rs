//! Leaf widgets shared by the dispatcher and the page frame.

pub mod aside;
pub mod hooks;

use leptos::prelude::*;

use crate::context::{ImageProps, RendererContext};
use crate::models::{Block, RecordMap};
use crate::util::{cs, is_url, plain_text};

/// Inline plain text of a rich-text property. Run decorations are a
/// presentation concern handled outside this crate.
pub(crate) fn text_view(block: &Block, key: &str) -> AnyView {
    let text = block.property(key).map(plain_text).unwrap_or_default();
    view! { <span class="bp-inline-text">{text}</span> }.into_any()
}

/// Image through the caller's image slot when supplied, plain `<img>`
/// otherwise.
pub(crate) fn image_view(
    ctx: &RendererContext,
    src: String,
    alt: String,
    class: &str,
    style: String,
) -> AnyView {
    if let Some(slot) = &ctx.slots.image {
        return slot(ImageProps {
            src,
            alt,
            class: class.to_string(),
            style,
        });
    }
    view! { <img class=class.to_string() style=style src=src alt=alt loading="lazy" /> }
        .into_any()
}

/// Title for page links and page frames. Database rows without their own
/// title fall back to the backing collection's display name.
pub(crate) fn display_title(block: &Block, map: &RecordMap) -> Option<String> {
    if let Some(title) = block.title_text().filter(|t| !t.is_empty()) {
        return Some(title);
    }
    let collection_id = block.collection_pointer_id()?;
    map.collection_name(&collection_id).filter(|t| !t.is_empty())
}

/// Icon + title pair used inside page links.
pub(crate) fn page_title_view(block: &Block, ctx: &RendererContext) -> AnyView {
    let title =
        display_title(block, &ctx.record_map).unwrap_or_else(|| "Untitled".to_string());
    let icon = page_icon_view(block, ctx, true);
    view! {
        <span class="bp-page-title">
            {icon}
            <span class="bp-page-title-text">{title}</span>
        </span>
    }
    .into_any()
}

/// Page icon: image when the icon value is a URL, glyph span otherwise.
/// `None` when neither the block nor the options carry an icon.
pub(crate) fn page_icon_view(
    block: &Block,
    ctx: &RendererContext,
    inline: bool,
) -> Option<AnyView> {
    let icon = block
        .format
        .as_ref()
        .and_then(|f| f.page_icon.clone())
        .or_else(|| ctx.options.default_page_icon.clone())?;

    let base = if inline {
        "bp-page-icon-inline"
    } else {
        "bp-page-icon"
    };

    Some(if is_url(&icon) {
        let src = (ctx.map_image_url)(&icon, block);
        let alt = block.title_text().unwrap_or_default();
        image_view(
            ctx,
            src,
            alt,
            &cs(&[base, "bp-page-icon-image"]),
            String::new(),
        )
    } else {
        view! { <span class=cs(&[base, "bp-page-icon-glyph"])>{icon}</span> }.into_any()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_prefers_the_block_title() {
        let map: RecordMap = serde_json::from_value(serde_json::json!({
            "block": {
                "p": { "value": { "id": "p", "type": "page",
                                  "properties": { "title": [["My page"]] } } },
            },
        }))
        .unwrap();
        assert_eq!(
            display_title(map.block("p").unwrap(), &map).as_deref(),
            Some("My page")
        );
    }

    #[test]
    fn database_row_without_title_uses_the_collection_name() {
        let map: RecordMap = serde_json::from_value(serde_json::json!({
            "block": {
                "row": { "value": { "id": "row", "type": "page",
                                    "parent_table": "collection",
                                    "collection_id": "c1" } },
            },
            "collection": {
                "c1": { "value": { "id": "c1", "name": [["Tasks"]] } },
            },
        }))
        .unwrap();
        assert_eq!(
            display_title(map.block("row").unwrap(), &map).as_deref(),
            Some("Tasks")
        );
    }

    #[test]
    fn no_title_anywhere_is_none() {
        let map: RecordMap = serde_json::from_value(serde_json::json!({
            "block": {
                "p": { "value": { "id": "p", "type": "page" } },
            },
        }))
        .unwrap();
        assert_eq!(display_title(map.block("p").unwrap(), &map), None);
    }
}
