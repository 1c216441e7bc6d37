//! The level-0 page frame: chrome, cover, title, body, outline sidebar.

use leptos::prelude::*;

use crate::components::aside::page_aside_view;
use crate::components::{display_title, page_icon_view};
use crate::context::{HeaderChromeProps, RendererContext, RendererOptions};
use crate::models::Block;
use crate::outline::page_outline;
use crate::util::cs;

/// Caller-supplied chrome around the page frame. Every slot is optional;
/// the frame renders fine completely bare.
#[derive(Default)]
pub struct PageDecorations {
    /// Above the page, outside the scroll frame.
    pub header: Option<AnyView>,
    /// Below the page, outside the scroll frame.
    pub footer: Option<AnyView>,
    /// First thing inside the page body.
    pub page_header: Option<AnyView>,
    /// Last thing inside the page body.
    pub page_footer: Option<AnyView>,
    /// Replaces the built-in `<h1>` title.
    pub page_title: Option<AnyView>,
    /// Extra sidebar content, above the outline.
    pub page_aside: Option<AnyView>,
    /// Replaces the built-in cover image.
    pub page_cover: Option<AnyView>,
    /// Appended to the root element's class list.
    pub class: Option<String>,
    /// Appended to the page body's class list.
    pub body_class: Option<String>,
}

/// Whether the sidebar outline and the sidebar itself should render.
///
/// The outline needs to be enabled and meet the minimum entry count; the
/// sidebar also shows for extra aside content alone. Full-width pages
/// have no room for a sidebar at all.
pub(crate) fn aside_visibility(
    toc_len: usize,
    options: &RendererOptions,
    has_extra_aside: bool,
    full_width: bool,
) -> (bool, bool) {
    let has_toc =
        options.show_table_of_contents && toc_len >= options.min_table_of_contents_items;
    let has_aside = (has_toc || has_extra_aside) && !full_width;
    (has_toc, has_aside)
}

/// Compose the frame for a root page block with `body` as its content.
pub(crate) fn render_page(
    block: &Block,
    body: AnyView,
    ctx: &RendererContext,
    decorations: PageDecorations,
) -> AnyView {
    let theme = if ctx.options.dark_mode {
        "dark-mode"
    } else {
        "light-mode"
    };
    let dom_class = ctx.block_dom_id(&block.id);

    if !ctx.options.full_page {
        let class = cs(&[
            "bp-frame",
            theme,
            &dom_class,
            decorations.class.as_deref().unwrap_or(""),
            decorations.body_class.as_deref().unwrap_or(""),
        ]);
        return view! {
            <main class=class>
                {decorations.page_header}
                {body}
                {decorations.page_footer}
            </main>
        }
        .into_any();
    }

    let format = block.format.as_ref();
    let full_width = format.map(|f| f.page_full_width).unwrap_or(false);
    let small_text = format.map(|f| f.page_small_text).unwrap_or(false);

    let header = (!ctx.options.disable_header).then(|| {
        (ctx.slots.header)(HeaderChromeProps {
            block: block.clone(),
            search: ctx.search.clone(),
        })
    });

    let cover = decorations.page_cover.or_else(|| {
        let src = format
            .and_then(|f| f.page_cover.clone())
            .or_else(|| ctx.options.default_page_cover.clone())?;
        let src = (ctx.map_image_url)(&src, block);
        let position = format
            .and_then(|f| f.page_cover_position)
            .unwrap_or(ctx.options.default_page_cover_position);
        // The stored position is bottom-anchored; CSS object-position is
        // top-anchored.
        let percent = (1.0 - position) * 100.0;
        let style = ctx.caches.cover_style(&format!("center {percent:.2}%"));
        let image = crate::components::image_view(ctx, src, String::new(), "bp-page-cover", style);
        Some(view! { <div class="bp-page-cover-wrapper">{image}</div> }.into_any())
    });

    let icon = page_icon_view(block, ctx, false);
    let title = decorations.page_title.unwrap_or_else(|| {
        let text = display_title(block, &ctx.record_map).unwrap_or_default();
        view! { <h1 class="bp-title">{text}</h1> }.into_any()
    });

    let toc = page_outline(&ctx.caches, block, &ctx.record_map);
    let (has_toc, has_aside) = aside_visibility(
        toc.len(),
        &ctx.options,
        decorations.page_aside.is_some(),
        full_width,
    );
    let aside = has_aside.then(|| {
        let active_section = RwSignal::new(None::<String>);
        page_aside_view(toc, active_section, has_toc, decorations.page_aside)
    });

    let root_class = cs(&[
        "bp-app",
        theme,
        decorations.class.as_deref().unwrap_or(""),
    ]);
    let page_class = cs(&[
        "bp-page",
        if full_width { "bp-full-width" } else { "" },
        if small_text { "bp-small-text" } else { "" },
        &dom_class,
        decorations.body_class.as_deref().unwrap_or(""),
    ]);

    view! {
        <div class=root_class>
            {header}
            <div class="bp-frame">
                {decorations.header}
                <main class=page_class>
                    {cover}
                    <div class="bp-page-content">
                        {icon}
                        {decorations.page_header}
                        {title}
                        <article class="bp-page-content-body">{body}</article>
                        {aside}
                        {decorations.page_footer}
                    </div>
                </main>
                {decorations.footer}
            </div>
        </div>
    }
    .into_any()
}
