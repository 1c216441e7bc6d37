//! Outline sidebar rendered next to full pages.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::hooks::use_scroll_spy::use_scroll_spy;
use crate::outline::OutlineEntry;
use crate::util::uuid_to_id;

/// Sidebar with the page outline and any caller-supplied extra content.
///
/// Outline entries link to the in-page heading anchors; the entry whose
/// section is currently scrolled into view carries the active class,
/// driven by the scroll-spy tracker. When `has_toc` is false only the
/// extra content renders and no tracker is attached.
pub(crate) fn page_aside_view(
    toc: Rc<Vec<OutlineEntry>>,
    active_section: RwSignal<Option<String>>,
    has_toc: bool,
    extra: Option<AnyView>,
) -> AnyView {
    use_scroll_spy(has_toc, active_section);

    let outline = has_toc.then(|| {
        let items = toc
            .iter()
            .map(|entry| {
                let anchor = uuid_to_id(&entry.id);
                let href = format!("#{anchor}");
                let text = entry.text.clone();
                let style = format!("margin-left: {}px", entry.indent_level * 16);
                let is_active = move || {
                    active_section
                        .read()
                        .as_deref()
                        .is_some_and(|active| active == anchor)
                };
                view! {
                    <a
                        class="bp-table-of-contents-item"
                        class=("bp-table-of-contents-active-item", is_active)
                        href=href
                        style=style
                    >
                        <span class="bp-table-of-contents-item-body">{text}</span>
                    </a>
                }
            })
            .collect_view();
        view! {
            <nav class="bp-table-of-contents">
                <div class="bp-table-of-contents-items">{items}</div>
            </nav>
        }
    });

    view! {
        <aside class="bp-aside">
            <div class="bp-aside-contents">{extra} {outline}</div>
        </aside>
    }
    .into_any()
}
