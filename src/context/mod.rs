//! Render context: options, caller-supplied slot renderers, URL mappers.
//!
//! The context is plain shared data (no signals); it is cloned by
//! reference across the whole traversal and stays immutable for the
//! duration of one render.

use std::rc::Rc;

use leptos::prelude::*;

use crate::models::{Block, RecordMap};
use crate::outline::RenderCaches;
use crate::util;

/// Recognized rendering options and their effects.
#[derive(Clone, Debug)]
pub struct RendererOptions {
    /// Full page chrome (header, cover, title, aside) vs bare fragment.
    pub full_page: bool,
    /// CSS theme hook only; no logic branches on it.
    pub dark_mode: bool,
    /// Delegated to the caller's image slot.
    pub preview_images: bool,
    /// Delegated to the caller's image slot.
    pub force_custom_images: bool,
    pub show_table_of_contents: bool,
    /// Minimum outline entries before the sidebar outline qualifies.
    pub min_table_of_contents_items: usize,
    pub default_page_icon: Option<String>,
    pub default_page_cover: Option<String>,
    /// Fallback cover focal position, 0.0..=1.0.
    pub default_page_cover_position: f64,
    /// Suppress per-block DOM anchor ids.
    pub hide_block_id: bool,
    /// Suppress the header-chrome slot in full-page mode.
    pub disable_header: bool,
    /// Rendered in table cells whose row has no value for a column.
    pub blank_cell_placeholder: String,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            full_page: false,
            dark_mode: false,
            preview_images: false,
            force_custom_images: false,
            show_table_of_contents: false,
            min_table_of_contents_items: 3,
            default_page_icon: None,
            default_page_cover: None,
            default_page_cover_position: 0.5,
            hide_block_id: false,
            disable_header: false,
            // Invisible filler character, same as the data source uses
            // for empty cells.
            blank_cell_placeholder: "\u{3164}".to_string(),
        }
    }
}

pub type MapPageUrlFn = Rc<dyn Fn(&str) -> String>;
pub type MapImageUrlFn = Rc<dyn Fn(&str, &Block) -> String>;
/// Search hook invoked with the query text; wiring the results UI is the
/// caller's concern.
pub type SearchFn = Rc<dyn Fn(&str)>;

type SlotFn<P> = Rc<dyn Fn(P) -> AnyView>;

pub struct LinkProps {
    pub href: String,
    pub class: String,
    pub new_tab: bool,
    pub children: AnyView,
}

pub struct PageLinkProps {
    pub href: String,
    pub class: String,
    pub children: AnyView,
}

pub struct EmbedProps {
    pub block: Block,
    pub class: String,
    /// Resolved source URL, already passed through the asset mapper.
    pub source: Option<String>,
}

pub struct CollectionProps {
    pub block: Block,
    pub class: String,
    /// Display name of the backing collection, when resolvable.
    pub collection_name: Option<String>,
    /// Internal URL of the collection page.
    pub href: String,
}

pub struct EquationProps {
    pub block: Block,
    pub class: String,
    /// Raw expression source.
    pub expression: String,
}

pub struct CodeProps {
    pub block: Block,
    pub class: String,
    pub code: String,
    pub language: Option<String>,
}

pub struct CheckboxProps {
    pub block_id: String,
    pub checked: bool,
}

pub struct HeaderChromeProps {
    pub block: Block,
    /// Present when the caller provides a search hook; the chrome decides
    /// whether to surface a search affordance.
    pub search: Option<SearchFn>,
}

pub struct CalloutProps {
    pub block: Block,
    pub class: String,
    pub children: AnyView,
}

pub struct ImageProps {
    pub src: String,
    pub alt: String,
    pub class: String,
    pub style: String,
}

/// Caller-supplied rendering capabilities for a closed set of slot roles.
///
/// The dispatcher is polymorphic over this set; every slot receives
/// exactly the documented props and nothing else. `callout` and `image`
/// are optional and fall back to built-in markup.
#[derive(Clone)]
pub struct Slots {
    pub link: SlotFn<LinkProps>,
    pub page_link: SlotFn<PageLinkProps>,
    pub embed: SlotFn<EmbedProps>,
    pub collection: SlotFn<CollectionProps>,
    pub equation: SlotFn<EquationProps>,
    pub code: SlotFn<CodeProps>,
    pub checkbox: SlotFn<CheckboxProps>,
    pub header: SlotFn<HeaderChromeProps>,
    pub callout: Option<SlotFn<CalloutProps>>,
    pub image: Option<SlotFn<ImageProps>>,
}

impl Default for Slots {
    fn default() -> Self {
        Self {
            link: Rc::new(|props: LinkProps| {
                view! {
                    <a
                        class=props.class
                        href=props.href
                        target=props.new_tab.then_some("_blank")
                        rel=props.new_tab.then_some("noopener noreferrer")
                    >
                        {props.children}
                    </a>
                }
                .into_any()
            }),
            page_link: Rc::new(|props: PageLinkProps| {
                view! {
                    <a class=props.class href=props.href>
                        {props.children}
                    </a>
                }
                .into_any()
            }),
            embed: Rc::new(|props: EmbedProps| {
                view! {
                    <div class=util::cs(&["bp-embed", &props.class])>
                        {props.source.map(|source| {
                            let text = source.clone();
                            view! {
                                <a href=source target="_blank" rel="noopener noreferrer">
                                    {text}
                                </a>
                            }
                        })}
                    </div>
                }
                .into_any()
            }),
            collection: Rc::new(|props: CollectionProps| {
                view! {
                    <a class=util::cs(&["bp-collection", &props.class]) href=props.href>
                        {props.collection_name.unwrap_or_else(|| "Untitled".to_string())}
                    </a>
                }
                .into_any()
            }),
            equation: Rc::new(|props: EquationProps| {
                view! {
                    <code class=util::cs(&["bp-equation", &props.class])>
                        {props.expression}
                    </code>
                }
                .into_any()
            }),
            code: Rc::new(|props: CodeProps| {
                let language_class = props
                    .language
                    .map(|l| format!("language-{l}"))
                    .unwrap_or_default();
                view! {
                    <pre class=util::cs(&["bp-code", &props.class])>
                        <code class=language_class>{props.code}</code>
                    </pre>
                }
                .into_any()
            }),
            checkbox: Rc::new(|props: CheckboxProps| {
                view! {
                    <input
                        type="checkbox"
                        class="bp-checkbox"
                        id=props.block_id
                        checked=props.checked
                        disabled=true
                    />
                }
                .into_any()
            }),
            header: Rc::new(|_props: HeaderChromeProps| {
                view! {
                    <header class="bp-header">
                        <div class="bp-nav-header"></div>
                    </header>
                }
                .into_any()
            }),
            callout: None,
            image: None,
        }
    }
}

/// Everything one render pass needs, shared by reference.
#[derive(Clone)]
pub struct RendererContext {
    pub record_map: Rc<RecordMap>,
    pub options: Rc<RendererOptions>,
    pub slots: Rc<Slots>,
    pub map_page_url: MapPageUrlFn,
    pub map_image_url: MapImageUrlFn,
    pub search: Option<SearchFn>,
    pub caches: Rc<RenderCaches>,
}

impl RendererContext {
    pub fn new(
        record_map: Rc<RecordMap>,
        options: RendererOptions,
        slots: Slots,
        map_page_url: Option<MapPageUrlFn>,
        map_image_url: Option<MapImageUrlFn>,
        search: Option<SearchFn>,
    ) -> Self {
        Self {
            record_map,
            options: Rc::new(options),
            slots: Rc::new(slots),
            map_page_url: map_page_url.unwrap_or_else(|| Rc::new(util::default_map_page_url)),
            map_image_url: map_image_url.unwrap_or_else(|| Rc::new(util::default_map_image_url)),
            search,
            caches: Rc::new(RenderCaches::new()),
        }
    }

    /// DOM anchor class for a block, or the bare hook when ids are
    /// suppressed.
    pub fn block_dom_id(&self, block_id: &str) -> String {
        if self.options.hide_block_id {
            "bp-block".to_string()
        } else {
            format!("bp-block-{}", util::uuid_to_id(block_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = RendererOptions::default();
        assert!(!options.full_page);
        assert_eq!(options.min_table_of_contents_items, 3);
        assert_eq!(options.default_page_cover_position, 0.5);
        assert_eq!(options.blank_cell_placeholder, "\u{3164}");
    }

    #[test]
    fn block_dom_id_respects_hide_flag() {
        let ctx = RendererContext::new(
            Rc::new(RecordMap::default()),
            RendererOptions::default(),
            Slots::default(),
            None,
            None,
            None,
        );
        assert_eq!(ctx.block_dom_id("ab-cd"), "bp-block-abcd");

        let hidden = RendererContext::new(
            Rc::new(RecordMap::default()),
            RendererOptions {
                hide_block_id: true,
                ..Default::default()
            },
            Slots::default(),
            None,
            None,
            None,
        );
        assert_eq!(hidden.block_dom_id("ab-cd"), "bp-block");
    }

    #[test]
    fn default_embed_slot_accepts_source_and_absence() {
        let block: Block =
            serde_json::from_value(serde_json::json!({ "id": "e", "type": "embed" }))
                .unwrap();
        let slots = Slots::default();

        let _with_source = (slots.embed)(EmbedProps {
            block: block.clone(),
            class: String::new(),
            source: Some("https://example.com/widget".to_string()),
        });
        let _without = (slots.embed)(EmbedProps {
            block,
            class: String::new(),
            source: None,
        });
    }
}
