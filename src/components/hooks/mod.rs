pub mod use_scroll_spy;
