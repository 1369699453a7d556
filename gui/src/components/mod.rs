pub mod content_header_panel;
pub mod content_panel;
