pub mod background;
pub mod chat_message;
pub mod chat_panel;
pub mod header;
pub mod status_bar;
pub mod video_panel;
