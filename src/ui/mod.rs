pub mod app;
pub mod book_list;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod move_dialog;
pub mod mvi;
pub mod notification;
pub mod render;
pub mod requests;
pub mod runtime;
pub mod shelf;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
