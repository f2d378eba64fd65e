pub mod api;
pub mod app;
pub mod event;
pub mod input;
pub mod ui;
