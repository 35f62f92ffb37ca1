pub mod app;
pub mod autocomplete;
pub mod config;
pub mod export;
pub mod form;
pub mod layout;
pub mod lists;
pub mod notification;
pub mod products;
pub mod remote;
pub mod store;
pub mod widgets;
