pub mod config;
pub mod form;
pub mod notifications;
pub mod session;
