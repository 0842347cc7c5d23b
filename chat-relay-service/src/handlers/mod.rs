//! HTTP handlers for the chat relay service.

pub mod app;
pub mod chat;
