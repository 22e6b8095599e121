//! HTTP request handlers

pub mod assessment;
pub mod chat;
pub mod drafting;
pub mod emotion;
pub mod health;
