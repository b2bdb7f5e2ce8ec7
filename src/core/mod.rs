//! Configuration and request models shared by the handler and the agent client

pub mod config;
pub mod models;
