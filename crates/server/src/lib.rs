pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod http;
pub mod service;
pub mod state;
