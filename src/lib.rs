//! Console client for a remote question-answering service.

pub mod config;
pub mod controller;
pub mod service;

pub use config::AppConfig;
pub use controller::{QueryForm, RequestStatus, EMPTY_QUERY_MESSAGE};
pub use service::{AnswerService, HttpAnswerService, ServiceError};
