//! Mock analysis service behind an async request/poll boundary

mod backend;
mod worker;

pub use backend::{MockBackend, MockDelays};
pub use worker::{BackendRequest, BackendResponse, BackgroundWorker, RequestKind};
