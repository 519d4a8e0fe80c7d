//! Request/response pipeline shared by every backend call.

pub mod alerts;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod transport;

pub use alerts::{Alerts, ConsoleAlerts};
pub use error::ApiError;
pub use pipeline::RequestPipeline;
pub use request::{FormPart, RequestBody, RequestDescriptor};
pub use transport::{ApiResponse, OutgoingRequest, ReqwestTransport, Transport, TransportError};
