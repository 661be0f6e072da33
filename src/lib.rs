pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod profile;
pub mod quota;
pub mod session;
pub mod types;

pub use api::ApiGateway;
pub use error::ClientError;
pub use events::{EventBus, ProfileChanged};
pub use profile::ProfileSync;
pub use quota::{AlertLevel, QuotaPolicy, UploadGate};
pub use session::{SessionGuard, SessionService};
