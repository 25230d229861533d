pub mod event;
pub mod auth;
pub mod table;
pub mod connector;
pub mod dispatch;
pub mod errors;
pub mod routes;
pub mod startup;

pub use dispatch::Dispatcher;
pub use event::{ApiEvent, ApiResponse};
pub use startup::run;
