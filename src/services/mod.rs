pub mod bank;
pub mod gateway;
pub mod repository;

pub use bank::{AcquiringBank, SimulatedBank};
pub use gateway::{AppGateway, GatewayError, PaymentGateway};
pub use repository::{InMemoryRepository, PaymentRepository};
