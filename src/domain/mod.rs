//! Domain models for addmul

pub mod operation;
pub mod request;

pub use operation::Operation;
pub use request::Request;
