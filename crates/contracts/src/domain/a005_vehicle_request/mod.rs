pub mod aggregate;

pub use aggregate::{RequestStatus, UpdateRequestStatusDto, VehicleRequest};
