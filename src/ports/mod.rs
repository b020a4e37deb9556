//! Port traits decoupling the domain from infrastructure.

pub mod repository;

pub use repository::ModelRepository;
