//! Domain layer of the expense reimbursement system: entities, validation,
//! the status lifecycle, repository ports and the services built on them.

pub mod error;
pub mod models;
pub mod password;
pub mod repository;
pub mod roles;
pub mod services;
pub mod status;
pub mod types;
pub mod validator;
