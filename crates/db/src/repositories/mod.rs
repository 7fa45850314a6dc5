//! Repository layer.
//!
//! `RoleRepo` follows the zero-sized pattern taking `&PgPool` per call. The
//! entity repositories own a pool handle because they implement the
//! `ers_core::repository` ports behind `Arc<dyn _>`.

pub mod reimbursement_repo;
pub mod role_repo;
pub mod user_repo;

pub use reimbursement_repo::PgReimbursementRepository;
pub use role_repo::RoleRepo;
pub use user_repo::PgUserRepository;
