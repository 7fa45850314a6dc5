pub mod reimbursement;
pub mod user;

pub use reimbursement::{ReimbFilter, Reimbursement};
pub use user::{Principal, User};
