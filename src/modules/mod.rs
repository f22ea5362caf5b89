pub mod account;
pub mod catalog;
pub mod order;
pub mod user;

mod router;
pub use router::get_router;
