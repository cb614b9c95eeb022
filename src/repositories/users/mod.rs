pub mod identity_store;
pub mod user_repo;

pub use identity_store::IdentityStore;
pub use user_repo::UserRepository;
