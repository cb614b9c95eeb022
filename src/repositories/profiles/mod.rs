pub mod profile_repo;
pub mod profile_store;

pub use profile_repo::ProfileRepository;
pub use profile_store::ProfileStore;
