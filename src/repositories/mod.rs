pub mod auth_storage;
pub mod local_storage_repo;
