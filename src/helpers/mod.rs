#[cfg(test)]
pub mod mock_backend;
