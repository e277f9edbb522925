pub mod app_state_builder;
pub mod fixtures;
pub mod in_memory_users;
pub mod log_capture;
pub mod mocks;
pub mod stubs;
