pub mod token_generator;
pub mod user_query;
pub mod user_repository;

pub use token_generator::VerificationTokenGenerator;
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserRepository, UserRepositoryError};
