pub mod sea_orm_entity;
pub mod security;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use security::random_token_generator::RandomTokenGenerator;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
