pub mod random_token_generator;
