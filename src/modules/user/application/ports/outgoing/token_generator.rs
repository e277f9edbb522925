/// Source of opaque verification tokens. Every call is independent.
pub trait VerificationTokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
