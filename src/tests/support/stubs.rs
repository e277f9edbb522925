use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::modules::user::application::domain::entities::User;
use crate::modules::user::application::ports::outgoing::VerificationTokenGenerator;
use crate::modules::user::application::use_cases::{
    CheckVerificationStatusError, ICheckVerificationStatusUseCase, IRegisterUserUseCase,
    IResendVerificationUseCase, IVerifyUserEmailUseCase, RegisterUserError, RegisterUserInput,
    ResendVerificationError, VerificationStatusOutput, VerifyUserEmailError,
};

/// Yields `token-1`, `token-2`, ... so tests can predict issued tokens.
#[derive(Default)]
pub struct SequentialTokenGenerator {
    counter: AtomicUsize,
}

impl VerificationTokenGenerator for SequentialTokenGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("token-{n}")
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<User, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyUserEmailUseCase;

#[async_trait]
impl IVerifyUserEmailUseCase for StubVerifyUserEmailUseCase {
    async fn execute(&self, _username: &str, _token: &str) -> Result<User, VerifyUserEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCheckVerificationStatusUseCase;

#[async_trait]
impl ICheckVerificationStatusUseCase for StubCheckVerificationStatusUseCase {
    async fn execute(
        &self,
        _username: &str,
    ) -> Result<VerificationStatusOutput, CheckVerificationStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResendVerificationUseCase;

#[async_trait]
impl IResendVerificationUseCase for StubResendVerificationUseCase {
    async fn execute(&self, _username: &str) -> Result<(), ResendVerificationError> {
        unimplemented!("Not used in this test")
    }
}
