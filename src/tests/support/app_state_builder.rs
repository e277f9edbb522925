use crate::modules::user::application::use_cases::{
    ICheckVerificationStatusUseCase, IRegisterUserUseCase, IResendVerificationUseCase,
    IVerifyUserEmailUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    verify_user_email: Arc<dyn IVerifyUserEmailUseCase + Send + Sync>,
    check_verification_status: Arc<dyn ICheckVerificationStatusUseCase + Send + Sync>,
    resend_verification: Arc<dyn IResendVerificationUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            verify_user_email: Arc::new(StubVerifyUserEmailUseCase),
            check_verification_status: Arc::new(StubCheckVerificationStatusUseCase),
            resend_verification: Arc::new(StubResendVerificationUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_verify_user_email(
        mut self,
        uc: impl IVerifyUserEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_user_email = Arc::new(uc);
        self
    }

    pub fn with_check_verification_status(
        mut self,
        uc: impl ICheckVerificationStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.check_verification_status = Arc::new(uc);
        self
    }

    pub fn with_resend_verification(
        mut self,
        uc: impl IResendVerificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resend_verification = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            verify_user_email_use_case: self.verify_user_email,
            check_verification_status_use_case: self.check_verification_status,
            resend_verification_use_case: self.resend_verification,
        })
    }
}
