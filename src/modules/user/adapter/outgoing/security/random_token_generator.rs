use rand::rngs::OsRng;
use rand::RngCore;

use crate::modules::user::application::ports::outgoing::VerificationTokenGenerator;

const TOKEN_BYTES: usize = 32;

/// 32 bytes from the operating system CSPRNG, rendered as 64 lowercase hex chars.
#[derive(Clone, Debug, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl VerificationTokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);

        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
