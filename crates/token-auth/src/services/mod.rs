pub mod login_service;
pub mod simple_token_service;
pub mod token_service;

use crate::models::{SimpleCredential, TokenModel};
use simple_token_service::{SimpleTokenError, SimpleTokenService};
use token_service::{TokenError, TokenService};

/// Decoding half of a credential family.
///
/// Both token families turn presented wire text into a typed credential
/// through this trait; the authorizer for each family picks its service
/// when it is built.
pub trait CredentialDecoder: Send + Sync {
    type Credential;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short family name used in logs.
    fn family(&self) -> &'static str;

    /// Parse wire text into this family's credential.
    fn decode_credential(&self, wire: &str) -> Result<Self::Credential, Self::Error>;
}

impl CredentialDecoder for TokenService {
    type Credential = TokenModel;
    type Error = TokenError;

    fn family(&self) -> &'static str {
        "signed"
    }

    fn decode_credential(&self, wire: &str) -> Result<TokenModel, TokenError> {
        self.decode(wire)
    }
}

impl CredentialDecoder for SimpleTokenService {
    type Credential = SimpleCredential;
    type Error = SimpleTokenError;

    fn family(&self) -> &'static str {
        "simple"
    }

    fn decode_credential(&self, wire: &str) -> Result<SimpleCredential, SimpleTokenError> {
        self.decode(wire)
    }
}
