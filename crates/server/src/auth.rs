use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use domain::Identity;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies bearer tokens of the form `base64url(user).hex(hmac)`.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size")
    }

    pub fn issue(&self, identity: &Identity) -> String {
        let mut mac = self.mac();
        mac.update(identity.as_str().as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());
        format!("{}.{}", URL_SAFE_NO_PAD.encode(identity.as_str()), signature)
    }

    pub fn verify(&self, token: &str) -> Option<Identity> {
        let (encoded_user, signature) = token.split_once('.')?;
        let user_bytes = URL_SAFE_NO_PAD.decode(encoded_user).ok()?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac();
        mac.update(&user_bytes);
        mac.verify_slice(&signature).ok()?;

        let user = String::from_utf8(user_bytes).ok()?;
        Identity::new(user).ok()
    }
}

/// The caller's identity, if the request carried a valid bearer token.
///
/// Never rejects: deciding what an anonymous request may do is left to the
/// comment service.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

impl MaybeIdentity {
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeIdentity
where
    TokenSigner: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(Self(None));
        };
        let token = header
            .to_str()
            .ok()
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim);

        let identity = token.and_then(|t| TokenSigner::from_ref(state).verify(t));
        if identity.is_none() {
            debug!("Ignoring invalid Authorization header");
        }
        Ok(Self(identity))
    }
}
