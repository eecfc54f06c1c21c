//! Password hashing and session tokens

use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::models::Session;

const PBKDF2_ITERATIONS: u32 = 100_000;
const HASH_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;

/// Session token claims. `sid` must still be live in the session store.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sid: Uuid,
    pub sub: u32,
    pub exp: usize,
}

/// hash a password with pbkdf2-sha256 and a fresh random salt, returned as `salt$hash`
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);

    let hash = derive(password, &salt);
    format!("{}${}", hex::encode(salt), hex::encode(hash))
}

/// verify a password against a `salt$hash` string using constant-time comparison
pub fn verify_password(password: &str, stored: &str) -> Result<bool> {
    let (salt_hex, hash_hex) = stored
        .split_once('$')
        .ok_or_else(|| anyhow!("malformed password hash"))?;
    let salt = hex::decode(salt_hex)?;
    let expected = hex::decode(hash_hex)?;

    let computed = derive(password, &salt);
    Ok(computed.as_slice().ct_eq(expected.as_slice()).into())
}

fn derive(password: &str, salt: &[u8]) -> [u8; HASH_LENGTH] {
    let mut hash = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut hash);
    hash
}

/// create a signed token for a session, expiring with it
pub fn create_token(session: &Session, secret: &str) -> Result<String> {
    let exp = usize::try_from(session.expires_at.timestamp())?;
    let claims = Claims {
        sid: session.id,
        sub: session.account_id,
        exp,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// verify a token signature and expiry
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}
