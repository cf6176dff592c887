use anyhow::{Context, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Postgres};
use utoipa::ToSchema;

use crate::account::UserRepository;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (user_id as string)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// User Registration Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "bernice")]
    pub username: String,
    #[schema(example = "password123")]
    pub password: String,
}

/// User Login Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "bernice")]
    pub username: String,
    #[schema(example = "password123")]
    pub password: String,
}

/// Auth Response (JWT)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

pub struct AuthService {
    db: Pool<Postgres>,
    jwt_secret: String,
    starting_balance: Decimal,
}

impl AuthService {
    pub fn new(db: Pool<Postgres>, jwt_secret: String, starting_balance: Decimal) -> Self {
        Self {
            db,
            jwt_secret,
            starting_balance,
        }
    }

    /// Register a new user; the account with its starting balance is
    /// created in the same transaction.
    pub async fn register(&self, req: RegisterRequest) -> Result<i64> {
        let password_hash = hash_password(&req.password)?;

        let user_id = UserRepository::create_with_account(
            &self.db,
            &req.username,
            &password_hash,
            self.starting_balance,
        )
        .await
        .context("Failed to insert user")?;

        Ok(user_id)
    }

    /// Login user and issue JWT
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse> {
        let user = UserRepository::get_by_username(&self.db, &req.username)
            .await
            .context("DB query failed")?
            .ok_or_else(|| anyhow::anyhow!("Invalid username or password"))?;

        verify_password(&req.password, &user.password_hash)
            .map_err(|_| anyhow::anyhow!("Invalid username or password"))?;

        let token = encode_token(&self.jwt_secret, user.user_id)?;

        Ok(AuthResponse {
            token,
            user_id: user.user_id,
            username: user.username,
        })
    }

    /// Verify JWT token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode_token(&self.jwt_secret, token)
    }
}

/// Hash a password with argon2 and a fresh salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Hashing failed: {}", e))?
        .to_string();
    Ok(hash)
}

/// Verify a password against a stored argon2 hash
pub fn verify_password(password: &str, stored_hash: &str) -> Result<()> {
    let parsed_hash =
        PasswordHash::new(stored_hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| anyhow::anyhow!("Password mismatch"))?;
    Ok(())
}

/// Issue a 24h HS256 token for a user
pub fn encode_token(secret: &str, user_id: i64) -> Result<String> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::hours(24))
        .context("valid timestamp")?
        .timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to generate token")
}

/// Decode and validate a bearer token
pub fn decode_token(secret: &str, token: &str) -> Result<Claims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let token = encode_token("test-secret", 1001).unwrap();
        let claims = decode_token("test-secret", &token).unwrap();
        assert_eq!(claims.user_id(), Some(1001));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let token = encode_token("test-secret", 1001).unwrap();
        assert!(decode_token("other-secret", &token).is_err());
    }

    #[test]
    fn token_rejects_tampering() {
        let token = encode_token("test-secret", 1001).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('a') { 'b' } else { 'a' });
        assert!(decode_token("test-secret", &tampered).is_err());
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("hunter2-hunter2").unwrap();
        assert!(verify_password("hunter2-hunter2", &hash).is_ok());
        assert!(verify_password("wrong-password", &hash).is_err());
    }
}
