use anyhow::{anyhow, Result};
use jwt_service::JwtService;
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashSet;
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The email in our case
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

pub struct JwtState {
    jwt_service: JwtService,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(secret: Option<String>, time_valid: Duration) -> Self {
        let jwt_service = match secret {
            Some(secret) => JwtService::new(secret),
            None => {
                info!("No JWT secret configured, tokens become invalid on restart");
                JwtService::random()
            }
        };
        Self {
            jwt_service,
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, email: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: email.to_string(),
            exp,
        };
        let token = self.jwt_service.encode(&claims)?;
        Ok(token)
    }

    pub fn validate_token_and_get_email(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.jwt_service.decode(token)?;
        Ok(claims.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_invalid_tokens(&self) {
        let mut blacklist = self.lock();
        blacklist.retain(|token| self.jwt_service.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

mod jwt_service {
    use super::{Claims, Result};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

    /// 256 bit, base64 encoded
    fn generate_random_secret() -> String {
        STANDARD.encode(rand::random::<[u8; 32]>())
    }

    struct Key {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
    }

    impl Key {
        fn new(secret: &str) -> Self {
            Self {
                encoding_key: EncodingKey::from_secret(secret.as_ref()),
                decoding_key: DecodingKey::from_secret(secret.as_ref()),
            }
        }
    }

    pub struct JwtService {
        key: Key,
    }

    impl JwtService {
        pub fn new(secret: String) -> Self {
            Self {
                key: Key::new(&secret),
            }
        }
        pub fn random() -> Self {
            Self::new(generate_random_secret())
        }
        pub fn encode(&self, claims: &Claims) -> Result<String> {
            let token = encode(&Header::default(), claims, &self.key.encoding_key)?;
            Ok(token)
        }
        pub fn decode(&self, token: &str) -> Result<Claims> {
            let token_data =
                decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
            Ok(token_data.claims)
        }
    }
}
