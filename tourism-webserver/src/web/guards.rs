use std::{ops::Deref, sync::Arc};

use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{core::prelude::*, web::jwt};
use tourism_core::gateways::geocode::ReverseGeoCodingGateway;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The credentials of a request.
///
/// Requests without a valid token are anonymous.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_email: Option<String>,
}

impl Auth {
    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    /// The acting user, if any.
    ///
    /// Tokens of deleted users are treated like missing ones.
    pub fn actor<R>(&self, repo: &R) -> Result<Option<User>>
    where
        R: UserRepo,
    {
        let Some(email) = self
            .account_email
            .as_deref()
            .and_then(|email| email.parse::<EmailAddress>().ok())
        else {
            return Ok(None);
        };
        let user = repo.try_get_user_by_email(&email)?;
        if user.is_none() {
            debug!("Bearer token of an unknown user: {email}");
        }
        Ok(user)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    async fn account_email_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .filter_map(|token| jwt_state.validate_token_and_get_email(token).ok())
            .next()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let account_email = Self::account_email_from_jwt_in_header(request, &bearer_tokens).await;
        Outcome::Success(Self {
            bearer_tokens,
            account_email,
        })
    }
}

pub struct GeoCoding(pub Arc<dyn ReverseGeoCodingGateway + Send + Sync>);

impl Deref for GeoCoding {
    type Target = Arc<dyn ReverseGeoCodingGateway + Send + Sync>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
