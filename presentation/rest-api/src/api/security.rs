use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use once_cell::sync::OnceCell;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Stores the HS256 secret used by [`AuthBearer`]. Call once at startup.
pub fn init_jwt_secret(secret: String) -> anyhow::Result<()> {
    JWT_SECRET
        .set(secret)
        .map_err(|_| anyhow!("auth.secret_already_initialized"))
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    is_staff: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_staff: bool,
}

/// Validates signature and expiry of an HS256 token and extracts the caller.
pub fn decode_user(token: &str, secret: &str) -> Result<AuthenticatedUser, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    let sub = token_data.claims.sub.trim();
    if sub.is_empty() {
        return Err("auth.missing_subject".to_string());
    }

    Ok(AuthenticatedUser {
        user_id: UserId::new(sub),
        is_staff: token_data.claims.is_staff,
    })
}

/// Bearer token authentication (HS256 JWT)
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "auth_bearer_checker")]
pub struct AuthBearer(pub AuthenticatedUser);

async fn auth_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(secret) = JWT_SECRET.get() else {
        tracing::error!("JWT secret not initialized");
        return None;
    };

    match decode_user(&bearer.token, secret) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn should_decode_subject_and_staff_flag() {
        let token = sign(
            &TestClaims {
                sub: "user-42",
                exp: in_one_hour(),
                is_staff: true,
            },
            TEST_SECRET,
        );

        let user = decode_user(&token, TEST_SECRET).unwrap();

        assert_eq!(user.user_id, UserId::new("user-42"));
        assert!(user.is_staff);
    }

    #[test]
    fn should_default_staff_flag_to_false() {
        #[derive(serde::Serialize)]
        struct Minimal<'a> {
            sub: &'a str,
            exp: u64,
        }
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &Minimal {
                sub: "user-1",
                exp: in_one_hour(),
            },
            &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let user = decode_user(&token, TEST_SECRET).unwrap();

        assert!(!user.is_staff);
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let token = sign(
            &TestClaims {
                sub: "user-1",
                exp: in_one_hour(),
                is_staff: false,
            },
            "another-secret",
        );

        let result = decode_user(&token, TEST_SECRET);

        assert!(result.unwrap_err().contains("auth.token_validation_failed"));
    }

    #[test]
    fn should_reject_expired_token() {
        let token = sign(
            &TestClaims {
                sub: "user-1",
                exp: (chrono::Utc::now().timestamp() - 3600) as u64,
                is_staff: false,
            },
            TEST_SECRET,
        );

        assert!(decode_user(&token, TEST_SECRET).is_err());
    }

    #[test]
    fn should_reject_blank_subject() {
        let token = sign(
            &TestClaims {
                sub: "  ",
                exp: in_one_hour(),
                is_staff: false,
            },
            TEST_SECRET,
        );

        assert_eq!(
            decode_user(&token, TEST_SECRET).unwrap_err(),
            "auth.missing_subject"
        );
    }

    #[test]
    fn should_reject_malformed_token() {
        assert!(decode_user("not-a-jwt", TEST_SECRET).is_err());
    }
}
