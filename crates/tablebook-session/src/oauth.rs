//! Identity provider hand-off
//!
//! Sign-in is an authorization-code flow run by the backend. This side only
//! builds the consent URL and reads the redirect that comes back, which
//! carries either `?error=<message>` or `?user=<profile json>`.

use url::Url;

use crate::error::AuthCallbackError;
use crate::profile::UserProfile;

const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/auth";

/// Build the provider consent URL the user is sent to on "Sign in"
pub fn sign_in_url(client_id: &str, redirect_uri: &str) -> Result<String, url::ParseError> {
    let url = Url::parse_with_params(
        AUTHORIZATION_ENDPOINT,
        &[
            ("response_type", "code"),
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("scope", "openid profile email"),
            ("access_type", "offline"),
        ],
    )?;

    Ok(url.into())
}

/// Extract the signed-in profile from the full callback URL
pub fn profile_from_callback_url(callback_url: &str) -> Result<UserProfile, AuthCallbackError> {
    let url = Url::parse(callback_url)?;
    profile_from_callback_query(url.query().unwrap_or_default())
}

/// Extract the signed-in profile from the callback query string.
///
/// Only the first occurrence of each parameter counts, and empty values
/// are treated as absent. A non-empty `error` takes precedence over `user`.
pub fn profile_from_callback_query(query: &str) -> Result<UserProfile, AuthCallbackError> {
    let query = query.trim_start_matches('?');

    let mut user = None;
    let mut error = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "user" if user.is_none() => user = Some(value.into_owned()),
            "error" if error.is_none() => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(message) = error.filter(|m| !m.is_empty()) {
        let message = unquote(&message);
        tracing::warn!(error = %message, "Identity provider returned an error");
        return Err(AuthCallbackError::Provider(message));
    }

    let raw = user
        .filter(|u| !u.is_empty())
        .ok_or(AuthCallbackError::MissingParameters)?;
    serde_json::from_str(&raw).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse user data from callback");
        AuthCallbackError::InvalidProfile(e)
    })
}

// The backend JSON-encodes the error message, so it may arrive quoted
fn unquote(message: &str) -> String {
    serde_json::from_str::<String>(message).unwrap_or_else(|_| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_url() {
        let url = sign_in_url("client-123", "http://localhost:8000/auth/google").unwrap();
        let parsed = Url::parse(&url).unwrap();

        assert_eq!(parsed.host_str(), Some("accounts.google.com"));
        assert_eq!(parsed.path(), "/o/oauth2/auth");

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(pairs.contains(&("client_id".into(), "client-123".into())));
        assert!(pairs.contains(&(
            "redirect_uri".into(),
            "http://localhost:8000/auth/google".into()
        )));
        assert!(pairs.contains(&("scope".into(), "openid profile email".into())));
        assert!(pairs.contains(&("access_type".into(), "offline".into())));
    }

    #[test]
    fn test_profile_from_callback() {
        let profile = UserProfile::new("USER - 1", "Ada Lovelace", "ada@example.com")
            .with_picture("https://example.com/a.png");
        let json = serde_json::to_string(&profile).unwrap();

        let mut url = Url::parse("http://localhost:3000/auth/callback").unwrap();
        url.query_pairs_mut().append_pair("user", &json);

        let parsed = profile_from_callback_url(url.as_str()).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_error_parameter_is_unquoted() {
        let err = profile_from_callback_query(
            "error=%22Token%20request%20failed%3A%20400%22",
        )
        .unwrap_err();

        match err {
            AuthCallbackError::Provider(message) => {
                assert_eq!(message, "Token request failed: 400")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_wins_over_user() {
        let err = profile_from_callback_query(
            "?user=%7B%22id%22%3A%221%22%7D&error=access_denied",
        )
        .unwrap_err();

        assert!(matches!(err, AuthCallbackError::Provider(m) if m == "access_denied"));
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let profile = UserProfile::new("USER - 1", "Ada", "ada@example.com");
        let mut url = Url::parse("http://localhost:3000/auth/callback?error=").unwrap();
        url.query_pairs_mut()
            .append_pair("user", &serde_json::to_string(&profile).unwrap());

        assert_eq!(profile_from_callback_url(url.as_str()).unwrap(), profile);
    }

    #[test]
    fn test_first_error_is_reported() {
        let err = profile_from_callback_query("error=first&error=second").unwrap_err();
        assert!(matches!(err, AuthCallbackError::Provider(m) if m == "first"));
        assert_eq!(
            profile_from_callback_query("error=first&error=second")
                .unwrap_err()
                .to_string(),
            "Authentication Error: first"
        );
    }

    #[test]
    fn test_first_user_is_used() {
        let err = profile_from_callback_query("user=not-json&user=%7B%7D").unwrap_err();
        assert!(matches!(err, AuthCallbackError::InvalidProfile(_)));

        let err = profile_from_callback_query("user=").unwrap_err();
        assert!(matches!(err, AuthCallbackError::MissingParameters));
    }

    #[test]
    fn test_unparsable_profile() {
        let err = profile_from_callback_query("user=not-json").unwrap_err();
        assert!(matches!(err, AuthCallbackError::InvalidProfile(_)));
    }

    #[test]
    fn test_missing_parameters() {
        let err = profile_from_callback_url("http://localhost:3000/auth/callback").unwrap_err();
        assert!(matches!(err, AuthCallbackError::MissingParameters));
    }

    #[test]
    fn test_invalid_url() {
        let err = profile_from_callback_url("not a url").unwrap_err();
        assert!(matches!(err, AuthCallbackError::InvalidUrl(_)));
    }
}
