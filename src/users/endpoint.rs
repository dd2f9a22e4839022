//! Base endpoint of the users collection and the request URLs derived from it.
//!
//! Identifiers are appended with [`url::PathSegmentsMut`], so each one lands
//! as exactly one percent-encoded segment: `a/b` becomes `a%2Fb` instead of
//! two segments, and `?`/`#` never leak into the query or fragment. Dot
//! segments are ruled out earlier by [`UserId`].

use super::{error::EndpointError, id::UserId};
use std::{fmt, str::FromStr};
use url::Url;

/// Path segment the server routes deletions under.
const DELETE_SEGMENT: &str = "delete";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Parse and validate the collection URL.
    ///
    /// Trailing slashes are dropped so `{base}/{id}` never contains `//`.
    /// Query and fragment are discarded; the collection is addressed by path only.
    ///
    /// # Errors
    /// Returns an error if `raw` is empty, not an absolute URL, not http(s), or has no host.
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(EndpointError::Empty);
        }

        let mut base = Url::parse(raw)?;

        match base.scheme() {
            "http" | "https" => {}
            other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
        }

        if base.host().is_none() {
            return Err(EndpointError::MissingHost);
        }

        if base.cannot_be_a_base() {
            return Err(EndpointError::CannotBeABase);
        }

        base.set_query(None);
        base.set_fragment(None);

        while base.path().len() > 1 && base.path().ends_with('/') {
            match base.path_segments_mut() {
                Ok(mut segments) => {
                    segments.pop_if_empty();
                }
                Err(()) => break,
            }
        }

        Ok(Self { base })
    }

    /// `{base}`
    #[must_use]
    pub fn collection(&self) -> Url {
        self.base.clone()
    }

    /// `{base}/{id}`
    #[must_use]
    pub fn member(&self, id: &UserId) -> Url {
        self.join(&[id.as_str()])
    }

    /// `{base}/delete/{id}`
    #[must_use]
    pub fn deletion(&self, id: &UserId) -> Url {
        self.join(&[DELETE_SEGMENT, id.as_str()])
    }

    /// The validated base URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.base
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // parse() rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_url().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::DEFAULT_BASE_ENDPOINT;
    use anyhow::Result;

    #[test]
    fn default_endpoint_urls() -> Result<()> {
        let endpoint = Endpoint::parse(DEFAULT_BASE_ENDPOINT)?;
        let id = UserId::new("42")?;
        assert_eq!(
            endpoint.collection().as_str(),
            "http://localhost:8080/users"
        );
        assert_eq!(
            endpoint.member(&id).as_str(),
            "http://localhost:8080/users/42"
        );
        assert_eq!(
            endpoint.deletion(&id).as_str(),
            "http://localhost:8080/users/delete/42"
        );
        Ok(())
    }

    #[test]
    fn numeric_identifiers() -> Result<()> {
        let endpoint = Endpoint::parse(DEFAULT_BASE_ENDPOINT)?;
        assert_eq!(endpoint.member(&UserId::from(7_u64)).path(), "/users/7");
        assert_eq!(
            endpoint.deletion(&UserId::from(-1_i32)).path(),
            "/users/delete/-1"
        );
        Ok(())
    }

    #[test]
    fn trailing_slash_is_dropped() -> Result<()> {
        let endpoint = Endpoint::parse("http://localhost:8080/users/")?;
        assert_eq!(endpoint.to_string(), "http://localhost:8080/users");
        assert_eq!(endpoint.member(&UserId::from(42_u64)).path(), "/users/42");
        Ok(())
    }

    #[test]
    fn repeated_trailing_slashes_are_dropped() -> Result<()> {
        let endpoint = Endpoint::parse("http://localhost:8080/users///")?;
        assert_eq!(endpoint.to_string(), "http://localhost:8080/users");
        assert_eq!(endpoint.as_url().path(), "/users");

        let endpoint = Endpoint::parse("http://localhost:8080//")?;
        assert_eq!(endpoint.to_string(), "http://localhost:8080/");
        Ok(())
    }

    #[test]
    fn root_base_has_no_empty_segment() -> Result<()> {
        let endpoint = Endpoint::parse("https://api.example.com")?;
        let id = UserId::from(42_u64);
        assert_eq!(endpoint.collection().as_str(), "https://api.example.com/");
        assert_eq!(endpoint.member(&id).as_str(), "https://api.example.com/42");
        assert_eq!(
            endpoint.deletion(&id).as_str(),
            "https://api.example.com/delete/42"
        );
        Ok(())
    }

    #[test]
    fn query_and_fragment_are_discarded() -> Result<()> {
        let endpoint = Endpoint::parse("http://localhost:8080/users?page=2#top")?;
        assert_eq!(endpoint.collection().as_str(), "http://localhost:8080/users");
        Ok(())
    }

    #[test]
    fn reserved_characters_stay_in_one_segment() -> Result<()> {
        let endpoint = Endpoint::parse(DEFAULT_BASE_ENDPOINT)?;

        let url = endpoint.member(&UserId::new("a/b?c#d")?);
        assert_eq!(url.path(), "/users/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);

        let url = endpoint.deletion(&UserId::new("john doe")?);
        assert_eq!(url.path(), "/users/delete/john%20doe");
        Ok(())
    }

    #[test]
    fn dotted_identifiers_keep_their_segment() -> Result<()> {
        let endpoint = Endpoint::parse(DEFAULT_BASE_ENDPOINT)?;

        assert_eq!(endpoint.member(&UserId::new("...")?).path(), "/users/...");
        assert_eq!(
            endpoint.deletion(&UserId::new(".hidden")?).path(),
            "/users/delete/.hidden"
        );
        assert_eq!(endpoint.member(&UserId::new("a..b")?).path(), "/users/a..b");
        Ok(())
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Endpoint::parse("  "), Err(EndpointError::Empty)));
    }

    #[test]
    fn rejects_relative() {
        assert!(matches!(
            Endpoint::parse("/users"),
            Err(EndpointError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unsupported_scheme() {
        let err = Endpoint::parse("ftp://example.com/users").err();
        assert!(matches!(err, Some(EndpointError::UnsupportedScheme(s)) if s == "ftp"));
    }

    #[test]
    fn from_str_matches_parse() -> Result<()> {
        let endpoint: Endpoint = "http://localhost:8080/users".parse()?;
        assert_eq!(endpoint, Endpoint::parse(DEFAULT_BASE_ENDPOINT)?);
        Ok(())
    }
}
