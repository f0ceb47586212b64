//! In-memory provider and links API doubles shared by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::LinksApi;
use crate::error::{ApiError, AuthError};
use crate::model::{Credentials, Link, NewLink, Session};
use crate::provider::AuthProvider;

pub fn session(token: &str) -> Session {
    Session {
        access_token: token.to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: Some(3600),
        expires_at: None,
        refresh_token: None,
        user: None,
    }
}

pub fn link(id: &str, title: &str, url: &str) -> Link {
    Link { id: id.to_owned(), title: title.to_owned(), url: url.to_owned() }
}

// =============================================================================
// MockProvider
// =============================================================================

/// Accepts a single password; every call is recorded.
pub struct MockProvider {
    pub password: String,
    pub session: Mutex<Option<Session>>,
    pub confirm_email: bool,
    pub fail_get: bool,
    pub fail_sign_out: bool,
    pub calls: Mutex<Vec<&'static str>>,
}

impl MockProvider {
    pub fn new(password: &str) -> Self {
        Self {
            password: password.to_owned(),
            session: Mutex::new(None),
            confirm_email: true,
            fail_get: false,
            fail_sign_out: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn signed_in(token: &str) -> Self {
        let provider = Self::new("secret");
        *provider.session.lock().unwrap() = Some(session(token));
        provider
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if credentials.password() == self.password {
            Ok(session("issued"))
        } else {
            Err(AuthError::Rejected { status: 400, message: "Invalid login credentials".into() })
        }
    }
}

#[async_trait(?Send)]
impl AuthProvider for MockProvider {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        self.record("get_session");
        if self.fail_get {
            return Err(AuthError::Request("offline".into()));
        }
        Ok(self.session.lock().unwrap().clone())
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.record("sign_in");
        let session = self.check(credentials)?;
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<Session>, AuthError> {
        self.record("sign_up");
        if credentials.email() == "taken@example.com" {
            return Err(AuthError::Rejected { status: 422, message: "User already registered".into() });
        }
        if self.confirm_email {
            return Ok(None);
        }
        Ok(Some(session("issued")))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record("sign_out");
        *self.session.lock().unwrap() = None;
        if self.fail_sign_out {
            return Err(AuthError::Request("offline".into()));
        }
        Ok(())
    }
}

// =============================================================================
// MockLinksApi
// =============================================================================

/// Stores links in memory and records the call order.
pub struct MockLinksApi {
    pub links: Mutex<Vec<Link>>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub calls: Mutex<Vec<&'static str>>,
}

impl MockLinksApi {
    pub fn with_links(links: Vec<Link>) -> Self {
        Self { links: Mutex::new(links), fail_list: false, fail_create: false, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl LinksApi for MockLinksApi {
    async fn list_links(&self, _session: &Session) -> Result<Vec<Link>, ApiError> {
        self.calls.lock().unwrap().push("list");
        if self.fail_list {
            return Err(ApiError::Response { status: 500, body: "boom".into() });
        }
        Ok(self.links.lock().unwrap().clone())
    }

    async fn create_link(&self, _session: &Session, new_link: &NewLink) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push("create");
        if self.fail_create {
            return Err(ApiError::Request("connection reset".into()));
        }
        let mut links = self.links.lock().unwrap();
        let id = (links.len() + 1).to_string();
        links.push(Link { id, title: new_link.title().to_owned(), url: new_link.url().to_owned() });
        Ok(())
    }
}
