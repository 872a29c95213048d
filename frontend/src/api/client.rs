use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, TimeZone, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::cell::RefCell;

use super::{
    error::StoreError,
    session::{AuthEvent, Session, SessionEvents, SessionListener, SessionUser, Subscription},
    store::{Collection, ContentStore, Filter, Query},
};
use crate::utils::storage as storage_utils;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const NO_ROWS_CODE: &str = "PGRST116";
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Client for the hosted backend: GoTrue-style auth under `/auth/v1` and a
/// PostgREST data API under `/rest/v1`.
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
    session: RefCell<Option<Session>>,
    events: SessionEvents,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            session: RefCell::new(storage_utils::load_session()),
            events: SessionEvents::new(),
        }
    }

    fn rest_url(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection.table())
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn with_bearer(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", token))
    }

    /// Attaches the current access token, refreshing an expired session
    /// first. Falls back to the anon key once the session is gone.
    async fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = match self.current_session().await {
            Some(session) => session.access_token,
            None => self.anon_key.clone(),
        };
        self.with_bearer(builder, &token)
    }

    /// The stored session, refreshed when expired. A failed refresh clears
    /// it and emits `SignedOut`.
    async fn current_session(&self) -> Option<Session> {
        let current = self.session.borrow().clone()?;
        if !current.is_expired() {
            return Some(current);
        }
        let Some(refresh_token) = current.refresh_token.clone() else {
            self.replace_session(None, AuthEvent::SignedOut);
            return None;
        };
        match self.refresh(&refresh_token).await {
            Ok(session) => {
                log::info!("Session refreshed for {}", session.user.id);
                self.replace_session(Some(session.clone()), AuthEvent::TokenRefreshed);
                Some(session)
            }
            Err(err) => {
                log::warn!("Session refresh failed: {}", err);
                self.replace_session(None, AuthEvent::SignedOut);
                None
            }
        }
    }

    fn replace_session(&self, session: Option<Session>, event: AuthEvent) {
        match &session {
            Some(current) => storage_utils::save_session(current),
            None => storage_utils::clear_session(),
        }
        *self.session.borrow_mut() = session.clone();
        self.events.emit(event, session.as_ref());
    }

    async fn request_token(&self, grant_type: &str, body: Value) -> Result<Session, StoreError> {
        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", grant_type)])
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Auth(auth_error_message(response).await));
        }
        let token: TokenResponse = response.json().await?;
        token.into_session(Utc::now())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, StoreError> {
        self.request_token(
            "refresh_token",
            json!({ "refresh_token": refresh_token }),
        )
        .await
    }
}

#[async_trait(?Send)]
impl ContentStore for SupabaseClient {
    async fn get_session(&self) -> Option<Session> {
        self.current_session().await
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        self.events.subscribe(listener)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, StoreError> {
        let session = self
            .request_token("password", json!({ "email": email, "password": password }))
            .await?;
        self.replace_session(Some(session.clone()), AuthEvent::SignedIn);
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        let token = self
            .session
            .borrow()
            .as_ref()
            .map(|session| session.access_token.clone());
        let result = match token {
            Some(token) => match self
                .with_bearer(self.http.post(self.auth_url("logout")), &token)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => Ok(()),
                Ok(response) => Err(StoreError::Auth(auth_error_message(response).await)),
                Err(err) => Err(err.into()),
            },
            None => Ok(()),
        };
        // The local session is dropped whatever the provider answered.
        self.replace_session(None, AuthEvent::SignedOut);
        result
    }

    async fn select(&self, query: &Query) -> Result<Vec<Value>, StoreError> {
        let response = self
            .authorized(self.http.get(self.rest_url(query.collection)))
            .await
            .query(&query_params(query))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn select_single(&self, query: &Query) -> Result<Value, StoreError> {
        let response = self
            .authorized(self.http.get(self.rest_url(query.collection)))
            .await
            .query(&query_params(query))
            .header("Accept", SINGLE_OBJECT)
            .send()
            .await?;
        match check(response).await {
            Ok(response) => Ok(response.json().await?),
            Err(StoreError::Rejected { status, code, .. })
                if status == StatusCode::NOT_ACCEPTABLE.as_u16()
                    || code.as_deref() == Some(NO_ROWS_CODE) =>
            {
                Err(StoreError::NotFound)
            }
            Err(err) => Err(err),
        }
    }

    async fn count(&self, query: &Query) -> Result<usize, StoreError> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(query.filters.iter().map(filter_param));
        let response = self
            .authorized(self.http.head(self.rest_url(query.collection)))
            .await
            .query(&params)
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = check(response).await?;
        response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range)
            .ok_or_else(|| StoreError::Decode("missing Content-Range count".into()))
    }

    async fn insert(&self, collection: Collection, records: Vec<Value>) -> Result<(), StoreError> {
        let response = self
            .authorized(self.http.post(self.rest_url(collection)))
            .await
            .header("Prefer", "return=minimal")
            .json(&records)
            .send()
            .await?;
        check(response).await.map(|_| ())
    }

    async fn update(
        &self,
        collection: Collection,
        patch: Value,
        filter: Filter,
    ) -> Result<(), StoreError> {
        let response = self
            .authorized(self.http.patch(self.rest_url(collection)))
            .await
            .query(&[filter_param(&filter)])
            .header("Prefer", "return=minimal")
            .json(&patch)
            .send()
            .await?;
        check(response).await.map(|_| ())
    }

    async fn delete(&self, collection: Collection, filter: Filter) -> Result<(), StoreError> {
        let response = self
            .authorized(self.http.delete(self.rest_url(collection)))
            .await
            .query(&[filter_param(&filter)])
            .send()
            .await?;
        check(response).await.map(|_| ())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: SessionUser,
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Result<Session, StoreError> {
        let expires_at = match self
            .expires_at
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .or_else(|| jwt_expiry(&self.access_token))
        {
            Some(expires_at) => expires_at,
            None => {
                let lifetime = self.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
                Duration::try_seconds(lifetime)
                    .and_then(|lifetime| now.checked_add_signed(lifetime))
                    .ok_or_else(|| {
                        StoreError::Decode(format!("token lifetime out of range: {}", lifetime))
                    })?
            }
        };
        Ok(Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        })
    }
}

/// Reads the `exp` claim from a JWT without verifying it.
fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    #[derive(Deserialize)]
    struct Claims {
        exp: i64,
    }

    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Utc.timestamp_opt(claims.exp, 0).single()
}

#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

async fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body: PostgrestError = response.json().await.unwrap_or_default();
    let message = body
        .message
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    Err(StoreError::rejected(status.as_u16(), body.code, message))
}

async fn auth_error_message(response: Response) -> String {
    let status = response.status();
    let body: AuthErrorBody = response.json().await.unwrap_or_default();
    body.error_description
        .or(body.msg)
        .or(body.message)
        .or(body.error)
        .unwrap_or_else(|| format!("Authentication failed with status {}", status.as_u16()))
}

fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    params.extend(query.filters.iter().map(filter_param));
    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{}", order.field, direction)));
    }
    params
}

fn filter_param(filter: &Filter) -> (String, String) {
    match filter {
        Filter::Eq { field, value } => (field.clone(), format!("eq.{}", value)),
        Filter::In { field, values } => {
            let quoted: Vec<String> = values.iter().map(|value| quote_value(value)).collect();
            (field.clone(), format!("in.({})", quoted.join(",")))
        }
    }
}

fn quote_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// `Content-Range: 0-24/25` or `*/0` → total row count.
fn parse_content_range(value: &str) -> Option<usize> {
    value.rsplit('/').next()?.trim().parse().ok()
}
