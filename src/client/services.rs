//! HTTP services used by the console client.
//!
//! Each service wraps the shared [`ApiClient`]; authenticated calls take an
//! explicit [`Session`] instead of relying on any global "current user"
//! state, so the bearer token always travels with the call.

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::account::{Account, ShareableUser};
use crate::gateway::types::ApiResponse;
use crate::transfer::{NewTransfer, Transfer, TransferDetail};
use crate::user_auth::AuthResponse;

/// Authenticated session obtained from login
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

/// Shared HTTP plumbing: base URL, bearer header, envelope unwrapping
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, session: Option<&Session>) -> Result<T> {
        let mut req = self.http.get(self.url(path));
        if let Some(session) = session {
            req = req.bearer_auth(&session.token);
        }
        let resp = req.send().await.context("Request failed")?;
        unwrap_envelope(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        session: Option<&Session>,
    ) -> Result<T> {
        let mut req = self.http.post(self.url(path)).json(body);
        if let Some(session) = session {
            req = req.bearer_auth(&session.token);
        }
        let resp = req.send().await.context("Request failed")?;
        unwrap_envelope(resp).await
    }
}

/// Pull the data out of the `{code, msg, data}` envelope, surfacing the
/// server's message on any non-zero code.
async fn unwrap_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let envelope: ApiResponse<T> = resp
        .json()
        .await
        .with_context(|| format!("Malformed response (HTTP {})", status))?;

    if envelope.code != 0 {
        bail!("{}", envelope.msg);
    }
    envelope
        .data
        .with_context(|| format!("Empty response body (HTTP {})", status))
}

/// Registration and login
pub struct AuthenticationService {
    api: ApiClient,
}

impl AuthenticationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<i64> {
        #[derive(Serialize)]
        struct Credentials<'a> {
            username: &'a str,
            password: &'a str,
        }
        self.api
            .post("/register", &Credentials { username, password }, None)
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        #[derive(Serialize)]
        struct Credentials<'a> {
            username: &'a str,
            password: &'a str,
        }
        let auth: AuthResponse = self
            .api
            .post("/login", &Credentials { username, password }, None)
            .await?;
        Ok(Session {
            token: auth.token,
            user_id: auth.user_id,
            username: auth.username,
        })
    }
}

/// Account and balance queries
pub struct AccountService {
    api: ApiClient,
}

impl AccountService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_account_by_user(&self, session: &Session, user_id: i64) -> Result<Account> {
        self.api
            .get(&format!("/users/{}/account", user_id), Some(session))
            .await
    }

    pub async fn get_balance(&self, session: &Session, account_id: i64) -> Result<Decimal> {
        self.api
            .get(&format!("/accounts/{}/balance", account_id), Some(session))
            .await
    }
}

/// Transfer creation, history and counterpart lookup
pub struct TransferService {
    api: ApiClient,
}

impl TransferService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn find_transfer_candidates(&self, session: &Session) -> Result<Vec<ShareableUser>> {
        self.api
            .get(
                &format!("/users/{}/potentialTransferUsers", session.user_id),
                Some(session),
            )
            .await
    }

    pub async fn create_transfer(&self, session: &Session, new: &NewTransfer) -> Result<Transfer> {
        self.api.post("/transfers", new, Some(session)).await
    }

    pub async fn get_transfer_detail(
        &self,
        session: &Session,
        transfer_id: i64,
    ) -> Result<TransferDetail> {
        self.api
            .get(&format!("/transfers/{}", transfer_id), Some(session))
            .await
    }

    pub async fn list_transfers(
        &self,
        session: &Session,
        account_id: i64,
        status_id: i16,
    ) -> Result<Vec<Transfer>> {
        self.api
            .get(
                &format!(
                    "/accounts/{}/transfers?transferStatusType={}",
                    account_id, status_id
                ),
                Some(session),
            )
            .await
    }

    pub async fn get_account_owner(
        &self,
        session: &Session,
        account_id: i64,
    ) -> Result<ShareableUser> {
        self.api
            .get(&format!("/accounts/{}/user", account_id), Some(session))
            .await
    }
}

// Used by the console binary to share one ApiClient between services.
#[derive(Clone)]
pub struct Services {
    pub auth: std::sync::Arc<AuthenticationService>,
    pub accounts: std::sync::Arc<AccountService>,
    pub transfers: std::sync::Arc<TransferService>,
}

impl Services {
    pub fn new(base_url: &str) -> Self {
        let api = ApiClient::new(base_url);
        Self {
            auth: std::sync::Arc::new(AuthenticationService::new(api.clone())),
            accounts: std::sync::Arc::new(AccountService::new(api.clone())),
            transfers: std::sync::Arc::new(TransferService::new(api)),
        }
    }
}
