//! In-process access-control API for end-to-end CLI tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use clap::Parser;
use idpctl_client::cli::Cli;
use idpctl_client::{AclClient, ClientConfig, InMemoryIdentityProviders};
use idpctl_core::acl::{ApiError, IdentityProvider, IdentityProviderApi};
use tokio::net::TcpListener;

pub const ROOT_TOKEN: &str = "root";

pub const HOST: &str = "https://foo.internal:8443";
pub const NEW_HOST: &str = "https://foo-new.internal:8443";

pub const CA_CERT: &str = "-----BEGIN CERTIFICATE-----\nMIICA-ONE\n-----END CERTIFICATE-----\n";
pub const CA_CERT_2: &str = "-----BEGIN CERTIFICATE-----\nMIICA-TWO\n-----END CERTIFICATE-----\n";

pub const JWT_A: &str = "eyJhbGciOiJSUzI1NiIsImtpZCI6IiJ9.eyJzdWIiOiJzeXN0ZW06c2VydmljZWFjY291bnQ6ZGVmYXVsdDpkZW1vIn0.c2lnLWE";
pub const JWT_B: &str = "eyJhbGciOiJSUzI1NiIsImtpZCI6IiJ9.eyJzdWIiOiJzeXN0ZW06c2VydmljZWFjY291bnQ6ZGVmYXVsdDpyZXZpZXcifQ.c2lnLWI";

/// Captured result of one CLI invocation.
#[derive(Debug)]
pub struct Output {
    pub code: u8,
    pub stdout: String,
    pub stderr: String,
}

/// Access-control API served over HTTP from an in-memory store.
pub struct MockAclServer {
    addr: SocketAddr,
    api: InMemoryIdentityProviders,
    next_id: AtomicUsize,
}

impl MockAclServer {
    /// Start the server on an ephemeral local port.
    pub async fn start() -> Self {
        let api = InMemoryIdentityProviders::new();

        let app = Router::new()
            .route("/v1/acl/idp", put(create_idp))
            .route("/v1/acl/idp/{name}", get(read_idp).put(update_idp))
            .route("/v1/acl/idps", get(list_idps))
            .with_state(api.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            api,
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn http_addr(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Backing store, for asserting on what was written.
    pub fn store(&self) -> &InMemoryIdentityProviders {
        &self.api
    }

    /// Run `idpctl` with connection flags for this server and the root token.
    pub async fn run(&self, args: &[&str]) -> Output {
        let mut argv = vec![
            "idpctl".to_string(),
            format!("--http-addr={}", self.http_addr()),
            format!("--token={ROOT_TOKEN}"),
        ];
        argv.extend(args.iter().map(|a| a.to_string()));
        self.run_raw(argv).await
    }

    /// Run `idpctl` with exactly the given arguments.
    pub async fn run_raw(&self, argv: Vec<String>) -> Output {
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = idpctl_client::run(cli, &mut out, &mut err).await;
        Output {
            code,
            stdout: String::from_utf8(out).unwrap(),
            stderr: String::from_utf8(err).unwrap(),
        }
    }

    /// HTTP client authenticated with the root token.
    pub fn client(&self) -> AclClient {
        let config = ClientConfig::new(&self.http_addr())
            .unwrap()
            .with_token(ROOT_TOKEN);
        AclClient::new(&config).unwrap()
    }

    /// Create a Kubernetes identity provider with a fresh name through the HTTP API.
    pub async fn create_idp(&self) -> String {
        let name = format!("k8s-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let idp = IdentityProvider::kubernetes(&name, HOST, CA_CERT, JWT_A)
            .with_description("test idp");
        self.client().create_idp(&idp).await.unwrap();
        name
    }

    /// Read an identity provider back through the HTTP API.
    pub async fn read_idp(&self, name: &str) -> IdentityProvider {
        self.client().read_idp(name).await.unwrap().unwrap()
    }
}

fn error_response(err: ApiError) -> Response {
    let status = match &err {
        ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        ApiError::AlreadyExists { .. } => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string()).into_response()
}

fn authorize(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {ROOT_TOKEN}");
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err((StatusCode::FORBIDDEN, "ACL not found").into_response()),
    }
}

async fn create_idp(
    State(api): State<InMemoryIdentityProviders>,
    headers: HeaderMap,
    Json(idp): Json<IdentityProvider>,
) -> Result<Json<IdentityProvider>, Response> {
    authorize(&headers)?;
    api.create_identity_provider(&idp)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn read_idp(
    State(api): State<InMemoryIdentityProviders>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<Json<IdentityProvider>, Response> {
    authorize(&headers)?;
    match api.read_identity_provider(&name).await {
        Ok(Some(idp)) => Ok(Json(idp)),
        Ok(None) => Err(StatusCode::NOT_FOUND.into_response()),
        Err(e) => Err(error_response(e)),
    }
}

async fn update_idp(
    State(api): State<InMemoryIdentityProviders>,
    headers: HeaderMap,
    Path(name): Path<String>,
    Json(idp): Json<IdentityProvider>,
) -> Result<Json<IdentityProvider>, Response> {
    authorize(&headers)?;
    if idp.name != name {
        return Err((StatusCode::BAD_REQUEST, "name in body does not match path").into_response());
    }
    api.update_identity_provider(&idp)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn list_idps(
    State(api): State<InMemoryIdentityProviders>,
    headers: HeaderMap,
) -> Result<Json<Vec<IdentityProvider>>, Response> {
    authorize(&headers)?;
    api.list_identity_providers()
        .await
        .map(Json)
        .map_err(error_response)
}
