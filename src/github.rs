//! # GitHub REST Client
//!
//! Blocking [`RemoteClient`] over the GitHub REST API. Requires the `github`
//! feature.
//!
//! ## Endpoints
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | `list_by_owner` | `GET /users/{owner}/repos?per_page=100&page=N` |
//! | `get_contents` | `GET /repos/{owner}/{repo}/contents/{path}` |
//!
//! ## Environment
//!
//! [`GitHubClient::from_env`] reads `GITHUB_TOKEN` (bearer token) and
//! `GITHUB_API_URL` (API base, default `https://api.github.com`).

use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{
    Contents, Page, RemoteClient, RemoteEntry, RemoteError, RemoteFile, Repository, RequestContext,
};

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PER_PAGE: &str = "100";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("githubfs/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: HttpClient,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    /// Anonymous client against the public API.
    ///
    /// # Errors
    ///
    /// [`RemoteError::Transport`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, RemoteError> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: Url::parse(DEFAULT_API_URL).map_err(|e| RemoteError::Transport(e.to_string()))?,
            token: None,
        })
    }

    /// Client configured from `GITHUB_TOKEN` and `GITHUB_API_URL`.
    pub fn from_env() -> Result<Self, RemoteError> {
        let mut client = Self::new()?;

        if let Ok(url) = std::env::var("GITHUB_API_URL") {
            if !url.is_empty() {
                client = client.with_base_url(&url)?;
            }
        }

        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                client = client.with_auth_token(token);
            }
        }

        Ok(client)
    }

    /// Authenticates every request with a bearer token.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Points the client at another API base (e.g. GitHub Enterprise).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, RemoteError> {
        self.base_url = Url::parse(base_url).map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(self)
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, RemoteError> {
        endpoint(&self.base_url, segments)
    }

    fn get(&self, ctx: &RequestContext, url: Url) -> Result<Response, RemoteError> {
        if ctx.is_expired() {
            return Err(RemoteError::DeadlineExceeded);
        }

        let mut request: RequestBuilder = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(remaining) = ctx.remaining() {
            request = request.timeout(remaining);
        }

        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                RemoteError::DeadlineExceeded
            } else {
                RemoteError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(RemoteError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

impl RemoteClient for GitHubClient {
    fn list_by_owner(
        &self,
        ctx: &RequestContext,
        owner: &str,
        page: u32,
    ) -> Result<Page<Repository>, RemoteError> {
        let mut url = self.endpoint(["users", owner, "repos"])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("per_page", PER_PAGE);
            if page > 0 {
                query.append_pair("page", &page.to_string());
            }
        }

        debug!(%url, "GET");
        let response = self.get(ctx, url)?;
        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(next_page)
            .unwrap_or(0);

        Ok(Page {
            items: decode(response)?,
            next_page,
        })
    }

    fn get_contents(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Contents, RemoteError> {
        let segments = ["repos", owner, repo, "contents"]
            .into_iter()
            .chain(path.split('/').filter(|s| !s.is_empty()));
        let url = self.endpoint(segments)?;

        debug!(%url, "GET");
        let body: ContentsBody = decode(self.get(ctx, url)?)?;

        Ok(match body {
            ContentsBody::Dir(entries) => Contents::dir(entries),
            ContentsBody::File(file) => Contents::file(file),
        })
    }
}

/// The contents endpoint answers with an array for directories and an
/// object for files.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsBody {
    Dir(Vec<RemoteEntry>),
    File(RemoteFile),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let text = response
        .text()
        .map_err(|e| RemoteError::Transport(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| RemoteError::Decode(e.to_string()))
}

/// Builds `base/segment/...`, percent-encoding each segment.
fn endpoint<'a>(
    base: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, RemoteError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| RemoteError::Transport(format!("cannot be a base URL: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Extracts the `page` of the `rel="next"` link, or `0` when there is none.
fn next_page(link: &str) -> u32 {
    link.split(',')
        .filter_map(|part| {
            let (target, params) = part.split_once(';')?;
            params
                .split(';')
                .any(|param| param.trim() == r#"rel="next""#)
                .then(|| target.trim().trim_start_matches('<').trim_end_matches('>'))
        })
        .find_map(|target| {
            let url = Url::parse(target).ok()?;
            url.query_pairs()
                .find(|(key, _)| key == "page")
                .and_then(|(_, value)| value.parse().ok())
        })
        .unwrap_or(0)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|error| error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_follows_rel_next() {
        let link = r#"<https://api.github.com/user/1/repos?per_page=100&page=2>; rel="next", <https://api.github.com/user/1/repos?per_page=100&page=5>; rel="last""#;
        assert_eq!(next_page(link), 2);
    }

    #[test]
    fn next_page_is_zero_on_last_page() {
        let link = r#"<https://api.github.com/user/1/repos?page=4>; rel="prev", <https://api.github.com/user/1/repos?page=1>; rel="first""#;
        assert_eq!(next_page(link), 0);
        assert_eq!(next_page(""), 0);
    }

    #[test]
    fn endpoint_encodes_segments() {
        let base = Url::parse(DEFAULT_API_URL).unwrap();
        let url = endpoint(&base, ["repos", "acct", "proj", "contents", "my file.md"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/acct/proj/contents/my%20file.md"
        );
    }

    #[test]
    fn endpoint_respects_base_path() {
        let base = Url::parse("https://ghe.example.com/api/v3").unwrap();
        let url = endpoint(&base, ["users", "acct", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/users/acct/repos");
    }

    #[test]
    fn contents_body_decodes_directory() {
        let json = r#"[{"type":"file","name":"README.md","size":12},{"type":"dir","name":"src","size":0}]"#;
        match serde_json::from_str::<ContentsBody>(json).unwrap() {
            ContentsBody::Dir(entries) => {
                assert_eq!(entries.len(), 2);
                assert!(entries[1].is_dir());
            }
            ContentsBody::File(_) => panic!("expected a directory"),
        }
    }

    #[test]
    fn contents_body_decodes_file() {
        let json = r#"{"type":"file","name":"go.mod","size":3,"encoding":"base64","content":"YWJj"}"#;
        match serde_json::from_str::<ContentsBody>(json).unwrap() {
            ContentsBody::File(file) => assert_eq!(file.name, "go.mod"),
            ContentsBody::Dir(_) => panic!("expected a file"),
        }
    }

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(error_message(r#"{"message":"Not Found"}"#), "Not Found");
        assert_eq!(error_message(" bad gateway \n"), "bad gateway");
    }

    #[test]
    fn expired_context_short_circuits() {
        let client = GitHubClient::new().unwrap();
        let ctx = RequestContext::background().with_timeout(std::time::Duration::ZERO);
        let err = client.get_contents(&ctx, "acct", "proj", "").unwrap_err();
        assert!(matches!(err, RemoteError::DeadlineExceeded));
    }
}
