//! Test doubles and response builders shared by unit tests.

use crate::client::{ClientError, GitHubTransport, GraphQlRequest};
use crate::models::{Owner, Readme, Repository, RepositoryDetails};
use crate::repository::{GitHubRepository, RepositoryError};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// GraphQL node for a repository search result.
pub(crate) fn repository_node(owner: &str, name: &str, stars: u32) -> Value {
    json!({
        "__typename": "Repository",
        "name": name,
        "owner": { "login": owner },
        "description": format!("{name} description"),
        "stargazerCount": stars,
        "forkCount": 1,
        "primaryLanguage": null,
        "latestRelease": null
    })
}

fn rate_limit_node() -> Value {
    json!({ "limit": 5000, "remaining": 4999, "resetAt": "2030-01-01T00:00:00Z" })
}

/// A full search response body with the given edges.
pub(crate) fn search_body(edges: Vec<Value>) -> Value {
    json!({
        "data": {
            "search": { "repositoryCount": edges.len(), "edges": edges },
            "rateLimit": rate_limit_node()
        }
    })
}

/// A full details response body. `readme` fills the first README alias.
pub(crate) fn details_body(owner: &str, name: &str, readme: Option<&str>) -> Value {
    let readme_upper = match readme {
        Some(text) => json!({ "text": text }),
        None => Value::Null,
    };

    json!({
        "data": {
            "repository": {
                "id": "R_kgDOExample",
                "name": name,
                "nameWithOwner": format!("{owner}/{name}"),
                "description": "An example repository",
                "url": format!("https://github.com/{owner}/{name}"),
                "homepageUrl": "",
                "stargazerCount": 42,
                "forkCount": 7,
                "isPrivate": false,
                "owner": {
                    "login": owner,
                    "avatarUrl": format!("https://avatars.githubusercontent.com/{owner}"),
                    "url": format!("https://github.com/{owner}")
                },
                "primaryLanguage": { "name": "Rust", "color": "#dea584" },
                "languages": { "nodes": [
                    { "name": "Rust", "color": "#dea584" },
                    null,
                    { "name": "Shell", "color": null }
                ] },
                "issues": {
                    "totalCount": 12,
                    "nodes": [
                        {
                            "number": 12,
                            "title": "Crash on startup",
                            "url": format!("https://github.com/{owner}/{name}/issues/12"),
                            "state": "OPEN",
                            "createdAt": "2024-05-01T10:00:00Z",
                            "author": { "login": "reporter", "avatarUrl": "https://avatars.githubusercontent.com/reporter" }
                        },
                        null
                    ]
                },
                "pullRequests": {
                    "totalCount": 3,
                    "nodes": [
                        {
                            "number": 3,
                            "title": "Fix crash",
                            "url": format!("https://github.com/{owner}/{name}/pull/3"),
                            "state": "MERGED",
                            "createdAt": "2024-05-02T10:00:00Z",
                            "author": null
                        }
                    ]
                },
                "latestRelease": null,
                "releases": { "nodes": [
                    {
                        "name": "v1.0.0",
                        "tagName": "v1.0.0",
                        "url": format!("https://github.com/{owner}/{name}/releases/tag/v1.0.0"),
                        "isLatest": true,
                        "description": "First release",
                        "publishedAt": "2024-04-01T00:00:00Z",
                        "updatedAt": "2024-04-02T00:00:00Z"
                    },
                    null
                ] },
                "readmeUpper": readme_upper,
                "readmeLower": null,
                "readmeTitle": null,
                "readmePlain": null,
                "readmeDocs": null
            },
            "rateLimit": rate_limit_node()
        }
    })
}

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<Value, ClientError>>,
    readmes: VecDeque<Option<String>>,
    requests: Vec<GraphQlRequest>,
}

/// A [`GitHubTransport`] replaying scripted responses in order.
///
/// Clones share the same script.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a GraphQL response body.
    pub(crate) fn respond(self, body: Value) -> Self {
        self.script.lock().unwrap().responses.push_back(Ok(body));
        self
    }

    /// Queues a transport failure.
    pub(crate) fn fail(self, error: ClientError) -> Self {
        self.script.lock().unwrap().responses.push_back(Err(error));
        self
    }

    /// Queues a README lookup result.
    pub(crate) fn readme(self, text: Option<&str>) -> Self {
        self.script
            .lock()
            .unwrap()
            .readmes
            .push_back(text.map(str::to_string));
        self
    }

    /// Returns the GraphQL requests executed so far.
    pub(crate) fn requests(&self) -> Vec<GraphQlRequest> {
        self.script.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl GitHubTransport for ScriptedTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ClientError> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(request.clone());
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".to_string())))
    }

    async fn fetch_readme(&self, _owner: &str, _name: &str) -> Result<Option<String>, ClientError> {
        let mut script = self.script.lock().unwrap();
        Ok(script.readmes.pop_front().flatten())
    }
}

/// One scripted reply of a [`StubRepository`] call.
pub(crate) enum Reply<T> {
    /// Emit the result after the delay.
    Emit(Duration, Result<T, RepositoryError>),
    /// End the stream without emitting anything.
    Silent,
}

impl<T> Reply<T> {
    pub(crate) fn ok(value: T) -> Self {
        Self::Emit(Duration::ZERO, Ok(value))
    }

    pub(crate) fn err(error: RepositoryError) -> Self {
        Self::Emit(Duration::ZERO, Err(error))
    }

    pub(crate) fn delayed(delay: Duration, value: T) -> Self {
        Self::Emit(delay, Ok(value))
    }
}

fn reply_stream<T: Send + 'static>(
    reply: Option<Reply<T>>,
) -> BoxStream<'static, Result<T, RepositoryError>> {
    match reply {
        Some(Reply::Emit(delay, result)) => stream::once(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        })
        .boxed(),
        Some(Reply::Silent) | None => stream::empty().boxed(),
    }
}

/// A [`GitHubRepository`] replaying scripted replies and recording calls.
#[derive(Default)]
pub(crate) struct StubRepository {
    searches: Mutex<VecDeque<Reply<Vec<Repository>>>>,
    details: Mutex<VecDeque<Reply<RepositoryDetails>>>,
    readmes: Mutex<VecDeque<Reply<String>>>,
    calls: Mutex<Vec<String>>,
}

impl StubRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on_search(self, reply: Reply<Vec<Repository>>) -> Self {
        self.searches.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn on_details(self, reply: Reply<RepositoryDetails>) -> Self {
        self.details.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn on_readme(self, reply: Reply<String>) -> Self {
        self.readmes.lock().unwrap().push_back(reply);
        self
    }

    /// Calls received so far, e.g. `search:kotlin` or `details:octo/cat`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitHubRepository for StubRepository {
    fn search_repositories(
        &self,
        query: &str,
    ) -> BoxStream<'static, Result<Vec<Repository>, RepositoryError>> {
        self.calls.lock().unwrap().push(format!("search:{query}"));
        reply_stream(self.searches.lock().unwrap().pop_front())
    }

    fn get_repository_details(
        &self,
        owner: &str,
        name: &str,
    ) -> BoxStream<'static, Result<RepositoryDetails, RepositoryError>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("details:{owner}/{name}"));
        reply_stream(self.details.lock().unwrap().pop_front())
    }

    fn get_repository_readme(
        &self,
        owner: &str,
        name: &str,
    ) -> BoxStream<'static, Result<String, RepositoryError>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("readme:{owner}/{name}"));
        reply_stream(self.readmes.lock().unwrap().pop_front())
    }
}

/// A search result repository.
pub(crate) fn sample_repository(owner: &str, name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        owner: owner.to_string(),
        description: Some(format!("{name} description")),
        stars: 10,
        forks: 2,
        language: Some("Kotlin".to_string()),
        latest_release: None,
    }
}

/// Repository details with the given README text.
pub(crate) fn sample_details(owner: &str, name: &str, readme: &str) -> RepositoryDetails {
    RepositoryDetails {
        id: "R_kgDOExample".to_string(),
        name: name.to_string(),
        name_with_owner: format!("{owner}/{name}"),
        description: None,
        url: format!("https://github.com/{owner}/{name}"),
        homepage_url: None,
        stars: 1,
        forks: 0,
        is_private: false,
        owner: Owner {
            login: owner.to_string(),
            avatar_url: format!("https://avatars.githubusercontent.com/{owner}"),
            url: format!("https://github.com/{owner}"),
        },
        primary_language: None,
        languages: Vec::new(),
        issues: Vec::new(),
        pull_requests: Vec::new(),
        total_issues: 0,
        total_pull_requests: 0,
        readme: Readme {
            text: readme.to_string(),
        },
        latest_release: None,
        releases: Vec::new(),
    }
}
