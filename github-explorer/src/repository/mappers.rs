//! Maps wire responses into domain models.
//!
//! List mapping is tolerant: null or malformed entries are skipped and the
//! remaining entries keep their source order.

use super::wire::{
    AuthorNode, CountedConnection, IssueNode, LanguageNode, ReleaseNode, RepositoryDetailsNode,
    RepositoryNode, SearchConnection, SearchEdge,
};
use crate::models::{
    Author, Issue, Language, Owner, PullRequest, Readme, ReleaseDetail, Repository,
    RepositoryDetails, README_NOT_FOUND,
};
use serde_json::Value;
use tracing::{debug, warn};

/// GraphQL typename of repository search results.
const REPOSITORY_TYPENAME: &str = "Repository";

/// Maps search edges to repositories, skipping anything that isn't one.
pub(crate) fn map_search_results(search: Option<SearchConnection>) -> Vec<Repository> {
    search
        .and_then(|connection| connection.edges)
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, edge)| map_search_edge(index, edge))
        .collect()
}

fn map_search_edge(index: usize, edge: Option<SearchEdge>) -> Option<Repository> {
    let Some(node) = edge.and_then(|edge| edge.node) else {
        debug!(index, "Skipping empty search edge");
        return None;
    };

    let typename = node.get("__typename").and_then(Value::as_str);
    if typename.is_some_and(|typename| typename != REPOSITORY_TYPENAME) {
        debug!(index, typename, "Skipping non-repository search result");
        return None;
    }

    match serde_json::from_value::<RepositoryNode>(node) {
        Ok(repository) => Some(map_repository(repository)),
        Err(e) => {
            warn!(index, error = %e, "Skipping malformed search result");
            None
        }
    }
}

fn map_repository(node: RepositoryNode) -> Repository {
    Repository {
        name: node.name,
        owner: node.owner.login,
        description: node.description,
        stars: node.stargazer_count,
        forks: node.fork_count,
        language: node.primary_language.map(|language| language.name),
        latest_release: node.latest_release.map(map_release),
    }
}

/// Maps the details node into [`RepositoryDetails`].
pub(crate) fn map_repository_details(node: RepositoryDetailsNode) -> RepositoryDetails {
    let readme = Readme {
        text: select_readme(&node),
    };

    RepositoryDetails {
        id: node.id,
        name: node.name,
        name_with_owner: node.name_with_owner,
        description: node.description,
        url: node.url,
        homepage_url: node.homepage_url.filter(|url| !url.is_empty()),
        stars: node.stargazer_count,
        forks: node.fork_count,
        is_private: node.is_private,
        owner: Owner {
            login: node.owner.login,
            avatar_url: node.owner.avatar_url,
            url: node.owner.url,
        },
        primary_language: node.primary_language.map(map_language),
        languages: flatten_nodes(node.languages.and_then(|c| c.nodes))
            .map(map_language)
            .collect(),
        total_issues: node.issues.total_count,
        issues: map_issues(node.issues),
        total_pull_requests: node.pull_requests.total_count,
        pull_requests: map_pull_requests(node.pull_requests),
        readme,
        latest_release: node.latest_release.map(map_release),
        releases: flatten_nodes(node.releases.and_then(|c| c.nodes))
            .map(map_release)
            .collect(),
    }
}

/// Picks the first README alias that resolved to a text blob.
fn select_readme(node: &RepositoryDetailsNode) -> String {
    node.readme_candidates()
        .into_iter()
        .flatten()
        .find_map(|blob| blob.text.clone())
        .unwrap_or_else(|| README_NOT_FOUND.to_string())
}

fn map_issues(connection: CountedConnection<IssueNode>) -> Vec<Issue> {
    flatten_nodes(connection.nodes)
        .map(|node| Issue {
            number: node.number,
            title: node.title,
            url: node.url,
            state: node.state,
            created_at: node.created_at,
            author: node.author.map(map_author),
        })
        .collect()
}

fn map_pull_requests(connection: CountedConnection<IssueNode>) -> Vec<PullRequest> {
    flatten_nodes(connection.nodes)
        .map(|node| PullRequest {
            number: node.number,
            title: node.title,
            url: node.url,
            state: node.state,
            created_at: node.created_at,
            author: node.author.map(map_author),
        })
        .collect()
}

fn map_author(node: AuthorNode) -> Author {
    Author {
        login: node.login,
        avatar_url: node.avatar_url,
    }
}

fn map_language(node: LanguageNode) -> Language {
    Language {
        name: node.name,
        color: node.color,
    }
}

fn map_release(node: ReleaseNode) -> ReleaseDetail {
    ReleaseDetail {
        name: node.name.unwrap_or_default(),
        tag_name: node.tag_name,
        url: node.url,
        is_latest: node.is_latest,
        description: node.description,
        release_date: node.published_at,
        updated_at: node.updated_at,
    }
}

fn flatten_nodes<T>(nodes: Option<Vec<Option<T>>>) -> impl Iterator<Item = T> {
    nodes.unwrap_or_default().into_iter().flatten()
}
