//! GraphQL operations issued by the adapter.

use crate::client::GraphQlRequest;
use serde_json::json;

/// Search operation, with the release fragment appended.
pub(crate) const SEARCH_REPOSITORIES: &str = concat!(
    include_str!("graphql/search_repositories.graphql"),
    include_str!("graphql/release_fields.graphql"),
);

/// Details operation, with the release fragment appended.
pub(crate) const REPOSITORY_DETAILS: &str = concat!(
    include_str!("graphql/repository_details.graphql"),
    include_str!("graphql/release_fields.graphql"),
);

/// Builds the search request.
pub(crate) fn search_repositories(query: &str, first: u32) -> GraphQlRequest {
    GraphQlRequest {
        query: SEARCH_REPOSITORIES,
        variables: json!({ "query": query, "first": first }),
        operation_name: "SearchRepositories",
    }
}

/// Builds the details request.
pub(crate) fn repository_details(owner: &str, name: &str, first: u32) -> GraphQlRequest {
    GraphQlRequest {
        query: REPOSITORY_DETAILS,
        variables: json!({ "owner": owner, "name": name, "first": first }),
        operation_name: "RepositoryDetails",
    }
}
