//! View renderer.

use crate::models::{Author, ReleaseDetail, Repository, RepositoryDetails};
use crate::view_models::{DetailsState, SearchState};
use chrono::{DateTime, Utc};
use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde_json::{json, Value};

const SEARCH_VIEW: &str = "search";
const DETAILS_VIEW: &str = "details";

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (output goes to a terminal)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));
    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq variable "value")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Renders view-model state snapshots to terminal text.
pub struct ViewRenderer {
    handlebars: Handlebars<'static>,
}

impl ViewRenderer {
    /// Creates a renderer with the search and details views registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a view template fails to parse.
    pub fn new() -> Result<Self, super::ViewError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(SEARCH_VIEW, include_str!("templates/search.hbs"))?;
        handlebars.register_template_string(DETAILS_VIEW, include_str!("templates/details.hbs"))?;
        Ok(Self { handlebars })
    }

    /// Renders the search screen.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_search(&self, state: &SearchState) -> Result<String, super::ViewError> {
        let repositories: Vec<Value> = state
            .repositories
            .iter()
            .enumerate()
            .map(|(index, repository)| search_row(index + 1, repository))
            .collect();

        let data = json!({
            "search_query": state.search_query,
            "is_loading": state.is_loading,
            "error_message": state.error_message,
            "repositories": repositories,
        });

        Ok(self.handlebars.render(SEARCH_VIEW, &data)?)
    }

    /// Renders the details screen, with the README section when requested.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_details(
        &self,
        state: &DetailsState,
        include_readme: bool,
    ) -> Result<String, super::ViewError> {
        let data = json!({
            "is_loading": state.is_loading,
            "error_message": state.error_message,
            "details": state.repository_details.as_ref().map(details_view),
            "include_readme": include_readme,
            "is_readme_loading": state.is_readme_loading,
            "readme_error": state.readme_error,
            "readme": state.readme_text(),
        });

        Ok(self.handlebars.render(DETAILS_VIEW, &data)?)
    }
}

fn search_row(rank: usize, repository: &Repository) -> Value {
    json!({
        "rank": rank,
        "full_name": repository.full_name(),
        "description": repository.description,
        "stars": repository.stars,
        "forks": repository.forks,
        "language": repository.language,
        "latest_release": repository
            .latest_release
            .as_ref()
            .map(|release| release.tag_name.as_str()),
    })
}

fn details_view(details: &RepositoryDetails) -> Value {
    let languages: Vec<&str> = details.languages.iter().map(|l| l.name.as_str()).collect();
    let issues: Vec<Value> = details
        .issues
        .iter()
        .map(|issue| {
            json!({
                "number": issue.number,
                "title": issue.title,
                "author": author_login(issue.author.as_ref()),
                "created": short_date(&issue.created_at),
            })
        })
        .collect();
    let pull_requests: Vec<Value> = details
        .pull_requests
        .iter()
        .map(|pull| {
            json!({
                "number": pull.number,
                "title": pull.title,
                "state": pull.state,
                "author": author_login(pull.author.as_ref()),
                "created": short_date(&pull.created_at),
            })
        })
        .collect();
    let releases: Vec<Value> = details.releases.iter().map(release_view).collect();

    json!({
        "name_with_owner": details.name_with_owner,
        "is_private": details.is_private,
        "description": details.description,
        "url": details.url,
        "homepage_url": details.homepage_url,
        "owner": details.owner.login,
        "stars": details.stars,
        "forks": details.forks,
        "primary_language": details.primary_language.as_ref().map(|l| l.name.as_str()),
        "languages": languages.join(", "),
        "latest_release": details.latest_release.as_ref().map(release_view),
        "total_issues": details.total_issues,
        "issues": issues,
        "total_pull_requests": details.total_pull_requests,
        "pull_requests": pull_requests,
        "releases": releases,
    })
}

fn release_view(release: &ReleaseDetail) -> Value {
    json!({
        "name": release.name,
        "tag_name": release.tag_name,
        "is_latest": release.is_latest,
        "date": release.release_date.as_ref().map(short_date),
    })
}

fn author_login(author: Option<&Author>) -> &str {
    author.map_or("ghost", |author| author.login.as_str())
}

fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, Language, PullRequest, README_NOT_FOUND};
    use crate::testing::{sample_details, sample_repository};
    use chrono::TimeZone;

    fn renderer() -> ViewRenderer {
        ViewRenderer::new().unwrap()
    }

    #[test]
    fn search_lists_repositories_in_order() {
        let mut state = SearchState::with_query("kotlin");
        state.repositories = vec![
            sample_repository("jetbrains", "kotlin"),
            sample_repository("square", "okhttp"),
        ];

        let output = renderer().render_search(&state).unwrap();

        assert!(output.starts_with("Search: kotlin"));
        let first = output.find("1. jetbrains/kotlin").unwrap();
        let second = output.find("2. square/okhttp").unwrap();
        assert!(first < second);
        assert!(output.contains("[Kotlin]"));
    }

    #[test]
    fn search_shows_error_message() {
        let mut state = SearchState::with_query("kotlin");
        state.error_message = Some("API rate limit exceeded".to_string());

        let output = renderer().render_search(&state).unwrap();

        assert!(output.contains("Error: API rate limit exceeded"));
        assert!(!output.contains("No repositories found."));
    }

    #[test]
    fn search_shows_loading_and_empty() {
        let mut state = SearchState::with_query("nothing-matches");
        assert!(renderer()
            .render_search(&state)
            .unwrap()
            .contains("No repositories found."));

        state.is_loading = true;
        assert!(renderer().render_search(&state).unwrap().contains("Loading..."));
    }

    #[test]
    fn details_render_sections() {
        let mut details = sample_details("octo", "cat", "# Cat\n<b>bold</b>");
        details.primary_language = Some(Language {
            name: "Rust".to_string(),
            color: Some("#dea584".to_string()),
        });
        details.languages = vec![
            Language { name: "Rust".to_string(), color: None },
            Language { name: "Shell".to_string(), color: None },
        ];
        details.total_issues = 12;
        details.issues = vec![Issue {
            number: 7,
            title: "Crash on start".to_string(),
            url: "https://github.com/octo/cat/issues/7".to_string(),
            state: "OPEN".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            author: None,
        }];
        details.total_pull_requests = 1;
        details.pull_requests = vec![PullRequest {
            number: 8,
            title: "Fix crash".to_string(),
            url: "https://github.com/octo/cat/pull/8".to_string(),
            state: "MERGED".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap(),
            author: None,
        }];
        let state = DetailsState {
            repository_details: Some(details),
            ..DetailsState::default()
        };

        let output = renderer().render_details(&state, true).unwrap();

        assert!(output.contains("octo/cat"));
        assert!(output.contains("Primary language: Rust"));
        assert!(output.contains("Languages: Rust, Shell"));
        assert!(output.contains("Issues (12):"));
        assert!(output.contains("#7 Crash on start by ghost on 2024-03-01"));
        assert!(output.contains("#8 Fix crash [merged]"));
        assert!(output.contains("<b>bold</b>"));
    }

    #[test]
    fn details_omit_readme_unless_requested() {
        let state = DetailsState {
            repository_details: Some(sample_details("octo", "cat", "# Cat")),
            ..DetailsState::default()
        };

        let output = renderer().render_details(&state, false).unwrap();

        assert!(!output.contains("--- README ---"));
        assert!(!output.contains("# Cat"));
    }

    #[test]
    fn details_show_error_and_readme_error() {
        let state = DetailsState {
            error_message: Some("Repository not found".to_string()),
            readme_error: Some(README_NOT_FOUND.to_string()),
            ..DetailsState::default()
        };

        let output = renderer().render_details(&state, true).unwrap();

        assert!(output.contains("Error: Repository not found"));
        assert!(output.contains(README_NOT_FOUND));
    }

    #[test]
    fn first_failed_load_renders_error_without_details() {
        let state = DetailsState {
            error_message: Some("Repository not found".to_string()),
            ..DetailsState::default()
        };

        let output = renderer().render_details(&state, false).unwrap();

        assert!(output.contains("Error: Repository not found"));
        assert!(!output.contains("Issues ("));
    }

    #[test]
    fn loading_without_details_renders() {
        let state = DetailsState {
            is_loading: true,
            ..DetailsState::default()
        };

        let output = renderer().render_details(&state, true).unwrap();

        assert!(output.contains("Loading..."));
        assert!(output.contains("--- README ---"));
    }

    #[test]
    fn eq_helper_compares_strings() {
        let hbs = create_handlebars_registry();
        let data = json!({ "state": "MERGED" });

        let result = hbs
            .render_template(r#"{{#if (eq state "MERGED")}}merged{{else}}open{{/if}}"#, &data)
            .unwrap();

        assert_eq!(result, "merged");
    }
}
