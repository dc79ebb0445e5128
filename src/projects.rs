use dioxus::prelude::*;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::RuntimeConfig;

pub const REPOS_PER_PAGE: u32 = 6;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
}

impl Repository {
    pub fn summary(&self) -> &str {
        self.description
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or("No description available.")
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ProjectsState {
    Loading,
    Loaded(Vec<Repository>),
    Failed(String),
}

pub fn repos_url(base_url: &str, username: &str) -> String {
    format!(
        "{}/users/{username}/repos?sort=updated&per_page={REPOS_PER_PAGE}",
        base_url.trim_end_matches('/')
    )
}

async fn fetch_repositories(base_url: &str, username: &str) -> Result<Vec<Repository>, String> {
    let url = repos_url(base_url, username);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| format!("projects fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("projects fetch failed: status {}", response.status()));
    }
    response
        .json::<Vec<Repository>>()
        .await
        .map_err(|err| format!("projects decode failed: {err}"))
}

#[component]
pub fn ProjectsSection() -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut state = use_signal(|| ProjectsState::Loading);
    let mut attempt = use_signal(|| 0u32);
    let mut last_attempt = use_signal(|| None::<u32>);

    use_effect(move || {
        let current = attempt();
        if last_attempt() == Some(current) {
            return;
        }
        last_attempt.set(Some(current));
        let base_url = config.github_api_base_url.clone();
        let username = config.github_username.clone();
        state.set(ProjectsState::Loading);
        spawn(async move {
            match fetch_repositories(&base_url, &username).await {
                Ok(repositories) => state.set(ProjectsState::Loaded(repositories)),
                Err(err) => {
                    tracing::error!("github projects: {err}");
                    state.set(ProjectsState::Failed(err));
                }
            }
        });
    });

    let body = match state() {
        ProjectsState::Loading => rsx! {
            div { class: "projects-notice",
                p { "⏳ Loading projects from GitHub..." }
            }
        },
        ProjectsState::Loaded(repositories) if repositories.is_empty() => rsx! {
            div { class: "projects-notice",
                p { "📭 No projects found." }
            }
        },
        ProjectsState::Loaded(repositories) => rsx! {
            for repository in repositories.iter() {
                div { class: "project-card",
                    h3 { "{repository.name}" }
                    p { "{repository.summary()}" }
                    a {
                        href: "{repository.html_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "project-link",
                        "🔗 View on GitHub"
                    }
                }
            }
        },
        ProjectsState::Failed(_) => rsx! {
            div { class: "projects-notice error",
                p { class: "projects-error-title", "❌ Oops! Couldn't load GitHub projects." }
                p { "This might be due to network issues or API rate limits." }
                button {
                    r#type: "button",
                    class: "btn primary",
                    onclick: move |_| {
                        let next = attempt() + 1;
                        attempt.set(next);
                    },
                    "🔄 Try Again"
                }
            }
        },
    };

    rsx! {
        div { id: "github-projects", class: "projects-grid", {body} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_carries_sort_and_cap() {
        assert_eq!(
            repos_url("https://api.github.com", "TurkiAlslamah"),
            "https://api.github.com/users/TurkiAlslamah/repos?sort=updated&per_page=6"
        );
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        assert_eq!(
            repos_url("https://api.github.com/", "octocat"),
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=6"
        );
    }

    #[test]
    fn repository_decodes_with_null_description() {
        let repository: Repository = serde_json::from_str(
            r#"{"name":"demo","description":null,"html_url":"https://github.com/u/demo"}"#,
        )
        .unwrap();
        assert_eq!(repository.name, "demo");
        assert_eq!(repository.summary(), "No description available.");
    }

    #[test]
    fn repository_decodes_with_missing_description() {
        let repository: Repository =
            serde_json::from_str(r#"{"name":"demo","html_url":"https://github.com/u/demo"}"#)
                .unwrap();
        assert_eq!(repository.description, None);
    }

    #[test]
    fn repository_keeps_its_own_description() {
        let repository: Repository = serde_json::from_str(
            r#"{"name":"demo","description":"A demo.","html_url":"https://github.com/u/demo"}"#,
        )
        .unwrap();
        assert_eq!(repository.summary(), "A demo.");
    }

    #[test]
    fn extra_api_fields_are_ignored() {
        let repository: Repository = serde_json::from_str(
            r#"{"name":"demo","description":"x","html_url":"https://github.com/u/demo","stargazers_count":3,"fork":false}"#,
        )
        .unwrap();
        assert_eq!(repository.name, "demo");
    }
}
