use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectFilter {
    pub priority: Option<String>,
}
