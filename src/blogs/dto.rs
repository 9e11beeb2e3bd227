use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub image: Option<String>,
    pub priority: Option<String>,
}

/// PUT body; omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlogPostFilter {
    pub priority: Option<String>,
}
