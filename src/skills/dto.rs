use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub level: Option<i32>,
    pub icon: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillFilter {
    pub priority: Option<String>,
}
