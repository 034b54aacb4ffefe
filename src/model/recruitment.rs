use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecruitmentDto {
    pub role: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecruitmentDto {
    pub role: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentDto {
    pub id: i32,
    pub team_id: i32,
    pub role: String,
    pub description: String,
    pub is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentApplicationDto {
    pub id: i32,
    pub recruitment_id: i32,
    pub user_id: i32,
    /// One of `pending`, `accepted` or `rejected`.
    pub status: String,
    pub is_open: bool,
}
