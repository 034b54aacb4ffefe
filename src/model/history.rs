use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionHistoryDto {
    pub registration_id: i32,
    pub competition_id: i32,
    pub competition_name: String,
    pub team_id: Option<i32>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentHistoryDto {
    pub application_id: i32,
    pub recruitment_id: i32,
    pub team_id: i32,
    pub role: String,
    pub status: String,
    pub is_open: bool,
}
