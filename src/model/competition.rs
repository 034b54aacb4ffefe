use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompetitionDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: String,
    pub is_team: bool,
    #[serde(default = "default_team_capacity")]
    pub team_capacity: i32,
    #[serde(default)]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCompetitionDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: String,
    /// Left out to keep the stored capacity.
    #[serde(default)]
    pub team_capacity: Option<i32>,
    #[serde(default)]
    pub level: String,
}

fn default_team_capacity() -> i32 {
    1
}

/// Body of a registration request.
///
/// `team_id` must be set for team competitions and omitted for individual ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterCompetitionDto {
    #[serde(default)]
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub contact: String,
    pub is_team: bool,
    pub is_open: bool,
    pub team_capacity: i32,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRegistrationDto {
    pub id: i32,
    pub competition_id: i32,
    pub user_id: Option<i32>,
    pub team_id: Option<i32>,
    /// One of `pending`, `accepted` or `rejected`.
    pub status: String,
}
