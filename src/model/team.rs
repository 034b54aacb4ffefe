use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTeamDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberDto {
    pub user_id: i32,
    pub name: String,
    pub is_leader: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDetailsDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub leader_id: Option<i32>,
    pub members: Vec<TeamMemberDto>,
}
