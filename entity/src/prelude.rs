pub use super::competition::Entity as Competition;
pub use super::competition_registration::Entity as CompetitionRegistration;
pub use super::recruitment::Entity as Recruitment;
pub use super::recruitment_application::Entity as RecruitmentApplication;
pub use super::skill::Entity as Skill;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::user::Entity as User;
