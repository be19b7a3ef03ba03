use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Closed role variant. The two roles the product knows: a trainer
/// ("personal" in the wire format) and a student. Unknown role strings
/// from older documents collapse to Student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Personal,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Personal => "personal",
            Role::Student => "student",
        }
    }

    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "personal" => Role::Personal,
            _ => Role::Student,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Role::Personal => Role::Student,
            Role::Student => Role::Personal,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported conditioning level. Anything we don't recognize is
/// treated as Advanced so that difficulty matching stays permissive for
/// it, mirroring how unknown levels behaved in the legacy data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }

    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "beginner" => FitnessLevel::Beginner,
            "intermediate" => FitnessLevel::Intermediate,
            _ => FitnessLevel::Advanced,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a user's progress log, kept as JSONB on the users row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub workout_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub performance: f64,
}

/// Coaching profile attached to an account. Created with defaults
/// (student, age 30, beginner, empty progress) the first time the
/// account touches a profile endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub age: i32,
    pub fitness_level: FitnessLevel,
    pub trainer_id: Option<Uuid>,
    pub workout_ids: Vec<Uuid>,
    pub progress: Vec<ProgressEntry>,
}

#[derive(Debug, FromRow)]
pub struct UserProfileRow {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub age: i32,
    pub fitness_level: String,
    pub trainer_id: Option<Uuid>,
    pub workout_ids: Vec<Uuid>,
    pub progress: Json<Vec<ProgressEntry>>,
}

impl From<UserProfileRow> for UserProfile {
    fn from(row: UserProfileRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            role: Role::parse_lossy(&row.role),
            age: row.age,
            fitness_level: FitnessLevel::parse_lossy(&row.fitness_level),
            trainer_id: row.trainer_id,
            workout_ids: row.workout_ids,
            progress: row.progress.0,
        }
    }
}

/// Student listing entry for the trainer's management view.
#[derive(Debug, Serialize, FromRow)]
pub struct StudentSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub trainer_id: Option<Uuid>,
    pub workout_ids: Vec<Uuid>,
}

#[derive(Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    #[serde(
        serialize_with = "serialize_secret_string",
        deserialize_with = "deserialize_secret_string"
    )]
    pub password: SecretString,
}

impl fmt::Display for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username: {}, Email: {}", self.username, self.email)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub age: Option<i32>,
    pub fitness_level: Option<FitnessLevel>,
}

pub fn serialize_secret_string<S>(_: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str("[REDACTED]")
}

pub fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into_boxed_str()))
}
