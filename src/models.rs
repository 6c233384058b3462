//! Domain types mirroring the `exercise` table. They stay plain data holders
//! so the persistence and presentation layers can share them freely.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use thiserror::Error;

/// Category an exercise belongs to. Persisted as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainingType {
    Mobility,
    Cardio,
    Resistance,
    Skill,
}

impl TrainingType {
    pub const ALL: [TrainingType; 4] = [
        TrainingType::Mobility,
        TrainingType::Cardio,
        TrainingType::Resistance,
        TrainingType::Skill,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrainingType::Mobility => "mobility",
            TrainingType::Cardio => "cardio",
            TrainingType::Resistance => "resistance",
            TrainingType::Skill => "skill",
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown training type `{0}`")]
pub struct UnknownTrainingType(pub String);

impl FromStr for TrainingType {
    type Err = UnknownTrainingType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TrainingType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownTrainingType(value.to_string()))
    }
}

impl FromSql for TrainingType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

impl ToSql for TrainingType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

/// One row of the active-exercise roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    /// Primary key from the store; doubles as the list row key.
    pub id: String,
    pub name: String,
    pub training_type: TrainingType,
}

impl Exercise {
    /// `Name (training_type)`, the text shown for each list row.
    pub fn display_line(&self) -> String {
        format!("{} ({})", self.name, self.training_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_type_parses_its_own_text() {
        for kind in TrainingType::ALL {
            assert_eq!(kind.as_str().parse::<TrainingType>(), Ok(kind));
        }
    }

    #[test]
    fn training_type_rejects_unknown_text() {
        let err = "yoga".parse::<TrainingType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown training type `yoga`");
        assert!("Cardio".parse::<TrainingType>().is_err());
    }

    #[test]
    fn display_line_shows_name_and_type() {
        let exercise = Exercise {
            id: "1".into(),
            name: "Squat".into(),
            training_type: TrainingType::Resistance,
        };
        assert_eq!(exercise.display_line(), "Squat (resistance)");
    }
}
