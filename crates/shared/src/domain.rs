use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseFieldError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single row of the admin table, as served by the members endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn field(&self, field: EditableField) -> &str {
        match field {
            EditableField::Name => &self.name,
            EditableField::Email => &self.email,
            EditableField::Role => &self.role,
        }
    }

    pub fn set_field(&mut self, field: EditableField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditableField::Name => self.name = value,
            EditableField::Email => self.email = value,
            EditableField::Role => self.role = value,
        }
    }
}

/// Columns that can be changed through inline editing. The id is never editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditableField {
    Name,
    Email,
    Role,
}

impl EditableField {
    pub const ALL: [EditableField; 3] = [Self::Name, Self::Email, Self::Role];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditableField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == lower)
            .ok_or_else(|| ParseFieldError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_members_payload() {
        let raw = r#"[
            {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
            {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin"}
        ]"#;
        let members: Vec<Member> = serde_json::from_str(raw).expect("decode");
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, MemberId::from("1"));
        assert_eq!(members[1].role, "admin");
    }

    #[test]
    fn parses_editable_field_case_insensitively() {
        assert_eq!("Email".parse::<EditableField>().ok(), Some(EditableField::Email));
        assert_eq!(" role ".parse::<EditableField>().ok(), Some(EditableField::Role));
        assert!("id".parse::<EditableField>().is_err());
    }

    #[test]
    fn set_field_only_touches_the_named_column() {
        let mut member = Member {
            id: MemberId::from("7"),
            name: "Old".into(),
            email: "old@x.com".into(),
            role: "member".into(),
        };
        member.set_field(EditableField::Email, "new@x.com");
        assert_eq!(member.field(EditableField::Email), "new@x.com");
        assert_eq!(member.name, "Old");
        assert_eq!(member.role, "member");
    }
}
