//! Dashboard Models
//!
//! Records as served by the remote API and as persisted in the local overlay.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FormError;
use crate::filters::{loose_id, whole_id};

/// Where a record came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Origin {
    #[default]
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    /// Assigned by the data store, never serialized
    #[serde(skip)]
    pub origin: Origin,
}

impl User {
    pub fn is_local(&self) -> bool {
        self.origin == Origin::Local
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(deserialize_with = "loose_foreign_key")]
    pub user_id: u64,
    #[serde(skip)]
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Fields collected by the add-user form
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Fields collected by the add-todo form
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub user_id: u64,
}

impl NewUser {
    /// Name and email are both required
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(FormError::MissingUserFields);
        }
        Ok(())
    }
}

impl NewTodo {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.is_empty() {
            return Err(FormError::MissingTodoTitle);
        }
        Ok(())
    }
}

/// Foreign keys written by older builds may be numeric strings ("3") or null.
/// Anything that is not a whole number maps to 0, which no record uses.
fn loose_foreign_key<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(u64),
        Float(f64),
        Text(String),
    }

    let id = match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Int(n)) => n,
        Some(RawId::Float(f)) => whole_id(f).unwrap_or(0),
        Some(RawId::Text(s)) => loose_id(&s).unwrap_or(0),
        None => 0,
    };
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_remote_json() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.company.as_ref().map(|c| c.name.as_str()), Some("Romaguera-Crona"));
        assert_eq!(user.origin, Origin::Remote);
    }

    #[test]
    fn test_local_user_has_no_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id":1700000000000,"name":"Ann","email":"a@x.com"}"#).unwrap();
        assert_eq!(user.phone, None);
        assert_eq!(user.company, None);

        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"name":"Ann","email":"a@x.com"}"#);
    }

    #[test]
    fn test_todo_user_id_accepts_numeric_string() {
        let todo: Todo = serde_json::from_str(r#"{"id":5,"title":"t","completed":true,"userId":"3"}"#).unwrap();
        assert_eq!(todo.user_id, 3);

        let todo: Todo = serde_json::from_str(r#"{"id":6,"title":"t","completed":false,"userId":"abc"}"#).unwrap();
        assert_eq!(todo.user_id, 0);

        let todo: Todo = serde_json::from_str(r#"{"id":7,"title":"t","completed":false,"userId":null}"#).unwrap();
        assert_eq!(todo.user_id, 0);
        let todo: Todo = serde_json::from_str(r#"{"id":8,"title":"t","completed":false,"userId":"3.0"}"#).unwrap();
        assert_eq!(todo.user_id, 3);

        // Written back as a number
        let json = serde_json::to_string(&Todo { user_id: 3, ..todo }).unwrap();
        assert!(json.contains(r#""userId":3"#));
    }

    #[test]
    fn test_new_user_requires_name_and_email() {
        let user = |name: &str, email: &str| NewUser { name: name.into(), email: email.into() };
        assert_eq!(user("Ann", "a@x.com").validate(), Ok(()));
        assert_eq!(user("", "a@x.com").validate(), Err(FormError::MissingUserFields));
        assert_eq!(user("Ann", "").validate(), Err(FormError::MissingUserFields));
        assert_eq!(
            FormError::MissingUserFields.to_string(),
            "Пожалуйста, заполните все поля"
        );
    }

    #[test]
    fn test_new_todo_requires_title() {
        let todo = |title: &str| NewTodo { title: title.into(), completed: true, user_id: 1 };
        assert_eq!(todo("Write").validate(), Ok(()));
        assert_eq!(todo("").validate(), Err(FormError::MissingTodoTitle));
        assert_eq!(
            FormError::MissingTodoTitle.to_string(),
            "Пожалуйста, введите название задачи"
        );
    }

    #[test]
    fn test_comment_camel_case() {
        let comment: Comment = serde_json::from_str(
            r#"{"postId":1,"id":2,"name":"n","email":"e@x","body":"b"}"#,
        )
        .unwrap();
        assert_eq!(comment.post_id, 1);
    }
}
