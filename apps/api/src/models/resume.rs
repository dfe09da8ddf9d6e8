#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `resumes`. The table is created at startup; no handler reads or writes it yet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resume {
    pub id: i32,
    pub user_id: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_columns_deserialize() {
        let resume: Resume = serde_json::from_str(r#"{"id": 7, "user_id": null, "title": null, "content": "Body"}"#)
            .unwrap();
        assert_eq!(resume.id, 7);
        assert!(resume.user_id.is_none());
        assert_eq!(resume.content.as_deref(), Some("Body"));
    }
}
