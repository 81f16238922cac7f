use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    // `PUT /posts/{id}` отдаёт только отправленные поля плюс `id`.
    #[serde(default)]
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_camel_case_user_id() {
        let raw = r#"{"userId":7,"id":3,"title":"t","body":"b"}"#;
        let post: Post = serde_json::from_str(raw).expect("post must decode");
        assert_eq!(post.user_id, 7);
        assert_eq!(post.id, 3);
    }

    #[test]
    fn post_decodes_put_echo_without_user_id() {
        let raw = r#"{"id":5,"title":"t2","body":"b2"}"#;
        let post: Post = serde_json::from_str(raw).expect("echo must decode");
        assert_eq!(post.user_id, 0);
    }

    #[test]
    fn create_request_serializes_user_id_in_camel_case() {
        let payload = CreatePostRequest {
            user_id: 1,
            title: "t".to_string(),
            body: "b".to_string(),
        };
        let raw = serde_json::to_string(&payload).expect("payload must serialize");
        assert!(raw.contains(r#""userId":1"#));
    }
}
