use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::api::{NewPost, PostPatch, PostsApi};
use crate::error::{PostsClientError, PostsClientResult};
use crate::models::Post;

/// Базовый URL публичной песочницы JSONPlaceholder.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePostRequestDto<'a> {
    user_id: i64,
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdatePostRequestDto<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostDto {
    // `PUT /posts/{id}` отдаёт только отправленные поля плюс `id`.
    #[serde(default)]
    user_id: i64,
    id: i64,
    title: String,
    body: String,
}

impl From<PostDto> for Post {
    fn from(value: PostDto) -> Self {
        Self {
            user_id: value.user_id,
            id: value.id,
            title: value.title,
            body: value.body,
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент REST API коллекции постов.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервиса.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> PostsClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        PostsClientError::from_http_status(status, Some(message))
    }

    /// универсальный helper для отправки запросов с json-payload
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
    ) -> PostsClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let request = self.client.request(method, url).json(body);

        let response = request
            .send()
            .await
            .map_err(PostsClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(PostsClientError::from_reqwest)
    }
}

#[async_trait]
impl PostsApi for HttpClient {
    async fn list_posts(&self) -> PostsClientResult<Vec<Post>> {
        let url = self.endpoint("/posts");

        let request = self.client.request(Method::GET, url);

        let response = request
            .send()
            .await
            .map_err(PostsClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dtos = response
            .json::<Vec<PostDto>>()
            .await
            .map_err(PostsClientError::from_reqwest)?;
        Ok(dtos.into_iter().map(Post::from).collect())
    }

    async fn create_post(&self, input: NewPost) -> PostsClientResult<Post> {
        let payload = CreatePostRequestDto {
            user_id: input.user_id,
            title: &input.title,
            body: &input.body,
        };
        let dto: PostDto = self.send_json(Method::POST, "/posts", &payload).await?;

        Ok(dto.into())
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> PostsClientResult<Post> {
        let payload = UpdatePostRequestDto {
            title: &patch.title,
            body: &patch.body,
        };
        let dto: PostDto = self
            .send_json(Method::PUT, &format!("/posts/{id}"), &payload)
            .await?;

        Ok(dto.into())
    }

    async fn delete_post(&self, id: i64) -> PostsClientResult<()> {
        let url = self.endpoint(&format!("/posts/{id}"));

        let request = self.client.request(Method::DELETE, url);

        let response = request
            .send()
            .await
            .map_err(PostsClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("https://jsonplaceholder.typicode.com/");
        let full = client.endpoint("/posts");
        assert_eq!(full, "https://jsonplaceholder.typicode.com/posts");
    }

    #[test]
    fn create_payload_serializes_user_id_in_camel_case() {
        let payload = CreatePostRequestDto {
            user_id: 1,
            title: "t",
            body: "b",
        };

        let value = serde_json::to_value(&payload).expect("payload must serialize");
        assert_eq!(value["userId"], 1);
        assert_eq!(value["title"], "t");
        assert_eq!(value["body"], "b");
    }

    #[test]
    fn update_payload_carries_only_title_and_body() {
        let payload = UpdatePostRequestDto {
            title: "t2",
            body: "b2",
        };

        let value = serde_json::to_value(&payload).expect("payload must serialize");
        let object = value.as_object().expect("payload must be an object");
        assert_eq!(object.len(), 2);
        assert_eq!(value["title"], "t2");
    }

    #[test]
    fn post_dto_defaults_missing_user_id() {
        let raw = r#"{"id":5,"title":"t2","body":"b2"}"#;
        let dto: PostDto = serde_json::from_str(raw).expect("put echo must decode");

        let post = Post::from(dto);
        assert_eq!(post.user_id, 0);
        assert_eq!(post.id, 5);
    }
}
