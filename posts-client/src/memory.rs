use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{NewPost, PostPatch, PostsApi};
use crate::error::{PostsClientError, PostsClientResult};
use crate::models::Post;

#[derive(Debug)]
/// In-memory реализация `PostsApi`.
///
/// Ведёт себя как удалённый сервис, но записи действительно сохраняются на
/// время жизни значения. Подставляется вместо `HttpClient` в тестах и
/// офлайн-сценариях.
pub struct InMemoryPosts {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    posts: Vec<Post>,
    next_id: i64,
}

impl InMemoryPosts {
    /// Создаёт пустую коллекцию; идентификаторы назначаются с 1.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Создаёт коллекцию с начальными постами; счётчик идентификаторов
    /// продолжается после максимального из них.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner { posts, next_id }),
        }
    }
}

impl Default for InMemoryPosts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostsApi for InMemoryPosts {
    async fn list_posts(&self) -> PostsClientResult<Vec<Post>> {
        let inner = self.inner.lock().expect("posts mutex poisoned");
        Ok(inner.posts.clone())
    }

    async fn create_post(&self, input: NewPost) -> PostsClientResult<Post> {
        let mut inner = self.inner.lock().expect("posts mutex poisoned");
        let post = Post {
            user_id: input.user_id,
            id: inner.next_id,
            title: input.title,
            body: input.body,
        };
        inner.next_id += 1;
        inner.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> PostsClientResult<Post> {
        let mut inner = self.inner.lock().expect("posts mutex poisoned");
        let post = inner
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(PostsClientError::NotFound)?;
        post.title = patch.title;
        post.body = patch.body;
        Ok(post.clone())
    }

    async fn delete_post(&self, id: i64) -> PostsClientResult<()> {
        let mut inner = self.inner.lock().expect("posts mutex poisoned");
        let before = inner.posts.len();
        inner.posts.retain(|post| post.id != id);
        if inner.posts.len() == before {
            return Err(PostsClientError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(id: i64, title: &str, body: &str) -> Post {
        Post {
            user_id: 1,
            id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn new_post(title: &str, body: &str) -> NewPost {
        NewPost {
            user_id: 1,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let api = InMemoryPosts::new();

        let first = api
            .create_post(new_post("a", "x"))
            .await
            .expect("create must succeed");
        let second = api
            .create_post(new_post("b", "y"))
            .await
            .expect("create must succeed");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn ids_continue_after_seeded_posts() {
        let api = InMemoryPosts::with_posts(vec![sample_post(7, "a", "x")]);

        let created = api
            .create_post(new_post("b", "y"))
            .await
            .expect("create must succeed");
        assert_eq!(created.id, 8);
    }

    #[tokio::test]
    async fn update_rewrites_fields_of_matching_post() {
        let api = InMemoryPosts::with_posts(vec![sample_post(3, "old", "old body")]);

        let updated = api
            .update_post(
                3,
                PostPatch {
                    title: "new".to_string(),
                    body: "new body".to_string(),
                },
            )
            .await
            .expect("update must succeed");

        assert_eq!(updated.title, "new");
        let listed = api.list_posts().await.expect("list must succeed");
        assert_eq!(listed[0].body, "new body");
    }

    #[tokio::test]
    async fn update_of_missing_id_returns_not_found() {
        let api = InMemoryPosts::new();

        let err = api
            .update_post(
                42,
                PostPatch {
                    title: "t".to_string(),
                    body: "b".to_string(),
                },
            )
            .await
            .expect_err("post must be missing");
        assert!(matches!(err, PostsClientError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_matching_post() {
        let api = InMemoryPosts::with_posts(vec![sample_post(1, "a", "x"), sample_post(2, "b", "y")]);

        api.delete_post(1).await.expect("delete must succeed");

        let listed = api.list_posts().await.expect("list must succeed");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 2);
    }

    #[tokio::test]
    async fn delete_of_missing_id_returns_not_found() {
        let api = InMemoryPosts::new();

        let err = api.delete_post(1).await.expect_err("post must be missing");
        assert!(matches!(err, PostsClientError::NotFound));
    }
}
