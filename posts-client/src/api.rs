use async_trait::async_trait;

use crate::error::PostsClientResult;
use crate::models::Post;

#[derive(Debug, Clone)]
/// Поля нового поста; `id` назначает сервер.
pub struct NewPost {
    /// Идентификатор автора.
    pub user_id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст.
    pub body: String,
}

#[derive(Debug, Clone)]
/// Новые значения полей существующего поста.
pub struct PostPatch {
    /// Заголовок.
    pub title: String,
    /// Текст.
    pub body: String,
}

#[async_trait]
/// Операции коллекции постов.
pub trait PostsApi: Send + Sync {
    /// Возвращает все посты в порядке, который задаёт сервер.
    async fn list_posts(&self) -> PostsClientResult<Vec<Post>>;

    /// Создаёт пост и возвращает его с назначенным сервером `id`.
    async fn create_post(&self, input: NewPost) -> PostsClientResult<Post>;

    /// Заменяет поля поста `id` и возвращает обновлённый пост.
    async fn update_post(&self, id: i64, patch: PostPatch) -> PostsClientResult<Post>;

    /// Удаляет пост `id`.
    async fn delete_post(&self, id: i64) -> PostsClientResult<()>;
}
