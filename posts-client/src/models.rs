use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор автора. В ответе на `PUT` сервис опускает поле,
    /// поэтому при декодировании оно допускает значение по умолчанию.
    #[serde(default)]
    pub user_id: i64,
    /// Идентификатор поста (назначается сервером при создании).
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
}
