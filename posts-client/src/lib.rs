//! Клиентская библиотека для работы с коллекцией постов JSONPlaceholder.
//!
//! Четыре операции (list/create/update/delete) спрятаны за трейтом
//! `PostsApi` с двумя реализациями:
//! - HTTP (`reqwest`) поверх удалённого REST API;
//! - in-memory (`InMemoryPosts`) для тестов и офлайн-сценариев.
//!
//! Поверх `PostsApi` работает `PostsController` — состояние страницы
//! постов (коллекция + черновик формы) с операциями из UI.
#![warn(missing_docs)]

mod api;
mod controller;
mod error;
mod http_client;
mod memory;
mod models;

pub use api::{NewPost, PostPatch, PostsApi};
pub use controller::{Draft, PostsController};
pub use error::{PostsClientError, PostsClientResult};
pub use http_client::{DEFAULT_BASE_URL, HttpClient};
pub use memory::InMemoryPosts;
pub use models::Post;
