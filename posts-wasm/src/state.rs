use leptos::prelude::*;

use crate::models::Post;

// Одновременно правится не больше одного поста, поэтому режим формы —
// явная сумма, а не nullable-ссылка на пост.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Draft {
    #[default]
    Create,
    Edit {
        post_id: i64,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) posts: RwSignal<Vec<Post>>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            posts: RwSignal::new(Vec::new()),
        }
    }
}
