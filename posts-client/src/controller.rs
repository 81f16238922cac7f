use crate::api::{NewPost, PostPatch, PostsApi};
use crate::error::PostsClientResult;
use crate::models::Post;

/// Автор, которого страница подставляет в новые посты.
const DRAFT_USER_ID: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Режим формы: создание нового поста либо правка существующего.
///
/// Одновременно правится не больше одного поста, поэтому режим — явная
/// сумма, а не nullable-ссылка на пост.
pub enum Draft {
    /// Форма пуста, submit создаёт новый пост.
    #[default]
    Create,
    /// Submit обновляет пост `post_id`.
    Edit {
        /// Идентификатор редактируемого поста.
        post_id: i64,
    },
}

/// Состояние страницы постов: коллекция, черновик формы и сами операции.
///
/// Каждая операция выполняет не больше одного сетевого вызова. При ошибке
/// локальное состояние не меняется, ошибка уходит вызывающему.
pub struct PostsController<A: PostsApi> {
    api: A,
    posts: Vec<Post>,
    draft: Draft,
    draft_title: String,
    draft_body: String,
}

impl<A: PostsApi> PostsController<A> {
    /// Создаёт контроллер с пустой коллекцией поверх произвольного `PostsApi`.
    pub fn new(api: A) -> Self {
        Self {
            api,
            posts: Vec::new(),
            draft: Draft::Create,
            draft_title: String::new(),
            draft_body: String::new(),
        }
    }

    /// Текущая коллекция в серверном порядке.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Текущий режим формы.
    pub fn draft(&self) -> Draft {
        self.draft
    }

    /// Текущий заголовок в форме.
    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    /// Текущий текст в форме.
    pub fn draft_body(&self) -> &str {
        &self.draft_body
    }

    /// Задаёт заголовок в форме.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
    }

    /// Задаёт текст в форме.
    pub fn set_draft_body(&mut self, body: impl Into<String>) {
        self.draft_body = body.into();
    }

    /// Загружает коллекцию целиком, заменяя локальную серверным порядком.
    pub async fn load_all(&mut self) -> PostsClientResult<()> {
        self.posts = self.api.list_posts().await?;
        Ok(())
    }

    /// Создаёт пост из полей формы и дописывает ответ сервера в конец
    /// коллекции. Поля формы очищаются только при успехе.
    pub async fn create(&mut self) -> PostsClientResult<()> {
        let input = NewPost {
            user_id: DRAFT_USER_ID,
            title: self.draft_title.clone(),
            body: self.draft_body.clone(),
        };
        let created = self.api.create_post(input).await?;

        self.posts.push(created);
        self.clear_draft_fields();
        Ok(())
    }

    /// Переводит форму в режим правки поста `post_id`, копируя его текущие
    /// поля. Сетевого вызова нет; неизвестный идентификатор игнорируется.
    pub fn begin_edit(&mut self, post_id: i64) {
        let Some(post) = self.posts.iter().find(|post| post.id == post_id) else {
            return;
        };

        self.draft_title = post.title.clone();
        self.draft_body = post.body.clone();
        self.draft = Draft::Edit { post_id };
    }

    /// Отправляет поля формы в редактируемый пост и заменяет его в
    /// коллекции ответом сервера. В режиме создания — тихий no-op без
    /// сетевого вызова. При ошибке черновик остаётся активным.
    pub async fn update(&mut self) -> PostsClientResult<()> {
        let Draft::Edit { post_id } = self.draft else {
            return Ok(());
        };

        let patch = PostPatch {
            title: self.draft_title.clone(),
            body: self.draft_body.clone(),
        };
        let updated = self.api.update_post(post_id, patch).await?;

        if let Some(post) = self.posts.iter_mut().find(|post| post.id == post_id) {
            *post = updated;
        }
        self.draft = Draft::Create;
        self.clear_draft_fields();
        Ok(())
    }

    /// Удаляет пост `post_id` на сервере и из коллекции.
    ///
    /// Черновик не трогает: после удаления редактируемого поста форма
    /// продолжает указывать на отсутствующий идентификатор, и следующий
    /// `update` вернёт ошибку сервера.
    pub async fn remove(&mut self, post_id: i64) -> PostsClientResult<()> {
        self.api.delete_post(post_id).await?;

        self.posts.retain(|post| post.id != post_id);
        Ok(())
    }

    fn clear_draft_fields(&mut self) {
        self.draft_title.clear();
        self.draft_body.clear();
    }
}
