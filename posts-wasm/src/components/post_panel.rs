use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Post;
use crate::state::{AppState, Draft};

fn find_post_for_edit(posts: &[Post], post_id: i64) -> Option<(String, String)> {
    posts
        .iter()
        .find(|post| post.id == post_id)
        .map(|post| (post.title.clone(), post.body.clone()))
}

fn apply_updated_post(posts: &mut Vec<Post>, updated: Post) {
    if let Some(post) = posts.iter_mut().find(|post| post.id == updated.id) {
        *post = updated;
    }
}

#[component]
pub(crate) fn PostPanel(state: AppState) -> impl IntoView {
    let draft = RwSignal::new(Draft::Create);
    let draft_title = RwSignal::new(String::new());
    let draft_body = RwSignal::new(String::new());

    let on_submit = Callback::new({
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let title = draft_title.get();
            let body = draft_body.get();

            match draft.get() {
                Draft::Create => {
                    let state2 = state.clone();
                    spawn_local(async move {
                        match api::create_post(&title, &body).await {
                            Ok(created) => {
                                state2.posts.update(|posts| posts.push(created));
                                draft_title.set(String::new());
                                draft_body.set(String::new());
                            }
                            Err(err) => api::log_error("create post failed", &err),
                        }
                    });
                }
                Draft::Edit { post_id } => {
                    let state2 = state.clone();
                    spawn_local(async move {
                        match api::update_post(post_id, &title, &body).await {
                            Ok(updated) => {
                                state2
                                    .posts
                                    .update(|posts| apply_updated_post(posts, updated));
                                draft.set(Draft::Create);
                                draft_title.set(String::new());
                                draft_body.set(String::new());
                            }
                            Err(err) => api::log_error("update post failed", &err),
                        }
                    });
                }
            }
        }
    });

    let on_start_edit = Callback::new({
        let state = state.clone();
        move |post_id: i64| {
            let posts = state.posts.get();
            let Some((title, body)) = find_post_for_edit(&posts, post_id) else {
                return;
            };

            draft_title.set(title);
            draft_body.set(body);
            draft.set(Draft::Edit { post_id });
        }
    });

    let on_delete_post = Callback::new({
        let state = state.clone();
        move |post_id: i64| {
            let state2 = state.clone();
            spawn_local(async move {
                match api::delete_post(post_id).await {
                    Ok(()) => {
                        state2.posts.update(|posts| posts.retain(|p| p.id != post_id));
                    }
                    Err(err) => api::log_error("delete post failed", &err),
                }
            });
        }
    });

    let submit_label = move || match draft.get() {
        Draft::Create => "Create",
        Draft::Edit { .. } => "Update",
    };

    view! {
        <form on:submit=move |ev| on_submit.run(ev)>
            <input
                placeholder="Post title"
                prop:value=move || draft_title.get()
                on:input=move |ev| draft_title.set(event_target_value(&ev))
            />
            <input
                placeholder="Post body"
                prop:value=move || draft_body.get()
                on:input=move |ev| draft_body.set(event_target_value(&ev))
            />
            <button type="submit">{submit_label}</button>
        </form>

        <ul>
            <For
                each=move || state.posts.get()
                key=|post| (post.id, post.title.clone(), post.body.clone())
                children=move |post| {
                    let post_id = post.id;
                    let post_title = post.title.clone();
                    let post_body = post.body.clone();

                    view! {
                        <li style="margin-bottom: 0.5rem;">
                            <strong>{post_title.clone()}</strong>
                            <div>{post_body.clone()}</div>

                            <div style="margin-top: 0.25rem;">
                                <button
                                    on:click={
                                        let on_start_edit = on_start_edit.clone();
                                        let id = post_id;
                                        move |_| on_start_edit.run(id)
                                    }
                                >
                                    "Edit"
                                </button>
                                <button
                                    style="margin-left: 0.5rem;"
                                    on:click={
                                        let on_delete_post = on_delete_post.clone();
                                        let id = post_id;
                                        move |_| on_delete_post.run(id)
                                    }
                                >
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
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

    #[test]
    fn find_post_for_edit_returns_title_and_body() {
        let posts = vec![sample_post(1, "A", "X"), sample_post(2, "B", "Y")];
        let result = find_post_for_edit(&posts, 2);
        assert_eq!(result, Some(("B".to_string(), "Y".to_string())));
    }

    #[test]
    fn find_post_for_edit_returns_none_for_missing_post() {
        let posts = vec![sample_post(1, "A", "X")];
        let result = find_post_for_edit(&posts, 999);
        assert!(result.is_none());
    }

    #[test]
    fn apply_updated_post_replaces_matching_post_only() {
        let mut posts = vec![sample_post(1, "A", "X"), sample_post(2, "B", "Y")];

        apply_updated_post(&mut posts, sample_post(2, "B2", "Y2"));

        assert_eq!(posts[0].title, "A");
        assert_eq!(posts[1].title, "B2");
        assert_eq!(posts[1].body, "Y2");
    }

    #[test]
    fn apply_updated_post_ignores_missing_id() {
        let mut posts = vec![sample_post(1, "A", "X")];

        apply_updated_post(&mut posts, sample_post(9, "Z", "Z"));

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "A");
    }
}
