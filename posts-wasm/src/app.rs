use leptos::prelude::*;

use crate::api;
use crate::components::post_panel::PostPanel;
use crate::state::AppState;

fn load_posts(state: AppState) {
    leptos::task::spawn_local(async move {
        match api::list_posts().await {
            Ok(posts) => state.posts.set(posts),
            Err(err) => api::log_error("load posts failed", &err),
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    load_posts(state.clone());

    view! {
        <main class="page">
            <section class="container">
                <h1>"Posts"</h1>

                <PostPanel state=state.clone() />
            </section>
        </main>
    }
}
