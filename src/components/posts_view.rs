//! Posts View Component

use leptos::prelude::*;

use crate::components::{ContentHeader, StatsBlock};
use crate::pages::{PostCard, Stat};

#[component]
pub fn PostsView(stats: Vec<Stat>, cards: Vec<PostCard>) -> impl IntoView {
    view! {
        <ContentHeader title="Посты" />
        <StatsBlock stats=stats />
        <div class="posts-list">
            {cards.into_iter().map(|card| {
                let comments_href = card.comments_href();
                view! {
                    <div class="post-item">
                        <h3>{card.title}</h3>
                        <p>{card.body}</p>
                        <div class="post-links">
                            <a href=comments_href class="btn btn-small">"Комментарии"</a>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
