//! Comments View Component

use leptos::prelude::*;

use crate::components::{ContentHeader, StatsBlock};
use crate::pages::{CommentCard, Stat};

#[component]
pub fn CommentsView(stats: Vec<Stat>, cards: Vec<CommentCard>) -> impl IntoView {
    view! {
        <ContentHeader title="Комментарии" />
        <StatsBlock stats=stats />
        <div class="comments-list">
            {cards.into_iter().map(|card| view! {
                <div class="comment-item">
                    <h3>{card.name}</h3>
                    <p><strong>"Email:"</strong>" "{card.email}</p>
                    <p>{card.body}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
