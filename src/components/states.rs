//! Content States
//!
//! Building blocks shared by every route: placeholders, header and stats.

use leptos::prelude::*;

use crate::pages::{EmptyState, Stat};

#[component]
pub fn LoadingState(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner"></div>
            {message}
        </div>
    }
}

/// Fixed message for a route with nothing to show
#[component]
pub fn EmptyStateView(state: EmptyState) -> impl IntoView {
    view! {
        <div class="no-data">
            <div class="no-data-icon">{state.icon}</div>
            <h3>{state.title}</h3>
            <p>{state.hint}</p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="no-data">
            <div class="no-data-icon">"❓"</div>
            <h3>"Страница не найдена"</h3>
            <p>"Запрашиваемая страница не существует"</p>
            <a href="#users" class="btn">"Вернуться на главную"</a>
        </div>
    }
}

#[component]
pub fn ContentHeader(title: &'static str) -> impl IntoView {
    view! {
        <div class="content-header">
            <h2 class="content-title">{title}</h2>
        </div>
    }
}

#[component]
pub fn StatsBlock(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <div class="stats">
            {stats.into_iter().map(|stat| view! {
                <div class="stat-card">
                    <div class="stat-value">{stat.value}</div>
                    <div class="stat-label">{stat.label}</div>
                </div>
            }).collect_view()}
        </div>
    }
}
