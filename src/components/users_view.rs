//! Users View Component
//!
//! User cards with the add-user form and delete for local users.

use leptos::prelude::*;

use crate::components::{ContentHeader, DeleteConfirmButton, StatsBlock};
use crate::context::use_app_context;
use crate::models::NewUser;
use crate::pages::{Stat, UserCard};
use crate::utils::show_alert;

#[component]
pub fn UsersView(stats: Vec<Stat>, cards: Vec<UserCard>) -> impl IntoView {
    view! {
        <ContentHeader title="Пользователи" />
        <StatsBlock stats=stats />
        <AddUserForm />
        <div class="users-list">
            {cards.into_iter().map(|card| view! { <UserCardView card=card /> }).collect_view()}
        </div>
    }
}

#[component]
fn AddUserForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let add_user = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_user = NewUser { name: name.get_untracked(), email: email.get_untracked() };
        if let Err(e) = new_user.validate() {
            show_alert(&e.to_string());
            return;
        }
        set_name.set(String::new());
        set_email.set(String::new());
        ctx.add_user(new_user);
    };

    view! {
        <form class="add-user-form" on:submit=add_user>
            <h3>"Добавить пользователя"</h3>
            <div class="form-row">
                <div class="form-group">
                    <label for="userName">"Имя"</label>
                    <input
                        type="text"
                        id="userName"
                        placeholder="Введите имя"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="userEmail">"Email"</label>
                    <input
                        type="email"
                        id="userEmail"
                        placeholder="Введите email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <button type="submit" id="addUserBtn" class="btn">"Добавить пользователя"</button>
        </form>
    }
}

#[component]
fn UserCardView(card: UserCard) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;
    let todos_href = card.todos_href();
    let posts_href = card.posts_href();

    view! {
        <div class="user-card">
            <h3>{card.name}</h3>
            <p><strong>"Email:"</strong>" "{card.email}</p>
            <p><strong>"Телефон:"</strong>" "{card.phone}</p>
            <p><strong>"Вебсайт:"</strong>" "{card.website}</p>
            <p><strong>"Компания:"</strong>" "{card.company}</p>
            <div class="user-card-links">
                <a href=todos_href class="btn btn-small">"Задачи"</a>
                <a href=posts_href class="btn btn-small">"Посты"</a>
            </div>
            {card.is_local.then(|| view! {
                <DeleteConfirmButton
                    label="Удалить пользователя"
                    on_confirm=Callback::new(move |_| ctx.delete_user(id))
                />
            })}
        </div>
    }
}
