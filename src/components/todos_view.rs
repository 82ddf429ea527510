//! Todos View Component
//!
//! Todo list with completion stats and the add-todo form.

use leptos::prelude::*;

use crate::components::{ContentHeader, StatsBlock};
use crate::context::use_app_context;
use crate::models::NewTodo;
use crate::pages::{Stat, TodoCard};
use crate::utils::show_alert;

#[component]
pub fn TodosView(stats: Vec<Stat>, cards: Vec<TodoCard>, owner_id: u64) -> impl IntoView {
    view! {
        <ContentHeader title="Задачи" />
        <StatsBlock stats=stats />
        <AddTodoForm owner_id=owner_id />
        <div class="todos-list">
            {cards.into_iter().map(|card| {
                let status = if card.completed { "completed" } else { "pending" };
                let status_text = if card.completed { "Выполнено" } else { "В процессе" };
                view! {
                    <div class=format!("todo-item {}", status)>
                        <div class="todo-content">
                            <h3>{card.title}</h3>
                            <p>"ID пользователя: "{card.user_id}</p>
                        </div>
                        <div class="todo-status">
                            <span class=format!("status-badge status-{}", status)>{status_text}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// New todos belong to `owner_id`
#[component]
fn AddTodoForm(owner_id: u64) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (completed, set_completed) = signal(false);

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_todo = NewTodo {
            title: title.get_untracked(),
            completed: completed.get_untracked(),
            user_id: owner_id,
        };
        if let Err(e) = new_todo.validate() {
            show_alert(&e.to_string());
            return;
        }
        set_title.set(String::new());
        set_completed.set(false);
        ctx.add_todo(new_todo);
    };

    view! {
        <form class="add-todo-form" on:submit=add_todo>
            <h3>"Добавить задачу"</h3>
            <div class="form-group">
                <label for="todoTitle">"Название задачи"</label>
                <input
                    type="text"
                    id="todoTitle"
                    placeholder="Введите название задачи"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="checkbox-group">
                <input
                    type="checkbox"
                    id="todoCompleted"
                    prop:checked=move || completed.get()
                    on:change=move |ev| set_completed.set(event_target_checked(&ev))
                />
                <label for="todoCompleted">"Выполнено"</label>
            </div>
            <button type="submit" id="addTodoBtn" class="btn">"Добавить задачу"</button>
        </form>
    }
}
