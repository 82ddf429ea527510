//! Route Pages
//!
//! The per-route pipeline: fetch merged data, apply the parent filter and the
//! search filter, and reduce the result to what the content region shows.

use crate::api::RemoteSource;
use crate::data_store::DataStore;
use crate::filters::{filter_by_parent, filter_by_search, loose_id};
use crate::models::{Comment, Post, Todo, User};
use crate::router::{Location, Route};
use crate::utils::format_text;

const TODO_TITLE_MAX: usize = 60;
const POST_TITLE_MAX: usize = 80;
const POST_BODY_MAX: usize = 150;
const COMMENT_NAME_MAX: usize = 60;
const COMMENT_BODY_MAX: usize = 120;

const SEARCH_HINT: &str = "Попробуйте изменить поисковый запрос";

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: usize,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserCard {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: String,
    /// Only local users can be deleted
    pub is_local: bool,
}

impl UserCard {
    pub fn todos_href(&self) -> String {
        format!("#todos?userId={}", self.id)
    }

    pub fn posts_href(&self) -> String {
        format!("#posts?userId={}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoCard {
    pub id: u64,
    pub title: String,
    pub user_id: u64,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl PostCard {
    pub fn comments_href(&self) -> String {
        format!("#comments?postId={}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentCard {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// What the content region currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Loading(&'static str),
    Empty(EmptyState),
    NotFound,
    Users { stats: Vec<Stat>, cards: Vec<UserCard> },
    Todos { stats: Vec<Stat>, cards: Vec<TodoCard>, owner_id: u64 },
    Posts { stats: Vec<Stat>, cards: Vec<PostCard> },
    Comments { stats: Vec<Stat>, cards: Vec<CommentCard> },
}

impl Page {
    /// Placeholder shown synchronously while a route loads
    pub fn loading(route: &Route) -> Page {
        match route {
            Route::Users => Page::Loading("Загрузка пользователей..."),
            Route::Todos => Page::Loading("Загрузка задач..."),
            Route::Posts => Page::Loading("Загрузка постов..."),
            Route::Comments => Page::Loading("Загрузка комментариев..."),
            Route::NotFound(_) => Page::NotFound,
        }
    }
}

/// Fetches and builds the page for `route`
pub async fn load_page<R: RemoteSource>(
    store: &DataStore<R>,
    route: &Route,
    location: &Location,
    term: &str,
) -> Page {
    let parent = location.parent_filter(route);
    match route {
        Route::Users => users_page(store.users().await, term),
        Route::Todos => todos_page(store.todos().await, parent, term),
        Route::Posts => posts_page(store.posts().await, parent, term),
        Route::Comments => comments_page(store.comments().await, parent, term),
        Route::NotFound(_) => Page::NotFound,
    }
}

pub fn users_page(users: Vec<User>, term: &str) -> Page {
    let users = filter_by_search(users, term);
    if users.is_empty() {
        return Page::Empty(EmptyState { icon: "👥", title: "Пользователи не найдены", hint: SEARCH_HINT });
    }

    let stats = vec![
        Stat { value: users.len(), label: "Всего пользователей" },
        Stat { value: users.iter().filter(|u| u.is_local()).count(), label: "Локальные пользователи" },
    ];
    let cards = users
        .into_iter()
        .map(|user| UserCard {
            is_local: user.is_local(),
            id: user.id,
            phone: user.phone.unwrap_or_else(|| "Не указан".to_string()),
            website: user.website.unwrap_or_else(|| "Не указан".to_string()),
            company: user.company.map(|c| c.name).unwrap_or_else(|| "Не указана".to_string()),
            name: user.name,
            email: user.email,
        })
        .collect();
    Page::Users { stats, cards }
}

pub fn todos_page(todos: Vec<Todo>, user_id: Option<&str>, term: &str) -> Page {
    let todos = filter_by_parent(todos, user_id, |t| t.user_id);
    let todos = filter_by_search(todos, term);
    if todos.is_empty() {
        return Page::Empty(EmptyState { icon: "📝", title: "Задачи не найдены", hint: SEARCH_HINT });
    }

    let completed = todos.iter().filter(|t| t.completed).count();
    let stats = vec![
        Stat { value: todos.len(), label: "Всего задач" },
        Stat { value: completed, label: "Выполнено" },
        Stat { value: todos.len() - completed, label: "В процессе" },
    ];
    let cards = todos
        .into_iter()
        .map(|todo| TodoCard {
            id: todo.id,
            title: format_text(&todo.title, TODO_TITLE_MAX),
            user_id: todo.user_id,
            completed: todo.completed,
        })
        .collect();
    Page::Todos { stats, cards, owner_id: todo_owner(user_id) }
}

pub fn posts_page(posts: Vec<Post>, user_id: Option<&str>, term: &str) -> Page {
    let posts = filter_by_parent(posts, user_id, |p| p.user_id);
    let posts = filter_by_search(posts, term);
    if posts.is_empty() {
        return Page::Empty(EmptyState { icon: "📰", title: "Посты не найдены", hint: SEARCH_HINT });
    }

    let stats = vec![Stat { value: posts.len(), label: "Всего постов" }];
    let cards = posts
        .into_iter()
        .map(|post| PostCard {
            id: post.id,
            title: format_text(&post.title, POST_TITLE_MAX),
            body: format_text(&post.body, POST_BODY_MAX),
        })
        .collect();
    Page::Posts { stats, cards }
}

pub fn comments_page(comments: Vec<Comment>, post_id: Option<&str>, term: &str) -> Page {
    let comments = filter_by_parent(comments, post_id, |c| c.post_id);
    let comments = filter_by_search(comments, term);
    if comments.is_empty() {
        return Page::Empty(EmptyState { icon: "💬", title: "Комментарии не найдены", hint: SEARCH_HINT });
    }

    let stats = vec![Stat { value: comments.len(), label: "Всего комментариев" }];
    let cards = comments
        .into_iter()
        .map(|comment| CommentCard {
            id: comment.id,
            name: format_text(&comment.name, COMMENT_NAME_MAX),
            email: comment.email,
            body: format_text(&comment.body, COMMENT_BODY_MAX),
        })
        .collect();
    Page::Comments { stats, cards }
}

/// New todos go to the user being viewed, or user 1
pub fn todo_owner(user_id: Option<&str>) -> u64 {
    user_id.and_then(loose_id).filter(|&id| id != 0).unwrap_or(1)
}
