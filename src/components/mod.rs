//! UI Components
//!
//! Leptos components for the dashboard shell and the route views.

mod breadcrumbs;
mod comments_view;
mod content_region;
mod delete_confirm_button;
mod nav_bar;
mod posts_view;
mod search_box;
mod states;
mod todos_view;
mod users_view;

pub use breadcrumbs::Breadcrumbs;
pub use comments_view::CommentsView;
pub use content_region::ContentRegion;
pub use delete_confirm_button::DeleteConfirmButton;
pub use nav_bar::NavBar;
pub use posts_view::PostsView;
pub use search_box::SearchBox;
pub use states::{ContentHeader, EmptyStateView, LoadingState, NotFound, StatsBlock};
pub use todos_view::TodosView;
pub use users_view::UsersView;
