//! Local Data Store
//!
//! Remote collections merged with a persisted overlay of locally created
//! users and todos. Mutations only ever touch the overlay.

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::RemoteSource;
use crate::config::AppConfig;
use crate::error::StorageError;
use crate::models::{Comment, NewTodo, NewUser, Origin, Post, Todo, User};
use crate::storage::KeyValueStore;

#[derive(Default)]
struct Overlay {
    users: Vec<User>,
    todos: Vec<Todo>,
    /// Last identifier handed out (or found in storage)
    last_id: u64,
}

/// Cloning yields another handle to the same overlay
#[derive(Clone)]
pub struct DataStore<R> {
    remote: R,
    storage: Rc<dyn KeyValueStore>,
    users_key: String,
    todos_key: String,
    overlay: Rc<RefCell<Overlay>>,
}

impl<R: RemoteSource> DataStore<R> {
    /// Reads both overlay slots once; later writes by other instances are not seen.
    pub fn new(remote: R, storage: Rc<dyn KeyValueStore>, config: &AppConfig) -> Self {
        let mut users: Vec<User> = load_slot(storage.as_ref(), &config.users_storage_key);
        let mut todos: Vec<Todo> = load_slot(storage.as_ref(), &config.todos_storage_key);
        users.iter_mut().for_each(|u| u.origin = Origin::Local);
        todos.iter_mut().for_each(|t| t.origin = Origin::Local);

        let last_id = users
            .iter()
            .map(|u| u.id)
            .chain(todos.iter().map(|t| t.id))
            .max()
            .unwrap_or(0);
        tracing::debug!("Loaded overlay: {} users, {} todos", users.len(), todos.len());

        Self {
            remote,
            storage,
            users_key: config.users_storage_key.clone(),
            todos_key: config.todos_storage_key.clone(),
            overlay: Rc::new(RefCell::new(Overlay { users, todos, last_id })),
        }
    }

    /// Remote users followed by local ones
    pub async fn users(&self) -> Vec<User> {
        let mut users = self.remote.users().await;
        users.extend(self.overlay.borrow().users.iter().cloned());
        users
    }

    /// Remote todos followed by local ones
    pub async fn todos(&self) -> Vec<Todo> {
        let mut todos = self.remote.todos().await;
        todos.extend(self.overlay.borrow().todos.iter().cloned());
        todos
    }

    pub async fn posts(&self) -> Vec<Post> {
        self.remote.posts().await
    }

    pub async fn comments(&self) -> Vec<Comment> {
        self.remote.comments().await
    }

    pub fn add_user(&self, new_user: NewUser) -> User {
        let mut overlay = self.overlay.borrow_mut();
        let user = User {
            id: issue_id(&mut overlay, now_millis()),
            name: new_user.name,
            email: new_user.email,
            phone: None,
            website: None,
            company: None,
            origin: Origin::Local,
        };
        overlay.users.push(user.clone());
        self.persist(&self.users_key, &overlay.users);
        tracing::info!("Added local user {}", user.id);
        user
    }

    pub fn add_todo(&self, new_todo: NewTodo) -> Todo {
        let mut overlay = self.overlay.borrow_mut();
        let todo = Todo {
            id: issue_id(&mut overlay, now_millis()),
            title: new_todo.title,
            completed: new_todo.completed,
            user_id: new_todo.user_id,
            origin: Origin::Local,
        };
        overlay.todos.push(todo.clone());
        self.persist(&self.todos_key, &overlay.todos);
        tracing::info!("Added local todo {} for user {}", todo.id, todo.user_id);
        todo
    }

    /// Removes a local user and that user's local todos. Remote todos are untouched.
    pub fn delete_user(&self, user_id: u64) {
        let mut overlay = self.overlay.borrow_mut();
        overlay.users.retain(|u| u.id != user_id);
        self.persist(&self.users_key, &overlay.users);

        let before = overlay.todos.len();
        overlay.todos.retain(|t| t.user_id != user_id);
        self.persist(&self.todos_key, &overlay.todos);
        tracing::info!(
            "Deleted local user {} and {} of their todos",
            user_id,
            before - overlay.todos.len()
        );
    }

    /// Rewrites a whole slot; a failed write leaves memory ahead of storage.
    fn persist<T: Serialize>(&self, key: &str, records: &[T]) {
        let result = serde_json::to_string(records)
            .map_err(|e| StorageError::Serialize {
                key: key.to_string(),
                message: e.to_string(),
            })
            .and_then(|json| self.storage.set(key, &json));
        if let Err(e) = result {
            tracing::error!("Failed to persist overlay: {}", e);
        }
    }
}

fn load_slot<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let json = match storage.get(key) {
        Ok(Some(json)) => json,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("Could not read `{}`: {}", key, e);
            return Vec::new();
        }
    };
    let raw = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&json) {
        Ok(raw) => raw.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Ignoring malformed `{}`: {}", key, e);
            return Vec::new();
        }
    };

    // A bad record is skipped on its own so the rest survive the next rewrite
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping record {} of `{}`: {}", index, key, e);
                None
            }
        })
        .collect()
}

/// Creation time in ms, bumped past the last id so ids stay strictly increasing
fn issue_id(overlay: &mut Overlay, now: u64) -> u64 {
    let id = now.max(overlay.last_id + 1);
    overlay.last_id = id;
    id
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;

    #[derive(Clone, Default)]
    struct FakeRemote {
        users: Vec<User>,
        todos: Vec<Todo>,
    }

    impl RemoteSource for FakeRemote {
        async fn users(&self) -> Vec<User> {
            self.users.clone()
        }
        async fn todos(&self) -> Vec<Todo> {
            self.todos.clone()
        }
        async fn posts(&self) -> Vec<Post> {
            vec![Post { id: 1, title: "p".into(), body: "b".into(), user_id: 1 }]
        }
        async fn comments(&self) -> Vec<Comment> {
            Vec::new()
        }
    }

    fn remote_user(id: u64) -> User {
        User {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            phone: None,
            website: None,
            company: None,
            origin: Origin::Remote,
        }
    }

    fn remote_todo(id: u64, user_id: u64) -> Todo {
        Todo { id, title: format!("Todo {}", id), completed: false, user_id, origin: Origin::Remote }
    }

    fn make_store(storage: &MemoryStorage) -> DataStore<FakeRemote> {
        let remote = FakeRemote {
            users: vec![remote_user(1), remote_user(2)],
            todos: vec![remote_todo(1, 1), remote_todo(2, 2)],
        };
        DataStore::new(remote, Rc::new(storage.clone()), &AppConfig::default())
    }

    #[test]
    fn test_users_remote_first_then_overlay() {
        let storage = MemoryStorage::new();
        let store = make_store(&storage);
        let added = store.add_user(NewUser { name: "Ann".into(), email: "a@x.com".into() });

        let users = block_on(store.users());
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[2], added);
        assert!(users[2].is_local());
        assert!(!users[0].is_local());
        assert_eq!(users[2].name, "Ann");
        assert_eq!(users[2].email, "a@x.com");
    }

    #[test]
    fn test_mutations_are_persisted_and_reloaded() {
        let storage = MemoryStorage::new();
        let store = make_store(&storage);
        store.add_user(NewUser { name: "Ann".into(), email: "a@x.com".into() });
        store.add_todo(NewTodo { title: "Write".into(), completed: true, user_id: 1 });

        let saved = storage.get("localTodos").unwrap().unwrap();
        assert!(saved.contains(r#""title":"Write""#));

        let reopened = make_store(&storage);
        assert_eq!(block_on(reopened.users()).len(), 3);
        let todos = block_on(reopened.todos());
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[2].origin, Origin::Local);
    }

    #[test]
    fn test_delete_user_cascades_to_local_todos_only() {
        let storage = MemoryStorage::new();
        let store = make_store(&storage);
        let ann = store.add_user(NewUser { name: "Ann".into(), email: "a@x.com".into() });
        let bob = store.add_user(NewUser { name: "Bob".into(), email: "b@x.com".into() });
        store.add_todo(NewTodo { title: "Ann's".into(), completed: false, user_id: ann.id });
        store.add_todo(NewTodo { title: "Bob's".into(), completed: false, user_id: bob.id });
        store.add_todo(NewTodo { title: "User 1's".into(), completed: false, user_id: 1 });

        store.delete_user(ann.id);

        let users = block_on(store.users());
        assert_eq!(users.len(), 3);
        assert!(users.iter().all(|u| u.id != ann.id));

        let titles: Vec<String> = block_on(store.todos()).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Todo 1", "Todo 2", "Bob's", "User 1's"]);

        // Deleting a remote user only touches local todos
        store.delete_user(1);
        let todos = block_on(store.todos());
        assert!(todos.iter().any(|t| t.id == 1 && t.user_id == 1));
        assert!(todos.iter().all(|t| t.title != "User 1's"));
        assert_eq!(block_on(store.users()).len(), 3);
    }

    #[test]
    fn test_ids_strictly_increase_within_one_millisecond() {
        let mut overlay = Overlay::default();
        let a = issue_id(&mut overlay, 1_700_000_000_000);
        let b = issue_id(&mut overlay, 1_700_000_000_000);
        let c = issue_id(&mut overlay, 1_699_999_999_999);
        assert!(a < b && b < c);

        let storage = MemoryStorage::new();
        let store = make_store(&storage);
        let first = store.add_user(NewUser { name: "A".into(), email: "a@x".into() });
        let second = store.add_todo(NewTodo { title: "T".into(), completed: false, user_id: 1 });
        assert!(second.id > first.id);
        assert!(first.id > 1000);
    }

    #[test]
    fn test_overlay_written_by_older_build_loads() {
        let storage = MemoryStorage::new();
        storage
            .set("localTodos", r#"[{"id":1700000000001,"title":"old","completed":false,"userId":"3"}]"#)
            .unwrap();
        storage.set("localUsers", "null").unwrap();

        let store = make_store(&storage);
        let todos = block_on(store.todos());
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[2].user_id, 3);
        assert_eq!(block_on(store.users()).len(), 2);

        // New ids continue above what was persisted
        let todo = store.add_todo(NewTodo { title: "new".into(), completed: false, user_id: 3 });
        assert!(todo.id > 1_700_000_000_001);
    }

    #[test]
    fn test_malformed_slot_yields_empty_overlay() {
        let storage = MemoryStorage::new();
        storage.set("localUsers", "{not json").unwrap();
        let store = make_store(&storage);
        assert_eq!(block_on(store.users()).len(), 2);
    }

    #[test]
    fn test_bad_record_does_not_cost_the_rest_of_the_slot() {
        let storage = MemoryStorage::new();
        storage
            .set(
                "localTodos",
                r#"[{"id":1700000000001,"title":"keep me","completed":false,"userId":3},
                    {"id":1700000000002,"completed":true,"userId":null},
                    {"id":1700000000003,"title":"no owner","completed":false,"userId":null}]"#,
            )
            .unwrap();

        let store = make_store(&storage);
        store.add_todo(NewTodo { title: "new".into(), completed: false, user_id: 1 });

        let saved = storage.get("localTodos").unwrap().unwrap();
        assert!(saved.contains(r#""title":"keep me""#));
        assert!(saved.contains(r#""title":"new""#));

        let local: Vec<Todo> = block_on(store.todos()).into_iter().filter(|t| t.origin == Origin::Local).collect();
        let titles: Vec<&str> = local.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["keep me", "no owner", "new"]);
        assert_eq!(local[1].user_id, 0);
    }

    #[test]
    fn test_posts_pass_through() {
        let storage = MemoryStorage::new();
        let store = make_store(&storage);
        assert_eq!(block_on(store.posts()).len(), 1);
        assert!(block_on(store.comments()).is_empty());
    }
}
