//! Hash Router
//!
//! Parses `#route[/segments][?key=value]` fragments into a `Location`
//! and resolves the closed set of dashboard routes.

use percent_encoding::percent_decode_str;

/// Dashboard views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Users,
    Todos,
    Posts,
    Comments,
    /// Unrecognized non-empty path
    NotFound(String),
}

impl Route {
    /// Navigation order
    pub const NAV: [Route; 4] = [Route::Users, Route::Todos, Route::Posts, Route::Comments];

    pub fn from_name(name: &str) -> Option<Route> {
        match name {
            "users" => Some(Route::Users),
            "todos" => Some(Route::Todos),
            "posts" => Some(Route::Posts),
            "comments" => Some(Route::Comments),
            _ => None,
        }
    }

    /// Path a route is reached by
    pub fn name(&self) -> &str {
        match self {
            Route::Users => "users",
            Route::Todos => "todos",
            Route::Posts => "posts",
            Route::Comments => "comments",
            Route::NotFound(path) => path.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Route::Users => "Пользователи",
            Route::Todos => "Задачи",
            Route::Posts => "Посты",
            Route::Comments => "Комментарии",
            Route::NotFound(path) => path.as_str(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.name())
    }

    /// Query key naming the parent record, if the route filters by one
    pub fn parent_key(&self) -> Option<&'static str> {
        match self {
            Route::Todos | Route::Posts => Some("userId"),
            Route::Comments => Some("postId"),
            Route::Users | Route::NotFound(_) => None,
        }
    }
}

/// One breadcrumb; the current page has no link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

/// Parsed address fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Everything before `?`
    pub path: String,
    query: Vec<(String, String)>,
}

impl Location {
    pub fn parse(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        // Only the text up to a second `?` is query
        let mut sections = fragment.split('?');
        let path = sections.next().unwrap_or_default();
        let query = sections.next().unwrap_or_default();
        Self {
            path: path.to_string(),
            query: parse_query(query),
        }
    }

    /// First value for `key`, decoded
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The whole path names the route; empty falls back to `default_route`
    pub fn route(&self, default_route: &str) -> Route {
        let name = if self.path.is_empty() { default_route } else { self.path.as_str() };
        Route::from_name(name).unwrap_or_else(|| Route::NotFound(name.to_string()))
    }

    /// Whether the nav link for `route` is highlighted: exact route match only
    pub fn is_active(&self, route: &Route, default_route: &str) -> bool {
        self.route(default_route) == *route
    }

    /// Parent filter value for the route, if any
    pub fn parent_filter(&self, route: &Route) -> Option<&str> {
        route.parent_key().and_then(|key| self.query(key))
    }

    /// Home link, then one crumb per non-empty path part. Only the part at the
    /// last index is left unlinked.
    pub fn breadcrumbs(&self, home: &Route) -> Vec<Crumb> {
        let mut crumbs = vec![Crumb {
            label: "Главная".to_string(),
            href: Some(home.href()),
        }];
        if self.path.is_empty() {
            return crumbs;
        }

        let parts: Vec<&str> = self.path.split('/').collect();
        for (index, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let label = Route::from_name(part)
                .map(|r| r.label().to_string())
                .unwrap_or_else(|| part.to_string());
            let href = (index < parts.len() - 1).then(|| format!("#{}", parts[..=index].join("/")));
            crumbs.push(Crumb { label, href });
        }
        crumbs
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Location of the current page
pub fn current_location() -> Location {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Location::parse(&hash)
}
