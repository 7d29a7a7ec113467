//! Hash-based routing for the admin console.
//!
//! URL format: `#/applications?team=WEB&page=2&size=20`,
//! `#/applications/42`, `#/application-forms`, `#/application-forms/new`,
//! `#/application-forms/7/edit`.

use crate::config::DEFAULT_PAGE_SIZE;

/// List-page query state carried in the URL hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Active team filter by name (`WEB`, `ANDROID`, ...), `None` for all.
    pub team: Option<String>,
    /// 1-based page number.
    pub page: u32,
    pub size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            team: None,
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Changing the size resets to page 1 so the view never lands on an
    /// out-of-range page.
    pub fn with_size(&self, size: u32) -> Self {
        Self {
            size,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_team(&self, team: Option<String>) -> Self {
        Self {
            team,
            page: 1,
            size: self.size,
        }
    }

    fn to_suffix(&self) -> String {
        let mut suffix = String::new();
        let mut sep = '?';
        if let Some(team) = self.team.as_deref() {
            suffix.push(sep);
            suffix.push_str("team=");
            suffix.push_str(team);
            sep = '&';
        }
        if self.page != 1 {
            suffix.push(sep);
            suffix.push_str(&format!("page={}", self.page));
            sep = '&';
        }
        if self.size != DEFAULT_PAGE_SIZE {
            suffix.push(sep);
            suffix.push_str(&format!("size={}", self.size));
        }
        suffix
    }

    fn from_query(query: &str) -> Self {
        let mut parsed = Self::default();
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "team" if !value.is_empty() => parsed.team = Some(value.to_string()),
                "page" => parsed.page = value.parse().unwrap_or(1).max(1),
                "size" => parsed.size = value.parse().unwrap_or(DEFAULT_PAGE_SIZE).max(1),
                _ => {}
            }
        }
        parsed
    }
}

/// Application routes for hash-based navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ApplicationList(ListQuery),
    ApplicationDetail { id: i64 },
    ApplicationFormList(ListQuery),
    ApplicationFormNew,
    ApplicationFormEdit { id: i64 },
    NotFound,
}

impl Route {
    /// Parse a URL hash into a route. The empty hash is the application list.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, q),
            None => (path, ""),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["applications"] => Self::ApplicationList(ListQuery::from_query(query)),
            ["applications", id] => match id.parse() {
                Ok(id) => Self::ApplicationDetail { id },
                Err(_) => Self::NotFound,
            },
            ["application-forms"] => Self::ApplicationFormList(ListQuery::from_query(query)),
            ["application-forms", "new"] => Self::ApplicationFormNew,
            ["application-forms", id, "edit"] => match id.parse() {
                Ok(id) => Self::ApplicationFormEdit { id },
                Err(_) => Self::NotFound,
            },
            _ => Self::NotFound,
        }
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::ApplicationList(query) => format!("#/applications{}", query.to_suffix()),
            Self::ApplicationDetail { id } => format!("#/applications/{}", id),
            Self::ApplicationFormList(query) => {
                format!("#/application-forms{}", query.to_suffix())
            }
            Self::ApplicationFormNew => "#/application-forms/new".to_string(),
            Self::ApplicationFormEdit { id } => format!("#/application-forms/{}/edit", id),
            Self::NotFound => "#/".to_string(),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update the browser URL to match this route (adds a history entry).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let hash = self.to_hash();
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&hash));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(
            Route::from_hash(""),
            Route::ApplicationList(ListQuery::default())
        );
        assert_eq!(
            Route::from_hash("#/"),
            Route::ApplicationList(ListQuery::default())
        );
        assert_eq!(
            Route::from_hash("#/applications?team=WEB&page=2&size=50"),
            Route::ApplicationList(ListQuery {
                team: Some("WEB".to_string()),
                page: 2,
                size: 50,
            })
        );
        assert_eq!(
            Route::from_hash("#/applications/42"),
            Route::ApplicationDetail { id: 42 }
        );
        assert_eq!(
            Route::from_hash("#/application-forms/7/edit"),
            Route::ApplicationFormEdit { id: 7 }
        );
        assert_eq!(Route::from_hash("#/applications/nope"), Route::NotFound);
        assert_eq!(Route::from_hash("#/unknown/thing"), Route::NotFound);
    }

    #[test]
    fn test_route_hash_round_trip() {
        let routes = [
            Route::ApplicationList(ListQuery {
                team: Some("ANDROID".to_string()),
                page: 3,
                size: 50,
            }),
            Route::ApplicationList(ListQuery::default()),
            Route::ApplicationDetail { id: 7 },
            Route::ApplicationFormList(ListQuery::default()),
            Route::ApplicationFormNew,
            Route::ApplicationFormEdit { id: 12 },
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_default_query_renders_bare_path() {
        let route = Route::ApplicationList(ListQuery::default());
        assert_eq!(route.to_hash(), "#/applications");
    }

    #[test]
    fn test_with_size_resets_page() {
        let query = ListQuery {
            team: None,
            page: 4,
            size: 20,
        };
        let resized = query.with_size(50);
        assert_eq!(resized.page, 1);
        assert_eq!(resized.size, 50);
    }

    #[test]
    fn test_malformed_query_values_fall_back() {
        let query = ListQuery::from_query("page=zero&size=&team=");
        assert_eq!(query, ListQuery::default());
    }
}
