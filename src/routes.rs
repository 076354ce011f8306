//! Client-side route table.
//!
//! DESIGN
//! ======
//! Routes are an ordered list of `(pattern, access, view)` entries resolved by
//! one matching function. Declaration order decides ties: the first matching
//! entry wins, and an unmatched path resolves to `NotFound`.
//!
//! The router's own `<Routes>` matcher is not used: each entry carries an
//! `Access` tag the guard needs, and the table must be resolvable in plain
//! unit tests without a reactive runtime. `leptos_router` still owns the
//! location and navigation.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A path pattern such as `/courses/:id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. `:name` segments capture; everything else is literal.
    pub fn parse(pattern: &str) -> Self {
        let segments = path_segments(pattern)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Param(name.to_owned()),
                _ => Segment::Static(segment.to_owned()),
            })
            .collect();
        Self { raw: pattern.to_owned(), segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a concrete path, returning captured parameters on success.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut params = Params::default();
        let mut parts = path_segments(path);
        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => params.0.push((name.clone(), part.to_owned())),
            }
        }
        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

/// Split a path into non-empty segments, ignoring any query or fragment.
fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty())
}

/// Named parameters captured from a matched path, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Behind the route guard. Any signed-in user passes; roles are not checked.
    Protected,
}

#[derive(Clone, Debug)]
pub struct RouteEntry<V> {
    pub pattern: RoutePattern,
    pub access: Access,
    pub view: V,
}

#[derive(Debug)]
pub enum Resolution<'a, V> {
    Matched { entry: &'a RouteEntry<V>, params: Params },
    NotFound,
}

/// Ordered route list, built once at startup.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn public(self, pattern: &str, view: V) -> Self {
        self.with(pattern, Access::Public, view)
    }

    #[must_use]
    pub fn protected(self, pattern: &str, view: V) -> Self {
        self.with(pattern, Access::Protected, view)
    }

    #[must_use]
    pub fn with(mut self, pattern: &str, access: Access, view: V) -> Self {
        self.entries.push(RouteEntry { pattern: RoutePattern::parse(pattern), access, view });
        self
    }

    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    /// First entry whose pattern matches `path`.
    pub fn resolve(&self, path: &str) -> Resolution<'_, V> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.matches(path).map(|params| Resolution::Matched { entry, params }))
            .unwrap_or(Resolution::NotFound)
    }
}
