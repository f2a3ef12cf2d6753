//! Description payload types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One route reachable beneath the requested scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub method: String,

    /// Route path relative to the requested scope, always rooted at `/`.
    #[serde(rename = "uri")]
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RouteInfo {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            description: None,
        }
    }
}

/// Routes in tree enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteList(Vec<RouteInfo>);

impl RouteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteInfo> {
        self.0.iter()
    }

    /// Stable sort by relative path; entries with equal paths keep their order.
    pub fn sort_by_path(&mut self) {
        self.0.sort_by(compare_paths);
    }
}

/// Byte-wise ordering on `path` only.
pub fn compare_paths(a: &RouteInfo, b: &RouteInfo) -> Ordering {
    a.path.as_bytes().cmp(b.path.as_bytes())
}

impl From<Vec<RouteInfo>> for RouteList {
    fn from(routes: Vec<RouteInfo>) -> Self {
        Self(routes)
    }
}

impl FromIterator<RouteInfo> for RouteList {
    fn from_iter<I: IntoIterator<Item = RouteInfo>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RouteList {
    type Item = RouteInfo;
    type IntoIter = std::vec::IntoIter<RouteInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RouteList {
    type Item = &'a RouteInfo;
    type IntoIter = std::slice::Iter<'a, RouteInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let list = RouteList::from(vec![RouteInfo::new("GET", "/hello/{id}")]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"method":"GET","uri":"/hello/{id}"}]"#);
    }

    #[test]
    fn test_description_serialized_when_present() {
        let mut info = RouteInfo::new("POST", "/");
        info.description = Some("create".into());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["description"], "create");
        assert_eq!(json["uri"], "/");
    }

    #[test]
    fn test_deserialize_without_description() {
        let list: RouteList =
            serde_json::from_str(r#"[{"method":"GET","uri":"/inner"}]"#).unwrap();
        assert_eq!(list, RouteList::from(vec![RouteInfo::new("GET", "/inner")]));
    }

    #[test]
    fn test_sort_by_path_is_stable() {
        let mut list: RouteList = vec![
            RouteInfo::new("POST", "/test/"),
            RouteInfo::new("GET", "/get"),
            RouteInfo::new("PUT", "/get"),
            RouteInfo::new("GET", "/Get"),
        ]
        .into();
        list.sort_by_path();

        let order: Vec<(&str, &str)> = list
            .iter()
            .map(|r| (r.method.as_str(), r.path.as_str()))
            .collect();
        // Uppercase sorts before lowercase byte-wise.
        assert_eq!(
            order,
            vec![("GET", "/Get"), ("GET", "/get"), ("PUT", "/get"), ("POST", "/test/")]
        );
    }
}
