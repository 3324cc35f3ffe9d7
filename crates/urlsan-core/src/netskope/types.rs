//! Wire models for the Netskope URL-list API (`/api/v2/policy/urllist`).

use serde::{Deserialize, Serialize};

/// One URL list as returned by the tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlList {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub modify_by: Option<String>,
    #[serde(default)]
    pub modify_time: Option<String>,
    /// 1 when the list has undeployed changes.
    #[serde(default)]
    pub pending: Option<u64>,
    #[serde(default)]
    pub data: Option<UrlListData>,
}

/// The entries and match type of a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlListData {
    /// "exact" or "regex"; sanitized lists are always "exact".
    #[serde(rename = "type", default = "exact")]
    pub list_type: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

fn exact() -> String {
    "exact".to_string()
}

impl Default for UrlListData {
    fn default() -> Self {
        Self {
            list_type: exact(),
            urls: Vec::new(),
        }
    }
}

/// Body for replacing a list (PUT).
#[derive(Debug, Clone, Serialize)]
pub struct UrlListPayload {
    pub name: String,
    pub data: UrlListData,
}

/// The list-all endpoint answers either a bare array or `{"data": [...]}`
/// depending on tenant version; accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UrlListsResponse {
    Plain(Vec<UrlList>),
    Wrapped { data: Vec<UrlList> },
}

impl UrlListsResponse {
    pub fn into_lists(self) -> Vec<UrlList> {
        match self {
            UrlListsResponse::Plain(lists) => lists,
            UrlListsResponse::Wrapped { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_list_with_data() {
        let json = r#"{
            "id": 42,
            "name": "Blocked sites",
            "modify_by": "admin@example.com",
            "modify_time": "2024-05-01 10:00:00",
            "pending": 1,
            "data": {"type": "exact", "urls": ["example.com", "*.google.com"]}
        }"#;
        let list: UrlList = serde_json::from_str(json).unwrap();
        assert_eq!(list.id, 42);
        assert_eq!(list.name, "Blocked sites");
        assert_eq!(list.pending, Some(1));
        let data = list.data.unwrap();
        assert_eq!(data.list_type, "exact");
        assert_eq!(data.urls.len(), 2);
    }

    #[test]
    fn deserialize_list_with_sparse_fields() {
        let json = r#"{"id": 7, "name": "Minimal"}"#;
        let list: UrlList = serde_json::from_str(json).unwrap();
        assert_eq!(list.id, 7);
        assert!(list.modify_by.is_none());
        assert!(list.data.is_none());
    }

    #[test]
    fn list_all_accepts_both_shapes() {
        let plain = r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]"#;
        let wrapped = r#"{"data": [{"id": 3, "name": "c"}]}"#;
        let p: UrlListsResponse = serde_json::from_str(plain).unwrap();
        let w: UrlListsResponse = serde_json::from_str(wrapped).unwrap();
        assert_eq!(p.into_lists().len(), 2);
        assert_eq!(w.into_lists()[0].id, 3);
    }

    #[test]
    fn payload_serializes_with_type_key() {
        let payload = UrlListPayload {
            name: "Sanitized".to_string(),
            data: UrlListData {
                list_type: "exact".to_string(),
                urls: vec!["example.com".to_string()],
            },
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""type":"exact""#));
        assert!(json.contains(r#""urls":["example.com"]"#));
    }
}
