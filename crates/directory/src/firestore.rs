use super::*;
use anyhow::Context;
use lnt_core::STORE_PAGE_SIZE;
use lnt_core::StoreConfig;
use reqwest::StatusCode;
use reqwest::Url;
use serde_json::Map;
use serde_json::Value;

/// [`Store`] backed by the Firestore REST API.
///
/// Collections are always read whole, page by page. Filtering happens in
/// the [`Directory`] so no composite index has to exist on the project.
pub struct Firestore {
    http: reqwest::Client,
    root: Url,
    key: Option<String>,
}

#[derive(serde::Deserialize)]
struct Page {
    #[serde(default)]
    documents: Vec<Raw>,
    #[serde(default, rename = "nextPageToken")]
    next: Option<String>,
}

#[derive(serde::Deserialize)]
struct Raw {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl From<Raw> for Document {
    fn from(raw: Raw) -> Self {
        Self {
            id: raw
                .name
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
            fields: plain_fields(raw.fields),
        }
    }
}

impl Firestore {
    pub fn new(config: &StoreConfig, timeout: std::time::Duration) -> anyhow::Result<Self> {
        let mut root = Url::parse(&config.url).context("invalid FIRESTORE_URL")?;
        root.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("FIRESTORE_URL cannot be a base"))?
            .clear()
            .extend([
                "v1",
                "projects",
                config.project.as_str(),
                "databases",
                config.database.as_str(),
                "documents",
            ]);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build firestore client")?;
        Ok(Self {
            http,
            root,
            key: config.key.clone(),
        })
    }

    fn url(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("firestore root cannot be a base"))?
            .extend(segments);
        Ok(url)
    }

    fn keyed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl Store for Firestore {
    async fn list(&self, collection: &str) -> anyhow::Result<Vec<Document>> {
        let url = self.url(&[collection])?;
        let mut documents = Vec::new();
        let mut token: Option<String> = None;
        loop {
            let mut request = self
                .http
                .get(url.clone())
                .query(&[("pageSize", STORE_PAGE_SIZE.to_string())]);
            if let Some(ref token) = token {
                request = request.query(&[("pageToken", token)]);
            }
            let page = self
                .keyed(request)
                .send()
                .await
                .with_context(|| format!("list {}", collection))?
                .error_for_status()
                .with_context(|| format!("list {}", collection))?
                .json::<Page>()
                .await
                .with_context(|| format!("decode {} page", collection))?;
            documents.extend(page.documents.into_iter().map(Document::from));
            match page.next.filter(|t| !t.is_empty()) {
                Some(next) => token = Some(next),
                None => break,
            }
        }
        log::debug!("fetched {} documents from {}", documents.len(), collection);
        Ok(documents)
    }

    async fn get(&self, collection: &str, id: &str) -> anyhow::Result<Option<Document>> {
        let url = self.url(&[collection, id])?;
        let response = self
            .keyed(self.http.get(url))
            .send()
            .await
            .with_context(|| format!("get {}/{}", collection, id))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response
            .error_for_status()
            .with_context(|| format!("get {}/{}", collection, id))?
            .json::<Raw>()
            .await
            .map(Document::from)
            .map(Some)
            .with_context(|| format!("decode {}/{}", collection, id))
    }
}

/// Reduces a Firestore `fields` map of typed values to plain JSON.
pub fn plain_fields(fields: Map<String, Value>) -> Map<String, Value> {
    fields.into_iter().map(|(k, v)| (k, plain(v))).collect()
}

/// Reduces one typed value, e.g. `{"integerValue": "3"}`, to plain JSON.
pub fn plain(value: Value) -> Value {
    let Value::Object(typed) = value else {
        return value;
    };
    let Some((kind, inner)) = typed.into_iter().next() else {
        return Value::Null;
    };
    match kind.as_str() {
        "nullValue" => Value::Null,
        "integerValue" => inner
            .as_str()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Value::from)
            .unwrap_or(inner),
        "mapValue" => match inner {
            Value::Object(mut map) => match map.remove("fields") {
                Some(Value::Object(fields)) => Value::Object(plain_fields(fields)),
                _ => Value::Object(Map::new()),
            },
            _ => Value::Object(Map::new()),
        },
        "arrayValue" => match inner {
            Value::Object(mut array) => match array.remove("values") {
                Some(Value::Array(values)) => Value::Array(values.into_iter().map(plain).collect()),
                _ => Value::Array(Vec::new()),
            },
            _ => Value::Array(Vec::new()),
        },
        _ => inner,
    }
}
