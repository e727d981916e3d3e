use crate::config::{Credentials, GatewayConfig};
use crate::gateway::models::{
    CollectionSummary, DocumentRecord, Health, IndexStatus, SearchPage,
};
use crate::gateway::store_size::parse_store_size;
use crate::gateway::{DEFAULT_PAGE_SIZE, GatewayError, SearchGateway};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// [`SearchGateway`] backed by the Elasticsearch REST API
pub struct ElasticGateway {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatIndexRow {
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub index: String,
    #[serde(rename = "docs.count", default)]
    pub docs_count: Option<String>,
    #[serde(rename = "store.size", default)]
    pub store_size: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub hits: HitsEnvelope,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HitsEnvelope {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Hit {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct IndexResponse {
    #[serde(rename = "_id")]
    id: String,
}

impl ElasticGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&config.url).map_err(|e| GatewayError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl {
                url: config.url.clone(),
                reason: "not a base url".to_string(),
            });
        }

        let mut headers = header::HeaderMap::new();
        if let Credentials::ApiKey(key) = &config.credentials {
            let mut value = header::HeaderValue::from_str(&format!("ApiKey {key}"))
                .map_err(|e| GatewayError::Validation(format!("invalid api key: {e}")))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials: config.credentials.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base url
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "not a base url".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.credentials {
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            _ => builder,
        }
    }

    async fn send(&self, operation: &str, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            };
            return Err(GatewayError::Backend {
                operation: operation.to_string(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl SearchGateway for ElasticGateway {
    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, GatewayError> {
        let mut url = self.endpoint(&["_cat", "indices"])?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("bytes", "b");

        debug!("listing indices");
        let response = self
            .send("list indices", self.request(Method::GET, url))
            .await?;
        let rows: Vec<CatIndexRow> = Self::decode(response).await?;
        Ok(rows.into_iter().map(summary_from_row).collect())
    }

    async fn search_page(
        &self,
        collection: &str,
        query: &str,
        page_size: usize,
    ) -> Result<SearchPage, GatewayError> {
        let mut url = self.endpoint(&[collection, "_search"])?;
        url.query_pairs_mut().append_pair("track_total_hits", "false");

        debug!(index = collection, query, page_size, "searching");
        let started = Instant::now();
        let response = self
            .send(
                &format!("search {collection}"),
                self.request(Method::POST, url)
                    .json(&search_body(query, page_size)),
            )
            .await?;
        let decoded: SearchResponse = Self::decode(response).await?;
        Ok(page_from_response(decoded, started.elapsed()))
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        body: &str,
    ) -> Result<String, GatewayError> {
        if serde_json::from_str::<Value>(body).is_err() {
            return Err(GatewayError::Validation("body must be valid JSON".to_string()));
        }

        let id = id.trim();
        let (method, url) = if id.is_empty() {
            (Method::POST, self.endpoint(&[collection, "_doc"])?)
        } else {
            (Method::PUT, self.endpoint(&[collection, "_doc", id])?)
        };

        debug!(index = collection, id, "indexing document");
        let response = self
            .send(
                "create doc",
                self.request(method, url)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body.to_string()),
            )
            .await?;
        let decoded: IndexResponse = Self::decode(response).await?;
        Ok(decoded.id)
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), GatewayError> {
        if id.trim().is_empty() {
            return Err(GatewayError::Validation("document id required".to_string()));
        }

        let url = self.endpoint(&[collection, "_doc", id])?;
        debug!(index = collection, id, "deleting document");
        self.send("delete doc", self.request(Method::DELETE, url))
            .await?;
        Ok(())
    }

    async fn refresh_index(&self, collection: &str) -> Result<(), GatewayError> {
        let url = self.endpoint(&[collection, "_refresh"])?;
        self.send("refresh index", self.request(Method::POST, url))
            .await?;
        Ok(())
    }

    async fn list_field_names(&self, collection: &str) -> Result<Vec<String>, GatewayError> {
        let url = self.endpoint(&[collection, "_mapping"])?;
        let response = self
            .send(&format!("fields {collection}"), self.request(Method::GET, url))
            .await?;
        let decoded: Value = Self::decode(response).await?;
        Ok(mapping_field_names(&decoded))
    }
}

pub(crate) fn summary_from_row(row: CatIndexRow) -> CollectionSummary {
    let store_size = row.store_size.unwrap_or_default();
    CollectionSummary {
        health: Health::parse(row.health.as_deref().unwrap_or_default()),
        status: IndexStatus::parse(row.status.as_deref().unwrap_or_default()),
        docs_count: row
            .docs_count
            .as_deref()
            .and_then(|count| count.trim().parse().ok())
            .unwrap_or(0),
        store_bytes: parse_store_size(&store_size),
        store_size,
        name: row.index,
    }
}

pub(crate) fn search_body(query: &str, page_size: usize) -> Value {
    let size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let query = query.trim();
    if query.is_empty() {
        json!({ "size": size, "query": { "match_all": {} } })
    } else {
        json!({ "size": size, "query": { "query_string": { "query": query } } })
    }
}

pub(crate) fn page_from_response(decoded: SearchResponse, elapsed: Duration) -> SearchPage {
    let documents = decoded
        .hits
        .hits
        .into_iter()
        .map(|hit| DocumentRecord {
            id: hit.id,
            source: source_to_payload(hit.source),
        })
        .collect();

    let took = if decoded.took == 0 {
        elapsed
    } else {
        Duration::from_millis(decoded.took)
    };

    SearchPage { documents, took }
}

/// Non-object sources are kept verbatim under a `_source` key
pub(crate) fn source_to_payload(source: Option<Value>) -> Map<String, Value> {
    match source {
        Some(Value::Object(map)) => map,
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            let mut map = Map::new();
            map.insert("_source".to_string(), Value::String(other.to_string()));
            map
        }
    }
}

/// Flattened field names from a `GET /{index}/_mapping` response
pub(crate) fn mapping_field_names(decoded: &Value) -> Vec<String> {
    let mut fields = BTreeSet::new();
    if let Some(indices) = decoded.as_object() {
        for index in indices.values() {
            if let Some(mappings) = index.get("mappings").and_then(Value::as_object) {
                collect_mapping_fields("", mappings, &mut fields);
            }
        }
    }
    fields.into_iter().collect()
}

fn collect_mapping_fields(prefix: &str, node: &Map<String, Value>, out: &mut BTreeSet<String>) {
    for key in ["properties", "fields"] {
        let Some(children) = node.get(key).and_then(Value::as_object) else {
            continue;
        };
        for (name, child) in children {
            let field = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            if let Some(child) = child.as_object() {
                collect_mapping_fields(&field, child, out);
            }
            out.insert(field);
        }
    }
}
