use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A movie as returned by YTS. Every field is optional: the list endpoint
/// returns summaries and the details endpoint the full record, and neither
/// guarantees any particular field.
///
/// A field whose value has the wrong type decodes as `None` instead of
/// failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(feature = "graphql", graphql(rename_fields = "snake_case"))]
#[serde(default)]
pub struct Movie {
    #[serde(deserialize_with = "lenient_int")]
    pub id: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_int")]
    pub year: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub rating: Option<f64>,
    /// Minutes.
    #[serde(deserialize_with = "lenient_int")]
    pub runtime: Option<i32>,
    #[serde(deserialize_with = "lenient_list")]
    pub genres: Option<Vec<Option<String>>>,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub medium_cover_image: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub torrents: Option<Vec<Option<Torrent>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(default)]
pub struct Torrent {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    /// Resolution label, e.g. `1080p`.
    #[serde(deserialize_with = "lenient")]
    pub quality: Option<String>,
    /// Human readable, e.g. `1.65 GB`.
    #[serde(deserialize_with = "lenient")]
    pub size: Option<String>,
}

/// `data` payload of `list_movies.json`.
///
/// YTS leaves out `movies` entirely when the result set is empty. Entries
/// that are not objects come through as `None` in their original position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieListData {
    pub movie_count: Option<i64>,
    pub limit: Option<i64>,
    pub page_number: Option<i64>,
    #[serde(default, deserialize_with = "nullable_entries")]
    pub movies: Vec<Option<Movie>>,
}

/// `data` payload of `movie_details.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetailsData {
    pub movie: Option<Movie>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Integers, plus floats with no fractional part (`88.0`), within `i32` range.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Number(n) = value else {
        return Ok(None);
    };
    if let Some(v) = n.as_i64() {
        return Ok(i32::try_from(v).ok());
    }
    Ok(n
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
        .map(|f| f as i32))
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

/// Must be an array (or null); individual entries never fail the list.
fn nullable_entries<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Outer envelope shared by every YTS endpoint. `data` is kept raw so the
/// status can be inspected before the payload is typed; error responses
/// carry a `data` that does not match the success shape.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub status: Option<String>,
    pub status_message: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}
