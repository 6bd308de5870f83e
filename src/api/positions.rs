//! Resources for the positions collection.
use super::client::ApiClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the positions collection under the API base.
pub const PATH: &str = "/positions";

/// A position as returned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Position {
    #[serde(rename = "position_id")]
    pub id: i64,

    #[serde(rename = "position_code")]
    pub code: String,

    #[serde(rename = "position_name")]
    pub name: String,
}

/// Payload for creating or updating a position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionInit {
    pub code: String,
    pub name: String,
}

/// Fetches the full collection, in server order.
///
/// Callers replace their local collection wholesale with the returned
/// sequence. A body that is not an array is treated as an empty
/// collection.
pub async fn list(client: &ApiClient) -> Result<Vec<Position>> {
    let data: Value = client.get_json(PATH).await?;
    Ok(serde_json::from_value(data).unwrap_or_default())
}

pub async fn create(client: &ApiClient, position: &PositionInit) -> Result<()> {
    client.post(PATH, position).await
}

pub async fn update(client: &ApiClient, id: i64, position: &PositionInit) -> Result<()> {
    client.put(&format!("{PATH}/{id}"), position).await
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<()> {
    client.delete(&format!("{PATH}/{id}")).await
}

#[cfg(test)]
#[path = "./positions_test.rs"]
mod positions_test;
