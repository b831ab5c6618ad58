//! Leaderboard indexer client.
//!
//! The indexer exposes a GraphQL endpoint over the history of leaderboard
//! contract events. Requests are single POSTs of `{query, variables}`.

use itertools::Itertools;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

use crate::{error::LeaderboardError, transport::HttpTransport, types};

/// Leaderboard metadata together with one page of its scores.
pub const LIST_LEADERBOARDS_QUERY: &str = r#"
  query MyQuery(
    $label: String!
    $contractAddress: String!
    $pageNumber: Int!
    $pageSize: Int!
  ) {
    getLeaderboardByLabel(label: $label, contractAddress: $contractAddress) {
      contractAddress
      label
      isActive
      maxLimit
      startTime
      endTime
    }
    getScores(
      contractAddress: $contractAddress
      label: $label
      pageInfo: {pageNumber: $pageNumber, pageSize: $pageSize}
    ) {
      pageInfo {
        hasNextPage
        hasPreviousPage
        pageNumber
        pageSize
      }
      scores {
        contractAddress
        leaderboardLabel
        playerAddress
        rank
        score
        updatedAt
      }
    }
  }
"#;

#[derive(Serialize)]
struct QueryRequest<'a, V> {
    query: &'a str,
    variables: V,
}

/// GraphQL response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<QueryError>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QueryError {
    pub message: String,
}

impl<T> QueryResponse<T> {
    /// Returns the `data` field, or the reported errors if there is none.
    pub fn into_data(self) -> Result<T, LeaderboardError> {
        self.data.ok_or_else(|| {
            LeaderboardError::Indexer(if self.errors.is_empty() {
                "response has no data".to_string()
            } else {
                self.errors.iter().map(|e| &e.message).join("; ")
            })
        })
    }
}

/// Variables of [`LIST_LEADERBOARDS_QUERY`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLeaderboardsVariables<'a> {
    pub label: &'a str,
    pub contract_address: &'a str,
    pub page_number: u32,
    pub page_size: u32,
}

/// Posts `query` with `variables` to the indexer at `url` and parses the
/// response.
pub async fn fetch_query<H, V, T>(
    http: &H,
    url: &str,
    query: &str,
    variables: V,
) -> Result<T, LeaderboardError>
where
    H: HttpTransport,
    V: Serialize,
    T: DeserializeOwned,
{
    let url = Url::parse(url)?;
    let body = serde_json::to_value(QueryRequest { query, variables })?;
    let response = http.post_json(url, body).await?;
    Ok(serde_json::from_value(response)?)
}

/// Fetches leaderboard metadata and one page of scores.
pub async fn list_leaderboards<H: HttpTransport>(
    http: &H,
    url: &str,
    variables: ListLeaderboardsVariables<'_>,
) -> Result<types::ListLeaderboardsResponse, LeaderboardError> {
    fetch_query::<_, _, QueryResponse<_>>(http, url, LIST_LEADERBOARDS_QUERY, variables)
        .await?
        .into_data()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_errors_without_data() {
        let response: QueryResponse<types::ListLeaderboardsResponse> = serde_json::from_value(
            json!({"errors": [{"message": "unknown label"}, {"message": "bad page"}]}),
        )
        .unwrap();
        match response.into_data() {
            Err(LeaderboardError::Indexer(message)) => {
                assert_eq!(message, "unknown label; bad page")
            },
            other => panic!("unexpected result: {other:?}"),
        }

        let response: QueryResponse<types::ListLeaderboardsResponse> =
            serde_json::from_value(json!({"data": null})).unwrap();
        assert!(matches!(response.into_data(), Err(LeaderboardError::Indexer(_))));
    }

    #[test]
    fn test_variables_wire_names() {
        let variables = ListLeaderboardsVariables {
            label: "neighborhood-defense",
            contract_address: "0xF577588bF5B0AF78Cb92711C3Eb66e03383af275",
            page_number: 1,
            page_size: 10,
        };
        assert_eq!(
            serde_json::to_value(variables).unwrap(),
            json!({
                "label": "neighborhood-defense",
                "contractAddress": "0xF577588bF5B0AF78Cb92711C3Eb66e03383af275",
                "pageNumber": 1,
                "pageSize": 10,
            })
        );
    }
}
