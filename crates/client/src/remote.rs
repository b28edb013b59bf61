//! HTTP-backed example repository.

use skeletor_core::ExampleId;
use skeletor_example::{
    CreateExample, ExampleItem, ExampleRepository, ListParams, RepositoryError, UpdateExample,
};

use crate::error::{ApiError, ClientError};
use crate::http::HttpClient;

/// The second [`ExampleRepository`] variant: the same four-operation contract
/// served by a real backend at `/examples`. Callers cannot tell it apart from
/// the local-storage stand-in.
pub struct HttpExampleRepository {
    client: HttpClient,
}

impl HttpExampleRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    fn item_path(id: &ExampleId) -> String {
        format!("/examples/{id}")
    }
}

fn map_err(err: ClientError) -> RepositoryError {
    match err {
        ClientError::Api(ApiError {
            status,
            message,
            details,
        }) => RepositoryError::Api {
            status,
            message,
            details,
        },
        ClientError::Transport(e) => RepositoryError::Transport(e.to_string()),
    }
}

/// A 404 from the backend is a miss, not an error.
fn absent_on_404<T>(result: Result<T, ClientError>) -> Result<Option<T>, RepositoryError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ClientError::Api(ApiError { status: 404, .. })) => Ok(None),
        Err(e) => Err(map_err(e)),
    }
}

#[async_trait::async_trait]
impl ExampleRepository for HttpExampleRepository {
    async fn list(&self, params: ListParams) -> Result<Vec<ExampleItem>, RepositoryError> {
        let result = match params.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => {
                self.client
                    .get_query("/examples", &[("search", s)])
                    .await
            }
            _ => self.client.get("/examples").await,
        };
        result.map_err(map_err)
    }

    async fn get(&self, id: &ExampleId) -> Result<Option<ExampleItem>, RepositoryError> {
        absent_on_404(self.client.get(&Self::item_path(id)).await)
    }

    async fn create(&self, payload: CreateExample) -> Result<ExampleItem, RepositoryError> {
        self.client.post("/examples", &payload).await.map_err(map_err)
    }

    async fn update(
        &self,
        id: &ExampleId,
        payload: UpdateExample,
    ) -> Result<Option<ExampleItem>, RepositoryError> {
        absent_on_404(self.client.patch(&Self::item_path(id), &payload).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_carry_status_message_and_details() {
        let err = map_err(ClientError::Api(ApiError {
            status: 403,
            message: "forbidden".into(),
            details: Some(serde_json::json!({"required_role": "ADMIN"})),
        }));
        match err {
            RepositoryError::Api {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 403);
                assert_eq!(message, "forbidden");
                assert_eq!(details.unwrap()["required_role"], "ADMIN");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn a_404_maps_to_an_absent_result() {
        let result: Result<Option<ExampleItem>, _> = absent_on_404(Err(ClientError::Api(ApiError {
            status: 404,
            message: "not found".into(),
            details: None,
        })));
        assert!(matches!(result, Ok(None)));
    }
}
