//! Integration tests for the embedding adapter against a mock server.

use genprompt::config::{VertexConfig, VertexEmbeddingOptions};
use genprompt::providers::VertexEmbeddingClient;
use genprompt::{EmbeddingClient, Error};
use mockito::Matcher;
use serde_json::json;

fn test_config(base_url: &str) -> VertexConfig {
    VertexConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        ..VertexConfig::default()
    }
}

#[tokio::test]
async fn test_embed_maps_the_value_vector() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/embedding-gecko-001:embedText")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::Json(json!({"text": "hello world"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"embedding":{"value":[0.25,-0.5,0.125]}}"#)
        .create_async()
        .await;

    let client = VertexEmbeddingClient::from_config(&test_config(&server.url())).unwrap();
    let vector = client.embed("hello world").await.expect("embed should succeed");

    mock.assert_async().await;
    assert_eq!(vector, vec![0.25, -0.5, 0.125]);
}

#[tokio::test]
async fn test_embed_batch_preserves_input_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/embedding-gecko-001:batchEmbedText")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({"texts": ["first", "second"]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"embeddings":[{"value":[1.0]},{"value":[2.0]}]}"#)
        .create_async()
        .await;

    let client = VertexEmbeddingClient::from_config(&test_config(&server.url())).unwrap();
    let texts = vec!["first".to_string(), "second".to_string()];
    let vectors = client.embed_batch(&texts).await.unwrap();

    mock.assert_async().await;
    assert_eq!(vectors, vec![vec![1.0], vec![2.0]]);
}

#[tokio::test]
async fn test_missing_embedding_field_is_unexpected_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/embedding-gecko-001:embedText")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = VertexEmbeddingClient::from_config(&test_config(&server.url())).unwrap();
    let err = client.embed("hello").await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_configured_model_selects_the_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/embedding-gecko-002:embedText")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"embedding":{"value":[0.0]}}"#)
        .create_async()
        .await;

    let config = VertexConfig {
        embedding: VertexEmbeddingOptions {
            model: "embedding-gecko-002".to_string(),
        },
        ..test_config(&server.url())
    };
    let client = VertexEmbeddingClient::from_config(&config).unwrap();
    client.embed("hello").await.unwrap();

    mock.assert_async().await;
}
