//! Integration tests for the availability client (wiremock-based)

use domain::{PassengerDetail, TicketQuery};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_vale::{AvailabilityClient, ValeClient, ValeConfig, ValeError};

const SEARCH_PATH: &str = "/sgpweb/rest/externo/VendaInternet/publico/pesquisaDisponibilidadePortal";

fn client_for(server: &MockServer) -> ValeClient {
    let config = ValeConfig::for_testing(format!("{}{SEARCH_PATH}", server.uri()));
    ValeClient::new(&config).unwrap()
}

fn query() -> TicketQuery {
    TicketQuery {
        railway_code: 1,
        origin_code: 14,
        destination_code: 2,
        class_code: 1,
        outbound_ms: 1_716_087_600_000,
        return_ms: None,
        passengers: vec![PassengerDetail {
            detail_code: 33,
            quantity: 1,
            employee: false,
        }],
    }
}

const fn sample_availability_json() -> &'static str {
    r#"{
        "descricaoOrigem": "GOVERNADOR VALADARES",
        "descricaoDestino": "PEDRO NOLASCO",
        "passagensIda": [
            {"partidaProgramada": 1716051600000, "horaPartidaPrevista": "18/05/2024"},
            {"partidaProgramada": 1716224400000, "horaPartidaPrevista": "20/05/2024"},
            {"partidaProgramada": 1716310800000, "horaPartidaPrevista": "21/05/2024"}
        ]
    }"#
}

#[tokio::test]
async fn test_search_availability_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_availability_json()))
        .expect(1)
        .mount(&server)
        .await;

    let availability = client_for(&server)
        .search_availability(&query())
        .await
        .unwrap();

    assert_eq!(
        availability.origin_description.as_deref(),
        Some("GOVERNADOR VALADARES")
    );
    let displayed: Vec<&str> = availability
        .outbound
        .iter()
        .map(|d| d.displayed_departure.as_str())
        .collect();
    assert_eq!(displayed, ["18/05/2024", "20/05/2024", "21/05/2024"]);
}

#[tokio::test]
async fn test_search_sends_api_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_json(serde_json::json!({
            "codigoFerrovia": 1,
            "codigoLocalOrigem": 14,
            "codigoLocalDestino": 2,
            "dataIda": 1_716_087_600_000_i64,
            "detalheVenda": [{"detalhe": 33, "qtd": 1, "funcionario": false}],
            "codigoClasse": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).search_availability(&query()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_search_with_return_date() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"passagensIda": [], "passagensVolta": [
                {"partidaProgramada": 1716728400000, "horaPartidaPrevista": "26/05/2024"}
            ]}"#,
        ))
        .mount(&server)
        .await;

    let mut query = query();
    query.return_ms = Some(1_716_692_400_000);

    let availability = client_for(&server)
        .search_availability(&query)
        .await
        .unwrap();

    assert!(availability.outbound.is_empty());
    assert_eq!(availability.inbound.len(), 1);

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["dataVolta"], 1_716_692_400_000_i64);
}

#[tokio::test]
async fn test_search_empty_departures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"passagensIda": []}"#))
        .mount(&server)
        .await;

    let availability = client_for(&server)
        .search_availability(&query())
        .await
        .unwrap();

    assert!(availability.outbound.is_empty());
    assert!(availability.inbound.is_empty());
}

#[tokio::test]
async fn test_search_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string(sample_availability_json()))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search_availability(&query())
        .await
        .unwrap_err();

    assert!(matches!(err, ValeError::HttpStatus { status: 500 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_search_bad_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search_availability(&query())
        .await
        .unwrap_err();

    assert!(matches!(err, ValeError::HttpStatus { status: 400 }));
}

#[tokio::test]
async fn test_search_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search_availability(&query())
        .await
        .unwrap_err();

    assert!(matches!(err, ValeError::ParseError(_)));
}

#[tokio::test]
async fn test_search_connection_refused() {
    let config = ValeConfig::for_testing("http://127.0.0.1:1/search");
    let client = ValeClient::new(&config).unwrap();

    let err = client.search_availability(&query()).await.unwrap_err();

    assert!(matches!(
        err,
        ValeError::ConnectionFailed(_) | ValeError::Timeout { .. }
    ));
}
