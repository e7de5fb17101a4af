//! Wire models of the availability API
//!
//! Field names follow the API's Portuguese camelCase keys. Conversions to
//! and from the domain types live here so the client speaks domain types.

use domain::{Availability, Departure, PassengerDetail, TicketQuery};
use serde::{Deserialize, Serialize};

/// Body of an availability search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub codigo_ferrovia: u32,
    pub codigo_local_origem: u32,
    pub codigo_local_destino: u32,
    /// Outbound day start, epoch milliseconds
    pub data_ida: i64,
    pub detalhe_venda: Vec<SaleDetail>,
    pub codigo_classe: u32,
    /// Return day start, epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data_volta: Option<i64>,
}

/// One passenger block of the search body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDetail {
    pub detalhe: u32,
    pub qtd: u32,
    pub funcionario: bool,
}

impl From<&PassengerDetail> for SaleDetail {
    fn from(detail: &PassengerDetail) -> Self {
        Self {
            detalhe: detail.detail_code,
            qtd: detail.quantity,
            funcionario: detail.employee,
        }
    }
}

impl From<&TicketQuery> for AvailabilityRequest {
    fn from(query: &TicketQuery) -> Self {
        Self {
            codigo_ferrovia: query.railway_code,
            codigo_local_origem: query.origin_code,
            codigo_local_destino: query.destination_code,
            data_ida: query.outbound_ms,
            detalhe_venda: query.passengers.iter().map(SaleDetail::from).collect(),
            codigo_classe: query.class_code,
            data_volta: query.return_ms,
        }
    }
}

/// Successful search answer
///
/// Only the fields used for the report are modelled; everything else the
/// API sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub descricao_origem: Option<String>,
    #[serde(default)]
    pub descricao_destino: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub passagens_ida: Vec<RawDeparture>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub passagens_volta: Vec<RawDeparture>,
}

/// One departure entry of the answer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeparture {
    /// Scheduled departure, epoch milliseconds
    pub partida_programada: i64,
    /// Departure as shown on the sales site
    pub hora_partida_prevista: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RawDeparture>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<RawDeparture>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<RawDeparture> for Departure {
    fn from(raw: RawDeparture) -> Self {
        Self::new(raw.partida_programada, raw.hora_partida_prevista)
    }
}

impl From<AvailabilityResponse> for Availability {
    fn from(raw: AvailabilityResponse) -> Self {
        Self {
            origin_description: raw.descricao_origem,
            destination_description: raw.descricao_destino,
            outbound: raw.passagens_ida.into_iter().map(Departure::from).collect(),
            inbound: raw.passagens_volta.into_iter().map(Departure::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(return_ms: Option<i64>) -> TicketQuery {
        TicketQuery {
            railway_code: 1,
            origin_code: 14,
            destination_code: 2,
            class_code: 1,
            outbound_ms: 1_716_087_600_000,
            return_ms,
            passengers: vec![PassengerDetail {
                detail_code: 33,
                quantity: 2,
                employee: false,
            }],
        }
    }

    #[test]
    fn request_uses_api_keys() {
        let body = serde_json::to_value(AvailabilityRequest::from(&query(None))).unwrap();

        assert_eq!(
            body,
            json!({
                "codigoFerrovia": 1,
                "codigoLocalOrigem": 14,
                "codigoLocalDestino": 2,
                "dataIda": 1_716_087_600_000_i64,
                "detalheVenda": [{"detalhe": 33, "qtd": 2, "funcionario": false}],
                "codigoClasse": 1
            })
        );
    }

    #[test]
    fn return_date_is_sent_when_present() {
        let body =
            serde_json::to_value(AvailabilityRequest::from(&query(Some(1_716_692_400_000))))
                .unwrap();
        assert_eq!(body["dataVolta"], json!(1_716_692_400_000_i64));
    }

    #[test]
    fn response_maps_to_availability() {
        let raw: AvailabilityResponse = serde_json::from_value(json!({
            "descricaoOrigem": "GOVERNADOR VALADARES",
            "descricaoDestino": "PEDRO NOLASCO",
            "passagensIda": [
                {"partidaProgramada": 1_716_123_600_000_i64, "horaPartidaPrevista": "19/05/2024", "vagas": 3}
            ],
            "outroCampo": true
        }))
        .unwrap();

        let availability = Availability::from(raw);
        assert_eq!(availability.origin_description.as_deref(), Some("GOVERNADOR VALADARES"));
        assert_eq!(
            availability.outbound,
            vec![Departure::new(1_716_123_600_000, "19/05/2024")]
        );
        assert!(availability.inbound.is_empty());
    }

    #[test]
    fn missing_or_null_lists_are_empty() {
        let raw: AvailabilityResponse =
            serde_json::from_value(json!({"passagensIda": null})).unwrap();
        assert!(raw.passagens_ida.is_empty());
        assert!(raw.passagens_volta.is_empty());
        assert_eq!(raw.descricao_origem, None);
    }
}
