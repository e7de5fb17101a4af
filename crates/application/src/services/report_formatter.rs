//! Availability report formatting
//!
//! Pure functions turning a search request and the filtered API answer into
//! the chat message sent to the user. The wording is Portuguese because the
//! railway and its passengers are.

use std::fmt::Write as _;

use domain::{Availability, DepartureSelection, SearchRequest, TravelDate};

/// Message sent when the availability API could not be queried
pub const QUERY_FAILED_MESSAGE: &str = "Erro ao consultar a API";

const FOUND_NOTICE: &str = "A data informada foi encontrada 😀";
const NOT_FOUND_NOTICE: &str = "A data informada não foi encontrada😡";
const NEARBY_HEADER: &str = "Datas próximas disponíveis:";
const LIST_RULE: &str = "----";

/// Filtered departures for one leg of the trip
#[derive(Debug, Clone, Copy)]
pub struct LegReport<'a> {
    pub date: &'a TravelDate,
    pub selection: &'a DepartureSelection,
}

/// Format the report for a successful availability query
///
/// Station lines prefer the descriptions returned by the API and fall back
/// to the names from the request. The return section is only written when
/// `inbound` is given.
#[must_use]
pub fn format_availability_report(
    request: &SearchRequest,
    availability: &Availability,
    outbound: LegReport<'_>,
    inbound: Option<LegReport<'_>>,
) -> String {
    let origin = availability
        .origin_description
        .as_deref()
        .unwrap_or(&request.origin);
    let destination = availability
        .destination_description
        .as_deref()
        .unwrap_or(&request.destination);

    let mut message = String::new();
    let _ = writeln!(message, "Origem: {origin}");
    let _ = writeln!(message, "Destino: {destination}");
    let _ = writeln!(message, "Classe: {}", request.class_name);
    let _ = writeln!(message, "Data de consulta: {}", outbound.date);
    push_leg(&mut message, outbound.selection);

    if let Some(leg) = inbound {
        let _ = write!(message, "\nData de volta: {}\n", leg.date);
        push_leg(&mut message, leg.selection);
    }

    message
}

/// Found notice, or not-found notice followed by the nearby list
fn push_leg(message: &mut String, selection: &DepartureSelection) {
    if selection.exact_match {
        let _ = write!(message, "\n{FOUND_NOTICE}\n");
        return;
    }

    let _ = write!(message, "\n{NOT_FOUND_NOTICE}\n\n{NEARBY_HEADER}\n{LIST_RULE}\n");
    for departure in &selection.nearby {
        let _ = writeln!(message, " - {}", departure.displayed_departure);
    }
    let _ = writeln!(message, "{LIST_RULE}");
}
