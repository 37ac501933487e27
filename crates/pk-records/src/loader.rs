//! CSV survey loader.
//!
//! # CSV format
//!
//! One row per observed stop, using the survey's own column names.  Exactly
//! the columns below are accepted, in any order.  A header missing one of
//! them, or naming any other column, is rejected before any row is read.
//! The identifier column must be headed `id`.
//!
//! ```csv
//! id,hora_a_la_que_comenz_el_parqueo,hora_a_la_que_finaliz_el_parqueo,sentido_de_la_calle_donde_estacion,tipo_de_vehculo,propsito_del_parqueo,nivel_de_disrupcin
//! 17,07:05,07:21,SUR-NORTE,2,1,1
//! 18,07:09,,NORTE-SUR,4,2,0
//! ```
//!
//! Every row yields an [`EventKind::Arrival`] record.  Rows with a finish
//! time also yield an [`EventKind::Departure`] record carrying the same
//! fields.  Records come back in file order; see
//! [`sort_by_timestamp`](crate::sort_by_timestamp).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{
    ClockTime, Disruption, EventKind, Purpose, RecordError, RecordResult, StreetRecord,
    StreetSide, VehicleClass,
};

const COL_ID: &str = "id";
const COL_STARTED: &str = "hora_a_la_que_comenz_el_parqueo";
const COL_ENDED: &str = "hora_a_la_que_finaliz_el_parqueo";
const COL_SIDE: &str = "sentido_de_la_calle_donde_estacion";
const COL_VEHICLE: &str = "tipo_de_vehculo";
const COL_PURPOSE: &str = "propsito_del_parqueo";
const COL_DISRUPTION: &str = "nivel_de_disrupcin";

const COLUMNS: [&str; 7] =
    [COL_ID, COL_STARTED, COL_ENDED, COL_SIDE, COL_VEHICLE, COL_PURPOSE, COL_DISRUPTION];

// ── CSV row ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SurveyRow {
    id:         String,
    #[serde(rename = "hora_a_la_que_comenz_el_parqueo")]
    started:    String,
    #[serde(rename = "hora_a_la_que_finaliz_el_parqueo")]
    ended:      String,
    #[serde(rename = "sentido_de_la_calle_donde_estacion")]
    side:       String,
    #[serde(rename = "tipo_de_vehculo")]
    vehicle:    String,
    #[serde(rename = "propsito_del_parqueo")]
    purpose:    String,
    #[serde(rename = "nivel_de_disrupcin")]
    disruption: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every record from a survey CSV file.
pub fn load_records_csv(path: &Path) -> RecordResult<Vec<StreetRecord>> {
    let file = std::fs::File::open(path)?;
    load_records_reader(file)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
pub fn load_records_reader<R: Read>(reader: R) -> RecordResult<Vec<StreetRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if let Some(unknown) = headers.iter().find(|h| !COLUMNS.contains(h)) {
        return Err(RecordError::UnknownColumn(unknown.to_owned()));
    }
    if let Some(missing) = COLUMNS.iter().find(|col| !headers.iter().any(|h| h == **col)) {
        return Err(RecordError::MissingColumn(*missing));
    }

    let mut records = Vec::new();
    for (i, result) in csv_reader.deserialize::<SurveyRow>().enumerate() {
        let row = result.map_err(|e| RecordError::Parse(e.to_string()))?;
        let arrival = build_record(i + 1, row)?;
        let departure = arrival
            .ended_at
            .map(|_| StreetRecord { kind: EventKind::Departure, ..arrival.clone() });
        records.push(arrival);
        records.extend(departure);
    }
    Ok(records)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_record(row_no: usize, row: SurveyRow) -> RecordResult<StreetRecord> {
    let started_at = ClockTime::parse(&row.started)
        .map_err(|e| RecordError::Parse(format!("row {row_no}: {e}")))?;
    let ended_at = if row.ended.trim().is_empty() {
        None
    } else {
        Some(
            ClockTime::parse(&row.ended)
                .map_err(|e| RecordError::Parse(format!("row {row_no}: {e}")))?,
        )
    };

    Ok(StreetRecord {
        id: row.id,
        kind: EventKind::Arrival,
        side: tag(row_no, COL_SIDE, &row.side, StreetSide::parse)?,
        vehicle: tag(row_no, COL_VEHICLE, &row.vehicle, VehicleClass::parse)?,
        purpose: tag(row_no, COL_PURPOSE, &row.purpose, Purpose::parse)?,
        disruption: tag(row_no, COL_DISRUPTION, &row.disruption, Disruption::parse)?,
        started_at,
        ended_at,
    })
}

fn tag<T>(
    row: usize,
    column: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> RecordResult<T> {
    parse(value).ok_or_else(|| RecordError::UnknownTag { row, column, value: value.to_owned() })
}
