//! CSV export of the session's accumulated results.
//!
//! Mirrors the spreadsheet layout the planners already use: a "Tipo"
//! column marks the record kind, per-phase rows carry the inter-green and
//! green-time tables, and a closing "Resumo" row holds the totals and the
//! export timestamp.

use chrono::{DateTime, Local};

use crate::services::error::{CalcError, CalcResult};
use crate::services::session::SessionResults;

/// Union of every record kind's columns; cells not applicable to a record
/// kind stay empty.
pub const CSV_HEADER: &str = "Tipo,Fase,Tempo de Amarelo (s),Tempo de Vermelho (s),\
Entreverdes Total (s),Tempo Verde Efetivo (s),Tp_Total (s),Ciclo Ótimo Webster (s),\
Data Exportação";

/// Record-kind labels, as the planners' spreadsheets name them.
pub const KIND_INTERGREEN: &str = "Entreverdes por Fase";
pub const KIND_GREEN: &str = "Tempos Verdes Efetivos";
pub const KIND_SUMMARY: &str = "Resumo";

/// Build the combined CSV from the session results.
///
/// Fails with a guidance error when no stage has been computed yet.
pub fn build_csv(results: &SessionResults, exported_at: DateTime<Local>) -> CalcResult<String> {
    if results.intergreen.is_none() && results.cycle.is_none() && results.green_split.is_none() {
        return Err(CalcError::MissingPrerequisite(
            "nothing to export yet: run at least one calculation first".into(),
        ));
    }

    let mut lines = vec![CSV_HEADER.to_string()];

    if let Some(table) = &results.intergreen {
        for (idx, phase) in table.phases.iter().enumerate() {
            lines.push(format!(
                "{},Fase {},{:.2},{:.2},{},,,,",
                KIND_INTERGREEN,
                idx + 1,
                phase.yellow_s,
                phase.red_s,
                phase.total_s
            ));
        }
    }

    if let Some(split) = &results.green_split {
        for (idx, green) in split.green_times_s.iter().enumerate() {
            lines.push(format!(
                "{},Fase {},,,,{},,,",
                KIND_GREEN,
                idx + 1,
                green
            ));
        }
    }

    let lost_time = results
        .intergreen
        .as_ref()
        .map(|table| table.lost_time_s.to_string())
        .unwrap_or_default();
    let cycle = results
        .cycle
        .as_ref()
        .map(|cycle| cycle.cycle_s.to_string())
        .unwrap_or_default();
    lines.push(format!(
        "{},,,,,,{},{},{}",
        KIND_SUMMARY,
        lost_time,
        cycle,
        exported_at.format("%d/%m/%Y %H:%M")
    ));

    let mut csv = lines.join("\n");
    csv.push('\n');
    Ok(csv)
}

/// Timestamped download filename for the CSV attachment.
pub fn export_filename(exported_at: DateTime<Local>) -> String {
    format!(
        "calculadora_semaforo_{}.csv",
        exported_at.format("%Y%m%d_%H%M")
    )
}
