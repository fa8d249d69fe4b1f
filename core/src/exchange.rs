//! Tabular (CSV) roster import/export.
//!
//! Columns are matched by header name, in any order; unknown columns are
//! ignored. Import is forgiving about values (bad numbers become 0) but
//! strict about structure: a file with no recognised header or a row wider
//! than the header is rejected as a whole. An unclosed quote runs to the
//! end of the file, as the tokenizer reads it.

use crate::{
    activity_log::ActivityLogEntry,
    error::{MusterError, MusterResult},
    personnel::{Availability, PersonnelRecord},
    types::{Score, Timestamp},
};

pub const ROSTER_COLUMNS: [&str; 13] = [
    "ID",
    "Name",
    "Rank",
    "Role",
    "Skills",
    "Health Score",
    "Training Score",
    "Readiness %",
    "Availability",
    "Years of Service",
    "Deployment Status",
    "Last Training",
    "Medical Restrictions",
];

pub const ACTIVITY_COLUMNS: [&str; 4] = ["Timestamp", "User", "Action", "Details"];

const LIST_SEPARATOR: &str = "; ";

// ── Value coercion ─────────────────────────────────────────────────

/// Leading integer of `raw`, like a lenient integer parse: "85.7" → 85,
/// "12 yrs" → 12, "abc" → 0.
fn leading_int(raw: &str) -> i64 {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

fn coerce_score(raw: &str) -> Score {
    leading_int(raw).clamp(0, 100) as Score
}

fn coerce_years(raw: &str) -> u32 {
    leading_int(raw).clamp(0, u32::MAX as i64) as u32
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// ── Codec ──────────────────────────────────────────────────────────

fn import_error(err: csv::Error) -> MusterError {
    MusterError::Import {
        line:   err.position().map_or(0, |p| p.line() as usize),
        reason: err.to_string(),
    }
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> MusterResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Cannot flush CSV: {}", e.error()))?;
    String::from_utf8(bytes).map_err(|e| anyhow::anyhow!("CSV is not UTF-8: {e}").into())
}

// ── Roster ─────────────────────────────────────────────────────────

/// Parse a roster CSV. Does not touch any store; the caller replaces
/// the roster only on `Ok`.
pub fn import_roster(text: &str, now: Timestamp) -> MusterResult<Vec<PersonnelRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.trim_start_matches('\u{feff}').as_bytes());

    let header: Vec<String> = reader
        .headers()
        .map_err(import_error)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if header.is_empty() || header.iter().all(|h| h.is_empty()) {
        return Err(MusterError::Import { line: 1, reason: "file is empty".into() });
    }
    if !header.iter().any(|h| ROSTER_COLUMNS.contains(&h.as_str())) {
        return Err(MusterError::Import {
            line:   1,
            reason: "header row has no recognised columns".into(),
        });
    }
    let column = |name: &str| header.iter().position(|h| h == name);
    let today = now.date_naive().format("%Y-%m-%d").to_string();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(import_error)?;
        if row.len() > header.len() {
            return Err(MusterError::Import {
                line:   row.position().map_or(0, |p| p.line() as usize),
                reason: format!("expected {} fields, found {}", header.len(), row.len()),
            });
        }
        let get = |name: &str| -> String {
            column(name)
                .and_then(|i| row.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };
        let non_empty = |name: &str| Some(get(name)).filter(|s| !s.is_empty());

        let mut record = PersonnelRecord {
            id: non_empty("ID")
                .unwrap_or_else(|| format!("imported-{}-{index}", now.timestamp_millis())),
            name:                 get("Name"),
            rank:                 get("Rank"),
            role:                 get("Role"),
            skills:               split_list(&get("Skills")),
            health_score:         coerce_score(&get("Health Score")),
            training_score:       coerce_score(&get("Training Score")),
            readiness:            coerce_score(&get("Readiness %")),
            availability:         Availability::parse(&get("Availability")).unwrap_or(Availability::Available),
            years_of_service:     coerce_years(&get("Years of Service")),
            deployment_status:    get("Deployment Status"),
            last_training_date:   non_empty("Last Training").unwrap_or_else(|| today.clone()),
            medical_restrictions: split_list(&get("Medical Restrictions")),
            location:             None,
            phone_number:         None,
            email:                None,
        };
        record.recompute_readiness();
        records.push(record);
    }

    log::info!("parsed {} personnel records from CSV", records.len());
    Ok(records)
}

pub fn export_roster(personnel: &[PersonnelRecord]) -> MusterResult<String> {
    let mut out = writer();
    out.write_record(ROSTER_COLUMNS)?;
    for p in personnel {
        out.write_record([
            p.id.clone(),
            p.name.clone(),
            p.rank.clone(),
            p.role.clone(),
            p.skills.join(LIST_SEPARATOR),
            p.health_score.to_string(),
            p.training_score.to_string(),
            p.readiness.to_string(),
            p.availability.to_string(),
            p.years_of_service.to_string(),
            p.deployment_status.clone(),
            p.last_training_date.clone(),
            p.medical_restrictions.join(LIST_SEPARATOR),
        ])?;
    }
    finish(out)
}

pub fn export_activity(entries: &[&ActivityLogEntry]) -> MusterResult<String> {
    let mut out = writer();
    out.write_record(ACTIVITY_COLUMNS)?;
    for e in entries {
        out.write_record([
            e.timestamp.to_rfc3339().as_str(),
            e.username.as_str(),
            e.action.as_str(),
            e.details.as_str(),
        ])?;
    }
    finish(out)
}
