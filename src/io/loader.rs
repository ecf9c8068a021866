//! CSV loading and field repair.
//!
//! The loader is the only place missing data is fixed: numeric gaps are
//! repaired per the configured per-column policy (median of the current
//! load, zero, or left missing), booleans default to false and text to
//! empty. Downstream scoring never sees an error for a single bad field.
//!
//! Column headers are matched case-insensitively and the Spanish headers
//! of the original catalog exports are accepted as aliases, so both
//! naming generations load without a preprocessing step.

use csv::StringRecord;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::{GradmapConfig, ImputePolicy};
use crate::core::Program;
use crate::errors::GradmapError;
use crate::scoring::impute::{fill_with_median, fill_with_zero};

/// Canonical column names plus accepted aliases, in schema order.
const COLUMN_ALIASES: &[(&str, &[&str])] = &[
    ("id", &[]),
    ("program", &["programa", "name"]),
    ("university", &["universidad"]),
    ("city", &["ciudad"]),
    ("modality", &["modalidad"]),
    ("language", &["idioma"]),
    ("duration_months", &["duracion_months"]),
    ("total_price_eur", &["precio_total_eur"]),
    ("credits_ects", &["credito_ects"]),
    ("curriculum", &["componentes_curriculares"]),
    ("keywords", &[]),
    ("practical_focus", &["enfoque_practico"]),
    ("internship_offered", &["practicas_ofrecidas"]),
    ("analytic_pct", &["porcentaje_analitico"]),
    ("managerial_pct", &["porcentaje_gerencial"]),
    ("employment_rate_6m", &["empleabilidad_6m"]),
    ("partner_network_size", &["red_socios"]),
    ("consultant_analysis", &["analisis_consultor"]),
    ("career_path", &["salida_laboral"]),
    ("pros", &[]),
    ("cons", &["contras"]),
    ("official_link", &["link", "enlace"]),
];

/// Columns the source must carry for the load to be usable at all.
const REQUIRED_COLUMNS: &[&str] = &["id", "program", "university", "city", "total_price_eur"];

/// Load and repair a program collection from a CSV file.
///
/// Fails only on structural problems: unreadable file, malformed CSV,
/// missing required columns, or zero data rows.
pub fn load_programs(path: &Path, config: &GradmapConfig) -> Result<Vec<Program>, GradmapError> {
    let file = File::open(path)
        .map_err(|e| GradmapError::load(path, format!("cannot open file: {e}")))?;
    parse_programs(file, path, config)
}

fn parse_programs<R: Read>(
    reader: R,
    path: &Path,
    config: &GradmapConfig,
) -> Result<Vec<Program>, GradmapError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| GradmapError::load(path, format!("cannot read headers: {e}")))?
        .clone();
    let columns = ColumnMap::build(&headers);
    columns.require(REQUIRED_COLUMNS, path)?;

    let mut rows = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let line = i + 2; // 1-based, after the header row
        match record {
            Ok(record) => rows.push(RawRow::parse(&record, &columns, line)),
            Err(e) => {
                return Err(GradmapError::load(
                    path,
                    format!("malformed CSV at line {line}: {e}"),
                ))
            }
        }
    }
    if rows.is_empty() {
        return Err(GradmapError::load(path, "no program rows found"));
    }

    warn_on_duplicate_ids(&rows);
    Ok(assemble(rows, &config.imputation))
}

/// Header-name to index lookup, case-insensitive and alias-aware.
struct ColumnMap {
    indices: HashMap<&'static str, usize>,
}

impl ColumnMap {
    fn build(headers: &StringRecord) -> Self {
        let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let mut indices = HashMap::new();
        for (canonical, aliases) in COLUMN_ALIASES {
            let found = lowered
                .iter()
                .position(|h| h == canonical)
                .or_else(|| lowered.iter().position(|h| aliases.contains(&h.as_str())));
            if let Some(idx) = found {
                indices.insert(*canonical, idx);
            }
        }
        Self { indices }
    }

    fn require(&self, names: &[&str], path: &Path) -> Result<(), GradmapError> {
        let missing: Vec<&str> = names
            .iter()
            .filter(|n| !self.indices.contains_key(**n))
            .copied()
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(GradmapError::load(
                path,
                format!("missing required column(s): {}", missing.join(", ")),
            ))
        }
    }

    fn get(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }
}

/// One row as read, before column-wise repair.
struct RawRow {
    id: String,
    name: String,
    university: String,
    city: String,
    modality: String,
    language: String,
    duration_months: Option<f64>,
    total_price_eur: Option<f64>,
    credits_ects: Option<f64>,
    curriculum: String,
    keywords: String,
    practical_focus: Option<f64>,
    internship_offered: bool,
    analytic_pct: Option<f64>,
    managerial_pct: Option<f64>,
    employment_rate_6m: Option<f64>,
    partner_network_size: Option<f64>,
    consultant_analysis: String,
    career_path: String,
    pros: String,
    cons: String,
    official_link: String,
}

impl RawRow {
    fn parse(record: &StringRecord, columns: &ColumnMap, line: usize) -> Self {
        let text = |name: &str| -> String {
            columns
                .get(name)
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };
        let numeric = |name: &str| -> Option<f64> {
            let raw = columns.get(name).and_then(|i| record.get(i))?;
            if raw.is_empty() {
                return None;
            }
            match raw.replace(',', ".").parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    log::debug!("line {line}: unparseable {name} value '{raw}', treated as missing");
                    None
                }
            }
        };
        let flag = |name: &str| -> bool {
            columns
                .get(name)
                .and_then(|i| record.get(i))
                .map(parse_flag)
                .unwrap_or(false)
        };

        Self {
            id: text("id"),
            name: text("program"),
            university: text("university"),
            city: text("city"),
            modality: text("modality"),
            language: text("language"),
            duration_months: numeric("duration_months"),
            total_price_eur: numeric("total_price_eur"),
            credits_ects: numeric("credits_ects"),
            curriculum: text("curriculum"),
            keywords: text("keywords"),
            practical_focus: numeric("practical_focus"),
            internship_offered: flag("internship_offered"),
            analytic_pct: numeric("analytic_pct"),
            managerial_pct: numeric("managerial_pct"),
            employment_rate_6m: numeric("employment_rate_6m"),
            partner_network_size: numeric("partner_network_size"),
            consultant_analysis: text("consultant_analysis"),
            career_path: text("career_path"),
            pros: text("pros"),
            cons: text("cons"),
            official_link: text("official_link"),
        }
    }
}

/// Floor negative values at zero without collapsing a deliberately
/// missing (NaN) value, which must stay missing.
fn floor_at_zero(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "si" | "sí"
    )
}

fn warn_on_duplicate_ids(rows: &[RawRow]) {
    let mut seen = HashSet::new();
    for row in rows {
        if !row.id.is_empty() && !seen.insert(row.id.as_str()) {
            log::warn!("duplicate program id '{}'", row.id);
        }
    }
}

/// Apply one column's repair policy. Only median fills count as imputed;
/// zero-filling is a defined default, not an imputation.
fn repair_column(column: &[Option<f64>], policy: ImputePolicy) -> (Vec<f64>, Vec<usize>) {
    match policy {
        ImputePolicy::Median => fill_with_median(column),
        ImputePolicy::Zero => {
            let (values, _) = fill_with_zero(column);
            (values, Vec::new())
        }
        ImputePolicy::None => {
            let values = column.iter().map(|v| v.unwrap_or(f64::NAN)).collect();
            (values, Vec::new())
        }
    }
}

fn assemble(rows: Vec<RawRow>, policies: &crate::config::ImputationConfig) -> Vec<Program> {
    let column = |f: fn(&RawRow) -> Option<f64>| -> Vec<Option<f64>> {
        rows.iter().map(f).collect()
    };

    let repaired: Vec<(&str, (Vec<f64>, Vec<usize>))> = vec![
        (
            "total_price_eur",
            repair_column(&column(|r| r.total_price_eur), policies.total_price_eur),
        ),
        (
            "credits_ects",
            repair_column(&column(|r| r.credits_ects), policies.credits_ects),
        ),
        (
            "duration_months",
            repair_column(&column(|r| r.duration_months), policies.duration_months),
        ),
        (
            "analytic_pct",
            repair_column(&column(|r| r.analytic_pct), policies.analytic_pct),
        ),
        (
            "managerial_pct",
            repair_column(&column(|r| r.managerial_pct), policies.managerial_pct),
        ),
        (
            "practical_focus",
            repair_column(&column(|r| r.practical_focus), policies.practical_focus),
        ),
    ];
    let values: HashMap<&str, &Vec<f64>> = repaired.iter().map(|(n, (v, _))| (*n, v)).collect();
    let mut imputed_per_row: Vec<Vec<String>> = vec![Vec::new(); rows.len()];
    for (name, (_, repaired_at)) in &repaired {
        for &i in repaired_at {
            imputed_per_row[i].push(name.to_string());
        }
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| Program {
            id: row.id,
            name: row.name,
            university: row.university,
            city: row.city,
            modality: row.modality,
            language: row.language,
            duration_months: values["duration_months"][i],
            total_price_eur: floor_at_zero(values["total_price_eur"][i]),
            credits_ects: values["credits_ects"][i],
            curriculum: row.curriculum,
            keywords: row.keywords,
            practical_focus: values["practical_focus"][i].clamp(0.0, 5.0),
            internship_offered: row.internship_offered,
            analytic_pct: values["analytic_pct"][i].clamp(0.0, 100.0),
            managerial_pct: values["managerial_pct"][i].clamp(0.0, 100.0),
            employment_rate_6m: row.employment_rate_6m,
            partner_network_size: row.partner_network_size,
            consultant_analysis: row.consultant_analysis,
            career_path: row.career_path,
            pros: row.pros,
            cons: row.cons,
            official_link: row.official_link,
            imputed_fields: std::mem::take(&mut imputed_per_row[i]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradmapConfig;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn parse(csv: &str) -> Result<Vec<Program>, GradmapError> {
        parse_programs(
            Cursor::new(csv.to_string()),
            &PathBuf::from("test.csv"),
            &GradmapConfig::default(),
        )
    }

    const HEADER: &str = "id,program,university,city,modality,total_price_eur,credits_ects,\
practical_focus,internship_offered,analytic_pct,managerial_pct,keywords";

    #[test]
    fn loads_a_minimal_row() {
        let csv = format!(
            "{HEADER}\np1,MSc Ops,UPM,Madrid,on-site,12000,60,4,true,70,30,\"operaciones, datos\"\n"
        );
        let programs = parse(&csv).unwrap();
        assert_eq!(programs.len(), 1);
        let p = &programs[0];
        assert_eq!(p.id, "p1");
        assert_eq!(p.total_price_eur, 12_000.0);
        assert!(p.internship_offered);
        assert!(p.imputed_fields.is_empty());
    }

    #[test]
    fn missing_price_is_median_imputed_not_zeroed() {
        let csv = format!(
            "{HEADER}\n\
             p1,A,U,Madrid,on-site,10000,60,4,true,70,30,x\n\
             p2,B,U,Madrid,on-site,,60,4,true,70,30,x\n\
             p3,C,U,Madrid,on-site,20000,60,4,true,70,30,x\n"
        );
        let programs = parse(&csv).unwrap();
        assert_eq!(programs[1].total_price_eur, 15_000.0);
        assert!(programs[1].was_imputed("total_price_eur"));
        assert!(!programs[0].was_imputed("total_price_eur"));
    }

    #[test]
    fn unparseable_numeric_becomes_missing_not_zero() {
        let csv = format!(
            "{HEADER}\n\
             p1,A,U,Madrid,on-site,10000,60,4,true,70,30,x\n\
             p2,B,U,Madrid,on-site,n/a,60,4,true,70,30,x\n"
        );
        let programs = parse(&csv).unwrap();
        // Median of the single present price, not zero.
        assert_eq!(programs[1].total_price_eur, 10_000.0);
        assert!(programs[1].was_imputed("total_price_eur"));
    }

    #[test]
    fn clamped_percentage_columns_zero_fill_by_default() {
        let csv = format!(
            "{HEADER}\n\
             p1,A,U,Madrid,on-site,10000,60,4,true,70,30,x\n\
             p2,B,U,Madrid,on-site,12000,60,,true,,,x\n"
        );
        let programs = parse(&csv).unwrap();
        assert_eq!(programs[1].analytic_pct, 0.0);
        assert_eq!(programs[1].practical_focus, 0.0);
        // Zero-filling is a defined default, not an imputation.
        assert!(programs[1].imputed_fields.is_empty());
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        let csv = format!(
            "{HEADER}\np1,A,U,Madrid,on-site,10000,60,9,true,140,-5,x\n"
        );
        let programs = parse(&csv).unwrap();
        assert_eq!(programs[0].analytic_pct, 100.0);
        assert_eq!(programs[0].managerial_pct, 0.0);
        assert_eq!(programs[0].practical_focus, 5.0);
    }

    #[test]
    fn spanish_headers_are_accepted() {
        let csv = "id,programa,universidad,ciudad,modalidad,precio_total_eur,credito_ECTS,\
enfoque_practico,practicas_ofrecidas,porcentaje_analitico,porcentaje_gerencial,keywords\n\
p1,MSc Ops,UPM,Madrid,Presencial,12000,60,4,True,70,30,operaciones\n";
        let programs = parse(csv).unwrap();
        assert_eq!(programs[0].name, "MSc Ops");
        assert_eq!(programs[0].credits_ects, 60.0);
        assert!(programs[0].internship_offered);
    }

    #[test]
    fn employability_columns_stay_optional() {
        let csv = format!(
            "{HEADER},employment_rate_6m,partner_network_size\n\
             p1,A,U,Madrid,on-site,10000,60,4,true,70,30,x,85,120\n\
             p2,B,U,Madrid,on-site,12000,60,4,true,70,30,x,,\n"
        );
        let programs = parse(&csv).unwrap();
        assert_eq!(programs[0].employment_rate_6m, Some(85.0));
        assert_eq!(programs[1].employment_rate_6m, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "id,program,university,city\np1,A,U,Madrid\n";
        let err = parse(csv).unwrap_err();
        assert!(err.to_string().contains("total_price_eur"));
        assert!(err.is_fatal());
    }

    #[test]
    fn zero_rows_is_fatal() {
        let err = parse(&format!("{HEADER}\n")).unwrap_err();
        assert!(err.to_string().contains("no program rows"));
    }

    #[test]
    fn decimal_comma_is_understood() {
        let csv = format!(
            "{HEADER}\np1,A,U,Madrid,on-site,\"12500,50\",60,4,true,70,30,x\n"
        );
        let programs = parse(&csv).unwrap();
        assert_eq!(programs[0].total_price_eur, 12_500.50);
    }

    #[test]
    fn boolean_variants_parse() {
        for (raw, expected) in [("True", true), ("sí", true), ("1", true), ("no", false), ("", false)] {
            assert_eq!(parse_flag(raw), expected, "raw = {raw:?}");
        }
    }
}
