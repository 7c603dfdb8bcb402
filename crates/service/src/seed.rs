//! Demo data bootstrap, run once at startup when `seed.enabled` is set.
//!
//! Idempotent: labs are matched by `key_name`, results are only written into
//! an empty table.

use tracing::{info, instrument};
use validator::Validate;

use crate::errors::ServiceError;
use crate::labs::{domain::LabInput, repository::LabRepository, LabService};
use crate::results::{domain::ResultInput, repository::ResultRepository, ResultService};

const DEMO_LABS: [(&str, &str, &str); 5] = [
    ("LAB-CLI-01", "Laboratorio Clínico General", "Laboratorio para análisis clínicos generales"),
    ("LAB-HEM-01", "Laboratorio de Hematología", "Especializado en análisis de sangre y hemograma completo"),
    ("LAB-MB-01", "Laboratorio de Microbiología", "Análisis de cultivos, identificación de patógenos y antibiograma"),
    ("LAB-BQ-01", "Laboratorio de Bioquímica Clínica", "Pruebas bioquímicas y marcadores metabólicos"),
    ("LAB-IL-01", "Laboratorio de Inmunología", "Pruebas serológicas y perfiles inmunológicos"),
];

const DEMO_STATUSES: [&str; 3] = ["completed", "pending", "in_progress"];
const RESULTS_PER_LAB: i32 = 5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub labs_created: usize,
    pub results_created: usize,
}

pub fn demo_labs() -> Vec<LabInput> {
    DEMO_LABS
        .iter()
        .map(|(key_name, name, description)| LabInput {
            key_name: key_name.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
        })
        .collect()
}

/// Five results for each demo lab id, stamped with `now_ms`.
pub fn demo_results(now_ms: i64) -> Vec<ResultInput> {
    let lab_count = DEMO_LABS.len() as i32;
    (1..=lab_count)
        .flat_map(|lab_id| {
            (1..=RESULTS_PER_LAB).map(move |i| ResultInput {
                lab_id,
                nif: format!("{:08}-{}", lab_id * 100 + i, (lab_id + i) % 10),
                patient_name: format!("Paciente {lab_id}-{i}"),
                date: now_ms,
                data: format!("Resultado {i} for lab {lab_id}"),
                status: DEMO_STATUSES[((i - 1) as usize) % DEMO_STATUSES.len()].to_string(),
            })
        })
        .collect()
}

#[instrument(skip_all)]
pub async fn seed_demo_data<L, R>(labs: &LabService<L>, results: &ResultService<R>) -> Result<SeedReport, ServiceError>
where
    L: LabRepository + ?Sized,
    R: ResultRepository + ?Sized,
{
    let mut report = SeedReport::default();

    for input in demo_labs() {
        input.validate().map_err(|e| ServiceError::Validation(e.to_string()))?;
        if labs.get_by_key_name(&input.key_name).await?.is_some() {
            continue;
        }
        labs.create(input).await?;
        report.labs_created += 1;
    }

    if results.get_all().await?.is_empty() {
        for input in demo_results(chrono::Utc::now().timestamp_millis()) {
            input.validate().map_err(|e| ServiceError::Validation(e.to_string()))?;
            results.create(input).await?;
            report.results_created += 1;
        }
    }

    info!(labs = report.labs_created, results = report.results_created, "demo_data_seeded");
    Ok(report)
}
