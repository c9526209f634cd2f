use axum::Json;
use serde::Serialize;

use amped_core::models::category::CATEGORY_LAYOUTS;
use amped_core::models::trade::Trade;

use crate::routes::{GENERATE_PATH, HEALTH_PATH, INFO_PATH, SERVICE_NAME, SERVICE_VERSION};

#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub generate_pdf: &'static str,
    pub info: &'static str,
}

#[derive(Serialize)]
pub struct FieldInfo {
    pub name: &'static str,
    pub description: String,
    pub required: bool,
    /// Conventional record keys shown as table columns.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct InfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
    pub expected_fields: Vec<FieldInfo>,
    pub content_type: &'static str,
    pub also_accepts: &'static str,
    pub supported_trades: Vec<&'static str>,
}

/// Static description of the service and the fields it accepts.
pub async fn pdf_info() -> Json<InfoResponse> {
    let mut expected_fields: Vec<FieldInfo> = CATEGORY_LAYOUTS
        .iter()
        .map(|layout| FieldInfo {
            name: layout.field,
            description: format!(
                "JSON array of {} objects (optional, defaults to [])",
                layout.title.to_lowercase()
            ),
            required: false,
            columns: layout.columns.iter().map(|c| c.key).collect(),
        })
        .collect();

    expected_fields.extend([
        FieldInfo {
            name: "trade_type",
            description: "electrical|hvac|plumbing|flooring (optional, defaults to electrical)"
                .to_string(),
            required: false,
            columns: Vec::new(),
        },
        FieldInfo {
            name: "project_name",
            description: "string (optional, defaults to 'Project')".to_string(),
            required: false,
            columns: Vec::new(),
        },
        FieldInfo {
            name: "company_name",
            description: "string (optional, defaults to 'AMPED')".to_string(),
            required: false,
            columns: Vec::new(),
        },
    ]);

    Json(InfoResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        endpoints: Endpoints {
            health: HEALTH_PATH,
            generate_pdf: GENERATE_PATH,
            info: INFO_PATH,
        },
        expected_fields,
        content_type: "application/x-www-form-urlencoded",
        also_accepts: "application/json",
        supported_trades: Trade::ALL.iter().map(|t| t.key()).collect(),
    })
}
