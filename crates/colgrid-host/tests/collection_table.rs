//! End-to-end table loading from JSON payloads.
//!
//! Collaborators are backed by JSON documents shaped like the platform's
//! responses:
//! 1. Records arrive as a heterogeneous JSON array
//! 2. The object schema and display-type map are parsed from JSON
//! 3. The rendered request is compared against the expected columns

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use colgrid_core::{ColumnDescriptor, DisplayTypeMap, LayoutMode, ObjectSchema, RecordRow};
use colgrid_host::{
    CollectionTable, Collaborators, HostError, HostResult, Notification, NotificationSink,
    RecordLookup, RenderRequest, RenderSink, SchemaProvider, TableConfig,
};
use serde_json::json;

const ACCOUNT_INFO: &str = r#"{
    "apiName": "Account",
    "fields": {
        "Id": {"apiName": "Id", "label": "Account ID", "dataType": "Id"},
        "Name": {"apiName": "Name", "label": "Account Name", "dataType": "String"},
        "AnnualRevenue": {"apiName": "AnnualRevenue", "label": "Annual Revenue", "dataType": "Currency"},
        "Phone": {"apiName": "Phone", "label": "Phone", "dataType": "Phone"}
    }
}"#;

const DISPLAY_TYPES: &str = r#"{
    "ID": "text",
    "STRING": "text",
    "CURRENCY": "currency",
    "PHONE": "phone"
}"#;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .try_init();
    });
}

/// Serves object infos and the display-type map from JSON documents.
struct JsonSchemaProvider {
    object_infos: HashMap<String, String>,
    display_types: String,
}

#[async_trait]
impl SchemaProvider for JsonSchemaProvider {
    async fn object_schema(&self, object_api_name: &str) -> HostResult<ObjectSchema> {
        let raw = self
            .object_infos
            .get(object_api_name)
            .ok_or_else(|| HostError::retrieval(format!("object {object_api_name} not found")))?;
        serde_json::from_str(raw)
            .map_err(|e| HostError::retrieval_with_source("malformed object info", e))
    }

    async fn display_type_map(&self) -> HostResult<DisplayTypeMap> {
        serde_json::from_str(&self.display_types)
            .map_err(|e| HostError::retrieval_with_source("malformed display type map", e))
    }
}

/// Treats the `001` key prefix as Account, like platform record ids.
struct PrefixLookup;

#[async_trait]
impl RecordLookup for PrefixLookup {
    async fn object_api_name(&self, record_id: &str) -> HostResult<String> {
        if record_id.starts_with("001") {
            Ok("Account".to_string())
        } else {
            Err(HostError::retrieval(format!("unknown key prefix in {record_id}")))
        }
    }
}

#[derive(Default)]
struct Captured {
    requests: Mutex<Vec<RenderRequest>>,
    notifications: Mutex<Vec<Notification>>,
}

impl RenderSink for Captured {
    fn initialize_table(&self, request: RenderRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

impl NotificationSink for Captured {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

fn collaborators(display_types: &str, captured: &Arc<Captured>) -> Collaborators {
    let mut object_infos = HashMap::new();
    object_infos.insert("Account".to_string(), ACCOUNT_INFO.to_string());
    Collaborators {
        schema_provider: Arc::new(JsonSchemaProvider {
            object_infos,
            display_types: display_types.to_string(),
        }),
        record_lookup: Arc::new(PrefixLookup),
        render_sink: captured.clone(),
        notifier: captured.clone(),
    }
}

fn records() -> Vec<RecordRow> {
    serde_json::from_value(json!([
        {"Id": "001A", "Name": "Acme", "Owner.Name": "Ada", "attributes": {"type": "Account"}},
        {"Id": "001B", "Phone": "555-0100", "Name": "Globex"},
        {"Id": "001C", "AnnualRevenue": 1.5e6}
    ]))
    .unwrap()
}

fn column(label: &str, field: &str, render_type: &str, width: u32) -> ColumnDescriptor {
    ColumnDescriptor {
        label: label.into(),
        field_name: field.into(),
        render_type: render_type.into(),
        initial_width: width,
    }
}

#[tokio::test]
async fn test_inferred_columns_from_heterogeneous_rows() {
    init_tracing();
    let captured = Arc::new(Captured::default());
    let mut table = CollectionTable::new(
        TableConfig::new(),
        records(),
        collaborators(DISPLAY_TYPES, &captured),
    );

    table.connect().await.unwrap();

    let requests = captured.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.object_api_name, "Account");
    assert_eq!(request.layout_mode, LayoutMode::Fixed);
    assert_eq!(
        request.columns,
        vec![
            column("Account ID", "Id", "text", 200),
            column("Account Name", "Name", "text", 200),
            column("Phone", "Phone", "phone", 200),
            column("Annual Revenue", "AnnualRevenue", "currency", 200),
        ]
    );
    assert_eq!(request.records, records());
}

#[tokio::test]
async fn test_shown_fields_from_component_properties() {
    init_tracing();
    let captured = Arc::new(Captured::default());
    let config = TableConfig::from_json(
        r#"{
            "title": "Key Accounts",
            "showRecordCount": true,
            "shownFields": "AnnualRevenue, Name",
            "objectApiName": "Account",
            "engine": {"initialWidth": 120}
        }"#,
    )
    .unwrap();
    let mut table =
        CollectionTable::new(config, records(), collaborators(DISPLAY_TYPES, &captured));

    table.connect().await.unwrap();

    let requests = captured.requests.lock().unwrap();
    let request = &requests[0];
    assert_eq!(request.layout_mode, LayoutMode::Auto);
    assert_eq!(request.title.as_deref(), Some("Key Accounts (3)"));
    assert_eq!(
        request.columns,
        vec![
            column("Annual Revenue", "AnnualRevenue", "currency", 120),
            column("Account Name", "Name", "text", 120),
        ]
    );
}

#[tokio::test]
async fn test_unmapped_type_fails_without_render() {
    init_tracing();
    let captured = Arc::new(Captured::default());
    let partial_map = r#"{"ID": "text", "STRING": "text"}"#;
    let mut table = CollectionTable::new(
        TableConfig::new(),
        records(),
        collaborators(partial_map, &captured),
    );

    let err = table.connect().await.unwrap_err();

    assert!(matches!(err, HostError::Inference(_)));
    assert!(err.to_string().contains("Phone"));
    assert!(table.state().is_failed());
    assert!(captured.requests.lock().unwrap().is_empty());
    assert!(captured.notifications.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_display_map_notifies() {
    init_tracing();
    let captured = Arc::new(Captured::default());
    let mut table = CollectionTable::new(
        TableConfig::new(),
        records(),
        collaborators("[1, 2]", &captured),
    );

    let err = table.connect().await.unwrap_err();

    assert!(err.is_retrieval());
    let notes = captured.notifications.lock().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "getDisplayTypeMap error");
    assert_eq!(notes[0].message, "malformed display type map");
}
