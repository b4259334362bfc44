//! Library integration tests.

use car_diagnostics::diagnostics::{
    DiagnosticEngine, Finding, Stage, StageId, StageOutcome, Verdict, FAILURE_MESSAGE,
    SUCCESS_MESSAGE,
};
use car_diagnostics::record::{
    ConditionType, DataField, Part, PartType, RequiredParts, VehicleRecord,
};
use car_diagnostics::ui::MockUI;
use car_diagnostics::DiagnosticsError;

fn complete_record() -> VehicleRecord {
    let mut parts = vec![
        Part::new("e", PartType::Engine, ConditionType::New),
        Part::new("el", PartType::Electrical, ConditionType::Good),
        Part::new("ff", PartType::FuelFilter, ConditionType::Worn),
        Part::new("of", PartType::OilFilter, ConditionType::Good),
    ];
    for i in 0..4 {
        parts.push(Part::new(format!("t{i}"), PartType::Tire, ConditionType::Good));
    }
    VehicleRecord {
        year: Some("1992".into()),
        make: Some("Ford".into()),
        model: Some("Thunderbird".into()),
        parts,
    }
}

#[test]
fn error_types_are_public() {
    let err = DiagnosticsError::invalid_argument("PartType must not be null");
    assert!(err.to_string().contains("PartType"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> car_diagnostics::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn damaged_part_diagnostics_never_follow_missing_fields() {
    let mut record = complete_record();
    record.make = None;
    record.model = None;
    record.parts[0].condition = Some(ConditionType::Cracked);
    let mut ui = MockUI::new();

    DiagnosticEngine::default().execute(&record, &mut ui).unwrap();

    assert_eq!(
        ui.lines(),
        &[
            "Missing Data Field Detected: MAKE".to_string(),
            "Missing Data Field Detected: MODEL".to_string(),
            "Data Field missing.".to_string(),
            FAILURE_MESSAGE.to_string(),
        ]
    );
}

#[test]
fn surplus_parts_with_working_condition_pass() {
    let mut record = complete_record();
    record
        .parts
        .push(Part::new("spare", PartType::Tire, ConditionType::New));
    record
        .parts
        .push(Part::new("sp", PartType::SparkPlug, ConditionType::Good));
    let mut ui = MockUI::new();

    let report = DiagnosticEngine::default().execute(&record, &mut ui).unwrap();

    assert_eq!(report.verdict(), Verdict::Passed);
    assert_eq!(ui.lines(), &[SUCCESS_MESSAGE.to_string()]);
}

#[test]
fn alternate_table_is_injected_without_globals() {
    let mut record = complete_record();
    record.parts.retain(|p| p.part_type == Some(PartType::Tire));
    let engine = DiagnosticEngine::new(RequiredParts::new([(PartType::Tire, 4)]));

    assert!(engine.run(&record).unwrap().passed());
    assert!(!DiagnosticEngine::default().run(&record).unwrap().passed());
}

struct RequireInventoryIds;

impl Stage for RequireInventoryIds {
    fn id(&self) -> StageId {
        StageId::new("inventory-ids")
    }

    fn name(&self) -> &str {
        "Inventory IDs"
    }

    fn failure_summary(&self) -> &str {
        "Inventory IDs missing."
    }

    fn check(&self, record: &VehicleRecord) -> car_diagnostics::Result<StageOutcome> {
        let findings = if record.parts.iter().any(|p| p.inventory_id.is_none()) {
            vec![Finding::missing_data_field(DataField::Model)]
        } else {
            Vec::new()
        };
        Ok(StageOutcome::from_findings(findings))
    }
}

#[test]
fn custom_stage_list_runs_in_given_order() {
    let engine = DiagnosticEngine::with_stages(vec![Box::new(RequireInventoryIds)]);
    let mut record = complete_record();
    record.parts[3].inventory_id = None;

    let report = engine.run(&record).unwrap();

    assert_eq!(engine.stage_ids(), vec![StageId::new("inventory-ids")]);
    assert_eq!(
        report.failed_stage().and_then(|s| s.summary.clone()),
        Some("Inventory IDs missing.".to_string())
    );
}

#[test]
fn deficit_never_holds_untracked_types_or_zero_counts() {
    let tables = [
        RequiredParts::standard(),
        RequiredParts::new([(PartType::BrakePad, 2), (PartType::Tire, 0)]),
    ];
    let inventories = [
        vec![],
        vec![PartType::Tire; 7],
        vec![PartType::BrakePad, PartType::SparkPlug, PartType::Engine],
    ];

    for table in &tables {
        for types in &inventories {
            let record = VehicleRecord {
                parts: types
                    .iter()
                    .map(|t| Part::new("x", *t, ConditionType::Good))
                    .collect(),
                ..Default::default()
            };
            let missing = record.missing_parts(table);

            for (part_type, count) in &missing {
                assert!(*count > 0);
                assert!(table.get(*part_type).is_some());
            }
        }
    }
}
