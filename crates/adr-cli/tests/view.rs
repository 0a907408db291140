use std::path::Path;
use std::sync::Arc;

use adr_cli::view::{identifiers_table, lookup_json, profile_table};
use adr_core::{LookupService, derive};
use adr_ingest::parse_dataset;
use adr_model::{AgeGroup, DrugRecord, Gender, PatientContext};

const CSV: &str = "\
Generic Name,Therapeutic Class,Route,Usual Adult Dose,Common ADRs,Serious ADRs,ADR Label,Total ADRs,Chance of Serious ADR (%),ADR Risk Status
Warfarin,Anticoagulant,Oral,2-10 mg daily,\"Bleeding, Bruising\",\"Hemorrhage\",Hematologic,3,70.6,HIGH
Amoxicillin,Antibiotic,Oral,500 mg every 8 hours,\"Diarrhea, Rash\",None,,2,12,Low
,Orphan,Oral,,,,,,,
";

fn service() -> LookupService {
    let dataset = parse_dataset(CSV.as_bytes(), Path::new("view.csv")).expect("parse");
    LookupService::new(Arc::new(dataset))
}

#[test]
fn identifiers_table_lists_drugs_sorted() {
    let service = service();
    let mut table = identifiers_table(service.dataset());
    let rendered = table.force_no_tty().to_string();
    let amoxicillin = rendered.find("Amoxicillin").expect("amoxicillin row");
    let warfarin = rendered.find("Warfarin").expect("warfarin row");
    assert!(amoxicillin < warfarin);
    assert!(!rendered.contains("Orphan"));
    assert_eq!(service.dataset().rejected_rows().len(), 1);
}

#[test]
fn profile_table_shows_bands_and_lists() {
    let service = service();
    let patient = PatientContext::new(AgeGroup::Senior, Gender::Female);
    let lookup = service.lookup("Warfarin", &patient).expect("warfarin");
    let mut table = profile_table(lookup.record, &lookup.profile);
    let rendered = table.force_no_tty().to_string();

    assert!(rendered.contains("Senior (60+)"));
    assert!(rendered.contains("Female"));
    assert!(rendered.contains("Bleeding, Bruising (2)"));
    assert!(rendered.contains("Hemorrhage (1)"));
    assert!(rendered.contains("70%"));
    assert!(rendered.contains("HIGH"));
}

#[test]
fn profile_table_marks_empty_lists() {
    let service = service();
    let lookup = service
        .lookup("Amoxicillin", &PatientContext::default())
        .expect("amoxicillin");
    let mut table = profile_table(lookup.record, &lookup.profile);
    let rendered = table.force_no_tty().to_string();
    assert!(rendered.contains("(none)"));
    assert!(rendered.contains("N/A"));
}

#[test]
fn lookup_json_carries_record_and_profile() {
    let service = service();
    let lookup = service
        .lookup("Warfarin", &PatientContext::default())
        .expect("warfarin");
    let json = lookup_json(lookup.record, &lookup.profile).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["record"]["generic_name"], "Warfarin");
    assert_eq!(value["profile"]["risk_band"], "high");
    assert_eq!(value["profile"]["status_band"], "high");
    assert_eq!(value["profile"]["serious_count"], 1);
    assert_eq!(value["profile"]["patient"]["age_group"], "Adult");
}

#[test]
fn miss_is_case_sensitive() {
    let service = service();
    assert!(service.lookup("warfarin", &PatientContext::default()).is_err());
}

#[test]
fn chance_above_hundred_keeps_its_label() {
    let mut record = DrugRecord::new("Colchicine");
    record.chance_of_serious_adr_percent = Some(150.0);
    let profile = derive(&record, &PatientContext::default());

    let mut table = profile_table(&record, &profile);
    let rendered = table.force_no_tty().to_string();

    assert!(rendered.contains(&format!("{} 150%", "█".repeat(20))));
    assert!(!rendered.contains("100%"));
}
