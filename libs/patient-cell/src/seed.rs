use chrono::NaiveDate;

use crate::models::{Insurance, MedicalHistoryEntry, Patient};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn insurance(provider: &str, policy: &str, group: &str, verified: bool) -> Option<Insurance> {
    Some(Insurance {
        provider: provider.to_string(),
        policy_number: policy.to_string(),
        group_number: group.to_string(),
        verified,
    })
}

fn history(entry_type: &str, notes: &str, on: NaiveDate, attachments: Option<u32>) -> MedicalHistoryEntry {
    MedicalHistoryEntry {
        entry_type: entry_type.to_string(),
        notes: notes.to_string(),
        date: on,
        attachment_count: attachments,
    }
}

/// Default patient roster shown before anything has been saved.
pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: 1,
            name: "Sarah Johnson".to_string(),
            date_of_birth: date(1985, 3, 14),
            insurance: insurance("Blue Cross Blue Shield", "BCBS-4471029", "GRP-1120", true),
            upcoming_appointments: vec![1, 4],
            medical_history: vec![
                history("Annual Physical", "Routine exam, blood pressure slightly elevated.", date(2024, 1, 10), Some(2)),
                history("Lab Work", "Lipid panel within normal range.", date(2024, 1, 17), Some(1)),
            ],
        },
        Patient {
            id: 2,
            name: "Michael Chen".to_string(),
            date_of_birth: date(1972, 11, 2),
            insurance: insurance("Aetna", "AET-8820315", "GRP-3307", false),
            upcoming_appointments: vec![2],
            medical_history: vec![
                history("Diagnosis", "Type 2 diabetes, managed with metformin.", date(2022, 6, 5), None),
            ],
        },
        Patient {
            id: 3,
            name: "Emily Rodriguez".to_string(),
            date_of_birth: date(1994, 7, 21),
            insurance: None,
            upcoming_appointments: vec![3],
            medical_history: Vec::new(),
        },
        Patient {
            id: 4,
            name: "David Thompson".to_string(),
            date_of_birth: date(1958, 1, 30),
            insurance: insurance("Medicare", "MED-1A2B3C4D", "N/A", true),
            upcoming_appointments: vec![5],
            medical_history: vec![
                history("Procedure", "Cardiac stress test, no ischemia detected.", date(2023, 9, 12), Some(3)),
                history("Follow-up", "Atrial fibrillation stable on current regimen.", date(2024, 2, 2), None),
            ],
        },
        Patient {
            id: 5,
            name: "Aisha Patel".to_string(),
            date_of_birth: date(2001, 5, 9),
            insurance: insurance("UnitedHealthcare", "UHC-5590127", "GRP-8841", true),
            upcoming_appointments: vec![6],
            medical_history: vec![
                history("Allergy", "Penicillin allergy, documented reaction: hives.", date(2019, 4, 18), None),
            ],
        },
    ]
}
