use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Prescription, PrescriptionStatus};

fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

fn rx(
    id: i64,
    patient_id: i64,
    medication: &str,
    dosage: &str,
    instructions: &str,
    refills: u32,
    prescribed: DateTime<Utc>,
    status: PrescriptionStatus,
) -> Prescription {
    Prescription {
        id,
        patient_id,
        medication: medication.to_string(),
        dosage: dosage.to_string(),
        instructions: instructions.to_string(),
        refills,
        prescribed_date: prescribed,
        status,
    }
}

/// Default prescriptions shown before anything has been saved.
pub fn prescriptions() -> Vec<Prescription> {
    vec![
        rx(1, 1, "Lisinopril", "10mg", "Take once daily in the morning", 3, at(2024, 11, 2), PrescriptionStatus::Active),
        rx(2, 2, "Metformin", "500mg", "Take twice daily with meals", 5, at(2024, 10, 15), PrescriptionStatus::Active),
        rx(3, 4, "Apixaban", "5mg", "Take twice daily, do not skip doses", 2, at(2024, 9, 1), PrescriptionStatus::Active),
        rx(4, 5, "Cetirizine", "10mg", "Take once daily as needed for allergies", 0, at(2023, 4, 20), PrescriptionStatus::Expired),
        rx(5, 3, "Amoxicillin", "250mg", "Take three times daily for 7 days", 0, at(2024, 12, 10), PrescriptionStatus::Pending),
    ]
}
