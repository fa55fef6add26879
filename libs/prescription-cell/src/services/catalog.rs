use crate::models::{Prescription, PrescriptionQuery, PrescriptionStats, PrescriptionStatus};

pub fn stats(prescriptions: &[Prescription]) -> PrescriptionStats {
    let count = |status: PrescriptionStatus| {
        prescriptions.iter().filter(|p| p.status == status).count()
    };

    PrescriptionStats {
        total: prescriptions.len(),
        active: count(PrescriptionStatus::Active),
        expired: count(PrescriptionStatus::Expired),
        pending: count(PrescriptionStatus::Pending),
    }
}

/// Applies the list filters. The search term matches the medication or the
/// prescribing patient's name, resolved through `patient_name`; a
/// prescription whose patient cannot be resolved only matches on medication.
pub fn filter_prescriptions<F>(
    prescriptions: Vec<Prescription>,
    query: &PrescriptionQuery,
    patient_name: F,
) -> Vec<Prescription>
where
    F: Fn(i64) -> Option<String>,
{
    let term = query.q.as_deref().map(str::trim).unwrap_or("").to_lowercase();

    prescriptions
        .into_iter()
        .filter(|p| query.status.map_or(true, |s| p.status == s))
        .filter(|p| {
            term.is_empty()
                || p.matches_medication(&term)
                || patient_name(p.patient_id).is_some_and(|name| name.to_lowercase().contains(&term))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_cell::Entity;

    fn ids(prescriptions: &[Prescription]) -> Vec<i64> {
        prescriptions.iter().map(|p| p.id).collect()
    }

    #[test]
    fn counts_statuses() {
        assert_eq!(stats(&Prescription::seed()), PrescriptionStats {
            total: 5,
            active: 3,
            expired: 1,
            pending: 1,
        });
        assert_eq!(stats(&[]), PrescriptionStats::default());
    }

    #[test]
    fn filters_by_status_and_term() {
        let query = PrescriptionQuery {
            q: Some("MET".to_string()),
            status: None,
        };
        assert_eq!(ids(&filter_prescriptions(Prescription::seed(), &query, |_| None)), vec![2]);

        let query = PrescriptionQuery {
            q: None,
            status: Some(PrescriptionStatus::Active),
        };
        assert_eq!(ids(&filter_prescriptions(Prescription::seed(), &query, |_| None)), vec![1, 2, 3]);
    }

    #[test]
    fn term_matches_resolved_patient_name() {
        let query = PrescriptionQuery {
            q: Some("rodriguez".to_string()),
            status: None,
        };
        let found = filter_prescriptions(Prescription::seed(), &query, |id| {
            (id == 3).then(|| "Emily Rodriguez".to_string())
        });
        assert_eq!(ids(&found), vec![5]);
    }
}
