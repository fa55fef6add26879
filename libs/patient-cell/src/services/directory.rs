use crate::models::{InsuranceStatus, Patient, PatientSearchQuery, PatientSummary};

/// Patients matching both the search term and the insurance filter, in
/// collection order.
pub fn search_patients(patients: Vec<Patient>, query: &PatientSearchQuery) -> Vec<Patient> {
    let term = query.q.as_deref().unwrap_or("");
    patients
        .into_iter()
        .filter(|p| p.matches_search(term) && query.insurance.accepts(p))
        .collect()
}

pub fn summarize(patients: &[Patient]) -> PatientSummary {
    let count = |status: InsuranceStatus| {
        patients.iter().filter(|p| p.insurance_status() == status).count()
    };

    PatientSummary {
        total: patients.len(),
        verified: count(InsuranceStatus::Verified),
        pending: count(InsuranceStatus::Pending),
        not_verified: count(InsuranceStatus::NotVerified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InsuranceFilter;
    use entity_cell::Entity;

    fn query(q: Option<&str>, insurance: InsuranceFilter) -> PatientSearchQuery {
        PatientSearchQuery {
            q: q.map(str::to_string),
            insurance,
        }
    }

    fn names(patients: &[Patient]) -> Vec<&str> {
        patients.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn search_matches_name_or_insurer() {
        let by_name = search_patients(Patient::seed(), &query(Some("chen"), InsuranceFilter::All));
        assert_eq!(names(&by_name), vec!["Michael Chen"]);

        let by_insurer = search_patients(Patient::seed(), &query(Some("MEDICARE"), InsuranceFilter::All));
        assert_eq!(names(&by_insurer), vec!["David Thompson"]);
    }

    #[test]
    fn unverified_filter_includes_uninsured() {
        let unverified = search_patients(Patient::seed(), &query(None, InsuranceFilter::Unverified));
        assert_eq!(names(&unverified), vec!["Michael Chen", "Emily Rodriguez"]);
    }

    #[test]
    fn summary_counts_each_status() {
        let summary = summarize(&Patient::seed());
        assert_eq!(summary, PatientSummary {
            total: 5,
            verified: 3,
            pending: 1,
            not_verified: 1,
        });
    }
}
