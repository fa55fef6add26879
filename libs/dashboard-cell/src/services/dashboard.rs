use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use appointment_cell::{services as schedule, Appointment, AppointmentService, AppointmentStatus};
use entity_cell::ServiceError;
use patient_cell::{Patient, PatientService};
use prescription_cell::{
    services as catalog, Prescription, PrescriptionQuery, PrescriptionService, PrescriptionStatus,
};

use crate::models::{
    AppointmentListing, DashboardStats, PatientProfile, PrescriptionListing, ScheduledVisit,
};

/// Read-only views composed from the three record services. References are
/// resolved here; a record pointing at a patient that no longer exists is left
/// out of any joined view.
#[derive(Clone)]
pub struct DashboardService {
    patients: PatientService,
    appointments: AppointmentService,
    prescriptions: PrescriptionService,
}

impl DashboardService {
    pub fn new(
        patients: PatientService,
        appointments: AppointmentService,
        prescriptions: PrescriptionService,
    ) -> Self {
        Self {
            patients,
            appointments,
            prescriptions,
        }
    }

    pub async fn stats(&self, today: NaiveDate) -> Result<DashboardStats, ServiceError> {
        debug!("Computing dashboard stats for {}", today);

        let (patients, appointments, prescriptions) = tokio::try_join!(
            self.patients.get_all(),
            self.appointments.get_all(),
            self.prescriptions.get_all(),
        )?;

        Ok(DashboardStats {
            date: today,
            todays_appointments: appointments.iter().filter(|a| a.is_on(today)).count(),
            total_patients: patients.len(),
            active_prescriptions: prescriptions
                .iter()
                .filter(|p| p.status == PrescriptionStatus::Active)
                .count(),
            completed_consultations: appointments
                .iter()
                .filter(|a| a.is_video_consultation() && a.status == AppointmentStatus::Completed)
                .count(),
        })
    }

    /// The day's appointments in start order, each with its patient.
    pub async fn todays_schedule(&self, today: NaiveDate) -> Result<Vec<ScheduledVisit>, ServiceError> {
        let (patients, appointments) =
            tokio::try_join!(self.patients.get_all(), self.appointments.get_all())?;
        let by_id = index(patients);

        let visits = schedule::on_day(appointments, today)
            .into_iter()
            .filter_map(|appointment| {
                let patient = by_id.get(&appointment.patient_id).cloned();
                if patient.is_none() {
                    warn!(
                        "Appointment {} references missing patient {}",
                        appointment.id, appointment.patient_id
                    );
                }
                patient.map(|patient| ScheduledVisit { appointment, patient })
            })
            .collect();

        Ok(visits)
    }

    pub async fn patient_profile(&self, patient_id: i64) -> Result<PatientProfile, ServiceError> {
        debug!("Loading profile for patient {}", patient_id);

        let (patient, appointments, prescriptions) = tokio::try_join!(
            self.patients.get_by_id(patient_id),
            self.appointments.get_all(),
            self.prescriptions.get_all(),
        )?;
        let patient = patient.ok_or_else(|| ServiceError::not_found::<Patient>(patient_id))?;

        let mut appointments: Vec<Appointment> = appointments
            .into_iter()
            .filter(|a| a.patient_id == patient_id)
            .collect();
        appointments.sort_by_key(|a| a.scheduled_time);

        let prescriptions: Vec<Prescription> = prescriptions
            .into_iter()
            .filter(|p| p.patient_id == patient_id)
            .collect();

        Ok(PatientProfile {
            patient,
            appointments,
            prescriptions,
        })
    }

    /// Prescriptions filtered by status and by a term matching the medication
    /// or the patient's name.
    pub async fn search_prescriptions(
        &self,
        query: &PrescriptionQuery,
    ) -> Result<Vec<PrescriptionListing>, ServiceError> {
        let (patients, prescriptions) =
            tokio::try_join!(self.patients.get_all(), self.prescriptions.get_all())?;
        let by_id = index(patients);
        let name_of = |id: i64| by_id.get(&id).map(|p| p.name.clone());

        let listings = catalog::filter_prescriptions(prescriptions, query, &name_of)
            .into_iter()
            .filter_map(|prescription| {
                name_of(prescription.patient_id).map(|patient_name| PrescriptionListing {
                    prescription,
                    patient_name,
                })
            })
            .collect();

        Ok(listings)
    }

    /// Appointments whose patient name or type contains `term`.
    pub async fn search_appointments(&self, term: &str) -> Result<Vec<AppointmentListing>, ServiceError> {
        let (patients, appointments) =
            tokio::try_join!(self.patients.get_all(), self.appointments.get_all())?;
        let by_id = index(patients);
        let needle = term.trim().to_lowercase();

        let listings = appointments
            .into_iter()
            .filter_map(|appointment| {
                let patient = by_id.get(&appointment.patient_id)?;
                let hit = needle.is_empty()
                    || patient.name.to_lowercase().contains(&needle)
                    || appointment.matches_search(&needle);
                hit.then(|| AppointmentListing {
                    patient_name: patient.name.clone(),
                    appointment,
                })
            })
            .collect();

        Ok(listings)
    }
}

fn index(patients: Vec<Patient>) -> HashMap<i64, Patient> {
    patients.into_iter().map(|p| (p.id, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use entity_cell::LocalEntityService;
    use shared_database::MemoryStorage;

    fn seeded() -> DashboardService {
        let storage = Arc::new(MemoryStorage::new());
        DashboardService::new(
            Arc::new(LocalEntityService::<Patient>::new(storage.clone(), None)),
            Arc::new(LocalEntityService::<Appointment>::new(storage.clone(), None)),
            Arc::new(LocalEntityService::<Prescription>::new(storage, None)),
        )
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    #[tokio::test]
    async fn stats_over_seed() {
        let stats = seeded().stats(day(16)).await.unwrap();

        assert_eq!(stats, DashboardStats {
            date: day(16),
            todays_appointments: 3,
            total_patients: 5,
            active_prescriptions: 3,
            completed_consultations: 1,
        });
    }

    #[tokio::test]
    async fn empty_day_has_no_schedule() {
        let service = seeded();
        assert!(service.todays_schedule(day(1)).await.unwrap().is_empty());
        assert_eq!(service.stats(day(1)).await.unwrap().todays_appointments, 0);
    }

    #[tokio::test]
    async fn appointment_search_matches_name_or_type() {
        let service = seeded();

        let by_name = service.search_appointments("sarah").await.unwrap();
        let ids: Vec<i64> = by_name.iter().map(|l| l.appointment.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let by_type = service.search_appointments("Emergency").await.unwrap();
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].patient_name, "David Thompson");
    }
}
