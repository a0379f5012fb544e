#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Sidebar rendering tests.
//!
//! Mounts the built-in menu the way the sidebar shows it (only the open
//! section's sub-links are listed) and checks labels, active state and
//! navigation by position.

use carenav_kernel::Expansion;
use carenav_test_utils::{NavHarness, no_grants};

fn setup(location: &str) -> NavHarness {
    NavHarness::at(location).expansion(Expansion::ActiveSection)
}

fn setup_no_permissions(location: &str) -> NavHarness {
    setup(location).grants(no_grants())
}

fn label_at(harness: &NavHarness, index: usize) -> String {
    harness.entry_at(index).unwrap().label
}

fn active_at(harness: &NavHarness, index: usize) -> bool {
    harness.entry_at(index).unwrap().active
}

fn click_at(harness: &NavHarness, index: usize) {
    harness.entry_at(index).unwrap().activate();
}

// -------------------------------------------------------------------------
// dashboard
// -------------------------------------------------------------------------

#[test]
fn dashboard_link_renders() {
    let nav = setup("/");
    assert_eq!(label_at(&nav, 0), "dashboard.label");
}

#[test]
fn dashboard_active_at_root() {
    let nav = setup("/");
    assert!(active_at(&nav, 0));
}

#[test]
fn dashboard_navigates_to_root() {
    let nav = setup("/patients");
    click_at(&nav, 0);
    assert_eq!(nav.location(), "/");
}

// -------------------------------------------------------------------------
// patients
// -------------------------------------------------------------------------

#[test]
fn patients_main_link_renders() {
    let nav = setup("/");
    assert_eq!(label_at(&nav, 1), "patients.label");
}

#[test]
fn new_patient_link_renders() {
    let nav = setup("/patients");
    assert_eq!(label_at(&nav, 2), "patients.newPatient");
}

#[test]
fn new_patient_hidden_without_write_patients() {
    let nav = setup_no_permissions("/patients");
    assert!(!nav.labels().iter().any(|l| l == "patients.newPatient"));
}

#[test]
fn patients_list_link_renders() {
    let nav = setup("/patients");
    assert_eq!(label_at(&nav, 3), "patients.patientsList");
}

#[test]
fn patients_list_hidden_without_read_patients() {
    let nav = setup_no_permissions("/patients");
    assert!(!nav.labels().iter().any(|l| l == "patients.patientsList"));
}

#[test]
fn patients_main_link_active_at_patients() {
    let nav = setup("/patients");
    assert!(active_at(&nav, 1));
}

#[test]
fn patients_main_link_navigates() {
    let nav = setup("/");
    click_at(&nav, 1);
    assert_eq!(nav.location(), "/patients");
}

#[test]
fn new_patient_active_at_patients_new() {
    let nav = setup("/patients/new");
    assert!(active_at(&nav, 2));
    assert!(!active_at(&nav, 3));
}

#[test]
fn new_patient_navigates() {
    let nav = setup("/patients");
    click_at(&nav, 2);
    assert_eq!(nav.location(), "/patients/new");
}

#[test]
fn patients_list_active_at_patients() {
    let nav = setup("/patients");
    assert!(active_at(&nav, 3));
    assert!(!active_at(&nav, 2));
}

#[test]
fn patients_list_navigates() {
    let nav = setup("/patients/new");
    click_at(&nav, 3);
    assert_eq!(nav.location(), "/patients");
}

// -------------------------------------------------------------------------
// appointments
// -------------------------------------------------------------------------

#[test]
fn scheduling_link_renders() {
    let nav = setup("/appointments");
    assert_eq!(label_at(&nav, 2), "scheduling.label");
}

#[test]
fn new_appointment_link_renders() {
    let nav = setup("/appointments/new");
    assert_eq!(label_at(&nav, 3), "scheduling.appointments.new");
}

#[test]
fn new_appointment_hidden_without_write_appointments() {
    let nav = setup_no_permissions("/appointments");
    assert!(!nav.labels().iter().any(|l| l == "scheduling.appointments.new"));
}

#[test]
fn schedule_link_renders() {
    let nav = setup("/appointments");
    assert_eq!(label_at(&nav, 4), "scheduling.appointments.schedule");
}

#[test]
fn schedule_hidden_without_read_appointments() {
    let nav = setup_no_permissions("/appointments");
    assert!(
        !nav.labels()
            .iter()
            .any(|l| l == "scheduling.appointments.schedule")
    );
}

#[test]
fn scheduling_active_at_appointments() {
    let nav = setup("/appointments");
    assert!(active_at(&nav, 2));
}

#[test]
fn scheduling_navigates() {
    let nav = setup("/");
    click_at(&nav, 2);
    assert_eq!(nav.location(), "/appointments");
}

#[test]
fn new_appointment_active_at_appointments_new() {
    let nav = setup("/appointments/new");
    assert!(active_at(&nav, 3));
}

#[test]
fn new_appointment_navigates() {
    let nav = setup("/appointments");
    click_at(&nav, 3);
    assert_eq!(nav.location(), "/appointments/new");
}

#[test]
fn schedule_active_at_appointments() {
    let nav = setup("/appointments");
    assert!(active_at(&nav, 4));
}

#[test]
fn schedule_navigates() {
    let nav = setup("/appointments/new");
    click_at(&nav, 4);
    assert_eq!(nav.location(), "/appointments");
}

// -------------------------------------------------------------------------
// labs
// -------------------------------------------------------------------------

#[test]
fn labs_main_link_renders() {
    let nav = setup("/labs");
    assert_eq!(label_at(&nav, 3), "labs.label");
}

#[test]
fn new_lab_request_link_renders() {
    let nav = setup("/labs");
    assert_eq!(label_at(&nav, 4), "labs.requests.new");
}

#[test]
fn new_lab_request_hidden_without_request_lab() {
    let nav = setup_no_permissions("/labs");
    assert!(!nav.labels().iter().any(|l| l == "labs.requests.new"));
}

#[test]
fn labs_list_link_renders() {
    let nav = setup("/labs");
    assert_eq!(label_at(&nav, 5), "labs.requests.label");
}

#[test]
fn labs_list_hidden_without_view_labs() {
    let nav = setup_no_permissions("/labs");
    assert!(!nav.labels().iter().any(|l| l == "labs.requests.label"));
}

#[test]
fn labs_main_link_active_at_labs() {
    let nav = setup("/labs");
    assert!(active_at(&nav, 3));
}

#[test]
fn labs_main_link_navigates() {
    let nav = setup("/");
    click_at(&nav, 3);
    assert_eq!(nav.location(), "/labs");
}

#[test]
fn new_lab_request_active_at_labs_new() {
    let nav = setup("/labs/new");
    assert!(active_at(&nav, 4));
}

#[test]
fn new_lab_request_navigates() {
    let nav = setup("/labs");
    click_at(&nav, 4);
    assert_eq!(nav.location(), "/labs/new");
}

#[test]
fn labs_list_active_at_labs() {
    let nav = setup("/labs");
    assert!(active_at(&nav, 5));
}

#[test]
fn labs_list_navigates() {
    let nav = setup("/labs/new");
    click_at(&nav, 5);
    assert_eq!(nav.location(), "/labs");
}

// -------------------------------------------------------------------------
// incidents
// -------------------------------------------------------------------------

#[test]
fn incidents_main_link_renders() {
    let nav = setup("/incidents");
    assert_eq!(label_at(&nav, 4), "incidents.label");
}

#[test]
fn new_incident_report_link_renders() {
    let nav = setup("/incidents");
    assert_eq!(label_at(&nav, 5), "incidents.reports.new");
}

#[test]
fn new_incident_report_hidden_without_report_incident() {
    let nav = setup_no_permissions("/incidents");
    assert!(!nav.labels().iter().any(|l| l == "incidents.reports.new"));
}

#[test]
fn incidents_list_link_renders() {
    let nav = setup("/incidents");
    assert_eq!(label_at(&nav, 6), "incidents.reports.label");
}

#[test]
fn incidents_list_hidden_without_view_incidents() {
    let nav = setup_no_permissions("/incidents");
    assert!(!nav.labels().iter().any(|l| l == "incidents.reports.label"));
}

#[test]
fn incidents_main_link_active_at_incidents() {
    let nav = setup("/incidents");
    assert!(active_at(&nav, 4));
}

#[test]
fn incidents_main_link_navigates() {
    let nav = setup("/");
    click_at(&nav, 4);
    assert_eq!(nav.location(), "/incidents");
}

#[test]
fn new_incident_report_active_at_incidents_new() {
    let nav = setup("/incidents/new");
    assert!(active_at(&nav, 5));
}

#[test]
fn new_incident_report_navigates() {
    let nav = setup("/incidents");
    click_at(&nav, 5);
    assert_eq!(nav.location(), "/incidents/new");
}

#[test]
fn incidents_list_active_at_incidents() {
    let nav = setup("/incidents");
    assert!(active_at(&nav, 6));
}

#[test]
fn incidents_list_navigates() {
    let nav = setup("/incidents/new");
    click_at(&nav, 6);
    assert_eq!(nav.location(), "/incidents");
}
