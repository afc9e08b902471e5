//! End-to-end tests for the session state machine
//!
//! Each test runs against a temporary directory holding its own catalog,
//! users file, chart image, and PDF output.

use skillgap::core::config::AppConfig;
use skillgap::session::{Phase, Session};
use skillgap::store::UserStore;
use tempfile::{tempdir, TempDir};

const CATALOG: &str = r#"{
    "Data Analyst": {
        "Excel": "Spreadsheets and pivot tables",
        "SQL": "Queries and aggregation",
        "Power BI": "Dashboards",
        "Python": "Data cleaning with pandas"
    },
    "Data Scientist": {
        "Python (Pandas/Numpy etc)": "Data wrangling",
        "Machine Learning (Scikit-learn)": "Model building",
        "Statistics": "Probability and regression",
        "Deep Learning": "Neural network basics"
    }
}"#;

fn session_in_tempdir() -> (TempDir, Session) {
    let dir = tempdir().unwrap();
    let config = AppConfig::rooted_at(dir.path());
    std::fs::write(&config.roles_path, CATALOG).unwrap();
    let session = Session::new(config).unwrap();
    (dir, session)
}

/// Test 1: phases advance NoRoleSelected -> RoleSelected -> Submitted -> PdfGenerated
#[test]
fn test_full_flow_reaches_pdf() {
    let (dir, mut session) = session_in_tempdir();
    assert_eq!(session.phase(), Phase::NoRoleSelected);

    session.select_role("Data Analyst").unwrap();
    assert_eq!(session.phase(), Phase::RoleSelected);

    session.set_name("Asha");
    session.set_status("Student");
    session.adjust_rating("SQL", 1).unwrap();
    session.adjust_rating("SQL", 1).unwrap();

    let record = session.submit().unwrap().clone();
    assert_eq!(session.phase(), Phase::Submitted);
    assert_eq!(record.skills["SQL"], 3);
    assert_eq!(record.skills["Excel"], 1);

    let chart = dir.path().join("skill_gap_chart.png");
    assert!(chart.exists());

    let pdf = session.generate_pdf().unwrap().to_path_buf();
    assert_eq!(session.phase(), Phase::PdfGenerated);
    assert!(pdf.exists());
    assert!(std::fs::metadata(&pdf).unwrap().len() > 0);
}

/// Test 2: the PDF action is locked until something has been submitted
#[test]
fn test_pdf_requires_submission() {
    let (_dir, mut session) = session_in_tempdir();
    assert!(session.generate_pdf().is_err());

    session.select_role("Data Analyst").unwrap();
    assert!(session.generate_pdf().is_err());
}

/// Test 3: a rejected submission stores nothing and draws nothing
#[test]
fn test_incomplete_form_never_persists() {
    let (dir, mut session) = session_in_tempdir();
    session.select_role("Data Analyst").unwrap();
    session.set_name("Asha");
    // status left empty

    assert!(session.submit().is_err());
    assert_eq!(session.phase(), Phase::RoleSelected);
    assert!(session.latest().is_none());
    assert!(!dir.path().join("skill_gap_chart.png").exists());

    let store = UserStore::new(&dir.path().join("users.json"));
    assert!(store.load().unwrap().is_empty());
}

/// Test 4: switching roles resets the skill set and discards ratings
#[test]
fn test_role_switch_discards_ratings() {
    let (_dir, mut session) = session_in_tempdir();
    session.select_role("Data Analyst").unwrap();
    session.adjust_rating("SQL", 5).unwrap();

    session.select_role("Data Scientist").unwrap();
    assert_eq!(session.phase(), Phase::RoleSelected);
    assert!(session.adjust_rating("SQL", 1).is_err());
    assert!(session
        .form()
        .entries()
        .iter()
        .all(|e| e.rating.value() == 1));
}

/// Test 5: N submissions persist N records matching the form at each submit
#[test]
fn test_each_submission_is_persisted() {
    let (dir, mut session) = session_in_tempdir();
    session.set_name("Asha");
    session.set_status("Working");

    session.select_role("Data Analyst").unwrap();
    session.adjust_rating("Excel", 3).unwrap();
    session.submit().unwrap();

    session.select_role("Data Scientist").unwrap();
    session.adjust_rating("Statistics", 8).unwrap();
    session.submit().unwrap();

    let records = UserStore::new(&dir.path().join("users.json"))
        .load()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].aspiring_role, "Data Analyst");
    assert_eq!(records[0].skills["Excel"], 4);
    assert_eq!(records[1].aspiring_role, "Data Scientist");
    assert_eq!(records[1].skills["Statistics"], 9);
    assert_eq!(records[1].skills["Deep Learning"], 1);
}

/// Test 6: selecting an unknown role is rejected and changes nothing
#[test]
fn test_unknown_role_is_rejected() {
    let (_dir, mut session) = session_in_tempdir();
    assert!(session.select_role("Barista").is_err());
    assert_eq!(session.phase(), Phase::NoRoleSelected);
}
