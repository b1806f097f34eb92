//! Specifications for the candidate roster CSV importer.

use std::io::Cursor;

use promotion_ai::workflows::promotion::{
    CandidateRosterImporter, Division, PreviousEmployers, RosterImportError, ValidationError,
    YesNo,
};

const HEADER: &str = "Division,Qualification,Gender,Trainings_Attended,Year_of_birth,Last_performance_score,Year_of_recruitment,Targets_met,Previous_Award,Training_score_average,Foreign_schooled,Marital_Status,Past_Disciplinary_Action,Previous_IntraDepartmental_Movement,No_of_previous_employers";

fn roster(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv
}

#[test]
fn imports_valid_rows_in_order() {
    let csv = roster(&[
        "Research and Innovation,First Degree or HND,Female,4,1988,7.5,2012,Yes,No,61,No,Single,No,Yes,2",
        "People/HR Management,\"MSc, MBA and PhD\",Male,2,1975,11.0,1999,No,Yes,88,Yes,Married,No,No,More than 5",
    ]);

    let profiles =
        CandidateRosterImporter::from_reader(Cursor::new(csv)).expect("roster imports");

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].division, Division::ResearchAndInnovation);
    assert_eq!(profiles[0].targets_met, YesNo::Yes);
    assert_eq!(profiles[1].division, Division::PeopleHrManagement);
    assert_eq!(
        profiles[1].no_of_previous_employers,
        PreviousEmployers::MoreThanFive
    );
}

#[test]
fn reports_the_line_of_an_out_of_domain_row() {
    let csv = roster(&[
        "Research and Innovation,First Degree or HND,Female,4,1988,7.5,2012,Yes,No,61,No,Single,No,Yes,2",
        "Research and Innovation,First Degree or HND,Female,1,1988,7.5,2012,Yes,No,61,No,Single,No,Yes,2",
    ]);

    match CandidateRosterImporter::from_reader(Cursor::new(csv)) {
        Err(RosterImportError::Row { line, source }) => {
            assert_eq!(line, 3);
            assert!(matches!(
                source,
                ValidationError::OutOfRange {
                    field: "Trainings_Attended",
                    ..
                }
            ));
        }
        other => panic!("expected row validation error, got {other:?}"),
    }
}

#[test]
fn rejects_a_label_outside_the_closed_enum() {
    let csv = roster(&[
        "Space Operations,First Degree or HND,Female,4,1988,7.5,2012,Yes,No,61,No,Single,No,Yes,2",
    ]);

    match CandidateRosterImporter::from_reader(Cursor::new(csv)) {
        Err(RosterImportError::Csv(_)) => {}
        other => panic!("expected CSV deserialization error, got {other:?}"),
    }
}

#[test]
fn empty_roster_yields_no_profiles() {
    let profiles = CandidateRosterImporter::from_reader(Cursor::new(roster(&[])))
        .expect("empty roster imports");
    assert!(profiles.is_empty());
}
