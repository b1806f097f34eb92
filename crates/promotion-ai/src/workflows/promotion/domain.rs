use serde::{Deserialize, Serialize};

/// Feature columns in the exact order the encoder/classifier pair was fitted against.
///
/// Any divergence from this order or set is a contract violation against the trained
/// artifacts, not a recoverable runtime condition.
pub const FEATURE_COLUMNS: [&str; 15] = [
    "Division",
    "Qualification",
    "Gender",
    "Trainings_Attended",
    "Year_of_birth",
    "Last_performance_score",
    "Year_of_recruitment",
    "Targets_met",
    "Previous_Award",
    "Training_score_average",
    "Foreign_schooled",
    "Marital_Status",
    "Past_Disciplinary_Action",
    "Previous_IntraDepartmental_Movement",
    "No_of_previous_employers",
];

/// Columns the fitted encoder rewrites into numeric codes, in feature order.
pub const CATEGORICAL_COLUMNS: [&str; 8] = [
    "Division",
    "Qualification",
    "Gender",
    "Foreign_schooled",
    "Marital_Status",
    "Past_Disciplinary_Action",
    "Previous_IntraDepartmental_Movement",
    "No_of_previous_employers",
];

/// Organizational units candidates can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "Commercial Sales and Marketing")]
    CommercialSalesAndMarketing,
    #[serde(rename = "Customer Support and Field Operations")]
    CustomerSupportAndFieldOperations,
    #[serde(rename = "Information and Strategy")]
    InformationAndStrategy,
    #[serde(rename = "Information Technology and Solution Support")]
    InformationTechnologyAndSolutionSupport,
    #[serde(rename = "Sourcing and Purchasing")]
    SourcingAndPurchasing,
    #[serde(rename = "Business Finance Operations")]
    BusinessFinanceOperations,
    #[serde(rename = "People/HR Management")]
    PeopleHrManagement,
    #[serde(rename = "Regulatory and Legal services")]
    RegulatoryAndLegalServices,
    #[serde(rename = "Research and Innovation")]
    ResearchAndInnovation,
}

impl Division {
    pub const ALL: [Self; 9] = [
        Self::CommercialSalesAndMarketing,
        Self::CustomerSupportAndFieldOperations,
        Self::InformationAndStrategy,
        Self::InformationTechnologyAndSolutionSupport,
        Self::SourcingAndPurchasing,
        Self::BusinessFinanceOperations,
        Self::PeopleHrManagement,
        Self::RegulatoryAndLegalServices,
        Self::ResearchAndInnovation,
    ];

    /// Label exactly as it appeared in the training data.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CommercialSalesAndMarketing => "Commercial Sales and Marketing",
            Self::CustomerSupportAndFieldOperations => "Customer Support and Field Operations",
            Self::InformationAndStrategy => "Information and Strategy",
            Self::InformationTechnologyAndSolutionSupport => {
                "Information Technology and Solution Support"
            }
            Self::SourcingAndPurchasing => "Sourcing and Purchasing",
            Self::BusinessFinanceOperations => "Business Finance Operations",
            Self::PeopleHrManagement => "People/HR Management",
            Self::RegulatoryAndLegalServices => "Regulatory and Legal services",
            Self::ResearchAndInnovation => "Research and Innovation",
        }
    }
}

/// Highest completed education tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "First Degree or HND")]
    FirstDegreeOrHnd,
    #[serde(rename = "MSc, MBA and PhD")]
    MscMbaAndPhd,
    #[serde(rename = "Non-University Education")]
    NonUniversityEducation,
}

impl Qualification {
    pub const ALL: [Self; 3] = [
        Self::FirstDegreeOrHnd,
        Self::MscMbaAndPhd,
        Self::NonUniversityEducation,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstDegreeOrHnd => "First Degree or HND",
            Self::MscMbaAndPhd => "MSc, MBA and PhD",
            Self::NonUniversityEducation => "Non-University Education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Two-state answer used both as a categorical label and as a 1/0 flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [Self; 2] = [Self::Yes, Self::No];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Integer form the classifier was trained on: Yes is 1, No is 0.
    pub const fn as_flag(self) -> u8 {
        match self {
            Self::Yes => 1,
            Self::No => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Married,
    Single,
    #[serde(rename = "Not_Sure")]
    NotSure,
}

impl MaritalStatus {
    pub const ALL: [Self; 3] = [Self::Married, Self::Single, Self::NotSure];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Married => "Married",
            Self::Single => "Single",
            Self::NotSure => "Not_Sure",
        }
    }
}

/// Employer count bucket, ordinal but carried as a string in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviousEmployers {
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "More than 5")]
    MoreThanFive,
}

impl PreviousEmployers {
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::MoreThanFive,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::MoreThanFive => "More than 5",
        }
    }
}

/// One candidate's inputs for a single assessment request.
///
/// Serialized field names match the training columns so JSON submissions and CSV
/// rosters share one schema. The struct lives for one request and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "Division")]
    pub division: Division,
    #[serde(rename = "Qualification")]
    pub qualification: Qualification,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Trainings_Attended")]
    pub trainings_attended: u32,
    #[serde(rename = "Year_of_birth")]
    pub year_of_birth: u32,
    #[serde(rename = "Last_performance_score")]
    pub last_performance_score: f64,
    #[serde(rename = "Year_of_recruitment")]
    pub year_of_recruitment: u32,
    #[serde(rename = "Targets_met")]
    pub targets_met: YesNo,
    #[serde(rename = "Previous_Award")]
    pub previous_award: YesNo,
    #[serde(rename = "Training_score_average")]
    pub training_score_average: u32,
    #[serde(rename = "Foreign_schooled")]
    pub foreign_schooled: YesNo,
    #[serde(rename = "Marital_Status")]
    pub marital_status: MaritalStatus,
    #[serde(rename = "Past_Disciplinary_Action")]
    pub past_disciplinary_action: YesNo,
    #[serde(rename = "Previous_IntraDepartmental_Movement")]
    pub previous_intra_departmental_movement: YesNo,
    #[serde(rename = "No_of_previous_employers")]
    pub no_of_previous_employers: PreviousEmployers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_columns_are_a_subset_in_feature_order() {
        let mut feature_iter = FEATURE_COLUMNS.iter();
        for column in CATEGORICAL_COLUMNS {
            assert!(
                feature_iter.any(|name| *name == column),
                "{column} missing or out of order in FEATURE_COLUMNS"
            );
        }
    }

    #[test]
    fn enum_labels_round_trip_through_serde() {
        for division in Division::ALL {
            let json = serde_json::to_string(&division).expect("serializes");
            assert_eq!(json, format!("\"{}\"", division.label()));
            let back: Division = serde_json::from_str(&json).expect("deserializes");
            assert_eq!(back, division);
        }
        for bucket in PreviousEmployers::ALL {
            let json = serde_json::to_string(&bucket).expect("serializes");
            assert_eq!(json, format!("\"{}\"", bucket.label()));
        }
    }

    #[test]
    fn profile_serializes_with_training_column_names() {
        let profile = CandidateProfile {
            division: Division::ResearchAndInnovation,
            qualification: Qualification::FirstDegreeOrHnd,
            gender: Gender::Female,
            trainings_attended: 4,
            year_of_birth: 1988,
            last_performance_score: 7.5,
            year_of_recruitment: 2012,
            targets_met: YesNo::Yes,
            previous_award: YesNo::No,
            training_score_average: 61,
            foreign_schooled: YesNo::No,
            marital_status: MaritalStatus::Single,
            past_disciplinary_action: YesNo::No,
            previous_intra_departmental_movement: YesNo::Yes,
            no_of_previous_employers: PreviousEmployers::Two,
        };

        let value = serde_json::to_value(&profile).expect("serializes");
        let object = value.as_object().expect("object");
        for column in FEATURE_COLUMNS {
            assert!(object.contains_key(column), "missing column {column}");
        }
        assert_eq!(object.len(), FEATURE_COLUMNS.len());
    }
}
