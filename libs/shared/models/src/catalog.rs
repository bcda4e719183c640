use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doctor {
    pub name: &'static str,
    pub image: &'static str,
}

pub const DOCTORS: [Doctor; 9] = [
    Doctor { name: "John Green", image: "/assets/images/dr-green.png" },
    Doctor { name: "Leila Cameron", image: "/assets/images/dr-cameron.png" },
    Doctor { name: "David Livingston", image: "/assets/images/dr-livingston.png" },
    Doctor { name: "Evan Peter", image: "/assets/images/dr-peter.png" },
    Doctor { name: "Jane Powell", image: "/assets/images/dr-powell.png" },
    Doctor { name: "Alex Ramirez", image: "/assets/images/dr-remirez.png" },
    Doctor { name: "Jasmine Lee", image: "/assets/images/dr-lee.png" },
    Doctor { name: "Alyana Cruz", image: "/assets/images/dr-cruz.png" },
    Doctor { name: "Hardik Sharma", image: "/assets/images/dr-sharma.png" },
];

pub const DOCTOR_NAMES: [&str; 9] = [
    DOCTORS[0].name,
    DOCTORS[1].name,
    DOCTORS[2].name,
    DOCTORS[3].name,
    DOCTORS[4].name,
    DOCTORS[5].name,
    DOCTORS[6].name,
    DOCTORS[7].name,
    DOCTORS[8].name,
];

pub fn find_doctor(name: &str) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|doctor| doctor.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown gender option: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IdentificationType {
    #[default]
    #[serde(rename = "Birth Certificate")]
    BirthCertificate,
    #[serde(rename = "Driver's License")]
    DriversLicense,
    #[serde(rename = "Medical Insurance Card/Policy")]
    MedicalInsuranceCard,
    #[serde(rename = "Military ID Card")]
    MilitaryIdCard,
    #[serde(rename = "National Identity Card")]
    NationalIdentityCard,
    #[serde(rename = "Passport")]
    Passport,
    #[serde(rename = "Resident Alien Card (Green Card)")]
    ResidentAlienCard,
    #[serde(rename = "Social Security Card")]
    SocialSecurityCard,
    #[serde(rename = "State ID Card")]
    StateIdCard,
    #[serde(rename = "Student ID Card")]
    StudentIdCard,
    #[serde(rename = "Voter ID Card")]
    VoterIdCard,
}

impl IdentificationType {
    pub const ALL: [IdentificationType; 11] = [
        IdentificationType::BirthCertificate,
        IdentificationType::DriversLicense,
        IdentificationType::MedicalInsuranceCard,
        IdentificationType::MilitaryIdCard,
        IdentificationType::NationalIdentityCard,
        IdentificationType::Passport,
        IdentificationType::ResidentAlienCard,
        IdentificationType::SocialSecurityCard,
        IdentificationType::StateIdCard,
        IdentificationType::StudentIdCard,
        IdentificationType::VoterIdCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentificationType::BirthCertificate => "Birth Certificate",
            IdentificationType::DriversLicense => "Driver's License",
            IdentificationType::MedicalInsuranceCard => "Medical Insurance Card/Policy",
            IdentificationType::MilitaryIdCard => "Military ID Card",
            IdentificationType::NationalIdentityCard => "National Identity Card",
            IdentificationType::Passport => "Passport",
            IdentificationType::ResidentAlienCard => "Resident Alien Card (Green Card)",
            IdentificationType::SocialSecurityCard => "Social Security Card",
            IdentificationType::StateIdCard => "State ID Card",
            IdentificationType::StudentIdCard => "Student ID Card",
            IdentificationType::VoterIdCard => "Voter ID Card",
        }
    }
}

impl fmt::Display for IdentificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentificationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown identification type: {}", s))
    }
}
