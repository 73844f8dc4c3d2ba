// 🌱 Sample Data - Seed records for an empty tracker

use crate::company::Company;
use crate::error::Result;
use crate::fields::{Deadline, Email, Name, Phone, RecruiterName, Role, Tag};
use crate::status::StatusCode;
use crate::store::CompanyStore;

/// name, phone, email, role, deadline, status, recruiter, tags
type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

const SAMPLE_ROWS: [SampleRow; 6] = [
    (
        "Acme",
        "87438807",
        "careers@acme.com",
        "Software Engineer Intern",
        "2024-01-15",
        "PA",
        "Alex Yeoh",
        &["remote"],
    ),
    (
        "Globex",
        "99272758",
        "talent@globex.com",
        "Data Analyst",
        "2024-02-01",
        "PI",
        "Bernice Yu",
        &["finance", "hybrid"],
    ),
    (
        "Initech",
        "93210283",
        "jobs@initech.io",
        "Backend Developer",
        "2024-02-20",
        "PO",
        "Charlotte Oliveiro",
        &[],
    ),
    (
        "Umbrella",
        "91031282",
        "hr@umbrella.co",
        "QA Engineer",
        "2024-03-05",
        "A",
        "David Li",
        &["onsite"],
    ),
    (
        "Hooli",
        "92492021",
        "recruiting@hooli.xyz",
        "Product Manager Intern",
        "2024-03-31",
        "R",
        "Irfan Ibrahim",
        &["bigtech"],
    ),
    (
        "Stark Industries",
        "92624417",
        "people@stark.com",
        "Hardware Engineer",
        "2024-04-10",
        "PA",
        "Roy Balakrishnan",
        &["hardware", "onsite"],
    ),
];

/// Fixed set of valid records with distinct names
pub fn sample_companies() -> Result<Vec<Company>> {
    SAMPLE_ROWS.iter().map(build_row).collect()
}

/// Store seeded with `sample_companies`, filtered view showing everything
pub fn sample_store() -> Result<CompanyStore> {
    Ok(CompanyStore::with_companies(sample_companies()?))
}

fn build_row(row: &SampleRow) -> Result<Company> {
    let (name, phone, email, role, deadline, status, recruiter, tags) = *row;

    Company::builder()
        .with_name(Name::parse(name)?)
        .with_phone(Phone::parse(phone)?)
        .with_email(Email::parse(email)?)
        .with_role(Role::parse(role)?)
        .with_deadline(Deadline::parse(deadline)?)
        .with_status(StatusCode::parse(status)?)
        .with_recruiter_name(RecruiterName::parse(recruiter)?)
        .with_tags(tags.iter().map(|tag| Tag::parse(tag)).collect::<Result<Vec<_>>>()?)
        .build()
}
