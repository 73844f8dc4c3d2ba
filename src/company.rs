// 🏢 Company Entity - One tracked job application
//
// A Company is a value: fields are fixed at construction and any edit goes
// through `CompanyBuilder`, which hands back a new Company.
//
// Two equality notions live here:
// - `is_same_company`: names match (the same real-world company)
// - `==`: every field matches, tags compared as a set

use crate::error::{RecordError, Result};
use crate::fields::{Deadline, Email, Name, Phone, RecruiterName, Role, Tag};
use crate::status::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// COMPANY ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    // ========================================================================
    // IDENTITY
    // ========================================================================
    name: Name,

    // ========================================================================
    // APPLICATION DETAILS
    // ========================================================================
    phone: Phone,
    email: Email,
    role: Role,
    deadline: Deadline,
    status: StatusCode,
    recruiter_name: RecruiterName,

    /// Unique, unordered labels. Only ever exposed through `TagView`.
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Company {
    /// Create a company from already-validated fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        role: Role,
        deadline: Deadline,
        status: StatusCode,
        recruiter_name: RecruiterName,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Company {
            name,
            phone,
            email,
            role,
            deadline,
            status,
            recruiter_name,
            tags,
        }
    }

    pub fn builder() -> CompanyBuilder {
        CompanyBuilder::default()
    }

    /// Builder pre-filled with this company's fields, for copy-with-override edits
    pub fn to_builder(&self) -> CompanyBuilder {
        CompanyBuilder::from(self)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn recruiter_name(&self) -> &RecruiterName {
        &self.recruiter_name
    }

    /// Read-only view of the tags; mutation attempts fail with `Unmodifiable`
    pub fn tags(&self) -> TagView<'_> {
        TagView { tags: &self.tags }
    }

    /// Weaker equality: both records name the same company.
    pub fn is_same_company(&self, other: &Company) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }

    /// Copy of this company in a different pipeline stage
    pub fn with_status(&self, status: StatusCode) -> Company {
        Company {
            status,
            ..self.clone()
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Company{{name={}, role={}, status={}, deadline={}, recruiter_name={}, phone={}, email={}, tags={}}}",
            self.name,
            self.role,
            self.status,
            self.deadline,
            self.recruiter_name,
            self.phone,
            self.email,
            self.tags(),
        )
    }
}

// ============================================================================
// TAG VIEW
// ============================================================================

/// Borrowed, read-only view over a company's tag set
#[derive(Debug, Clone, Copy)]
pub struct TagView<'a> {
    tags: &'a BTreeSet<Tag>,
}

impl<'a> TagView<'a> {
    pub fn iter(&self) -> btree_set::Iter<'a, Tag> {
        self.tags.iter()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Owned copy, free to modify without touching the company
    pub fn to_set(&self) -> BTreeSet<Tag> {
        self.tags.clone()
    }

    /// Always rejected: the view never mutates the underlying set
    pub fn insert(&mut self, _tag: Tag) -> Result<bool> {
        Err(RecordError::Unmodifiable)
    }

    /// Always rejected
    pub fn remove(&mut self, _tag: &Tag) -> Result<bool> {
        Err(RecordError::Unmodifiable)
    }

    /// Always rejected
    pub fn clear(&mut self) -> Result<()> {
        Err(RecordError::Unmodifiable)
    }
}

impl<'a> IntoIterator for TagView<'a> {
    type Item = &'a Tag;
    type IntoIter = btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl PartialEq<BTreeSet<Tag>> for TagView<'_> {
    fn eq(&self, other: &BTreeSet<Tag>) -> bool {
        self.tags == other
    }
}

impl fmt::Display for TagView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

// ============================================================================
// COMPANY BUILDER
// ============================================================================

/// Collects fields one at a time; `build` refuses to produce a partial company.
#[derive(Debug, Clone, Default)]
pub struct CompanyBuilder {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    role: Option<Role>,
    deadline: Option<Deadline>,
    status: Option<StatusCode>,
    recruiter_name: Option<RecruiterName>,
    tags: BTreeSet<Tag>,
}

impl CompanyBuilder {
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_recruiter_name(mut self, recruiter_name: RecruiterName) -> Self {
        self.recruiter_name = Some(recruiter_name);
        self
    }

    /// Replace the whole tag set
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Assemble the company. Fails on the first missing field, in declaration order.
    pub fn build(self) -> Result<Company> {
        Ok(Company {
            name: self.name.ok_or(RecordError::MissingField("name"))?,
            phone: self.phone.ok_or(RecordError::MissingField("phone"))?,
            email: self.email.ok_or(RecordError::MissingField("email"))?,
            role: self.role.ok_or(RecordError::MissingField("role"))?,
            deadline: self.deadline.ok_or(RecordError::MissingField("deadline"))?,
            status: self.status.ok_or(RecordError::MissingField("status"))?,
            recruiter_name: self
                .recruiter_name
                .ok_or(RecordError::MissingField("recruiter name"))?,
            tags: self.tags,
        })
    }
}

impl From<&Company> for CompanyBuilder {
    fn from(company: &Company) -> Self {
        CompanyBuilder {
            name: Some(company.name.clone()),
            phone: Some(company.phone.clone()),
            email: Some(company.email.clone()),
            role: Some(company.role.clone()),
            deadline: Some(company.deadline),
            status: Some(company.status),
            recruiter_name: Some(company.recruiter_name.clone()),
            tags: company.tags.clone(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn acme() -> Company {
        Company::builder()
            .with_name(Name::parse("Acme").unwrap())
            .with_phone(Phone::parse("91234567").unwrap())
            .with_email(Email::parse("hr@acme.com").unwrap())
            .with_role(Role::parse("SWE").unwrap())
            .with_deadline(Deadline::parse("2024-01-01").unwrap())
            .with_status(StatusCode::PendingApplication)
            .with_recruiter_name(RecruiterName::parse("Jane Doe").unwrap())
            .with_tag(Tag::parse("remote").unwrap())
            .with_tag(Tag::parse("fintech").unwrap())
            .build()
            .unwrap()
    }

    fn hash_of(company: &Company) -> u64 {
        let mut hasher = DefaultHasher::new();
        company.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_builder_requires_every_field() {
        let complete = acme().to_builder();

        let cases: Vec<(CompanyBuilder, &str)> = vec![
            (CompanyBuilder { name: None, ..complete.clone() }, "name"),
            (CompanyBuilder { phone: None, ..complete.clone() }, "phone"),
            (CompanyBuilder { email: None, ..complete.clone() }, "email"),
            (CompanyBuilder { role: None, ..complete.clone() }, "role"),
            (CompanyBuilder { deadline: None, ..complete.clone() }, "deadline"),
            (CompanyBuilder { status: None, ..complete.clone() }, "status"),
            (
                CompanyBuilder { recruiter_name: None, ..complete.clone() },
                "recruiter name",
            ),
        ];

        for (builder, missing) in cases {
            assert_eq!(builder.build(), Err(RecordError::MissingField(missing)));
        }
    }

    #[test]
    fn test_empty_tag_set_is_allowed() {
        let company = acme().to_builder().with_tags(Vec::new()).build().unwrap();
        assert!(company.tags().is_empty());
    }

    #[test]
    fn test_is_same_company_is_reflexive() {
        let company = acme();
        assert!(company.is_same_company(&company));
    }

    #[test]
    fn test_is_same_company_only_compares_names() {
        let company = acme();

        let other_phone = company
            .to_builder()
            .with_phone(Phone::parse("99999999").unwrap())
            .build()
            .unwrap();
        assert!(company.is_same_company(&other_phone));
        assert_ne!(company, other_phone);

        let everything_else_differs = Company::builder()
            .with_name(Name::parse("Acme").unwrap())
            .with_phone(Phone::parse("123").unwrap())
            .with_email(Email::parse("jobs@other.org").unwrap())
            .with_role(Role::parse("Data Analyst").unwrap())
            .with_deadline(Deadline::parse("2025-06-30").unwrap())
            .with_status(StatusCode::Rejected)
            .with_recruiter_name(RecruiterName::parse("Bob").unwrap())
            .build()
            .unwrap();
        assert!(company.is_same_company(&everything_else_differs));

        let renamed = company
            .to_builder()
            .with_name(Name::parse("Acme Labs").unwrap())
            .build()
            .unwrap();
        assert!(!company.is_same_company(&renamed));
    }

    #[test]
    fn test_full_equality_covers_every_field() {
        let company = acme();
        let copy = company.clone();

        assert_eq!(company, copy);
        assert_eq!(copy, company);
        assert_eq!(hash_of(&company), hash_of(&copy));

        let builder = company.to_builder();
        let variants = vec![
            builder.clone().with_email(Email::parse("a@b.co").unwrap()),
            builder.clone().with_role(Role::parse("QA").unwrap()),
            builder.clone().with_deadline(Deadline::parse("2024-01-02").unwrap()),
            builder.clone().with_status(StatusCode::Accepted),
            builder.clone().with_recruiter_name(RecruiterName::parse("Sam").unwrap()),
            builder.clone().with_tag(Tag::parse("onsite").unwrap()),
        ];
        for variant in variants {
            assert_ne!(company, variant.build().unwrap());
        }
    }

    #[test]
    fn test_tag_order_is_irrelevant() {
        let forward = acme()
            .to_builder()
            .with_tags(vec![Tag::parse("a").unwrap(), Tag::parse("b").unwrap()])
            .build()
            .unwrap();
        let backward = acme()
            .to_builder()
            .with_tags(vec![Tag::parse("b").unwrap(), Tag::parse("a").unwrap()])
            .build()
            .unwrap();

        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn test_tag_view_rejects_mutation() {
        let company = acme();
        let before = company.tags().to_set();

        let mut view = company.tags();
        assert_eq!(view.insert(Tag::parse("new").unwrap()), Err(RecordError::Unmodifiable));
        assert_eq!(
            view.remove(&Tag::parse("remote").unwrap()),
            Err(RecordError::Unmodifiable)
        );
        assert_eq!(view.clear(), Err(RecordError::Unmodifiable));

        assert_eq!(company.tags(), before);
        assert_eq!(company.tags().len(), 2);
        assert!(company.tags().contains(&Tag::parse("remote").unwrap()));
    }

    #[test]
    fn test_new_matches_builder() {
        let tags: BTreeSet<Tag> = ["remote", "fintech"]
            .into_iter()
            .map(|tag| Tag::parse(tag).unwrap())
            .collect();

        let direct = Company::new(
            Name::parse("Acme").unwrap(),
            Phone::parse("91234567").unwrap(),
            Email::parse("hr@acme.com").unwrap(),
            Role::parse("SWE").unwrap(),
            Deadline::from(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            StatusCode::PendingApplication,
            RecruiterName::parse("Jane Doe").unwrap(),
            tags,
        );

        assert_eq!(direct, acme());
        assert_eq!(hash_of(&direct), hash_of(&acme()));
    }

    #[test]
    fn test_edits_produce_new_values() {
        let original = acme();
        let moved_on = original.with_status(StatusCode::PendingInterview);

        assert_eq!(original.status(), StatusCode::PendingApplication);
        assert_eq!(moved_on.status(), StatusCode::PendingInterview);
        assert!(original.is_same_company(&moved_on));
        assert_ne!(original, moved_on);
    }

    #[test]
    fn test_display_labels_fields() {
        let rendered = acme().to_string();
        assert_eq!(
            rendered,
            "Company{name=Acme, role=SWE, status=PA, deadline=2024-01-01, recruiter_name=Jane Doe, \
             phone=91234567, email=hr@acme.com, tags=[fintech, remote]}"
        );
    }

    #[test]
    fn test_deserialize_validates_every_field() {
        let json = r#"{
            "name": "Acme",
            "phone": "91234567",
            "email": "hr@acme.com",
            "role": "SWE",
            "deadline": "2024-01-01",
            "status": "pa",
            "recruiter_name": "Jane Doe",
            "tags": ["remote", "fintech"]
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company, acme());

        let bad_status = json.replace("\"pa\"", "\"maybe\"");
        assert!(serde_json::from_str::<Company>(&bad_status).is_err());

        let no_role = json.replace("\"role\": \"SWE\",", "");
        assert!(serde_json::from_str::<Company>(&no_role).is_err());
    }
}
