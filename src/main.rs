use anyhow::Result;
use company_tracker::config::AppConfig;
use company_tracker::telemetry;
use company_tracker::{
    sample_store, Company, CompanyModel, CompanyStore, DuplicateAuditor, StatusCode, VERSION,
};
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(version = VERSION, environment = ?config.environment, "company tracker starting");

    let mut store = if config.seed_sample_data {
        sample_store()?
    } else {
        CompanyStore::new()
    };
    info!(companies = store.len(), "store ready");

    audit(&store);

    // Moving the first record to the next stage re-adds it with the same
    // name, role and deadline, which the conflict check must flag.
    if let Some(first) = store.companies().first().cloned() {
        let promoted = first.with_status(StatusCode::PendingInterview);
        submit(&mut store, promoted);
    }

    Ok(())
}

/// Add a company unless it conflicts on name, role and deadline
fn submit<M: CompanyModel>(model: &mut M, company: Company) -> bool {
    if let Some(existing) = model.get_duplicate_company(&company) {
        warn!(existing = %existing, "submission conflicts with an existing application");
        return false;
    }

    if model.has_company(&company) {
        info!(name = %company.name(), "adding another application for a tracked company");
    }

    model.add_company(company);
    true
}

fn audit(store: &CompanyStore) {
    let matches = DuplicateAuditor::new().find_duplicates(store.companies());

    if matches.is_empty() {
        info!("no duplicate companies found");
        return;
    }

    for m in &matches {
        warn!(first = m.first_index, second = m.second_index, strategy = ?m.strategy, "{}", m.reason);
    }
}
