//! Corporation billing service.
//!
//! [`BillingService`] computes mining and PvE bills for EVE Online corporations and their members:
//!
//! - tax rates of a corporation's compliance tier ([`tax`])
//! - mining value per character, per main character and per corporation
//! - bounty income per corporation
//! - lookups of previously generated bills
//! - reconciliation of bills against player donations in the corporation wallet journal
//! - generation of corporation and character bills for a billing period
//!
//! Unknown characters and corporations are never errors: they produce zero amounts, empty
//! results or `None`.

pub mod policy;
pub mod tax;

mod generate;
mod history;
mod mains;
mod mining;
mod payment;

use sea_orm::ConnectionTrait;

use crate::{
    data::eve::corporation::CorporationRepository, error::Error,
    model::db::EveCorporationModel, service::billing::policy::TaxPolicyProvider,
};

/// Billing calculations for EVE Online corporations and their members
pub struct BillingService<'a, C: ConnectionTrait, P: TaxPolicyProvider> {
    db: &'a C,
    policy: P,
}

impl<'a, C: ConnectionTrait, P: TaxPolicyProvider> BillingService<'a, C, P> {
    /// Creates a new instance of [`BillingService`]
    ///
    /// # Arguments
    /// - `db`: Database connection or transaction to read from
    /// - `policy`: Provider of the tax policy applied to every calculation
    pub fn new(db: &'a C, policy: P) -> Self {
        Self { db, policy }
    }

    async fn find_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<Option<EveCorporationModel>, Error> {
        let corporation_repo = CorporationRepository::new(self.db);

        Ok(corporation_repo.get_by_corporation_id(corporation_id).await?)
    }
}
