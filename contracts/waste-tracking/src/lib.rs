#![no_std]

mod errors;
mod events;
mod ledger;
mod pause;
mod roles;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use crate::errors::Error;
use crate::events::*;
pub use crate::types::{LedgerConfig, Role, WasteRecord, WasteStatus};

/// Hazardous-waste chain-of-custody ledger.
///
/// Generators register waste items, holders hand custody on to any address,
/// and processors close records out. Every custody change is appended to the
/// record's history, which is never rewritten.
#[contract]
pub struct WasteTracking;

#[contractimpl]
impl WasteTracking {
    // ========================================================================
    // SETUP
    // ========================================================================

    /// Grants `Role::Admin` to `admin` and stores the ledger configuration.
    pub fn __constructor(e: Env, admin: Address, config: LedgerConfig) {
        storage::add_role_member(&e, Role::Admin, &admin);
        storage::set_config(&e, &config);
        storage::set_paused(&e, false);
        storage::set_waste_counter(&e, 0);
        storage::extend_instance_ttl(&e);

        RoleGrantedEventData {
            role: Role::Admin,
            account: admin.clone(),
            sender: admin,
        }
        .publish(&e);
    }

    pub fn get_config(e: &Env) -> LedgerConfig {
        storage::get_config(e)
    }

    /// Replace the ledger configuration (admin only)
    pub fn set_config(e: &Env, admin: Address, config: LedgerConfig) -> Result<(), Error> {
        admin.require_auth();
        roles::enforce_role(e, Role::Admin, &admin)?;

        storage::set_config(e, &config);

        ConfigUpdatedEventData {
            admin,
            process_requires_custody: config.process_requires_custody,
        }
        .publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // ACCESS CONTROL
    // ========================================================================

    /// Add `account` to `role` (admin only). Granting an existing member is a no-op.
    ///
    /// # Errors
    /// * `Error::AccessDenied` - If `admin` does not hold `Role::Admin`
    pub fn grant_role(e: &Env, admin: Address, role: Role, account: Address) -> Result<(), Error> {
        admin.require_auth();

        if roles::grant_role(e, &admin, role, &account)? {
            log!(e, "role granted", role.as_u32(), account.clone());
            RoleGrantedEventData {
                role,
                account,
                sender: admin,
            }
            .publish(e);
        }

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Remove `account` from `role` (admin only). Revoking a non-member is a no-op.
    ///
    /// # Errors
    /// * `Error::AccessDenied` - If `admin` does not hold `Role::Admin`
    pub fn revoke_role(e: &Env, admin: Address, role: Role, account: Address) -> Result<(), Error> {
        admin.require_auth();

        if roles::revoke_role(e, &admin, role, &account)? {
            log!(e, "role revoked", role.as_u32(), account.clone());
            RoleRevokedEventData {
                role,
                account,
                sender: admin,
            }
            .publish(e);
        }

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Drop one of the caller's own roles.
    pub fn renounce_role(e: &Env, account: Address, role: Role) {
        account.require_auth();

        if roles::renounce_role(e, role, &account) {
            RoleRevokedEventData {
                role,
                account: account.clone(),
                sender: account,
            }
            .publish(e);
        }

        storage::extend_instance_ttl(e);
    }

    pub fn has_role(e: &Env, role: Role, account: Address) -> bool {
        roles::has_role(e, role, &account)
    }

    // ========================================================================
    // PAUSE
    // ========================================================================

    /// Stop all custody mutations (admin only). Pausing twice is a no-op.
    pub fn pause(e: &Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();

        if pause::set_pause(e, &admin, true)? {
            log!(e, "ledger paused", admin.clone());
            PausedEventData { admin }.publish(e);
        }

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Resume custody mutations (admin only). Unpausing twice is a no-op.
    pub fn unpause(e: &Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();

        if pause::set_pause(e, &admin, false)? {
            log!(e, "ledger unpaused", admin.clone());
            UnpausedEventData { admin }.publish(e);
        }

        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn is_paused(e: &Env) -> bool {
        storage::is_paused(e)
    }

    // ========================================================================
    // CUSTODY
    // ========================================================================

    /// Register a new waste item held by `generator`.
    ///
    /// # Returns
    /// * The new record id. Ids start at 1 and are never reused.
    ///
    /// # Errors
    /// * `Error::Paused` - If the ledger is paused
    /// * `Error::AccessDenied` - If `generator` does not hold `Role::Generator`
    pub fn create_waste(
        e: &Env,
        generator: Address,
        waste_type: String,
        origin: String,
        weight: u64,
        hazard_level: String,
        handling_instructions: String,
    ) -> Result<u64, Error> {
        let id = ledger::create_waste(
            e,
            &generator,
            waste_type,
            origin,
            weight,
            hazard_level,
            handling_instructions,
        )?;

        storage::extend_instance_ttl(e);
        Ok(id)
    }

    /// Hand custody of record `id` from `from` to `to`.
    ///
    /// Authorization follows custody, not roles: whoever holds the record may
    /// pass it to any address.
    ///
    /// # Errors
    /// * `Error::Paused` - If the ledger is paused
    /// * `Error::InvalidWasteId` - If the record does not exist
    /// * `Error::NotCurrentHolder` - If `from` does not hold the record
    /// * `Error::AlreadyProcessed` - If the record has been processed
    pub fn transfer_waste(e: &Env, from: Address, id: u64, to: Address) -> Result<(), Error> {
        ledger::transfer_waste(e, &from, id, &to)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Mark record `id` as processed. This is terminal.
    ///
    /// # Errors
    /// * `Error::Paused` - If the ledger is paused
    /// * `Error::AccessDenied` - If `processor` does not hold `Role::Processor`
    /// * `Error::InvalidWasteId` - If the record does not exist
    /// * `Error::AlreadyProcessed` - If the record has been processed
    /// * `Error::NotCurrentHolder` - If custody is required and `processor` lacks it
    pub fn process_waste(e: &Env, processor: Address, id: u64) -> Result<(), Error> {
        ledger::process_waste(e, &processor, id)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn get_waste(e: &Env, id: u64) -> Result<WasteRecord, Error> {
        ledger::load_waste(e, id)
    }

    /// Holders of record `id` in custody order, starting with its generator.
    pub fn get_waste_history(e: &Env, id: u64) -> Result<Vec<Address>, Error> {
        ledger::load_history(e, id)
    }

    /// Number of records created so far.
    pub fn waste_count(e: &Env) -> u64 {
        storage::get_waste_counter(e)
    }
}
