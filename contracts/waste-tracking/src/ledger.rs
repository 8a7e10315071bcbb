//! Custody state machine for waste records.
//!
//! Every mutating operation runs in the same order: pause guard, caller
//! authentication, role check, then the transition. Transitions are computed
//! on a copy of the stored record and written back only once every check has
//! passed, so a failed call never leaves a partially updated record behind.

use soroban_sdk::{log, vec, Address, Env, String, Vec};

use crate::errors::Error;
use crate::events::{WasteCreatedEventData, WasteProcessedEventData, WasteTransferredEventData};
use crate::pause::guard;
use crate::roles::enforce_role;
use crate::storage::{get_config, get_waste, get_waste_counter, set_waste, set_waste_counter};
use crate::types::{LedgerConfig, Role, WasteRecord, WasteStatus};

pub fn create_waste(
    e: &Env,
    generator: &Address,
    waste_type: String,
    origin: String,
    weight: u64,
    hazard_level: String,
    handling_instructions: String,
) -> Result<u64, Error> {
    guard(e)?;
    generator.require_auth();
    enforce_role(e, Role::Generator, generator)?;

    let id = get_waste_counter(e)
        .checked_add(1)
        .ok_or(Error::IdOverflow)?;
    let now = e.ledger().timestamp();

    let record = WasteRecord {
        id,
        waste_type,
        origin,
        weight,
        hazard_level,
        handling_instructions,
        current_holder: generator.clone(),
        status: WasteStatus::Created,
        is_processed: false,
        history: vec![e, generator.clone()],
        created_at: now,
        updated_at: now,
    };

    set_waste(e, &record);
    set_waste_counter(e, id);

    WasteCreatedEventData {
        id,
        waste_type: record.waste_type,
        origin: record.origin,
        weight: record.weight,
        hazard_level: record.hazard_level,
        handling_instructions: record.handling_instructions,
        current_holder: record.current_holder,
    }
    .publish(e);

    log!(e, "waste created", id, generator.clone());
    Ok(id)
}

pub fn transfer_waste(e: &Env, from: &Address, id: u64, to: &Address) -> Result<(), Error> {
    guard(e)?;
    from.require_auth();

    let record = load_waste(e, id)?;
    let updated = apply_transfer(&record, from, to, e.ledger().timestamp())?;
    set_waste(e, &updated);

    WasteTransferredEventData {
        id,
        from: from.clone(),
        to: to.clone(),
    }
    .publish(e);

    log!(e, "waste transferred", id, from.clone(), to.clone());
    Ok(())
}

pub fn process_waste(e: &Env, processor: &Address, id: u64) -> Result<(), Error> {
    guard(e)?;
    processor.require_auth();
    enforce_role(e, Role::Processor, processor)?;

    let record = load_waste(e, id)?;
    let updated = apply_process(
        &record,
        processor,
        &get_config(e),
        e.ledger().timestamp(),
    )?;
    set_waste(e, &updated);

    WasteProcessedEventData {
        id,
        processor: processor.clone(),
    }
    .publish(e);

    log!(e, "waste processed", id, processor.clone());
    Ok(())
}

pub fn load_waste(e: &Env, id: u64) -> Result<WasteRecord, Error> {
    if id == 0 || id > get_waste_counter(e) {
        return Err(Error::InvalidWasteId);
    }
    get_waste(e, id).ok_or(Error::InvalidWasteId)
}

pub fn load_history(e: &Env, id: u64) -> Result<Vec<Address>, Error> {
    load_waste(e, id).map(|record| record.history)
}

/// Computes the record after handing custody from `from` to `to`.
///
/// Status becomes `InTransit` on every successful transfer, including
/// repeated ones and transfers back to a previous holder.
pub fn apply_transfer(
    record: &WasteRecord,
    from: &Address,
    to: &Address,
    now: u64,
) -> Result<WasteRecord, Error> {
    if record.current_holder != *from {
        return Err(Error::NotCurrentHolder);
    }
    if record.status.is_terminal() {
        return Err(Error::AlreadyProcessed);
    }

    let mut updated = record.clone();
    updated.current_holder = to.clone();
    updated.history.push_back(to.clone());
    updated.status = WasteStatus::InTransit;
    updated.updated_at = now;
    Ok(updated)
}

/// Computes the record after `processor` moves it to the terminal state.
/// The caller is expected to have checked the PROCESSOR role already.
pub fn apply_process(
    record: &WasteRecord,
    processor: &Address,
    config: &LedgerConfig,
    now: u64,
) -> Result<WasteRecord, Error> {
    if record.status.is_terminal() {
        return Err(Error::AlreadyProcessed);
    }
    if config.process_requires_custody && record.current_holder != *processor {
        return Err(Error::NotCurrentHolder);
    }

    let mut updated = record.clone();
    updated.status = WasteStatus::Processed;
    updated.is_processed = true;
    updated.updated_at = now;
    Ok(updated)
}
