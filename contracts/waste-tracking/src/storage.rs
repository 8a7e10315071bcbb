use soroban_sdk::{Address, Env};

use crate::types::{
    LedgerConfig, Role, StorageKey, WasteRecord, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ----------------------------------------------------------------------------
// Instance state
// ----------------------------------------------------------------------------

pub fn get_config(e: &Env) -> LedgerConfig {
    e.storage()
        .instance()
        .get::<_, LedgerConfig>(&StorageKey::Config)
        .unwrap_or_default()
}

pub fn set_config(e: &Env, config: &LedgerConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

pub fn is_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&StorageKey::Paused, &paused);
}

/// Number of ids allocated so far; also the highest valid id.
pub fn get_waste_counter(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get::<_, u64>(&StorageKey::WasteCounter)
        .unwrap_or(0)
}

pub fn set_waste_counter(e: &Env, counter: u64) {
    e.storage()
        .instance()
        .set(&StorageKey::WasteCounter, &counter);
}

// ----------------------------------------------------------------------------
// Waste records
// ----------------------------------------------------------------------------

pub fn get_waste(e: &Env, id: u64) -> Option<WasteRecord> {
    let key = StorageKey::Waste(id);
    let record = e.storage().persistent().get::<_, WasteRecord>(&key);
    if record.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn set_waste(e: &Env, record: &WasteRecord) {
    let key = StorageKey::Waste(record.id);
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ----------------------------------------------------------------------------
// Role membership
// ----------------------------------------------------------------------------

pub fn has_role_member(e: &Env, role: Role, account: &Address) -> bool {
    let key = StorageKey::RoleMember(role, account.clone());
    let member = e.storage().persistent().has(&key);
    if member {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    member
}

pub fn add_role_member(e: &Env, role: Role, account: &Address) {
    let key = StorageKey::RoleMember(role, account.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_role_member(e: &Env, role: Role, account: &Address) {
    let key = StorageKey::RoleMember(role, account.clone());
    e.storage().persistent().remove(&key);
}
