use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::roles::enforce_role;
use crate::storage::{is_paused, set_paused};
use crate::types::Role;

/// Rejects the call while the ledger is paused. Runs before any other check.
pub fn guard(e: &Env) -> Result<(), Error> {
    if is_paused(e) {
        return Err(Error::Paused);
    }
    Ok(())
}

/// Sets the pause flag. Returns `true` when the flag actually changed.
pub fn set_pause(e: &Env, admin: &Address, value: bool) -> Result<bool, Error> {
    enforce_role(e, Role::Admin, admin)?;

    if is_paused(e) == value {
        return Ok(false);
    }

    set_paused(e, value);
    Ok(true)
}
