//! Role-to-holder registry.
//!
//! Membership is a set per role: granting an existing member or revoking an
//! absent one changes nothing and is not an error. Only `Role::Admin` holders
//! may grant or revoke.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage::{add_role_member, has_role_member, remove_role_member};
use crate::types::Role;

pub fn has_role(e: &Env, role: Role, account: &Address) -> bool {
    has_role_member(e, role, account)
}

pub fn enforce_role(e: &Env, role: Role, account: &Address) -> Result<(), Error> {
    if !has_role(e, role, account) {
        return Err(Error::AccessDenied);
    }
    Ok(())
}

/// Returns `true` when `account` was not already a member.
pub fn grant_role(e: &Env, admin: &Address, role: Role, account: &Address) -> Result<bool, Error> {
    enforce_role(e, Role::Admin, admin)?;

    if has_role(e, role, account) {
        return Ok(false);
    }

    add_role_member(e, role, account);
    Ok(true)
}

/// Returns `true` when `account` was a member before the call.
pub fn revoke_role(e: &Env, admin: &Address, role: Role, account: &Address) -> Result<bool, Error> {
    enforce_role(e, Role::Admin, admin)?;
    Ok(drop_role(e, role, account))
}

/// Self-service removal; no admin check.
pub fn renounce_role(e: &Env, role: Role, account: &Address) -> bool {
    drop_role(e, role, account)
}

fn drop_role(e: &Env, role: Role, account: &Address) -> bool {
    if !has_role(e, role, account) {
        return false;
    }

    remove_role_member(e, role, account);
    true
}
