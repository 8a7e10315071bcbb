use soroban_sdk::{contractevent, Address, String};

use crate::types::Role;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WasteCreatedEventData {
    #[topic]
    pub id: u64,
    pub waste_type: String,
    pub origin: String,
    pub weight: u64,
    pub hazard_level: String,
    pub handling_instructions: String,
    #[topic]
    pub current_holder: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WasteTransferredEventData {
    #[topic]
    pub id: u64,
    pub from: Address,
    pub to: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WasteProcessedEventData {
    #[topic]
    pub id: u64,
    pub processor: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGrantedEventData {
    #[topic]
    pub role: Role,
    #[topic]
    pub account: Address,
    pub sender: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevokedEventData {
    #[topic]
    pub role: Role,
    #[topic]
    pub account: Address,
    pub sender: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedEventData {
    #[topic]
    pub admin: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnpausedEventData {
    #[topic]
    pub admin: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub process_requires_custody: bool,
}
