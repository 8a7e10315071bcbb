use soroban_sdk::{contracttype, Address, String, Vec};

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Config,
    Paused,
    WasteCounter,
    Waste(u64),
    RoleMember(Role, Address),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Role {
    Admin = 0,
    Generator = 1,
    Transporter = 2,
    Processor = 3,
}

impl Role {
    pub fn as_u32(&self) -> u32 {
        match self {
            Role::Admin => 0,
            Role::Generator => 1,
            Role::Transporter => 2,
            Role::Processor => 3,
        }
    }

    pub fn from_u32(value: u32) -> Option<Role> {
        match value {
            0 => Some(Role::Admin),
            1 => Some(Role::Generator),
            2 => Some(Role::Transporter),
            3 => Some(Role::Processor),
            _ => None,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WasteStatus {
    Created = 0,
    InTransit = 1,
    Processed = 2,
}

impl WasteStatus {
    pub fn as_u32(&self) -> u32 {
        match self {
            WasteStatus::Created => 0,
            WasteStatus::InTransit => 1,
            WasteStatus::Processed => 2,
        }
    }

    pub fn from_u32(value: u32) -> Option<WasteStatus> {
        match value {
            0 => Some(WasteStatus::Created),
            1 => Some(WasteStatus::InTransit),
            2 => Some(WasteStatus::Processed),
            _ => None,
        }
    }

    /// Display label used by relay clients.
    pub fn label(&self) -> &'static str {
        match self {
            WasteStatus::Created => "Created",
            WasteStatus::InTransit => "In Transit",
            WasteStatus::Processed => "Processed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == WasteStatus::Processed
    }
}

/// A single hazardous-waste item and its chain of custody.
///
/// `history[0]` is the generator and `current_holder` is always the last
/// entry of `history`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WasteRecord {
    pub id: u64,
    pub waste_type: String,
    pub origin: String,
    pub weight: u64,
    pub hazard_level: String,
    pub handling_instructions: String,
    pub current_holder: Address,
    pub status: WasteStatus,
    pub is_processed: bool,
    pub history: Vec<Address>,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LedgerConfig {
    /// When set, `process_waste` also requires the processor to hold custody
    /// of the record. Otherwise PROCESSOR membership alone is enough.
    pub process_requires_custody: bool,
}

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
