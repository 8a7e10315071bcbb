use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller does not hold the role the operation requires.
    AccessDenied = 1,
    /// Custody change attempted by someone other than the current holder.
    NotCurrentHolder = 2,
    /// Mutating call while the ledger is paused.
    Paused = 3,
    /// Id is zero or has not been allocated yet.
    InvalidWasteId = 4,
    /// Record is in the terminal `Processed` state.
    AlreadyProcessed = 5,
    /// Waste id counter cannot be incremented further.
    IdOverflow = 6,
}

impl Error {
    /// Text surfaced to relay clients in failure responses.
    pub fn message(&self) -> &'static str {
        match self {
            Error::AccessDenied => "AccessControl: Access denied",
            Error::NotCurrentHolder => "Only current holder can transfer waste",
            Error::Paused => "Pausable: paused",
            Error::InvalidWasteId => "Invalid waste ID",
            Error::AlreadyProcessed => "Waste already processed",
            Error::IdOverflow => "Waste ID space exhausted",
        }
    }
}
