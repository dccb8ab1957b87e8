use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotFound = 4,
    ResourceNotFound = 5,
    OutOfRange = 6,
    VerificationFailed = 7,
    InvalidArgument = 8,
    AlreadyExists = 9,
    CapacityExceeded = 10,
}

impl ContractError {
    /// Stable wire code reported to off-chain clients.
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "NOT_INITIALIZED",
            ContractError::AlreadyInitialized => "ALREADY_INITIALIZED",
            ContractError::Unauthorized => "UNAUTHORIZED",
            ContractError::NotFound => "NOT_FOUND",
            ContractError::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ContractError::OutOfRange => "OUT_OF_RANGE",
            ContractError::VerificationFailed => "VERIFICATION_FAILED",
            ContractError::InvalidArgument => "INVALID_ARGUMENT",
            ContractError::AlreadyExists => "ALREADY_EXISTS",
            ContractError::CapacityExceeded => "CAPACITY_EXCEEDED",
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::NotFound => "No value is stored under the requested key",
            ContractError::ResourceNotFound => "Resource category is not part of the record ACL",
            ContractError::OutOfRange => "Permission level would drop to zero or below",
            ContractError::VerificationFailed => "Payload does not match the recorded commitment",
            ContractError::InvalidArgument => "Invalid argument provided",
            ContractError::AlreadyExists => "A record already exists for this patient",
            ContractError::CapacityExceeded => {
                "Record already holds the maximum number of custodians"
            }
        }
    }
}
