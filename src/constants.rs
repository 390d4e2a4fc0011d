//! Shared constants.

// Reconciliation defaults
pub const DEFAULT_STRING_LENGTH: u64 = 100;
pub const DEFAULT_MAX_BOUNDED_LENGTH: u64 = i32::MAX as u64;

// Oracle data type numbers
pub const ORA_TYPE_NUM_BINARY_INTEGER: u16 = 3;
pub const ORA_TYPE_NUM_BLOB: u16 = 113;
pub const ORA_TYPE_NUM_CHAR: u16 = 96;
pub const ORA_TYPE_NUM_CLOB: u16 = 112;
pub const ORA_TYPE_NUM_DATE: u16 = 12;
pub const ORA_TYPE_NUM_LONG: u16 = 8;
pub const ORA_TYPE_NUM_NUMBER: u16 = 2;
pub const ORA_TYPE_NUM_RAW: u16 = 23;
pub const ORA_TYPE_NUM_VARCHAR: u16 = 1;

// Oracle storage limits in bytes
pub const ORA_NUMBER_MAX_SIZE: u64 = 22;
pub const ORA_BINARY_INTEGER_SIZE: u64 = 4;
pub const ORA_DATE_SIZE: u64 = 7;
pub const ORA_MAX_LONG_LENGTH: u64 = 0x7fff_ffff;
pub const ORA_MAX_LOB_LENGTH: u64 = 0xffff_ffff;
