//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Stable operation names, used as the `op` field of boundary events and
/// as the `op` context of structured errors.
pub mod ops {
    pub const CONTAINS: &str = "contains";
    pub const CONTAINS_ANY_OF: &str = "contains_any_of";
    pub const CONTAINS_ALL_ENTRIES_OF: &str = "contains_all_entries_of";
    pub const CONTAINS_ENTRY: &str = "contains_entry";
    pub const DOES_NOT_CONTAIN: &str = "does_not_contain";
    pub const DOES_NOT_CONTAIN_ENTRY: &str = "does_not_contain_entry";
    pub const CONTAINS_KEYS: &str = "contains_keys";
    pub const DOES_NOT_CONTAIN_KEYS: &str = "does_not_contain_keys";
    pub const CONTAINS_ONLY_KEYS: &str = "contains_only_keys";
    pub const CONTAINS_VALUES: &str = "contains_values";
    pub const DOES_NOT_CONTAIN_VALUES: &str = "does_not_contain_values";
    pub const CONTAINS_ONLY: &str = "contains_only";
    pub const CONTAINS_EXACTLY: &str = "contains_exactly";
    pub const CONTAINS_EXACTLY_IN_ANY_ORDER: &str = "contains_exactly_in_any_order";
    pub const CONTAINS_EXACTLY_IN_ORDER: &str = "contains_exactly_in_order";
    pub const HAS_ENTRY_SATISFYING: &str = "has_entry_satisfying";
    pub const IS_EMPTY: &str = "is_empty";
    pub const IS_NOT_EMPTY: &str = "is_not_empty";
    pub const HAS_SIZE: &str = "has_size";
    pub const HAS_SAME_SIZE_AS: &str = "has_same_size_as";
}
