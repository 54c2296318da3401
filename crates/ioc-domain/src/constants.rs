//! Domain constants
//!
//! Reserved words of the element-map grammar. Infrastructure-specific
//! constants (config file names, log defaults) live in the infrastructure crate.

// ============================================================================
// ELEMENT KEY GRAMMAR
// ============================================================================

/// Separator between an element alias and its qualifier
pub const KEY_SEPARATOR: char = '.';

/// Key under which every container exposes itself as a shared element
pub const CONTAINER_KEY: &str = "Container";

// ============================================================================
// ARGUMENT EXPRESSION GRAMMAR
// ============================================================================

/// Argument expression standing for the current element qualifier
pub const QUALIFIER_MARKER: &str = "$";

/// Prefix of a shared element reference (`@key`)
pub const SHARED_REFERENCE_MARKER: char = '@';

/// Prefix of a private element reference (`#key`)
pub const PRIVATE_REFERENCE_MARKER: char = '#';

/// Trailing key segment replaced by the current qualifier (`@key.$`)
pub const QUALIFIER_FORWARD_SUFFIX: &str = ".$";

// ============================================================================
// DEFINITION FIELDS
// ============================================================================

/// Class name to construct
pub const FIELD_CLASS: &str = "class";

/// Creator function to invoke
pub const FIELD_CREATOR: &str = "creator";

/// Class file to include before construction
pub const FIELD_FILE: &str = "file";

/// Argument expressions
pub const FIELD_ARGS: &str = "args";

/// Nested element map scoped to the definition
pub const FIELD_SUBMAP: &str = "submap";
