//! vCard property and parameter names used by the encoder.

/// Property names as constants.
pub mod names {
    // General/structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";

    // Identification
    pub const N: &str = "N";
    pub const FN: &str = "FN";

    // Organizational
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";

    // Communications
    pub const EMAIL: &str = "EMAIL";
    pub const TEL: &str = "TEL";

    // Delivery addressing
    pub const ADR: &str = "ADR";

    // Explanatory
    pub const URL: &str = "URL";
    pub const NOTE: &str = "NOTE";
}

/// Parameter names and fixed values.
pub mod params {
    pub const TYPE: &str = "TYPE";

    /// Address TYPE written for every ADR line.
    pub const HOME: &str = "HOME";

    /// Object name in `BEGIN`/`END`.
    pub const VCARD: &str = "VCARD";

    /// Only version this encoder emits.
    pub const VERSION_3: &str = "3.0";
}
