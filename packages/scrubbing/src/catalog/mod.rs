//! Term catalog: the set of string patterns considered equivalent to a
//! client's identity, plus the job-title anonymization table.

pub mod builder;
pub mod titles;

pub use builder::{
    build_term_catalog, ScrubTerm, TermCatalog, TermReplacement, COMPANY_PLACEHOLDER,
    DOMAIN_PLACEHOLDER,
};
pub use titles::{anonymize_title, GENERIC_CONTACT_PHRASE};
