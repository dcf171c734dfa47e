//! idpctl_core - Functional core for managing identity providers.
//!
//! Holds the identity provider record, the create and update planning
//! rules, the value-or-`@file` resolver and the [`acl::IdentityProviderApi`]
//! seam that the client crate implements over HTTP. Nothing in here does
//! network I/O.

pub mod acl;
