//! Response middleware.

pub(crate) mod cors;
