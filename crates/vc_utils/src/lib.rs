//! Containers shared by the `vc_flat` crates.
//!
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId), used by
//!   mapping contexts to find the customizations of a type.
//! - [`hash`]: hash states and the [`HashMap`](hash::HashMap) alias used for
//!   field tables.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
