//! LoRaWAN protocol interfaces
//!
//! This module contains the protocol-facing pieces the assembly pipeline
//! depends on:
//! - MAC message types and the external frame encoder interface
//! - Application payload wire serialization
//! - Regional payload-size parameters

/// Message types, frames and the frame encoder interface
pub mod mac;

/// Application payload wire serialization
pub mod payload;

/// Regional payload-size parameters
pub mod region;

pub use mac::{Frame, FrameEncoder, MType};
pub use payload::{DataPayload, WirePayload};
pub use region::{Region, SizeLimits};
