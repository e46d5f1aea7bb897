//! Execution context tags for identifier arrays.
//!
//! ## Purpose
//!
//! This module defines the device tag carried by every array handle. The
//! calling graph layer owns allocation and tagging; the kernel only reads
//! the tag to select an implementation and rejects devices it cannot run on.
//!
//! ## Design notes
//!
//! * **CPU-only**: Every operation in this crate runs on the host.
//! * **Tag, not resource**: A context names a device; it holds no handle to one.
//!
//! ## Invariants
//!
//! * The default context is CPU device 0.
//!
//! ## Non-goals
//!
//! * This module does not provide GPU implementations.

// Internal dependencies
use crate::primitives::errors::IdArrayError;

/// Kind of device an array lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum DeviceType {
    /// Host memory (may still use parallelism via rayon).
    #[default]
    CPU,

    /// Accelerator memory (no kernels are provided for it).
    GPU,
}

/// Device tag attached to an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceContext {
    /// Kind of device.
    pub device_type: DeviceType,

    /// Ordinal of the device among devices of the same kind.
    pub device_id: u32,
}

impl DeviceContext {
    /// Host context.
    pub const fn cpu() -> Self {
        Self {
            device_type: DeviceType::CPU,
            device_id: 0,
        }
    }

    /// Accelerator context with the given ordinal.
    pub const fn gpu(device_id: u32) -> Self {
        Self {
            device_type: DeviceType::GPU,
            device_id,
        }
    }

    /// Whether this context is host memory.
    #[inline]
    pub const fn is_cpu(&self) -> bool {
        matches!(self.device_type, DeviceType::CPU)
    }

    /// Fail unless this context is host memory.
    pub fn ensure_cpu(&self) -> Result<(), IdArrayError> {
        if self.is_cpu() {
            Ok(())
        } else {
            Err(IdArrayError::UnsupportedDevice(self.device_type))
        }
    }
}
