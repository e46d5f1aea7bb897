//! Typed identifier-array handle.
//!
//! ## Purpose
//!
//! This module defines [`IdArray`], the value every operation consumes and
//! produces: a contiguous integer buffer tagged with its width, its shape
//! and the device context it belongs to.
//!
//! ## Design notes
//!
//! * **Tagged storage**: [`IdBuffer`] holds either `Vec<i32>` or `Vec<i64>`, so
//!   the width tag can never disagree with the stored elements.
//! * **Exclusive ownership**: Handles own their buffers; cloning copies.
//! * **Shape metadata**: Arrays are 1-D by construction. An n-D shape can be
//!   attached (e.g. by an `ndarray` bridge) so that operations requiring 1-D
//!   input can reject it.
//!
//! ## Invariants
//!
//! * The product of `shape` equals the number of stored elements.
//! * `width()` always matches the buffer variant.
//!
//! ## Non-goals
//!
//! * This module does not allocate device memory or move data between devices.
//! * This module does not implement broadcasting or strided views.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec};

// External dependencies
use core::fmt::{self, Display, Formatter};

// Internal dependencies
use crate::primitives::context::DeviceContext;
use crate::primitives::errors::IdArrayError;
use crate::primitives::width::{IdType, Width};

// ============================================================================
// Buffer
// ============================================================================

/// Contiguous element storage of one of the two widths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdBuffer {
    /// 32-bit elements.
    I32(Vec<i32>),

    /// 64-bit elements.
    I64(Vec<i64>),
}

impl IdBuffer {
    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            IdBuffer::I32(v) => v.len(),
            IdBuffer::I64(v) => v.len(),
        }
    }

    /// Whether no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width tag of the stored elements.
    #[inline]
    pub const fn width(&self) -> Width {
        match self {
            IdBuffer::I32(_) => Width::W32,
            IdBuffer::I64(_) => Width::W64,
        }
    }

    /// Elements sign-extended to 64 bits, in order.
    pub fn widened(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        match self {
            IdBuffer::I32(v) => Box::new(v.iter().map(|&x| x as i64)),
            IdBuffer::I64(v) => Box::new(v.iter().copied()),
        }
    }
}

// ============================================================================
// Array Handle
// ============================================================================

/// A width-tagged, contiguous integer array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdArray {
    data: IdBuffer,
    shape: Vec<usize>,
    ctx: DeviceContext,
}

impl IdArray {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a 1-D host array from a vector.
    pub fn from_vec<T: IdType>(values: Vec<T>) -> Self {
        Self::from_buffer(T::into_buffer(values), DeviceContext::cpu())
    }

    /// Create a 1-D array from a buffer and a context.
    pub fn from_buffer(data: IdBuffer, ctx: DeviceContext) -> Self {
        let len = data.len();
        Self {
            data,
            shape: vec![len],
            ctx,
        }
    }

    /// Create a host array with an explicit (possibly multi-dimensional) shape.
    pub fn with_shape<T: IdType>(values: Vec<T>, shape: &[usize]) -> Result<Self, IdArrayError> {
        Self::from_vec(values).reshape(shape)
    }

    /// Replace the device tag.
    pub fn with_context(mut self, ctx: DeviceContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Reinterpret the elements under a new shape.
    pub fn reshape(mut self, shape: &[usize]) -> Result<Self, IdArrayError> {
        let shape_elems: usize = shape.iter().product();
        if shape_elems != self.data.len() {
            return Err(IdArrayError::ShapeElementMismatch {
                shape_elems,
                len: self.data.len(),
            });
        }
        self.shape = shape.to_vec();
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element width tag.
    #[inline]
    pub fn width(&self) -> Width {
        self.data.width()
    }

    /// Element width in bits.
    #[inline]
    pub fn bits(&self) -> u8 {
        self.data.width().bits()
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Extent of each dimension.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Device tag.
    #[inline]
    pub fn context(&self) -> DeviceContext {
        self.ctx
    }

    /// Borrow the underlying buffer.
    #[inline]
    pub fn buffer(&self) -> &IdBuffer {
        &self.data
    }

    /// Consume the handle and return its buffer.
    pub fn into_buffer(self) -> IdBuffer {
        self.data
    }

    /// Borrow the elements as `&[T]`, or `None` if `T` is the wrong width.
    #[inline]
    pub fn as_slice<T: IdType>(&self) -> Option<&[T]> {
        T::view(&self.data)
    }

    /// Borrow the elements as `&mut [T]`, or `None` if `T` is the wrong width.
    #[inline]
    pub fn as_mut_slice<T: IdType>(&mut self) -> Option<&mut [T]> {
        T::view_mut(&mut self.data)
    }

    /// Copy the elements out, sign-extended to 64 bits.
    pub fn to_vec_i64(&self) -> Vec<i64> {
        self.data.widened().collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for IdArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "IdArray<{}>[", self.width())?;
        for (i, dim) in self.shape.iter().enumerate() {
            if i > 0 {
                write!(f, "x")?;
            }
            write!(f, "{dim}")?;
        }
        write!(f, "] {:?}#{} ", self.ctx.device_type, self.ctx.device_id)?;

        // Show the first 5 and last 5 elements of long arrays
        let n = self.len();
        write!(f, "[")?;
        for (i, value) in self.data.widened().enumerate() {
            if n > 10 && (5..n - 5).contains(&i) {
                if i == 5 {
                    write!(f, ", ...")?;
                }
                continue;
            }
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
