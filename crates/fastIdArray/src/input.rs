//! Input and output conversions for identifier arrays.
//!
//! ## Purpose
//!
//! This module lets kernel operands be built from several containers (slices,
//! vectors, ndarray arrays) through one trait, and converts results back to
//! ndarray arrays.
//!
//! ## Design notes
//!
//! * **Shape-preserving**: ndarray inputs keep their dimensionality, so an
//!   operation that requires 1-D input rejects a 2-D array instead of
//!   silently flattening it.
//! * **Layout-agnostic**: Contiguous inputs are copied as one slice;
//!   non-contiguous views are gathered in logical order.
//!
//! ## Key concepts
//!
//! * **IdInput Trait**: Any container of `i32`/`i64` that can produce an `IdArray`.
//! * **Round trip**: [`to_ndarray`] restores the shape carried by the handle.
//!
//! ## Invariants
//!
//! * The produced array holds every element of the input in logical order.
//!
//! ## Non-goals
//!
//! * This module does not convert between element types.

// External dependencies
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};

// Export dependencies from idarray crate
use idarray::internals::primitives::array::IdArray;
use idarray::internals::primitives::errors::IdArrayError;
use idarray::internals::primitives::width::IdType;

/// Trait for containers that can be used as kernel operands.
pub trait IdInput<T: IdType> {
    /// Copy the input into a host array, keeping its shape.
    fn to_id_array(&self) -> Result<IdArray, IdArrayError>;
}

impl<T: IdType> IdInput<T> for [T] {
    fn to_id_array(&self) -> Result<IdArray, IdArrayError> {
        Ok(IdArray::from_vec(self.to_vec()))
    }
}

impl<T: IdType> IdInput<T> for Vec<T> {
    fn to_id_array(&self) -> Result<IdArray, IdArrayError> {
        Ok(IdArray::from_vec(self.clone()))
    }
}

impl<T: IdType, S, D> IdInput<T> for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
{
    fn to_id_array(&self) -> Result<IdArray, IdArrayError> {
        let values: Vec<T> = match self.as_slice() {
            Some(slice) => slice.to_vec(),
            None => self.iter().copied().collect(),
        };
        IdArray::with_shape(values, self.shape())
    }
}

/// Copy an array into an `ndarray` array of the same shape.
///
/// Fails with `WidthMismatch` if `T` is not the array's element type.
pub fn to_ndarray<T: IdType>(arr: &IdArray) -> Result<ArrayD<T>, IdArrayError> {
    let values = arr.as_slice::<T>().ok_or(IdArrayError::WidthMismatch {
        expected: T::WIDTH,
        got: arr.width(),
    })?;
    ArrayD::from_shape_vec(IxDyn(arr.shape()), values.to_vec()).map_err(|_| {
        IdArrayError::ShapeElementMismatch {
            shape_elems: arr.shape().iter().product(),
            len: arr.len(),
        }
    })
}
