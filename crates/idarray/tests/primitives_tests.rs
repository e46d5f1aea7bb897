#![cfg(feature = "dev")]
//! Tests for the primitive data types.
//!
//! These tests verify the building blocks shared by every layer:
//! - Width tags and their bit counts
//! - The `IdType` conversions for `i32` and `i64`
//! - Array handles, shapes and typed views
//! - The insertion-ordered id map
//! - Error formatting
//!
//! ## Test Organization
//!
//! 1. **Width** - Tag resolution and names
//! 2. **IdType** - Casts, truncation, buffer views
//! 3. **IdArray** - Construction, reshape, display
//! 4. **IdMap** - Dense first-occurrence ids
//! 5. **Errors** - Display messages

use idarray::internals::primitives::array::{IdArray, IdBuffer};
use idarray::internals::primitives::context::{DeviceContext, DeviceType};
use idarray::internals::primitives::errors::IdArrayError;
use idarray::internals::primitives::idmap::IdMap;
use idarray::internals::primitives::width::{IdType, Scalar, Width};

// ============================================================================
// Width Tests
// ============================================================================

/// Test resolution of runtime bit counts.
#[test]
fn test_width_from_bits() {
    assert_eq!(Width::from_bits(32), Ok(Width::W32));
    assert_eq!(Width::from_bits(64), Ok(Width::W64));
    assert_eq!(Width::from_bits(31), Err(IdArrayError::InvalidWidth(31)));
    assert_eq!(Width::from_bits(255), Err(IdArrayError::InvalidWidth(255)));
}

/// Test bit counts and names round through the tag.
#[test]
fn test_width_bits_and_name() {
    for width in [Width::W32, Width::W64] {
        assert_eq!(Width::from_bits(width.bits()), Ok(width));
    }
    assert_eq!(Width::W32.to_string(), "int32");
    assert_eq!(Width::W64.name(), "int64");
    assert_eq!(<i32 as IdType>::WIDTH, Width::W32);
    assert_eq!(<i64 as IdType>::WIDTH, Width::W64);
}

// ============================================================================
// IdType Tests
// ============================================================================

/// Test conversions between the two widths.
#[test]
fn test_idtype_casts() {
    assert_eq!((-5_i32).cast_other(), -5_i64);
    assert_eq!(((1_i64 << 33) + 1).cast_other(), 1_i32);
    assert_eq!(i32::truncate_from(-1), -1);
    assert_eq!(i32::truncate_from(1 << 32), 0);
    assert_eq!(i64::truncate_from(1 << 40), 1 << 40);
    assert_eq!((-3_i32).widen(), -3_i64);
}

/// Test index and boolean constructors.
#[test]
fn test_idtype_from_index_and_bool() {
    assert_eq!(i32::from_index(42), 42);
    assert_eq!(i64::from_index(usize::MAX >> 1), (usize::MAX >> 1) as i64);
    assert_eq!(i32::from_bool(true), 1);
    assert_eq!(i64::from_bool(false), 0);
}

/// Test typed buffer views only succeed for the matching width.
#[test]
fn test_idtype_views() {
    let mut buffer = i32::into_buffer(vec![1, 2]);
    assert_eq!(buffer.width(), Width::W32);
    assert_eq!(i32::view(&buffer), Some(&[1, 2][..]));
    assert!(i64::view(&buffer).is_none());
    assert!(i64::view_mut(&mut buffer).is_none());
    if let Some(slice) = i32::view_mut(&mut buffer) {
        slice[0] = 10;
    }
    assert_eq!(buffer, IdBuffer::I32(vec![10, 2]));
}

/// Test scalar widths and truncating construction.
#[test]
fn test_scalar() {
    assert_eq!(Scalar::from(3_i32).width(), Width::W32);
    assert_eq!(Scalar::from(3_i64).width(), Width::W64);
    assert_eq!(Scalar::truncating(-7, Width::W32), Scalar::I32(-7));
    assert_eq!(Scalar::truncating((1 << 32) | 5, Width::W32), Scalar::I32(5));
    assert_eq!(Scalar::I32(-2).widen(), -2);
    assert_eq!(Scalar::I64(8).to_string(), "8_i64");
}

// ============================================================================
// IdArray Tests
// ============================================================================

/// Test basic construction and accessors.
#[test]
fn test_array_from_vec() {
    let arr = IdArray::from_vec(vec![4_i64, 5, 6]);
    assert_eq!(arr.len(), 3);
    assert!(!arr.is_empty());
    assert_eq!(arr.width(), Width::W64);
    assert_eq!(arr.bits(), 64);
    assert_eq!(arr.ndim(), 1);
    assert_eq!(arr.shape(), &[3]);
    assert_eq!(arr.context(), DeviceContext::cpu());
    assert_eq!(arr.as_slice::<i64>(), Some(&[4, 5, 6][..]));
    assert!(arr.as_slice::<i32>().is_none());
    assert_eq!(arr.to_vec_i64(), vec![4, 5, 6]);
}

/// Test multi-dimensional shapes.
#[test]
fn test_array_with_shape() {
    let arr = IdArray::with_shape(vec![1_i32; 6], &[2, 3]).unwrap();
    assert_eq!(arr.ndim(), 2);
    assert_eq!(arr.len(), 6);

    let err = IdArray::with_shape(vec![1_i32; 5], &[2, 3]).unwrap_err();
    assert_eq!(
        err,
        IdArrayError::ShapeElementMismatch {
            shape_elems: 6,
            len: 5
        }
    );

    let flat = arr.reshape(&[6]).unwrap();
    assert_eq!(flat.ndim(), 1);
}

/// Test context tagging.
#[test]
fn test_array_context() {
    let arr = IdArray::from_vec(vec![1_i32]).with_context(DeviceContext::gpu(2));
    assert_eq!(arr.context().device_type, DeviceType::GPU);
    assert_eq!(arr.context().device_id, 2);
    assert!(!arr.context().is_cpu());
    assert!(arr.context().ensure_cpu().is_err());
}

/// Test buffer round trip through the handle.
#[test]
fn test_array_buffer() {
    let mut arr = IdArray::from_vec(vec![1_i32, 2, 3]);
    if let Some(slice) = arr.as_mut_slice::<i32>() {
        slice.reverse();
    }
    assert_eq!(arr.buffer(), &IdBuffer::I32(vec![3, 2, 1]));
    assert_eq!(arr.into_buffer(), IdBuffer::I32(vec![3, 2, 1]));
}

/// Test display of short and long arrays.
#[test]
fn test_array_display() {
    let short = IdArray::from_vec(vec![3_i32, 1, 2, 1]);
    assert_eq!(short.to_string(), "IdArray<int32>[4] CPU#0 [3, 1, 2, 1]");

    let long = IdArray::from_vec((0_i64..12).collect());
    assert_eq!(
        long.to_string(),
        "IdArray<int64>[12] CPU#0 [0, 1, 2, 3, 4, ..., 7, 8, 9, 10, 11]"
    );

    let grid = IdArray::with_shape(vec![0_i32; 4], &[2, 2]).unwrap();
    assert!(grid.to_string().starts_with("IdArray<int32>[2x2]"));
}

// ============================================================================
// IdMap Tests
// ============================================================================

/// Test dense first-occurrence ids.
#[test]
fn test_idmap_assigns_in_order() {
    let mut map = IdMap::<i64>::new();
    assert!(map.is_empty());
    assert_eq!(map.get_or_insert(30), 0);
    assert_eq!(map.get_or_insert(10), 1);
    assert_eq!(map.get_or_insert(30), 0);
    assert_eq!(map.get_or_insert(-4), 2);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&10), Some(1));
    assert_eq!(map.get(&11), None);
    assert_eq!(map.into_order(), vec![30, 10, -4]);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test error messages carry their context.
#[test]
fn test_error_display() {
    assert!(IdArrayError::InvalidWidth(16).to_string().contains("16"));
    let msg = IdArrayError::ShapeMismatch {
        lhs_len: 3,
        rhs_len: 4,
    }
    .to_string();
    assert!(msg.contains('3') && msg.contains('4'));
    let msg = IdArrayError::WidthMismatch {
        expected: Width::W32,
        got: Width::W64,
    }
    .to_string();
    assert!(msg.contains("int32") && msg.contains("int64"));
    assert!(
        IdArrayError::DuplicateParameter { parameter: "context" }
            .to_string()
            .contains("context")
    );

    let boxed: Box<dyn std::error::Error> = Box::new(IdArrayError::EmptyInput);
    assert!(!boxed.to_string().is_empty());
}
