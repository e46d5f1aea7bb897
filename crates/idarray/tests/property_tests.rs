//! Property tests for the kernel operations.
//!
//! These tests verify the laws every operation must satisfy on arbitrary
//! inputs of both widths.

use idarray::prelude::*;
use proptest::prelude::*;

fn kernel() -> Kernel {
    IdKernel::new().build().unwrap()
}

// ============================================================
// Width conversion
// ============================================================

proptest! {
    #[test]
    fn as_num_bits_same_width_is_identity(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let a = IdArray::from_vec(v);
        prop_assert_eq!(kernel().as_num_bits(a.clone(), 32).unwrap(), a);
    }

    #[test]
    fn widen_then_narrow_round_trips(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let k = kernel();
        let a = IdArray::from_vec(v);
        let back = k.as_num_bits(k.as_num_bits(a.clone(), 64).unwrap(), 32).unwrap();
        prop_assert_eq!(back, a);
    }
}

// ============================================================
// Elementwise
// ============================================================

proptest! {
    #[test]
    fn add_is_elementwise(
        pairs in prop::collection::vec((any::<i64>(), any::<i64>()), 0..64)
    ) {
        let (a, b): (Vec<i64>, Vec<i64>) = pairs.into_iter().unzip();
        let out = kernel()
            .binary(Add, &IdArray::from_vec(a.clone()), &IdArray::from_vec(b.clone()))
            .unwrap();
        let out = out.as_slice::<i64>().unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(out[i], a[i].wrapping_add(b[i]));
        }
    }

    #[test]
    fn eq_with_self_is_all_ones(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let a = IdArray::from_vec(v);
        let out = kernel().binary(EQ, &a, &a).unwrap();
        prop_assert!(out.as_slice::<i32>().unwrap().iter().all(|&x| x == 1));
    }

    #[test]
    fn comparisons_are_masks(
        pairs in prop::collection::vec((any::<i32>(), any::<i32>()), 1..32)
    ) {
        let k = kernel();
        let (a, b): (Vec<i32>, Vec<i32>) = pairs.into_iter().unzip();
        let (a, b) = (IdArray::from_vec(a), IdArray::from_vec(b));
        let gt = k.binary(GT, &a, &b).unwrap();
        let le = k.binary(LE, &a, &b).unwrap();
        let total = k.binary(Add, &gt, &le).unwrap();
        prop_assert!(total.as_slice::<i32>().unwrap().iter().all(|&x| x == 1));
    }

    #[test]
    fn scalar_sides_agree_for_commutative_ops(
        v in prop::collection::vec(any::<i64>(), 0..32),
        s in any::<i64>()
    ) {
        let k = kernel();
        let a = IdArray::from_vec(v);
        for op in [Add, Mul, EQ, NE] {
            prop_assert_eq!(
                k.binary_scalar(op, &a, s).unwrap(),
                k.scalar_binary(op, s, &a).unwrap()
            );
        }
    }

    #[test]
    fn double_negation_is_identity(v in prop::collection::vec(any::<i32>(), 0..64)) {
        let k = kernel();
        let a = IdArray::from_vec(v);
        let twice = k.unary(Neg, &k.unary(Neg, &a).unwrap()).unwrap();
        prop_assert_eq!(twice, a);
    }
}

// ============================================================
// Construction and HStack
// ============================================================

proptest! {
    #[test]
    fn range_is_consecutive(low in -1000_i64..1000, len in 0_i64..200) {
        let out = kernel().range(low, low + len).unwrap();
        let expected: Vec<i64> = (low..low + len).collect();
        prop_assert_eq!(out.as_slice::<i64>().unwrap(), expected.as_slice());
    }

    #[test]
    fn full_is_constant(value in any::<i32>(), len in 0_usize..200) {
        let out = kernel().full(value, len).unwrap();
        prop_assert_eq!(out.len(), len);
        prop_assert!(out.as_slice::<i32>().unwrap().iter().all(|&x| x == value));
    }

    #[test]
    fn hstack_splits_back(
        a in prop::collection::vec(any::<i64>(), 0..32),
        b in prop::collection::vec(any::<i64>(), 0..32)
    ) {
        let out = kernel()
            .hstack(&IdArray::from_vec(a.clone()), &IdArray::from_vec(b.clone()))
            .unwrap();
        let out = out.as_slice::<i64>().unwrap();
        prop_assert_eq!(out.len(), a.len() + b.len());
        prop_assert_eq!(&out[..a.len()], a.as_slice());
        prop_assert_eq!(&out[a.len()..], b.as_slice());
    }
}

// ============================================================
// Relabel and NonZero
// ============================================================

proptest! {
    #[test]
    fn relabel_map_inverts(
        batch in prop::collection::vec(prop::collection::vec(-20_i32..20, 0..16), 1..5)
    ) {
        let mut arrays: Vec<IdArray> = batch.iter().cloned().map(IdArray::from_vec).collect();
        let map = kernel().relabel(&mut arrays).unwrap();
        let map = map.as_slice::<i32>().unwrap();

        // Map entries are distinct and every new id is in range
        let mut seen = std::collections::HashSet::new();
        prop_assert!(map.iter().all(|v| seen.insert(*v)));

        for (orig, relabeled) in batch.iter().zip(&arrays) {
            for (&v, &id) in orig.iter().zip(relabeled.as_slice::<i32>().unwrap()) {
                prop_assert!((id as usize) < map.len());
                prop_assert_eq!(map[id as usize], v);
            }
        }
    }

    #[test]
    fn relabel_ids_first_appear_in_order(
        v in prop::collection::vec(0_i64..10, 0..64)
    ) {
        let mut arrays = vec![IdArray::from_vec(v)];
        kernel().relabel(&mut arrays).unwrap();
        let mut next = 0_i64;
        for &id in arrays[0].as_slice::<i64>().unwrap() {
            prop_assert!(id <= next);
            if id == next {
                next += 1;
            }
        }
    }

    #[test]
    fn nonzero_selects_exactly_the_nonzero_positions(
        v in prop::collection::vec(-2_i64..3, 0..128)
    ) {
        let out = kernel().nonzero(&IdArray::from_vec(v.clone())).unwrap();
        let expected: Vec<i64> = v
            .iter()
            .enumerate()
            .filter(|(_, x)| **x != 0)
            .map(|(i, _)| i as i64)
            .collect();
        prop_assert_eq!(out.as_slice::<i64>().unwrap(), expected.as_slice());
    }
}
