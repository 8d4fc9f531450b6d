#![cfg(feature = "zeroize")]

use zeroize::Zeroize;

use intvec::{intvec, IntVec};

#[test]
fn zeroize_clears_items() {
    let mut v = intvec![1, 2, 3];
    v.zeroize();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 3);
}

#[test]
fn zeroize_wipes_spare_capacity() {
    let mut v = IntVec::with_capacity(4);
    v.extend_from_slice(&[7, 8, 9, 10]);
    v.pop_back().expect("pop");
    v.zeroize();
    let data = v.as_ptr();
    for index in 0..4 {
        // SAFETY: every slot was zeroed and remains allocated
        assert_eq!(unsafe { data.add(index).read() }, 0);
    }
}

#[test]
fn zeroize_empty() {
    let mut v = IntVec::new();
    v.zeroize();
    assert_eq!((v.len(), v.capacity()), (0, 0));
}
