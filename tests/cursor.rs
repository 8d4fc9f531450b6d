use rstest::rstest;

use intvec::{intvec, Cursor, IntVec};

#[test]
fn cursor_begin_end() {
    let v = intvec![10, 20, 30];
    let begin = v.begin();
    let end = v.end();
    assert_eq!(end - begin, 3);
    assert_eq!(begin - end, -3);
    assert_eq!(end.distance(begin), 3);
    unsafe {
        assert_eq!(begin.read(), 10);
        let mut it = begin;
        it.inc().inc();
        assert_eq!(it.read(), 30);
    }
}

#[test]
fn cursor_empty_range() {
    let v = IntVec::new();
    assert_eq!(v.begin(), v.end());
    assert_eq!(v.end() - v.begin(), 0);
    let items: Vec<i32> = unsafe { v.begin().iter_to(v.end()) }.copied().collect();
    assert!(items.is_empty());
}

#[test]
fn cursor_null() {
    let a = Cursor::default();
    let b = Cursor::null();
    assert!(a.is_null());
    assert_eq!(a, b);
    let v = intvec![1];
    assert_ne!(v.begin(), a);
}

#[test]
fn cursor_empty_is_null() {
    let v = IntVec::new();
    assert_eq!(v.begin(), Cursor::default());
    assert!(v.begin().is_null());
    assert!(v.end().is_null());
    assert!(v.as_ptr().is_null());

    let mut src = intvec![1, 2];
    let _dst = src.take();
    assert!(src.begin().is_null());
    assert!(src.as_mut_ptr().is_null());

    let reserved = IntVec::with_capacity(2);
    assert!(!reserved.begin().is_null());
    assert_eq!(reserved.begin(), reserved.end());
}

#[test]
fn cursor_step_forms() {
    let v = intvec![1, 2, 3, 4];
    let mut it = v.begin();

    let before = it.post_inc();
    assert_eq!(before, v.begin());
    assert_eq!(it, v.begin() + 1);

    let after = *it.inc();
    assert_eq!(after, v.begin() + 2);
    assert_eq!(it, after);

    let before = it.post_dec();
    assert_eq!(before, v.begin() + 2);
    assert_eq!(it, v.begin() + 1);

    it.dec();
    assert_eq!(it, v.begin());
}

#[rstest]
#[case::forward(0, 3, 40)]
#[case::backward(3, -2, 20)]
#[case::zero(2, 0, 30)]
fn cursor_offset(#[case] start: isize, #[case] offset: isize, #[case] expect: i32) {
    let v = intvec![10, 20, 30, 40];
    let it = v.begin() + start;
    unsafe {
        assert_eq!((it + offset).read(), expect);
        assert_eq!((offset + it).read(), expect);
        assert_eq!((it - -offset).read(), expect);
        assert_eq!(*it.at(offset), expect);
    }
    let mut moved = it;
    moved += offset;
    assert_eq!(moved, it + offset);
    moved -= offset;
    assert_eq!(moved, it);
}

#[test]
fn cursor_ordering() {
    let v = intvec![1, 2, 3];
    let (begin, end) = (v.begin(), v.end());
    assert!(begin < end);
    assert!(end > begin);
    assert!(begin <= end - 3);
    assert!(begin + 3 == end);
    assert!(end - 1 < end);
}

#[test]
fn cursor_write() {
    let v = intvec![1, 2, 3];
    let begin = v.begin();
    unsafe {
        begin.write(5);
        *begin.at_mut(2) = 9;
        *(begin + 1).as_mut() += 10;
    }
    assert_eq!(v, [5, 12, 9]);
}

#[test]
fn cursor_iter_range() {
    let v = intvec![4, 3, 2, 1];
    let iter = unsafe { v.begin().iter_to(v.end()) };
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.clone().sum::<i32>(), 10);
    assert_eq!(iter.clone().max(), Some(&4));
    let rev: Vec<i32> = iter.rev().copied().collect();
    assert_eq!(rev, vec![1, 2, 3, 4]);

    let mut middle = unsafe { (v.begin() + 1).iter_to(v.end() - 1) };
    assert_eq!(middle.next(), Some(&3));
    assert_eq!(middle.next_back(), Some(&2));
    assert_eq!(middle.next(), None);
    assert_eq!(middle.next_back(), None);
}

#[test]
fn cursor_fresh_after_growth() {
    let mut v = IntVec::with_capacity(1);
    v.push(1);
    v.push(2);
    // cursors are recomputed from the current buffer
    assert_eq!(v.end() - v.begin(), 2);
    unsafe {
        assert_eq!(v.begin().read(), 1);
        assert_eq!((v.end() - 1).read(), 2);
    }
}
