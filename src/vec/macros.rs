/// Create an [`IntVec`](crate::IntVec) containing the arguments.
///
/// - `intvec![]` creates an empty vector without allocating.
/// - `intvec![1, 2, 3]` creates a vector holding the listed values, with a
///   capacity equal to their number.
/// - `intvec![elem; n]` creates a vector holding `n` copies of `elem`.
///
/// ```
/// # use intvec::intvec;
/// let v = intvec![5, 6, 7];
/// assert_eq!(v, [5, 6, 7]);
/// assert_eq!(v.capacity(), 3);
///
/// let w = intvec![9; 2];
/// assert_eq!(w, [9, 9]);
/// ```
#[macro_export]
macro_rules! intvec {
    () => (
        $crate::IntVec::new()
    );
    ($elem:expr; $n:expr) => ({
        let mut v = $crate::IntVec::zeroed($n);
        v.fill($elem);
        v
    });
    ($($x:expr),+ $(,)?) => (
        $crate::IntVec::from_slice(&[$($x),+])
    );
}
