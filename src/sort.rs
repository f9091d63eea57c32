//! Quadratic exchange sort with the comparator supplied in different ways.
//!
//! Every variant runs the same loop: for each pair `i < k`, swap when
//! `cmp(a[i], a[k]) == -1`. With [`descending`] that leaves the slice in
//! non-increasing order, with [`ascending`] in non-decreasing order. The
//! variants only differ in how the comparator reaches the inner loop, which
//! is what the `sort` bench measures.

/// `1` when `a > b`, else `-1`. Sorts descending.
#[inline]
pub fn descending(a: i32, b: i32) -> i32 {
    if a > b {
        1
    } else {
        -1
    }
}

/// `-1` when `a > b`, else `1`. Sorts ascending.
#[inline]
pub fn ascending(a: i32, b: i32) -> i32 {
    if a > b {
        -1
    } else {
        1
    }
}

/// Comparison written straight into the loop, descending.
pub fn sort_inlined(numbers: &mut [i32]) {
    let n = numbers.len();
    for i in 0..n {
        for k in i + 1..n {
            let cmp = if numbers[i] > numbers[k] { 1 } else { -1 };
            if cmp == -1 {
                numbers.swap(i, k);
            }
        }
    }
}

/// Comparator through a plain function pointer.
pub fn sort_fn_ptr(numbers: &mut [i32], cmp: fn(i32, i32) -> i32) {
    let n = numbers.len();
    for i in 0..n {
        for k in i + 1..n {
            if cmp(numbers[i], numbers[k]) == -1 {
                numbers.swap(i, k);
            }
        }
    }
}

/// Comparator fixed at compile time through a type parameter.
pub trait Compare {
    fn compare(a: i32, b: i32) -> i32;
}

pub struct Descending;

impl Compare for Descending {
    #[inline]
    fn compare(a: i32, b: i32) -> i32 {
        descending(a, b)
    }
}

pub struct Ascending;

impl Compare for Ascending {
    #[inline]
    fn compare(a: i32, b: i32) -> i32 {
        ascending(a, b)
    }
}

pub fn sort_static<C: Compare>(numbers: &mut [i32]) {
    let n = numbers.len();
    for i in 0..n {
        for k in i + 1..n {
            if C::compare(numbers[i], numbers[k]) == -1 {
                numbers.swap(i, k);
            }
        }
    }
}

/// Builds a sorter closure that owns `cmp`.
pub fn sorter<F>(cmp: F) -> impl Fn(&mut [i32])
where
    F: Fn(i32, i32) -> i32,
{
    move |numbers: &mut [i32]| sort_with(numbers, &cmp)
}

/// Comparator as a generic argument; monomorphized per closure or fn item.
pub fn sort_with<F>(numbers: &mut [i32], cmp: F)
where
    F: Fn(i32, i32) -> i32,
{
    let n = numbers.len();
    for i in 0..n {
        for k in i + 1..n {
            if cmp(numbers[i], numbers[k]) == -1 {
                numbers.swap(i, k);
            }
        }
    }
}

/// Comparator behind a trait object.
pub fn sort_dyn(numbers: &mut [i32], cmp: &dyn Fn(i32, i32) -> i32) {
    let n = numbers.len();
    for i in 0..n {
        for k in i + 1..n {
            if cmp(numbers[i], numbers[k]) == -1 {
                numbers.swap(i, k);
            }
        }
    }
}
