use std::cmp::Ordering;

/// A total preorder over `T`.
///
/// `Less` means `a` has the higher priority and is polled before `b`.
/// Implementations must be pure and deterministic, otherwise the heap
/// order cannot be kept.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl <T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Smallest element first, using `<` and `>`.
///
/// Values that are neither smaller nor larger (equal, or incomparable like
/// NaN) compare as `Equal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl <T: PartialOrd> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Largest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl <T: PartialOrd> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        NaturalOrder.compare(b, a)
    }
}

/// Adapts a comparison returning a signed number (negative, zero, positive)
/// into a [`Comparator`].
#[derive(Clone, Copy)]
pub struct BySign<F>(pub F);

pub fn by_sign<T, S, F>(f: F) -> BySign<F>
where
    F: Fn(&T, &T) -> S,
    S: PartialOrd + Default,
{
    BySign(f)
}

impl <T, S, F> Comparator<T> for BySign<F>
where
    F: Fn(&T, &T) -> S,
    S: PartialOrd + Default,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let zero = S::default();
        let sign = (self.0)(a, b);
        NaturalOrder.compare(&sign, &zero)
    }
}

#[test]
fn natural_order() {
    assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
    assert_eq!(NaturalOrder.compare(&2, &1), Ordering::Greater);
    assert_eq!(NaturalOrder.compare(&"foo", &"foo"), Ordering::Equal);
}

#[test]
fn natural_order_nan_is_tie() {
    assert_eq!(NaturalOrder.compare(&f64::NAN, &1.0), Ordering::Equal);
    assert_eq!(NaturalOrder.compare(&1.0, &f64::NAN), Ordering::Equal);
}

#[test]
fn reverse_order() {
    assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
    assert_eq!(ReverseOrder.compare(&2, &1), Ordering::Less);
    assert_eq!(ReverseOrder.compare(&7, &7), Ordering::Equal);
}

#[test]
fn sign_adapter() {
    let cmp = by_sign(|a: &i32, b: &i32| b - a);
    assert_eq!(cmp.compare(&10, &90), Ordering::Greater);
    assert_eq!(cmp.compare(&90, &10), Ordering::Less);
    assert_eq!(cmp.compare(&5, &5), Ordering::Equal);
}

#[test]
fn closure_comparator() {
    let cmp = |a: &i32, b: &i32| b.cmp(a);
    assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
    assert_eq!(cmp.compare(&3, &3), Ordering::Equal);
}
