use std::ops;

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Explicit, lossy conversion between scalar types.
///
/// Implementations for the built-in numeric types use an `as` cast, so converting a float to an
/// integer truncates towards zero:
///
/// ```
/// # use graphics_math::Cast;
/// let int: i32 = 1.9_f32.cast();
/// assert_eq!(int, 1);
/// let int: i32 = (-1.9_f32).cast();
/// assert_eq!(int, -1);
/// ```
pub trait Cast<U> {
    /// Converts `self` to type `U`, potentially losing precision or range.
    fn cast(self) -> U;
}

macro_rules! zero_one {
    ($zero:expr, $one:expr; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1; u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0; f32, f64);

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

macro_rules! cast {
    ($($from:ty),+) => {
        $(
            cast!(@impl $from => u8 u16 u32 u64 u128 i8 i16 i32 i64 i128 f32 f64);
        )+
    };
    (@impl $from:ty => $($to:ty)+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
cast!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);
