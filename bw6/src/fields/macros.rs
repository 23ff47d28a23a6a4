/// Derives the by-value and by-reference binary operators of a field type
/// from its `XAssign<&T>` implementations.
macro_rules! impl_field_ops_from_ref {
    ($type: ident) => {
        impl core::ops::Add<Self> for $type {
            type Output = Self;

            #[inline]
            fn add(self, other: Self) -> Self {
                let mut result = self;
                core::ops::AddAssign::add_assign(&mut result, &other);
                result
            }
        }

        impl<'a> core::ops::Add<&'a $type> for $type {
            type Output = Self;

            #[inline]
            fn add(self, other: &Self) -> Self {
                let mut result = self;
                core::ops::AddAssign::add_assign(&mut result, other);
                result
            }
        }

        impl core::ops::Sub<Self> for $type {
            type Output = Self;

            #[inline]
            fn sub(self, other: Self) -> Self {
                let mut result = self;
                core::ops::SubAssign::sub_assign(&mut result, &other);
                result
            }
        }

        impl<'a> core::ops::Sub<&'a $type> for $type {
            type Output = Self;

            #[inline]
            fn sub(self, other: &Self) -> Self {
                let mut result = self;
                core::ops::SubAssign::sub_assign(&mut result, other);
                result
            }
        }

        impl core::ops::Mul<Self> for $type {
            type Output = Self;

            #[inline]
            fn mul(self, other: Self) -> Self {
                let mut result = self;
                core::ops::MulAssign::mul_assign(&mut result, &other);
                result
            }
        }

        impl<'a> core::ops::Mul<&'a $type> for $type {
            type Output = Self;

            #[inline]
            fn mul(self, other: &Self) -> Self {
                let mut result = self;
                core::ops::MulAssign::mul_assign(&mut result, other);
                result
            }
        }

        impl core::ops::Div<Self> for $type {
            type Output = Self;

            #[inline]
            fn div(self, other: Self) -> Self {
                let mut result = self;
                core::ops::MulAssign::mul_assign(&mut result, &other.inverse());
                result
            }
        }

        impl<'a> core::ops::Div<&'a $type> for $type {
            type Output = Self;

            #[inline]
            fn div(self, other: &Self) -> Self {
                let mut result = self;
                core::ops::MulAssign::mul_assign(&mut result, &other.inverse());
                result
            }
        }

        impl core::ops::AddAssign<Self> for $type {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                core::ops::AddAssign::add_assign(self, &other)
            }
        }

        impl core::ops::SubAssign<Self> for $type {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                core::ops::SubAssign::sub_assign(self, &other)
            }
        }

        impl core::ops::MulAssign<Self> for $type {
            #[inline]
            fn mul_assign(&mut self, other: Self) {
                core::ops::MulAssign::mul_assign(self, &other)
            }
        }

        impl<'a> core::ops::DivAssign<&'a $type> for $type {
            #[inline]
            fn div_assign(&mut self, other: &Self) {
                core::ops::MulAssign::mul_assign(self, &other.inverse())
            }
        }

        impl core::ops::DivAssign<Self> for $type {
            #[inline]
            fn div_assign(&mut self, other: Self) {
                core::ops::DivAssign::div_assign(self, &other)
            }
        }

        impl core::iter::Sum<Self> for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), core::ops::Add::add)
            }
        }

        impl<'a> core::iter::Sum<&'a Self> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), core::ops::Add::add)
            }
        }

        impl core::iter::Product<Self> for $type {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::one(), core::ops::Mul::mul)
            }
        }

        impl<'a> core::iter::Product<&'a Self> for $type {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::one(), core::ops::Mul::mul)
            }
        }
    };
}
