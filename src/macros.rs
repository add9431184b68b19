//! Internal macro definitions.

/// Implement the owned/borrowed operand combinations of a binary operator,
/// plus its compound-assignment form, in terms of the
/// reference-reference implementation.
macro_rules! impl_binop {
    ($op:ident, $func:ident, $assign:ident, $assign_func:ident) => {
        impl $op for BigInt {
            type Output = BigInt;

            #[inline]
            fn $func(self, rhs: BigInt) -> BigInt {
                (&self).$func(&rhs)
            }
        }

        impl $op<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $func(self, rhs: &BigInt) -> BigInt {
                (&self).$func(rhs)
            }
        }

        impl $op<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $func(self, rhs: BigInt) -> BigInt {
                self.$func(&rhs)
            }
        }

        impl $assign for BigInt {
            #[inline]
            fn $assign_func(&mut self, rhs: BigInt) {
                *self = (&*self).$func(&rhs);
            }
        }

        impl $assign<&BigInt> for BigInt {
            #[inline]
            fn $assign_func(&mut self, rhs: &BigInt) {
                *self = (&*self).$func(rhs);
            }
        }
    };
}

/// Implement the owned/borrowed combinations of a shift operator plus its
/// compound-assignment form, delegating to the named method on `BigInt`.
macro_rules! impl_shift {
    ($op:ident, $func:ident, $assign:ident, $assign_func:ident, $method:ident) => {
        impl $op<u32> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $func(self, shift: u32) -> BigInt {
                self.$method(shift)
            }
        }

        impl $op<u32> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $func(self, shift: u32) -> BigInt {
                self.$method(shift)
            }
        }

        impl $assign<u32> for BigInt {
            #[inline]
            fn $assign_func(&mut self, shift: u32) {
                *self = self.$method(shift);
            }
        }
    };
}
