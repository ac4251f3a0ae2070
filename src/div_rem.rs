use num_integer::Integer;
use num_traits::PrimInt;
use std::cmp::min;

pub(crate) trait MulDivRemFloor: Sized {
    fn mul_div_rem_floor(&self, multiplier: Self, divisor: Self) -> (Self, Self);
}

impl<T: Integer + Copy> MulDivRemFloor for T {
    fn mul_div_rem_floor(&self, multiplier: Self, divisor: Self) -> (Self, Self) {
        // Computes floor((a*b)/c) and its remainder without forming a*b, which
        // overflows long before the quotient does. Writing a = q_a*c + r_a and
        // b = q_b*c + r_b:
        //
        // a*b/c = q_a*b + r_a*q_b + r_a*r_b/c
        //
        // Both r_a and r_b are below c, so r_a*r_b only needs to fit c².
        let a = *self;
        let b = multiplier;
        let c = divisor;
        let (q_a, r_a) = a.div_mod_floor(&c);
        let (q_b, r_b) = b.div_mod_floor(&c);
        let (q_c, r_c) = (r_a * r_b).div_mod_floor(&c);
        (q_a * b + r_a * q_b + q_c, r_c)
    }
}

pub(crate) trait ClampedDivRem<Q: Ord>: Sized {
    /// Divide by `divisor` with the quotient capped at `max_quotient`, leaving
    /// whatever is over in the remainder. Used where the last period of a
    /// cycle is one day longer than the others.
    fn clamped_div_rem(self, divisor: Self, max_quotient: Q) -> (Q, Self);
}

impl<T, Q> ClampedDivRem<Q> for T
where
    T: PrimInt + TryInto<Q>,
    Q: Ord + Into<T> + Copy,
{
    fn clamped_div_rem(self, divisor: T, max_quotient: Q) -> (Q, Self) {
        let quotient = min(self / divisor, max_quotient.into());
        let remainder = self - quotient * divisor;
        // The quotient is at most max_quotient, so it always converts back.
        let quotient = quotient.try_into().unwrap_or(max_quotient);
        (quotient, remainder)
    }
}
