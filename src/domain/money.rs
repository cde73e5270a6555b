use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// An amount of money in Philippine pesos, held as whole centavos.
///
/// Integer storage keeps cart totals exact no matter how many line items
/// are summed. Arithmetic saturates at `u64::MAX` centavos instead of
/// overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    centavos: u64,
}

impl Money {
    pub const ZERO: Money = Money { centavos: 0 };

    pub const fn pesos(pesos: u64) -> Self {
        Self {
            centavos: pesos.saturating_mul(100),
        }
    }

    pub const fn centavos(centavos: u64) -> Self {
        Self { centavos }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::centavos(self.centavos.saturating_add(rhs.centavos))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money::centavos(self.centavos.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₱{}.{:02}", self.centavos / 100, self.centavos % 100)
    }
}
