use log::{debug, trace};

use crate::error::{ChangeError, Result};

/// Best known way of reaching one amount: how many coins it takes and which
/// coin was added last. Following `step` back to zero recovers the combination.
#[derive(Debug, Clone, Copy)]
struct Slot {
    coins: usize,
    coin: i64,
    step: usize,
}

/// Finds the fewest coins that add up to a total, drawing on a fixed set of
/// denominations with an unlimited supply of each.
///
/// The denominations are copied and sorted once at construction; each query
/// builds and drops its own table, so a solver can be shared freely between
/// threads.
///
/// # Examples
///
/// ```
/// use change_maker::ChangeSolver;
///
/// let solver = ChangeSolver::new(&[1, 4, 15, 20, 50]).unwrap();
///
/// // Greedy would hand out 20 + 1 + 1 + 1.
/// assert_eq!(solver.compute_minimal_change(23).unwrap(), vec![4, 4, 15]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSolver {
    denominations: Vec<i64>,
}

impl ChangeSolver {
    /// Creates a solver over `denominations`.
    ///
    /// # Errors
    ///
    /// * [`ChangeError::NoDenominations`] if the slice is empty
    /// * [`ChangeError::NonPositiveDenomination`] for the first value `<= 0`
    ///
    /// Duplicates are accepted as given; they never change an answer.
    pub fn new(denominations: &[i64]) -> Result<Self> {
        if denominations.is_empty() {
            return Err(ChangeError::NoDenominations);
        }
        if let Some(&bad) = denominations.iter().find(|&&d| d <= 0) {
            return Err(ChangeError::NonPositiveDenomination(bad));
        }

        let mut sorted = denominations.to_vec();
        sorted.sort_unstable();
        Ok(Self {
            denominations: sorted,
        })
    }

    /// The available denominations, ascending.
    pub fn denominations(&self) -> &[i64] {
        &self.denominations
    }

    /// Computes a combination of the fewest coins summing to `total`, ascending.
    ///
    /// When several combinations share the minimal size, the one found first
    /// while sweeping denominations in ascending order is kept.
    ///
    /// # Errors
    ///
    /// * [`ChangeError::InvalidAmount`] if `total` is negative
    /// * [`ChangeError::Unrepresentable`] if no combination reaches `total`
    /// * [`ChangeError::AmountTooLarge`] if no table of `total + 1` slots can be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use change_maker::{ChangeError, ChangeSolver};
    ///
    /// let solver = ChangeSolver::new(&[5, 10]).unwrap();
    /// assert_eq!(solver.compute_minimal_change(25).unwrap(), vec![5, 10, 10]);
    /// assert_eq!(solver.compute_minimal_change(0).unwrap(), Vec::<i64>::new());
    /// assert_eq!(
    ///     solver.compute_minimal_change(3),
    ///     Err(ChangeError::Unrepresentable(3))
    /// );
    /// ```
    ///
    /// # Complexity
    /// * Time: O(T * D) where T is the total and D the number of denominations
    /// * Space: O(T)
    pub fn compute_minimal_change(&self, total: i64) -> Result<Vec<i64>> {
        let target = Self::table_index(total)?;
        if target == 0 {
            return Ok(Vec::new());
        }

        debug!(
            "computing change for {} over {} denominations",
            total,
            self.denominations.len()
        );
        let table = self.fill_table(total, target)?;

        let Some(best) = table[target] else {
            debug!("no combination reaches {}", total);
            return Err(ChangeError::Unrepresentable(total));
        };

        let mut change = Vec::with_capacity(best.coins);
        let mut amount = target;
        while amount > 0 {
            // Every slot on the chain was filled before the slot pointing at it.
            let slot = table[amount].ok_or(ChangeError::Unrepresentable(total))?;
            change.push(slot.coin);
            amount -= slot.step;
        }

        change.sort_unstable();
        Ok(change)
    }

    /// Returns only the number of coins in the minimal combination for `total`.
    ///
    /// Reads the count straight from the same table
    /// [`compute_minimal_change`](Self::compute_minimal_change) builds, and fails
    /// under the same conditions.
    ///
    /// ```
    /// use change_maker::ChangeSolver;
    ///
    /// let solver = ChangeSolver::new(&[1, 2, 5, 10, 20, 50, 100]).unwrap();
    /// assert_eq!(solver.min_coin_count(999).unwrap(), 15);
    /// ```
    pub fn min_coin_count(&self, total: i64) -> Result<usize> {
        let target = Self::table_index(total)?;
        if target == 0 {
            return Ok(0);
        }

        let table = self.fill_table(total, target)?;
        table[target]
            .map(|best| best.coins)
            .ok_or(ChangeError::Unrepresentable(total))
    }

    fn table_index(total: i64) -> Result<usize> {
        if total < 0 {
            return Err(ChangeError::InvalidAmount);
        }
        usize::try_from(total).map_err(|_| ChangeError::AmountTooLarge(total))
    }

    /// table[j] = fewest-coin way to reach j found so far.
    ///
    /// Larger denominations sweep over slots already filled by smaller ones and
    /// replace them only on a strict improvement.
    fn fill_table(&self, total: i64, target: usize) -> Result<Vec<Option<Slot>>> {
        let len = target
            .checked_add(1)
            .ok_or(ChangeError::AmountTooLarge(total))?;
        trace!("allocating change table of {} slots", len);

        let mut table: Vec<Option<Slot>> = Vec::new();
        table
            .try_reserve_exact(len)
            .map_err(|_| ChangeError::AmountTooLarge(total))?;
        table.resize(len, None);
        table[0] = Some(Slot {
            coins: 0,
            coin: 0,
            step: 0,
        });

        for &coin in &self.denominations {
            let step = match usize::try_from(coin) {
                Ok(step) if step <= target => step,
                _ => continue,
            };
            for j in step..=target {
                let Some(prev) = table[j - step] else {
                    continue;
                };
                let candidate = prev.coins + 1;
                if table[j].map_or(true, |best| candidate < best.coins) {
                    table[j] = Some(Slot {
                        coins: candidate,
                        coin,
                        step,
                    });
                }
            }
        }

        Ok(table)
    }
}
