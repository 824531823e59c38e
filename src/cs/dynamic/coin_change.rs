/// Computes the minimum number of coins needed to form `amount`.
///
/// This is the "unbounded" variant: each denomination can be used any number of
/// times. Returns `None` if `amount` cannot be formed from `denominations`, or if
/// a table of `amount + 1` counts cannot be allocated. Non-positive denominations
/// can never contribute to a sum and are skipped.
///
/// # Examples
///
/// ```
/// use change_maker::min_coins_for_change;
///
/// // Minimum 3 coins: 21 + 21 + 21 = 63
/// assert_eq!(min_coins_for_change(&[1, 5, 10, 21, 25], 63), Some(3));
///
/// // Nothing made of 5s and 10s adds up to 94
/// assert_eq!(min_coins_for_change(&[5, 10], 94), None);
/// ```
pub fn min_coins_for_change(denominations: &[i64], amount: usize) -> Option<usize> {
    if amount == 0 {
        return Some(0);
    }

    // counts[i] holds the fewest coins forming amount i, if any.
    let len = amount.checked_add(1)?;
    let mut counts: Vec<Option<usize>> = Vec::new();
    counts.try_reserve_exact(len).ok()?;
    counts.resize(len, None);
    counts[0] = Some(0);

    for coin in denominations.iter().filter_map(|&d| usize::try_from(d).ok()) {
        if coin == 0 || coin > amount {
            continue;
        }
        for curr_amount in coin..=amount {
            if let Some(prev) = counts[curr_amount - coin] {
                let candidate = prev + 1;
                if counts[curr_amount].map_or(true, |best| candidate < best) {
                    counts[curr_amount] = Some(candidate);
                }
            }
        }
    }

    counts[amount]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_coins_for_change() {
        let coins = vec![1, 5, 10, 25, 100];
        assert_eq!(min_coins_for_change(&coins, 25), Some(1));
        assert_eq!(min_coins_for_change(&coins, 15), Some(2));
        assert_eq!(min_coins_for_change(&coins, 0), Some(0));

        // 5s and 10s only reach multiples of 5
        assert_eq!(min_coins_for_change(&[5, 10], 3), None);
        assert_eq!(min_coins_for_change(&[5, 10], 94), None);
    }

    #[test]
    fn test_unallocatable_amount() {
        assert_eq!(min_coins_for_change(&[1, 2], usize::MAX), None);
    }

    #[test]
    fn test_greedy_counterexamples() {
        // Greedy takes 20 + 1 + 1 + 1; the optimum is 4 + 4 + 15.
        assert_eq!(min_coins_for_change(&[1, 4, 15, 20, 50], 23), Some(3));
        assert_eq!(min_coins_for_change(&[4, 5], 27), Some(6));
        assert_eq!(min_coins_for_change(&[2, 5, 10, 20, 50], 21), Some(5));
    }

    #[test]
    fn test_order_of_denominations_does_not_matter() {
        assert_eq!(
            min_coins_for_change(&[100, 25, 10, 5, 1], 999),
            min_coins_for_change(&[1, 5, 10, 25, 100], 999)
        );
    }

    #[test]
    fn test_degenerate_denominations() {
        assert_eq!(min_coins_for_change(&[], 5), None);
        assert_eq!(min_coins_for_change(&[], 0), Some(0));
        assert_eq!(min_coins_for_change(&[0, -3], 4), None);
        assert_eq!(min_coins_for_change(&[0, -3, 2], 4), Some(2));
    }
}
