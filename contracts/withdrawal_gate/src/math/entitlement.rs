use rampart::error::RampartResult;
use rampart::math::safe_math::{SafeDivFloor, SafeMath};
use soroban_sdk::Env;

use crate::storage::ReleaseParameters;

/// Pool share released to an account with the given original position:
/// `floor(assets_available_to_withdraw * original_position / total_supplied_assets)`.
///
/// The multiplication must happen before the division; dividing first loses
/// the sub-unit remainder and changes results.
pub fn max_withdrawable(
    env: &Env,
    params: &ReleaseParameters,
    original_position: i128,
) -> RampartResult<i128> {
    params
        .assets_available_to_withdraw
        .safe_mul(original_position, env)?
        .safe_div_floor(params.total_supplied_assets, env)
}

/// Assets the account may still withdraw under `params`.
///
/// `assets_supplied` is the account's live claim, which already excludes
/// everything withdrawn so far. The counter is added back to reconstruct the
/// original position before the ratio is applied; otherwise each withdrawal
/// would shrink the base of the next computation and early withdrawers would
/// be short-changed.
pub fn remaining(
    env: &Env,
    params: &ReleaseParameters,
    total_withdrawn: i128,
    assets_supplied: i128,
) -> RampartResult<i128> {
    let original_position = total_withdrawn.safe_add(assets_supplied, env)?;
    let max = max_withdrawable(env, params, original_position)?;

    max.safe_sub(total_withdrawn, env)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rampart::error::ErrorCode;

    use super::*;

    fn release_params(available: i128, total: i128) -> ReleaseParameters {
        ReleaseParameters {
            assets_available_to_withdraw: available,
            total_supplied_assets: total,
        }
    }

    #[test]
    fn half_released_pool() {
        let env = Env::default();
        let params = release_params(5_000_000, 10_000_000);

        assert_eq!(remaining(&env, &params, 0, 1_000_000).unwrap(), 500_000);
    }

    #[test]
    fn withdrawn_amount_is_added_back() {
        let env = Env::default();
        let params = release_params(5_000_000, 10_000_000);

        // 200_000 already withdrawn, live balance down to 800_000; the
        // original 1_000_000 position still anchors the ratio.
        assert_eq!(
            remaining(&env, &params, 200_000, 800_000).unwrap(),
            300_000
        );
        assert_eq!(remaining(&env, &params, 500_000, 500_000).unwrap(), 0);
    }

    #[test]
    fn rounding_multiplies_before_dividing() {
        let env = Env::default();
        let params = release_params(1, 3);
        assert_eq!(max_withdrawable(&env, &params, 2).unwrap(), 0);

        // floor(2 * 5 / 3) = 3, while 5 * floor(2 / 3) = 0.
        let params = release_params(2, 3);
        assert_eq!(max_withdrawable(&env, &params, 5).unwrap(), 3);
    }

    #[test]
    fn overflow_is_a_hard_failure() {
        let env = Env::default();
        let params = release_params(i128::MAX, 1);

        assert_eq!(
            remaining(&env, &params, 0, 2),
            Err(ErrorCode::MathError)
        );
    }
}
