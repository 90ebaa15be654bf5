use rbj_core::Payout;

/// Per-unit-stake payout for a player total against a dealer total.
///
/// A busted player always loses, checked before the dealer's bust pays out.
/// Equal standing totals push. Blackjack bonuses and double-down multipliers
/// are applied by the round, not here.
pub fn settle(player: u8, dealer: u8) -> Payout {
    if player > 21 {
        return -1.0;
    }
    if dealer > 21 {
        return 1.0;
    }
    match player.cmp(&dealer) {
        std::cmp::Ordering::Equal => 0.0,
        std::cmp::Ordering::Greater => 1.0,
        std::cmp::Ordering::Less => -1.0,
    }
}
