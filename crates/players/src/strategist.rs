use rbj_cards::Tally;

/// Answers the in-round questions: split, double down, hit or stand.
///
/// A strategist serves exactly one round. The actor drafts a fresh one when
/// each bet is placed and drops the old one with it, so implementations may
/// cache round-scoped state freely. Hand arguments mirror the observation:
/// the focused hand's total, its demotable-ace count, and the dealer's
/// visible total.
pub trait Strategist {
    /// Whether to split every splittable hand.
    fn split(&mut self, total: u8, aces: u8, dealer: u8, unseen: &Tally) -> bool;
    /// Whether to double down on the focused hand.
    fn double(&mut self, total: u8, aces: u8, dealer: u8, unseen: &Tally) -> bool;
    /// Whether to hit the focused hand; `false` stands.
    fn hit(&mut self, total: u8, aces: u8, dealer: u8, unseen: &Tally) -> bool;
}
