/// Opaque identity of one contestant.
///
/// The engine only ever compares ids for equality. Everything presentational
/// (display name, color) belongs to the UI layer's `PlayerProfile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const fn new(id: u8) -> Self {
        PlayerId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_compare_by_value() {
        assert_eq!(PlayerId::new(1), PlayerId::new(1));
        assert_ne!(PlayerId::new(1), PlayerId::new(2));
    }
}
