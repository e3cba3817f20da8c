use crate::constants::DECK;

/// Returns the zero-based index of the card token in the initial deck.
///
/// # Examples
///
/// ```
/// use strkit::cards::card_id;
///
/// assert_eq!(card_id("A♣"), Some(0));
/// assert_eq!(card_id("K♠"), Some(51));
/// assert_eq!(card_id("Z♠"), None);
/// ```
pub fn card_id(token: &str) -> Option<usize> {
    DECK.iter().position(|card| *card == token)
}

/// Returns the card token found at the given deck index.
pub fn card_at(index: usize) -> Option<&'static str> {
    DECK.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        assert_eq!(card_id("A♣"), Some(0));
        assert_eq!(card_id("2♣"), Some(1));
        assert_eq!(card_id("3♣"), Some(2));
        assert_eq!(card_id("10♣"), Some(9));
        assert_eq!(card_id("A♦"), Some(13));
        assert_eq!(card_id("A♥"), Some(26));
        assert_eq!(card_id("Q♠"), Some(50));
        assert_eq!(card_id("K♠"), Some(51));
    }

    #[test]
    fn test_card_id_unknown() {
        assert_eq!(card_id(""), None);
        assert_eq!(card_id("1♣"), None);
        assert_eq!(card_id("a♣"), None);
        assert_eq!(card_id(" A♣"), None);
    }

    #[test]
    fn test_card_at_is_inverse() {
        for index in 0..DECK.len() {
            let token = card_at(index).unwrap();
            assert_eq!(card_id(token), Some(index));
        }
        assert_eq!(card_at(52), None);
    }
}
