//! Per-oracle reading assembly.
//!
//! Each routine takes an already resolved spread, the order seed, and the
//! backing collection, and returns the oracle's reading. Collection and
//! spread lookup happen in [`crate::engine`].

pub mod iching;
pub mod rueda;
pub mod tarot;

use pz_content::SpreadDefinition;

/// Position label for `position`: the authored label, or `"{fallback} {n}"`
/// counting from one.
pub(crate) fn position_label(spread: &SpreadDefinition, position: usize, fallback: &str) -> String {
    spread
        .position_label(position)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{fallback} {}", position + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authored_labels_win() {
        let spread = SpreadDefinition::new("tarot", 2).with_positions(["Pasado", "Futuro"]);
        assert_eq!(position_label(&spread, 0, "Carta"), "Pasado");
        assert_eq!(position_label(&spread, 1, "Carta"), "Futuro");
    }

    #[test]
    fn missing_labels_fall_back() {
        let spread = SpreadDefinition::new("tarot", 3).with_positions(["Solo uno"]);
        assert_eq!(position_label(&spread, 0, "Carta"), "Solo uno");
        assert_eq!(position_label(&spread, 2, "Carta"), "Carta 3");
        let bare = SpreadDefinition::new("rueda", 1);
        assert_eq!(position_label(&bare, 0, "Animal"), "Animal 1");
    }
}
