//! Built-in starter tables, standing in for the original's bundled presets.

/// Generic adventure loot, weight-based.
const GENERIC: &str = r#"[
  {"name": "Gold coins", "weight": 30},
  {"name": "Healing potion", "weight": 20},
  {"name": "Gemstone", "weight": 15},
  {"name": "Silver dagger", "weight": 12},
  {"name": "Scroll of protection", "weight": 10},
  {"name": "Enchanted cloak", "weight": 8},
  {"name": "Ring of keys", "weight": 4},
  {"name": "Ancient relic", "weight": 1}
]"#;

/// d100-style dungeon table, range-based with inclusive bounds.
const DUNGEON_D100: &str = r#"[
  {"name": "Rusty weapon", "range": [1, 35]},
  {"name": "Torn map fragment", "range": [36, 60]},
  {"name": "Pouch of silver", "range": [61, 80]},
  {"name": "Alchemist's supplies", "range": [81, 92]},
  {"name": "Masterwork blade", "range": [93, 99]},
  {"name": "Dragon scale", "range": [100, 100]}
]"#;

pub const NAMES: &[&str] = &["generic", "d100"];

/// Raw JSON for a named preset, if it exists.
pub fn get(name: &str) -> Option<&'static str> {
    match name {
        "generic" => Some(GENERIC),
        "d100" => Some(DUNGEON_D100),
        _ => None,
    }
}
