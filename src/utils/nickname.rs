//! Nickname Generation
//!
//! URL-safe display handles assigned to accounts registered without one.

use rand::seq::SliceRandom;
use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "clever", "brave", "calm", "eager", "gentle", "jolly", "keen", "lively", "merry", "nimble",
    "proud", "quick", "sunny", "witty", "zesty",
];

const ANIMALS: &[&str] = &[
    "fox", "owl", "lynx", "otter", "heron", "badger", "falcon", "marten", "raven", "stoat",
    "swift", "tern", "vole", "wren", "ibex",
];

/// Generate a URL-safe nickname such as `clever_fox_123`.
///
/// Uniqueness is not guaranteed here; callers retry against the store's
/// unique constraint.
pub fn generate_nickname() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&"clever");
    let animal = ANIMALS.choose(&mut rng).unwrap_or(&"fox");
    format!("{}_{}_{}", adjective, animal, rng.gen_range(100..1000))
}
