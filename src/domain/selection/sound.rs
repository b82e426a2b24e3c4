//! Sound selection with anti-repeat policy

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::pack::{PackManifest, SoundEntry};
use crate::domain::state::InvocationState;

/// Choose one category uniformly from the effective list.
pub fn pick_category<'a, R: Rng + ?Sized>(categories: &'a [String], rng: &mut R) -> Option<&'a str> {
    categories.choose(rng).map(String::as_str)
}

/// Choose a sound, never repeating `last_played` when an alternative exists.
///
/// A single-sound category always yields that sound. If every entry matches
/// `last_played` (duplicate file names) the full list is used.
pub fn pick_sound<'a, R: Rng + ?Sized>(
    sounds: &'a [SoundEntry],
    last_played: Option<&str>,
    rng: &mut R,
) -> Option<&'a SoundEntry> {
    if sounds.len() <= 1 {
        return sounds.first();
    }

    let candidates: Vec<&SoundEntry> = sounds
        .iter()
        .filter(|s| Some(s.file.as_str()) != last_played)
        .collect();

    if candidates.is_empty() {
        return sounds.choose(rng);
    }

    candidates.choose(rng).copied()
}

/// Select a sound for `category` and record it in the state.
///
/// Returns the chosen file name, or `None` when the category has no sounds
/// in the manifest (state untouched).
pub fn select_sound<R: Rng + ?Sized>(
    category: &str,
    manifest: &PackManifest,
    state: &mut InvocationState,
    rng: &mut R,
) -> Option<String> {
    let pick = pick_sound(manifest.sounds(category), state.last_played(category), rng)?;
    let file = pick.file.clone();
    state.record_played(category, file.clone());
    Some(file)
}
