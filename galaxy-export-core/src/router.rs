//! Grouping assembled records into per-platform, title-sorted lists.

use std::collections::HashMap;

use crate::assemble::GameLibrary;
use crate::platform::GENERIC_PLATFORM;
use crate::record::GameRecord;

/// The exportable games of one platform, sorted by title.
#[derive(Debug, Clone)]
pub struct PlatformGroup {
    pub platform: String,
    pub games: Vec<GameRecord>,
}

/// How many records were dropped, and why.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub generic: usize,
    pub not_allowed: usize,
    pub dlc: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Routing {
    /// Non-empty groups in first-seen platform order.
    pub groups: Vec<PlatformGroup>,
    pub skipped: SkipCounts,
}

/// Decides which records reach the report and on which sheet.
#[derive(Debug, Clone, Default)]
pub struct PlatformRouter {
    allowlist: Option<Vec<String>>,
}

impl PlatformRouter {
    pub fn new(allowlist: Option<Vec<String>>) -> Self {
        Self { allowlist }
    }

    fn allows(&self, platform: &str) -> bool {
        self.allowlist
            .as_ref()
            .is_none_or(|list| list.iter().any(|p| p == platform))
    }

    pub fn route(&self, library: GameLibrary) -> Routing {
        let (games, dlcs) = library.into_parts();
        let mut groups: Vec<PlatformGroup> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut skipped = SkipCounts::default();

        for game in games {
            let platform = game.platform();
            if platform == GENERIC_PLATFORM {
                skipped.generic += 1;
                continue;
            }
            if !self.allows(platform) {
                skipped.not_allowed += 1;
                continue;
            }
            if dlcs.contains(game.release_key()) || game.has_parent() {
                log::debug!("Skipping add-on '{}'", game.release_key());
                skipped.dlc += 1;
                continue;
            }

            let slot = match slots.get(platform) {
                Some(&slot) => slot,
                None => {
                    groups.push(PlatformGroup {
                        platform: platform.to_string(),
                        games: Vec::new(),
                    });
                    slots.insert(platform.to_string(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[slot].games.push(game);
        }

        for group in &mut groups {
            sort_by_title(&mut group.games);
        }

        Routing { groups, skipped }
    }
}

/// Stable sort on the lowercased title. Records without a title sort first.
pub fn sort_by_title(games: &mut [GameRecord]) {
    for game in games.iter().filter(|g| g.title().is_none()) {
        log::warn!("'{}' has no title", game.release_key());
    }
    games.sort_by_cached_key(|g| g.title().unwrap_or_default().to_lowercase());
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
