//! Platform keys derived from release keys, and their sheet display names.

/// Platform key of entries added by hand in the client.
pub const GENERIC_PLATFORM: &str = "generic";

/// Known platform keys and their display names.
const PLATFORM_NAMES: &[(&str, &str)] = &[
    ("amazon", "Prime Gaming (Amazon)"),
    ("epic", "Epic Games"),
    ("gog", "GOG Galaxy"),
    ("origin", "Origin"),
    ("psn", "PlayStation"),
    ("rockstar", "Rockstar Games"),
    ("steam", "Steam"),
    ("twitch", "Prime Gaming (Twitch)"),
    ("uplay", "UPlay"),
    ("battlenet", "Battle.Net"),
];

/// The platform part of a release key: everything before the first `_`.
///
/// A key without an underscore is its own platform.
pub fn platform_of(release_key: &str) -> &str {
    release_key
        .split_once('_')
        .map_or(release_key, |(platform, _)| platform)
}

/// Display name for a platform key, or the key itself when it is not known.
pub fn display_name(platform: &str) -> &str {
    PLATFORM_NAMES
        .iter()
        .find(|(key, _)| *key == platform)
        .map_or(platform, |&(_, name)| name)
}

/// All platform keys with a display name.
pub fn known_platforms() -> impl Iterator<Item = &'static str> {
    PLATFORM_NAMES.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_10_entries() {
        assert_eq!(known_platforms().count(), 10);
    }

    #[test]
    fn platform_is_prefix_before_first_underscore() {
        assert_eq!(platform_of("steam_100"), "steam");
        assert_eq!(platform_of("gog_1207658924"), "gog");
        assert_eq!(platform_of("epic_a_b_c"), "epic");
        assert_eq!(platform_of("nounderscore"), "nounderscore");
    }

    #[test]
    fn known_keys_get_display_names() {
        assert_eq!(display_name("steam"), "Steam");
        assert_eq!(display_name("battlenet"), "Battle.Net");
        assert_eq!(display_name("amazon"), "Prime Gaming (Amazon)");
    }

    #[test]
    fn unknown_keys_pass_through() {
        assert_eq!(display_name("itch"), "itch");
        assert_eq!(display_name("Steam"), "Steam");
    }
}
