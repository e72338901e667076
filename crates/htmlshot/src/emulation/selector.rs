//! Interpretation of one `--device` argument.
//!
//! An argument is tried, in order, as a preset name, as a preset id and
//! finally as a query string of property overrides
//! (`width=400&landscape=true`). Each call builds on the profile it is given,
//! so repeated arguments accumulate.

use super::device::DeviceInfo;
use super::profile::DeviceProfile;
use super::registry::DeviceRegistry;
use url::form_urlencoded;

/// What a device argument resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A preset matched by exact name
    Named(DeviceInfo),
    /// A preset matched by id
    Numbered {
        /// Preset id
        id: usize,
        /// Preset properties
        info: DeviceInfo,
    },
    /// Decoded `key=value` pairs, in argument order
    Overrides(Vec<(String, String)>),
}

/// Resolves device arguments against a registry.
#[derive(Debug, Clone, Copy)]
pub struct DeviceSelector<'a> {
    registry: &'a DeviceRegistry,
}

impl Default for DeviceSelector<'static> {
    fn default() -> Self {
        Self::new(DeviceRegistry::builtin())
    }
}

impl<'a> DeviceSelector<'a> {
    /// Selector over `registry`
    #[must_use]
    pub const fn new(registry: &'a DeviceRegistry) -> Self {
        Self { registry }
    }

    /// The registry presets are looked up in
    #[must_use]
    pub const fn registry(&self) -> &'a DeviceRegistry {
        self.registry
    }

    /// Decide what `arg` means without touching any profile.
    #[must_use]
    pub fn resolve(&self, arg: &str) -> Selection {
        if let Some(info) = self.registry.lookup_by_name(arg) {
            return Selection::Named(info);
        }
        if let Some((id, info)) = arg
            .parse::<usize>()
            .ok()
            .and_then(|id| self.registry.lookup_by_id(id).map(|info| (id, info)))
        {
            return Selection::Numbered { id, info };
        }
        Selection::Overrides(decode_pairs(arg))
    }

    /// Apply `arg` on top of `profile` and return the result.
    #[must_use]
    pub fn select(&self, mut profile: DeviceProfile, arg: &str) -> DeviceProfile {
        self.apply(&mut profile, arg);
        profile
    }

    /// Apply `arg` to `profile` in place.
    pub fn apply(&self, profile: &mut DeviceProfile, arg: &str) {
        match self.resolve(arg) {
            Selection::Named(info) => {
                tracing::debug!(device = %info.name, "device selected by name");
                profile.seed(&info);
            }
            Selection::Numbered { id, info } => {
                tracing::debug!(id, device = %info.name, "device selected by id");
                profile.seed(&info);
            }
            Selection::Overrides(pairs) => {
                let applied = profile.apply_overrides(pairs.iter().map(|(k, v)| (k, v)));
                tracing::debug!(
                    pairs = pairs.len(),
                    applied,
                    "device properties overridden"
                );
            }
        }
    }

    /// Fold every argument, in order, into the default profile.
    #[must_use]
    pub fn select_all<I, S>(&self, args: I) -> DeviceProfile
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        args.into_iter()
            .fold(DeviceProfile::from_registry(self.registry), |profile, arg| {
                self.select(profile, arg.as_ref())
            })
    }
}

/// Percent-decode `&`-separated pairs, dropping any pair that carries a
/// `;` or a `%` not followed by two hex digits.
fn decode_pairs(arg: &str) -> Vec<(String, String)> {
    arg.split('&')
        .filter(|pair| {
            let ok = is_well_formed(pair);
            if !ok {
                tracing::debug!(pair, "ignoring malformed device override");
            }
            ok
        })
        .flat_map(|pair| form_urlencoded::parse(pair.as_bytes()).into_owned())
        .collect()
}

fn is_well_formed(pair: &str) -> bool {
    if pair.contains(';') {
        return false;
    }
    let mut rest = pair;
    while let Some(at) = rest.find('%') {
        let escape = rest.get(at + 1..at + 3);
        if !escape.is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit())) {
            return false;
        }
        rest = &rest[at + 3..];
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn builtin() -> DeviceSelector<'static> {
        DeviceSelector::default()
    }

    mod resolve_tests {
        use super::*;

        #[test]
        fn test_name_match() {
            match builtin().resolve("Pixel 2") {
                Selection::Named(info) => assert_eq!(info.name, "Pixel 2"),
                other => panic!("expected name match, got {other:?}"),
            }
        }

        #[test]
        fn test_id_match() {
            let selector = builtin();
            let third = selector.registry().list_all()[2].info().clone();
            assert_eq!(
                selector.resolve("3"),
                Selection::Numbered { id: 3, info: third }
            );
        }

        #[test]
        fn test_name_beats_id() {
            let registry = DeviceRegistry::from_devices([
                DeviceInfo::new("Alpha").with_viewport_size(1, 1),
                DeviceInfo::new("1").with_viewport_size(2, 2),
            ]);
            let selector = DeviceSelector::new(&registry);
            match selector.resolve("1") {
                Selection::Named(info) => assert_eq!(info.width, 2),
                other => panic!("expected name match, got {other:?}"),
            }
        }

        #[test]
        fn test_out_of_range_id_becomes_overrides() {
            let selector = builtin();
            let beyond = (selector.registry().len() + 1).to_string();
            assert!(matches!(selector.resolve(&beyond), Selection::Overrides(_)));
            assert!(matches!(selector.resolve("0"), Selection::Overrides(_)));
            assert!(matches!(selector.resolve("-1"), Selection::Overrides(_)));
        }

        #[test]
        fn test_query_string_decoded() {
            let selection = builtin().resolve("name=My%20Phone&useragent=A+B%2FC&width=10");
            assert_eq!(
                selection,
                Selection::Overrides(vec![
                    ("name".to_string(), "My Phone".to_string()),
                    ("useragent".to_string(), "A B/C".to_string()),
                    ("width".to_string(), "10".to_string()),
                ])
            );
        }

        #[test]
        fn test_bad_escape_pairs_dropped() {
            assert_eq!(builtin().resolve("width=%zz"), Selection::Overrides(vec![]));
            assert_eq!(builtin().resolve("name=50%"), Selection::Overrides(vec![]));
            assert_eq!(builtin().resolve("name=%4"), Selection::Overrides(vec![]));
        }

        #[test]
        fn test_semicolon_pairs_dropped() {
            assert_eq!(
                builtin().resolve("width=1;height=2&scale=3"),
                Selection::Overrides(vec![("scale".to_string(), "3".to_string())])
            );
        }

        #[test]
        fn test_good_pairs_survive_bad_neighbour() {
            assert_eq!(
                builtin().resolve("name=%zz&width=%31%30"),
                Selection::Overrides(vec![("width".to_string(), "10".to_string())])
            );
        }

        #[test]
        fn test_empty_registry_falls_through() {
            let registry = DeviceRegistry::default();
            let selector = DeviceSelector::new(&registry);
            assert!(matches!(selector.resolve("iPhone 8"), Selection::Overrides(_)));
            assert!(matches!(selector.resolve("1"), Selection::Overrides(_)));
        }
    }

    mod select_tests {
        use super::*;

        #[test]
        fn test_preset_then_override_compose() {
            let selector = builtin();
            let profile = selector.select_all(["iPhone 8", "width=999"]);
            let iphone = selector.registry().lookup_by_name("iPhone 8").unwrap();
            assert_eq!(profile.snapshot(), DeviceInfo { width: 999, ..iphone });
        }

        #[test]
        fn test_override_then_preset_resets() {
            let selector = builtin();
            let profile = selector.select_all(["width=999", "Pixel 2"]);
            assert_eq!(
                profile.snapshot(),
                selector.registry().lookup_by_name("Pixel 2").unwrap()
            );
        }

        #[test]
        fn test_select_by_id_seeds() {
            let selector = builtin();
            let profile = selector.select(DeviceProfile::default(), "1");
            assert_eq!(profile.info(), selector.registry().list_all()[0].info());
        }

        #[test]
        fn test_override_scenario() {
            let profile = builtin().select_all(["height=800&landscape=true"]);
            let info = profile.snapshot();
            assert_eq!(info.name, "iPhone 8");
            assert_eq!(info.width, 375);
            assert_eq!(info.height, 800);
            assert!((info.scale - 2.0).abs() < f64::EPSILON);
            assert!(info.mobile);
            assert!(info.touch);
            assert!(info.landscape);
        }

        #[test]
        fn test_unknown_name_is_noop() {
            let selector = builtin();
            let before = DeviceProfile::default();
            let after = selector.select(before.clone(), "Nokia 3310");
            assert_eq!(after, before);
        }

        #[test]
        fn test_malformed_argument_is_noop() {
            let selector = builtin();
            for arg in ["width=%zz", "name=%zz", "width=1;height=2", "%"] {
                assert_eq!(selector.select_all([arg]), DeviceProfile::default(), "{arg}");
            }
        }

        #[test]
        fn test_bare_key_zeroes_field() {
            let profile = builtin().select_all(["width"]);
            assert_eq!(profile.info().width, 0);
            assert_eq!(profile.info().height, 667);
        }

        #[test]
        fn test_no_args_is_default() {
            let profile = builtin().select_all(std::iter::empty::<&str>());
            assert_eq!(profile, DeviceProfile::default());
        }

        #[test]
        fn test_overrides_on_blank_profile() {
            let registry = DeviceRegistry::default();
            let selector = DeviceSelector::new(&registry);
            let profile = selector.select_all(["width=320&height=480&scale=1"]);
            assert_eq!(profile.info().width, 320);
            assert_eq!(profile.info().height, 480);
            assert!(profile.info().name.is_empty());
        }
    }
}
