//! Built-in device presets.
//!
//! The table below is the single enumeration source. Every preset that
//! rotates is followed by its landscape variant, and ids are assigned by
//! position starting at 1, so they are stable for a given build.

use super::device::DeviceInfo;
use std::sync::OnceLock;

/// One row of the static preset table (portrait orientation).
#[derive(Debug, Clone, Copy)]
struct Preset {
    name: &'static str,
    user_agent: &'static str,
    width: u32,
    height: u32,
    scale: f64,
    mobile: bool,
    touch: bool,
    rotates: bool,
}

impl Preset {
    const fn phone(
        name: &'static str,
        user_agent: &'static str,
        width: u32,
        height: u32,
        scale: f64,
    ) -> Self {
        Self {
            name,
            user_agent,
            width,
            height,
            scale,
            mobile: true,
            touch: true,
            rotates: true,
        }
    }

    const fn laptop(name: &'static str, width: u32, height: u32, scale: f64, touch: bool) -> Self {
        Self {
            name,
            user_agent: "",
            width,
            height,
            scale,
            mobile: false,
            touch,
            rotates: false,
        }
    }

    fn portrait(&self) -> DeviceInfo {
        DeviceInfo::new(self.name)
            .with_user_agent(self.user_agent)
            .with_viewport_size(self.width, self.height)
            .with_scale(self.scale)
            .with_mobile(self.mobile)
            .with_touch(self.touch)
    }

    fn landscape(&self) -> DeviceInfo {
        DeviceInfo {
            name: format!("{} landscape", self.name),
            ..self.portrait()
        }
        .with_viewport_size(self.height, self.width)
        .with_landscape(true)
    }
}

const UA_BB10: &str = "Mozilla/5.0 (BB10; Touch) AppleWebKit/537.10+ (KHTML, like Gecko) \
Version/10.0.9.2372 Mobile Safari/537.10+";
const UA_PLAYBOOK: &str = "Mozilla/5.0 (PlayBook; U; RIM Tablet OS 2.1.0; en-US) \
AppleWebKit/536.2+ (KHTML like Gecko) Version/7.2.1.0 Safari/536.2+";
const UA_NOTE_3: &str = "Mozilla/5.0 (Linux; U; Android 4.3; en-us; SM-N900T Build/JSS15J) \
AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30";
const UA_NOTE_2: &str = "Mozilla/5.0 (Linux; U; Android 4.1; en-us; GT-N7100 Build/JRO03C) \
AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30";
const UA_S3: &str = "Mozilla/5.0 (Linux; U; Android 4.0; en-us; GT-I9300 Build/IMM76D) \
AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30";
const UA_S5: &str = "Mozilla/5.0 (Linux; Android 5.0; SM-G900P Build/LRX21T) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_S8: &str = "Mozilla/5.0 (Linux; Android 7.0; SM-G950U Build/NRD90M) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/62.0.3202.84 Mobile Safari/537.36";
const UA_S9: &str = "Mozilla/5.0 (Linux; Android 8.0.0; SM-G965U Build/R16NW) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/63.0.3239.111 Mobile Safari/537.36";
const UA_KINDLE: &str = "Mozilla/5.0 (Linux; U; en-us; KFAPWI Build/JDQ39) \
AppleWebKit/535.19 (KHTML, like Gecko) Silk/3.13 Safari/535.19 Silk-Accelerated=true";
const UA_LG_L70: &str = "Mozilla/5.0 (Linux; U; Android 4.4.2; en-us; LGMS323 \
Build/KOT49I.MS32310c) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 \
Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_LUMIA_550: &str = "Mozilla/5.0 (Windows Phone 10.0; Android 4.2.1; Microsoft; \
Lumia 550) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Mobile \
Safari/537.36 Edge/14.14263";
const UA_LUMIA_950: &str = "Mozilla/5.0 (Windows Phone 10.0; Android 4.2.1; Microsoft; \
Lumia 950) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Mobile \
Safari/537.36 Edge/14.14263";
const UA_MOTO_G4: &str = "Mozilla/5.0 (Linux; Android 6.0.1; Moto G (4)) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_NEXUS_10: &str = "Mozilla/5.0 (Linux; Android 6.0.1; Nexus 10 Build/MOB31T) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Safari/537.36";
const UA_NEXUS_4: &str = "Mozilla/5.0 (Linux; Android 4.4.2; Nexus 4 Build/KOT49H) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_NEXUS_5: &str = "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_NEXUS_5X: &str = "Mozilla/5.0 (Linux; Android 8.0.0; Nexus 5X Build/OPR4.170623.006) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_NEXUS_6: &str = "Mozilla/5.0 (Linux; Android 7.1.1; Nexus 6 Build/N6F26U) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_NEXUS_6P: &str = "Mozilla/5.0 (Linux; Android 8.0.0; Nexus 6P Build/OPP3.170518.006) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_NEXUS_7: &str = "Mozilla/5.0 (Linux; Android 6.0.1; Nexus 7 Build/MOB30X) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Safari/537.36";
const UA_PIXEL_2: &str = "Mozilla/5.0 (Linux; Android 8.0; Pixel 2 Build/OPD3.170816.012) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 Mobile Safari/537.36";
const UA_PIXEL_2_XL: &str = "Mozilla/5.0 (Linux; Android 8.0.0; Pixel 2 XL \
Build/OPD1.170816.004) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3765.0 \
Mobile Safari/537.36";
const UA_IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 11_0 like Mac OS X) AppleWebKit/604.1.34 \
(KHTML, like Gecko) Version/11.0 Mobile/15A5341f Safari/604.1";
const UA_IPHONE_4: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 7_1_2 like Mac OS X) \
AppleWebKit/537.51.2 (KHTML, like Gecko) Version/7.0 Mobile/11D257 Safari/9537.53";
const UA_IPHONE_10: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 10_3_1 like Mac OS X) \
AppleWebKit/603.1.30 (KHTML, like Gecko) Version/10.0 Mobile/14E304 Safari/602.1";
const UA_IPHONE_11: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 11_0 like Mac OS X) \
AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Mobile/15A372 Safari/604.1";
const UA_IPHONE_12: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_0 like Mac OS X) \
AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.0 Mobile/15E148 Safari/604.1";

const PRESETS: &[Preset] = &[
    Preset::phone("BlackBerry Z30", UA_BB10, 360, 640, 2.0),
    Preset::phone("Blackberry PlayBook", UA_PLAYBOOK, 600, 1024, 1.0),
    Preset::phone("Galaxy Note 3", UA_NOTE_3, 360, 640, 3.0),
    Preset::phone("Galaxy Note II", UA_NOTE_2, 360, 640, 2.0),
    Preset::phone("Galaxy S III", UA_S3, 360, 640, 2.0),
    Preset::phone("Galaxy S5", UA_S5, 360, 640, 3.0),
    Preset::phone("Galaxy S8", UA_S8, 360, 740, 3.0),
    Preset::phone("Galaxy S9+", UA_S9, 320, 658, 4.5),
    Preset::phone("Kindle Fire HDX", UA_KINDLE, 800, 1280, 2.0),
    Preset::laptop("Laptop with touch", 1280, 950, 1.0, true),
    Preset::laptop("Laptop with HiDPI screen", 1440, 900, 2.0, false),
    Preset::laptop("Laptop with MDPI screen", 1280, 800, 1.0, false),
    Preset::phone("LG Optimus L70", UA_LG_L70, 384, 640, 1.25),
    Preset::phone("Microsoft Lumia 550", UA_LUMIA_550, 640, 360, 2.0),
    Preset::phone("Microsoft Lumia 950", UA_LUMIA_950, 360, 640, 4.0),
    Preset::phone("Moto G4", UA_MOTO_G4, 360, 640, 3.0),
    Preset::phone("Nexus 10", UA_NEXUS_10, 800, 1280, 2.0),
    Preset::phone("Nexus 4", UA_NEXUS_4, 384, 640, 2.0),
    Preset::phone("Nexus 5", UA_NEXUS_5, 360, 640, 3.0),
    Preset::phone("Nexus 5X", UA_NEXUS_5X, 412, 732, 2.625),
    Preset::phone("Nexus 6", UA_NEXUS_6, 412, 732, 3.5),
    Preset::phone("Nexus 6P", UA_NEXUS_6P, 412, 732, 3.5),
    Preset::phone("Nexus 7", UA_NEXUS_7, 600, 960, 2.0),
    Preset::phone("Pixel 2", UA_PIXEL_2, 411, 731, 2.625),
    Preset::phone("Pixel 2 XL", UA_PIXEL_2_XL, 411, 823, 3.5),
    Preset::phone("iPad", UA_IPAD, 768, 1024, 2.0),
    Preset::phone("iPad Mini", UA_IPAD, 768, 1024, 2.0),
    Preset::phone("iPad Pro", UA_IPAD, 1024, 1366, 2.0),
    Preset::phone("iPhone 4", UA_IPHONE_4, 320, 480, 2.0),
    Preset::phone("iPhone 5", UA_IPHONE_10, 320, 568, 2.0),
    Preset::phone("iPhone 6", UA_IPHONE_11, 375, 667, 2.0),
    Preset::phone("iPhone 6 Plus", UA_IPHONE_11, 414, 736, 3.0),
    Preset::phone("iPhone 7", UA_IPHONE_11, 375, 667, 2.0),
    Preset::phone("iPhone 7 Plus", UA_IPHONE_11, 414, 736, 3.0),
    Preset::phone("iPhone 8", UA_IPHONE_11, 375, 667, 2.0),
    Preset::phone("iPhone 8 Plus", UA_IPHONE_11, 414, 736, 3.0),
    Preset::phone("iPhone SE", UA_IPHONE_10, 320, 568, 2.0),
    Preset::phone("iPhone X", UA_IPHONE_11, 375, 812, 3.0),
    Preset::phone("iPhone XR", UA_IPHONE_12, 414, 896, 3.0),
];

/// A preset together with its position-derived id.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    id: usize,
    info: DeviceInfo,
}

impl RegistryEntry {
    /// 1-based id
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Preset properties
    #[must_use]
    pub const fn info(&self) -> &DeviceInfo {
        &self.info
    }
}

/// Ordered, immutable collection of device presets.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    entries: Vec<RegistryEntry>,
}

impl DeviceRegistry {
    /// Registry of all built-in presets, built on first use.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<DeviceRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let registry = Self::from_devices(PRESETS.iter().flat_map(|preset| {
                let landscape = preset.rotates.then(|| preset.landscape());
                std::iter::once(preset.portrait()).chain(landscape)
            }));
            tracing::debug!(presets = registry.len(), "device registry populated");
            registry
        })
    }

    /// Build a registry from devices in the given order, numbering from 1.
    pub fn from_devices(devices: impl IntoIterator<Item = DeviceInfo>) -> Self {
        let entries = devices
            .into_iter()
            .enumerate()
            .map(|(index, info)| RegistryEntry {
                id: index + 1,
                info,
            })
            .collect();
        Self { entries }
    }

    /// Copy of the first preset whose name matches exactly (case-sensitive).
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<DeviceInfo> {
        self.entries
            .iter()
            .find(|entry| entry.info.name == name)
            .map(|entry| entry.info.clone())
    }

    /// Copy of the preset with the given id.
    #[must_use]
    pub fn lookup_by_id(&self, id: usize) -> Option<DeviceInfo> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.info.clone())
    }

    /// All entries in discovery order
    #[must_use]
    pub fn list_all(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Number of presets
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no presets are available
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
