//! Device class reported by the host; mobile devices always get touch buttons.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn from_is_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DeviceClass::Desktop => "desktop",
            DeviceClass::Mobile => "mobile",
        };
        write!(f, "{label}")
    }
}
