//! Embedded assets for Reception Desk
//!
//! Uses rust-embed to bundle icons at compile time, layered over the
//! gpui-component icon set.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// Desk icons not shipped with gpui-component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    Ambulance,
    Calendar,
    Bed,
    MapPin,
    Clock,
    Phone,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Ambulance => "icons/ambulance.svg",
            CustomIconName::Calendar => "icons/calendar.svg",
            CustomIconName::Bed => "icons/bed.svg",
            CustomIconName::MapPin => "icons/map-pin.svg",
            CustomIconName::Clock => "icons/clock.svg",
            CustomIconName::Phone => "icons/phone.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_custom_icon_is_embedded() {
        for icon in [
            CustomIconName::Ambulance,
            CustomIconName::Calendar,
            CustomIconName::Bed,
            CustomIconName::MapPin,
            CustomIconName::Clock,
            CustomIconName::Phone,
        ] {
            let path = icon.path();
            assert!(Assets::get(path.as_ref()).is_some(), "missing {path}");
        }
    }
}
