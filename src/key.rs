//! Property identity types.

use core::fmt;

/// Format-group half of a [`PropertyKey`].
///
/// An opaque 128-bit identifier naming a family of related properties
/// (GUID-valued in practice). Groups matter on their own: the writability
/// policy matches on the group portion of a key, not the full key; see
/// [`PropertyKey::same_group`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertyGroup(u128);

impl PropertyGroup {
    /// Create a group from its raw 128-bit value.
    pub const fn new(id: u128) -> Self {
        Self(id)
    }

    /// Document summary description set (title, subject, author).
    pub const DESCRIPTION: Self = Self::new(0xF29F85E0_4FF9_1068_AB91_08002B27B3D9);

    /// Media file summary set (copyright, rating).
    pub const MEDIA: Self = Self::new(0x64440492_4C8B_11D1_8B70_080036B11A03);

    /// Photo capture set (camera make and model).
    pub const PHOTO: Self = Self::new(0x14B81DA1_0135_4D31_96D9_6CBFC9671A99);

    /// Raster image properties (bit depth, pixel dimensions).
    pub const IMAGE: Self = Self::new(0x6444048F_4C8B_11D1_8B70_080036B11A03);

    /// The raw 128-bit value.
    pub const fn as_u128(self) -> u128 {
        self.0
    }
}

impl fmt::Display for PropertyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (self.0 >> 96) as u32,
            (self.0 >> 80) as u16,
            (self.0 >> 64) as u16,
            (self.0 >> 48) as u16,
            self.0 & 0xFFFF_FFFF_FFFF
        )
    }
}

/// Canonical identity of one metadata field.
///
/// Two-part key: a [`PropertyGroup`] plus an item id within that group.
/// Identities are independent of any container's internal addressing
/// syntax; the mapping table binds them to container query paths.
///
/// Item ids can repeat across groups ([`SUBJECT`](PropertyKey::SUBJECT)
/// and [`HORIZONTAL_SIZE`](PropertyKey::HORIZONTAL_SIZE) share item 3);
/// only the pair is canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertyKey {
    /// Format group the field belongs to.
    pub group: PropertyGroup,
    /// Item id within the group.
    pub item: u32,
}

impl PropertyKey {
    /// Create a key from its two parts.
    pub const fn new(group: PropertyGroup, item: u32) -> Self {
        Self { group, item }
    }

    /// Document title.
    pub const TITLE: Self = Self::new(PropertyGroup::DESCRIPTION, 2);
    /// Document subject.
    pub const SUBJECT: Self = Self::new(PropertyGroup::DESCRIPTION, 3);
    /// Document author.
    pub const AUTHOR: Self = Self::new(PropertyGroup::DESCRIPTION, 4);
    /// Star rating.
    pub const RATING: Self = Self::new(PropertyGroup::MEDIA, 9);
    /// Copyright notice.
    pub const COPYRIGHT: Self = Self::new(PropertyGroup::MEDIA, 11);
    /// Camera manufacturer (EXIF Make).
    pub const CAMERA_MANUFACTURER: Self = Self::new(PropertyGroup::PHOTO, 271);
    /// Camera model (EXIF Model).
    pub const CAMERA_MODEL: Self = Self::new(PropertyGroup::PHOTO, 272);
    /// Horizontal pixel count.
    pub const HORIZONTAL_SIZE: Self = Self::new(PropertyGroup::IMAGE, 3);
    /// Vertical pixel count.
    pub const VERTICAL_SIZE: Self = Self::new(PropertyGroup::IMAGE, 4);
    /// Bits per pixel.
    pub const BIT_DEPTH: Self = Self::new(PropertyGroup::IMAGE, 7);

    /// Whether two keys name fields in the same format group.
    ///
    /// This is the partial match the writability policy runs on: writability
    /// is granted per group, so [`TITLE`](Self::TITLE) and
    /// [`AUTHOR`](Self::AUTHOR) always answer alike.
    pub const fn same_group(self, other: PropertyKey) -> bool {
        self.group.0 == other.group.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn same_group_ignores_item() {
        assert!(PropertyKey::TITLE.same_group(PropertyKey::AUTHOR));
        assert!(PropertyKey::RATING.same_group(PropertyKey::COPYRIGHT));
        assert!(!PropertyKey::TITLE.same_group(PropertyKey::RATING));
    }

    #[test]
    fn shared_item_ids_stay_distinct() {
        assert_eq!(PropertyKey::SUBJECT.item, PropertyKey::HORIZONTAL_SIZE.item);
        assert_ne!(PropertyKey::SUBJECT, PropertyKey::HORIZONTAL_SIZE);
        assert!(!PropertyKey::SUBJECT.same_group(PropertyKey::HORIZONTAL_SIZE));
    }

    #[test]
    fn group_display_is_guid_shaped() {
        assert_eq!(
            PropertyGroup::DESCRIPTION.to_string(),
            "f29f85e0-4ff9-1068-ab91-08002b27b3d9"
        );
    }

    #[test]
    fn key_display_carries_both_parts() {
        assert_eq!(
            PropertyKey::TITLE.to_string(),
            "f29f85e0-4ff9-1068-ab91-08002b27b3d9/2"
        );
    }

    #[test]
    fn raw_roundtrip() {
        let group = PropertyGroup::new(0x1234);
        assert_eq!(group.as_u128(), 0x1234);
    }
}
