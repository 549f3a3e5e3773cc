use crate::shared::region::Region;

/// The per-frame "faces present" signal plus the regions behind it.
///
/// Recording decisions only look at [`FacePresence::is_present`]; the
/// regions are carried along for annotation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacePresence {
    regions: Vec<Region>,
}

impl FacePresence {
    pub fn from_regions(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn is_present(&self) -> bool {
        !self.regions.is_empty()
    }

    pub fn count(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}
