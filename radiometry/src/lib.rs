/// RGB `Color` with channel arithmetic, saturation and the named palette shared by textures and
/// lights.
pub mod color;
