gvr_enum! {
    /// Balance between CPU load and spatial rendering quality.
    pub enum AudioRenderingMode as "gvr_audio_rendering_mode" {
        /// Stereo panning of all sound objects. Disables HRTF-based rendering.
        StereoPanning = 0 => "GVR_AUDIO_RENDERING_STEREO_PANNING",
        /// HRTF-based rendering over a virtual cube of 8 loudspeakers.
        BinauralLowQuality = 1 => "GVR_AUDIO_RENDERING_BINAURAL_LOW_QUALITY",
        /// HRTF-based rendering over 16 virtual loudspeakers distributed
        /// around the listener's head.
        BinauralHighQuality = 2 => "GVR_AUDIO_RENDERING_BINAURAL_HIGH_QUALITY",
    }
}

gvr_enum! {
    /// Room surface materials. The ordinals index the runtime's acoustic tables.
    pub enum AudioMaterialType as "gvr_audio_material_type" {
        /// Acoustically transparent, reflects no sound.
        Transparent = 0 => "GVR_AUDIO_MATERIAL_TRANSPARENT",
        AcousticCeilingTiles = 1 => "GVR_AUDIO_MATERIAL_ACOUSTIC_CEILING_TILES",
        BrickBare = 2 => "GVR_AUDIO_MATERIAL_BRICK_BARE",
        BrickPainted = 3 => "GVR_AUDIO_MATERIAL_BRICK_PAINTED",
        ConcreteBlockCoarse = 4 => "GVR_AUDIO_MATERIAL_CONCRETE_BLOCK_COARSE",
        ConcreteBlockPainted = 5 => "GVR_AUDIO_MATERIAL_CONCRETE_BLOCK_PAINTED",
        CurtainHeavy = 6 => "GVR_AUDIO_MATERIAL_CURTAIN_HEAVY",
        FiberGlassInsulation = 7 => "GVR_AUDIO_MATERIAL_FIBER_GLASS_INSULATION",
        GlassThin = 8 => "GVR_AUDIO_MATERIAL_GLASS_THIN",
        GlassThick = 9 => "GVR_AUDIO_MATERIAL_GLASS_THICK",
        Grass = 10 => "GVR_AUDIO_MATERIAL_GRASS",
        LinoleumOnConcrete = 11 => "GVR_AUDIO_MATERIAL_LINOLEUM_ON_CONCRETE",
        Marble = 12 => "GVR_AUDIO_MATERIAL_MARBLE",
        ParquetOnConcrete = 13 => "GVR_AUDIO_MATERIAL_PARQUET_ON_CONCRETE",
        PlasterRough = 14 => "GVR_AUDIO_MATERIAL_PLASTER_ROUGH",
        PlasterSmooth = 15 => "GVR_AUDIO_MATERIAL_PLASTER_SMOOTH",
        PlywoodPanel = 16 => "GVR_AUDIO_MATERIAL_PLYWOOD_PANEL",
        /// Polished concrete or tile.
        PolishedConcreteOrTile = 17 => "GVR_AUDIO_MATERIAL_POLISHED_CONCRETE_OR_TILE",
        SheetRock = 18 => "GVR_AUDIO_MATERIAL_SHEET_ROCK",
        /// Surface of water or ice.
        WaterOrIceSurface = 19 => "GVR_AUDIO_MATERIAL_WATER_OR_ICE_SURFACE",
        WoodCeiling = 20 => "GVR_AUDIO_MATERIAL_WOOD_CEILING",
        WoodPanel = 21 => "GVR_AUDIO_MATERIAL_WOOD_PANEL",
    }
}

/// The C++ name of [`AudioMaterialType`].
pub type AudioMaterialName = AudioMaterialType;

/// Identifies a sound object or sound field inside the audio runtime.
pub type AudioSoundId = i32;

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn rendering_mode_ordinals() {
        assert_eq!(AudioRenderingMode::StereoPanning as i32, 0);
        assert_eq!(AudioRenderingMode::BinauralLowQuality as i32, 1);
        assert_eq!(AudioRenderingMode::BinauralHighQuality as i32, 2);
        assert_eq!(AudioRenderingMode::COUNT, 3);
    }

    #[test]
    fn materials_are_contiguous() {
        assert_eq!(AudioMaterialType::COUNT, 22);
        for (ordinal, material) in AudioMaterialType::ALL.iter().enumerate() {
            assert_eq!(i32::from(*material), ordinal as i32);
            assert_eq!(AudioMaterialType::try_from(ordinal as i32), Ok(*material));
        }
        assert!(AudioMaterialType::try_from(22).is_err());
    }

    #[test]
    fn material_spot_checks() {
        assert_eq!(AudioMaterialType::Transparent as i32, 0);
        assert_eq!(AudioMaterialType::Grass as i32, 10);
        assert_eq!(AudioMaterialType::PolishedConcreteOrTile as i32, 17);
        assert_eq!(AudioMaterialType::WoodPanel as i32, 21);
        assert_eq!(AudioMaterialType::Marble.as_str(), "GVR_AUDIO_MATERIAL_MARBLE");
    }
}
