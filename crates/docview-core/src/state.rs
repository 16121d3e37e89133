//! Saved state that survives a configuration change.

use crate::color::Argb;
use crate::error::StateResult;
use crate::parcel::{ParcelReader, ParcelWriter};

/// Snapshot of every persisted DocumentView property.
///
/// Field order matches the encoded layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedState {
    pub border_color: Argb,
    pub border_width: f32,
    pub decor_color: Argb,
    pub decor_size: f32,
    pub title_color: Argb,
    pub title_size: f32,
    pub title: String,
    pub subtitle_color: Argb,
    pub subtitle_size: f32,
    pub subtitle: String,
}

impl SavedState {
    /// Encode into the flat parcel layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = ParcelWriter::new();
        out.write_i32(self.border_color.to_bits_i32());
        out.write_f32(self.border_width);
        out.write_i32(self.decor_color.to_bits_i32());
        out.write_f32(self.decor_size);
        out.write_i32(self.title_color.to_bits_i32());
        out.write_f32(self.title_size);
        out.write_string(&self.title);
        out.write_i32(self.subtitle_color.to_bits_i32());
        out.write_f32(self.subtitle_size);
        out.write_string(&self.subtitle);
        out.into_bytes()
    }

    /// Decode the layout written by [`SavedState::encode`]. Null strings
    /// decode as empty.
    pub fn decode(data: &[u8]) -> StateResult<Self> {
        let mut input = ParcelReader::new(data);
        let border_color = Argb::from_bits_i32(input.read_i32()?);
        let border_width = input.read_f32()?;
        let decor_color = Argb::from_bits_i32(input.read_i32()?);
        let decor_size = input.read_f32()?;
        let title_color = Argb::from_bits_i32(input.read_i32()?);
        let title_size = input.read_f32()?;
        let title = input.read_string()?.unwrap_or_default();
        let subtitle_color = Argb::from_bits_i32(input.read_i32()?);
        let subtitle_size = input.read_f32()?;
        let subtitle = input.read_string()?.unwrap_or_default();

        if input.remaining() > 0 {
            log::debug!("Ignoring {} trailing saved state bytes", input.remaining());
        }

        Ok(Self {
            border_color,
            border_width,
            decor_color,
            decor_size,
            title_color,
            title_size,
            title,
            subtitle_color,
            subtitle_size,
            subtitle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;

    fn sample() -> SavedState {
        SavedState {
            border_color: Argb(0xFF12_3456),
            border_width: 2.75,
            decor_color: Argb(0x80FF_0000),
            decor_size: 33.3,
            title_color: Argb::BLACK,
            title_size: 48.0,
            title: "Quarterly report".to_string(),
            subtitle_color: Argb::GRAY,
            subtitle_size: 0.1,
            subtitle: String::new(),
        }
    }

    #[test]
    fn test_round_trip_every_field() {
        let state = sample();
        let decoded = SavedState::decode(&state.encode()).unwrap();
        assert_eq!(decoded, state);
        assert_eq!(decoded.border_width.to_bits(), state.border_width.to_bits());
        assert_eq!(decoded.decor_size.to_bits(), state.decor_size.to_bits());
        assert_eq!(decoded.subtitle_size.to_bits(), state.subtitle_size.to_bits());
    }

    #[test]
    fn test_round_trip_empty_texts() {
        let mut state = sample();
        state.title.clear();
        let decoded = SavedState::decode(&state.encode()).unwrap();
        assert_eq!(decoded.title, "");
        assert_eq!(decoded.subtitle, "");
    }

    #[test]
    fn test_field_order() {
        let bytes = sample().encode();
        assert_eq!(&bytes[0..4], &(0xFF12_3456u32 as i32).to_le_bytes());
        assert_eq!(&bytes[4..8], &2.75f32.to_le_bytes());
        assert_eq!(&bytes[8..12], &(0x80FF_0000u32 as i32).to_le_bytes());
        assert_eq!(&bytes[12..16], &33.3f32.to_le_bytes());
        assert_eq!(&bytes[20..24], &48.0f32.to_le_bytes());
        assert_eq!(&bytes[24..28], &16i32.to_le_bytes());
    }

    #[test]
    fn test_null_text_decodes_empty() {
        let mut out = ParcelWriter::new();
        out.write_i32(0);
        out.write_f32(1.0);
        out.write_i32(0);
        out.write_f32(1.0);
        out.write_i32(0);
        out.write_f32(1.0);
        out.write_null_string();
        out.write_i32(0);
        out.write_f32(1.0);
        out.write_null_string();

        let state = SavedState::decode(&out.into_bytes()).unwrap();
        assert!(state.title.is_empty());
        assert!(state.subtitle.is_empty());
    }

    #[test]
    fn test_truncated_input_fails() {
        let bytes = sample().encode();
        let result = SavedState::decode(&bytes[..bytes.len() - 4]);
        assert!(matches!(result, Err(StateError::Truncated { .. })));
        assert!(SavedState::decode(&[]).is_err());
    }
}
