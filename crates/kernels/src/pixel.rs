//! Pure-computation RGBA8 conversion of a shaded [`Frame`].
//!
//! Always available (no feature gate) so hosts that blit raw bytes can share
//! the conversion with the PNG snapshot path.

use crate::pass::Frame;

/// Quantizes every pixel to four bytes (R, G, B, A).
///
/// The buffer length is `width * height * 4`.
pub fn frame_to_rgba(frame: &Frame) -> Vec<u8> {
    frame
        .pixels()
        .iter()
        .flat_map(|c| c.to_rgba8())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ShadingPass;
    use crate::{fill, flag};
    use tint_core::{BoundingRect, Color, ParameterList};

    #[test]
    fn frame_to_rgba_correct_length() {
        let kernel = fill::FILL_GREEN;
        let frame = ShadingPass::new(kernel.bind(ParameterList::new()).unwrap(), 8, 4)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(frame_to_rgba(&frame).len(), 8 * 4 * 4);
    }

    #[test]
    fn kernel_output_alpha_always_255() {
        let kernel = flag::FLAG_HORIZONTAL_TRICOLOR;
        let bounds = BoundingRect::from_size(6.0, 6.0);
        let frame = ShadingPass::new(kernel.bind(ParameterList::new().with(bounds)).unwrap(), 6, 6)
            .unwrap()
            .run()
            .unwrap();
        let buf = frame_to_rgba(&frame);
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn fill_color_bytes_round_trip() {
        let c = Color::from_channels(12, 200, 99);
        let kernel = fill::FILL;
        let frame = ShadingPass::new(kernel.bind(ParameterList::new().with(c)).unwrap(), 1, 1)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(frame_to_rgba(&frame), vec![12, 200, 99, 255]);
    }
}
