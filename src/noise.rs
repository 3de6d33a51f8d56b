use crate::constants::{NOISE_ALPHA, NOISE_AMPLITUDE, NOISE_BASE_RGB};
use rand::Rng;

/// Fill an RGBA buffer with faint near-white grain. Each pixel gets one
/// random offset shared by its three color channels.
pub fn fill_noise<R: Rng + ?Sized>(pixels: &mut [u8], rng: &mut R) {
    for px in pixels.chunks_exact_mut(4) {
        let n: f32 = rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
        px[0] = to_channel(NOISE_BASE_RGB[0] + n);
        px[1] = to_channel(NOISE_BASE_RGB[1] + n);
        px[2] = to_channel(NOISE_BASE_RGB[2] + n);
        px[3] = NOISE_ALPHA;
    }
}

#[inline]
fn to_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[inline]
pub fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}
