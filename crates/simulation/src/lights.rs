//! Orbit math and the fixed four-light rig.

use bevy::prelude::*;

/// Orbit radius shared by all four lights, in world units.
pub const ORBIT_RADIUS: f32 = 10.0;

/// Falloff distance shared by all four lights.
pub const LIGHT_RANGE: f32 = 500.0;

/// Luminous intensity shared by all four lights, in lumens.
pub const LIGHT_INTENSITY: f32 = 1_500_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sin,
    Cos,
}

impl Waveform {
    pub fn eval(self, phase: f32) -> f32 {
        match self {
            Waveform::Sin => phase.sin(),
            Waveform::Cos => phase.cos(),
        }
    }
}

/// Time-parameterized planar orbit: x and z are independent sinusoids of the
/// shared time sample, each with its own rate.
#[derive(Debug, Clone, Copy)]
pub struct OrbitPath {
    pub x_wave: Waveform,
    pub x_rate: f32,
    pub z_wave: Waveform,
    pub z_rate: f32,
}

impl OrbitPath {
    /// Planar (x, z) position at time `t` seconds.
    pub fn position(&self, t: f32) -> Vec2 {
        Vec2::new(
            self.x_wave.eval(t * self.x_rate) * ORBIT_RADIUS,
            self.z_wave.eval(t * self.z_rate) * ORBIT_RADIUS,
        )
    }
}

/// Identity of one light in the rig. Color, spawn height, and orbit path are
/// fixed at creation; only the planar position moves afterwards.
#[derive(Debug, Clone, Copy)]
pub struct LightSpec {
    pub color: Color,
    pub spawn: Vec3,
    pub path: OrbitPath,
}

/// The four orbiting lights. Rates and sine/cosine choices alternate per
/// light so the orbits never phase-lock.
pub fn light_rig() -> [LightSpec; 4] {
    use Waveform::{Cos, Sin};
    [
        LightSpec {
            color: Color::srgb_u8(0x0E, 0x09, 0xDC),
            spawn: Vec3::new(0.0, 10.0, 30.0),
            path: OrbitPath {
                x_wave: Sin,
                x_rate: 0.1,
                z_wave: Cos,
                z_rate: 0.2,
            },
        },
        LightSpec {
            color: Color::srgb_u8(0x1C, 0xD1, 0xE1),
            spawn: Vec3::new(0.0, -10.0, -30.0),
            path: OrbitPath {
                x_wave: Cos,
                x_rate: 0.3,
                z_wave: Sin,
                z_rate: 0.4,
            },
        },
        LightSpec {
            color: Color::srgb_u8(0x18, 0xC0, 0x2C),
            spawn: Vec3::new(30.0, 10.0, 0.0),
            path: OrbitPath {
                x_wave: Sin,
                x_rate: 0.5,
                z_wave: Sin,
                z_rate: 0.6,
            },
        },
        LightSpec {
            color: Color::srgb_u8(0xEE, 0x3B, 0xCF),
            spawn: Vec3::new(-30.0, 10.0, 0.0),
            path: OrbitPath {
                x_wave: Sin,
                x_rate: 0.7,
                z_wave: Cos,
                z_rate: 0.8,
            },
        },
    ]
}
